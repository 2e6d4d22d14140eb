//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use storyreel::CompletionMode;

/// Storyreel - extend and complete story timelines with generative services
#[derive(Parser, Debug)]
#[command(name = "storyreel")]
#[command(about = "Extend and complete story timelines with generative services", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file, replacing the home and working directory files
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Continue the story with new shots
    Extend {
        /// Path to the project JSON file
        #[arg(long)]
        project: PathBuf,

        /// What the continuation should be about (defaults to the project description)
        #[arg(long)]
        prompt: Option<String>,

        /// Return the whole project (full) or only the new segments (partial)
        #[arg(long, default_value = "partial")]
        mode: CompletionMode,

        /// Prefer faster, cheaper generation
        #[arg(long)]
        turbo: bool,

        /// Write the result here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Create, prompt and render missing storyboards
    Storyboards {
        /// Path to the project JSON file
        #[arg(long)]
        project: PathBuf,

        /// Return the whole project (full) or only the new segments (partial)
        #[arg(long, default_value = "partial")]
        mode: CompletionMode,

        /// Write the result here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print a summary of a project
    Inspect {
        /// Path to the project JSON file
        #[arg(long)]
        project: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn extend_defaults_to_partial() {
        let cli = Cli::parse_from(["storyreel", "extend", "--project", "story.json"]);
        match cli.command {
            Commands::Extend {
                project,
                prompt,
                mode,
                turbo,
                output,
            } => {
                assert_eq!(project, PathBuf::from("story.json"));
                assert!(prompt.is_none());
                assert_eq!(mode, CompletionMode::Partial);
                assert!(!turbo);
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::parse_from([
            "storyreel",
            "storyboards",
            "--project",
            "story.json",
            "--mode",
            "full",
            "--output",
            "out.json",
            "-v",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Storyboards { mode, output, .. } => {
                assert_eq!(mode, CompletionMode::Full);
                assert_eq!(output, Some(PathBuf::from("out.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let result = Cli::try_parse_from([
            "storyreel",
            "extend",
            "--project",
            "story.json",
            "--mode",
            "merge",
        ]);
        assert!(result.is_err());
    }
}
