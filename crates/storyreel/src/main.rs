//! Storyreel CLI binary.
//!
//! This binary provides command-line access to Storyreel's functionality:
//! - Extend a story with new shots
//! - Complete missing storyboards
//! - Inspect a project timeline

use clap::Parser;
use storyreel::{StoryreelConfig, init_tracing};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_extend, run_inspect, run_storyboards};

    // .env may hold the API key
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => StoryreelConfig::from_file(path)?,
        None => StoryreelConfig::load()?,
    };

    match cli.command {
        Commands::Extend {
            project,
            prompt,
            mode,
            turbo,
            output,
        } => {
            run_extend(config, &project, prompt, mode, turbo, output.as_deref()).await?;
        }

        Commands::Storyboards {
            project,
            mode,
            output,
        } => {
            run_storyboards(config, &project, mode, output.as_deref()).await?;
        }

        Commands::Inspect { project } => {
            run_inspect(&project)?;
        }
    }

    Ok(())
}
