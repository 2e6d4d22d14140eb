//! Command handlers.

use std::path::Path;
use storyreel::{
    CompletionMode, ExtendOptions, HttpStoryWriter, HttpStoryboardRenderer, JsonError, Project,
    ProjectSummary, StoryreelConfig, StoryreelResult, complete_storyboards, extend_project,
};
use tracing::info;

/// Extend a project file with new shots.
pub async fn run_extend(
    config: StoryreelConfig,
    project_path: &Path,
    prompt: Option<String>,
    mode: CompletionMode,
    turbo: bool,
    output: Option<&Path>,
) -> StoryreelResult<()> {
    let project = Project::from_file(project_path)?;
    let writer = HttpStoryWriter::new(&config.services)?;

    let mut options = ExtendOptions::default().with_turbo(turbo);
    if let Some(prompt) = prompt {
        options = options.with_prompt(prompt);
    }

    let (result, report) = extend_project(writer, config.story, project, mode, &options).await?;
    info!(
        shots = report.shots(),
        start_ms = report.start_ms(),
        end_ms = report.end_ms(),
        captions = report.captions(),
        "Story extended"
    );

    write_project(&result, output)
}

/// Complete the storyboards of a project file.
pub async fn run_storyboards(
    config: StoryreelConfig,
    project_path: &Path,
    mode: CompletionMode,
    output: Option<&Path>,
) -> StoryreelResult<()> {
    let project = Project::from_file(project_path)?;
    let renderer = HttpStoryboardRenderer::new(&config.services)?;

    let (result, report) = complete_storyboards(renderer, config.storyboard, project, mode).await?;
    info!(
        shots = report.shots(),
        rendered = report.rendered(),
        skipped = report.skipped(),
        "Storyboards completed"
    );

    write_project(&result, output)
}

/// Print a JSON summary of a project file.
pub fn run_inspect(project_path: &Path) -> StoryreelResult<()> {
    let project = Project::from_file(project_path)?;
    let summary = ProjectSummary::new(&project);
    let json = serde_json::to_string_pretty(&summary)
        .map_err(|e| JsonError::new(format!("Failed to serialize summary: {}", e)))?;
    println!("{}", json);
    Ok(())
}

fn write_project(project: &Project, output: Option<&Path>) -> StoryreelResult<()> {
    match output {
        Some(path) => {
            project.to_file(path)?;
            info!(path = %path.display(), "Project written");
        }
        None => println!("{}", project.to_json()?),
    }
    Ok(())
}
