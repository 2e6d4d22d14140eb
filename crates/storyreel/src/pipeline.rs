//! One-call completion operations over a whole project.

use storyreel_core::{CompletionMode, Project, StoryConfig, StoryboardConfig};
use storyreel_error::StoryreelResult;
use storyreel_interface::{StoryWriter, StoryboardRenderer};
use storyreel_story::{
    CompletionSession, ExtendOptions, ExtendReport, StoryExtender, StoryboardCompleter,
    StoryboardReport,
};
use tracing::instrument;

/// Extend `project` with new shots and return the result in `mode`.
///
/// In [`CompletionMode::Full`] the returned project is the whole extended
/// project; in [`CompletionMode::Partial`] it holds only the new segments.
///
/// # Errors
///
/// Returns an error if the writer fails to produce shots.
#[instrument(skip_all, fields(mode = %mode, segments = project.segments.len()))]
pub async fn extend_project<W: StoryWriter>(
    writer: W,
    config: StoryConfig,
    project: Project,
    mode: CompletionMode,
    options: &ExtendOptions,
) -> StoryreelResult<(Project, ExtendReport)> {
    let extender = StoryExtender::new(writer, config);
    let mut session = CompletionSession::new(project, mode);
    let report = extender.extend(&mut session, options).await?;
    Ok((session.into_output(), report))
}

/// Complete the storyboards of every shot of `project` and return the result in `mode`.
///
/// # Errors
///
/// Returns the first rendering error; no project is returned in that case.
#[instrument(skip_all, fields(mode = %mode, segments = project.segments.len()))]
pub async fn complete_storyboards<R: StoryboardRenderer>(
    renderer: R,
    config: StoryboardConfig,
    project: Project,
    mode: CompletionMode,
) -> StoryreelResult<(Project, StoryboardReport)> {
    let completer = StoryboardCompleter::new(renderer, config);
    let mut session = CompletionSession::new(project, mode);
    let report = completer.complete(&mut session).await?;
    Ok((session.into_output(), report))
}
