//! Full vs partial completion results.

use storyreel_core::{CompletionMode, Project, Segment};

/// The project being completed and the project that will be returned.
///
/// In [`CompletionMode::Full`] both are the same project: new segments are
/// appended to it and updates happen in place. In
/// [`CompletionMode::Partial`] the returned project starts empty (same
/// metadata) and only receives what was added or updated, while repairs
/// still land in the existing project.
///
/// # Examples
///
/// ```
/// use storyreel_core::{CompletionMode, Project, ProjectMeta, Segment};
/// use storyreel_story::CompletionSession;
///
/// let mut existing = Project::new(ProjectMeta::default());
/// existing.push(Segment::default());
///
/// let mut session = CompletionSession::new(existing, CompletionMode::Partial);
/// session.push(Segment::default());
///
/// assert_eq!(session.existing().segments.len(), 1);
/// assert_eq!(session.output().segments.len(), 1);
/// assert_eq!(session.into_output().segments.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CompletionSession {
    mode: CompletionMode,
    existing: Project,
    partial: Option<Project>,
}

impl CompletionSession {
    /// Start a completion of `existing`.
    pub fn new(existing: Project, mode: CompletionMode) -> Self {
        let partial = match mode {
            CompletionMode::Full => None,
            CompletionMode::Partial => Some(Project::new(existing.meta.clone())),
        };
        Self {
            mode,
            existing,
            partial,
        }
    }

    /// How results are returned.
    pub fn mode(&self) -> CompletionMode {
        self.mode
    }

    /// The project as it was given, plus any repairs.
    pub fn existing(&self) -> &Project {
        &self.existing
    }

    /// Mutable access to the existing project.
    pub fn existing_mut(&mut self) -> &mut Project {
        &mut self.existing
    }

    /// The project that will be returned.
    pub fn output(&self) -> &Project {
        self.partial.as_ref().unwrap_or(&self.existing)
    }

    /// Add a segment to the returned project.
    pub fn push(&mut self, segment: Segment) {
        match &mut self.partial {
            Some(partial) => partial.push(segment),
            None => self.existing.push(segment),
        }
    }

    /// Finish the session and return the result.
    pub fn into_output(self) -> Project {
        self.partial.unwrap_or(self.existing)
    }
}
