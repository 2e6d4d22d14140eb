//! Story projects and their on-disk JSON form.

use crate::filter::filter_segment_indices;
use crate::{Entity, EntityIndex, FilteringMode, Segment, SegmentCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use storyreel_error::{JsonError, StorageError, StorageErrorKind, StoryreelError, StoryreelResult};
use tracing::{debug, instrument};

/// Project-wide settings.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct ProjectMeta {
    id: String,
    title: String,
    /// Story description, the fallback prompt when extending
    description: String,
    width: u32,
    height: u32,
    is_interactive: bool,
}

impl Default for ProjectMeta {
    fn default() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: String::new(),
            description: String::new(),
            width: 1024,
            height: 576,
            is_interactive: false,
        }
    }
}

impl ProjectMeta {
    /// Creates a new metadata builder.
    pub fn builder() -> ProjectMetaBuilder {
        ProjectMetaBuilder::default()
    }
}

/// A multi-track story timeline.
///
/// # Examples
///
/// ```
/// use storyreel_core::{Project, ProjectMeta, Segment, SegmentCategory};
///
/// let mut project = Project::new(ProjectMeta::default());
/// project.push(
///     Segment::builder()
///         .start_time_ms(0u64)
///         .end_time_ms(3000u64)
///         .category(SegmentCategory::Camera)
///         .build()
///         .unwrap(),
/// );
///
/// assert_eq!(project.end_time_ms(), 3000);
/// assert_eq!(project.shots().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Project-wide settings
    pub meta: ProjectMeta,
    /// Characters, locations and other recurring elements
    pub entities: Vec<Entity>,
    /// Every segment of every track
    pub segments: Vec<Segment>,
}

impl Project {
    /// Creates an empty project with the given metadata.
    pub fn new(meta: ProjectMeta) -> Self {
        Self {
            meta,
            entities: Vec::new(),
            segments: Vec::new(),
        }
    }

    /// Load a project from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid project.
    #[instrument(fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> StoryreelResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StorageError::new(StorageErrorKind::NotFound(
                path.display().to_string(),
            ))
            .into());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        let project: Project = content.parse()?;
        debug!(
            segments = project.segments.len(),
            entities = project.entities.len(),
            "Loaded project"
        );
        Ok(project)
    }

    /// Write the project to a JSON file, replacing any existing content.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    #[instrument(skip(self), fields(path = %path.as_ref().display()))]
    pub fn to_file(&self, path: impl AsRef<Path>) -> StoryreelResult<()> {
        let path = path.as_ref();
        let content = self.to_json()?;
        std::fs::write(path, content).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
        debug!(segments = self.segments.len(), "Saved project");
        Ok(())
    }

    /// Pretty-printed JSON representation.
    pub fn to_json(&self) -> StoryreelResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| JsonError::new(format!("Failed to serialize project: {}", e)).into())
    }

    /// Append a segment.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Look up an entity by id.
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Id-to-entity lookup table.
    pub fn entity_index(&self) -> EntityIndex<'_> {
        self.entities.iter().map(|e| (e.id.as_str(), e)).collect()
    }

    /// Latest segment end time, or 0 for an empty timeline.
    pub fn end_time_ms(&self) -> u64 {
        self.segments
            .iter()
            .map(|s| s.end_time_ms)
            .max()
            .unwrap_or(0)
    }

    /// Whether any segment belongs to `category`.
    pub fn has_category(&self, category: SegmentCategory) -> bool {
        self.segments.iter().any(|s| s.category == category)
    }

    /// Segments of one category, in timeline storage order.
    pub fn segments_in(&self, category: SegmentCategory) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(move |s| s.category == category)
    }

    /// Camera segments ordered by start time. Each one delimits a shot.
    pub fn shots(&self) -> Vec<&Segment> {
        let mut shots: Vec<&Segment> = self.segments_in(SegmentCategory::Camera).collect();
        shots.sort_by_key(|s| s.start_time_ms);
        shots
    }

    /// Positions of the segments selected by [`crate::filter_segments`].
    pub fn segment_indices(
        &self,
        mode: FilteringMode,
        reference: &Segment,
        category: Option<SegmentCategory>,
    ) -> Vec<usize> {
        filter_segment_indices(mode, reference, &self.segments, category)
    }

    /// Number of segments on each track.
    pub fn tracks(&self) -> BTreeMap<u32, usize> {
        let mut tracks = BTreeMap::new();
        for segment in &self.segments {
            *tracks.entry(segment.track).or_insert(0) += 1;
        }
        tracks
    }
}

impl std::str::FromStr for Project {
    type Err = StoryreelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
            .map_err(|e| JsonError::new(format!("Failed to parse project: {}", e)).into())
    }
}
