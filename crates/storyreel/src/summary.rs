//! Project overview for the `inspect` command.

use serde::Serialize;
use std::collections::BTreeMap;
use storyreel_core::{
    FilteringMode, LatentStory, Project, SegmentCategory, filter_segments, latent_story,
};

/// A short description of a project's timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    /// Project title
    pub title: String,
    /// End of the last segment
    pub duration_ms: u64,
    /// Number of camera segments
    pub shots: usize,
    /// Total number of segments
    pub segments: usize,
    /// Segment count per track
    pub tracks: BTreeMap<u32, usize>,
    /// Segment count per category
    pub categories: BTreeMap<String, usize>,
    /// Shots whose storyboard has no image yet
    pub storyboards_missing: usize,
    /// Shot-by-shot text summary
    pub latent_story: Vec<LatentStory>,
}

impl ProjectSummary {
    /// Summarize a project.
    pub fn new(project: &Project) -> Self {
        let mut categories = BTreeMap::new();
        for segment in &project.segments {
            *categories.entry(segment.category.to_string()).or_insert(0) += 1;
        }

        let shots = project.shots();
        let storyboards_missing = shots
            .iter()
            .filter(|shot| {
                !filter_segments(
                    FilteringMode::Both,
                    shot,
                    &project.segments,
                    Some(SegmentCategory::Storyboard),
                )
                .iter()
                .any(|s| s.has_asset())
            })
            .count();

        Self {
            title: project.meta.title().clone(),
            duration_ms: project.end_time_ms(),
            shots: shots.len(),
            segments: project.segments.len(),
            tracks: project.tracks(),
            categories,
            storyboards_missing,
            latent_story: latent_story(project),
        }
    }
}
