//! Text summaries of a timeline, one per shot.

use crate::{FilteringMode, Project, SegmentCategory, filter_segments};
use serde::{Deserialize, Serialize};

/// What a shot says, shows and subtitles, as plain text.
///
/// This is the context handed to story writers when they are asked to
/// continue a story.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LatentStory {
    /// Caption text
    pub comment: String,
    /// Image prompt
    pub image: String,
    /// Spoken line
    pub voice: String,
}

/// Summarize a project shot by shot.
///
/// Each camera segment is one shot; the first caption, storyboard and
/// dialogue segment starting inside it provide the comment, image and voice.
/// Missing tracks yield empty strings.
pub fn latent_story(project: &Project) -> Vec<LatentStory> {
    project
        .shots()
        .into_iter()
        .map(|shot| {
            let first_prompt = |category| {
                filter_segments(FilteringMode::Start, shot, &project.segments, Some(category))
                    .first()
                    .map(|s| s.prompt.clone())
                    .unwrap_or_default()
            };

            LatentStory {
                comment: first_prompt(SegmentCategory::Interface),
                image: first_prompt(SegmentCategory::Storyboard),
                voice: first_prompt(SegmentCategory::Dialogue),
            }
        })
        .collect()
}
