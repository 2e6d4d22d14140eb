//! Story extension.
//!
//! Asks a [`StoryWriter`] for new shots and lays them out after the end of
//! the existing timeline, then covers the new span with one sound and one
//! music segment.

use crate::{CompletionSession, check_captions, truncate_chars};
use storyreel_core::{
    LatentStory, OutputType, Segment, SegmentCategory, SegmentStatus, StoryConfig, latent_story,
};
use storyreel_error::{StoryError, StoryErrorKind, StoryreelError, StoryreelResult};
use storyreel_interface::{AudioPromptRequest, ExtendStoryRequest, StoryWriter};
use tracing::{debug, error, info, instrument, warn};

// Track layout of an extended shot.
const VIDEO_TRACK: u32 = 0;
const STORYBOARD_TRACK: u32 = 1;
const CAPTION_TRACK: u32 = 2;
const DIALOGUE_TRACK: u32 = 3;
const CAMERA_TRACK: u32 = 4;
const SOUND_TRACK: u32 = 5;
const MUSIC_TRACK: u32 = 6;

/// Caller-supplied options for one extension.
#[derive(Debug, Clone, Default, derive_getters::Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct ExtendOptions {
    /// What the continuation should be about; the project description is used when absent
    #[setters(strip_option, into)]
    prompt: Option<String>,
    /// Prefer faster, cheaper generation
    turbo: bool,
}

/// What an extension added.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct ExtendReport {
    /// Number of shots added
    shots: usize,
    /// The prompt actually sent to the writer
    prompt: String,
    /// Whether caption segments were added
    captions: bool,
    /// Start of the added span
    start_ms: u64,
    /// End of the added span
    end_ms: u64,
    /// Sound prompt, if a sound segment was added
    sound_prompt: Option<String>,
    /// Music prompt of the added music segment
    music_prompt: String,
}

/// Extends a story with writer-generated shots.
pub struct StoryExtender<W: StoryWriter> {
    writer: W,
    config: StoryConfig,
}

impl<W: StoryWriter> StoryExtender<W> {
    /// Create an extender around a story writer.
    pub fn new(writer: W, config: StoryConfig) -> Self {
        Self { writer, config }
    }

    /// The writer in use.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Append new shots to the session's project.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails to produce shots or returns none.
    /// Sound and music prompt failures are logged and do not fail the
    /// extension.
    #[instrument(
        skip(self, session, options),
        fields(
            writer = self.writer.provider_name(),
            mode = %session.mode(),
            segments = session.existing().segments.len()
        )
    )]
    pub async fn extend(
        &self,
        session: &mut CompletionSession,
        options: &ExtendOptions,
    ) -> StoryreelResult<ExtendReport> {
        let existing = session.existing();
        let had_captions = existing.has_category(SegmentCategory::Interface);
        let start_ms = existing.end_time_ms();

        let requested = options
            .prompt()
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(existing.meta.description().as_str());
        let check = check_captions(truncate_chars(
            requested.trim(),
            *self.config.max_prompt_length(),
        ));

        // Captions continue only if the project has them and the new prompt
        // still asks for them.
        let captions = had_captions && *check.has_captions();
        let prompt = check.into_prompt();

        let story = latent_story(existing);
        debug!(
            shots_so_far = story.len(),
            start_ms, captions, "Extending story"
        );

        let request = ExtendStoryRequest::builder()
            .prompt(prompt.clone())
            .latent_story(story.clone())
            .nb_shots(*self.config.nb_shots())
            .turbo(*options.turbo())
            .build()
            .map_err(|e| StoryError::new(StoryErrorKind::Builder(e.to_string())))?;

        let shots = self.writer.extend_story(&request).await?;
        if shots.is_empty() {
            return Err(StoryError::new(StoryErrorKind::NoShots).into());
        }

        let duration = *self.config.shot_duration_ms();
        let mut cursor = start_ms;
        for shot in &shots {
            for segment in shot_segments(shot, cursor, duration, captions)? {
                session.push(segment);
            }
            cursor += duration;
        }

        info!(
            shots = shots.len(),
            prompt = %prompt,
            "Extended the story"
        );

        let sound_prompt = self
            .add_sound(session, &prompt, *options.turbo(), start_ms, cursor)
            .await?;
        let music_prompt = self
            .add_music(session, &prompt, story, *options.turbo(), start_ms, cursor)
            .await?;

        Ok(ExtendReport {
            shots: shots.len(),
            prompt,
            captions,
            start_ms,
            end_ms: cursor,
            sound_prompt,
            music_prompt,
        })
    }

    async fn add_sound(
        &self,
        session: &mut CompletionSession,
        prompt: &str,
        turbo: bool,
        start_ms: u64,
        end_ms: u64,
    ) -> StoryreelResult<Option<String>> {
        let request = AudioPromptRequest::builder()
            .prompt(prompt)
            .latent_story(latent_story(session.output()))
            .turbo(turbo)
            .build()
            .map_err(|e| StoryError::new(StoryErrorKind::Builder(e.to_string())))?;

        let sound = match self.writer.sound_prompts(&request).await {
            Ok(prompts) => prompts.into_iter().next().filter(|p| !p.trim().is_empty()),
            Err(e) => {
                error!(error = %e, "Failed to generate sound prompts");
                return Ok(None);
            }
        };

        let Some(sound) = sound else {
            error!("Failed to generate sound prompts: not enough sound prompts");
            return Ok(None);
        };

        session.push(span_segment(
            SOUND_TRACK,
            SegmentCategory::Sound,
            &sound,
            start_ms,
            end_ms,
        )?);
        Ok(Some(sound))
    }

    async fn add_music(
        &self,
        session: &mut CompletionSession,
        prompt: &str,
        story: Vec<LatentStory>,
        turbo: bool,
        start_ms: u64,
        end_ms: u64,
    ) -> StoryreelResult<String> {
        let request = AudioPromptRequest::builder()
            .prompt(prompt)
            .latent_story(story)
            .turbo(turbo)
            .build()
            .map_err(|e| StoryError::new(StoryErrorKind::Builder(e.to_string())))?;

        let music = match self.writer.music_prompts(&request).await {
            Ok(prompts) => prompts.into_iter().next().unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Failed to generate additional music prompts, reusing existing music");
                session
                    .existing()
                    .segments_in(SegmentCategory::Music)
                    .map(|s| s.prompt.as_str())
                    .find(|p| !p.is_empty())
                    .unwrap_or(self.config.fallback_music_prompt())
                    .to_string()
            }
        };

        session.push(span_segment(
            MUSIC_TRACK,
            SegmentCategory::Music,
            &music,
            start_ms,
            end_ms,
        )?);
        Ok(music)
    }
}

/// The segments making up one new shot, in track order.
fn shot_segments(
    shot: &LatentStory,
    start_ms: u64,
    duration_ms: u64,
    captions: bool,
) -> StoryreelResult<Vec<Segment>> {
    let base = || {
        let mut builder = Segment::builder();
        builder
            .start_time_ms(start_ms)
            .end_time_ms(start_ms + duration_ms)
            .asset_duration_ms(duration_ms)
            .status(SegmentStatus::ToGenerate);
        builder
    };

    let mut segments = vec![
        base()
            .track(VIDEO_TRACK)
            .category(SegmentCategory::Video)
            .prompt(shot.image.as_str())
            .output_type(OutputType::Video)
            .build(),
        base()
            .track(STORYBOARD_TRACK)
            .category(SegmentCategory::Storyboard)
            .prompt(shot.image.as_str())
            .output_type(OutputType::Image)
            .build(),
    ];

    if captions {
        segments.push(
            base()
                .track(CAPTION_TRACK)
                .category(SegmentCategory::Interface)
                .prompt(shot.comment.as_str())
                .asset_url(shot.comment.as_str())
                .output_type(OutputType::Text)
                .build(),
        );
    }

    segments.push(
        base()
            .track(DIALOGUE_TRACK)
            .category(SegmentCategory::Dialogue)
            .prompt(shot.voice.as_str())
            .output_type(OutputType::Audio)
            .build(),
    );

    // every shot needs a camera segment
    segments.push(
        base()
            .track(CAMERA_TRACK)
            .category(SegmentCategory::Camera)
            .prompt("video")
            .output_type(OutputType::Text)
            .build(),
    );

    segments
        .into_iter()
        .map(|s| {
            s.map_err(|e| StoryreelError::from(StoryError::new(StoryErrorKind::Builder(e.to_string()))))
        })
        .collect()
}

/// An audio segment covering `[start_ms, end_ms)`.
fn span_segment(
    track: u32,
    category: SegmentCategory,
    prompt: &str,
    start_ms: u64,
    end_ms: u64,
) -> StoryreelResult<Segment> {
    Segment::builder()
        .track(track)
        .start_time_ms(start_ms)
        .end_time_ms(end_ms)
        .asset_duration_ms(end_ms.saturating_sub(start_ms))
        .category(category)
        .prompt(prompt)
        .output_type(OutputType::Audio)
        .status(SegmentStatus::ToGenerate)
        .build()
        .map_err(|e| StoryError::new(StoryErrorKind::Builder(e.to_string())).into())
}
