//! Storyboard completion.
//!
//! Every shot (camera segment) should own a storyboard segment with a prompt
//! and a rendered image. Whatever is missing is filled in, in that order:
//! the segment itself, its prompt, then its image.

use crate::{CompletionSession, positive_prompt, truncate_chars, video_prompt};
use storyreel_core::{
    CompletionMode, FilteringMode, OutputType, Segment, SegmentCategory, SegmentStatus,
    StoryboardConfig, asset_source_type,
};
use storyreel_error::{StoryError, StoryErrorKind, StoryreelResult};
use storyreel_interface::{StoryboardRenderer, StoryboardRequest};
use tracing::{debug, error, info, instrument};

const STORYBOARD_TRACK: u32 = 1;

/// What [`StoryboardCompleter::process_shot`] did for one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_getters::Getters)]
pub struct ShotReport {
    /// A storyboard segment had to be created
    created: bool,
    /// A storyboard prompt had to be derived
    prompted: bool,
    /// An image was rendered
    rendered: bool,
}

/// Totals over every shot of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_getters::Getters)]
pub struct StoryboardReport {
    /// Shots processed
    shots: usize,
    /// Storyboard segments created
    created: usize,
    /// Storyboard prompts derived
    prompted: usize,
    /// Images rendered
    rendered: usize,
    /// Shots whose storyboard already had an image
    skipped: usize,
}

impl StoryboardReport {
    fn record(&mut self, shot: ShotReport) {
        self.shots += 1;
        self.created += usize::from(shot.created);
        self.prompted += usize::from(shot.prompted);
        if shot.rendered {
            self.rendered += 1;
        } else {
            self.skipped += 1;
        }
    }
}

/// Fills in missing storyboards shot by shot.
pub struct StoryboardCompleter<R: StoryboardRenderer> {
    renderer: R,
    config: StoryboardConfig,
}

impl<R: StoryboardRenderer> StoryboardCompleter<R> {
    /// Create a completer around a storyboard renderer.
    pub fn new(renderer: R, config: StoryboardConfig) -> Self {
        Self { renderer, config }
    }

    /// Complete the storyboards of every shot, in timeline order.
    ///
    /// Shots are processed one after another and the first failure stops the
    /// run; storyboards completed before it keep their images.
    ///
    /// # Errors
    ///
    /// Returns the first rendering error.
    #[instrument(skip(self, session), fields(renderer = self.renderer.provider_name(), mode = %session.mode()))]
    pub async fn complete(
        &self,
        session: &mut CompletionSession,
    ) -> StoryreelResult<StoryboardReport> {
        let shot_ids: Vec<String> = session
            .existing()
            .shots()
            .into_iter()
            .map(|s| s.id.clone())
            .collect();

        let mut report = StoryboardReport::default();
        for shot_id in &shot_ids {
            report.record(self.process_shot(session, shot_id).await?);
        }

        info!(
            shots = report.shots,
            created = report.created,
            prompted = report.prompted,
            rendered = report.rendered,
            skipped = report.skipped,
            "Completed storyboards"
        );
        Ok(report)
    }

    /// Make sure one shot has a storyboard segment, prompt and image.
    ///
    /// A missing storyboard segment is added to the existing project. In
    /// partial mode a freshly rendered storyboard is also added to the
    /// session output.
    ///
    /// # Errors
    ///
    /// Returns an error if `shot_id` is not a camera segment of the project,
    /// or if rendering fails. On rendering failure the storyboard stays
    /// marked [`SegmentStatus::ToGenerate`].
    #[instrument(skip(self, session))]
    pub async fn process_shot(
        &self,
        session: &mut CompletionSession,
        shot_id: &str,
    ) -> StoryreelResult<ShotReport> {
        let existing = session.existing();
        let shot = existing
            .segments
            .iter()
            .find(|s| s.id == shot_id)
            .cloned()
            .ok_or_else(|| StoryError::new(StoryErrorKind::ShotNotFound(shot_id.to_string())))?;
        if shot.category != SegmentCategory::Camera {
            return Err(StoryError::new(StoryErrorKind::NotAShot(shot_id.to_string())).into());
        }

        let mut report = ShotReport::default();
        let shot_indices = existing.segment_indices(FilteringMode::Both, &shot, None);
        let found = shot_indices
            .iter()
            .copied()
            .find(|&i| existing.segments[i].category == SegmentCategory::Storyboard);

        let storyboard_idx = match found {
            Some(idx) => idx,
            None => {
                let storyboard = Segment::builder()
                    .track(STORYBOARD_TRACK)
                    .start_time_ms(shot.start_time_ms)
                    .end_time_ms(shot.end_time_ms)
                    .asset_duration_ms(shot.asset_duration_ms)
                    .category(SegmentCategory::Storyboard)
                    .output_type(OutputType::Image)
                    .build()
                    .map_err(|e| StoryError::new(StoryErrorKind::Builder(e.to_string())))?;

                // repair the existing project
                let project = session.existing_mut();
                project.push(storyboard);
                report.created = true;
                info!(
                    start_ms = shot.start_time_ms,
                    end_ms = shot.end_time_ms,
                    "Created missing storyboard segment"
                );
                project.segments.len() - 1
            }
        };

        if session.existing().segments[storyboard_idx].prompt.is_empty() {
            let existing = session.existing();
            let shot_segments: Vec<&Segment> =
                shot_indices.iter().map(|&i| &existing.segments[i]).collect();
            let prompt = video_prompt(
                &shot_segments,
                &existing.entity_index(),
                self.config.extra_terms(),
            );
            debug!(prompt = %prompt, "Derived storyboard prompt");

            session.existing_mut().segments[storyboard_idx].prompt = prompt;
            report.prompted = true;
        }

        let existing = session.existing();
        let storyboard = &existing.segments[storyboard_idx];
        if storyboard.has_asset() {
            info!(
                asset = truncate_chars(&storyboard.asset_url, 50),
                "There is already a storyboard image"
            );
            return Ok(report);
        }

        let identity_image = storyboard
            .entity_id
            .as_deref()
            .and_then(|id| existing.entity(id))
            .and_then(|e| e.image_id.clone());

        // identity-preserving renders only exist on the turbo path
        let turbo = identity_image.is_some();
        if turbo {
            debug!("Using an entity identity image for the storyboard");
        }

        let request = StoryboardRequest::builder()
            .prompt(positive_prompt(
                &storyboard.prompt,
                self.config.positive_terms(),
            ))
            .identity_image(identity_image)
            .width(*existing.meta.width())
            .height(*existing.meta.height())
            .turbo(turbo)
            .build()
            .map_err(|e| StoryError::new(StoryErrorKind::Builder(e.to_string())))?;

        match self.renderer.render(&request).await {
            Ok(asset_url) => {
                let storyboard = &mut session.existing_mut().segments[storyboard_idx];
                storyboard.asset_source_type = asset_source_type(&asset_url);
                storyboard.asset_url = asset_url;
                storyboard.status = SegmentStatus::Completed;
                report.rendered = true;
            }
            Err(e) => {
                error!(error = %e, "Failed to generate a storyboard image");
                session.existing_mut().segments[storyboard_idx].status = SegmentStatus::ToGenerate;
                return Err(e);
            }
        }

        // in full mode the output already is the existing project
        if session.mode() != CompletionMode::Full {
            let rendered = session.existing().segments[storyboard_idx].clone();
            session.push(rendered);
        }

        Ok(report)
    }
}
