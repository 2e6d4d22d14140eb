//! Timeline segments.

use crate::{AssetSourceType, OutputType, SegmentCategory, SegmentStatus};
use serde::{Deserialize, Serialize};

/// One time-stamped item on one track of the timeline.
///
/// # Examples
///
/// ```
/// use storyreel_core::{OutputType, Segment, SegmentCategory, SegmentStatus};
///
/// let segment = Segment::builder()
///     .track(1u32)
///     .start_time_ms(0u64)
///     .end_time_ms(3000u64)
///     .category(SegmentCategory::Storyboard)
///     .prompt("a lighthouse at dusk")
///     .output_type(OutputType::Image)
///     .build()
///     .unwrap();
///
/// assert_eq!(segment.duration_ms(), 3000);
/// assert_eq!(segment.status, SegmentStatus::ToGenerate);
/// assert!(!segment.id.is_empty());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder,
)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct Segment {
    /// Unique identifier
    pub id: String,
    /// Track number (row on the timeline)
    pub track: u32,
    /// Start time in milliseconds
    pub start_time_ms: u64,
    /// End time in milliseconds
    pub end_time_ms: u64,
    /// Duration of the underlying asset in milliseconds
    pub asset_duration_ms: u64,
    /// What the segment represents
    pub category: SegmentCategory,
    /// Entity this segment is about, if any
    pub entity_id: Option<String>,
    /// Generation prompt
    pub prompt: String,
    /// Human-readable label
    pub label: String,
    /// Kind of asset to produce
    pub output_type: OutputType,
    /// Generated asset (data URI, URL, path or text)
    pub asset_url: String,
    /// Classification of `asset_url`
    pub asset_source_type: AssetSourceType,
    /// Generation status
    pub status: SegmentStatus,
}

impl Default for Segment {
    fn default() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            track: 0,
            start_time_ms: 0,
            end_time_ms: 0,
            asset_duration_ms: 0,
            category: SegmentCategory::default(),
            entity_id: None,
            prompt: String::new(),
            label: String::new(),
            output_type: OutputType::default(),
            asset_url: String::new(),
            asset_source_type: AssetSourceType::default(),
            status: SegmentStatus::default(),
        }
    }
}

impl Segment {
    /// Creates a new segment builder.
    pub fn builder() -> SegmentBuilder {
        SegmentBuilder::default()
    }

    /// Length of the segment on the timeline.
    pub fn duration_ms(&self) -> u64 {
        self.end_time_ms.saturating_sub(self.start_time_ms)
    }

    /// Whether the segment's start lies in `[start, end)`.
    pub fn starts_within(&self, start: u64, end: u64) -> bool {
        self.start_time_ms >= start && self.start_time_ms < end
    }

    /// Whether the segment's end lies in `(start, end]`.
    pub fn ends_within(&self, start: u64, end: u64) -> bool {
        self.end_time_ms > start && self.end_time_ms <= end
    }

    /// Whether the segment lies inside `[start, end]`.
    pub fn lies_within(&self, start: u64, end: u64) -> bool {
        self.start_time_ms >= start && self.end_time_ms <= end
    }

    /// Whether the segment already carries a generated asset.
    pub fn has_asset(&self) -> bool {
        !self.asset_url.is_empty()
    }
}
