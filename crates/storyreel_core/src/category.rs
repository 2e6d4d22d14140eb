//! Segment classification enums.

use serde::{Deserialize, Serialize};

/// What a segment represents on the timeline.
///
/// `Interface` is the caption track: its prompt is the text shown on screen.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SegmentCategory {
    /// Gaussian splat scene
    Splat,
    /// 3D mesh
    Mesh,
    /// Depth map
    Depth,
    /// Scripted event
    Event,
    /// On-screen captions and interface text
    Interface,
    /// Natural phenomenon (rain, fire, ...)
    Phenomenon,
    /// Rendered video clip
    Video,
    /// Storyboard still image
    Storyboard,
    /// Transition between shots
    Transition,
    /// Characters present in the shot
    Characters,
    /// Where the shot takes place
    Location,
    /// Time of day
    Time,
    /// Historical era
    Era,
    /// Lighting conditions
    Lighting,
    /// Weather conditions
    Weather,
    /// What happens in the shot
    Action,
    /// Background music
    Music,
    /// Sound effects and ambience
    Sound,
    /// Spoken dialogue or narration
    Dialogue,
    /// Visual style
    Style,
    /// Camera shot: one per shot, delimits the shot's time range
    Camera,
    /// Anything else
    #[default]
    Generic,
}

/// The kind of asset a segment is expected to produce.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputType {
    /// Plain text
    #[default]
    Text,
    /// Animation data
    Animation,
    /// Interface element
    Interface,
    /// Timeline event
    Event,
    /// Phenomenon description
    Phenomenon,
    /// Transition effect
    Transition,
    /// Still image
    Image,
    /// Video clip
    Video,
    /// Audio clip
    Audio,
}

/// Generation status of a segment's asset.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SegmentStatus {
    /// Waiting for a generator to produce the asset
    #[default]
    ToGenerate,
    /// A previous attempt failed and should be retried
    Retry,
    /// Generation in progress
    Pending,
    /// Asset is available
    Completed,
    /// Generation failed permanently
    Error,
}

/// Where a segment's asset URL points.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AssetSourceType {
    /// No asset yet
    #[default]
    Empty,
    /// Inline `data:` URI
    Data,
    /// Remote `http(s)` URL
    Remote,
    /// Local filesystem path
    Path,
    /// Free text (the asset is the text itself)
    Prompt,
}

/// Classify an asset URL.
///
/// # Examples
///
/// ```
/// use storyreel_core::{AssetSourceType, asset_source_type};
///
/// assert_eq!(asset_source_type(""), AssetSourceType::Empty);
/// assert_eq!(asset_source_type("data:image/png;base64,iVBO"), AssetSourceType::Data);
/// assert_eq!(asset_source_type("https://cdn.example.com/a.png"), AssetSourceType::Remote);
/// assert_eq!(asset_source_type("./renders/a.png"), AssetSourceType::Path);
/// assert_eq!(asset_source_type("A lighthouse at dusk"), AssetSourceType::Prompt);
/// ```
pub fn asset_source_type(url: &str) -> AssetSourceType {
    let url = url.trim();
    if url.is_empty() {
        AssetSourceType::Empty
    } else if url.starts_with("data:") {
        AssetSourceType::Data
    } else if url.starts_with("http://") || url.starts_with("https://") {
        AssetSourceType::Remote
    } else if url.starts_with('/')
        || url.starts_with("./")
        || url.starts_with("../")
        || url.starts_with("file://")
    {
        AssetSourceType::Path
    } else {
        AssetSourceType::Prompt
    }
}
