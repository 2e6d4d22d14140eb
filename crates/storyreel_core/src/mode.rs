//! Completion modes.

use serde::{Deserialize, Serialize};

/// How the result of a completion is returned.
///
/// - `Full`: the whole project, with new and updated segments in place
/// - `Partial`: only the new and updated segments, on an otherwise empty
///   project carrying the original metadata
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
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
pub enum CompletionMode {
    /// Return the entire project
    Full,
    /// Return only what changed
    #[default]
    Partial,
}
