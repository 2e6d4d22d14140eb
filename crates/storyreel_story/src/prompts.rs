//! Prompt derivation helpers.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use storyreel_core::{EntityIndex, Segment, SegmentCategory};

static NEGATED_CAPTIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:no|without|zero|disable|remove)\s+(?:any\s+|the\s+)?(?:captions?|subtitles?)\b")
        .expect("Valid negated caption regex")
});

static CAPTIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:captions?|captioned|subtitles?|subtitled)\b")
        .expect("Valid caption regex")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Valid whitespace regex"));

/// Result of [`check_captions`].
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct CaptionCheck {
    prompt: String,
    has_captions: bool,
}

impl CaptionCheck {
    /// Consume the check and return the cleaned prompt.
    pub fn into_prompt(self) -> String {
        self.prompt
    }
}

/// Detect whether a prompt asks for on-screen captions.
///
/// A mention of captions or subtitles turns them on; a negated mention
/// ("no captions", "without subtitles") turns them off and is removed from
/// the prompt.
///
/// # Examples
///
/// ```
/// use storyreel_story::check_captions;
///
/// let check = check_captions("A cat on the moon, with captions");
/// assert!(check.has_captions());
///
/// let check = check_captions("A cat on the moon, no captions please");
/// assert!(!check.has_captions());
/// assert_eq!(check.prompt(), "A cat on the moon, please");
/// ```
pub fn check_captions(prompt: &str) -> CaptionCheck {
    if NEGATED_CAPTIONS.is_match(prompt) {
        let stripped = NEGATED_CAPTIONS.replace_all(prompt, "");
        return CaptionCheck {
            prompt: normalize(&stripped),
            has_captions: false,
        };
    }

    CaptionCheck {
        prompt: normalize(prompt),
        has_captions: CAPTIONS.is_match(prompt),
    }
}

fn normalize(prompt: &str) -> String {
    WHITESPACE
        .replace_all(prompt, " ")
        .replace(" ,", ",")
        .replace(",,", ",")
        .trim_matches(|c: char| c == ',' || c.is_whitespace())
        .to_string()
}

/// Segment categories that contribute to a shot's image prompt, in order.
const VISUAL_CATEGORIES: [SegmentCategory; 9] = [
    SegmentCategory::Style,
    SegmentCategory::Camera,
    SegmentCategory::Lighting,
    SegmentCategory::Location,
    SegmentCategory::Time,
    SegmentCategory::Era,
    SegmentCategory::Weather,
    SegmentCategory::Characters,
    SegmentCategory::Action,
];

/// Build an image prompt describing one shot.
///
/// Segment prompts are taken category by category in a fixed visual order
/// (style, camera, lighting, location, time, era, weather, characters,
/// action), followed by the looks of the characters the segments reference,
/// followed by `extras`. Empty parts and case-insensitive duplicates are
/// dropped.
///
/// # Examples
///
/// ```
/// use storyreel_core::{EntityIndex, Segment, SegmentCategory};
/// use storyreel_story::video_prompt;
///
/// let action = Segment::builder()
///     .category(SegmentCategory::Action)
///     .prompt("a cat jumps")
///     .build()
///     .unwrap();
/// let location = Segment::builder()
///     .category(SegmentCategory::Location)
///     .prompt("on the moon")
///     .build()
///     .unwrap();
///
/// let prompt = video_prompt(&[&action, &location], &EntityIndex::new(), &["crisp".to_string()]);
/// assert_eq!(prompt, "on the moon, a cat jumps, crisp");
/// ```
pub fn video_prompt(segments: &[&Segment], entities: &EntityIndex<'_>, extras: &[String]) -> String {
    let mut parts: Vec<&str> = Vec::new();

    for category in VISUAL_CATEGORIES {
        parts.extend(
            segments
                .iter()
                .filter(|s| s.category == category)
                .map(|s| s.prompt.as_str()),
        );
    }

    parts.extend(
        segments
            .iter()
            .filter_map(|s| s.entity_id.as_deref())
            .filter_map(|id| entities.get(id))
            .filter(|e| e.category == SegmentCategory::Characters)
            .map(|e| e.visual_description()),
    );

    parts.extend(extras.iter().map(String::as_str));

    join_unique(parts)
}

/// Append quality terms to an image prompt.
///
/// Terms already present in the prompt (case-insensitive) are not repeated.
///
/// # Examples
///
/// ```
/// use storyreel_story::positive_prompt;
///
/// let terms = vec!["beautiful".to_string(), "high resolution".to_string()];
/// assert_eq!(
///     positive_prompt("a beautiful lighthouse", &terms),
///     "a beautiful lighthouse, high resolution"
/// );
/// ```
pub fn positive_prompt(prompt: &str, terms: &[String]) -> String {
    let lowered = prompt.to_lowercase();
    let mut parts = vec![prompt];
    parts.extend(
        terms
            .iter()
            .map(String::as_str)
            .filter(|t| !lowered.contains(&t.to_lowercase())),
    );
    join_unique(parts)
}

/// Truncate to at most `max` characters, never splitting a character.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn join_unique<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut seen = HashSet::new();
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .filter(|p| seen.insert(p.to_lowercase()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyreel_core::Entity;

    #[test]
    fn plain_prompt_has_no_captions() {
        let check = check_captions("  a quiet  harbor at dawn ");
        assert!(!check.has_captions());
        assert_eq!(check.prompt(), "a quiet harbor at dawn");
    }

    #[test]
    fn subtitles_count_as_captions() {
        assert!(check_captions("Subtitled documentary about bees").has_captions());
    }

    #[test]
    fn negation_wins_over_mention() {
        let check = check_captions("without subtitles, a story about bees");
        assert!(!check.has_captions());
        assert_eq!(check.prompt(), "a story about bees");
    }

    #[test]
    fn entity_looks_follow_segment_prompts() {
        let hero = Entity::builder()
            .id("hero")
            .label("Mia")
            .appearance("a girl in a red coat")
            .build()
            .unwrap();
        let entities = vec![hero];
        let index: EntityIndex<'_> = entities.iter().map(|e| (e.id.as_str(), e)).collect();

        let characters = Segment::builder()
            .category(SegmentCategory::Characters)
            .prompt("Mia")
            .entity_id(Some("hero".to_string()))
            .build()
            .unwrap();
        let style = Segment::builder()
            .category(SegmentCategory::Style)
            .prompt("watercolor")
            .build()
            .unwrap();

        let prompt = video_prompt(&[&characters, &style], &index, &[]);
        assert_eq!(prompt, "watercolor, Mia, a girl in a red coat");
    }

    #[test]
    fn only_character_entities_add_their_looks() {
        let harbor = Entity::builder()
            .id("harbor")
            .category(SegmentCategory::Location)
            .appearance("a foggy harbor")
            .build()
            .unwrap();
        let entities = vec![harbor];
        let index: EntityIndex<'_> = entities.iter().map(|e| (e.id.as_str(), e)).collect();

        let location = Segment::builder()
            .category(SegmentCategory::Location)
            .prompt("the old port")
            .entity_id(Some("harbor".to_string()))
            .build()
            .unwrap();

        assert_eq!(video_prompt(&[&location], &index, &[]), "the old port");
    }

    #[test]
    fn duplicates_are_dropped_case_insensitively() {
        let a = Segment::builder()
            .category(SegmentCategory::Style)
            .prompt("Crisp")
            .build()
            .unwrap();
        let prompt = video_prompt(&[&a], &EntityIndex::new(), &["crisp".to_string()]);
        assert_eq!(prompt, "Crisp");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 10), "short");
    }
}
