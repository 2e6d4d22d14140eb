use std::io::Write;
use storyreel_core::{StoryConfig, StoryreelConfig};
use storyreel_error::StoryreelErrorKind;

#[test]
fn defaults_match_bundled_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.toml");
    std::fs::File::create(&path).unwrap();

    let config = StoryreelConfig::from_file(&path).expect("Failed to load config");
    assert_eq!(config, StoryreelConfig::default());
}

#[test]
fn user_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storyreel.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        r#"
[story]
nb_shots = 8
fallback_music_prompt = "ambient drone"

[services]
story_url = "http://writer.internal:9000"
"#
    )
    .unwrap();

    let config = StoryreelConfig::from_file(&path).expect("Failed to load config");
    assert_eq!(*config.story.nb_shots(), 8);
    assert_eq!(config.story.fallback_music_prompt(), "ambient drone");
    // untouched values keep their defaults
    assert_eq!(*config.story.shot_duration_ms(), 3000);
    assert_eq!(config.services.story_url(), "http://writer.internal:9000");
    assert_eq!(*config.services.requests_per_minute(), 30);
    assert_eq!(config.storyboard.extra_terms().len(), 3);
}

#[test]
fn zero_shots_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storyreel.toml");
    std::fs::write(&path, "[story]\nnb_shots = 0\n").unwrap();

    let err = StoryreelConfig::from_file(&path).unwrap_err();
    assert!(matches!(err.kind(), StoryreelErrorKind::Config(_)));
}

#[test]
fn builder_keeps_unset_defaults() {
    let story = StoryConfig::builder().nb_shots(2u32).build().unwrap();
    assert_eq!(*story.nb_shots(), 2);
    assert_eq!(*story.max_prompt_length(), 1024);
}
