use storyreel_core::{
    AssetSourceType, CompletionMode, Entity, LatentStory, Project, ProjectMeta, Segment,
    SegmentCategory, SegmentStatus, latent_story,
};
use storyreel_error::{StorageErrorKind, StoryreelErrorKind};

fn segment(category: SegmentCategory, track: u32, start: u64, prompt: &str) -> Segment {
    Segment::builder()
        .track(track)
        .start_time_ms(start)
        .end_time_ms(start + 3000)
        .category(category)
        .prompt(prompt)
        .build()
        .unwrap()
}

fn two_shot_project() -> Project {
    let meta = ProjectMeta::builder()
        .title("Harbor")
        .description("boats at dawn")
        .build()
        .unwrap();
    let mut project = Project::new(meta);
    project.entities.push(
        Entity::builder()
            .id("captain")
            .label("Captain")
            .description("an old sailor")
            .build()
            .unwrap(),
    );

    // stored out of order on purpose
    project.push(segment(SegmentCategory::Camera, 4, 3000, "video"));
    project.push(segment(SegmentCategory::Dialogue, 3, 3000, "land ho"));
    project.push(segment(SegmentCategory::Camera, 4, 0, "video"));
    project.push(segment(SegmentCategory::Storyboard, 1, 0, "a harbor"));
    project.push(segment(SegmentCategory::Interface, 2, 0, "Dawn"));
    project.push(segment(SegmentCategory::Dialogue, 3, 0, "good morning"));
    project
}

#[test]
fn empty_project_ends_at_zero() {
    let project = Project::default();
    assert_eq!(project.end_time_ms(), 0);
    assert!(project.shots().is_empty());
    assert_eq!(*project.meta.width(), 1024);
    assert_eq!(*project.meta.height(), 576);
}

#[test]
fn shots_are_ordered_by_start_time() {
    let project = two_shot_project();
    let starts: Vec<u64> = project.shots().iter().map(|s| s.start_time_ms).collect();
    assert_eq!(starts, vec![0, 3000]);
    assert_eq!(project.end_time_ms(), 6000);
}

#[test]
fn latent_story_summarizes_each_shot() {
    let project = two_shot_project();
    assert_eq!(
        latent_story(&project),
        vec![
            LatentStory {
                comment: "Dawn".to_string(),
                image: "a harbor".to_string(),
                voice: "good morning".to_string(),
            },
            LatentStory {
                comment: String::new(),
                image: String::new(),
                voice: "land ho".to_string(),
            },
        ]
    );
}

#[test]
fn tracks_count_segments() {
    let project = two_shot_project();
    let tracks = project.tracks();
    assert_eq!(tracks.get(&4), Some(&2));
    assert_eq!(tracks.get(&3), Some(&2));
    assert_eq!(tracks.get(&1), Some(&1));
}

#[test]
fn entity_index_finds_entities() {
    let project = two_shot_project();
    let index = project.entity_index();
    assert_eq!(index["captain"].visual_description(), "an old sailor");
    assert!(project.entity("nobody").is_none());
}

#[test]
fn new_segments_get_unique_ids_and_defaults() {
    let a = Segment::builder().build().unwrap();
    let b = Segment::builder().build().unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(a.status, SegmentStatus::ToGenerate);
    assert_eq!(a.asset_source_type, AssetSourceType::Empty);
    assert_eq!(a.category, SegmentCategory::Generic);
}

#[test]
fn project_survives_a_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("harbor.json");

    let project = two_shot_project();
    project.to_file(&path).expect("Failed to save project");
    let loaded = Project::from_file(&path).expect("Failed to load project");

    assert_eq!(loaded, project);
}

#[test]
fn missing_file_is_a_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Project::from_file(dir.path().join("nope.json")).unwrap_err();
    match err.kind() {
        StoryreelErrorKind::Storage(e) => {
            assert!(matches!(e.kind, StorageErrorKind::NotFound(_)))
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn partial_json_fills_defaults() {
    let json = r#"{
        "meta": { "title": "Sketch" },
        "segments": [
            { "category": "camera", "start_time_ms": 0, "end_time_ms": 2000 }
        ]
    }"#;
    let project: Project = json.parse().expect("Failed to parse project");
    assert_eq!(project.meta.title(), "Sketch");
    assert_eq!(*project.meta.width(), 1024);
    assert_eq!(project.segments[0].category, SegmentCategory::Camera);
    assert_eq!(project.segments[0].status, SegmentStatus::ToGenerate);
    assert!(!project.segments[0].id.is_empty());
}

#[test]
fn malformed_json_is_a_json_error() {
    let err = "{ not json".parse::<Project>().unwrap_err();
    assert!(matches!(err.kind(), StoryreelErrorKind::Json(_)));
}

#[test]
fn completion_mode_parses_case_insensitively() {
    assert_eq!("FULL".parse::<CompletionMode>().unwrap(), CompletionMode::Full);
    assert_eq!("partial".parse::<CompletionMode>().unwrap(), CompletionMode::Partial);
    assert!("merge".parse::<CompletionMode>().is_err());
}
