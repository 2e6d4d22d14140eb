use storyreel_core::{FilteringMode, Segment, SegmentCategory, filter_segments};

fn span(category: SegmentCategory, start: u64, end: u64) -> Segment {
    Segment::builder()
        .start_time_ms(start)
        .end_time_ms(end)
        .category(category)
        .build()
        .unwrap()
}

/// A shot at [1000, 2000) surrounded by segments crossing each boundary.
fn timeline() -> (Segment, Vec<Segment>) {
    let shot = span(SegmentCategory::Camera, 1000, 2000);
    let segments = vec![
        shot.clone(),
        span(SegmentCategory::Dialogue, 0, 1000),    // ends at shot start
        span(SegmentCategory::Dialogue, 500, 1500),  // crosses start
        span(SegmentCategory::Dialogue, 1000, 2000), // exact match
        span(SegmentCategory::Storyboard, 1200, 1800), // inside
        span(SegmentCategory::Dialogue, 1500, 2500), // crosses end
        span(SegmentCategory::Music, 0, 5000),       // spans everything
        span(SegmentCategory::Dialogue, 2000, 3000), // starts at shot end
    ];
    (shot, segments)
}

fn ranges(found: &[&Segment]) -> Vec<(u64, u64)> {
    found.iter().map(|s| (s.start_time_ms, s.end_time_ms)).collect()
}

#[test]
fn start_mode_selects_segments_starting_inside() {
    let (shot, segments) = timeline();
    let found = filter_segments(FilteringMode::Start, &shot, &segments, None);
    assert_eq!(
        ranges(&found),
        vec![(1000, 2000), (1000, 2000), (1200, 1800), (1500, 2500)]
    );
}

#[test]
fn end_mode_selects_segments_ending_inside() {
    let (shot, segments) = timeline();
    let found = filter_segments(FilteringMode::End, &shot, &segments, None);
    assert_eq!(
        ranges(&found),
        vec![(1000, 2000), (500, 1500), (1000, 2000), (1200, 1800)]
    );
}

#[test]
fn both_mode_selects_contained_segments() {
    let (shot, segments) = timeline();
    let found = filter_segments(FilteringMode::Both, &shot, &segments, None);
    assert_eq!(ranges(&found), vec![(1000, 2000), (1000, 2000), (1200, 1800)]);
}

#[test]
fn any_mode_selects_overlapping_segments() {
    let (shot, segments) = timeline();
    let found = filter_segments(FilteringMode::Any, &shot, &segments, None);
    assert_eq!(
        ranges(&found),
        vec![
            (1000, 2000),
            (500, 1500),
            (1000, 2000),
            (1200, 1800),
            (1500, 2500),
            (0, 5000)
        ]
    );
}

#[test]
fn category_narrows_selection() {
    let (shot, segments) = timeline();
    let found = filter_segments(
        FilteringMode::Any,
        &shot,
        &segments,
        Some(SegmentCategory::Storyboard),
    );
    assert_eq!(ranges(&found), vec![(1200, 1800)]);
}

#[test]
fn zero_length_shot_contains_its_own_storyboard() {
    let shot = span(SegmentCategory::Camera, 3000, 3000);
    let segments = vec![
        shot.clone(),
        span(SegmentCategory::Storyboard, 3000, 3000),
        span(SegmentCategory::Dialogue, 2000, 3000),
        span(SegmentCategory::Dialogue, 3000, 4000),
    ];
    let found = filter_segments(FilteringMode::Both, &shot, &segments, None);
    assert_eq!(ranges(&found), vec![(3000, 3000), (3000, 3000)]);
}
