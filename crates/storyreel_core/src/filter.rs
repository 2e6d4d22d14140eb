//! Time-range queries over segments.

use crate::{Segment, SegmentCategory};

/// How a segment must relate to the reference range to be selected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter,
)]
pub enum FilteringMode {
    /// Starts inside `[ref.start, ref.end)`
    Start,
    /// Ends inside `(ref.start, ref.end]`
    End,
    /// Lies inside `[ref.start, ref.end]`, zero-length ranges included
    Both,
    /// Starts or ends inside the range, or spans it entirely
    Any,
}

/// Select the segments that fall in `reference`'s time range.
///
/// The reference segment is selected too when it is part of `segments` and
/// matches the category filter. Order of `segments` is preserved.
///
/// # Examples
///
/// ```
/// use storyreel_core::{FilteringMode, Segment, SegmentCategory, filter_segments};
///
/// let shot = Segment::builder()
///     .start_time_ms(0u64).end_time_ms(3000u64)
///     .category(SegmentCategory::Camera)
///     .build().unwrap();
/// let dialogue = Segment::builder()
///     .start_time_ms(0u64).end_time_ms(3000u64)
///     .category(SegmentCategory::Dialogue)
///     .build().unwrap();
/// let next = Segment::builder()
///     .start_time_ms(3000u64).end_time_ms(6000u64)
///     .category(SegmentCategory::Dialogue)
///     .build().unwrap();
///
/// let all = vec![shot.clone(), dialogue, next];
/// let found = filter_segments(FilteringMode::Both, &shot, &all, Some(SegmentCategory::Dialogue));
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].start_time_ms, 0);
///
/// // the shot itself lies in its own range
/// assert_eq!(filter_segments(FilteringMode::Both, &shot, &all, None).len(), 2);
/// ```
pub fn filter_segments<'a>(
    mode: FilteringMode,
    reference: &Segment,
    segments: &'a [Segment],
    category: Option<SegmentCategory>,
) -> Vec<&'a Segment> {
    segments
        .iter()
        .filter(|s| selects(mode, reference, s, category))
        .collect()
}

/// Positions in `segments` of the segments [`filter_segments`] would select.
pub(crate) fn filter_segment_indices(
    mode: FilteringMode,
    reference: &Segment,
    segments: &[Segment],
    category: Option<SegmentCategory>,
) -> Vec<usize> {
    segments
        .iter()
        .enumerate()
        .filter(|(_, s)| selects(mode, reference, s, category))
        .map(|(i, _)| i)
        .collect()
}

fn selects(
    mode: FilteringMode,
    reference: &Segment,
    segment: &Segment,
    category: Option<SegmentCategory>,
) -> bool {
    if category.is_some_and(|c| segment.category != c) {
        return false;
    }

    let (start, end) = (reference.start_time_ms, reference.end_time_ms);
    match mode {
        FilteringMode::Start => segment.starts_within(start, end),
        FilteringMode::End => segment.ends_within(start, end),
        FilteringMode::Both => segment.lies_within(start, end),
        FilteringMode::Any => {
            segment.starts_within(start, end)
                || segment.ends_within(start, end)
                || (segment.start_time_ms <= start && segment.end_time_ms >= end)
        }
    }
}
