//! Binary search over x-sorted samples.

use std::ops::Range;

use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::DataPoint;

/// Returns the first index whose `x >= value`, or `points.len()` if none.
///
/// Duplicate keys resolve to the leftmost match. `points` must be sorted by
/// non-decreasing `x`.
#[must_use]
pub fn first_index_at_or_after(points: &[DataPoint], value: f64) -> usize {
    lower_bound(points, |x| x < value)
}

/// Returns the first index whose `x > value`, or `points.len()` if none.
#[must_use]
pub fn first_index_after(points: &[DataPoint], value: f64) -> usize {
    lower_bound(points, |x| x <= value)
}

fn lower_bound(points: &[DataPoint], is_before: impl Fn(f64) -> bool) -> usize {
    let mut low = 0usize;
    let mut high = points.len();
    while low < high {
        let mid = low + (high - low) / 2;
        if is_before(points[mid].x) {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}

/// Index range `[min, max)` covering samples inside `[start, end]`, padded by
/// one sample on each side so polylines reach the plot edges.
#[must_use]
pub fn visible_index_range(points: &[DataPoint], start: f64, end: f64) -> Range<usize> {
    let (start, end) = if start <= end {
        (start, end)
    } else {
        (end, start)
    };
    let min = first_index_at_or_after(points, start).saturating_sub(1);
    let max = first_index_at_or_after(points, end)
        .saturating_add(1)
        .min(points.len());
    min..max.max(min)
}

/// Index of the sample whose x is closest to `value`.
///
/// Candidates are the located insertion point and its predecessor; ties go to
/// the predecessor.
#[must_use]
pub fn nearest_index(points: &[DataPoint], value: f64) -> Option<usize> {
    let located = first_index_at_or_after(points, value);
    let mut candidates: SmallVec<[(OrderedFloat<f64>, usize); 2]> = SmallVec::new();
    if located > 0 {
        let before = located - 1;
        candidates.push((OrderedFloat((value - points[before].x).abs()), before));
    }
    if let Some(point) = points.get(located) {
        candidates.push((OrderedFloat((point.x - value).abs()), located));
    }

    candidates
        .into_iter()
        .min_by_key(|candidate| candidate.0)
        .map(|(_, index)| index)
}
