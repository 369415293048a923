use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, Rect, first_index_after, first_index_at_or_after};

/// View edge uncovered by a horizontal pan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealedEdge {
    Left,
    Right,
}

/// View with its y origin moved so the sample at the revealed edge is visible.
///
/// Returns `None` when no sample is visible or the edge sample already lies
/// inside the view's y-range. The view height is unchanged; the caller clamps
/// the result against the domain.
#[must_use]
pub fn edge_follow_view(points: &[DataPoint], view: Rect, edge: RevealedEdge) -> Option<Rect> {
    let first = first_index_at_or_after(points, view.x);
    let end = first_index_after(points, view.right());
    if first >= end {
        return None;
    }

    let sample = match edge {
        RevealedEdge::Left => points[first],
        RevealedEdge::Right => points[end - 1],
    };
    if sample.y < view.y {
        Some(Rect { y: sample.y, ..view })
    } else if sample.y > view.top() {
        Some(Rect {
            y: sample.y - view.height,
            ..view
        })
    } else {
        None
    }
}
