//! Per-pixel-column max aggregation of visible samples.
//!
//! The decimator collapses every run of samples whose x-distance from the
//! run's first sample is at most one physical pixel into a single vertex
//! `(run_start_x, max_y)`. Consecutive vertices are therefore more than one
//! pixel apart, so the emitted count is bounded by the plot's physical width
//! (plus the two padding samples) no matter how many samples are visible.

use std::ops::Range;

use crate::core::range_index::{first_index_after, visible_index_range};
use crate::core::{DataPoint, Rect};
use crate::error::{ViewportError, ViewportResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decimator {
    pixel_width_in_data: f64,
}

impl Decimator {
    /// `pixel_width_in_data` is the data-space width of one physical pixel.
    pub fn new(pixel_width_in_data: f64) -> ViewportResult<Self> {
        if !pixel_width_in_data.is_finite() || pixel_width_in_data <= 0.0 {
            return Err(ViewportError::InvalidData(
                "pixel width in data space must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self {
            pixel_width_in_data,
        })
    }

    #[must_use]
    pub fn pixel_width_in_data(self) -> f64 {
        self.pixel_width_in_data
    }

    /// Padded index range of samples intersecting the view's x-range.
    #[must_use]
    pub fn visible_range(points: &[DataPoint], view: Rect) -> Range<usize> {
        visible_index_range(points, view.x, view.right())
    }

    #[must_use]
    pub fn decimate(self, points: &[DataPoint], range: Range<usize>) -> Vec<DataPoint> {
        let mut out = Vec::new();
        self.decimate_into(points, range, &mut out);
        out
    }

    /// Appends decimated vertices for `points[range]` into `out`.
    pub fn decimate_into(self, points: &[DataPoint], range: Range<usize>, out: &mut Vec<DataPoint>) {
        let end = range.end.min(points.len());
        let mut index = range.start.min(end);
        while index < end {
            let start = points[index];
            let span_end =
                index + first_index_after(&points[index..end], start.x + self.pixel_width_in_data);
            let max_y = points[index..span_end]
                .iter()
                .fold(start.y, |acc, point| acc.max(point.y));
            out.push(DataPoint::new(start.x, max_y));
            // `first_index_after` always moves past `start` itself.
            index = span_end.max(index + 1);
        }
    }
}

/// Average horizontal spacing between consecutive projected vertices.
#[must_use]
pub fn average_spacing_px(projected: &[DataPoint]) -> Option<f64> {
    let (first, last) = (projected.first()?, projected.last()?);
    if projected.len() < 2 {
        return None;
    }
    Some((last.x - first.x).abs() / (projected.len() - 1) as f64)
}

/// Markers are drawn only when samples are sparse enough to be readable.
#[must_use]
pub fn markers_visible(projected: &[DataPoint], threshold_px: f64) -> bool {
    match average_spacing_px(projected) {
        Some(spacing) => spacing > threshold_px,
        None => !projected.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::{Decimator, markers_visible};
    use crate::core::DataPoint;

    #[test]
    fn samples_within_one_pixel_collapse_to_max() {
        let points = vec![
            DataPoint::new(0.0, 1.0),
            DataPoint::new(0.4, 7.0),
            DataPoint::new(0.9, 3.0),
            DataPoint::new(2.0, 2.0),
        ];
        let decimator = Decimator::new(1.0).expect("decimator");
        let out = decimator.decimate(&points, 0..points.len());
        assert_eq!(out, vec![DataPoint::new(0.0, 7.0), DataPoint::new(2.0, 2.0)]);
    }

    #[test]
    fn sparse_samples_pass_through() {
        let points: Vec<DataPoint> = (0..5).map(|i| DataPoint::new(f64::from(i) * 10.0, 1.0)).collect();
        let decimator = Decimator::new(1.0).expect("decimator");
        assert_eq!(decimator.decimate(&points, 0..5), points);
    }

    #[test]
    fn rejects_non_positive_pixel_width() {
        assert!(Decimator::new(0.0).is_err());
        assert!(Decimator::new(f64::NAN).is_err());
    }

    #[test]
    fn markers_follow_spacing_threshold() {
        let dense = [DataPoint::new(0.0, 0.0), DataPoint::new(2.0, 0.0)];
        let sparse = [DataPoint::new(0.0, 0.0), DataPoint::new(20.0, 0.0)];
        assert!(!markers_visible(&dense, 6.0));
        assert!(markers_visible(&sparse, 6.0));
    }
}
