use tracing::debug;

use crate::core::{DataPoint, Rect};

/// Extent substituted for a zero-width or zero-height domain axis.
pub const MIN_DOMAIN_EXTENT: f64 = 1.0;

/// Domain used when the dataset is empty.
pub const EMPTY_DOMAIN: Rect = Rect::new(0.0, 0.0, MIN_DOMAIN_EXTENT, MIN_DOMAIN_EXTENT);

/// Computes the full data extent of an x-sorted series.
///
/// The x range is read from the first and last samples; the y range needs a
/// full scan. A degenerate axis (all samples share one value) is widened to
/// `MIN_DOMAIN_EXTENT` centered on that value so scale factors stay finite.
#[must_use]
pub fn domain_from_points(points: &[DataPoint]) -> Rect {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        debug!("empty dataset, using fallback domain");
        return EMPTY_DOMAIN;
    };

    let (min_y, max_y) = y_extent(points);
    let (x, width) = widen_degenerate(first.x, last.x - first.x, "x");
    let (y, height) = widen_degenerate(min_y, max_y - min_y, "y");
    Rect::new(x, y, width, height)
}

fn widen_degenerate(origin: f64, extent: f64, axis: &'static str) -> (f64, f64) {
    if extent > 0.0 {
        return (origin, extent);
    }
    debug!(axis, value = origin, "degenerate domain axis, widening to minimum extent");
    (origin - MIN_DOMAIN_EXTENT * 0.5, MIN_DOMAIN_EXTENT)
}

#[cfg(feature = "parallel-domain-scan")]
fn y_extent(points: &[DataPoint]) -> (f64, f64) {
    use rayon::prelude::*;

    points
        .par_iter()
        .fold(
            || (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), point| (lo.min(point.y), hi.max(point.y)),
        )
        .reduce(
            || (f64::INFINITY, f64::NEG_INFINITY),
            |(lo_a, hi_a), (lo_b, hi_b)| (lo_a.min(lo_b), hi_a.max(hi_b)),
        )
}

#[cfg(not(feature = "parallel-domain-scan"))]
fn y_extent(points: &[DataPoint]) -> (f64, f64) {
    points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), point| {
            (lo.min(point.y), hi.max(point.y))
        })
}

#[cfg(test)]
mod tests {
    use super::{EMPTY_DOMAIN, domain_from_points};
    use crate::core::{DataPoint, Rect};

    #[test]
    fn domain_spans_first_to_last_x_and_min_to_max_y() {
        let points = [
            DataPoint::new(2.0, 4.0),
            DataPoint::new(3.0, -1.0),
            DataPoint::new(7.0, 9.0),
        ];
        assert_eq!(domain_from_points(&points), Rect::new(2.0, -1.0, 5.0, 10.0));
    }

    #[test]
    fn empty_dataset_falls_back_to_unit_domain() {
        assert_eq!(domain_from_points(&[]), EMPTY_DOMAIN);
    }

    #[test]
    fn single_point_is_centered_in_unit_domain() {
        let domain = domain_from_points(&[DataPoint::new(5.0, 42.0)]);
        assert_eq!(domain, Rect::new(4.5, 41.5, 1.0, 1.0));
    }
}
