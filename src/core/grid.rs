use smallvec::SmallVec;

/// Multipliers tried on top of the base power of ten, in order.
const NICE_MULTIPLIERS: [f64; 5] = [1.0, 2.0, 3.0, 5.0, 10.0];

/// Hard cap on gridlines per axis regardless of interval.
pub const MAX_GRIDLINES: usize = 128;

pub type GridValues = SmallVec<[f64; 32]>;

/// Picks a "nice" gridline interval in data units.
///
/// `data_per_px` is the data-space size of one on-screen pixel. The base
/// candidate is the largest power of ten not exceeding the data size of
/// `min_spacing_px`; it is then stepped up through ×2, ×3, ×5 and ×10 until
/// the rendered spacing reaches `min_spacing_px`.
#[must_use]
pub fn nice_interval(data_per_px: f64, min_spacing_px: f64) -> Option<f64> {
    if !data_per_px.is_finite() || data_per_px <= 0.0 {
        return None;
    }
    if !min_spacing_px.is_finite() || min_spacing_px <= 0.0 {
        return None;
    }

    let target = data_per_px * min_spacing_px;
    let base = 10f64.powi(target.log10().floor() as i32);
    NICE_MULTIPLIERS
        .iter()
        .map(|multiplier| base * multiplier)
        .find(|candidate| candidate / data_per_px >= min_spacing_px)
        .or(Some(base * 10.0))
        .filter(|interval| interval.is_finite() && *interval > 0.0)
}

/// Multiples of `interval` inside `[start, end]`.
#[must_use]
pub fn grid_values(start: f64, end: f64, interval: f64) -> GridValues {
    let mut values = GridValues::new();
    if !interval.is_finite() || interval <= 0.0 || !start.is_finite() || !end.is_finite() {
        return values;
    }

    let first = (start / interval).ceil();
    for step in 0..MAX_GRIDLINES {
        let value = (first + step as f64) * interval;
        if value > end {
            break;
        }
        values.push(value);
    }
    values
}

/// Number of decimals needed to tell adjacent gridlines apart.
#[must_use]
pub fn label_precision(interval: f64) -> usize {
    if !interval.is_finite() || interval <= 0.0 || interval >= 1.0 {
        return 0;
    }
    (-interval.log10() - 1e-9).ceil().clamp(0.0, 12.0) as usize
}

#[must_use]
pub fn format_grid_value(value: f64, precision: usize) -> String {
    let scale = 10f64.powi(precision as i32);
    // Avoid printing "-0" for values that round to zero.
    let value = if (value * scale).round() == 0.0 {
        0.0
    } else {
        value
    };
    format!("{value:.precision$}")
}
