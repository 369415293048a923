use serde::{Deserialize, Serialize};

use crate::error::{ViewportError, ViewportResult};

/// One sample of the ordered series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned rectangle stored as origin plus extent.
///
/// Used for both the data domain and the visible view. In data space the
/// origin is the bottom-left corner (y grows upward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds the rectangle spanned by two arbitrary corners.
    #[must_use]
    pub fn from_corners(a: DataPoint, b: DataPoint) -> Self {
        let min_x = a.x.min(b.x);
        let min_y = a.y.min(b.y);
        Self {
            x: min_x,
            y: min_y,
            width: a.x.max(b.x) - min_x,
            height: a.y.max(b.y) - min_y,
        }
    }

    #[must_use]
    pub fn origin(self) -> DataPoint {
        DataPoint::new(self.x, self.y)
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(self) -> DataPoint {
        DataPoint::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[must_use]
    pub fn contains(self, point: DataPoint) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.top()
    }
}

/// Physical drawing target: logical size scaled by the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub logical_width: f64,
    pub logical_height: f64,
    pub dpr: f64,
}

impl Surface {
    pub fn new(logical_width: f64, logical_height: f64, dpr: f64) -> ViewportResult<Self> {
        let surface = Self {
            logical_width,
            logical_height,
            dpr,
        };
        if !surface.is_valid() {
            return Err(ViewportError::InvalidSurface {
                width: logical_width,
                height: logical_height,
                dpr,
            });
        }
        Ok(surface)
    }

    /// Finite positive inputs that still cover at least one physical pixel
    /// per axis after rounding.
    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.logical_width, self.logical_height, self.dpr]
            .into_iter()
            .all(|value| value.is_finite() && value > 0.0)
            && self.physical_width() >= 1.0
            && self.physical_height() >= 1.0
    }

    #[must_use]
    pub fn physical_width(self) -> f64 {
        (self.logical_width * self.dpr).round()
    }

    #[must_use]
    pub fn physical_height(self) -> f64 {
        (self.logical_height * self.dpr).round()
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            logical_width: 600.0,
            logical_height: 400.0,
            dpr: 1.0,
        }
    }
}

/// Space reserved around the plot area, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Padding {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self::uniform(0.0)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.left, self.top, self.right, self.bottom]
            .into_iter()
            .all(|value| value.is_finite() && value >= 0.0)
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            left: 8.0,
            top: 8.0,
            right: 56.0,
            bottom: 24.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DataPoint, Rect, Surface};

    #[test]
    fn rect_from_corners_orders_min_and_max() {
        let rect = Rect::from_corners(DataPoint::new(8.0, 1.0), DataPoint::new(2.0, 5.0));
        assert_eq!(rect, Rect::new(2.0, 1.0, 6.0, 4.0));
    }

    #[test]
    fn surface_scales_by_device_pixel_ratio() {
        let surface = Surface::new(300.0, 150.0, 2.0).expect("valid surface");
        assert_eq!(surface.physical_width(), 600.0);
        assert_eq!(surface.physical_height(), 300.0);
    }

    #[test]
    fn surface_rejects_zero_dpr() {
        assert!(Surface::new(300.0, 150.0, 0.0).is_err());
    }
}
