//! Domain/view/surface state and the transforms derived from it.
//!
//! Coordinate spaces:
//! - **data**: raw sample coordinates, y grows upward.
//! - **domain-normalized**: the current view stretched over the domain's
//!   extent, so the view always spans `[0, domain.width] × [0, domain.height]`.
//! - **physical**: device pixels of the surface, origin top-left, y grows
//!   downward.
//!
//! `view_matrix` maps data → domain-normalized, `projection_matrix` maps
//! domain-normalized → physical, and `view_projection_matrix` is
//! `view_matrix.then(projection_matrix)`.

use serde::{Deserialize, Serialize};
use tracing::{error, trace};

use crate::core::{AffineTransform2D, DataPoint, Padding, Rect, Surface};
use crate::error::{ViewportError, ViewportResult};

/// Smallest view extent on a non-pinned axis (capped by the domain extent).
pub const MIN_VIEW_EXTENT: f64 = 1.0;

/// Smallest plot-area extent in physical pixels, so projection stays invertible
/// even when padding swallows the whole surface.
const MIN_PLOT_EXTENT_PX: f64 = 1.0;

/// An axis whose view extent is fixed instead of clamped to a range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PinnedAxis {
    X { extent: f64 },
    Y { extent: f64 },
}

impl PinnedAxis {
    #[must_use]
    pub fn extent(self) -> f64 {
        match self {
            Self::X { extent } | Self::Y { extent } => extent,
        }
    }
}

/// Which axes an anchored scale is allowed to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisLock {
    #[default]
    Free,
    /// x scale stays 1 (y-only zoom).
    LockX,
    /// y scale stays 1 (x-only zoom).
    LockY,
}

/// View mutation produced by the input adapter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureIntent {
    /// Translate the view by a data-space delta.
    Pan { dx: f64, dy: f64 },
    /// Scale the view extent by `factor` keeping `anchor` fixed.
    ScaleAroundAnchor {
        factor: f64,
        axis_lock: AxisLock,
        anchor: DataPoint,
    },
    /// Replace the view outright (drag-to-zoom).
    SetViewRect { rect: Rect },
}

/// The three matrices derived from domain, view and surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedTransforms {
    pub view_matrix: AffineTransform2D,
    pub projection_matrix: AffineTransform2D,
    pub view_projection_matrix: AffineTransform2D,
}

/// Pure derivation of every transform from its inputs.
#[must_use]
pub fn derive_transforms(
    domain: Rect,
    view: Rect,
    surface: Surface,
    padding: Padding,
) -> DerivedTransforms {
    let view_matrix = AffineTransform2D::translation(-view.x, -view.y).then(
        AffineTransform2D::scale(domain.width / view.width, domain.height / view.height),
    );

    let plot = plot_area_physical(surface, padding);
    // Flip y: domain-normalized y = 0 lands on the plot's bottom edge.
    let projection_matrix = AffineTransform2D::scale(
        plot.width / domain.width,
        -plot.height / domain.height,
    )
    .then(AffineTransform2D::translation(plot.x, plot.y + plot.height));

    DerivedTransforms {
        view_matrix,
        projection_matrix,
        view_projection_matrix: view_matrix.then(projection_matrix),
    }
}

/// Plot area in physical pixels (origin top-left).
#[must_use]
pub fn plot_area_physical(surface: Surface, padding: Padding) -> Rect {
    let dpr = surface.dpr;
    let width = (surface.physical_width() - (padding.left + padding.right) * dpr)
        .max(MIN_PLOT_EXTENT_PX);
    let height = (surface.physical_height() - (padding.top + padding.bottom) * dpr)
        .max(MIN_PLOT_EXTENT_PX);
    Rect::new(padding.left * dpr, padding.top * dpr, width, height)
}

/// Clamps `rect` so it is a valid sub-window of `domain`.
///
/// Extents are clamped to `[min(1, domain extent), domain extent]` (or set to
/// the pinned extent), then origins are clamped so the rectangle never leaves
/// the domain. Non-finite fields fall back to the domain's. Idempotent.
#[must_use]
pub fn clamp_view(rect: Rect, domain: Rect, pinned: Option<PinnedAxis>) -> Rect {
    let width = match pinned {
        Some(PinnedAxis::X { extent }) => extent,
        _ => clamp_extent(rect.width, domain.width),
    };
    let height = match pinned {
        Some(PinnedAxis::Y { extent }) => extent,
        _ => clamp_extent(rect.height, domain.height),
    };
    Rect::new(
        clamp_origin(rect.x, width, domain.x, domain.width),
        clamp_origin(rect.y, height, domain.y, domain.height),
        width,
        height,
    )
}

fn clamp_extent(extent: f64, domain_extent: f64) -> f64 {
    if !extent.is_finite() {
        return domain_extent;
    }
    extent.clamp(MIN_VIEW_EXTENT.min(domain_extent), domain_extent)
}

fn clamp_origin(origin: f64, extent: f64, domain_origin: f64, domain_extent: f64) -> f64 {
    if !origin.is_finite() {
        return domain_origin;
    }
    let max_origin = (domain_origin + domain_extent - extent).max(domain_origin);
    origin.clamp(domain_origin, max_origin)
}

/// Single source of truth for domain, view, surface and derived transforms.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportModel {
    domain: Rect,
    view: Rect,
    surface: Surface,
    padding: Padding,
    pinned: Option<PinnedAxis>,
    transforms: DerivedTransforms,
}

impl ViewportModel {
    pub fn new(domain: Rect, surface: Surface, padding: Padding) -> ViewportResult<Self> {
        validate_domain(domain)?;
        validate_surface(surface)?;
        if !padding.is_valid() {
            return Err(ViewportError::Configuration(
                "padding must be finite and >= 0".to_owned(),
            ));
        }
        Ok(Self {
            domain,
            view: domain,
            surface,
            padding,
            pinned: None,
            transforms: derive_transforms(domain, domain, surface, padding),
        })
    }

    /// Replaces the domain and resets the view to it.
    pub fn initialize(&mut self, domain: Rect) -> ViewportResult<()> {
        validate_domain(domain)?;
        self.domain = domain;
        self.commit_view(domain);
        Ok(())
    }

    pub fn resize(&mut self, width: f64, height: f64, dpr: f64) -> ViewportResult<()> {
        let surface = Surface::new(width, height, dpr)?;
        self.surface = surface;
        self.refresh_transforms();
        trace!(width, height, dpr, "viewport resized");
        Ok(())
    }

    pub fn set_padding(&mut self, padding: Padding) -> ViewportResult<()> {
        if !padding.is_valid() {
            return Err(ViewportError::Configuration(
                "padding must be finite and >= 0".to_owned(),
            ));
        }
        self.padding = padding;
        self.refresh_transforms();
        Ok(())
    }

    /// Pins (or unpins) one axis to a fixed extent and re-clamps the view.
    pub fn set_pinned_axis(&mut self, pinned: Option<PinnedAxis>) -> ViewportResult<()> {
        if let Some(pin) = pinned {
            let extent = pin.extent();
            if !extent.is_finite() || extent <= 0.0 {
                return Err(ViewportError::Configuration(
                    "pinned axis extent must be finite and > 0".to_owned(),
                ));
            }
        }
        self.pinned = pinned;
        self.commit_view(self.view);
        Ok(())
    }

    pub fn translate_view(&mut self, dx: f64, dy: f64) -> ViewportResult<Rect> {
        if !dx.is_finite() || !dy.is_finite() {
            return Err(ViewportError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }
        Ok(self.transform_view(AffineTransform2D::translation(dx, dy)))
    }

    pub fn scale_view(
        &mut self,
        factor: f64,
        anchor: DataPoint,
        axis_lock: AxisLock,
    ) -> ViewportResult<Rect> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ViewportError::InvalidData(
                "scale factor must be finite and > 0".to_owned(),
            ));
        }
        if !anchor.is_finite() {
            return Err(ViewportError::InvalidData(
                "scale anchor must be finite".to_owned(),
            ));
        }
        let (sx, sy) = match axis_lock {
            AxisLock::Free => (factor, factor),
            AxisLock::LockX => (1.0, factor),
            AxisLock::LockY => (factor, 1.0),
        };
        Ok(self.transform_view(AffineTransform2D::scale_about(sx, sy, anchor)))
    }

    pub fn set_view(&mut self, rect: Rect) -> Rect {
        self.commit_view(rect)
    }

    pub fn reset_view(&mut self) -> Rect {
        self.commit_view(self.domain)
    }

    pub fn apply_intent(&mut self, intent: GestureIntent) -> ViewportResult<Rect> {
        match intent {
            GestureIntent::Pan { dx, dy } => self.translate_view(dx, dy),
            GestureIntent::ScaleAroundAnchor {
                factor,
                axis_lock,
                anchor,
            } => self.scale_view(factor, anchor, axis_lock),
            GestureIntent::SetViewRect { rect } => Ok(self.set_view(rect)),
        }
    }

    /// Clamps `rect` against this model's domain and pinned axis.
    #[must_use]
    pub fn clamp_view(&self, rect: Rect) -> Rect {
        clamp_view(rect, self.domain, self.pinned)
    }

    /// Maps a logical surface position to data space.
    pub fn try_unproject(&self, logical_x: f64, logical_y: f64) -> ViewportResult<DataPoint> {
        let dpr = self.surface.dpr;
        self.try_unproject_physical(logical_x * dpr, logical_y * dpr)
    }

    pub fn try_unproject_physical(
        &self,
        physical_x: f64,
        physical_y: f64,
    ) -> ViewportResult<DataPoint> {
        let inverse = self.transforms.view_projection_matrix.invert()?;
        Ok(inverse.apply(DataPoint::new(physical_x, physical_y)))
    }

    /// Like [`Self::try_unproject`], but reports a singular transform through
    /// `tracing` and returns `None`.
    #[must_use]
    pub fn unproject(&self, logical_x: f64, logical_y: f64) -> Option<DataPoint> {
        match self.try_unproject(logical_x, logical_y) {
            Ok(point) => Some(point),
            Err(err) => {
                error!(error = %err, view = ?self.view, "unproject failed on singular transform");
                None
            }
        }
    }

    /// Maps a data point to logical surface coordinates.
    #[must_use]
    pub fn project(&self, point: DataPoint) -> DataPoint {
        let physical = self.project_physical(point);
        DataPoint::new(physical.x / self.surface.dpr, physical.y / self.surface.dpr)
    }

    #[must_use]
    pub fn project_physical(&self, point: DataPoint) -> DataPoint {
        self.transforms.view_projection_matrix.apply(point)
    }

    /// Data-space vector covered by a physical-pixel displacement.
    pub fn physical_delta_to_data(&self, dx: f64, dy: f64) -> ViewportResult<DataPoint> {
        let inverse = self.transforms.view_projection_matrix.invert()?;
        Ok(inverse.apply_vector(DataPoint::new(dx, dy)))
    }

    /// Data-space width of one physical pixel along x.
    pub fn pixel_width_in_data(&self) -> ViewportResult<f64> {
        Ok(self.physical_delta_to_data(1.0, 0.0)?.x.abs())
    }

    /// Data-space height of one physical pixel along y.
    pub fn pixel_height_in_data(&self) -> ViewportResult<f64> {
        Ok(self.physical_delta_to_data(0.0, 1.0)?.y.abs())
    }

    /// The view rectangle transformed to physical space (clip region).
    #[must_use]
    pub fn view_rect_physical(&self) -> Rect {
        let bottom_left = self.project_physical(self.view.origin());
        let top_right =
            self.project_physical(DataPoint::new(self.view.right(), self.view.top()));
        Rect::from_corners(bottom_left, top_right)
    }

    #[must_use]
    pub fn domain(&self) -> Rect {
        self.domain
    }

    #[must_use]
    pub fn view(&self) -> Rect {
        self.view
    }

    #[must_use]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    #[must_use]
    pub fn padding(&self) -> Padding {
        self.padding
    }

    #[must_use]
    pub fn pinned_axis(&self) -> Option<PinnedAxis> {
        self.pinned
    }

    #[must_use]
    pub fn transforms(&self) -> DerivedTransforms {
        self.transforms
    }

    /// Applies `transform` to the view: origin as a point, extent as a vector.
    fn transform_view(&mut self, transform: AffineTransform2D) -> Rect {
        let origin = transform.apply(self.view.origin());
        let extent = transform.apply_vector(DataPoint::new(self.view.width, self.view.height));
        self.commit_view(Rect::new(origin.x, origin.y, extent.x, extent.y))
    }

    fn commit_view(&mut self, rect: Rect) -> Rect {
        self.view = self.clamp_view(rect);
        self.refresh_transforms();
        trace!(view = ?self.view, "view updated");
        self.view
    }

    fn refresh_transforms(&mut self) {
        self.transforms = derive_transforms(self.domain, self.view, self.surface, self.padding);
    }
}

fn validate_domain(domain: Rect) -> ViewportResult<()> {
    if !domain.is_valid() {
        return Err(ViewportError::InvalidData(format!(
            "domain must be finite with positive extent, got {domain:?}"
        )));
    }
    Ok(())
}

fn validate_surface(surface: Surface) -> ViewportResult<()> {
    if !surface.is_valid() {
        return Err(ViewportError::InvalidSurface {
            width: surface.logical_width,
            height: surface.logical_height,
            dpr: surface.dpr,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{PinnedAxis, ViewportModel, clamp_view};
    use crate::core::{DataPoint, Padding, Rect, Surface};

    fn model() -> ViewportModel {
        ViewportModel::new(
            Rect::new(0.0, 0.0, 100.0, 10.0),
            Surface::new(200.0, 100.0, 1.0).expect("surface"),
            Padding::zero(),
        )
        .expect("model")
    }

    #[test]
    fn projection_flips_y_axis() {
        let model = model();
        let bottom_left = model.project_physical(DataPoint::new(0.0, 0.0));
        let top_right = model.project_physical(DataPoint::new(100.0, 10.0));
        assert_eq!(bottom_left, DataPoint::new(0.0, 100.0));
        assert_eq!(top_right, DataPoint::new(200.0, 0.0));
    }

    #[test]
    fn pinned_axis_collapses_extent_to_fixed_value() {
        let domain = Rect::new(0.0, 0.0, 100.0, 10.0);
        let pinned = Some(PinnedAxis::Y { extent: 2.0 });
        let clamped = clamp_view(Rect::new(10.0, 9.5, 20.0, 7.0), domain, pinned);
        assert_eq!(clamped, Rect::new(10.0, 8.0, 20.0, 2.0));
    }

    #[test]
    fn padding_offsets_plot_area() {
        let mut model = model();
        model
            .set_padding(Padding::uniform(10.0))
            .expect("padding");
        let rect = model.view_rect_physical();
        assert_eq!(rect, Rect::new(10.0, 10.0, 180.0, 80.0));
    }
}
