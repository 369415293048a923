pub mod affine;
pub mod decimation;
pub mod domain;
pub mod grid;
pub mod range_index;
pub mod types;
pub mod viewport;

pub use affine::AffineTransform2D;
pub use decimation::{Decimator, average_spacing_px, markers_visible};
pub use domain::{EMPTY_DOMAIN, MIN_DOMAIN_EXTENT, domain_from_points};
pub use grid::{
    GridValues, MAX_GRIDLINES, format_grid_value, grid_values, label_precision, nice_interval,
};
pub use range_index::{first_index_after, first_index_at_or_after, nearest_index, visible_index_range};
pub use types::{DataPoint, Padding, Rect, Surface};
pub use viewport::{
    AxisLock, DerivedTransforms, GestureIntent, MIN_VIEW_EXTENT, PinnedAxis, ViewportModel,
    clamp_view, derive_transforms, plot_area_physical,
};
