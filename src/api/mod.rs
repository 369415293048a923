mod engine;
mod engine_config;
mod engine_snapshot;
mod frame_scheduler;
mod gesture_coordinator;
mod overlay_frame_builder;
mod render_style;
mod series_frame_builder;

pub use engine::ViewportEngine;
pub use engine_config::{ENGINE_CONFIG_JSON_SCHEMA_V1, EngineConfig, EngineConfigJsonContractV1, GridConfig, MarkerConfig};
pub use engine_snapshot::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot, EngineSnapshotJsonContractV1};
pub use frame_scheduler::{FrameScheduler, FrameSchedulerStats, FrameTicket, RenderScope};
pub use overlay_frame_builder::{build_overlay_frame, crosshair_label};
pub use render_style::RenderStyle;
pub use series_frame_builder::{GridIntervals, SeriesFrame, SeriesFrameStats, build_series_frame};
