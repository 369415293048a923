use serde::{Deserialize, Serialize};

use crate::core::{DerivedTransforms, Padding, PinnedAxis, Rect, Surface, plot_area_physical};
use crate::error::{ViewportError, ViewportResult};
use crate::interaction::{CrosshairState, InteractionMode};
use crate::render::Renderer;

use super::{FrameSchedulerStats, SeriesFrameStats, ViewportEngine};

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable readout of engine state for host debug panels and regression
/// tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub surface: Surface,
    pub padding: Padding,
    pub plot_area_physical: Rect,
    pub domain: Rect,
    pub view: Rect,
    #[serde(default)]
    pub pinned_axis: Option<PinnedAxis>,
    pub transforms: DerivedTransforms,
    pub point_count: usize,
    pub crosshair: CrosshairState,
    #[serde(default)]
    pub selection: Option<Rect>,
    pub interaction_mode: InteractionMode,
    pub series: SeriesFrameStats,
    pub scheduler: FrameSchedulerStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ViewportResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ViewportError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> ViewportResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<EngineSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: EngineSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ViewportError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != ENGINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ViewportError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> ViewportEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let model = &self.model;
        EngineSnapshot {
            surface: model.surface(),
            padding: model.padding(),
            plot_area_physical: plot_area_physical(model.surface(), model.padding()),
            domain: model.domain(),
            view: model.view(),
            pinned_axis: model.pinned_axis(),
            transforms: model.transforms(),
            point_count: self.points.len(),
            crosshair: self.gestures.crosshair(),
            selection: self.gestures.selection(),
            interaction_mode: self.gestures.mode(),
            series: self.last_series_stats,
            scheduler: self.scheduler.stats(),
        }
    }

    pub fn snapshot_json(&self) -> ViewportResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
