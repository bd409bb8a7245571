use serde::{Deserialize, Serialize};

use crate::animation::RevealConfig;
use crate::core::{AxisMetadata, Viewport};
use crate::error::{ChartError, ChartResult};

/// What happens to an in-flight reveal animation when the dataset is
/// replaced wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RevealResetPolicy {
    /// The reveal keeps its current progress; new rows appear at the same
    /// reveal state as the old ones.
    #[default]
    PreserveProgress,
    /// Every dataset replacement replays the reveal from the start.
    RestartOnDataChange,
}

/// Public widget bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartWidgetConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub axis: AxisMetadata,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub reveal_reset_policy: RevealResetPolicy,
}

impl ChartWidgetConfig {
    /// Creates a minimal config with default axis metadata and no reveal
    /// animation.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            axis: AxisMetadata::default(),
            reveal: RevealConfig::default(),
            reveal_reset_policy: RevealResetPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_axis_metadata(mut self, axis: AxisMetadata) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_reveal(mut self, reveal: RevealConfig) -> Self {
        self.reveal = reveal;
        self
    }

    #[must_use]
    pub fn with_reveal_reset_policy(mut self, policy: RevealResetPolicy) -> Self {
        self.reveal_reset_policy = policy;
        self
    }
}

pub const WIDGET_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartWidgetConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ChartWidgetConfig,
}

impl ChartWidgetConfig {
    /// Serializes the config to pretty JSON under the versioned contract.
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartWidgetConfigJsonContractV1 {
            schema_version: WIDGET_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize widget config contract v1: {e}"))
        })
    }

    /// Parses either a bare config or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(config) = serde_json::from_str::<Self>(input) {
            return Ok(config);
        }
        let payload: ChartWidgetConfigJsonContractV1 = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;
        if payload.schema_version != WIDGET_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported widget config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}
