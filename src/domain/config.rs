use serde::{Deserialize, Serialize};

use crate::render::Tiling;
use crate::spatial::BorderPolicy;
use crate::systems::SandSource;

use super::palette::Palette;

pub const DEFAULT_ROWS: u32 = 100;
pub const DEFAULT_COLS: u32 = 200;
pub const DEFAULT_MIN_CELL_SIZE: u32 = 10;
pub const DEFAULT_STEP_MS: f64 = 5.0;
pub const DEFAULT_MAX_CATCH_UP_TICKS: u32 = 200;
pub const DEFAULT_SEED: u32 = 12345;

/// Engine configuration document.
///
/// Every field has a default, so `{}` is a valid config:
///
/// ```json
/// {
///   "rows": 100,
///   "cols": 200,
///   "border": "bordered",
///   "minCellSize": 10,
///   "stepMs": 5.0,
///   "maxCatchUpTicks": 200,
///   "source": { "stride": 97, "margin": 2 },
///   "tiling": "exact",
///   "seed": 12345,
///   "palette": { "sand": { "r": 102, "g": 102, "b": 102 } }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub rows: u32,
    pub cols: u32,
    pub border: BorderPolicy,
    pub min_cell_size: u32,
    pub step_ms: f64,
    pub max_catch_up_ticks: u32,
    pub source: Option<SandSource>,
    pub tiling: Tiling,
    pub seed: u32,
    pub palette: Palette,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            border: BorderPolicy::Bordered,
            min_cell_size: DEFAULT_MIN_CELL_SIZE,
            step_ms: DEFAULT_STEP_MS,
            max_catch_up_ticks: DEFAULT_MAX_CATCH_UP_TICKS,
            source: Some(SandSource::default()),
            tiling: Tiling::Exact,
            seed: DEFAULT_SEED,
            palette: Palette::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: EngineConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_size(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        let min_side = self.border.min_side();
        if self.rows < min_side || self.cols < min_side {
            return Err(format!(
                "grid {}x{} too small for {:?} border (minimum {}x{})",
                self.rows, self.cols, self.border, min_side, min_side
            ));
        }
        if !self.step_ms.is_finite() || self.step_ms <= 0.0 {
            return Err(format!("stepMs must be a positive number, got {}", self.step_ms));
        }
        if self.min_cell_size == 0 {
            return Err("minCellSize must be at least 1".to_string());
        }
        if self.max_catch_up_ticks == 0 {
            return Err("maxCatchUpTicks must be at least 1".to_string());
        }
        if let Some(source) = &self.source {
            source.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cell::Cell;
    use crate::domain::palette::Rgba;

    #[test]
    fn empty_document_is_default() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.rows, 100);
        assert_eq!(config.cols, 200);
    }

    #[test]
    fn camel_case_fields_parse() {
        let config = EngineConfig::from_json(
            r#"{
                "rows": 40,
                "cols": 30,
                "border": "borderless",
                "minCellSize": 4,
                "stepMs": 16.0,
                "source": null,
                "tiling": "overlap",
                "palette": { "blocked": { "r": 9, "g": 9, "b": 9 } }
            }"#,
        )
        .unwrap();
        assert_eq!(config.rows, 40);
        assert_eq!(config.border, BorderPolicy::Borderless);
        assert_eq!(config.min_cell_size, 4);
        assert_eq!(config.source, None);
        assert_eq!(config.tiling, Tiling::Overlap);
        assert_eq!(config.palette.color(Cell::Blocked), Rgba::rgb(9, 9, 9));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(EngineConfig::from_json(r#"{"rows": 2}"#).is_err());
        assert!(EngineConfig::from_json(r#"{"rows": 2, "border": "borderless"}"#).is_ok());
        assert!(EngineConfig::from_json(r#"{"stepMs": 0}"#).is_err());
        assert!(EngineConfig::from_json(r#"{"minCellSize": 0}"#).is_err());
        assert!(EngineConfig::from_json(r#"{"maxCatchUpTicks": 0}"#).is_err());
        assert!(EngineConfig::from_json(r#"{"source": {"stride": 4, "margin": 2}}"#).is_err());
        assert!(EngineConfig::from_json(r#"{"border": "round"}"#).is_err());
    }

    #[test]
    fn json_round_trip_preserves_config() {
        let config = EngineConfig::with_size(20, 30);
        let back = EngineConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(back, config);
    }
}
