use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ComparisonError;
use crate::types::SpaceScanMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    pub normalization: NormalizationConfig,
    pub space_scan: SpaceScanMode,
    /// Upper bound on the with-space cost table (reference × candidate
    /// characters). `None` disables the check.
    pub max_table_cells: Option<usize>,
}

impl ComparisonConfig {
    pub const DEFAULT_MAX_TABLE_CELLS: usize = 400_000_000;

    pub fn load(path: &Path) -> Result<Self, ComparisonError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| ComparisonError::io("read comparison config", e))?;
        serde_json::from_str(&data)
            .map_err(|e| ComparisonError::json("parse comparison config", e))
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            normalization: NormalizationConfig::default(),
            space_scan: SpaceScanMode::default(),
            max_table_cells: Some(Self::DEFAULT_MAX_TABLE_CELLS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationConfig {
    pub strip_line_breaks: bool,
    pub strip_punctuation: bool,
    /// Characters treated as punctuation in addition to the built-in set.
    pub extra_punctuation: String,
    pub collapse_whitespace: bool,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            strip_line_breaks: true,
            strip_punctuation: true,
            extra_punctuation: String::new(),
            collapse_whitespace: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_config_default() {
        let config = ComparisonConfig::default();
        assert_eq!(config.space_scan, SpaceScanMode::Greedy);
        assert_eq!(
            config.max_table_cells,
            Some(ComparisonConfig::DEFAULT_MAX_TABLE_CELLS)
        );
        assert!(config.normalization.strip_line_breaks);
        assert!(config.normalization.strip_punctuation);
        assert!(!config.normalization.collapse_whitespace);
        assert!(config.normalization.extra_punctuation.is_empty());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let json = r#"{
            "space_scan": "aligned",
            "normalization": { "collapse_whitespace": true }
        }"#;
        let config: ComparisonConfig = serde_json::from_str(json).expect("valid config json");
        assert_eq!(config.space_scan, SpaceScanMode::Aligned);
        assert!(config.normalization.collapse_whitespace);
        assert!(config.normalization.strip_punctuation);
        assert_eq!(
            config.max_table_cells,
            Some(ComparisonConfig::DEFAULT_MAX_TABLE_CELLS)
        );
    }

    #[test]
    fn null_max_table_cells_disables_limit() {
        let config: ComparisonConfig =
            serde_json::from_str(r#"{ "max_table_cells": null }"#).expect("valid config json");
        assert_eq!(config.max_table_cells, None);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = ComparisonConfig::load(Path::new("does/not/exist.json"))
            .expect_err("missing file must fail");
        assert!(matches!(err, ComparisonError::Io { .. }));
    }
}
