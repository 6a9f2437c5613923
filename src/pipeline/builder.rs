use std::path::Path;

use crate::config::ComparisonConfig;
use crate::error::ComparisonError;
use crate::pipeline::defaults::{space_scanner_for, LevenshteinEngine, PunctuationNormalizer};
use crate::pipeline::runtime::{TranscriptComparator, TranscriptComparatorParts};
use crate::pipeline::traits::{DistanceEngine, SpaceScanner, TextNormalizer};

pub struct TranscriptComparatorBuilder {
    config: ComparisonConfig,
    normalizer: Option<Box<dyn TextNormalizer>>,
    distance_engine: Option<Box<dyn DistanceEngine>>,
    space_scanner: Option<Box<dyn SpaceScanner>>,
}

impl TranscriptComparatorBuilder {
    pub fn new(config: ComparisonConfig) -> Self {
        Self {
            config,
            normalizer: None,
            distance_engine: None,
            space_scanner: None,
        }
    }

    pub fn from_config_file(path: &Path) -> Result<Self, ComparisonError> {
        Ok(Self::new(ComparisonConfig::load(path)?))
    }

    pub fn with_normalizer(mut self, normalizer: Box<dyn TextNormalizer>) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    pub fn with_distance_engine(mut self, distance_engine: Box<dyn DistanceEngine>) -> Self {
        self.distance_engine = Some(distance_engine);
        self
    }

    pub fn with_space_scanner(mut self, space_scanner: Box<dyn SpaceScanner>) -> Self {
        self.space_scanner = Some(space_scanner);
        self
    }

    pub fn build(self) -> Result<TranscriptComparator, ComparisonError> {
        if self.config.max_table_cells == Some(0) {
            return Err(ComparisonError::invalid_input(
                "max_table_cells must be positive or null",
            ));
        }

        let space_scan = self.config.space_scan;
        Ok(TranscriptComparator::from_parts(TranscriptComparatorParts {
            space_scan,
            max_table_cells: self.config.max_table_cells,
            normalizer: self.normalizer.unwrap_or_else(|| {
                Box::new(PunctuationNormalizer::new(self.config.normalization.clone()))
            }),
            distance_engine: self
                .distance_engine
                .unwrap_or_else(|| Box::new(LevenshteinEngine)),
            space_scanner: self
                .space_scanner
                .unwrap_or_else(|| space_scanner_for(space_scan)),
        }))
    }
}
