use crate::alignment::edit_distance::edit_distance;
use crate::alignment::normalization::normalize_transcript;
use crate::alignment::whitespace::{aligned_space_tally, check_spaces};
use crate::config::NormalizationConfig;
use crate::pipeline::traits::{DistanceEngine, SpaceScanner, TextNormalizer};
use crate::types::{EditDistance, SpaceScanMode, SpaceTally};

pub struct PunctuationNormalizer {
    config: NormalizationConfig,
}

impl PunctuationNormalizer {
    pub fn new(config: NormalizationConfig) -> Self {
        Self { config }
    }
}

impl TextNormalizer for PunctuationNormalizer {
    fn normalize(&self, text: &str) -> String {
        normalize_transcript(text, &self.config)
    }
}

pub struct LevenshteinEngine;

impl DistanceEngine for LevenshteinEngine {
    fn distance(&self, reference: &[char], candidate: &[char]) -> EditDistance {
        edit_distance(reference, candidate)
    }
}

pub struct GreedySpaceScanner;

impl SpaceScanner for GreedySpaceScanner {
    fn scan(&self, reference: &[char], candidate: &[char]) -> SpaceTally {
        check_spaces(reference, candidate)
    }
}

pub struct AlignedSpaceScanner;

impl SpaceScanner for AlignedSpaceScanner {
    fn scan(&self, reference: &[char], candidate: &[char]) -> SpaceTally {
        aligned_space_tally(reference, candidate)
    }
}

pub(crate) fn space_scanner_for(mode: SpaceScanMode) -> Box<dyn SpaceScanner> {
    match mode {
        SpaceScanMode::Greedy => Box::new(GreedySpaceScanner),
        SpaceScanMode::Aligned => Box::new(AlignedSpaceScanner),
    }
}
