use crate::alignment::report::{score_candidate, CandidateReport};
use crate::error::ComparisonError;
use crate::pipeline::traits::{DistanceEngine, SpaceScanner, TextNormalizer};
use crate::types::{ComparisonInput, SpaceScanMode};

pub struct TranscriptComparator {
    space_scan: SpaceScanMode,
    max_table_cells: Option<usize>,
    normalizer: Box<dyn TextNormalizer>,
    distance_engine: Box<dyn DistanceEngine>,
    space_scanner: Box<dyn SpaceScanner>,
}

pub(crate) struct TranscriptComparatorParts {
    pub space_scan: SpaceScanMode,
    pub max_table_cells: Option<usize>,
    pub normalizer: Box<dyn TextNormalizer>,
    pub distance_engine: Box<dyn DistanceEngine>,
    pub space_scanner: Box<dyn SpaceScanner>,
}

impl TranscriptComparator {
    pub(crate) fn from_parts(parts: TranscriptComparatorParts) -> Self {
        Self {
            space_scan: parts.space_scan,
            max_table_cells: parts.max_table_cells,
            normalizer: parts.normalizer,
            distance_engine: parts.distance_engine,
            space_scanner: parts.space_scanner,
        }
    }

    pub fn space_scan(&self) -> SpaceScanMode {
        self.space_scan
    }

    /// Normalizes both texts and scores the candidate with and without
    /// separators. Fails only when the inputs exceed the configured table
    /// size.
    pub fn compare(&self, input: &ComparisonInput) -> Result<CandidateReport, ComparisonError> {
        let reference = self.normalizer.normalize(&input.reference);
        let candidate = self.normalizer.normalize(&input.candidate);

        self.check_table_size(
            &input.id,
            reference.chars().count(),
            candidate.chars().count(),
        )?;

        Ok(score_candidate(
            &input.id,
            &reference,
            &candidate,
            |source, target| self.distance_engine.distance(source, target),
            |source, target| self.space_scanner.scan(source, target),
        ))
    }

    /// Scores every `(id, candidate)` pair against one reference text.
    pub fn compare_all(
        &self,
        reference: &str,
        candidates: &[(String, String)],
    ) -> Result<Vec<CandidateReport>, ComparisonError> {
        candidates
            .iter()
            .map(|(id, candidate)| {
                self.compare(&ComparisonInput {
                    id: id.clone(),
                    reference: reference.to_string(),
                    candidate: candidate.clone(),
                })
            })
            .collect()
    }

    fn check_table_size(
        &self,
        id: &str,
        reference_len: usize,
        candidate_len: usize,
    ) -> Result<(), ComparisonError> {
        let Some(limit) = self.max_table_cells else {
            return Ok(());
        };
        let cells = (reference_len + 1).saturating_mul(candidate_len + 1);
        if cells > limit {
            return Err(ComparisonError::invalid_input(format!(
                "{id}: {reference_len}x{candidate_len} characters needs {cells} table cells, \
                 above the configured limit of {limit}; split the transcripts into chunks"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ComparisonConfig;
    use crate::pipeline::builder::TranscriptComparatorBuilder;

    fn comparator(config: ComparisonConfig) -> TranscriptComparator {
        TranscriptComparatorBuilder::new(config)
            .build()
            .expect("build should succeed")
    }

    fn input(reference: &str, candidate: &str) -> ComparisonInput {
        ComparisonInput {
            id: "case".to_string(),
            reference: reference.to_string(),
            candidate: candidate.to_string(),
        }
    }

    #[test]
    fn punctuation_and_line_breaks_do_not_count_as_errors() {
        let report = comparator(ComparisonConfig::default())
            .compare(&input("안녕하세요, 여러분!\n", "안녕하세요 여러분"))
            .expect("compare should succeed");
        assert_eq!(report.with_spaces.distance, 0);
        assert_eq!(report.without_spaces.distance, 0);
        assert_eq!(report.spacing.extra_spaces + report.spacing.missing_spaces, 0);
    }

    #[test]
    fn spacing_error_is_reported_separately() {
        let report = comparator(ComparisonConfig::default())
            .compare(&input("안녕 하세요", "안녕하 세요"))
            .expect("compare should succeed");
        assert_eq!(report.without_spaces.distance, 0);
        assert_eq!(report.with_spaces.distance, 2);
        assert_eq!(report.spacing.extra_spaces, 1);
        assert_eq!(report.spacing.missing_spaces, 1);
    }

    #[test]
    fn oversized_input_is_rejected() {
        let config = ComparisonConfig {
            max_table_cells: Some(20),
            ..ComparisonConfig::default()
        };
        let result = comparator(config).compare(&input("abcdef", "abcdef"));
        assert!(matches!(result, Err(ComparisonError::InvalidInput { .. })));
    }

    #[test]
    fn unlimited_table_accepts_any_size() {
        let config = ComparisonConfig {
            max_table_cells: None,
            ..ComparisonConfig::default()
        };
        let text = "가".repeat(300);
        let report = comparator(config)
            .compare(&input(&text, &text))
            .expect("compare should succeed");
        assert_eq!(report.with_spaces.reference_length, 300);
    }

    #[test]
    fn compare_all_keeps_candidate_order() {
        let candidates = vec![
            ("first".to_string(), "kitten".to_string()),
            ("second".to_string(), "sitting".to_string()),
        ];
        let reports = comparator(ComparisonConfig::default())
            .compare_all("sitting", &candidates)
            .expect("compare should succeed");
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].id, "first");
        assert_eq!(reports[0].with_spaces.distance, 3);
        assert_eq!(reports[1].with_spaces.distance, 0);
    }

    #[test]
    fn matches_default_report_for_normalized_text() {
        let report = comparator(ComparisonConfig::default())
            .compare(&input("abc de", "ab de"))
            .expect("compare should succeed");
        let expected = crate::alignment::report::compute_candidate_report(
            "case",
            "abc de",
            "ab de",
            SpaceScanMode::Greedy,
        );
        assert_eq!(report.without_spaces, expected.without_spaces);
        assert_eq!(report.with_spaces, expected.with_spaces);
        assert_eq!(report.spacing, expected.spacing);
    }

    #[test]
    fn comparator_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TranscriptComparator>();
    }
}
