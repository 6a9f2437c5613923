use std::cmp::Ordering;

use serde::Serialize;

use crate::alignment::edit_distance::edit_distance;
use crate::alignment::error_rate::calculate_error_rate;
use crate::alignment::normalization::strip_separators;
use crate::alignment::whitespace::{aligned_space_tally, check_spaces};
use crate::types::{EditDistance, SpaceScanMode, SpaceTally};

pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub schema_version: u32,
    pub meta: Meta,
    pub candidates: Vec<CandidateReport>,
    pub aggregates: AggregateReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub generated_at: String,
    pub reference_source: String,
    pub space_scan: SpaceScanMode,
    pub candidate_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateReport {
    pub id: String,
    /// Separators stripped from both sides: pure recognition accuracy.
    pub without_spaces: VariantMetrics,
    /// Separators kept: recognition and spacing accuracy combined.
    pub with_spaces: VariantMetrics,
    pub spacing: SpaceTally,
    pub notes: Vec<String>,
}

impl CandidateReport {
    /// True when either variant had no reference characters, so its rate
    /// is 0 by convention rather than by accuracy.
    pub fn has_empty_reference(&self) -> bool {
        self.without_spaces.reference_length == 0 || self.with_spaces.reference_length == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantMetrics {
    pub reference_length: usize,
    pub candidate_length: usize,
    pub distance: usize,
    pub insertions: usize,
    pub deletions: usize,
    pub substitutions: usize,
    pub total_errors: usize,
    pub cer: f64,
    pub accuracy_percent: f64,
}

impl VariantMetrics {
    /// Lengths are read from the same pair of sequences the distance was
    /// computed over.
    pub fn from_alignment(reference: &[char], candidate: &[char], result: EditDistance) -> Self {
        let rate = calculate_error_rate(&result.tally, reference.len());
        Self {
            reference_length: reference.len(),
            candidate_length: candidate.len(),
            distance: result.distance,
            insertions: result.tally.insertions,
            deletions: result.tally.deletions,
            substitutions: result.tally.substitutions,
            total_errors: rate.total_errors,
            cer: rate.rate,
            accuracy_percent: rate.accuracy_percent(),
        }
    }

    pub fn compute(reference: &[char], candidate: &[char]) -> Self {
        Self::from_alignment(reference, candidate, edit_distance(reference, candidate))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AggregateReport {
    pub counts: AggregateCounts,
    pub mean_cer_without_spaces: Option<f64>,
    pub mean_cer_with_spaces: Option<f64>,
    pub ranking: Vec<RankEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AggregateCounts {
    pub total: usize,
    pub with_empty_reference: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankEntry {
    pub rank: usize,
    pub id: String,
    pub cer_without_spaces: f64,
    pub cer_with_spaces: f64,
    pub spacing_errors: usize,
}

/// Both comparison variants of one candidate against normalized reference
/// text, using the default engine.
pub fn compute_candidate_report(
    id: &str,
    reference: &str,
    candidate: &str,
    space_scan: SpaceScanMode,
) -> CandidateReport {
    score_candidate(
        id,
        reference,
        candidate,
        |source, target| edit_distance(source, target),
        |source, target| match space_scan {
            SpaceScanMode::Greedy => check_spaces(source, target),
            SpaceScanMode::Aligned => aligned_space_tally(source, target),
        },
    )
}

/// Scores normalized texts with and without separators. `distance` runs
/// once per variant; `scan` sees the separator-bearing sequences.
pub(crate) fn score_candidate(
    id: &str,
    reference: &str,
    candidate: &str,
    distance: impl Fn(&[char], &[char]) -> EditDistance,
    scan: impl Fn(&[char], &[char]) -> SpaceTally,
) -> CandidateReport {
    let reference_spaced: Vec<char> = reference.chars().collect();
    let candidate_spaced: Vec<char> = candidate.chars().collect();
    let reference_bare: Vec<char> = strip_separators(reference).chars().collect();
    let candidate_bare: Vec<char> = strip_separators(candidate).chars().collect();

    let without_spaces = VariantMetrics::from_alignment(
        &reference_bare,
        &candidate_bare,
        distance(&reference_bare, &candidate_bare),
    );
    let with_spaces = VariantMetrics::from_alignment(
        &reference_spaced,
        &candidate_spaced,
        distance(&reference_spaced, &candidate_spaced),
    );
    let spacing = scan(&reference_spaced, &candidate_spaced);

    assemble_candidate_report(id, without_spaces, with_spaces, spacing)
}

fn assemble_candidate_report(
    id: &str,
    without_spaces: VariantMetrics,
    with_spaces: VariantMetrics,
    spacing: SpaceTally,
) -> CandidateReport {
    let mut notes = Vec::new();
    if with_spaces.reference_length == 0 {
        tracing::warn!(candidate = id, "reference is empty; error rate reported as 0");
        notes.push("reference is empty; error rate is reported as 0".to_string());
    } else if without_spaces.reference_length == 0 {
        tracing::warn!(
            candidate = id,
            "reference holds only separators; error rate without spaces reported as 0"
        );
        notes.push(
            "reference holds only separators; error rate without spaces is reported as 0"
                .to_string(),
        );
    }
    if with_spaces.candidate_length == 0 && with_spaces.reference_length > 0 {
        notes.push("candidate is empty; every reference character is a deletion".to_string());
    }
    if without_spaces.cer > 1.0 {
        notes.push(format!(
            "CER {:.3} exceeds 1; candidate is much longer than the reference",
            without_spaces.cer
        ));
    }

    tracing::debug!(
        candidate = id,
        reference_len = with_spaces.reference_length,
        candidate_len = with_spaces.candidate_length,
        distance_without_spaces = without_spaces.distance,
        distance_with_spaces = with_spaces.distance,
        extra_spaces = spacing.extra_spaces,
        missing_spaces = spacing.missing_spaces,
        "candidate compared"
    );

    CandidateReport {
        id: id.to_string(),
        without_spaces,
        with_spaces,
        spacing,
        notes,
    }
}

pub fn aggregate_reports(candidates: &[CandidateReport]) -> AggregateReport {
    let with_empty_reference = candidates
        .iter()
        .filter(|c| c.has_empty_reference())
        .count();

    let bare: Vec<f64> = candidates.iter().map(|c| c.without_spaces.cer).collect();
    let spaced: Vec<f64> = candidates.iter().map(|c| c.with_spaces.cer).collect();

    let mut ordered: Vec<&CandidateReport> = candidates.iter().collect();
    ordered.sort_by(|a, b| {
        a.without_spaces
            .cer
            .partial_cmp(&b.without_spaces.cer)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    let ranking = ordered
        .into_iter()
        .enumerate()
        .map(|(idx, c)| RankEntry {
            rank: idx + 1,
            id: c.id.clone(),
            cer_without_spaces: c.without_spaces.cer,
            cer_with_spaces: c.with_spaces.cer,
            spacing_errors: c.spacing.extra_spaces + c.spacing.missing_spaces,
        })
        .collect();

    AggregateReport {
        counts: AggregateCounts {
            total: candidates.len(),
            with_empty_reference,
        },
        mean_cer_without_spaces: mean_or_none(&bare),
        mean_cer_with_spaces: mean_or_none(&spaced),
        ranking,
    }
}

fn mean_or_none(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_score_perfectly() {
        let report = compute_candidate_report("same", "abc", "abc", SpaceScanMode::Greedy);
        assert_eq!(report.with_spaces.distance, 0);
        assert_eq!(report.with_spaces.cer, 0.0);
        assert_eq!(report.without_spaces.accuracy_percent, 100.0);
        assert_eq!(report.spacing, SpaceTally::default());
        assert!(report.notes.is_empty());
    }

    #[test]
    fn dropped_space_only_affects_spaced_variant() {
        let report = compute_candidate_report(
            "joined",
            "hello world",
            "helloworld",
            SpaceScanMode::Greedy,
        );
        assert_eq!(report.without_spaces.distance, 0);
        assert_eq!(report.without_spaces.reference_length, 10);
        assert_eq!(report.with_spaces.distance, 1);
        assert_eq!(report.with_spaces.deletions, 1);
        assert_eq!(report.with_spaces.reference_length, 11);
        assert!((report.with_spaces.cer - 1.0 / 11.0).abs() < 1e-12);
        assert_eq!(report.spacing.missing_spaces, 1);
        assert_eq!(report.spacing.extra_spaces, 0);
    }

    #[test]
    fn variant_lengths_match_their_own_sequences() {
        let report = compute_candidate_report("x", "a b c", "a bc d", SpaceScanMode::Aligned);
        assert_eq!(report.without_spaces.reference_length, 3);
        assert_eq!(report.without_spaces.candidate_length, 4);
        assert_eq!(report.with_spaces.reference_length, 5);
        assert_eq!(report.with_spaces.candidate_length, 6);
    }

    #[test]
    fn empty_reference_is_noted_and_rate_is_zero() {
        let report = compute_candidate_report("empty", "", "abc", SpaceScanMode::Greedy);
        assert_eq!(report.with_spaces.cer, 0.0);
        assert_eq!(report.with_spaces.total_errors, 3);
        assert_eq!(report.notes.len(), 1);
    }

    #[test]
    fn separator_only_reference_is_noted() {
        let report = compute_candidate_report("blank", "   ", "abc", SpaceScanMode::Greedy);
        assert_eq!(report.without_spaces.reference_length, 0);
        assert_eq!(report.without_spaces.cer, 0.0);
        assert_eq!(report.with_spaces.reference_length, 3);
        assert!(report.has_empty_reference());
        assert_eq!(report.notes.len(), 1);
        assert!(report.notes[0].contains("only separators"));
    }

    #[test]
    fn aggregate_counts_separator_only_reference_as_empty() {
        let candidates = vec![
            compute_candidate_report("blank", "   ", "abc", SpaceScanMode::Greedy),
            compute_candidate_report("empty", "", "abc", SpaceScanMode::Greedy),
            compute_candidate_report("real", "abc", "abc", SpaceScanMode::Greedy),
        ];
        let aggregate = aggregate_reports(&candidates);
        assert_eq!(aggregate.counts.with_empty_reference, 2);
        assert_eq!(aggregate.counts.total, 3);
    }

    #[test]
    fn aggregate_ranks_by_bare_cer_then_id() {
        let candidates = vec![
            compute_candidate_report("b", "abcd", "abxd", SpaceScanMode::Greedy),
            compute_candidate_report("a", "abcd", "abyd", SpaceScanMode::Greedy),
            compute_candidate_report("c", "abcd", "abcd", SpaceScanMode::Greedy),
        ];
        let aggregate = aggregate_reports(&candidates);
        let ids: Vec<&str> = aggregate.ranking.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
        assert_eq!(aggregate.ranking[0].rank, 1);
        assert_eq!(aggregate.counts.total, 3);
        let mean = aggregate.mean_cer_without_spaces.expect("non-empty");
        assert!((mean - 0.5 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn report_serializes_with_meta_and_notes() {
        let candidates = vec![compute_candidate_report(
            "blank",
            " ",
            "a",
            SpaceScanMode::Aligned,
        )];
        let aggregates = aggregate_reports(&candidates);
        let report = Report {
            schema_version: REPORT_SCHEMA_VERSION,
            meta: Meta {
                generated_at: "2026-01-01T00:00:00Z".to_string(),
                reference_source: "reference.txt".to_string(),
                space_scan: SpaceScanMode::Aligned,
                candidate_count: candidates.len(),
            },
            candidates,
            aggregates,
        };
        let value = serde_json::to_value(&report).expect("report serializes");
        assert_eq!(value["meta"]["space_scan"], "aligned");
        assert_eq!(value["aggregates"]["counts"]["with_empty_reference"], 1);
        assert_eq!(value["candidates"][0]["notes"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn aggregate_of_nothing_has_no_means() {
        let aggregate = aggregate_reports(&[]);
        assert_eq!(aggregate.counts.total, 0);
        assert!(aggregate.mean_cer_without_spaces.is_none());
        assert!(aggregate.ranking.is_empty());
    }
}
