use std::fmt::Write as _;

use transcript_cer::{CandidateReport, Report, VariantMetrics};

pub fn render(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Reference: {}", report.meta.reference_source);
    let _ = writeln!(
        out,
        "Candidates: {} (space scan: {:?})",
        report.meta.candidate_count, report.meta.space_scan
    );

    for candidate in &report.candidates {
        render_candidate(&mut out, candidate);
    }

    if !report.aggregates.ranking.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Ranking (CER without spaces):");
        for entry in &report.aggregates.ranking {
            let _ = writeln!(
                out,
                "  {}. {:<20} {:>7.2}%  (with spaces {:>7.2}%, spacing errors {})",
                entry.rank,
                entry.id,
                entry.cer_without_spaces * 100.0,
                entry.cer_with_spaces * 100.0,
                entry.spacing_errors
            );
        }
    }
    out
}

fn render_candidate(out: &mut String, candidate: &CandidateReport) {
    let _ = writeln!(out);
    let _ = writeln!(out, "== {}", candidate.id);
    render_variant(out, "without spaces", &candidate.without_spaces);
    render_variant(out, "with spaces", &candidate.with_spaces);
    let _ = writeln!(
        out,
        "  spacing: {} extra, {} missing",
        candidate.spacing.extra_spaces, candidate.spacing.missing_spaces
    );
    for note in &candidate.notes {
        let _ = writeln!(out, "  note: {note}");
    }
}

fn render_variant(out: &mut String, label: &str, metrics: &VariantMetrics) {
    let _ = writeln!(
        out,
        "  {label:<15} CER {:>7.2}%  accuracy {:>6.2}%  ({} errors over {} chars: {} ins, {} del, {} sub)",
        metrics.cer * 100.0,
        metrics.accuracy_percent,
        metrics.total_errors,
        metrics.reference_length,
        metrics.insertions,
        metrics.deletions,
        metrics.substitutions
    );
}
