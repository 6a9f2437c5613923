pub mod alignment;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod transcript;
pub mod types;

pub use alignment::edit_distance::{edit_distance, edit_script, levenshtein_distance};
pub use alignment::error_rate::calculate_error_rate;
pub use alignment::normalization::{normalize_transcript, strip_separators};
pub use alignment::report::{
    aggregate_reports, compute_candidate_report, AggregateReport, CandidateReport, Meta, RankEntry,
    Report, VariantMetrics, REPORT_SCHEMA_VERSION,
};
pub use alignment::whitespace::{aligned_space_tally, check_spaces};
pub use config::{ComparisonConfig, NormalizationConfig};
pub use error::ComparisonError;
pub use pipeline::builder::TranscriptComparatorBuilder;
pub use pipeline::runtime::TranscriptComparator;
pub use pipeline::traits::{DistanceEngine, SpaceScanner, TextNormalizer};
pub use transcript::{load_transcript, transcript_from_response};
pub use types::{
    ComparisonInput, EditDistance, EditStep, ErrorRate, OperationTally, SpaceScanMode, SpaceTally,
};
