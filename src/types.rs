use serde::{Deserialize, Serialize};

/// Counts of each edit operation along one optimal alignment path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OperationTally {
    pub insertions: usize,
    pub deletions: usize,
    pub substitutions: usize,
}

impl OperationTally {
    pub fn total(&self) -> usize {
        self.insertions + self.deletions + self.substitutions
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EditDistance {
    pub distance: usize,
    pub tally: OperationTally,
}

/// One step of an edit script, indexing into the source and target sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStep {
    Match { source: usize, target: usize },
    Substitute { source: usize, target: usize },
    Delete { source: usize },
    Insert { target: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ErrorRate {
    /// `total_errors / reference_length`, or 0 for an empty reference.
    /// Exceeds 1 when the candidate is much longer than the reference.
    pub rate: f64,
    pub total_errors: usize,
}

impl ErrorRate {
    /// Accuracy in percent, floored at 0 when the rate exceeds 1.
    pub fn accuracy_percent(&self) -> f64 {
        ((1.0 - self.rate) * 100.0).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SpaceTally {
    pub extra_spaces: usize,
    pub missing_spaces: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceScanMode {
    /// Two-pointer lockstep scan.
    #[default]
    Greedy,
    /// Spacing derived from the optimal edit script.
    Aligned,
}

#[derive(Debug, Clone)]
pub struct ComparisonInput {
    pub id: String,
    pub reference: String,
    pub candidate: String,
}
