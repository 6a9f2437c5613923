use crate::types::{ErrorRate, OperationTally};

/// Character error rate of `tally` against a reference of
/// `reference_length` elements.
///
/// The length must come from the same preprocessing branch (with or without
/// separators) as the tally. An empty reference yields a rate of 0.
pub fn calculate_error_rate(tally: &OperationTally, reference_length: usize) -> ErrorRate {
    let total_errors = tally.total();
    let rate = if reference_length == 0 {
        0.0
    } else {
        total_errors as f64 / reference_length as f64
    };
    ErrorRate { rate, total_errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_is_errors_over_reference_length() {
        let tally = OperationTally {
            insertions: 2,
            deletions: 1,
            substitutions: 3,
        };
        let result = calculate_error_rate(&tally, 10);
        assert_eq!(result.total_errors, 6);
        assert!((result.rate - 0.6).abs() < 1e-12);
    }

    #[test]
    fn empty_reference_gives_zero_rate() {
        let tally = OperationTally {
            insertions: 7,
            deletions: 0,
            substitutions: 0,
        };
        let result = calculate_error_rate(&tally, 0);
        assert_eq!(result.rate, 0.0);
        assert_eq!(result.total_errors, 7);
    }

    #[test]
    fn rate_can_exceed_one() {
        let tally = OperationTally {
            insertions: 5,
            deletions: 0,
            substitutions: 1,
        };
        let result = calculate_error_rate(&tally, 2);
        assert!((result.rate - 3.0).abs() < 1e-12);
        assert_eq!(result.accuracy_percent(), 0.0);
    }
}
