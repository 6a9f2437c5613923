use crate::types::{EditDistance, EditStep, OperationTally};

/// Cost tables above this many cells are logged before allocation.
pub const LARGE_TABLE_CELLS: usize = 50_000_000;

/// Unit-cost Levenshtein distance with the edits along one optimal path
/// classified as insertions, deletions and substitutions.
///
/// When several predecessors share the minimum cost during the backtrace the
/// path prefers **substitution, then deletion, then insertion**. The distance
/// itself does not depend on this order, but the split between the three
/// counts does, so results are only comparable across tools that use the same
/// convention.
///
/// `source` is the reference; an insertion is an element present only in
/// `target`.
pub fn edit_distance<T: PartialEq>(source: &[T], target: &[T]) -> EditDistance {
    let table = CostTable::build(source, target);
    let mut tally = OperationTally::default();
    table.backtrace(source, target, |step| match step {
        EditStep::Match { .. } => {}
        EditStep::Substitute { .. } => tally.substitutions += 1,
        EditStep::Delete { .. } => tally.deletions += 1,
        EditStep::Insert { .. } => tally.insertions += 1,
    });

    let distance = table.distance();
    debug_assert_eq!(
        tally.total(),
        distance,
        "operation tally must sum to the edit distance"
    );
    EditDistance { distance, tally }
}

/// Full edit script in forward order, following the same backtrace as
/// [`edit_distance`].
pub fn edit_script<T: PartialEq>(source: &[T], target: &[T]) -> Vec<EditStep> {
    let table = CostTable::build(source, target);
    let mut steps = Vec::with_capacity(source.len().max(target.len()));
    table.backtrace(source, target, |step| steps.push(step));
    steps.reverse();
    steps
}

/// Distance only, keeping two rows of the table.
pub fn levenshtein_distance<T: PartialEq>(source: &[T], target: &[T]) -> usize {
    let (long, short) = if source.len() >= target.len() {
        (source, target)
    } else {
        (target, source)
    };
    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];
    for (i, long_item) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, short_item) in short.iter().enumerate() {
            curr[j + 1] = if long_item == short_item {
                prev[j]
            } else {
                1 + prev[j + 1].min(curr[j]).min(prev[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[short.len()]
}

/// Row-major (m+1)×(n+1) cost table.
struct CostTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl CostTable {
    fn build<T: PartialEq>(source: &[T], target: &[T]) -> Self {
        let rows = source.len() + 1;
        let cols = target.len() + 1;
        let cell_count = rows.saturating_mul(cols);
        if cell_count > LARGE_TABLE_CELLS {
            tracing::warn!(
                source_len = source.len(),
                target_len = target.len(),
                cells = cell_count,
                "edit distance table is very large; consider chunking the transcripts"
            );
        }

        let mut cells = vec![0usize; cell_count];
        for (j, cell) in cells.iter_mut().take(cols).enumerate() {
            *cell = j;
        }
        for i in 1..rows {
            let row = i * cols;
            let prev = row - cols;
            cells[row] = i;
            for j in 1..cols {
                cells[row + j] = if source[i - 1] == target[j - 1] {
                    cells[prev + j - 1]
                } else {
                    1 + cells[prev + j]
                        .min(cells[row + j - 1])
                        .min(cells[prev + j - 1])
                };
            }
        }

        Self { rows, cols, cells }
    }

    #[inline(always)]
    fn at(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    fn distance(&self) -> usize {
        self.at(self.rows - 1, self.cols - 1)
    }

    /// Walks from (m, n) back to (0, 0), reporting steps in reverse order.
    fn backtrace<T: PartialEq>(
        &self,
        source: &[T],
        target: &[T],
        mut visit: impl FnMut(EditStep),
    ) {
        let mut i = source.len();
        let mut j = target.len();
        loop {
            if i == 0 {
                for index in (0..j).rev() {
                    visit(EditStep::Insert { target: index });
                }
                return;
            }
            if j == 0 {
                for index in (0..i).rev() {
                    visit(EditStep::Delete { source: index });
                }
                return;
            }

            if source[i - 1] == target[j - 1] {
                visit(EditStep::Match {
                    source: i - 1,
                    target: j - 1,
                });
                i -= 1;
                j -= 1;
                continue;
            }

            let deletion = self.at(i - 1, j);
            let insertion = self.at(i, j - 1);
            let substitution = self.at(i - 1, j - 1);
            let best = deletion.min(insertion).min(substitution);

            if substitution == best {
                visit(EditStep::Substitute {
                    source: i - 1,
                    target: j - 1,
                });
                i -= 1;
                j -= 1;
            } else if deletion == best {
                visit(EditStep::Delete { source: i - 1 });
                i -= 1;
            } else {
                visit(EditStep::Insert { target: j - 1 });
                j -= 1;
            }
        }
    }
}
