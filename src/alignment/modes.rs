//! Policies distinguishing local, global, and overlap alignment.
//!
//! All three modes share the same matrix fill and traceback. A mode only
//! decides the floor applied to each cell, how row and column zero are
//! initialized, and which cells may start a traceback.

/// The policy of an alignment mode.
pub trait AlignmentMode {
    /// The name of the algorithm.
    const NAME: &'static str;

    /// A short description of the algorithm.
    const DESCRIPTION: &'static str;

    /// Cells scoring at or below the floor are reset to it and become a
    /// traceback stop.
    const FLOOR: Option<i32>;

    /// Whether row and column zero carry the cost of a leading gap. Otherwise
    /// they score zero and stop the traceback.
    const PENALIZE_LEADING_GAPS: bool;

    /// Whether the cell at `row` and `col` (one-based, within a table of
    /// `rows` by `cols`) holding `score` may start a traceback.
    fn is_start_candidate(row: usize, col: usize, score: i32, rows: usize, cols: usize) -> bool;
}

/// Smith-Waterman local alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Local;

/// Needleman-Wunsch global alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Global;

/// Overlap alignment, where leading and trailing gaps are free.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Overlap;

impl AlignmentMode for Local {
    const NAME: &'static str = "Smith-Waterman";
    const DESCRIPTION: &'static str = "Pairwise local alignment";
    const FLOOR: Option<i32> = Some(0);
    const PENALIZE_LEADING_GAPS: bool = false;

    #[inline]
    fn is_start_candidate(_row: usize, _col: usize, score: i32, _rows: usize, _cols: usize) -> bool {
        score > 0
    }
}

impl AlignmentMode for Global {
    const NAME: &'static str = "Needleman-Wunsch";
    const DESCRIPTION: &'static str = "Pairwise global alignment";
    const FLOOR: Option<i32> = None;
    const PENALIZE_LEADING_GAPS: bool = true;

    #[inline]
    fn is_start_candidate(row: usize, col: usize, _score: i32, rows: usize, cols: usize) -> bool {
        row + 1 == rows && col + 1 == cols
    }
}

impl AlignmentMode for Overlap {
    const NAME: &'static str = "Pairwise Overlap";
    const DESCRIPTION: &'static str = "Pairwise overlap alignment";
    const FLOOR: Option<i32> = None;
    const PENALIZE_LEADING_GAPS: bool = false;

    #[inline]
    fn is_start_candidate(row: usize, col: usize, _score: i32, rows: usize, cols: usize) -> bool {
        row + 1 == rows || col + 1 == cols
    }
}
