//! The forward pass of the dynamic programming algorithm.
//!
//! Definitions used below, for query residue `Q[i-1]` (row `i`) and reference
//! residue `R[j-1]` (column `j`):
//! * `H[i,j]` = best score of an alignment ending at the cell
//! * `E[i,j]` = best score of an alignment ending with a gap in the query
//!   (moving left, consuming reference residues)
//! * `F[i,j]` = best score of an alignment ending with a gap in the reference
//!   (moving up, consuming query residues)
//!
//! Only the current and previous rows of `H` and `F` are kept. The traceback
//! table, and for the affine model the gap-length tables, cover the whole
//! matrix since the traceback walks them after the fill completes.

use crate::{
    alignment::{AlignmentMode, Direction, GapLengthTables, ScoreCell, TracebackTable},
    data::matrices::SimilarityMatrix,
};

/// Gap state score for cells no gap can end in. Adding a single extension
/// cost to it cannot overflow, and it never wins against an opened gap.
const NEG_INF: i32 = i32::MIN / 2;

/// The tables produced by one fill.
pub(crate) struct Filled {
    pub traceback:   TracebackTable,
    pub gap_lengths: Option<GapLengthTables>,
    pub start_cells: Vec<ScoreCell>,
    pub scores:      Option<Vec<i32>>,
}

/// Tracks every cell sharing the running maximum score, in fill order.
#[derive(Debug)]
pub(crate) struct BestCells {
    score: i32,
    cells: Vec<ScoreCell>,
}

impl BestCells {
    pub(crate) fn new() -> Self {
        BestCells {
            score: i32::MIN,
            cells: Vec::new(),
        }
    }

    /// A strictly greater score replaces the set; an equal score joins it.
    #[inline]
    pub(crate) fn offer(&mut self, row: usize, col: usize, score: i32) {
        if score > self.score {
            self.score = score;
            self.cells.clear();
            self.cells.push(ScoreCell { row, col, score });
        } else if score == self.score {
            self.cells.push(ScoreCell { row, col, score });
        }
    }

    /// The optimal cells. When no cell qualified (a local alignment without
    /// any positive cell), the origin is returned so that a single empty
    /// alignment is produced.
    pub(crate) fn into_cells(self) -> Vec<ScoreCell> {
        if self.cells.is_empty() {
            vec![ScoreCell::default()]
        } else {
            self.cells
        }
    }
}

/// Picks the best of the three moves. Ties prefer the diagonal, then left,
/// then up.
#[inline]
fn choose(diag: i32, up: i32, left: i32) -> (i32, Direction) {
    if diag >= left && diag >= up {
        (diag, Direction::Diagonal)
    } else if left >= up {
        (left, Direction::Left)
    } else {
        (up, Direction::Up)
    }
}

/// The score of a leading gap of `length` columns, floored at [`NEG_INF`] so
/// that long sequences with costly gaps cannot wrap around.
#[inline]
fn leading_gap(open: i32, extend: i32, length: usize) -> i32 {
    let extensions = i64::try_from(length.saturating_sub(1)).unwrap_or(i64::MAX);
    let score = i64::from(extend).saturating_mul(extensions).saturating_add(i64::from(open));
    i32::try_from(score.max(i64::from(NEG_INF))).unwrap_or(NEG_INF)
}

/// Applies the mode's floor, turning floored cells into stops.
#[inline]
fn apply_floor<M: AlignmentMode>(score: i32, direction: Direction) -> (i32, Direction) {
    match M::FLOOR {
        Some(floor) if score <= floor => (floor, Direction::Stop),
        _ => (score, direction),
    }
}

/// Fills the matrix under the linear gap model, where every gap column costs
/// `gap`.
///
/// ## Complexity
///
/// For query length $m$ and reference length $n$:
///
/// - Time: $O(mn)$
/// - Space: $O(mn)$ bytes for the traceback, $O(n)$ for the scores (unless
///   `capture_scores` is set)
#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
pub(crate) fn fill_linear<M, S>(reference: &[u8], query: &[u8], matrix: &S, gap: i32, capture_scores: bool) -> Filled
where
    M: AlignmentMode,
    S: SimilarityMatrix + ?Sized, {
    let (rows, cols) = (query.len() + 1, reference.len() + 1);

    let mut traceback = TracebackTable::new(rows, cols);
    let mut best = BestCells::new();
    let mut scores = capture_scores.then(|| Vec::with_capacity(rows * cols));

    // H[i-1, ..] and H[i, ..]
    let mut prev = vec![0; cols];
    let mut curr = vec![0; cols];

    if M::PENALIZE_LEADING_GAPS {
        for (j, h) in prev.iter_mut().enumerate().skip(1) {
            *h = leading_gap(gap, gap, j);
            traceback.set(0, j, Direction::Left);
        }
    }
    if let Some(scores) = scores.as_mut() {
        scores.extend_from_slice(&prev);
    }

    for (i, query_residue) in query.iter().copied().enumerate().map(|(i, q)| (i + 1, q)) {
        if M::PENALIZE_LEADING_GAPS {
            curr[0] = leading_gap(gap, gap, i);
            traceback.set(i, 0, Direction::Up);
        } else {
            curr[0] = 0;
        }

        for j in 1..cols {
            let diag = prev[j - 1] + matrix.score(query_residue, reference[j - 1]);
            let up = prev[j] + gap;
            let left = curr[j - 1] + gap;

            let (score, direction) = choose(diag, up, left);
            let (score, direction) = apply_floor::<M>(score, direction);

            curr[j] = score;
            traceback.set(i, j, direction);
            if M::is_start_candidate(i, j, score, rows, cols) {
                best.offer(i, j, score);
            }
        }

        if let Some(scores) = scores.as_mut() {
            scores.extend_from_slice(&curr);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    Filled {
        traceback,
        gap_lengths: None,
        start_cells: best.into_cells(),
        scores,
    }
}

/// Fills the matrix under the affine gap model, where a gap of length $k$
/// costs `open + extend * (k - 1)`.
///
/// At every cell both gap states are updated by comparing the cost of opening
/// a new gap with extending the previous one. A new gap is opened only when it
/// scores strictly better, so ties extend the running gap. The resulting run
/// length is recorded so that the traceback can consume the whole gap in one
/// step.
///
/// ## Complexity
///
/// For query length $m$ and reference length $n$:
///
/// - Time: $O(mn)$
/// - Space: $O(mn)$ for the traceback and gap-length tables, $O(n)$ for the
///   scores (unless `capture_scores` is set)
///
/// The query and reference lengths must fit in a `u32`, the width of the
/// gap-length tables.
#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn fill_affine<M, S>(
    reference: &[u8], query: &[u8], matrix: &S, open: i32, extend: i32, capture_scores: bool,
) -> Filled
where
    M: AlignmentMode,
    S: SimilarityMatrix + ?Sized, {
    let (rows, cols) = (query.len() + 1, reference.len() + 1);

    let mut traceback = TracebackTable::new(rows, cols);
    let mut gap_lengths = GapLengthTables::new(rows, cols);
    let mut best = BestCells::new();
    let mut scores = capture_scores.then(|| Vec::with_capacity(rows * cols));

    // H[i-1, ..] and H[i, ..]
    let mut h_prev = vec![0; cols];
    let mut h_curr = vec![0; cols];
    // F[i-1, ..] and F[i, ..]. No vertical gap ends in row zero.
    let mut f_prev = vec![NEG_INF; cols];
    let mut f_curr = vec![NEG_INF; cols];

    if M::PENALIZE_LEADING_GAPS {
        for (j, h) in h_prev.iter_mut().enumerate().skip(1) {
            *h = leading_gap(open, extend, j);
            traceback.set(0, j, Direction::Left);
            gap_lengths.set_horizontal(0, j, j as u32);
        }
    }
    if let Some(scores) = scores.as_mut() {
        scores.extend_from_slice(&h_prev);
    }

    for (i, query_residue) in query.iter().copied().enumerate().map(|(i, q)| (i + 1, q)) {
        if M::PENALIZE_LEADING_GAPS {
            h_curr[0] = leading_gap(open, extend, i);
            traceback.set(i, 0, Direction::Up);
            gap_lengths.set_vertical(i, 0, i as u32);
        } else {
            h_curr[0] = 0;
        }

        // E[i, j-1]. No horizontal gap ends in column zero.
        let mut e = NEG_INF;

        for j in 1..cols {
            let f_open = h_prev[j] + open;
            let f_extend = f_prev[j] + extend;
            let f = if f_open > f_extend {
                gap_lengths.set_vertical(i, j, 1);
                f_open
            } else {
                gap_lengths.set_vertical(i, j, gap_lengths.vertical(i - 1, j) + 1);
                f_extend
            };

            let e_open = h_curr[j - 1] + open;
            let e_extend = e + extend;
            e = if e_open > e_extend {
                gap_lengths.set_horizontal(i, j, 1);
                e_open
            } else {
                gap_lengths.set_horizontal(i, j, gap_lengths.horizontal(i, j - 1) + 1);
                e_extend
            };
            f_curr[j] = f;

            let diag = h_prev[j - 1] + matrix.score(query_residue, reference[j - 1]);

            let (score, direction) = choose(diag, f, e);
            let (score, direction) = apply_floor::<M>(score, direction);

            h_curr[j] = score;
            traceback.set(i, j, direction);
            if M::is_start_candidate(i, j, score, rows, cols) {
                best.offer(i, j, score);
            }
        }

        if let Some(scores) = scores.as_mut() {
            scores.extend_from_slice(&h_curr);
        }
        std::mem::swap(&mut h_prev, &mut h_curr);
        std::mem::swap(&mut f_prev, &mut f_curr);
    }

    Filled {
        traceback,
        gap_lengths: Some(gap_lengths),
        start_cells: best.into_cells(),
        scores,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        alignment::{Global, Local, Overlap},
        data::matrices::DiagonalMatrix,
    };

    const MATRIX: DiagonalMatrix = DiagonalMatrix::new(2, -2);

    #[test]
    fn tie_break_order() {
        assert_eq!(choose(1, 1, 1), (1, Direction::Diagonal));
        assert_eq!(choose(0, 1, 1), (1, Direction::Left));
        assert_eq!(choose(0, 2, 1), (2, Direction::Up));
        assert_eq!(choose(3, 1, 2), (3, Direction::Diagonal));
    }

    #[test]
    fn leading_gap_scores() {
        assert_eq!(leading_gap(-11, -1, 1), -11);
        assert_eq!(leading_gap(-3, -1, 4), -6);
        assert_eq!(leading_gap(-2, -2, 3), -6);
        assert_eq!(leading_gap(-5, -1_000_000, 1 << 20), NEG_INF);
        assert_eq!(leading_gap(i32::MIN, i32::MIN, usize::MAX), NEG_INF);
    }

    #[test]
    fn best_cells_reset_and_ties() {
        let mut best = BestCells::new();
        best.offer(1, 1, 3);
        best.offer(1, 2, 5);
        best.offer(2, 1, 5);
        best.offer(2, 2, 4);
        assert_eq!(
            best.into_cells(),
            vec![ScoreCell { row: 1, col: 2, score: 5 }, ScoreCell { row: 2, col: 1, score: 5 }]
        );
        assert_eq!(BestCells::new().into_cells(), vec![ScoreCell::default()]);
    }

    #[test]
    fn local_linear_table() {
        let filled = fill_linear::<Local, _>(b"AC", b"A", &MATRIX, -1, true);
        assert_eq!(filled.scores, Some(vec![0, 0, 0, 0, 2, 1]));
        assert_eq!(filled.traceback.get(1, 1), Direction::Diagonal);
        assert_eq!(filled.traceback.get(1, 2), Direction::Left);
        assert_eq!(filled.traceback.get(0, 2), Direction::Stop);
        assert_eq!(filled.start_cells, vec![ScoreCell { row: 1, col: 1, score: 2 }]);
        assert!(filled.gap_lengths.is_none());
    }

    #[test]
    fn local_floor_stops() {
        let filled = fill_affine::<Local, _>(b"A", b"C", &MATRIX, -3, -1, false);
        assert_eq!(filled.traceback.get(1, 1), Direction::Stop);
        assert_eq!(filled.start_cells, vec![ScoreCell::default()]);
        assert!(filled.scores.is_none());
    }

    #[test]
    fn global_boundaries() {
        let filled = fill_affine::<Global, _>(b"ACG", b"AG", &MATRIX, -3, -1, true);
        let scores = filled.scores.unwrap();
        assert_eq!(&scores[..4], &[0, -3, -4, -5]);
        assert_eq!(scores[4], -3);
        assert_eq!(scores[8], -4);

        let gaps = filled.gap_lengths.unwrap();
        assert_eq!(gaps.horizontal(0, 3), 3);
        assert_eq!(gaps.vertical(2, 0), 2);
        assert_eq!(filled.traceback.get(0, 0), Direction::Stop);
        assert_eq!(filled.traceback.get(0, 2), Direction::Left);
        assert_eq!(filled.traceback.get(2, 0), Direction::Up);
        assert_eq!(filled.start_cells.len(), 1);
        assert_eq!((filled.start_cells[0].row, filled.start_cells[0].col), (2, 3));
    }

    #[test]
    fn affine_extends_runs() {
        // Matching the ends of the reference forces a gap of length two
        let filled = fill_affine::<Global, _>(b"AGGT", b"AT", &MATRIX, -3, -1, false);
        let end = filled.start_cells[0];
        assert_eq!((end.row, end.col, end.score), (2, 4, 0));
        assert_eq!(filled.traceback.get(2, 4), Direction::Diagonal);
        assert_eq!(filled.traceback.get(1, 3), Direction::Left);
        assert_eq!(filled.gap_lengths.unwrap().horizontal(1, 3), 2);
    }

    #[test]
    fn equal_open_and_extend_continue_the_run() {
        let filled = fill_affine::<Global, _>(b"AGGT", b"AT", &MATRIX, -2, -2, false);
        let gaps = filled.gap_lengths.unwrap();
        assert_eq!(gaps.horizontal(1, 2), 1);
        assert_eq!(gaps.horizontal(1, 3), 2);
        assert_eq!(gaps.horizontal(1, 4), 3);
        assert_eq!(filled.traceback.get(1, 3), Direction::Left);
    }

    #[test]
    fn overlap_candidates() {
        let filled = fill_linear::<Overlap, _>(b"GGAC", b"ACTT", &MATRIX, -4, false);
        assert_eq!(filled.start_cells, vec![ScoreCell { row: 2, col: 4, score: 4 }]);
    }
}
