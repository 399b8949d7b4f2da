use crate::{
    alignment::{GapModel, ScoringError},
    data::{alphabet::Alphabet, matrices::SimilarityMatrix},
};

/// Recomputes the score of an aligned pair, where `first` is the aligned
/// reference and `second` is the aligned query (as in
/// [`AlignedPair`](crate::alignment::AlignedPair)).
///
/// Every column without a gap scores `matrix.score(query, reference)`. Every
/// maximal run of gaps in either row is charged [`GapModel::cost`] of its
/// length. Applied to an alignment produced by an aligner with the same
/// matrix and gap model, this reproduces the reported score.
///
/// ## Errors
///
/// Returns [`ScoringError::LengthMismatch`] if the rows differ in length, and
/// [`ScoringError::GapAgainstGap`] for the first column holding a gap in both
/// rows.
///
/// ## Example
///
/// ```
/// # use tandem::{alignment::{GapModel, score_aligned_pair}, data::matrices::DiagonalMatrix};
/// let matrix = DiagonalMatrix::new(2, -2);
/// let score = score_aligned_pair(b"AGGT", b"A--T", &matrix, GapModel::affine(-3, -1));
/// assert_eq!(score, Ok(0));
/// ```
pub fn score_aligned_pair<S>(first: &[u8], second: &[u8], matrix: &S, gaps: GapModel) -> Result<i32, ScoringError>
where
    S: SimilarityMatrix + ?Sized, {
    if first.len() != second.len() {
        return Err(ScoringError::LengthMismatch {
            first:  first.len(),
            second: second.len(),
        });
    }

    // Which row the previous column had a gap in, if any
    #[derive(PartialEq)]
    enum Run {
        None,
        First,
        Second,
    }

    let mut score = 0;
    let mut run = Run::None;

    for (column, (&reference, &query)) in first.iter().zip(second).enumerate() {
        let current = match (Alphabet::is_gap(reference), Alphabet::is_gap(query)) {
            (true, true) => return Err(ScoringError::GapAgainstGap(column)),
            (false, false) => {
                score += matrix.score(query, reference);
                Run::None
            }
            (true, false) => Run::First,
            (false, true) => Run::Second,
        };

        if current != Run::None {
            score += if current == run {
                gaps.extend_cost()
            } else {
                gaps.open_cost()
            };
        }
        run = current;
    }

    Ok(score)
}
