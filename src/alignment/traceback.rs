use crate::{
    alignment::{AlignedPair, AlignmentStats, Direction, GapLengthTables, ScoreCell, TracebackTable},
    composition::ConsensusResolver,
    data::{
        alphabet::{Alphabet, GAP},
        matrices::SimilarityMatrix,
    },
};

/// Rebuilds alignments by walking a filled [`TracebackTable`] backwards from
/// a start cell until a [`Direction::Stop`] cell is reached.
pub(crate) struct Reconstructor<'a, S: ?Sized, R: ?Sized> {
    pub reference:   &'a [u8],
    pub query:       &'a [u8],
    pub matrix:      &'a S,
    pub resolver:    &'a R,
    /// Passed to the resolver with every column
    pub alphabet:    Alphabet,
    pub traceback:   &'a TracebackTable,
    /// Present for the affine gap model, where one gap step consumes a whole
    /// run
    pub gap_lengths: Option<&'a GapLengthTables>,
}

impl<S, R> Reconstructor<'_, S, R>
where
    S: SimilarityMatrix + ?Sized,
    R: ConsensusResolver + ?Sized,
{
    pub(crate) fn reconstruct(&self, start: ScoreCell) -> AlignedPair {
        let (mut i, mut j) = (start.row, start.col);
        let capacity = i.max(j) + i.min(j) / 8;
        let mut first = Vec::with_capacity(capacity);
        let mut second = Vec::with_capacity(capacity);
        let mut stats = AlignmentStats::default();

        loop {
            match self.traceback.get(i, j) {
                Direction::Stop => break,
                Direction::Diagonal => {
                    let reference_residue = self.reference[j - 1];
                    let query_residue = self.query[i - 1];
                    first.push(reference_residue);
                    second.push(query_residue);

                    if reference_residue.eq_ignore_ascii_case(&query_residue) && !Alphabet::is_gap(reference_residue) {
                        stats.identical += 1;
                        stats.similar += 1;
                    } else if self.matrix.score(query_residue, reference_residue) > 0 {
                        stats.similar += 1;
                    }

                    i -= 1;
                    j -= 1;
                }
                Direction::Left => {
                    let run = self.gap_lengths.map_or(1, |gaps| gaps.horizontal(i, j) as usize);
                    for residue in self.reference[j - run..j].iter().rev() {
                        first.push(*residue);
                        second.push(GAP);
                    }
                    stats.reference_insertions += run;
                    j -= run;
                }
                Direction::Up => {
                    let run = self.gap_lengths.map_or(1, |gaps| gaps.vertical(i, j) as usize);
                    for residue in self.query[i - run..i].iter().rev() {
                        first.push(GAP);
                        second.push(*residue);
                    }
                    stats.query_insertions += run;
                    i -= run;
                }
            }
        }

        first.reverse();
        second.reverse();

        let consensus = first
            .iter()
            .zip(&second)
            .map(|(&a, &b)| self.resolver.consensus(&[a, b], self.alphabet))
            .collect();

        // The sequence with the longer unaligned prefix is offset by the
        // difference
        let (first_offset, second_offset) = if i >= j { (i - j, 0) } else { (0, j - i) };

        AlignedPair {
            first,
            second,
            consensus,
            score: start.score,
            first_offset,
            second_offset,
            ref_range: j..start.col,
            query_range: i..start.row,
            stats,
        }
    }
}
