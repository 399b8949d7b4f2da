use super::ScoreTable;
use crate::alignment::GapModel;
use std::{fmt, ops::Range};

/// Counts collected while walking the traceback of one alignment.
#[non_exhaustive]
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default, Hash)]
pub struct AlignmentStats {
    /// Columns holding a reference residue opposite a gap
    pub reference_insertions: usize,
    /// Columns holding a query residue opposite a gap
    pub query_insertions:     usize,
    /// Columns holding the same residue in both rows
    pub identical:            usize,
    /// Columns that are identical or score positively in the similarity
    /// matrix
    pub similar:              usize,
}

/// One optimal alignment of a reference (the first sequence) against a query
/// (the second sequence).
///
/// `ref_range` and `query_range` are 0-based and end-exclusive, in the
/// coordinates of the ungapped sequences. For an empty local alignment, both
/// ranges are `0..0`.
#[non_exhaustive]
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct AlignedPair {
    /// The aligned reference, with gaps inserted
    pub first:         Vec<u8>,
    /// The aligned query, with gaps inserted
    pub second:        Vec<u8>,
    /// One consensus symbol per aligned column
    pub consensus:     Vec<u8>,
    /// The score of the alignment
    pub score:         i32,
    /// The offset of the reference relative to the query, when the reference
    /// has the longer unaligned prefix
    pub first_offset:  usize,
    /// The offset of the query relative to the reference, when the query has
    /// the longer unaligned prefix
    pub second_offset: usize,
    /// The residues of the reference included in the alignment
    pub ref_range:     Range<usize>,
    /// The residues of the query included in the alignment
    pub query_range:   Range<usize>,
    /// Insertion, identity, and similarity counts
    pub stats:         AlignmentStats,
}

impl AlignedPair {
    /// The number of aligned columns.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.first.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// The insertion counts as `[reference, query]`.
    #[inline]
    #[must_use]
    pub fn insertions(&self) -> [usize; 2] {
        [self.stats.reference_insertions, self.stats.query_insertions]
    }

    /// The first aligned positions as `[reference, query]`.
    #[inline]
    #[must_use]
    pub fn start_offsets(&self) -> [usize; 2] {
        [self.ref_range.start, self.query_range.start]
    }

    /// The last aligned positions (inclusive) as `[reference, query]`, or
    /// `None` when one of the sequences has no residue at or before the end
    /// of the alignment.
    #[inline]
    #[must_use]
    pub fn end_offsets(&self) -> Option<[usize; 2]> {
        Some([self.ref_range.end.checked_sub(1)?, self.query_range.end.checked_sub(1)?])
    }
}

impl fmt::Display for AlignedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.first.escape_ascii())?;
        writeln!(f, "{}", self.second.escape_ascii())?;
        writeln!(f, "{}", self.consensus.escape_ascii())?;
        write!(f, "Score: {}", self.score)
    }
}

/// The complete result of one call to an aligner: every optimal alignment, in
/// the order their start cells were found, and the optional score table.
#[non_exhaustive]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PairwiseAlignment {
    /// The name of the algorithm which produced the alignments
    pub algorithm:   &'static str,
    /// The gap model used
    pub gaps:        GapModel,
    /// One alignment per optimal start cell
    pub pairs:       Vec<AlignedPair>,
    /// The score and traceback tables, if requested and within budget
    pub score_table: Option<ScoreTable>,
}

impl PairwiseAlignment {
    /// The first optimal alignment.
    #[inline]
    #[must_use]
    pub fn best(&self) -> Option<&AlignedPair> {
        self.pairs.first()
    }

    /// The optimal score shared by all alignments.
    #[inline]
    #[must_use]
    pub fn score(&self) -> i32 {
        self.best().map_or(0, |pair| pair.score)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, AlignedPair> {
        self.pairs.iter()
    }
}

impl IntoIterator for PairwiseAlignment {
    type Item = AlignedPair;
    type IntoIter = std::vec::IntoIter<AlignedPair>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a> IntoIterator for &'a PairwiseAlignment {
    type Item = &'a AlignedPair;
    type IntoIter = std::slice::Iter<'a, AlignedPair>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
