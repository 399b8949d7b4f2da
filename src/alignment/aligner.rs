use crate::{
    alignment::{
        AlignmentError, AlignmentMode, Direction, GapModel, Global, Local, Overlap, PairwiseAlignment, ScoreTable,
        fill::{Filled, fill_affine, fill_linear},
        traceback::Reconstructor,
    },
    composition::{ConsensusResolver, SimpleConsensusResolver},
    data::{alphabet::Alphabet, matrices::SimilarityMatrix},
};
use std::{marker::PhantomData, mem::size_of};

/// A reusable pairwise aligner for the [`AlignmentMode`] `M`.
///
/// The aligner only holds configuration. Every call to an alignment method
/// allocates its own tables, so one aligner can be shared across threads
/// whenever its [`ConsensusResolver`] can.
///
/// Every call returns all optimal alignments in the order their start cells
/// are found (row-major), so ties are reported deterministically. When two
/// terms of the recurrence tie, the diagonal is preferred over a gap in the
/// query (left), which is preferred over a gap in the reference (up).
///
/// The consensus of every column is resolved in the alphabet reported by
/// [`SimilarityMatrix::alphabet`], or DNA when the matrix reports none.
///
/// ## Example
///
/// ```
/// # use tandem::{alignment::SmithWaterman, data::matrices::DiagonalMatrix};
/// let matrix = DiagonalMatrix::new(2, -2);
/// let alignment = SmithWaterman::new()
///     .align_simple(b"GGATTACAGG", b"ATTACA", &matrix, -1)
///     .unwrap();
///
/// let best = alignment.best().unwrap();
/// assert_eq!(best.score, 12);
/// assert_eq!(best.first, b"ATTACA");
/// assert_eq!(best.ref_range, 2..8);
/// ```
#[derive(Clone, Debug)]
pub struct PairwiseAligner<M, R = SimpleConsensusResolver> {
    resolver:            R,
    include_score_table: bool,
    max_table_bytes:     usize,
    mode:                PhantomData<M>,
}

/// Smith-Waterman local alignment.
pub type SmithWaterman<R = SimpleConsensusResolver> = PairwiseAligner<Local, R>;

/// Needleman-Wunsch global alignment.
pub type NeedlemanWunsch<R = SimpleConsensusResolver> = PairwiseAligner<Global, R>;

/// Overlap alignment with free leading and trailing gaps.
pub type PairwiseOverlap<R = SimpleConsensusResolver> = PairwiseAligner<Overlap, R>;

impl<M: AlignmentMode> PairwiseAligner<M> {
    /// An aligner with no score table, using a [`SimpleConsensusResolver`]
    /// which follows the alphabet of each call's similarity matrix.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        PairwiseAligner {
            resolver:            SimpleConsensusResolver::default(),
            include_score_table: false,
            max_table_bytes:     isize::MAX as usize,
            mode:                PhantomData,
        }
    }
}

impl<M: AlignmentMode> Default for PairwiseAligner<M> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<M: AlignmentMode, R: ConsensusResolver> PairwiseAligner<M, R> {
    /// The name of the algorithm, such as `"Smith-Waterman"`.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        M::NAME
    }

    #[inline]
    #[must_use]
    pub fn description(&self) -> &'static str {
        M::DESCRIPTION
    }

    #[inline]
    #[must_use]
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Replaces the resolver used to build the consensus of every column.
    #[inline]
    #[must_use]
    pub fn with_consensus_resolver<R2: ConsensusResolver>(self, resolver: R2) -> PairwiseAligner<M, R2> {
        PairwiseAligner {
            resolver,
            include_score_table: self.include_score_table,
            max_table_bytes: self.max_table_bytes,
            mode: PhantomData,
        }
    }

    /// Whether to keep a copy of every cell's score in
    /// [`PairwiseAlignment::score_table`]. This multiplies the memory used by
    /// the fill, so it is disabled (with a warning) when it would not fit in
    /// the table budget.
    #[inline]
    #[must_use]
    pub fn with_score_table(mut self, include: bool) -> Self {
        self.include_score_table = include;
        self
    }

    /// Sets the number of bytes the dynamic programming tables of one call may
    /// occupy.
    #[inline]
    #[must_use]
    pub fn with_max_table_bytes(mut self, max_bytes: usize) -> Self {
        self.max_table_bytes = max_bytes;
        self
    }

    /// Aligns `query` against `reference` with an affine gap model.
    ///
    /// ## Errors
    ///
    /// See [`align_with_gaps`](Self::align_with_gaps).
    #[inline]
    pub fn align<S>(
        &self, reference: &[u8], query: &[u8], matrix: &S, gap_open: i32, gap_extend: i32,
    ) -> Result<PairwiseAlignment, AlignmentError>
    where
        S: SimilarityMatrix + ?Sized, {
        self.align_with_gaps(reference, query, matrix, GapModel::affine(gap_open, gap_extend))
    }

    /// Aligns `query` against `reference` with a linear gap model, charging
    /// `gap` for every gap column.
    ///
    /// ## Errors
    ///
    /// See [`align_with_gaps`](Self::align_with_gaps).
    #[inline]
    pub fn align_simple<S>(
        &self, reference: &[u8], query: &[u8], matrix: &S, gap: i32,
    ) -> Result<PairwiseAlignment, AlignmentError>
    where
        S: SimilarityMatrix + ?Sized, {
        self.align_with_gaps(reference, query, matrix, GapModel::linear(gap))
    }

    /// Aligns `query` against `reference`, returning one [`AlignedPair`] per
    /// optimal start cell.
    ///
    /// ## Errors
    ///
    /// Inputs are checked in this order, before any table is allocated:
    /// * [`AlignmentError::InvalidInput`] if either sequence is empty
    /// * [`AlignmentError::AlphabetMismatch`] if `matrix` does not support a
    ///   residue (the reference is checked first)
    /// * [`AlignmentError::InvalidGapModel`] if `gaps` fails
    ///   [`GapModel::validate`]
    /// * [`AlignmentError::SequenceTooLarge`] if the traceback table (and the
    ///   gap-length tables of the affine model) would exceed the table budget,
    ///   or if either sequence is longer than `u32::MAX - 1` residues
    ///
    /// ## Complexity
    ///
    /// For query length $m$ and reference length $n$, the fill takes $O(mn)$
    /// time and $O(mn)$ bytes: one byte per cell for the traceback, plus eight
    /// per cell for the affine gap lengths and four per cell for the optional
    /// score table. Each traceback takes $O(m + n)$.
    ///
    /// [`AlignedPair`]: crate::alignment::AlignedPair
    pub fn align_with_gaps<S>(
        &self, reference: &[u8], query: &[u8], matrix: &S, gaps: GapModel,
    ) -> Result<PairwiseAlignment, AlignmentError>
    where
        S: SimilarityMatrix + ?Sized, {
        if reference.is_empty() {
            return Err(AlignmentError::InvalidInput("reference"));
        }
        if query.is_empty() {
            return Err(AlignmentError::InvalidInput("query"));
        }
        if let Some((position, symbol)) = matrix.first_unsupported(reference) {
            return Err(AlignmentError::AlphabetMismatch {
                sequence: "reference",
                position,
                symbol,
            });
        }
        if let Some((position, symbol)) = matrix.first_unsupported(query) {
            return Err(AlignmentError::AlphabetMismatch {
                sequence: "query",
                position,
                symbol,
            });
        }
        let gaps = gaps.validate()?;

        let (rows, cols) = (query.len() + 1, reference.len() + 1);
        let capture_scores = self.check_table_budget(rows, cols, gaps)?;

        let alphabet = matrix.alphabet().unwrap_or_default();
        log::debug!(
            "{}: aligning {} x {} {alphabet:?} residues with {gaps:?}",
            M::NAME,
            query.len(),
            reference.len()
        );

        let filled = match gaps {
            GapModel::Linear { gap } => fill_linear::<M, S>(reference, query, matrix, gap, capture_scores),
            GapModel::Affine { open, extend } => fill_affine::<M, S>(reference, query, matrix, open, extend, capture_scores),
        };
        log::trace!("{}: {} optimal start cell(s)", M::NAME, filled.start_cells.len());

        Ok(self.reconstruct_all(reference, query, matrix, alphabet, gaps, filled))
    }

    fn reconstruct_all<S>(
        &self, reference: &[u8], query: &[u8], matrix: &S, alphabet: Alphabet, gaps: GapModel, filled: Filled,
    ) -> PairwiseAlignment
    where
        S: SimilarityMatrix + ?Sized, {
        let reconstructor = Reconstructor {
            reference,
            query,
            matrix,
            resolver: &self.resolver,
            alphabet,
            traceback: &filled.traceback,
            gap_lengths: filled.gap_lengths.as_ref(),
        };
        let pairs = filled
            .start_cells
            .iter()
            .map(|&cell| reconstructor.reconstruct(cell))
            .collect();

        let score_table = filled
            .scores
            .map(|scores| ScoreTable::new(reference, query, scores, filled.traceback));

        PairwiseAlignment {
            algorithm: M::NAME,
            gaps,
            pairs,
            score_table,
        }
    }

    /// Returns whether the score table can be captured. The traceback table
    /// and the affine gap-length tables are mandatory, so failing to fit them
    /// is an error. Gap run lengths are stored as `u32`, which bounds both
    /// dimensions.
    pub(super) fn check_table_budget(&self, rows: usize, cols: usize, gaps: GapModel) -> Result<bool, AlignmentError> {
        let too_large = || AlignmentError::SequenceTooLarge {
            rows,
            cols,
            max_bytes: self.max_table_bytes,
        };

        if u32::try_from(rows).is_err() || u32::try_from(cols).is_err() {
            return Err(too_large());
        }

        let cells = rows.checked_mul(cols).ok_or_else(too_large)?;
        let mut mandatory = cells.checked_mul(size_of::<Direction>()).ok_or_else(too_large)?;
        if gaps.is_affine() {
            let gap_lengths = cells.checked_mul(2 * size_of::<u32>()).ok_or_else(too_large)?;
            mandatory = mandatory.checked_add(gap_lengths).ok_or_else(too_large)?;
        }
        if mandatory > self.max_table_bytes {
            return Err(too_large());
        }

        if !self.include_score_table {
            return Ok(false);
        }

        let total = cells
            .checked_mul(size_of::<i32>())
            .and_then(|scores| scores.checked_add(mandatory));
        match total {
            Some(total) if total <= self.max_table_bytes => Ok(true),
            _ => {
                log::warn!(
                    "{}: the score table for {rows} x {cols} cells exceeds the budget of {} bytes and will not be captured",
                    M::NAME,
                    self.max_table_bytes
                );
                Ok(false)
            }
        }
    }
}

#[cfg(feature = "parallel")]
impl<M, R> PairwiseAligner<M, R>
where
    M: AlignmentMode + Sync,
    R: ConsensusResolver + Sync,
{
    /// Aligns many independent pairs of `(reference, query)` concurrently
    /// using rayon. The results are in the same order as `pairs`, and each
    /// pair fails or succeeds on its own.
    pub fn align_batch<S>(
        &self, pairs: &[(&[u8], &[u8])], matrix: &S, gaps: GapModel,
    ) -> Vec<Result<PairwiseAlignment, AlignmentError>>
    where
        S: SimilarityMatrix + Sync + ?Sized, {
        use rayon::prelude::*;

        pairs
            .par_iter()
            .map(|&(reference, query)| self.align_with_gaps(reference, query, matrix, gaps))
            .collect()
    }
}
