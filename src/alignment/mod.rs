//! ## Functions for aligning sequence data.
//!
//! *Tandem* computes optimal pairwise alignments of DNA, RNA, protein, or any
//! other sequence data scored by a [`SimilarityMatrix`], under either a linear
//! or an affine [`GapModel`].
//!
//! - [Smith-Waterman]: Optimal local alignment with [`SmithWaterman`].
//! - [Needleman-Wunsch]: Optimal global alignment with [`NeedlemanWunsch`].
//! - Overlap alignment, where leading and trailing gaps are free, with
//!   [`PairwiseOverlap`].
//!
//! All three share one engine. The table is filled row by row keeping only
//! two rows of scores, while the traceback directions (and, for the affine
//! model, the length of the gap run ending in each cell) are kept for every
//! cell. Each optimal cell is then traced back into an [`AlignedPair`]. The
//! affine recurrence follows Gotoh (1982), except that a whole gap run is
//! consumed in a single traceback step.
//!
//! ### Citations
//!
//! > Smith, Temple F. & Waterman, Michael S. (1981). "Identification of Common
//! > Molecular Subsequences". Journal of Molecular Biology. 147 (1): 195–197.
//!
//! > Needleman, Saul B. & Wunsch, Christian D. (1970). "A general method
//! > applicable to the search for similarities in the amino acid sequence of
//! > two proteins". Journal of Molecular Biology. 48 (3): 443–53.
//!
//! > Gotoh, Osamu (1982). "An improved algorithm for matching biological
//! > sequences". Journal of Molecular Biology. 162 (3): 705–708.
//!
//! [Smith-Waterman]: https://en.wikipedia.org/wiki/Smith%E2%80%93Waterman_algorithm
//! [Needleman-Wunsch]: https://en.wikipedia.org/wiki/Needleman%E2%80%93Wunsch_algorithm
//! [`SimilarityMatrix`]: crate::data::matrices::SimilarityMatrix

mod aligner;
mod errors;
mod fill;
mod gaps;
mod modes;
mod score_from_path;
mod traceback;
mod types;

pub use aligner::*;
pub use errors::*;
pub use gaps::*;
pub use modes::*;
pub use score_from_path::*;
pub use types::*;

#[cfg(test)]
mod test;
