#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::wildcard_imports,
    clippy::enum_glob_use
)]

/// Alignment functions
pub mod alignment;
/// Composition and consensus functions.
pub mod composition;
/// Alphabets, residue mappings, and similarity matrices.
pub mod data;

/// Generate sequences and other data.
#[cfg(feature = "rand")]
pub mod generate;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::alignment::{
        AlignedPair, AlignmentError, GapModel, NeedlemanWunsch, PairwiseAligner, PairwiseAlignment, PairwiseOverlap,
        SmithWaterman, score_aligned_pair,
    };
    pub use crate::composition::{ConsensusResolver, SimpleConsensusResolver};
    pub use crate::data::alphabet::Alphabet;
    pub use crate::data::matrices::{DiagonalMatrix, SimilarityMatrix, WeightMatrix, aa_mat_from_name, nt_mat_from_name};
    #[cfg(feature = "rand")]
    pub use crate::generate::rand_sequence;
}
