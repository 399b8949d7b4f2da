//! ## Consensus of aligned residues
//!
//! The aligners derive a consensus symbol for every column of an alignment
//! through the [`ConsensusResolver`] trait. [`SimpleConsensusResolver`] is the
//! default, using IUPAC ambiguity codes when the column disagrees.

mod consensus;

pub use consensus::*;
