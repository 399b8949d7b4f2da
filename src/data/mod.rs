//! ## Residue alphabets, mappings, and similarity matrices.
//!
//! ## IUPAC Standards
//!
//! For nucleotides and proteins, *Tandem* implements [IUPAC
//! definitions](https://www.bioinformatics.org/sms/iupac.html) that include
//! ambiguous base calls. These are used when deriving the consensus of an
//! alignment (see [`alphabet`]).
//!
//! For amino acids, the following ambiguous codes are also included:
//! - `B`, which can be either `D` or `N` (Aspartic acid or Asparagine
//!   respectively)
//! - `Z`, which can be either `E` or `Q` (Glutamic acid or Glutamine
//!   respectively)
//! - `J`, which can be either `I` or `L` (Isoleucine or Leucine respectively)
//! - `X`, which represents an unknown position
//!
//! The bundled substitution matrices cover `B`, `Z`, and `X`, but not `J`.

pub mod alphabet;
pub mod mappings;
pub mod matrices;

pub use mappings::ByteIndexMap;
