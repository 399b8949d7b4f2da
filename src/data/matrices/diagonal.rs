use super::SimilarityMatrix;
use crate::data::alphabet::Alphabet;

/// A similarity rule giving one score to identical residues and another to
/// differing residues, without storing a table.
///
/// Letters (`A-Z`, `a-z`) and the stop symbol `*` are supported. The gap
/// symbol `-` is not a residue and is rejected like any other unsupported
/// byte. Comparison ignores case.
///
/// The rule fits any alphabet, so it reports none unless one is attached with
/// [`with_alphabet`](Self::with_alphabet).
///
/// ## Example
///
/// ```
/// # use tandem::data::{alphabet::Alphabet, matrices::{DiagonalMatrix, SimilarityMatrix}};
/// let matrix = DiagonalMatrix::new(2, -2);
/// assert_eq!(matrix.score(b'A', b'a'), 2);
/// assert_eq!(matrix.score(b'A', b'C'), -2);
/// assert!(!matrix.is_symbol_supported(b'.'));
/// assert!(!matrix.is_symbol_supported(b'-'));
///
/// let protein = matrix.with_alphabet(Alphabet::Protein);
/// assert_eq!(protein.alphabet(), Some(Alphabet::Protein));
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct DiagonalMatrix {
    pub matching: i32,
    pub mismatch: i32,
    alphabet:     Option<Alphabet>,
}

impl DiagonalMatrix {
    #[inline]
    #[must_use]
    pub const fn new(matching: i32, mismatch: i32) -> Self {
        DiagonalMatrix {
            matching,
            mismatch,
            alphabet: None,
        }
    }

    /// Attaches the alphabet of the residues being scored.
    #[inline]
    #[must_use]
    pub const fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = Some(alphabet);
        self
    }
}

impl Default for DiagonalMatrix {
    /// A match score of 2 and a mismatch score of -2.
    #[inline]
    fn default() -> Self {
        DiagonalMatrix::new(2, -2)
    }
}

impl SimilarityMatrix for DiagonalMatrix {
    #[inline]
    fn score(&self, a: u8, b: u8) -> i32 {
        if a.eq_ignore_ascii_case(&b) {
            self.matching
        } else {
            self.mismatch
        }
    }

    #[inline]
    fn is_symbol_supported(&self, symbol: u8) -> bool {
        symbol.is_ascii_alphabetic() || symbol == b'*'
    }

    #[inline]
    fn alphabet(&self) -> Option<Alphabet> {
        self.alphabet
    }
}
