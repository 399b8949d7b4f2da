//! ## Substitution/Similarity Matrices for Alignment
//!
//! Every aligner in *Tandem* scores residue pairs through the
//! [`SimilarityMatrix`] trait. Two families are provided:
//!
//! - [`WeightMatrix`]: a full $S \times S$ table of weights, indexed through a
//!   [`ByteIndexMap`] so that a lookup is two array accesses. The protein
//!   matrices [`BLOSUM_45`], [`BLOSUM_50`], [`BLOSUM_62`], [`BLOSUM_80`],
//!   [`BLOSUM_90`], [`PAM_30`], [`PAM_70`], and [`PAM_250`] are provided as
//!   constants, along with [`EDNA_FULL`] for nucleotides with ambiguity codes.
//!   Simple DNA matrices can be built with [`WeightMatrix::new_dna_matrix`].
//! - [`DiagonalMatrix`]: a constant match/mismatch rule that needs no table.
//!
//! ## Choice of Matrix
//!
//! Higher BLOSUM numbers (and lower PAM numbers) are used for closely related
//! proteins. Lower BLOSUM numbers (and higher PAM numbers) are used for
//! distantly related proteins. PAM250 is roughly comparable to BLOSUM45.
//!
//! ## Module Citations
//!
//! 1. Dayhoff, M., Schwartz, R., & Orcutt, B. (1978). "A model of evolutionary
//!    change in proteins". In M. Dayhoff (Ed.), Atlas of Protein Sequence and
//!    Structure (Vol. 5, pp. 345–352). Washington, D. C.: National Biomedical
//!    Research Foundation.
//!
//! 2. Henikoff, S., & Henikoff, J. G. (1992). "Amino acid substitution matrices
//!    from protein blocks". Proceedings of the National Academy of Sciences of
//!    the United States of America, 89(22), 10915–10919. doi:
//!    <https://doi.org/10.1073/pnas.89.22.10915>

use crate::data::{
    alphabet::Alphabet,
    mappings::{ByteIndexMap, DNA_PROFILE_MAP},
};
use std::fmt::Display;

mod aa;
mod diagonal;
mod nucleotide;

pub use aa::*;
pub use diagonal::*;
pub use nucleotide::*;

/// A score function over ordered residue pairs, as consumed by the aligners.
///
/// Implementations must answer [`score`] in constant time, since it is called
/// once per cell of the dynamic programming matrix.
///
/// [`score`]: SimilarityMatrix::score
pub trait SimilarityMatrix {
    /// The substitution score for aligning residue `a` against residue `b`.
    fn score(&self, a: u8, b: u8) -> i32;

    /// Whether `symbol` is covered by the matrix.
    fn is_symbol_supported(&self, symbol: u8) -> bool;

    /// Finds the first residue of `seq` which is not covered by the matrix,
    /// along with its position.
    #[inline]
    fn first_unsupported(&self, seq: &[u8]) -> Option<(usize, u8)> {
        seq.iter().copied().enumerate().find(|&(_, symbol)| !self.is_symbol_supported(symbol))
    }

    /// The alphabet of the residues the matrix is built for, if it is specific
    /// to one. The aligners derive consensus symbols in this alphabet, and in
    /// DNA when it is `None`.
    #[inline]
    fn alphabet(&self) -> Option<Alphabet> {
        None
    }
}

impl<M: SimilarityMatrix + ?Sized> SimilarityMatrix for &M {
    #[inline]
    fn score(&self, a: u8, b: u8) -> i32 {
        (**self).score(a, b)
    }

    #[inline]
    fn is_symbol_supported(&self, symbol: u8) -> bool {
        (**self).is_symbol_supported(symbol)
    }

    #[inline]
    fn alphabet(&self) -> Option<Alphabet> {
        (**self).alphabet()
    }
}

/// Uppercases `name` and drops spaces, hyphens, underscores, and periods.
fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_' | '.'))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// A weight matrix representing the scores for various matches and mismatches
/// when performing sequence alignment.
///
/// To construct a new weight matrix, use [`new`], [`new_custom`], or
/// [`new_dna_matrix`]. The rows represent the first residue passed to
/// [`get_weight`] and the columns represent the second.
///
/// [`new`]: WeightMatrix::new
/// [`new_custom`]: WeightMatrix::new_custom
/// [`new_dna_matrix`]: WeightMatrix::new_dna_matrix
/// [`get_weight`]: WeightMatrix::get_weight
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct WeightMatrix<'a, const S: usize> {
    pub weights: [[i8; S]; S],
    pub mapping: &'a ByteIndexMap<S>,
}

impl<'a, const S: usize> WeightMatrix<'a, S> {
    /// Creates a new [`WeightMatrix`] with a given alphabet represented by
    /// `mapping`, a fixed `matching` score and `mismatch` score, and an
    /// optionally ignored residue. A pair where either residue is the ignored
    /// one will always have a score of 0.
    ///
    /// ## Panics
    ///
    /// Panics if an invalid byte was specified for the `ignoring` field.
    #[must_use]
    pub const fn new(mapping: &'a ByteIndexMap<S>, matching: i8, mismatch: i8, ignoring: Option<u8>) -> Self {
        let mut weights = [[0i8; S]; S];
        let skip_index = match ignoring {
            Some(ignoring) => {
                if mapping.contains(ignoring) {
                    Some(mapping.to_index(ignoring))
                } else {
                    panic!("An invalid byte was specified for the ignoring field.")
                }
            }
            None => None,
        };

        let mut i = 0;
        while i < S {
            let mut j = 0;
            while j < S {
                let skipped = match skip_index {
                    Some(k) => k == i || k == j,
                    None => false,
                };
                if !skipped {
                    weights[i][j] = if i == j { matching } else { mismatch };
                }
                j += 1;
            }
            i += 1;
        }
        WeightMatrix { weights, mapping }
    }

    /// Creates a new [`WeightMatrix`] from a custom table of weights.
    #[must_use]
    pub const fn new_custom(mapping: &'a ByteIndexMap<S>, weights: [[i8; S]; S]) -> Self {
        WeightMatrix { weights, mapping }
    }

    /// Creates a new [`WeightMatrix`] from a closure, which receives the row
    /// residue followed by the column residue.
    pub fn new_from_fn<F>(mapping: &'a ByteIndexMap<S>, weight_fn: F) -> Self
    where
        F: Fn(u8, u8) -> i8, {
        let mut weights = [[0i8; S]; S];
        for (row, a) in weights.iter_mut().zip(mapping.byte_keys()) {
            for (weight, b) in row.iter_mut().zip(mapping.byte_keys()) {
                *weight = weight_fn(*a, *b);
            }
        }
        WeightMatrix { weights, mapping }
    }

    /// For a given pair of residues, retrieves the weight stored in the
    /// matrix.
    #[inline]
    #[must_use]
    pub const fn get_weight(&self, a: u8, b: u8) -> i8 {
        self.weights[self.mapping.to_index(a)][self.mapping.to_index(b)]
    }

    /// Whether the matrix is symmetric, as is expected of substitution
    /// matrices.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        (0..S).all(|i| (0..i).all(|j| self.weights[i][j] == self.weights[j][i]))
    }
}

impl WeightMatrix<'static, 5> {
    /// Creates a new DNA [`WeightMatrix`] with a fixed `matching` score,
    /// `mismatch` score, and optionally ignoring a base. `U` is scored as `T`.
    #[must_use]
    pub const fn new_dna_matrix(matching: i8, mismatch: i8, ignoring: Option<u8>) -> Self {
        WeightMatrix::new(&DNA_PROFILE_MAP, matching, mismatch, ignoring)
    }
}

impl<const S: usize> SimilarityMatrix for WeightMatrix<'_, S> {
    #[inline]
    fn score(&self, a: u8, b: u8) -> i32 {
        i32::from(self.get_weight(a, b))
    }

    #[inline]
    fn is_symbol_supported(&self, symbol: u8) -> bool {
        self.mapping.contains(symbol)
    }

    /// The alphabet recorded on the matrix's [`ByteIndexMap`].
    #[inline]
    fn alphabet(&self) -> Option<Alphabet> {
        self.mapping.alphabet()
    }
}

impl<const S: usize> Display for WeightMatrix<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut col_widths = [0; S];
        for row in &self.weights {
            for (width, val) in col_widths.iter_mut().zip(row) {
                *width = (*width).max(val.to_string().len());
            }
        }
        for width in col_widths.iter_mut().skip(1) {
            *width += 1;
        }

        let residues = self.mapping.byte_keys();
        write!(f, "   ")?;
        for (residue, width) in residues.iter().zip(&col_widths) {
            write!(f, "{residue:>width$}", residue = *residue as char)?;
        }
        writeln!(f)?;

        for (row, residue) in self.weights.iter().zip(residues) {
            write!(f, "{residue}  ", residue = *residue as char)?;
            for (val, width) in row.iter().zip(&col_widths) {
                write!(f, "{val:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    static AA_MATS: [&AaMatrix; 8] = [
        &BLOSUM_45, &BLOSUM_50, &BLOSUM_62, &BLOSUM_80, &BLOSUM_90, &PAM_30, &PAM_70, &PAM_250,
    ];

    #[test]
    fn create_simple() {
        static RESIDUE_MAP: ByteIndexMap<2> = ByteIndexMap::new(*b"AB", b'A');
        let result1 = WeightMatrix {
            weights: [[1, 0], [0, 1]],
            mapping: &RESIDUE_MAP,
        };
        let result2 = WeightMatrix::new(&RESIDUE_MAP, 1, 0, None);
        let result3 = WeightMatrix::new_custom(&RESIDUE_MAP, [[1, 0], [0, 1]]);
        let result4 = WeightMatrix::new_from_fn(&RESIDUE_MAP, |a, b| i8::from(a == b));
        assert_eq!(result1, result2);
        assert_eq!(result1, result3);
        assert_eq!(result1, result4);
    }

    #[test]
    #[should_panic(expected = "An invalid byte was specified for the ignoring field.")]
    fn test_invalid_char() {
        let _ = WeightMatrix::new_dna_matrix(1, 0, Some(b'R'));
    }

    #[test]
    fn dna_matrix_ignoring_n() {
        let result = WeightMatrix::new_dna_matrix(2, -5, Some(b'N'));
        assert_eq!(
            result.weights,
            [
                [2, -5, -5, -5, 0],
                [-5, 2, -5, -5, 0],
                [-5, -5, 2, -5, 0],
                [-5, -5, -5, 2, 0],
                [0, 0, 0, 0, 0],
            ]
        );
        assert_eq!(result.score(b'u', b'T'), 2);
        assert_eq!(result.score(b'A', b'n'), 0);
        assert!(result.is_symbol_supported(b'g'));
        assert!(!result.is_symbol_supported(b'-'));
        assert_eq!(result.first_unsupported(b"ACGRT"), Some((3, b'R')));
    }

    #[test]
    fn protein_matrices() {
        for mat in AA_MATS {
            assert!(mat.is_symmetric());
            assert_eq!(mat.score(b'*', b'*'), 1);
        }
        assert_eq!(BLOSUM_62.score(b'W', b'w'), 11);
        assert_eq!(BLOSUM_62.score(b'A', b'R'), -1);
        assert_eq!(PAM_250.score(b'C', b'C'), 12);
        assert_eq!(PAM_250.score(b'T', b'G'), 0);
        assert!(!PAM_250.is_symbol_supported(b'O'));
        assert_eq!(BLOSUM_50.score(b'C', b'C'), 13);
        assert_eq!(BLOSUM_90.score(b'W', b'W'), 11);
        assert_eq!(PAM_30.score(b'W', b'E'), -17);
        assert_eq!(PAM_70.score(b'M', b'M'), 10);
        assert_eq!(PAM_30.score(b'*', b'A'), -17);
    }

    #[test]
    fn ambiguous_nucleotides() {
        assert!(EDNA_FULL.is_symmetric());
        assert_eq!(EDNA_FULL.score(b'A', b'A'), 5);
        assert_eq!(EDNA_FULL.score(b'a', b'r'), 1);
        assert_eq!(EDNA_FULL.score(b'A', b'Y'), -4);
        assert_eq!(EDNA_FULL.score(b'N', b'N'), -1);
        assert_eq!(EDNA_FULL.score(b'U', b'T'), 5);
        assert_eq!(EDNA_FULL.first_unsupported(b"ACGTRYKMSWBDHVN-"), Some((15, b'-')));
        assert_eq!(EDNA_FULL_RNA.score(b'U', b'A'), -4);
        assert_eq!(EDNA_FULL_RNA.weights, EDNA_FULL.weights);
    }

    #[test]
    fn matrix_alphabets() {
        assert_eq!(BLOSUM_62.alphabet(), Some(Alphabet::Protein));
        assert_eq!(PAM_30.alphabet(), Some(Alphabet::Protein));
        assert_eq!(EDNA_FULL.alphabet(), Some(Alphabet::Dna));
        assert_eq!(EDNA_FULL_RNA.alphabet(), Some(Alphabet::Rna));
        assert_eq!(WeightMatrix::new_dna_matrix(2, -3, None).alphabet(), Some(Alphabet::Dna));
        assert_eq!(DiagonalMatrix::new(2, -2).alphabet(), None);
        assert_eq!(DiagonalMatrix::new(2, -2).with_alphabet(Alphabet::Protein).alphabet(), Some(Alphabet::Protein));
    }

    #[test]
    fn matrix_names() {
        assert!(aa_mat_from_name("blosum 62").is_some_and(|m| std::ptr::eq(m, &BLOSUM_62)));
        assert!(aa_mat_from_name("BLOSUM_80").is_some());
        assert!(aa_mat_from_name("BLOSUM-45").is_some());
        assert!(aa_mat_from_name("pam250").is_some());
        assert!(aa_mat_from_name("blosum50").is_some_and(|m| std::ptr::eq(m, &BLOSUM_50)));
        assert!(aa_mat_from_name("BLOSUM 90").is_some());
        assert!(aa_mat_from_name("pam-30").is_some_and(|m| std::ptr::eq(m, &PAM_30)));
        assert!(aa_mat_from_name("PAM_70").is_some());
        assert!(aa_mat_from_name("BLOSUM100").is_none());
        assert!(aa_mat_from_name("PAM").is_none());
        assert!(aa_mat_from_name("").is_none());

        assert!(nt_mat_from_name("EDNAFULL").is_some_and(|m| std::ptr::eq(m, &EDNA_FULL)));
        assert!(nt_mat_from_name("NUC.4.4").is_some_and(|m| std::ptr::eq(m, &EDNA_FULL)));
        assert!(nt_mat_from_name("Ambiguous RNA").is_some_and(|m| std::ptr::eq(m, &EDNA_FULL_RNA)));
        assert!(nt_mat_from_name("BLOSUM62").is_none());
    }

    #[test]
    fn display() {
        static RESIDUE_MAP: ByteIndexMap<2> = ByteIndexMap::new(*b"AB", b'A');
        let matrix = WeightMatrix::new(&RESIDUE_MAP, 10, -1, None);
        assert_eq!(matrix.to_string(), "    A  B\nA  10 -1\nB  -1 10\n");
    }
}
