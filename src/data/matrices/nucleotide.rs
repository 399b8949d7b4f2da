use super::WeightMatrix;
use crate::data::mappings::{IUPAC_DNA_MAP, IUPAC_RNA_MAP};

/// Number of residues covered by the nucleotide matrices: the four bases and
/// the eleven IUPAC ambiguity codes.
pub const IUPAC_RESIDUES: usize = 15;

/// A signed nucleotide substitution matrix over every IUPAC code.
pub type NucleotideMatrix = WeightMatrix<'static, IUPAC_RESIDUES>;

/// NCBI's `NUC.4.4` weights, in the key order of [`IUPAC_DNA_MAP`] and
/// [`IUPAC_RNA_MAP`]. Ambiguity codes score by the overlap of the bases they
/// stand for.
#[rustfmt::skip]
const NUC_4_4: [[i8; IUPAC_RESIDUES]; IUPAC_RESIDUES] = [
    //  A  T/U  G   C   S   W   R   Y   K   M   B   V   H   D   N
    [ 5, -4, -4, -4, -4,  1,  1, -4, -4,  1, -4, -1, -1, -1, -2], // A
    [-4,  5, -4, -4, -4,  1, -4,  1,  1, -4, -1, -4, -1, -1, -2], // T/U
    [-4, -4,  5, -4,  1, -4,  1, -4,  1, -4, -1, -1, -4, -1, -2], // G
    [-4, -4, -4,  5,  1, -4, -4,  1, -4,  1, -1, -1, -1, -4, -2], // C
    [-4, -4,  1,  1, -1, -4, -2, -2, -2, -2, -1, -1, -3, -3, -1], // S
    [ 1,  1, -4, -4, -4, -1, -2, -2, -2, -2, -3, -3, -1, -1, -1], // W
    [ 1, -4,  1, -4, -2, -2, -1, -4, -2, -2, -3, -1, -3, -1, -1], // R
    [-4,  1, -4,  1, -2, -2, -4, -1, -2, -2, -1, -3, -1, -3, -1], // Y
    [-4,  1,  1, -4, -2, -2, -2, -2, -1, -4, -1, -3, -3, -1, -1], // K
    [ 1, -4, -4,  1, -2, -2, -2, -2, -4, -1, -3, -1, -1, -3, -1], // M
    [-4, -1, -1, -1, -1, -3, -3, -1, -1, -3, -1, -2, -2, -2, -1], // B
    [-1, -4, -1, -1, -1, -3, -1, -3, -3, -1, -2, -1, -2, -2, -1], // V
    [-1, -1, -4, -1, -3, -1, -3, -1, -3, -1, -2, -2, -1, -2, -1], // H
    [-1, -1, -1, -4, -3, -1, -1, -3, -1, -3, -2, -2, -2, -1, -1], // D
    [-2, -2, -2, -2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // N
];

/// NCBI's `EDNAFULL` matrix. `A` against `R` is positive, while `A` against
/// `Y` is not.
pub static EDNA_FULL: NucleotideMatrix = WeightMatrix::new_custom(&IUPAC_DNA_MAP, NUC_4_4);

/// [`EDNA_FULL`] for RNA, reporting [`Alphabet::Rna`] so that consensus
/// symbols use `U`.
///
/// [`Alphabet::Rna`]: crate::data::alphabet::Alphabet::Rna
pub static EDNA_FULL_RNA: NucleotideMatrix = WeightMatrix::new_custom(&IUPAC_RNA_MAP, NUC_4_4);

/// Looks up one of the bundled nucleotide matrices by name, ignoring case and
/// punctuation. `"EDNAFULL"`, `"NUC.4.4"`, and `"ambiguous dna"` resolve to
/// [`EDNA_FULL`]; `"ambiguous rna"` resolves to [`EDNA_FULL_RNA`].
#[must_use]
pub fn nt_mat_from_name(name: &str) -> Option<&'static NucleotideMatrix> {
    match super::normalize_name(name).as_str() {
        "EDNAFULL" | "NUC44" | "AMBIGUOUSDNA" => Some(&EDNA_FULL),
        "EDNAFULLRNA" | "AMBIGUOUSRNA" => Some(&EDNA_FULL_RNA),
        _ => None,
    }
}
