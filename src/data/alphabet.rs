//! Alphabets with IUPAC ambiguity codes.
//!
//! An [`Alphabet`] knows how to expand an ambiguity code into the basic
//! residues it stands for, and how to collapse a set of basic residues back
//! into the most specific code. Nucleotide sets are handled as 4-bit masks
//! (`A=1`, `C=2`, `G=4`, `T/U=8`), so the mask doubles as an index into the
//! code tables.

/// The default gap symbol.
pub const GAP: u8 = b'-';

/// IUPAC nucleotide codes indexed by their 4-bit mask.
const DNA_CODES: [u8; 16] = *b"-ACMGRSVTWYHKDBN";
const RNA_CODES: [u8; 16] = *b"-ACMGRSVUWYHKDBN";

/// Basic nucleotides indexed by the 4-bit mask of an ambiguity code.
#[rustfmt::skip]
const DNA_EXPANSIONS: [&[u8]; 16] = [
    b"", b"A", b"C", b"AC", b"G", b"AG", b"CG", b"ACG",
    b"T", b"AT", b"CT", b"ACT", b"GT", b"AGT", b"CGT", b"ACGT",
];
#[rustfmt::skip]
const RNA_EXPANSIONS: [&[u8]; 16] = [
    b"", b"A", b"C", b"AC", b"G", b"AG", b"CG", b"ACG",
    b"U", b"AU", b"CU", b"ACU", b"GU", b"AGU", b"CGU", b"ACGU",
];

/// The twenty standard amino acids.
const AMINO_ACIDS: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";

/// The residue alphabet of a sequence.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Alphabet {
    #[default]
    Dna,
    Rna,
    Protein,
}

/// The 4-bit mask of a nucleotide or nucleotide ambiguity code. `T` and `U`
/// share a bit.
#[must_use]
pub const fn nucleotide_mask(symbol: u8) -> Option<u8> {
    let mask = match symbol.to_ascii_uppercase() {
        b'A' => 0b0001,
        b'C' => 0b0010,
        b'M' => 0b0011,
        b'G' => 0b0100,
        b'R' => 0b0101,
        b'S' => 0b0110,
        b'V' => 0b0111,
        b'T' | b'U' => 0b1000,
        b'W' => 0b1001,
        b'Y' => 0b1010,
        b'H' => 0b1011,
        b'K' => 0b1100,
        b'D' => 0b1101,
        b'B' => 0b1110,
        b'N' => 0b1111,
        _ => return None,
    };
    Some(mask)
}

impl Alphabet {
    /// Whether `symbol` is a gap. Both `-` and `.` are accepted.
    #[inline]
    #[must_use]
    pub const fn is_gap(symbol: u8) -> bool {
        matches!(symbol, b'-' | b'.')
    }

    /// The fully ambiguous symbol of the alphabet.
    #[inline]
    #[must_use]
    pub const fn catch_all(self) -> u8 {
        match self {
            Alphabet::Dna | Alphabet::Rna => b'N',
            Alphabet::Protein => b'X',
        }
    }

    /// The basic residues that `symbol` stands for, in uppercase. Symbols
    /// outside of the alphabet are treated as the catch-all.
    #[must_use]
    pub fn basic_symbols(self, symbol: u8) -> &'static [u8] {
        match self {
            Alphabet::Dna => DNA_EXPANSIONS[nucleotide_mask(symbol).unwrap_or(0b1111) as usize],
            Alphabet::Rna => RNA_EXPANSIONS[nucleotide_mask(symbol).unwrap_or(0b1111) as usize],
            Alphabet::Protein => match symbol.to_ascii_uppercase() {
                b'B' => b"DN",
                b'Z' => b"EQ",
                b'J' => b"IL",
                b'*' => b"*",
                upper => match AMINO_ACIDS.iter().position(|&aa| aa == upper) {
                    Some(i) => &AMINO_ACIDS[i..=i],
                    None => AMINO_ACIDS,
                },
            },
        }
    }

    /// The most specific symbol representing every residue in `basic`. An
    /// empty set yields the catch-all.
    #[must_use]
    pub fn consensus_symbol(self, basic: &[u8]) -> u8 {
        match self {
            Alphabet::Dna | Alphabet::Rna => {
                let mask = basic
                    .iter()
                    .fold(0, |mask, &symbol| mask | nucleotide_mask(symbol).unwrap_or(0b1111));
                if mask == 0 {
                    return self.catch_all();
                }
                let codes = if self == Alphabet::Dna { &DNA_CODES } else { &RNA_CODES };
                codes[mask as usize]
            }
            Alphabet::Protein => {
                let within = |set: &[u8]| basic.iter().all(|s| set.contains(&s.to_ascii_uppercase()));
                match basic {
                    [] => b'X',
                    [single] => single.to_ascii_uppercase(),
                    _ if within(b"DN") => b'B',
                    _ if within(b"EQ") => b'Z',
                    _ if within(b"IL") => b'J',
                    _ => b'X',
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn nucleotide_round_trip() {
        for code in DNA_CODES.iter().skip(1).copied() {
            let basic = Alphabet::Dna.basic_symbols(code);
            assert_eq!(Alphabet::Dna.consensus_symbol(basic), code);
        }
        assert_eq!(Alphabet::Rna.basic_symbols(b'y'), b"CU");
        assert_eq!(Alphabet::Rna.consensus_symbol(b"AU"), b'W');
        assert_eq!(Alphabet::Dna.consensus_symbol(b"AU"), b'W');
    }

    #[test]
    fn unknown_is_catch_all() {
        assert_eq!(Alphabet::Dna.basic_symbols(b'?'), b"ACGT");
        assert_eq!(Alphabet::Protein.basic_symbols(b'O'), AMINO_ACIDS);
        assert_eq!(Alphabet::Dna.consensus_symbol(b""), b'N');
    }

    #[test]
    fn protein_codes() {
        assert_eq!(Alphabet::Protein.basic_symbols(b'b'), b"DN");
        assert_eq!(Alphabet::Protein.basic_symbols(b'w'), b"W");
        assert_eq!(Alphabet::Protein.consensus_symbol(b"ND"), b'B');
        assert_eq!(Alphabet::Protein.consensus_symbol(b"QE"), b'Z');
        assert_eq!(Alphabet::Protein.consensus_symbol(b"LI"), b'J');
        assert_eq!(Alphabet::Protein.consensus_symbol(b"LK"), b'X');
        assert_eq!(Alphabet::Protein.consensus_symbol(b"k"), b'K');
    }

    #[test]
    fn gaps() {
        assert!(Alphabet::is_gap(GAP));
        assert!(Alphabet::is_gap(b'.'));
        assert!(!Alphabet::is_gap(b'N'));
    }
}
