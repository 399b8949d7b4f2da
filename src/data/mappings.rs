use crate::data::alphabet::Alphabet;
use std::ops::Index;

/// Represents a mapping between bytes and indices. For example, this could be a
/// map from DNA bases to matrix indices, such as [`DNA_PROFILE_MAP`].
///
/// Bytes outside of the keys map to the index of the catch-all key so that
/// lookups never fail, but [`contains`] only reports bytes that were
/// explicitly listed (or added as synonyms).
///
/// ## Type Parameters
/// * `KEYS` - The number of bytes being mapped (such as 5 for DNA including
///   *N*)
///
/// A map may also record the [`Alphabet`] its keys belong to, which matrices
/// built over it report to the aligners.
///
/// [`contains`]: ByteIndexMap::contains
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct ByteIndexMap<const KEYS: usize> {
    pub(crate) index_map: [u8; 256],
    pub(crate) known:     [bool; 256],
    pub(crate) byte_keys: [u8; KEYS],
    pub(crate) alphabet:  Option<Alphabet>,
}

/// Whether every element of `keys` is distinct.
const fn is_unique(keys: &[u8]) -> bool {
    let mut i = 0;
    while i < keys.len() {
        let mut j = i + 1;
        while j < keys.len() {
            if keys[i] == keys[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn position(keys: &[u8], key: u8) -> Option<usize> {
    let mut i = 0;
    while i < keys.len() {
        if keys[i] == key {
            return Some(i);
        }
        i += 1;
    }
    None
}

impl<const S: usize> ByteIndexMap<S> {
    /// Create a new [`ByteIndexMap`] struct to represent a mapping between
    /// bytes and indices. Any byte that is not specified in `byte_keys` is
    /// mapped to the same index as `catch_all`.
    ///
    /// ## Panics
    /// No duplicates can be present in `byte_keys`, and `catch_all` must be
    /// present in `byte_keys`.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn new(byte_keys: [u8; S], catch_all: u8) -> Self {
        assert!(is_unique(&byte_keys), "The byte_keys must be unique.");
        assert!(S <= u8::MAX as usize, "Too many byte_keys for a ByteIndexMap.");

        let Some(catch_all_index) = position(&byte_keys, catch_all) else {
            panic!("The catch_all must be present in the byte_keys.")
        };
        let mut out = ByteIndexMap {
            index_map: [catch_all_index as u8; 256],
            known: [false; 256],
            byte_keys,
            alphabet: None,
        };

        let mut i = 0;
        while i < S {
            // Truncation cannot occur since S fits in a u8
            out.set_byte(byte_keys[i], i as u8);
            i += 1;
        }
        out
    }

    /// Create a new [`ByteIndexMap`] where both `byte_keys` and `catch_all`
    /// ignore case. The stored keys are uppercase.
    ///
    /// ## Panics
    /// No duplicates can be present in `byte_keys` after uppercasing, and
    /// `catch_all` must be present in `byte_keys`.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn new_ignoring_case(mut byte_keys: [u8; S], catch_all: u8) -> Self {
        let mut i = 0;
        while i < S {
            byte_keys[i] = byte_keys[i].to_ascii_uppercase();
            i += 1;
        }
        assert!(is_unique(&byte_keys), "The byte_keys must be unique.");
        assert!(S <= u8::MAX as usize, "Too many byte_keys for a ByteIndexMap.");

        let Some(catch_all_index) = position(&byte_keys, catch_all.to_ascii_uppercase()) else {
            panic!("The catch_all must be present in the byte_keys.")
        };
        let mut out = ByteIndexMap {
            index_map: [catch_all_index as u8; 256],
            known: [false; 256],
            byte_keys,
            alphabet: None,
        };

        let mut i = 0;
        while i < S {
            out.set_byte_ignoring_case(byte_keys[i], i as u8);
            i += 1;
        }
        out
    }

    #[inline]
    const fn set_byte(&mut self, byte: u8, index: u8) {
        self.index_map[byte as usize] = index;
        self.known[byte as usize] = true;
    }

    #[inline]
    const fn set_byte_ignoring_case(&mut self, byte: u8, index: u8) {
        self.set_byte(byte.to_ascii_lowercase(), index);
        self.set_byte(byte.to_ascii_uppercase(), index);
    }

    /// Change the [`ByteIndexMap`] so that `new_key` maps to the same index as
    /// `previous_key`, ignoring case.
    #[inline]
    #[must_use]
    pub const fn add_synonym_ignoring_case(mut self, new_key: u8, previous_key: u8) -> Self {
        let index = self.index_map[previous_key as usize];
        self.set_byte_ignoring_case(new_key, index);
        self
    }

    /// Records the alphabet the keys belong to.
    #[inline]
    #[must_use]
    pub const fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = Some(alphabet);
        self
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> Option<Alphabet> {
        self.alphabet
    }

    /// Get the length of `byte_keys`.
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.byte_keys.len()
    }

    /// The keys of the map, in index order.
    #[inline]
    #[must_use]
    pub const fn byte_keys(&self) -> &[u8; S] {
        &self.byte_keys
    }

    /// Convert a byte `b` into an index.
    #[inline]
    #[must_use]
    pub const fn to_index(&self, b: u8) -> usize {
        self.index_map[b as usize] as usize
    }

    /// Whether `b` is one of the keys (or a synonym), rather than a byte that
    /// only resolves through the catch-all.
    #[inline]
    #[must_use]
    pub const fn contains(&self, b: u8) -> bool {
        self.known[b as usize]
    }
}

impl<const S: usize> Index<u8> for ByteIndexMap<S> {
    type Output = u8;

    #[inline]
    fn index(&self, index: u8) -> &u8 {
        &self.index_map[index as usize]
    }
}

/// Case-insensitive DNA mapping with `N` as the catch-all. `U` is a synonym
/// of `T`, so RNA can be scored with the same matrices.
pub const DNA_PROFILE_MAP: ByteIndexMap<5> = ByteIndexMap::new_ignoring_case(*b"ACGTN", b'N')
    .add_synonym_ignoring_case(b'U', b'T')
    .with_alphabet(Alphabet::Dna);

/// Case-insensitive mapping of every IUPAC nucleotide code, in the order of
/// NCBI's `NUC.4.4` matrix, with `N` as the catch-all. `U` is a synonym of `T`.
pub const IUPAC_DNA_MAP: ByteIndexMap<15> = ByteIndexMap::new_ignoring_case(*b"ATGCSWRYKMBVHDN", b'N')
    .add_synonym_ignoring_case(b'U', b'T')
    .with_alphabet(Alphabet::Dna);

/// [`IUPAC_DNA_MAP`] with `U` as the key and `T` as its synonym, so that
/// consensus symbols are spelled as RNA.
pub const IUPAC_RNA_MAP: ByteIndexMap<15> = ByteIndexMap::new_ignoring_case(*b"AUGCSWRYKMBVHDN", b'N')
    .add_synonym_ignoring_case(b'T', b'U')
    .with_alphabet(Alphabet::Rna);

/// Case-insensitive protein mapping in NCBI matrix order, with `X` as the
/// catch-all.
pub const AA_PROFILE_MAP: ByteIndexMap<24> =
    ByteIndexMap::new_ignoring_case(*b"ARNDCQEGHILKMFPSTWYVBZX*", b'X').with_alphabet(Alphabet::Protein);
