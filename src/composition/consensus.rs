use crate::data::alphabet::{Alphabet, GAP};

/// Resolves the residues of one alignment column into a single consensus
/// symbol.
///
/// The aligner passes the alphabet of the sequences being aligned, as
/// reported by [`SimilarityMatrix::alphabet`], on every call. Implementations
/// must be deterministic: the same column and alphabet always yield the same
/// symbol. Gaps are passed through as part of the column.
///
/// Closures taking only the column are resolvers that ignore the alphabet.
///
/// [`SimilarityMatrix::alphabet`]: crate::data::matrices::SimilarityMatrix::alphabet
pub trait ConsensusResolver {
    /// The consensus of one column.
    fn consensus(&self, symbols: &[u8], alphabet: Alphabet) -> u8;
}

impl<F> ConsensusResolver for F
where
    F: Fn(&[u8]) -> u8,
{
    #[inline]
    fn consensus(&self, symbols: &[u8], _alphabet: Alphabet) -> u8 {
        self(symbols)
    }
}

/// Consensus by frequency fraction.
///
/// Gaps are ignored. Every other residue adds a weight of one, spread evenly
/// across its basic residues when it is an ambiguity code. The residues whose
/// share of the non-gap count is strictly greater than `threshold` (a
/// percentage) are kept; if none are, every observed residue is kept. The kept
/// set is then collapsed with [`Alphabet::consensus_symbol`]. A column of only
/// gaps yields [`GAP`].
///
/// The default resolver uses the alphabet passed with each column. One built
/// with [`new`](Self::new) always uses its own.
///
/// ## Example
///
/// ```
/// # use tandem::{composition::{ConsensusResolver, SimpleConsensusResolver}, data::alphabet::Alphabet};
/// let resolver = SimpleConsensusResolver::default();
/// assert_eq!(resolver.consensus(b"AA", Alphabet::Dna), b'A');
/// assert_eq!(resolver.consensus(b"AG", Alphabet::Dna), b'R');
/// assert_eq!(resolver.consensus(b"A-", Alphabet::Dna), b'A');
/// assert_eq!(resolver.consensus(b"--", Alphabet::Dna), b'-');
/// assert_eq!(resolver.consensus(b"DN", Alphabet::Protein), b'B');
///
/// let dna = SimpleConsensusResolver::new(Alphabet::Dna);
/// assert_eq!(dna.consensus(b"DN", Alphabet::Protein), b'N');
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimpleConsensusResolver {
    alphabet:  Option<Alphabet>,
    threshold: f64,
}

impl SimpleConsensusResolver {
    pub const DEFAULT_THRESHOLD: f64 = 99.0;

    /// A resolver which always uses `alphabet`, whatever the sequences being
    /// aligned.
    #[inline]
    #[must_use]
    pub const fn new(alphabet: Alphabet) -> Self {
        SimpleConsensusResolver {
            alphabet:  Some(alphabet),
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }

    /// Sets the percentage a residue's share must exceed to be the only
    /// residue considered. The value is clamped to `0.0..=100.0`.
    #[inline]
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 100.0);
        self
    }

    /// The fixed alphabet, or `None` when the alphabet of each call is used.
    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> Option<Alphabet> {
        self.alphabet
    }

    #[inline]
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for SimpleConsensusResolver {
    #[inline]
    fn default() -> Self {
        SimpleConsensusResolver {
            alphabet:  None,
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }
}

impl ConsensusResolver for SimpleConsensusResolver {
    fn consensus(&self, symbols: &[u8], alphabet: Alphabet) -> u8 {
        let alphabet = self.alphabet.unwrap_or(alphabet);
        let mut frequency = [0.0f64; 256];
        // First-seen order keeps the kept set deterministic
        let mut seen = Vec::new();
        let mut count = 0usize;

        for &symbol in symbols {
            if Alphabet::is_gap(symbol) {
                continue;
            }
            count += 1;

            let basic = alphabet.basic_symbols(symbol);
            #[allow(clippy::cast_precision_loss)]
            let weight = 1.0 / basic.len() as f64;
            for &b in basic {
                if frequency[b as usize] == 0.0 {
                    seen.push(b);
                }
                frequency[b as usize] += weight;
            }
        }

        if count == 0 {
            return GAP;
        }

        #[allow(clippy::cast_precision_loss)]
        let count = count as f64;
        let above: Vec<u8> = seen
            .iter()
            .copied()
            .filter(|&b| frequency[b as usize] * 100.0 / count > self.threshold)
            .collect();

        if above.is_empty() {
            alphabet.consensus_symbol(&seen)
        } else {
            alphabet.consensus_symbol(&above)
        }
    }
}
