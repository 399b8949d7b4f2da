/// Generates a random sequence of `length` residues drawn uniformly from
/// `alpha`, using the [xoshiro256++] generator seeded with `seed`. The same
/// seed always produces the same sequence, which keeps tests and benchmarks
/// reproducible.
///
/// ## Panics
///
/// Panics if `alpha` is empty and `length` is not zero.
///
/// ## Example
///
/// ```
/// # use tandem::generate::rand_sequence;
/// let sequence = rand_sequence(b"ACGT", 50, 7);
/// assert_eq!(sequence.len(), 50);
/// assert_eq!(sequence, rand_sequence(b"ACGT", 50, 7));
/// ```
///
/// [xoshiro256++]: https://prng.di.unimi.it/
#[must_use]
pub fn rand_sequence(alpha: &[u8], length: usize, seed: u64) -> Vec<u8> {
    use rand_xoshiro::{
        Xoshiro256PlusPlus,
        rand_core::{RngCore, SeedableRng},
    };

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    (1..=length).map(|_| alpha[rng.next_u32() as usize % alpha.len()]).collect()
}

/// Generates a random pair of related sequences for exercising aligners. The
/// query is a copy of a random reference of `length` residues in which each
/// residue is substituted with probability `substitution_rate`, and a short
/// insertion or deletion is introduced with probability `indel_rate`.
///
/// ## Panics
///
/// Panics if `alpha` is empty and `length` is not zero.
#[must_use]
pub fn rand_related_pair(
    alpha: &[u8], length: usize, substitution_rate: f64, indel_rate: f64, seed: u64,
) -> (Vec<u8>, Vec<u8>) {
    use rand_xoshiro::{
        Xoshiro256PlusPlus,
        rand_core::{RngCore, SeedableRng},
    };

    let reference = rand_sequence(alpha, length, seed);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed.wrapping_add(1));

    #[allow(clippy::cast_precision_loss)]
    let mut chance = move || (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64;

    let mut query = Vec::with_capacity(length + length / 8);
    let mut residues = reference.iter().copied();
    while let Some(residue) = residues.next() {
        if chance() < indel_rate {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let run = 1 + (chance() * 3.0) as usize;
            if chance() < 0.5 {
                // Drops this residue and the next `run - 1`
                residues.by_ref().take(run - 1).for_each(drop);
                continue;
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            query.extend((0..run).map(|_| alpha[(chance() * alpha.len() as f64) as usize % alpha.len()]));
        }

        if chance() < substitution_rate {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            query.push(alpha[(chance() * alpha.len() as f64) as usize % alpha.len()]);
        } else {
            query.push(residue);
        }
    }

    (reference, query)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rand_test() {
        const LEN: usize = 10_000;

        let random_sequence = rand_sequence(b"ATGC", LEN, 42);
        assert_eq!(LEN, random_sequence.len());

        let (a, c, g, t) = random_sequence.iter().fold((0, 0, 0, 0), |(a, c, g, t), &b| match b {
            b'A' => (a + 1, c, g, t),
            b'C' => (a, c + 1, g, t),
            b'G' => (a, c, g + 1, t),
            b'T' => (a, c, g, t + 1),
            _ => (a, c, g, t),
        });

        assert!(a > 0);
        assert!(c > 0);
        assert!(g > 0);
        assert!(t > 0);
    }

    #[test]
    fn related_pairs() {
        let (reference, query) = rand_related_pair(b"ACGT", 200, 0.0, 0.0, 3);
        assert_eq!(reference, query);

        let (reference, query) = rand_related_pair(b"ACGT", 200, 0.1, 0.05, 3);
        assert_eq!(reference.len(), 200);
        assert!(!query.is_empty());
        assert!(query.iter().all(|residue| b"ACGT".contains(residue)));
        assert_eq!((reference.clone(), query.clone()), rand_related_pair(b"ACGT", 200, 0.1, 0.05, 3));
    }
}
