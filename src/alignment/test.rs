use super::*;
use crate::{
    composition::SimpleConsensusResolver,
    data::{
        alphabet::Alphabet,
        matrices::{BLOSUM_62, DiagonalMatrix, EDNA_FULL, PAM_250, WeightMatrix},
    },
};

const MATRIX: DiagonalMatrix = DiagonalMatrix::new(2, -2);

#[test]
fn identical_sequences() {
    let alignment = SmithWaterman::new().align_simple(b"AAAA", b"AAAA", &MATRIX, -1).unwrap();

    assert_eq!(alignment.pairs.len(), 1);
    let pair = alignment.best().unwrap();
    assert_eq!(pair.score, 8);
    assert_eq!(pair.first, b"AAAA");
    assert_eq!(pair.second, b"AAAA");
    assert_eq!(pair.consensus, b"AAAA");
    assert_eq!(pair.insertions(), [0, 0]);
    assert_eq!((pair.stats.identical, pair.stats.similar), (4, 4));
    assert_eq!(alignment.algorithm, "Smith-Waterman");
    assert!(alignment.score_table.is_none());
}

#[test]
fn single_mismatch_is_empty() {
    let alignment = SmithWaterman::new().align_simple(b"A", b"C", &MATRIX, -1).unwrap();

    assert_eq!(alignment.pairs.len(), 1);
    let pair = alignment.best().unwrap();
    assert!(pair.is_empty());
    assert!(pair.consensus.is_empty());
    assert_eq!(pair.score, 0);
    assert_eq!((pair.ref_range.clone(), pair.query_range.clone()), (0..0, 0..0));
    assert_eq!((pair.first_offset, pair.second_offset), (0, 0));
}

#[test]
fn pam_local_alignment() {
    let alignment = SmithWaterman::new().align(b"ATTGAC", b"ACCTTGACT", &PAM_250, -8, -2).unwrap();
    let pair = alignment.best().unwrap();

    assert_eq!(pair.score, 25);
    assert_eq!(pair.first, b"TTGAC");
    assert_eq!(pair.second, b"TTGAC");
    assert_eq!(pair.insertions(), [0, 0]);
    assert_eq!((pair.first_offset, pair.second_offset), (2, 0));
    assert_eq!(pair.ref_range, 1..6);
    assert_eq!(pair.query_range, 3..8);
    assert_eq!(
        score_aligned_pair(&pair.first, &pair.second, &PAM_250, GapModel::affine(-8, -2)),
        Ok(pair.score)
    );
}

#[test]
fn every_tied_cell_is_reported() {
    let alignment = SmithWaterman::new().align_simple(b"CATCAT", b"CAT", &MATRIX, -3).unwrap();

    assert_eq!(alignment.pairs.len(), 2);
    assert_eq!(alignment.pairs[0].ref_range, 0..3);
    assert_eq!(alignment.pairs[1].ref_range, 3..6);
    assert_eq!(alignment.pairs[1].second_offset, 3);
    assert!(alignment.iter().all(|pair| pair.score == 6 && pair.first == b"CAT"));
}

#[test]
fn global_affine_gap_run() {
    let alignment = NeedlemanWunsch::new()
        .align(b"ACGTTTTTACGT", b"ACGTACGT", &MATRIX, -4, -1)
        .unwrap();
    let pair = alignment.best().unwrap();

    assert_eq!(alignment.pairs.len(), 1);
    assert_eq!(pair.score, 9);
    assert_eq!(pair.first, b"ACGTTTTTACGT");
    assert_eq!(pair.second, b"ACG----TACGT");
    assert_eq!(pair.consensus, b"ACGTTTTTACGT");
    assert_eq!(pair.insertions(), [4, 0]);
    assert_eq!((pair.ref_range.clone(), pair.query_range.clone()), (0..12, 0..8));
}

#[test]
fn global_linear_gap_run() {
    let alignment = NeedlemanWunsch::new()
        .align_simple(b"ACGTTTTTACGT", b"ACGTACGT", &MATRIX, -4)
        .unwrap();
    let pair = alignment.best().unwrap();

    assert_eq!(pair.score, 0);
    assert_eq!(pair.second, b"ACG----TACGT");
    assert_eq!(alignment.gaps, GapModel::linear(-4));
}

#[test]
fn global_leading_gap() {
    let alignment = NeedlemanWunsch::new().align(b"ACGT", b"AGT", &MATRIX, -3, -1).unwrap();
    let pair = alignment.best().unwrap();

    assert_eq!(pair.score, 3);
    assert_eq!(pair.first, b"ACGT");
    assert_eq!(pair.second, b"A-GT");
    assert_eq!(alignment.algorithm, "Needleman-Wunsch");
}

#[test]
fn tied_gap_extends_instead_of_reopening() {
    // CATATGTG over CACA-GTG scores the same
    let alignment = SmithWaterman::new().align(b"ACATATGTG", b"CACAGTG", &MATRIX, -3, -1).unwrap();
    let pair = alignment.best().unwrap();

    assert_eq!(alignment.pairs.len(), 1);
    assert_eq!(pair.score, 7);
    assert_eq!(pair.first, b"ACATATGTG");
    assert_eq!(pair.second, b"ACA---GTG");
    assert_eq!(pair.insertions(), [3, 0]);
    assert_eq!((pair.ref_range.clone(), pair.query_range.clone()), (0..9, 1..7));
    assert_eq!(
        score_aligned_pair(&pair.first, &pair.second, &MATRIX, GapModel::affine(-3, -1)),
        Ok(7)
    );
}

#[test]
fn overlap_suffix_prefix() {
    let alignment = PairwiseOverlap::new()
        .align(b"TTTTACGT", b"ACGTCCCC", &MATRIX, -4, -1)
        .unwrap();
    let pair = alignment.best().unwrap();

    assert_eq!(pair.score, 8);
    assert_eq!(pair.first, b"ACGT");
    assert_eq!(pair.ref_range, 4..8);
    assert_eq!(pair.query_range, 0..4);
    assert_eq!((pair.first_offset, pair.second_offset), (0, 4));

    let linear = PairwiseOverlap::new().align_simple(b"GGAC", b"ACTT", &MATRIX, -4).unwrap();
    assert_eq!(linear.best().map(|pair| pair.score), Some(4));
    assert_eq!(linear.pairs.len(), 1);
}

#[test]
fn local_ignores_leading_and_trailing_residues() {
    let alignment = SmithWaterman::new()
        .align_simple(b"GGATTACAGG", b"ATTACA", &MATRIX, -1)
        .unwrap();
    let pair = alignment.best().unwrap();

    assert_eq!(pair.score, 12);
    assert_eq!(pair.start_offsets(), [2, 0]);
    assert_eq!(pair.end_offsets(), Some([7, 5]));
    assert_eq!((pair.first_offset, pair.second_offset), (0, 2));
}

#[test]
fn input_errors() {
    let aligner = SmithWaterman::new();

    assert_eq!(
        aligner.align(b"", b"ACGT", &MATRIX, -1, -1),
        Err(AlignmentError::InvalidInput("reference"))
    );
    // Empty inputs are detected before the gap model
    assert_eq!(
        aligner.align(b"ACGT", b"", &MATRIX, 5, 5),
        Err(AlignmentError::InvalidInput("query"))
    );
    assert_eq!(
        aligner.align(b"AC#T", b"AC1T", &MATRIX, -1, -1),
        Err(AlignmentError::AlphabetMismatch {
            sequence: "reference",
            position: 2,
            symbol:   b'#',
        })
    );
    assert_eq!(
        aligner.align(b"ACGT", b"AC1T", &MATRIX, -1, -1),
        Err(AlignmentError::AlphabetMismatch {
            sequence: "query",
            position: 2,
            symbol:   b'1',
        })
    );
    assert_eq!(
        aligner.align(b"ACGT", b"ACGT", &MATRIX, -1, -4),
        Err(AlignmentError::InvalidGapModel { open: -1, extend: -4 })
    );
    assert_eq!(
        aligner.align_simple(b"ACGT", b"ACGT", &MATRIX, 0),
        Err(AlignmentError::InvalidGapModel { open: 0, extend: 0 })
    );

    let dna = WeightMatrix::new_dna_matrix(2, -3, None);
    assert!(matches!(
        aligner.align(b"ACGU", b"ACGR", &dna, -5, -1),
        Err(AlignmentError::AlphabetMismatch { position: 3, .. })
    ));

    // Gapped rows are not residues
    assert_eq!(
        aligner.align(b"AC-T", b"ACGT", &MATRIX, -1, -1),
        Err(AlignmentError::AlphabetMismatch {
            sequence: "reference",
            position: 2,
            symbol:   b'-',
        })
    );
}

#[test]
fn error_messages() {
    let err = AlignmentError::SequenceTooLarge {
        rows:      11,
        cols:      11,
        max_bytes: 200,
    };
    assert!(err.to_string().contains("seed-and-extend"));
    assert_eq!(format!("{err:?}"), err.to_string());
    assert_eq!(
        AlignmentError::InvalidInput("query").to_string(),
        "The query sequence must not be empty!"
    );
}

#[test]
fn table_budget() {
    let reference = b"ACGTACGTAC";
    let query = b"ACGTTCGTAC";

    // 121 cells: 121 bytes of traceback, 968 of gap lengths, 484 of scores
    let aligner = SmithWaterman::new().with_score_table(true).with_max_table_bytes(200);
    assert_eq!(
        aligner.align(reference, query, &MATRIX, -5, -1),
        Err(AlignmentError::SequenceTooLarge {
            rows:      11,
            cols:      11,
            max_bytes: 200,
        })
    );

    let linear = aligner.align_simple(reference, query, &MATRIX, -5).unwrap();
    assert!(linear.score_table.is_none());
    assert_eq!(linear.score(), 16);

    let aligner = aligner.with_max_table_bytes(1089);
    let affine = aligner.align(reference, query, &MATRIX, -5, -1).unwrap();
    assert!(affine.score_table.is_none());
    assert_eq!(affine.score(), 16);

    let aligner = aligner.with_max_table_bytes(1573);
    let affine = aligner.align(reference, query, &MATRIX, -5, -1).unwrap();
    assert!(affine.score_table.is_some());
}

#[cfg(target_pointer_width = "64")]
#[test]
fn dimensions_beyond_gap_length_width() {
    let aligner = SmithWaterman::new();
    let too_wide = u32::MAX as usize + 1;

    for gaps in [GapModel::affine(-3, -1), GapModel::linear(-2)] {
        assert_eq!(
            aligner.check_table_budget(2, too_wide, gaps),
            Err(AlignmentError::SequenceTooLarge {
                rows:      2,
                cols:      too_wide,
                max_bytes: isize::MAX as usize,
            })
        );
        assert!(aligner.check_table_budget(too_wide, 2, gaps).is_err());
    }
    assert_eq!(aligner.check_table_budget(2, u32::MAX as usize, GapModel::affine(-3, -1)), Ok(false));
}

#[test]
fn custom_resolver() {
    let aligner = SmithWaterman::new().with_consensus_resolver(|column: &[u8]| column[1].to_ascii_lowercase());
    let alignment = aligner.align_simple(b"ACGT", b"ACGT", &MATRIX, -1).unwrap();
    assert_eq!(alignment.best().unwrap().consensus, b"acgt");

    let protein = SimpleConsensusResolver::new(Alphabet::Protein);
    let aligner = SmithWaterman::new().with_consensus_resolver(protein);
    let alignment = aligner.align(b"KDWK", b"KNWK", &PAM_250, -8, -2).unwrap();
    let pair = alignment.best().unwrap();
    assert_eq!(pair.consensus, b"KBWK");
    assert_eq!((pair.stats.identical, pair.stats.similar), (3, 4));
}

#[test]
fn consensus_follows_the_matrix_alphabet() {
    let aligner = SmithWaterman::new();
    let protein = aligner.align(b"MEEKLQ", b"MEEKLQ", &BLOSUM_62, -11, -1).unwrap();
    assert_eq!(protein.best().unwrap().consensus, b"MEEKLQ");

    let ambiguous = aligner.align(b"KDWK", b"KNWK", &PAM_250, -8, -2).unwrap();
    assert_eq!(ambiguous.best().unwrap().consensus, b"KBWK");

    let tagged = MATRIX.with_alphabet(Alphabet::Protein);
    let alignment = aligner.align_simple(b"MEEKLQ", b"MEEKLQ", &tagged, -2).unwrap();
    assert_eq!(alignment.best().unwrap().consensus, b"MEEKLQ");

    // Without a tag the residues are read as nucleotides
    let untagged = aligner.align_simple(b"MEEKLQ", b"MEEKLQ", &MATRIX, -2).unwrap();
    assert_eq!(untagged.best().unwrap().consensus, b"MNNKNN");

    let nucleotides = aligner.align(b"ACGRT", b"ACGAT", &EDNA_FULL, -10, -1).unwrap();
    let pair = nucleotides.best().unwrap();
    assert_eq!(pair.score, 21);
    assert_eq!(pair.consensus, b"ACGRT");
    assert_eq!((pair.stats.identical, pair.stats.similar), (4, 5));
}

#[test]
fn repeated_calls_are_identical() {
    let aligner = SmithWaterman::new();
    let first = aligner.align(b"GATTACAGATTACA", b"GATCACAGTTA", &MATRIX, -3, -1).unwrap();
    let second = aligner.align(b"GATTACAGATTACA", b"GATCACAGTTA", &MATRIX, -3, -1).unwrap();
    assert_eq!(first, second);
}

#[test]
fn aligner_names() {
    assert_eq!(SmithWaterman::new().name(), "Smith-Waterman");
    assert_eq!(NeedlemanWunsch::new().name(), "Needleman-Wunsch");
    assert_eq!(PairwiseOverlap::default().name(), "Pairwise Overlap");
    assert_eq!(PairwiseOverlap::default().description(), "Pairwise overlap alignment");
}

#[cfg(feature = "parallel")]
#[test]
fn batch_matches_sequential() {
    let pairs: [(&[u8], &[u8]); 3] = [(b"GGATTACAGG", b"ATTACA"), (b"A", b"C"), (b"ACGT", b"")];
    let aligner = SmithWaterman::new();
    let batch = aligner.align_batch(&pairs, &MATRIX, GapModel::affine(-3, -1));

    assert_eq!(batch.len(), 3);
    for ((reference, query), result) in pairs.iter().zip(&batch) {
        assert_eq!(result, &aligner.align(reference, query, &MATRIX, -3, -1));
    }
    assert_eq!(batch[2], Err(AlignmentError::InvalidInput("query")));
}
