use crate::{
    alignment::{AlignedPair, AlignmentStats, Direction, GapModel, PairwiseAlignment, SmithWaterman, TracebackTable},
    data::matrices::DiagonalMatrix,
};

const MATRIX: DiagonalMatrix = DiagonalMatrix::new(2, -2);

fn example_pair() -> AlignedPair {
    AlignedPair {
        first:         b"AC-GT".to_vec(),
        second:        b"ACTGA".to_vec(),
        consensus:     b"ACTGW".to_vec(),
        score:         3,
        first_offset:  0,
        second_offset: 2,
        ref_range:     2..6,
        query_range:   0..5,
        stats:         AlignmentStats {
            reference_insertions: 0,
            query_insertions:     1,
            identical:            3,
            similar:              3,
        },
    }
}

#[test]
fn aligned_pair_accessors() {
    let pair = example_pair();
    assert_eq!(pair.len(), 5);
    assert!(!pair.is_empty());
    assert_eq!(pair.insertions(), [0, 1]);
    assert_eq!(pair.start_offsets(), [2, 0]);
    assert_eq!(pair.end_offsets(), Some([5, 4]));
    assert_eq!(pair.to_string(), "AC-GT\nACTGA\nACTGW\nScore: 3");

    let empty = AlignedPair::default();
    assert!(empty.is_empty());
    assert_eq!(empty.end_offsets(), None);
}

#[test]
fn pairwise_alignment_iteration() {
    let alignment = PairwiseAlignment {
        algorithm:   "Smith-Waterman",
        gaps:        GapModel::default(),
        pairs:       vec![example_pair(), AlignedPair::default()],
        score_table: None,
    };

    assert_eq!(alignment.score(), 3);
    assert_eq!(alignment.best(), Some(&example_pair()));
    assert_eq!(alignment.iter().count(), 2);
    assert_eq!((&alignment).into_iter().map(|pair| pair.len()).sum::<usize>(), 5);
    assert_eq!(alignment.into_iter().last(), Some(AlignedPair::default()));
}

#[test]
fn traceback_table_layout() {
    let mut table = TracebackTable::new(2, 3);
    table.set(1, 2, Direction::Left);
    assert_eq!(table.rows(), 2);
    assert_eq!(table.cols(), 3);
    assert_eq!(table.get(1, 2), Direction::Left);
    assert_eq!(table.get(0, 2), Direction::Stop);
    assert_eq!(Direction::default().glyph(), '*');
}

#[test]
fn score_table_rendering() {
    let alignment = SmithWaterman::new()
        .with_score_table(true)
        .align_simple(b"AC", b"A", &MATRIX, -1)
        .unwrap();
    let table = alignment.score_table.unwrap();

    assert_eq!((table.rows(), table.cols()), (2, 3));
    assert_eq!(table.row(1), &[0, 2, 1]);
    assert_eq!(table.score(1, 1), 2);
    assert_eq!(table.direction(1, 2), Direction::Left);
    assert_eq!(
        table.to_string(),
        "        -    A    C\n   -   *0   *0   *0\n   A   *0   \\2   <1\n"
    );
}

#[test]
fn score_table_columns_stay_aligned() {
    let residues = b"A".repeat(60);
    let alignment = SmithWaterman::new()
        .with_score_table(true)
        .align_simple(&residues, &residues, &MATRIX, -1)
        .unwrap();
    let table = alignment.score_table.unwrap();
    assert_eq!(table.score(60, 60), 120);

    let rendered = table.to_string();
    assert!(rendered.lines().all(|line| line.len() == 4 + 5 * 61));
}
