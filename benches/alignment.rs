use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tandem::{
    alignment::{NeedlemanWunsch, SmithWaterman},
    data::matrices::{BLOSUM_62, DiagonalMatrix},
    generate::{rand_related_pair, rand_sequence},
};

const DNA: DiagonalMatrix = DiagonalMatrix::new(2, -3);

fn gap_models(c: &mut Criterion) {
    let mut group = c.benchmark_group("smith_waterman");
    for length in [150, 500, 1500] {
        let (reference, query) = rand_related_pair(b"ACGT", length, 0.1, 0.02, 42);
        let aligner = SmithWaterman::new();

        group.bench_with_input(BenchmarkId::new("linear", length), &(&reference, &query), |b, (r, q)| {
            b.iter(|| aligner.align_simple(black_box(r), black_box(q), &DNA, -5));
        });
        group.bench_with_input(BenchmarkId::new("affine", length), &(&reference, &query), |b, (r, q)| {
            b.iter(|| aligner.align(black_box(r), black_box(q), &DNA, -5, -1));
        });
    }
    group.finish();
}

fn protein(c: &mut Criterion) {
    const AMINO_ACIDS: &[u8] = b"ARNDCQEGHILKMFPSTWYV";
    let reference = rand_sequence(AMINO_ACIDS, 400, 7);
    let query = rand_sequence(AMINO_ACIDS, 300, 8);

    c.bench_function("needleman_wunsch/blosum62", |b| {
        let aligner = NeedlemanWunsch::new();
        b.iter(|| aligner.align(black_box(&reference), black_box(&query), &BLOSUM_62, -11, -1));
    });
    c.bench_function("smith_waterman/blosum62_score_table", |b| {
        let aligner = SmithWaterman::new().with_score_table(true);
        b.iter(|| aligner.align(black_box(&reference), black_box(&query), &BLOSUM_62, -11, -1));
    });
}

criterion_group!(benches, gap_models, protein);
criterion_main!(benches);
