use board::GameBoard;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode};
use evaluation::{EvaluationParameters, Evaluator};
use search::{SearchConfig, Searcher};

const DEPTH: u8 = 3;
const SAMPLE_SIZE: usize = 10;

/// Perft positions from https://github.com/AndyGrant/Ethereal/blob/master/src/perft/standard.epd
const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "rnbqkb1r/ppppp1pp/7n/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
];

fn bench_positions(c: &mut Criterion) {
    let params = EvaluationParameters::standard();
    let evaluator = Evaluator::new(&params);

    for threads in [1, num_cpus::get().max(2)] {
        let searcher = Searcher::new(SearchConfig::new(DEPTH, threads).unwrap()).unwrap();
        let mut group = c.benchmark_group(format!("search/depth_{}/threads_{}", DEPTH, threads));

        group.sample_size(SAMPLE_SIZE);
        group.sampling_mode(SamplingMode::Flat);

        for fen in POSITIONS {
            let board = GameBoard::from_fen(fen).unwrap();

            group.bench_with_input(BenchmarkId::from_parameter(fen), &board, |b, board| {
                b.iter(|| {
                    let mut board = board.clone();
                    black_box(searcher.best_move(&mut board, &evaluator, DEPTH))
                })
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_positions);
criterion_main!(benches);
