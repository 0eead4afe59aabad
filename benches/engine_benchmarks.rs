//! Benchmarks for move generation, perft, evaluation, and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use crab_chess::board::evaluate;
use crab_chess::{perft, search, Board, SearchConfig, TranspositionTable};

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut startpos = Board::starting_position();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| perft::perft(&mut startpos, black_box(depth)))
        });
    }

    let mut kiwipete =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -").unwrap();
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| perft::perft(&mut kiwipete, black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let mut startpos = Board::starting_position();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    let mut middlegame =
        Board::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq -").unwrap();
    group.bench_function("middlegame", |b| b.iter(|| black_box(middlegame.legal_moves())));

    let mut kiwipete =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -").unwrap();
    group.bench_function("kiwipete", |b| b.iter(|| black_box(kiwipete.legal_moves())));

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for depth in [2, 3, 4] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut board = Board::starting_position();
                let mut tt = TranspositionTable::default();
                let config = SearchConfig { depth, book: None };
                search(&mut board, &mut tt, &config)
            })
        });
    }

    for depth in [2, 3] {
        group.bench_with_input(BenchmarkId::new("tactical", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut board =
                    Board::from_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq -")
                        .unwrap();
                let mut tt = TranspositionTable::default();
                let config = SearchConfig { depth, book: None };
                search(&mut board, &mut tt, &config)
            })
        });
    }

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let positions = [
        ("startpos", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -"),
        ("middlegame", "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq -"),
        ("endgame", "8/5k2/8/8/8/8/5K2/4R3 w - -"),
    ];

    for (name, fen) in positions {
        let board = Board::from_fen(fen).unwrap();
        group.bench_with_input(BenchmarkId::new("position", name), &board, |b, board| {
            b.iter(|| black_box(evaluate(board)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_search, bench_eval);
criterion_main!(benches);
