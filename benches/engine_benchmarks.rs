//! Benchmarks for move validation and check detection.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use star_chess::board::{Board, Color, Coord, PieceType};

const STANDARD: &str = include_str!("../tests/data/standard.json");

fn standard() -> Board {
    Board::try_from_json(STANDARD).expect("standard fixture")
}

fn bench_can_move_to(c: &mut Criterion) {
    let mut group = c.benchmark_group("can_move_to");
    let board = standard();

    for (name, from) in [
        ("wamazon", Coord(0, 5)),
        ("grasshopper", Coord(1, 1)),
        ("camel", Coord(0, 1)),
        ("sergeant", Coord(2, 4)),
    ] {
        let piece = board.piece_at(from).expect("piece on square");
        group.bench_with_input(BenchmarkId::new("all_squares", name), &piece, |b, piece| {
            b.iter(|| {
                let mut n = 0;
                for row in 0..board.rows() {
                    for col in 0..board.cols() {
                        if piece.can_move_to(&board, black_box(Coord(row, col)), None).is_some() {
                            n += 1;
                        }
                    }
                }
                n
            })
        });
    }

    group.finish();
}

fn bench_exists_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("exists_check");
    let board = standard();

    group.bench_function("standard", |b| {
        b.iter(|| black_box(board.exists_check(Color::White)))
    });

    let mut open = Board::try_from_json(
        r#"{
            "size": {"w": 16, "h": 16},
            "white": {"king": "h1", "queen": ["d4"]},
            "black": {"king": "h16", "wamazon": ["a16", "p16"], "grasshopper": ["h8"]}
        }"#,
    )
    .expect("open board");
    group.bench_function("open_16x16", |b| {
        b.iter(|| black_box(open.exists_check(Color::White)))
    });

    let mv = open
        .can_move(Coord(3, 3), Coord(6, 6), None)
        .expect("queen diagonal");
    group.bench_function("after_move_16x16", |b| {
        b.iter(|| black_box(open.exists_check_after_move(Color::White, &mv)))
    });

    group.finish();
}

fn bench_spec_load(c: &mut Criterion) {
    c.bench_function("from_json/standard", |b| {
        b.iter(|| Board::try_from_json(black_box(STANDARD)))
    });
    c.bench_function("count/sergeants", |b| {
        let board = standard();
        b.iter(|| board.count(black_box(Color::Black), PieceType::Sergeant))
    });
}

criterion_group!(benches, bench_can_move_to, bench_exists_check, bench_spec_load);
criterion_main!(benches);
