use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use janggi::game_state::game_config::GameConfig;
use janggi::game_state::janggi_game::JanggiGame;
use janggi::game_state::janggi_rules::STARTING_LAYOUT;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    layout: &'static str,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "opening",
        layout: STARTING_LAYOUT,
    },
    BenchCase {
        name: "open_middlegame",
        layout: "r2a1aeh1/4k4/1c2e2c1/p3p1p1p/2p6/6P2/P1P1P3P/1C2H2C1/4K4/R1EA1AEHR",
    },
    BenchCase {
        name: "palace_fight",
        layout: "3ak4/4a4/9/9/9/4R4/9/9/4C4/3K5",
    },
];

const PLAYOUT_PLIES: usize = 60;

fn random_playout(seed: u64) -> usize {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = JanggiGame::new();

    for _ in 0..PLAYOUT_PLIES {
        let moves = game.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.random_range(0..moves.len())];
        if game.try_move(mv).is_err() || game.game_state().is_over() {
            break;
        }
    }

    game.history().len()
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.sample_size(30);

    for case in CASES {
        let game = JanggiGame::from_layout(case.layout, GameConfig::default())
            .expect("benchmark layout should parse");

        // Correctness guard before benchmarking.
        assert!(
            !game.legal_moves().is_empty(),
            "no legal moves in {}",
            case.name
        );

        group.bench_with_input(BenchmarkId::from_parameter(case.name), &game, |b, game| {
            b.iter(|| black_box(game.legal_moves().len()));
        });
    }

    group.finish();
}

fn bench_playouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_playout");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for seed in [7u64, 42] {
        group.bench_with_input(BenchmarkId::from_parameter(seed), &seed, |b, seed| {
            b.iter(|| black_box(random_playout(black_box(*seed))));
        });
    }

    group.finish();
}

criterion_group!(move_generation_benches, bench_legal_moves, bench_playouts);
criterion_main!(move_generation_benches);
