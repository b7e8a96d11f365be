use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use lucky_toss::TurnEngine;

/// Play one game to the end: keep sixes, re-roll twice, bank.
fn play_game(engine: &mut TurnEngine) -> u32 {
    let mut turns = 0;
    while !engine.state().is_over() {
        engine.throw_initial().unwrap();
        for i in 0..5 {
            if engine.state().human_dice()[i].value == 6 {
                engine.toggle_keep(i).unwrap();
            }
        }
        engine.re_roll().unwrap();
        engine.re_roll().unwrap();
        turns += 1;
    }
    turns
}

fn bench_full_game(c: &mut Criterion) {
    let mut g = c.benchmark_group("lucky_toss_game");
    for &target in &[101u32, 500u32] {
        g.bench_with_input(BenchmarkId::new("play_to_target", target), &target, |b, &t| {
            let mut seed = 0u64;
            b.iter(|| {
                seed += 1;
                let mut engine = TurnEngine::seeded(seed);
                engine.set_target(t).unwrap();
                black_box(play_game(&mut engine))
            })
        });
    }
    g.finish();
}

fn bench_state_snapshot(c: &mut Criterion) {
    let mut engine = TurnEngine::seeded(7);
    engine.set_target(10_000).unwrap();
    for _ in 0..50 {
        engine.throw_initial().unwrap();
        engine.score_turn().unwrap();
    }

    c.bench_function("state_clone_after_50_turns", |b| {
        b.iter(|| black_box(engine.state().clone()))
    });
}

criterion_group!(benches, bench_full_game, bench_state_snapshot);
criterion_main!(benches);
