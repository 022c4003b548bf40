//! Benchmark for the full plan computation
//!
//! The pipeline reruns from scratch on every UI input change, so the whole
//! computation has to stay comfortably below interactive latency.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use resonance_planner::catalog::MaterialCatalog;
use resonance_planner::planner::{compute_plan, Inventory, PlanRequest};
use resonance_planner::roster::Roster;

fn bench_compute_plan(c: &mut Criterion) {
    let catalog = MaterialCatalog::new();
    let roster = Roster::load(&catalog).expect("roster");

    let mut request = PlanRequest::new();
    request.character = roster.character("jiyan");
    request.weapon = roster.weapon("verdant_summit");

    let mut inventory = Inventory::new();
    inventory.set("Shell Credits", 1_000_000);
    inventory.set("Premium Resonance Potion", 60);

    c.bench_function("compute_plan_full_progression", |b| {
        b.iter(|| compute_plan(black_box(&request), black_box(&inventory), black_box(&catalog)))
    });

    c.bench_function("roster_load", |b| {
        b.iter(|| Roster::load(black_box(&catalog)).unwrap())
    });
}

criterion_group!(benches, bench_compute_plan);
criterion_main!(benches);
