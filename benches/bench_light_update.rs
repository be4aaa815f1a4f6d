// benches/bench_light_update.rs
use criterion::{
    black_box, criterion_group, criterion_main, AxisScale, Criterion, PlotConfiguration,
};
use std::time::Duration;

use live_traffic::simulation_engine::light::{
    CycleDurations, LightId, LightPhase, Position, TrafficLight,
};
use live_traffic::simulation_engine::simulation::tick_all;

// Helper to build a registry of a given size with staggered countdowns.
fn create_registry(size: usize) -> Vec<TrafficLight> {
    (0..size)
        .map(|i| {
            TrafficLight::new(
                LightId(i as u32 + 1),
                format!("Intersection {}", i),
                Position { x: 0.0, y: 0.0 },
                LightPhase::Red,
                (i as u32 % 30) + 1,
                CycleDurations {
                    red: 30,
                    yellow: 5,
                    green: 25,
                },
            )
            .unwrap()
        })
        .collect()
}

fn bench_tick_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_all");

    group.sample_size(100);
    group.measurement_time(Duration::from_secs(5));
    group.warm_up_time(Duration::from_secs(2));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Linear));

    // Benchmark for registries of 12 (the demo size), 100, and 1000 lights.
    for &size in [12, 100, 1000].iter() {
        group.bench_function(format!("size_{}", size), |b| {
            let mut lights = create_registry(size);
            b.iter(|| {
                let changes = tick_all(&mut lights);
                black_box(changes);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tick_all);
criterion_main!(benches);
