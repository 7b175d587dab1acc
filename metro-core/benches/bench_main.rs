use criterion::{Criterion, black_box, criterion_group, criterion_main};
use metro_core::prelude::*;

fn bench_shortest_path(c: &mut Criterion) {
    let network = build_graph(medellin_metro_connections()).expect("sample network");

    c.bench_function("shortest_path niquia - la estrella", |b| {
        b.iter(|| shortest_path(black_box(&network), "Niquia", "La Estrella"))
    });
}

fn bench_predict_route(c: &mut Criterion) {
    let config = MetroModelConfig {
        trip_count: 2000,
        predictor: PredictorConfig {
            forest: ForestConfig {
                n_trees: 20,
                ..ForestConfig::default()
            },
            ..PredictorConfig::default()
        },
        ..MetroModelConfig::default()
    };
    let model = create_metro_model(medellin_metro_connections(), &config).expect("metro model");
    let conditions = TravelConditions::new(18, 4, true, false).expect("conditions");

    c.bench_function("predict_route niquia - la estrella", |b| {
        b.iter(|| model.predict_route("Niquia", "La Estrella", black_box(&conditions)))
    });
}

fn bench_fit(c: &mut Criterion) {
    let network = build_graph(medellin_metro_connections()).expect("sample network");
    let trips = generate_trips(&network, 1000, 42);
    let config = PredictorConfig {
        forest: ForestConfig {
            n_trees: 10,
            ..ForestConfig::default()
        },
        ..PredictorConfig::default()
    };

    let mut group = c.benchmark_group("fit");
    group.sample_size(10);
    group.bench_function("travel time model, 10 trees", |b| {
        b.iter(|| TravelTimeModel::fit(network.stations(), black_box(&trips), &config))
    });
    group.finish();
}

criterion_group!(benches, bench_shortest_path, bench_predict_route, bench_fit);
criterion_main!(benches);
