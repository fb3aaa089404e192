use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graph_edit_matching::graph::OwnedGraph;
use graph_edit_matching::{bmf, hged, sbmf, AbsDiff, BmfConfig, HgedConfig, SbmfConfig};

const RING: usize = 30;

fn ring_graph(n: usize, offset: f32) -> OwnedGraph<f32, f32> {
    let mut g = OwnedGraph::new();
    for i in 0..n {
        g.add_vertex(i as f32 * 0.1 + offset);
    }
    for i in 0..n {
        g.add_edge(i, (i + 1) % n, (i % 3) as f32 + offset);
    }
    g
}

fn bench_bmf(c: &mut Criterion) {
    let a = ring_graph(RING, 0.0);
    let b = ring_graph(RING, 0.05);
    let config = BmfConfig::default();

    c.bench_function("bmf/ring_30", move |bencher| {
        bencher.iter(|| black_box(bmf(&a, &b, &AbsDiff, &AbsDiff, &config)))
    });
}

fn bench_sbmf(c: &mut Criterion) {
    let a = ring_graph(RING, 0.0);
    let b = ring_graph(RING, 0.05);
    let config = SbmfConfig {
        seed: Some(42),
        ..SbmfConfig::default()
    };

    c.bench_function("sbmf/ring_30", move |bencher| {
        bencher.iter(|| black_box(sbmf(&a, &b, &AbsDiff, &AbsDiff, &config)))
    });
}

fn bench_hged(c: &mut Criterion) {
    let a = ring_graph(RING, 0.0);
    let b = ring_graph(RING, 0.05);
    let config = HgedConfig::default();

    c.bench_function("hged/ring_30", move |bencher| {
        bencher.iter(|| black_box(hged(&a, &b, &AbsDiff, &AbsDiff, &config)))
    });
}

criterion_group!(benches, bench_bmf, bench_sbmf, bench_hged);
criterion_main!(benches);
