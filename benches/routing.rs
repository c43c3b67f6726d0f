use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use officelayout::geometry::Point;
use officelayout::layout::Metadata;
use officelayout::object_types::ObjectType;
use officelayout::routing::find_shortest_path_to_exit;
use officelayout::Layout;

fn room_with_desks(room_side: f64, desk_count: usize) -> Layout {
    let mut layout = Layout::with_grid_size(room_side, room_side, 40.0);
    let step = (room_side - 40.0).max(40.0) / desk_count.max(1) as f64;
    for i in 0..desk_count {
        let x = (i as f64 * step).min(room_side - 41.0);
        layout
            .add_object(
                ObjectType::Desk,
                x,
                room_side / 2.0,
                30.0,
                20.0,
                0.0,
                Metadata::new(),
                None,
            )
            .unwrap();
    }
    layout.exit_points.push(Point::new(room_side - 10.0, 10.0));
    layout
}

pub fn benchmark(c: &mut Criterion) {
    let desk_counts = [1, 10, 100, 1000];
    let mut g = c.benchmark_group("rooms");
    for count in desk_counts {
        g.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let layout = room_with_desks(2000.0, count);
            let start = Point::new(10.0, 10.0);
            b.iter(|| find_shortest_path_to_exit(&layout, start, None))
        });
    }
    g.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
