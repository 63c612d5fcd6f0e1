use mint::Vector2;
use tile_plan::prelude::*;
use tile_plan_examples::{init_tracing, render_plan_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let spec = RandomPointsSpec::new(60)
        .with_extent(2000.0, 1200.0)
        .with_shape(Shape::Ellipse)
        .with_seed(7)
        .with_allow_overlap(false)
        .with_fov(150.0, 150.0)
        .with_order(FnOrdering::new(nearest_neighbor))
        .with_start_at(0);
    let plan = RandomPoints::try_new(spec)?;

    let mut events = VecSink::new();
    let positions: Vec<Position> = plan.positions_with_events(&mut events).collect();
    for event in events.as_slice() {
        println!("warning: {event}");
    }
    println!("{} of {} points placed", positions.len(), plan.num_positions());

    let view = Bounds::centered(glam::DVec2::ZERO, 2300.0, 1500.0);
    render_plan_to_png(
        &plan,
        None,
        &RenderConfig::new((920, 600), view),
        "random-points-no-overlap.png",
    )?;
    Ok(())
}

/// Greedy nearest-neighbour tour starting at `start_at`.
fn nearest_neighbor(mut points: Vec<Vector2<f64>>, start_at: usize) -> Vec<Vector2<f64>> {
    if points.is_empty() {
        return points;
    }
    let mut tour = Vec::with_capacity(points.len());
    let mut current = points.swap_remove(start_at.min(points.len() - 1));
    tour.push(current);
    while !points.is_empty() {
        let mut best = 0;
        let mut best_d = f64::INFINITY;
        for (i, p) in points.iter().enumerate() {
            let d = (p.x - current.x).powi(2) + (p.y - current.y).powi(2);
            if d < best_d {
                best_d = d;
                best = i;
            }
        }
        current = points.swap_remove(best);
        tour.push(current);
    }
    tour
}
