use tile_plan::prelude::*;
use tile_plan_examples::{init_tracing, render_plan_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // 1 x 0.6 mm area imaged with a 120 x 90 um camera, 10% overlap
    let plan = GridFromEdges::try_new(
        600.0,
        0.0,
        0.0,
        1000.0,
        GridOptions::new()
            .with_overlap(10.0)
            .with_mode(OrderMode::RowWiseSnake),
    )?
    .with_fov(120.0, 90.0)?;

    println!("{} tiles", plan.grid_size()?);
    for p in plan.iter_grid_positions(None).take(5) {
        println!("{} r{:?} c{:?} ({:.1}, {:.1})", p.name, p.row, p.col, p.x, p.y);
    }

    let view = plan.bounding_box().expanded(60.0, 60.0);
    render_plan_to_png(
        &plan,
        None,
        &RenderConfig::new((800, 520), view),
        "grid-edges-snake.png",
    )?;
    Ok(())
}
