use tile_plan::prelude::*;
use tile_plan_examples::{init_tracing, render_plan_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Same 5 x 5 tiling visited outward from the center, then row by row from the top-left.
    let base = GridOptions::new().with_fov(1.0, 1.0).with_overlap((0.0, 20.0));
    let spiral = GridRowsColumns::try_new(
        5,
        5,
        RelativeTo::Center,
        base.with_mode(OrderMode::Spiral),
    )?;
    let raster = GridRowsColumns::try_new(
        5,
        5,
        RelativeTo::TopLeft,
        base.with_mode(OrderMode::RowWise),
    )?;

    let view = Bounds::centered(glam::DVec2::ZERO, 9.0, 9.0);
    render_plan_to_png(
        &spiral,
        None,
        &RenderConfig::new((600, 600), view),
        "grid-rows-columns-spiral.png",
    )?;
    let view = Bounds::new(-1.0, -5.0, 6.0, 1.0);
    render_plan_to_png(
        &raster,
        None,
        &RenderConfig::new((600, 520), view),
        "grid-rows-columns-top-left.png",
    )?;

    let first = spiral.positions()?.next();
    if let Some(p) = first {
        println!("spiral starts at ({}, {}) in cell r{:?} c{:?}", p.x, p.y, p.row, p.col);
    }
    Ok(())
}
