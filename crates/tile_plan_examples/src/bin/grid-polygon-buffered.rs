use tile_plan::prelude::*;
use tile_plan_examples::{init_tracing, render_plan_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // L-shaped tissue outline
    let outline = PolygonSpec::new([
        [0.0, 0.0],
        [900.0, 0.0],
        [900.0, 250.0],
        [300.0, 250.0],
        [300.0, 700.0],
        [0.0, 700.0],
    ]);
    let opts = GridOptions::new().with_fov(100.0, 100.0).with_overlap(5.0);

    for (label, spec) in [
        ("raw", outline.clone()),
        ("buffered", outline.clone().with_offset(50.0)),
        ("hull", outline.clone().with_convex_hull(true)),
    ] {
        let plan = GridFromPolygon::try_new(&spec, opts)?;
        let ring = plan.plot_polygon();
        let view = plan.bounding_box()?.expanded(50.0, 50.0);
        println!("{label}: {} tiles", plan.num_positions()?);
        render_plan_to_png(
            &plan,
            Some(&ring),
            &RenderConfig::new((700, 600), view).with_path(false),
            format!("grid-polygon-{label}.png"),
        )?;
    }
    Ok(())
}
