#![allow(dead_code)]

use std::f64::consts::TAU;
use std::time::Duration;

use criterion::{Criterion, Throughput};
use glam::DVec2;
use tile_plan::ordering::OrderMode;
use tile_plan::plan::{GridOptions, PolygonSpec};

/// Side length of the square stage area used by the grid benches.
pub const STAGE_SIDE: f64 = 1000.0;

/// Square fields of view, from a few tiles to a dense raster.
pub const FOVS: [f64; 4] = [100.0, 50.0, 25.0, 10.0];

pub fn plan_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(20)
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2))
}

/// Throughput in emitted positions; empty plans count as one so criterion keeps a rate.
pub fn positions_throughput(positions: usize) -> Throughput {
    Throughput::Elements(positions.max(1) as u64)
}

pub fn square_fov(fov: f64, mode: OrderMode) -> GridOptions {
    GridOptions::new().with_fov(fov, fov).with_mode(mode)
}

/// Simple star polygon centered on the stage, `points` tips alternating `outer` and `inner` radii.
pub fn star(points: usize, outer: f64, inner: f64) -> PolygonSpec {
    let center = DVec2::splat(STAGE_SIDE / 2.0);
    let vertices = (0..points * 2).map(|i| {
        let r = if i % 2 == 0 { outer } else { inner };
        let a = i as f64 / (points * 2) as f64 * TAU;
        center + DVec2::new(r * a.cos(), r * a.sin())
    });
    PolygonSpec::new(vertices)
}
