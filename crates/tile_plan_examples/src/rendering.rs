//! Minimal PNG plotting of plan positions for the demo binaries.
use std::path::Path;

use anyhow::{bail, Context};
use glam::DVec2;
use image::{Rgb, RgbImage};
use tile_plan::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install a `tracing` fmt subscriber for the demos. `RUST_LOG` overrides the default `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Colors used when plotting.
#[derive(Clone, Copy, Debug)]
pub struct PlotStyle {
    pub background: [u8; 3],
    pub tile: [u8; 3],
    pub point: [u8; 3],
    pub path: [u8; 3],
    pub outline: [u8; 3],
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            background: [26, 26, 26],
            tile: [90, 160, 230],
            point: [235, 235, 235],
            path: [120, 120, 120],
            outline: [240, 120, 60],
        }
    }
}

/// Output image size, stage area and style.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    /// Stage area mapped onto the image.
    pub view: Bounds,
    pub style: PlotStyle,
    /// Draw lines between consecutive positions.
    pub draw_path: bool,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), view: Bounds) -> Self {
        Self {
            image_size,
            view,
            style: PlotStyle::default(),
            draw_path: true,
        }
    }

    pub fn with_style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_path(mut self, draw_path: bool) -> Self {
        self.draw_path = draw_path;
        self
    }

    fn to_pixel(&self, p: DVec2) -> (i64, i64) {
        let (w, h) = self.image_size;
        let u = (p.x - self.view.left) / self.view.width();
        // image rows grow downward, stage y grows upward
        let v = (self.view.top - p.y) / self.view.height();
        (
            (u * (w as f64 - 1.0)).round() as i64,
            (v * (h as f64 - 1.0)).round() as i64,
        )
    }
}

struct Canvas {
    img: RgbImage,
}

impl Canvas {
    fn put(&mut self, x: i64, y: i64, color: [u8; 3]) {
        if x >= 0 && y >= 0 && (x as u32) < self.img.width() && (y as u32) < self.img.height() {
            self.img.put_pixel(x as u32, y as u32, Rgb(color));
        }
    }

    fn line(&mut self, a: (i64, i64), b: (i64, i64), color: [u8; 3]) {
        let (mut x0, mut y0) = a;
        let (x1, y1) = b;
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn dot(&mut self, c: (i64, i64), radius: i64, color: [u8; 3]) {
        for oy in -radius..=radius {
            for ox in -radius..=radius {
                if ox * ox + oy * oy <= radius * radius {
                    self.put(c.0 + ox, c.1 + oy, color);
                }
            }
        }
    }
}

/// Plot every position of `plan` with its fov rectangle, plus `outline` if given, and save a PNG.
pub fn render_plan_to_png(
    plan: &dyn MultiPointPlan,
    outline: Option<&[DVec2]>,
    config: &RenderConfig,
    out_path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    if w == 0 || h == 0 || config.view.width() <= 0.0 || config.view.height() <= 0.0 {
        bail!("render target and view must be non-empty");
    }

    let mut canvas = Canvas {
        img: RgbImage::from_pixel(w, h, Rgb(config.style.background)),
    };
    let positions: Vec<Position> = plan.positions()?.collect();
    let fov = plan.fov().both();

    if let Some((fw, fh)) = fov {
        for p in &positions {
            let r = Bounds::centered(p.xy(), fw, fh);
            let corners = [
                DVec2::new(r.left, r.bottom),
                DVec2::new(r.right, r.bottom),
                DVec2::new(r.right, r.top),
                DVec2::new(r.left, r.top),
            ];
            for i in 0..4 {
                let a = config.to_pixel(corners[i]);
                let b = config.to_pixel(corners[(i + 1) % 4]);
                canvas.line(a, b, config.style.tile);
            }
        }
    }

    if let Some(ring) = outline {
        for pair in ring.windows(2) {
            canvas.line(
                config.to_pixel(pair[0]),
                config.to_pixel(pair[1]),
                config.style.outline,
            );
        }
    }

    if config.draw_path {
        for pair in positions.windows(2) {
            canvas.line(
                config.to_pixel(pair[0].xy()),
                config.to_pixel(pair[1].xy()),
                config.style.path,
            );
        }
    }

    for p in &positions {
        canvas.dot(config.to_pixel(p.xy()), 2, config.style.point);
    }

    let out_path = out_path.as_ref();
    canvas
        .img
        .save(out_path)
        .with_context(|| format!("writing {}", out_path.display()))?;
    info!(
        positions = positions.len(),
        path = %out_path.display(),
        "rendered plan"
    );
    Ok(())
}
