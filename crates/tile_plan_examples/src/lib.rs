#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, render_plan_to_png, PlotStyle, RenderConfig};
