//! Grid restricted to tiles that touch a polygon.
//!
//! The polygon's bounding box, grown by a quarter field of view on every side, is tiled like an
//! edge-bounded grid. Each candidate tile's rectangle is then tested against the prepared
//! region and kept if it touches it.
use std::sync::Arc;

use glam::DVec2;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geometry::{Bounds, PreparedRegion, RegionShape};
use crate::plan::grid::{span_count, GridLayout};
use crate::plan::options::GridOptions;
use crate::plan::position::Position;

/// User description of the polygon to cover.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolygonSpec {
    /// At least three vertices of a simple polygon.
    pub vertices: Vec<DVec2>,
    /// Replace the (buffered) polygon with its convex hull.
    #[cfg_attr(feature = "serde", serde(default))]
    pub convex_hull: bool,
    /// Buffer distance applied before tiling.
    #[cfg_attr(feature = "serde", serde(default))]
    pub offset: Option<f64>,
}

impl PolygonSpec {
    pub fn new(vertices: impl IntoIterator<Item = impl Into<DVec2>>) -> Self {
        Self {
            vertices: vertices.into_iter().map(Into::into).collect(),
            convex_hull: false,
            offset: None,
        }
    }

    pub fn with_convex_hull(mut self, convex_hull: bool) -> Self {
        self.convex_hull = convex_hull;
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Absolute stage positions of the tiles that intersect a polygon.
#[derive(Clone, Debug)]
pub struct GridFromPolygon {
    region: Arc<dyn RegionShape>,
    options: GridOptions,
    /// Region bounds grown by a quarter fov; `None` until the fov is known.
    tile_bounds: Option<Bounds>,
}

impl GridFromPolygon {
    /// Validate, buffer and prepare the polygon with the default `geo` backend.
    pub fn try_new(spec: &PolygonSpec, options: GridOptions) -> Result<Self> {
        let region = PreparedRegion::from_vertices(&spec.vertices, spec.offset, spec.convex_hull)?;
        Self::from_region(Arc::new(region), options)
    }

    /// Use an already prepared region, e.g. from another geometry backend.
    pub fn from_region(region: Arc<dyn RegionShape>, options: GridOptions) -> Result<Self> {
        options.validate()?;
        let tile_bounds = options.fov.both().map(|(w, h)| {
            let b = region.bounds().expanded(w / 4.0, h / 4.0);
            debug!(?b, "expanded polygon bounds");
            b
        });
        Ok(Self {
            region,
            options,
            tile_bounds,
        })
    }

    /// The same plan with the field of view supplied by the instrument. The prepared region is
    /// shared; only the expanded bounds are recomputed.
    pub fn with_fov(&self, width: f64, height: f64) -> Result<Self> {
        Self::from_region(self.region.clone(), self.options.with_fov(width, height))
    }

    /// Expanded bounding box the raster is laid over.
    pub fn bounding_box(&self) -> Result<Bounds> {
        self.tile_bounds.ok_or(Error::MissingFov {
            plan: self.plan_name(),
        })
    }

    /// Outer ring of the buffered / hulled polygon, for plotting.
    pub fn plot_polygon(&self) -> Vec<DVec2> {
        self.region.exterior()
    }

    pub fn region(&self) -> &Arc<dyn RegionShape> {
        &self.region
    }

    /// Positions whose tile touches the polygon.
    ///
    /// Names keep the index of the tile in the bounding-box raster.
    pub fn positions(&self) -> Result<impl Iterator<Item = Position> + '_> {
        let (w, h) = self.options.fov.both().ok_or(Error::MissingFov {
            plan: self.plan_name(),
        })?;
        let region = &self.region;
        Ok(self
            .iter_grid_positions(None)
            .filter(move |p| region.intersects_rect(&Bounds::centered(p.xy(), w, h))))
    }

    /// Number of retained tiles; rescans the raster on every call.
    pub fn num_positions(&self) -> Result<usize> {
        Ok(self.positions()?.count())
    }

    fn raster_bounds(&self) -> Bounds {
        self.tile_bounds.unwrap_or_else(|| self.region.bounds())
    }
}

impl GridLayout for GridFromPolygon {
    fn plan_name(&self) -> &'static str {
        "GridFromPolygon"
    }

    fn options(&self) -> &GridOptions {
        &self.options
    }

    fn row_count(&self, dy: f64) -> usize {
        span_count(self.raster_bounds().height(), dy, self.options.fov.height)
    }

    fn col_count(&self, dx: f64) -> usize {
        span_count(self.raster_bounds().width(), dx, self.options.fov.width)
    }

    fn x_offset(&self, _dx: f64) -> f64 {
        self.raster_bounds().left + self.options.fov.width.unwrap_or(0.0) / 2.0
    }

    fn y_offset(&self, _dy: f64) -> f64 {
        self.raster_bounds().top - self.options.fov.height.unwrap_or(0.0) / 2.0
    }

    fn requires_fov(&self) -> bool {
        true
    }

    /// Retained tiles only, not the full bounding raster.
    fn grid_size(&self) -> Result<usize> {
        GridFromPolygon::num_positions(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::edges::GridFromEdges;

    fn square(size: f64) -> PolygonSpec {
        PolygonSpec::new([[0.0, 0.0], [size, 0.0], [size, size], [0.0, size]])
    }

    fn triangle() -> PolygonSpec {
        PolygonSpec::new([[0.0, 0.0], [100.0, 0.0], [0.0, 100.0]])
    }

    fn xy(points: impl Iterator<Item = Position>) -> Vec<(f64, f64)> {
        points.map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn bounds_grow_by_quarter_fov() {
        let plan = GridFromPolygon::try_new(&square(10.0), GridOptions::new().with_fov(4.0, 8.0))
            .unwrap();
        assert_eq!(
            plan.bounding_box().unwrap(),
            Bounds::new(-1.0, -2.0, 11.0, 12.0)
        );
    }

    #[test]
    fn missing_fov_fails_on_use_not_construction() {
        let plan = GridFromPolygon::try_new(&square(10.0), GridOptions::new()).unwrap();
        assert!(matches!(plan.num_positions(), Err(Error::MissingFov { .. })));
        assert!(plan.positions().is_err());
        assert!(plan.bounding_box().is_err());

        let ready = plan.with_fov(5.0, 5.0).unwrap();
        assert!(ready.num_positions().unwrap() > 0);
    }

    #[test]
    fn invalid_polygons_fail_at_construction() {
        let two = PolygonSpec::new([[0.0, 0.0], [1.0, 1.0]]);
        assert!(GridFromPolygon::try_new(&two, GridOptions::new()).is_err());
        let bowtie = PolygonSpec::new([[0.0, 0.0], [2.0, 2.0], [2.0, 0.0], [0.0, 2.0]]);
        assert!(matches!(
            GridFromPolygon::try_new(&bowtie, GridOptions::new()),
            Err(Error::InvalidPolygon(_))
        ));
    }

    #[test]
    fn output_is_subset_of_bounding_raster_and_touches_polygon() {
        let opts = GridOptions::new().with_fov(20.0, 20.0).with_overlap(10.0);
        let plan = GridFromPolygon::try_new(&triangle(), opts).unwrap();
        let b = plan.bounding_box().unwrap();
        let raster = GridFromEdges::try_new(b.top, b.left, b.bottom, b.right, opts).unwrap();

        let full = xy(raster.iter_grid_positions(None));
        let kept = xy(plan.positions().unwrap());
        assert!(!kept.is_empty());
        assert!(kept.len() < full.len());
        for p in &kept {
            assert!(full.contains(p));
            let tile = Bounds::centered(DVec2::new(p.0, p.1), 20.0, 20.0);
            assert!(plan.region().intersects_rect(&tile));
        }
        assert_eq!(plan.num_positions().unwrap(), kept.len());
        assert_eq!(plan.grid_size().unwrap(), kept.len());
        assert_eq!(plan.frame().cell_count().unwrap(), full.len());
    }

    #[test]
    fn tiles_far_from_hypotenuse_are_dropped() {
        let plan =
            GridFromPolygon::try_new(&triangle(), GridOptions::new().with_fov(20.0, 20.0)).unwrap();
        let kept = xy(plan.positions().unwrap());
        assert!(kept.iter().all(|&(x, y)| x + y <= 100.0 + 20.0));
        // the corner opposite the right angle is outside
        assert!(!kept.iter().any(|&(x, y)| x > 80.0 && y > 80.0));
    }

    #[test]
    fn names_keep_raster_index() {
        let plan =
            GridFromPolygon::try_new(&triangle(), GridOptions::new().with_fov(20.0, 20.0)).unwrap();
        let names: Vec<String> = plan.positions().unwrap().map(|p| p.name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), names.len());
        assert_eq!(names[0], "0000");
    }

    #[test]
    fn buffer_and_hull_grow_coverage() {
        let notch = PolygonSpec::new([
            [0.0, 0.0],
            [60.0, 0.0],
            [60.0, 20.0],
            [20.0, 20.0],
            [20.0, 40.0],
            [60.0, 40.0],
            [60.0, 60.0],
            [0.0, 60.0],
        ]);
        let opts = GridOptions::new().with_fov(5.0, 5.0);
        let raw = GridFromPolygon::try_new(&notch, opts).unwrap();
        let hull = GridFromPolygon::try_new(&notch.clone().with_convex_hull(true), opts).unwrap();
        let buffered = GridFromPolygon::try_new(&notch.clone().with_offset(5.0), opts).unwrap();

        let n_raw = raw.num_positions().unwrap();
        assert!(hull.num_positions().unwrap() > n_raw);
        assert!(buffered.num_positions().unwrap() > n_raw);
        assert!(buffered.plot_polygon().len() > raw.plot_polygon().len());
    }
}
