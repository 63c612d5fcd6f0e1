//! `geo`-backed region preparation: validation, buffering, convex hull and fast rectangle tests.
use geo::{
    BoundingRect, Buffer, ConvexHull, Coord, Intersects, LineString, MultiPolygon, Polygon, Rect,
    Validation,
};
use glam::DVec2;
use tracing::debug;

use crate::error::{ensure_finite, Error, Result};
use crate::geometry::{Bounds, RegionShape};

/// A polygonal region prepared for repeated rectangle intersection queries.
///
/// Each part keeps its own bounding rectangle so most far-away tiles are rejected without
/// touching the polygon edges.
#[derive(Debug, Clone)]
pub struct PreparedRegion {
    parts: Vec<(Rect<f64>, Polygon<f64>)>,
    bounds: Bounds,
}

impl PreparedRegion {
    /// Build a region from the vertices of a simple polygon.
    ///
    /// The ring is validated first, then optionally buffered by `offset` (round caps and joins,
    /// negative values shrink the polygon) and optionally replaced by its convex hull.
    pub fn from_vertices(
        vertices: &[DVec2],
        offset: Option<f64>,
        convex_hull: bool,
    ) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::InvalidPolygon(format!(
                "at least 3 vertices are required, got {}",
                vertices.len()
            )));
        }
        if vertices.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidPolygon("vertices must be finite".into()));
        }
        if let Some(offset) = offset {
            ensure_finite("offset", offset)?;
        }

        let ring: LineString<f64> = vertices.iter().map(|v| Coord { x: v.x, y: v.y }).collect();
        let polygon = Polygon::new(ring, vec![]);
        if !polygon.is_valid() {
            return Err(Error::InvalidPolygon(
                "polygon ring is invalid or self-intersecting".into(),
            ));
        }

        let mut shape = MultiPolygon::new(vec![polygon]);
        if let Some(distance) = offset {
            shape = shape.buffer(distance);
        }
        if convex_hull {
            shape = MultiPolygon::new(vec![shape.convex_hull()]);
        }

        Self::from_multi_polygon(shape)
    }

    /// Prepare an already constructed shape.
    pub fn from_multi_polygon(shape: MultiPolygon<f64>) -> Result<Self> {
        let parts: Vec<(Rect<f64>, Polygon<f64>)> = shape
            .0
            .into_iter()
            .filter_map(|p| p.bounding_rect().map(|r| (r, p)))
            .collect();

        let mut rects = parts.iter().map(|(r, _)| r);
        let first = rects
            .next()
            .ok_or_else(|| Error::InvalidPolygon("region is empty".into()))?;
        let bounds = rects.fold(rect_to_bounds(first), |acc, r| {
            let b = rect_to_bounds(r);
            Bounds::new(
                acc.left.min(b.left),
                acc.bottom.min(b.bottom),
                acc.right.max(b.right),
                acc.top.max(b.top),
            )
        });

        debug!(
            parts = parts.len(),
            left = bounds.left,
            bottom = bounds.bottom,
            right = bounds.right,
            top = bounds.top,
            "prepared polygon region"
        );

        Ok(Self { parts, bounds })
    }
}

fn rect_to_bounds(rect: &Rect<f64>) -> Bounds {
    Bounds::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
}

fn bounds_to_rect(bounds: &Bounds) -> Rect<f64> {
    Rect::new(
        Coord {
            x: bounds.left,
            y: bounds.bottom,
        },
        Coord {
            x: bounds.right,
            y: bounds.top,
        },
    )
}

impl RegionShape for PreparedRegion {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn intersects_rect(&self, rect: &Bounds) -> bool {
        if !self.bounds.intersects(rect) {
            return false;
        }
        let tile = bounds_to_rect(rect);
        self.parts.iter().any(|(part_bounds, polygon)| {
            part_bounds.intersects(&tile) && polygon.intersects(&tile)
        })
    }

    fn exterior(&self) -> Vec<DVec2> {
        self.parts
            .first()
            .map(|(_, polygon)| {
                polygon
                    .exterior()
                    .coords()
                    .map(|c| DVec2::new(c.x, c.y))
                    .collect()
            })
            .unwrap_or_default()
    }
}
