//! Random points inside an ellipse or rectangle, optionally without overlapping footprints.
use std::fmt;
use std::sync::Arc;

use glam::DVec2;
use mint::Vector2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::error::{ensure_positive, Error, Result};
use crate::ordering::PointOrdering;
use crate::plan::events::{EventSink, PlanEvent};
use crate::plan::options::Fov;
use crate::plan::position::Position;
use crate::sampling::Shape;

/// Upper bound on candidates drawn while looking for non-overlapping points.
pub const MAX_RANDOM_CANDIDATES: usize = 10_000;

/// Where the visiting path of a random plan begins.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum StartAt {
    /// Index into the generated points; only meaningful with a fixed seed.
    Index(usize),
    /// A point that is always part of the plan and visited first.
    Position(DVec2),
}

impl Default for StartAt {
    fn default() -> Self {
        StartAt::Index(0)
    }
}

impl From<usize> for StartAt {
    fn from(value: usize) -> Self {
        StartAt::Index(value)
    }
}

impl From<DVec2> for StartAt {
    fn from(value: DVec2) -> Self {
        StartAt::Position(value)
    }
}

/// Parameters of a [`RandomPoints`] plan.
#[derive(Clone)]
pub struct RandomPointsSpec {
    /// Number of points to generate.
    pub num_points: usize,
    /// Width of the sampled shape's bounding box.
    pub max_width: f64,
    /// Height of the sampled shape's bounding box.
    pub max_height: f64,
    pub shape: Shape,
    /// Seed for reproducible plans; `None` draws a fresh seed on every iteration.
    pub random_seed: Option<u64>,
    /// If false and the fov is known, no two footprints overlap.
    pub allow_overlap: bool,
    /// Reordering applied to the generated points. `None` keeps generation order.
    pub order: Option<Arc<dyn PointOrdering>>,
    pub start_at: StartAt,
    pub fov: Fov,
}

impl RandomPointsSpec {
    /// `num_points` in a unit ellipse, overlap allowed, generation order.
    pub fn new(num_points: usize) -> Self {
        Self {
            num_points,
            max_width: 1.0,
            max_height: 1.0,
            shape: Shape::default(),
            random_seed: None,
            allow_overlap: true,
            order: None,
            start_at: StartAt::default(),
            fov: Fov::unset(),
        }
    }

    pub fn with_extent(mut self, max_width: f64, max_height: f64) -> Self {
        self.max_width = max_width;
        self.max_height = max_height;
        self
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_allow_overlap(mut self, allow_overlap: bool) -> Self {
        self.allow_overlap = allow_overlap;
        self
    }

    pub fn with_order<O: PointOrdering + 'static>(mut self, order: O) -> Self {
        self.order = Some(Arc::new(order));
        self
    }

    pub fn with_start_at(mut self, start_at: impl Into<StartAt>) -> Self {
        self.start_at = start_at.into();
        self
    }

    pub fn with_fov(mut self, width: f64, height: f64) -> Self {
        self.fov = Fov::new(width, height);
        self
    }
}

impl fmt::Debug for RandomPointsSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomPointsSpec")
            .field("num_points", &self.num_points)
            .field("max_width", &self.max_width)
            .field("max_height", &self.max_height)
            .field("shape", &self.shape)
            .field("random_seed", &self.random_seed)
            .field("allow_overlap", &self.allow_overlap)
            .field("order", &self.order.as_ref().map(|_| "<ordering>"))
            .field("start_at", &self.start_at)
            .field("fov", &self.fov)
            .finish()
    }
}

/// Random positions relative to the current stage position.
#[derive(Clone, Debug)]
pub struct RandomPoints {
    spec: RandomPointsSpec,
    warnings: Vec<PlanEvent>,
}

impl RandomPoints {
    /// Validate `spec`. A start index past the last point is clamped and recorded as a warning
    /// instead of failing.
    pub fn try_new(mut spec: RandomPointsSpec) -> Result<Self> {
        if spec.num_points == 0 {
            return Err(Error::InvalidConfig("num_points must be > 0".into()));
        }
        ensure_positive("max_width", spec.max_width)?;
        ensure_positive("max_height", spec.max_height)?;
        spec.fov.validate()?;
        if let StartAt::Position(p) = spec.start_at {
            if !p.is_finite() {
                return Err(Error::InvalidConfig(
                    "start_at position must be finite".into(),
                ));
            }
        }

        let mut warnings = Vec::new();
        if let StartAt::Index(requested) = spec.start_at {
            let last = spec.num_points - 1;
            if requested > last {
                let event = PlanEvent::StartIndexClamped {
                    requested,
                    clamped: last,
                };
                warn!("{event}");
                warnings.push(event);
                spec.start_at = StartAt::Index(last);
            }
        }

        Ok(Self { spec, warnings })
    }

    pub fn spec(&self) -> &RandomPointsSpec {
        &self.spec
    }

    /// Effective start, after clamping.
    pub fn start_at(&self) -> StartAt {
        self.spec.start_at
    }

    /// Warnings raised while building the plan.
    pub fn warnings(&self) -> &[PlanEvent] {
        &self.warnings
    }

    /// The same plan with the field of view supplied by the instrument.
    pub fn with_fov(&self, width: f64, height: f64) -> Result<Self> {
        let fov = Fov::new(width, height);
        fov.validate()?;
        let mut next = self.clone();
        next.spec.fov = fov;
        Ok(next)
    }

    /// Requested number of points. Overlap-free sampling may yield fewer.
    pub fn num_positions(&self) -> usize {
        self.spec.num_points
    }

    /// Generate and order the points. A shortfall is logged and sent to `sink`.
    pub fn sample_points(&self, sink: &mut dyn EventSink) -> Vec<DVec2> {
        let spec = &self.spec;
        let seed = spec.random_seed.unwrap_or_else(rand::random::<u64>);
        debug!(seed, seeded = spec.random_seed.is_some(), "sampling random points");
        let mut rng = StdRng::seed_from_u64(seed);
        let sampler = spec.shape.sampler();

        let mut points: Vec<DVec2> = Vec::with_capacity(spec.num_points);
        let mut needed = spec.num_points;
        let start_index = match spec.start_at {
            StartAt::Position(p) => {
                points.push(p);
                needed -= 1;
                0
            }
            StartAt::Index(i) => i,
        };

        match spec.fov.both() {
            Some((fov_w, fov_h)) if !spec.allow_overlap => {
                let per_round = needed;
                let mut drawn = 0;
                while drawn < MAX_RANDOM_CANDIDATES && points.len() < spec.num_points {
                    let candidates = sampler(&mut rng, per_round, spec.max_width, spec.max_height);
                    drawn += per_round;
                    for c in candidates {
                        let c = DVec2::from(c);
                        if is_separated(&points, c, fov_w, fov_h) {
                            points.push(c);
                            if points.len() >= spec.num_points {
                                break;
                            }
                        }
                    }
                }

                if points.len() < spec.num_points {
                    let event = PlanEvent::SamplingShortfall {
                        requested: spec.num_points,
                        found: points.len(),
                        candidates_drawn: drawn,
                    };
                    warn!("{event}");
                    sink.send(event);
                }
            }
            _ => {
                let batch = sampler(&mut rng, needed, spec.max_width, spec.max_height);
                points.extend(batch.into_iter().map(DVec2::from));
            }
        }

        match &spec.order {
            Some(order) if !points.is_empty() => {
                let start = start_index.min(points.len() - 1);
                let input: Vec<Vector2<f64>> = points.iter().map(|&p| p.into()).collect();
                let ordered: Vec<DVec2> = order
                    .order(input, start)
                    .into_iter()
                    .map(DVec2::from)
                    .collect();
                if is_permutation(&points, &ordered) {
                    ordered
                } else {
                    let event = PlanEvent::OrderingRejected {
                        expected: points.len(),
                        returned: ordered.len(),
                    };
                    warn!("{event}");
                    sink.send(event);
                    points
                }
            }
            _ => points,
        }
    }

    /// Positions in visiting order, named by index.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        self.positions_with_events(&mut ())
    }

    /// Like [`RandomPoints::positions`], reporting a sampling shortfall or a rejected ordering
    /// to `sink`.
    pub fn positions_with_events(
        &self,
        sink: &mut dyn EventSink,
    ) -> impl Iterator<Item = Position> {
        self.sample_points(sink)
            .into_iter()
            .enumerate()
            .map(|(i, p)| Position::point(i, p))
    }
}

/// Same points with the same multiplicities, compared bitwise.
fn is_permutation(generated: &[DVec2], ordered: &[DVec2]) -> bool {
    if generated.len() != ordered.len() {
        return false;
    }
    let sorted = |points: &[DVec2]| {
        let mut keys: Vec<(u64, u64)> = points
            .iter()
            .map(|p| (p.x.to_bits(), p.y.to_bits()))
            .collect();
        keys.sort_unstable();
        keys
    };
    sorted(generated) == sorted(ordered)
}

/// True if `p` keeps at least `min_dx` in x or `min_dy` in y from every accepted point, i.e. the
/// axis-aligned footprints do not overlap.
fn is_separated(accepted: &[DVec2], p: DVec2, min_dx: f64, min_dy: f64) -> bool {
    !accepted
        .iter()
        .any(|q| (p.x - q.x).abs() < min_dx && (p.y - q.y).abs() < min_dy)
}
