//! Non-fatal plan outcomes and sinks to observe them.
//!
//! Fatal problems are reported through [`crate::error::Error`]. Anything that degrades the
//! result without failing is described by a [`PlanEvent`], logged through `tracing` and
//! forwarded to an [`EventSink`] where the caller provides one.
use std::fmt;

/// Describes a recoverable condition met while building or iterating a plan.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub enum PlanEvent {
    /// `start_at` pointed past the last point and was clamped.
    StartIndexClamped {
        /// The index that was requested.
        requested: usize,
        /// The index that will be used.
        clamped: usize,
    },

    /// Overlap-free random sampling ran out of candidates before reaching its target.
    SamplingShortfall {
        /// Number of points requested.
        requested: usize,
        /// Number of points actually placed.
        found: usize,
        /// Candidates drawn before giving up.
        candidates_drawn: usize,
    },

    /// A point ordering did not return a permutation of its input; generation order was kept.
    OrderingRejected {
        /// Number of points handed to the ordering.
        expected: usize,
        /// Number of points it returned.
        returned: usize,
    },
}

impl fmt::Display for PlanEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanEvent::StartIndexClamped { requested, clamped } => write!(
                f,
                "start_at {requested} is greater than the number of points; using {clamped}"
            ),
            PlanEvent::SamplingShortfall {
                requested,
                found,
                candidates_drawn,
            } => write!(
                f,
                "unable to generate {requested} non-overlapping points; only {found} found \
                 after {candidates_drawn} candidates"
            ),
            PlanEvent::OrderingRejected { expected, returned } => write!(
                f,
                "point ordering returned {returned} points that are not a permutation of the \
                 {expected} generated; keeping generation order"
            ),
        }
    }
}

/// A generic event sink that accepts [`PlanEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: PlanEvent);
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: PlanEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(PlanEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(PlanEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(PlanEvent),
{
    #[inline]
    fn send(&mut self, event: PlanEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default, Debug)]
pub struct VecSink {
    events: Vec<PlanEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<PlanEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[PlanEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: PlanEvent) {
        self.events.push(event);
    }
}
