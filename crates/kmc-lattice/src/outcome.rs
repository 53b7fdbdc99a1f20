//! Results of a single step.

use kmc_core::{ParticleId, SiteId, Vec3};

/// What a completed hop did.
#[derive(Clone, Debug, PartialEq)]
pub struct JumpRecord {
    /// The particle that moved.
    pub particle: ParticleId,
    /// Site it left.
    pub source: SiteId,
    /// Site it entered.
    pub target: SiteId,
    /// Minimum-image hop vector.
    pub displacement: Vec3,
    /// Rate of the chosen hop.
    pub rate: f64,
    /// Simulated time added to the clock.
    pub waiting_time: f64,
}

/// Result of [`Lattice::step`](crate::Lattice::step).
///
/// A deadlock (no possible hop, or every rate zero) is an ordinary
/// outcome, not an error: the caller decides whether to stop.
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// A particle hopped.
    Jumped(JumpRecord),
    /// No hop was possible. Nothing changed.
    NoTransitionsAvailable,
}

impl StepOutcome {
    /// Whether the step found nothing to do.
    pub fn is_deadlock(&self) -> bool {
        matches!(self, Self::NoTransitionsAvailable)
    }

    /// Simulated time added by this step (0 on deadlock).
    pub fn waiting_time(&self) -> f64 {
        match self {
            Self::Jumped(record) => record.waiting_time,
            Self::NoTransitionsAvailable => 0.0,
        }
    }

    /// The hop, if one happened.
    pub fn record(&self) -> Option<&JumpRecord> {
        match self {
            Self::Jumped(record) => Some(record),
            Self::NoTransitionsAvailable => None,
        }
    }
}
