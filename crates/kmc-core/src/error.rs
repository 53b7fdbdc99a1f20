//! Error types for lattice kinetic Monte Carlo.
//!
//! Organized by subsystem: configuration (lattice construction, population,
//! energy and rate-model parameters), transition sampling, and occupation
//! statistics.

use std::error::Error;
use std::fmt;

use crate::id::SiteId;

/// An invalid configuration was supplied.
///
/// Raised immediately by the call that would introduce the invalid state;
/// nothing is deferred to a later step.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A cell length is zero, negative, NaN or infinite.
    NonPositiveCellLength {
        /// Axis index (0, 1 or 2).
        axis: usize,
        /// The offending length.
        value: f64,
    },
    /// The lattice has no sites.
    EmptyLattice,
    /// Two sites share an identifier.
    DuplicateSiteId {
        /// The repeated identifier.
        id: SiteId,
    },
    /// A neighbour list names a site that does not exist.
    UnknownNeighbour {
        /// The site carrying the neighbour list.
        site: SiteId,
        /// The unresolvable neighbour identifier.
        neighbour: SiteId,
    },
    /// A site coordinate is NaN or infinite.
    NonFinitePosition {
        /// The offending site.
        site: SiteId,
    },
    /// More particles were requested than there are candidate sites.
    PopulationExceedsSites {
        /// Number of particles requested.
        requested: usize,
        /// Number of sites available to hold them.
        available: usize,
    },
    /// A site energy or interaction energy is not finite.
    InvalidEnergy {
        /// Description of the offending value.
        reason: String,
    },
    /// A rate model parameter is out of range.
    InvalidRateParameter {
        /// Description of the offending parameter.
        reason: String,
    },
    /// A simulated-time horizon is negative, NaN or infinite.
    InvalidHorizon {
        /// The offending horizon.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveCellLength { axis, value } => {
                write!(
                    f,
                    "cell length on axis {axis} must be finite and positive, got {value}"
                )
            }
            Self::EmptyLattice => write!(f, "lattice must have at least one site"),
            Self::DuplicateSiteId { id } => write!(f, "duplicate site id {id}"),
            Self::UnknownNeighbour { site, neighbour } => {
                write!(f, "site {site} lists unknown neighbour {neighbour}")
            }
            Self::NonFinitePosition { site } => {
                write!(f, "site {site} has a non-finite coordinate")
            }
            Self::PopulationExceedsSites {
                requested,
                available,
            } => write!(
                f,
                "cannot place {requested} particles on {available} available sites"
            ),
            Self::InvalidEnergy { reason } => write!(f, "invalid energy: {reason}"),
            Self::InvalidRateParameter { reason } => {
                write!(f, "invalid rate parameter: {reason}")
            }
            Self::InvalidHorizon { value } => {
                write!(f, "time horizon must be finite and non-negative, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors from building or sampling a transition set.
#[derive(Clone, Debug, PartialEq)]
pub enum TransitionError {
    /// The candidate set is empty or its total rate is zero.
    ///
    /// `Lattice::step` reports this as a non-exceptional outcome; the
    /// sampling primitives report it as an error.
    NoTransitionsAvailable,
    /// A rate model produced a negative, NaN or infinite rate.
    InvalidRate {
        /// Position of the offending jump in the candidate list.
        index: usize,
        /// The rate that was produced.
        rate: f64,
    },
    /// A jump no longer matches the lattice: its source does not hold
    /// the hopping particle or its target is occupied.
    StaleJump {
        /// Site the jump leaves.
        source: SiteId,
        /// Site the jump enters.
        target: SiteId,
    },
    /// A waiting time is negative, NaN or infinite.
    InvalidWaitingTime {
        /// The offending waiting time.
        value: f64,
    },
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTransitionsAvailable => write!(f, "no transitions available"),
            Self::InvalidRate { index, rate } => {
                write!(f, "candidate jump {index} has invalid rate {rate}")
            }
            Self::StaleJump { source, target } => {
                write!(f, "jump {source} -> {target} does not match the lattice state")
            }
            Self::InvalidWaitingTime { value } => {
                write!(f, "waiting time must be finite and non-negative, got {value}")
            }
        }
    }
}

impl Error for TransitionError {}

/// Errors from occupation statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatisticsError {
    /// The statistic divides by elapsed time, and no time has elapsed
    /// since construction or the last reset.
    UndefinedStatistic {
        /// Name of the requested statistic.
        statistic: &'static str,
    },
}

impl fmt::Display for StatisticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedStatistic { statistic } => {
                write!(f, "{statistic} is undefined at zero elapsed time")
            }
        }
    }
}

impl Error for StatisticsError {}
