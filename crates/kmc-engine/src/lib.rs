//! Seeded kinetic Monte Carlo runs.
//!
//! Wraps a [`kmc_lattice::Lattice`] in a [`Simulation`] that owns the
//! random source, handles population and equilibration, runs for a number
//! of steps or a span of simulated time, records per-step metrics and
//! hashes its state for replay checks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod hash;
pub mod metrics;
pub mod simulation;

pub use config::{RateModelConfig, SimulationConfig, SimulationError};
pub use hash::lattice_hash;
pub use metrics::{RunMetrics, StepMetrics};
pub use simulation::{RunSummary, Simulation};
