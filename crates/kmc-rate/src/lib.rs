//! Jump rate models for lattice kinetic Monte Carlo.
//!
//! The lattice describes each candidate hop to a [`RateModel`] through a
//! [`JumpEnvironment`]: the labels and energies of the source and target
//! sites, how many of their neighbours are occupied, and the configured
//! nearest-neighbour interaction energy. The model turns that into a
//! non-negative rate. Models are selected once at configuration time and
//! stored as `Box<dyn RateModel>`, so alternative energy-to-rate policies
//! can be swapped in without touching the sampling code.
//!
//! # Reference models
//!
//! - [`Metropolis`]: `ν` for downhill hops, `ν·exp(-ΔE/kT)` uphill (default)
//! - [`Boltzmann`]: `ν·exp(-ΔE/2kT)`, symmetric in forward/back hops
//! - [`Uniform`]: a constant rate, ignoring energies
//! - [`LookupTable`]: tabulated rates keyed by site labels and local
//!   occupation

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boltzmann;
pub mod environment;
pub mod lookup;
pub mod metropolis;
pub mod model;
pub mod uniform;

pub use boltzmann::{Boltzmann, MAX_LOG_RATE};
pub use environment::JumpEnvironment;
pub use lookup::{LookupTable, LookupTableBuilder};
pub use metropolis::{Metropolis, MetropolisBuilder};
pub use model::{RateModel, BOLTZMANN_CONSTANT_EV, ROOM_TEMPERATURE_K};
pub use uniform::Uniform;
