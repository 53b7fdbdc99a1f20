//! kmc: lattice kinetic Monte Carlo simulation of particle diffusion.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all kmc sub-crates. For most users, adding `kmc` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use kmc::prelude::*;
//!
//! // Ten sites on a periodic ring, each linked to its two neighbours.
//! let sites: Vec<Site> = (0..10u32)
//!     .map(|i| Site::new(i, [i as f64, 0.0, 0.0], "A", [(i + 9) % 10, (i + 1) % 10]))
//!     .collect();
//! let mut config = SimulationConfig::new(sites, [10.0, 1.0, 1.0]);
//! config.particles = 5;
//! config.seed = 42;
//!
//! let mut sim = Simulation::new(config).unwrap();
//! sim.run(1_000).unwrap();
//!
//! // Five particles on one label: the time-averaged occupation is 5.
//! let stats = sim.site_occupation_statistics().unwrap();
//! assert!((stats["A"] - 5.0).abs() < 1e-9);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `kmc-core` | IDs, labels, geometry helpers, error types |
//! | [`rate`] | `kmc-rate` | Rate model trait and reference models |
//! | [`lattice`] | `kmc-lattice` | Sites, particles, jumps, sampling, the lattice |
//! | [`engine`] | `kmc-engine` | Seeded runs, metrics and replay hashing |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, IDs and errors (`kmc-core`).
pub use kmc_core as types;

/// Rate models (`kmc-rate`).
///
/// The [`rate::RateModel`] trait is the main extension point for
/// user-defined energy-to-rate policies.
pub use kmc_rate as rate;

/// Sites, particles, jump enumeration and sampling (`kmc-lattice`).
pub use kmc_lattice as lattice;

/// Seeded simulation runs (`kmc-engine`).
///
/// [`engine::Simulation`] owns the lattice and its random source.
pub use kmc_engine as engine;

/// Common imports for typical kmc usage.
///
/// ```rust
/// use kmc::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use kmc_core::{ParticleId, SiteId, SiteLabel, Vec3};

    // Errors
    pub use kmc_core::{ConfigError, StatisticsError, TransitionError};

    // Rates
    pub use kmc_rate::{Boltzmann, JumpEnvironment, LookupTable, Metropolis, RateModel, Uniform};

    // Lattice
    pub use kmc_lattice::{Jump, JumpRecord, Lattice, Particle, Site, StepOutcome, TransitionSet};

    // Engine
    pub use kmc_engine::{
        RateModelConfig, RunMetrics, RunSummary, Simulation, SimulationConfig, SimulationError,
        StepMetrics,
    };
}
