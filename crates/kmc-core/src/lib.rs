//! Core types for lattice kinetic Monte Carlo.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: site and particle
//! identifiers, site labels, periodic-cell geometry helpers and the
//! error enums for configuration, transition sampling and statistics.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod id;

pub use error::{ConfigError, StatisticsError, TransitionError};
pub use geometry::Vec3;
pub use id::{ParticleId, SiteId, SiteLabel};
