//! Periodic lattices and the kinetic Monte Carlo step.
//!
//! A [`Lattice`] holds [`Site`]s, mobile [`Particle`]s and a simulated-time
//! clock. Each [`Lattice::step`] enumerates the possible hops
//! ([`Jump`]s) into a [`TransitionSet`], samples one in proportion to its
//! rate together with an exponentially distributed waiting time, and
//! applies it.
//!
//! # Geometry
//!
//! The cell is orthorhombic and periodic on all three axes. Site positions
//! are wrapped into the cell at construction, and hop vectors use the
//! minimum-image convention.
//!
//! # Rates
//!
//! Rates come from a [`kmc_rate::RateModel`] held by the lattice. With no
//! energies configured every hop has rate 1.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod jump;
pub mod lattice;
pub mod outcome;
pub mod particle;
pub mod site;
mod stats;
pub mod transitions;

pub use jump::{displacement_between, Jump};
pub use lattice::Lattice;
pub use outcome::{JumpRecord, StepOutcome};
pub use particle::Particle;
pub use site::Site;
pub use transitions::TransitionSet;
