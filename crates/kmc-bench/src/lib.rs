//! Benchmark profiles for the kmc crates.
//!
//! Provides pre-built [`SimulationConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 16×16×16 simple cubic lattice (4096 sites),
//!   10% filled, with nearest-neighbour interactions
//! - [`dense_profile`]: the same lattice 90% filled, which takes the
//!   vacancy-driven enumeration path

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use kmc_core::SiteLabel;
use kmc_engine::SimulationConfig;
use kmc_test_utils::simple_cubic_sites;

/// Edge length of the benchmark lattice.
pub const EDGE: u32 = 16;

fn cubic_profile(seed: u64, fill: f64) -> SimulationConfig {
    let sites = simple_cubic_sites(EDGE);
    let particles = (sites.len() as f64 * fill).round() as usize;
    let l = f64::from(EDGE);
    let mut config = SimulationConfig::new(sites, [l, l, l]);
    config.particles = particles;
    config.seed = seed;
    config.site_energies.insert(SiteLabel::new("A"), 0.0);
    config.nearest_neighbour_energy = 0.01;
    config
}

/// Build the reference benchmark profile: 4096 sites, 410 particles.
pub fn reference_profile(seed: u64) -> SimulationConfig {
    cubic_profile(seed, 0.1)
}

/// Build the dense benchmark profile: 4096 sites, 3686 particles.
pub fn dense_profile(seed: u64) -> SimulationConfig {
    cubic_profile(seed, 0.9)
}
