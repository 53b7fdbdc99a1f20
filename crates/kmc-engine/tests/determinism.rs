//! Determinism verification integration tests.
//!
//! Each test: build a config → run N steps recording (jump, Δt) and the
//! state hash after every step → rebuild the same config → run again →
//! compare step by step.

use kmc_core::SiteLabel;
use kmc_engine::{RateModelConfig, Simulation, SimulationConfig};
use kmc_lattice::StepOutcome;
use kmc_rate::LookupTable;
use kmc_test_utils::{alternating_ring_sites, ring_cell, simple_cubic_sites, square_sites};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────

fn cubic_config(seed: u64) -> SimulationConfig {
    let mut config = SimulationConfig::new(simple_cubic_sites(4), [4.0, 4.0, 4.0]);
    config.particles = 20;
    config.seed = seed;
    config.nearest_neighbour_energy = 0.02;
    config.equilibration_steps = 50;
    config
}

fn energetic_config(seed: u64) -> SimulationConfig {
    let mut config = SimulationConfig::new(alternating_ring_sites(16), ring_cell(16));
    config.particles = 6;
    config.seed = seed;
    config.site_energies.insert(SiteLabel::new("A"), 0.0);
    config.site_energies.insert(SiteLabel::new("B"), -0.05);
    config.rate_model = RateModelConfig::Boltzmann {
        temperature: 400.0,
        prefactor: 1.0e3,
    };
    config
}

/// Step `steps` times, recording each outcome and the hash after it.
fn record(sim: &mut Simulation, steps: usize) -> Vec<(StepOutcome, u64)> {
    (0..steps)
        .map(|_| {
            let outcome = sim.step().unwrap();
            (outcome, sim.state_hash())
        })
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────

#[test]
fn same_seed_same_trajectory() {
    let mut a = Simulation::new(cubic_config(42)).unwrap();
    let mut b = Simulation::new(cubic_config(42)).unwrap();
    assert_eq!(a.state_hash(), b.state_hash());
    let ra = record(&mut a, 500);
    let rb = record(&mut b, 500);
    for (tick, (x, y)) in ra.iter().zip(&rb).enumerate() {
        assert_eq!(x, y, "divergence at step {tick}");
    }
    assert_eq!(a.time(), b.time());
}

#[test]
fn different_seeds_diverge() {
    let mut a = Simulation::new(cubic_config(1)).unwrap();
    let mut b = Simulation::new(cubic_config(2)).unwrap();
    a.run(100).unwrap();
    b.run(100).unwrap();
    assert_ne!(a.state_hash(), b.state_hash());
}

#[test]
fn energetic_model_replays() {
    let mut a = Simulation::new(energetic_config(7)).unwrap();
    let mut b = Simulation::new(energetic_config(7)).unwrap();
    assert_eq!(record(&mut a, 300), record(&mut b, 300));
}

#[test]
fn reset_replays_from_seed() {
    let mut sim = Simulation::new(cubic_config(5)).unwrap();
    let first = record(&mut sim, 200);
    sim.reset(5).unwrap();
    let second = record(&mut sim, 200);
    assert_eq!(first, second);
}

#[test]
fn run_and_run_for_time_share_one_stream() {
    // run(n) consumes exactly the draws of n steps.
    let mut a = Simulation::new(cubic_config(8)).unwrap();
    let mut b = Simulation::new(cubic_config(8)).unwrap();
    a.run(150).unwrap();
    for _ in 0..150 {
        b.step().unwrap();
    }
    assert_eq!(a.state_hash(), b.state_hash());

    let ta = a.run_for_time(0.5).unwrap();
    let tb = b.run_for_time(0.5).unwrap();
    assert_eq!(ta, tb);
    assert_eq!(a.state_hash(), b.state_hash());
}

#[test]
fn lookup_table_model_replays() {
    let mut builder = LookupTable::builder();
    for ns in 0..=2 {
        for nt in 0..=2 {
            builder = builder.rate("A", "A", ns, nt, 1.0 + ns as f64 - 0.25 * nt as f64);
        }
    }
    let table = builder.build().unwrap();
    let make = || {
        let mut config = SimulationConfig::new(square_sites(5, 4), [5.0, 4.0, 1.0]);
        config.particles = 8;
        config.seed = 13;
        config.rate_model = RateModelConfig::LookupTable(table.clone());
        Simulation::new(config).unwrap()
    };
    let mut a = make();
    let mut b = make();
    assert_eq!(record(&mut a, 200), record(&mut b, 200));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn any_seed_replays(seed in any::<u64>(), steps in 1usize..120) {
        let mut a = Simulation::new(cubic_config(seed)).unwrap();
        let mut b = Simulation::new(cubic_config(seed)).unwrap();
        prop_assert_eq!(record(&mut a, steps), record(&mut b, steps));
    }
}
