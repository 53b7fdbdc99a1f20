//! Seeded simulation runs.
//!
//! [`Simulation`] owns a [`Lattice`] and the single random source that
//! drives it. Construction validates the configuration, applies energies
//! and the rate model, places the particles and runs any equilibration
//! steps. After that the clock, occupied times and particle counters start
//! from zero.
//!
//! # Determinism
//!
//! The random source is a `ChaCha8Rng` seeded from
//! [`SimulationConfig::seed`]. Two simulations built from equal
//! configurations and driven by the same call sequence produce identical
//! trajectories and equal [`state_hash()`](Simulation::state_hash)es.
//!
//! # Ownership model
//!
//! `Simulation` is [`Send`] so independent trajectories can run on
//! separate threads. All mutating methods take `&mut self`.

use std::fmt;
use std::time::Instant;

use indexmap::IndexMap;
use kmc_core::{ConfigError, SiteLabel, StatisticsError, TransitionError};
use kmc_lattice::{Lattice, StepOutcome};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::config::{SimulationConfig, SimulationError};
use crate::hash::lattice_hash;
use crate::metrics::{RunMetrics, StepMetrics};

// Compile-time assertion: Simulation is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

// ── RunSummary ──────────────────────────────────────────────────

/// Result of [`Simulation::run`] or [`Simulation::run_for_time`].
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Steps that moved a particle.
    pub jumps: u64,
    /// Simulated time at the start of the run.
    pub start_time: f64,
    /// Simulated time at the end of the run.
    pub end_time: f64,
    /// Whether the run stopped early because no transition was possible.
    pub deadlocked: bool,
}

impl RunSummary {
    /// Simulated time covered by the run.
    pub fn elapsed(&self) -> f64 {
        self.end_time - self.start_time
    }
}

// ── Simulation ──────────────────────────────────────────────────

/// A lattice together with its seeded random source and run metrics.
///
/// # Examples
///
/// ```
/// use kmc_engine::{Simulation, SimulationConfig};
/// use kmc_lattice::Site;
///
/// let sites: Vec<Site> = (0..10u32)
///     .map(|i| Site::new(i, [i as f64, 0.0, 0.0], "A", [(i + 9) % 10, (i + 1) % 10]))
///     .collect();
/// let mut config = SimulationConfig::new(sites, [10.0, 1.0, 1.0]);
/// config.particles = 5;
/// config.seed = 7;
///
/// let mut sim = Simulation::new(config).unwrap();
/// let summary = sim.run(100).unwrap();
/// assert_eq!(summary.jumps, 100);
/// assert!(sim.time() > 0.0);
/// ```
pub struct Simulation {
    lattice: Lattice,
    rng: ChaCha8Rng,
    seed: u64,
    particles: usize,
    populate_labels: Option<Vec<SiteLabel>>,
    equilibration_steps: u64,
    last_metrics: StepMetrics,
    metrics: RunMetrics,
}

impl Simulation {
    /// Create a simulation from a [`SimulationConfig`].
    ///
    /// Validates the configuration, builds the lattice, applies energies
    /// and the rate model, seeds the random source, places the particles,
    /// runs `equilibration_steps` steps and then zeroes the clock,
    /// occupied times and particle counters.
    ///
    /// # Errors
    ///
    /// [`SimulationError::Config`] for an invalid configuration;
    /// [`SimulationError::Transition`] if the rate model fails during
    /// equilibration.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let SimulationConfig {
            sites,
            cell_lengths,
            particles,
            populate_labels,
            site_energies,
            nearest_neighbour_energy,
            rate_model,
            seed,
            equilibration_steps,
        } = config;

        let mut lattice = Lattice::new(sites, cell_lengths)?;
        lattice.set_site_energies(site_energies)?;
        lattice.set_nearest_neighbour_energy(nearest_neighbour_energy)?;
        lattice.set_rate_model(rate_model.build()?);

        let mut sim = Self {
            lattice,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            particles,
            populate_labels,
            equilibration_steps,
            last_metrics: StepMetrics::default(),
            metrics: RunMetrics::default(),
        };
        sim.prepare()?;
        debug!(
            seed,
            sites = sim.lattice.number_of_sites(),
            particles,
            rate_model = sim.lattice.rate_model_name(),
            "simulation constructed"
        );
        Ok(sim)
    }

    /// Populate, equilibrate and zero the counters.
    fn prepare(&mut self) -> Result<(), SimulationError> {
        match &self.populate_labels {
            None => self.lattice.populate(self.particles, &mut self.rng)?,
            Some(labels) => {
                self.lattice
                    .populate_labelled(self.particles, labels.as_slice(), &mut self.rng)?
            }
        };

        let mut taken = 0;
        while taken < self.equilibration_steps {
            if self.lattice.step(&mut self.rng)?.is_deadlock() {
                debug!(steps = taken, "equilibration stopped at deadlock");
                break;
            }
            taken += 1;
        }
        if self.equilibration_steps > 0 {
            debug!(
                steps = taken,
                time = self.lattice.time(),
                "equilibration finished"
            );
        }

        self.lattice.reset();
        self.lattice.reset_particles();
        self.last_metrics = StepMetrics::default();
        self.metrics = RunMetrics::default();
        Ok(())
    }

    /// Execute one step and record its metrics.
    ///
    /// # Errors
    ///
    /// [`TransitionError::InvalidRate`] if the rate model produced an
    /// invalid rate. The lattice and metrics are unchanged.
    pub fn step(&mut self) -> Result<StepOutcome, TransitionError> {
        let start = Instant::now();
        let transitions = self.lattice.transitions()?;
        let enumerated = Instant::now();

        let sampled = match transitions.sample(&mut self.rng) {
            Ok(sampled) => Some(sampled),
            Err(TransitionError::NoTransitionsAvailable) => None,
            Err(e) => return Err(e),
        };
        let sampled_at = Instant::now();

        let outcome = match sampled {
            Some((jump, waiting_time)) => {
                StepOutcome::Jumped(self.lattice.commit(jump, waiting_time)?)
            }
            None => StepOutcome::NoTransitionsAvailable,
        };
        let done = Instant::now();

        let metrics = StepMetrics {
            total_us: (done - start).as_micros() as u64,
            enumeration_us: (enumerated - start).as_micros() as u64,
            sampling_us: (sampled_at - enumerated).as_micros() as u64,
            update_us: (done - sampled_at).as_micros() as u64,
            candidates: transitions.len(),
            total_rate: transitions.total_rate(),
            waiting_time: outcome.waiting_time(),
        };
        self.metrics.record(&metrics, !outcome.is_deadlock());
        self.last_metrics = metrics;

        match &outcome {
            StepOutcome::Jumped(record) => trace!(
                particle = record.particle.0,
                source = record.source.0,
                target = record.target.0,
                waiting_time = record.waiting_time,
                time = self.lattice.time(),
                "jump"
            ),
            StepOutcome::NoTransitionsAvailable => {
                debug!(time = self.lattice.time(), "no transitions available")
            }
        }
        Ok(outcome)
    }

    /// Run up to `steps` steps, stopping early on deadlock.
    ///
    /// # Errors
    ///
    /// As [`step()`](Self::step). Steps completed before the error are kept.
    pub fn run(&mut self, steps: u64) -> Result<RunSummary, TransitionError> {
        let start_time = self.lattice.time();
        let mut jumps = 0;
        let mut deadlocked = false;
        while jumps < steps {
            if self.step()?.is_deadlock() {
                deadlocked = true;
                break;
            }
            jumps += 1;
        }
        let summary = RunSummary {
            jumps,
            start_time,
            end_time: self.lattice.time(),
            deadlocked,
        };
        debug!(jumps, deadlocked, time = summary.end_time, "run finished");
        Ok(summary)
    }

    /// Step until at least `duration` of simulated time has passed, or
    /// until deadlock.
    ///
    /// The last step usually overshoots: `summary.elapsed() >= duration`
    /// unless the run deadlocked.
    ///
    /// # Errors
    ///
    /// [`SimulationError::Config`] with [`ConfigError::InvalidHorizon`]
    /// for a negative or non-finite `duration` (nothing is run);
    /// [`SimulationError::Transition`] as [`step()`](Self::step).
    pub fn run_for_time(&mut self, duration: f64) -> Result<RunSummary, SimulationError> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(ConfigError::InvalidHorizon { value: duration }.into());
        }
        let start_time = self.lattice.time();
        let horizon = start_time + duration;
        let mut jumps = 0;
        let mut deadlocked = false;
        while self.lattice.time() < horizon {
            if self.step()?.is_deadlock() {
                deadlocked = true;
                break;
            }
            jumps += 1;
        }
        let summary = RunSummary {
            jumps,
            start_time,
            end_time: self.lattice.time(),
            deadlocked,
        };
        debug!(
            jumps,
            deadlocked,
            time = summary.end_time,
            "timed run finished"
        );
        Ok(summary)
    }

    /// Restart with a new seed.
    ///
    /// Reseeds the random source, places the particles afresh, runs the
    /// configured equilibration and zeroes the clock, occupied times,
    /// particle counters and metrics. A reset to seed `s` reproduces the
    /// state of a fresh simulation configured with seed `s`.
    ///
    /// # Errors
    ///
    /// [`SimulationError::Transition`] if the rate model fails during
    /// equilibration.
    pub fn reset(&mut self, seed: u64) -> Result<(), SimulationError> {
        self.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.lattice.reset();
        self.prepare()?;
        debug!(seed, "simulation reset");
        Ok(())
    }

    // ── Accessors ───────────────────────────────────────────────

    /// The lattice.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Current simulated time.
    pub fn time(&self) -> f64 {
        self.lattice.time()
    }

    /// The seed of the current trajectory.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Metrics accumulated since construction or the last reset.
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    /// FNV-1a hash of the lattice's dynamic state.
    pub fn state_hash(&self) -> u64 {
        lattice_hash(&self.lattice)
    }

    /// Time-averaged occupation per site label.
    ///
    /// # Errors
    ///
    /// [`StatisticsError::UndefinedStatistic`] before any time has elapsed.
    pub fn site_occupation_statistics(&self) -> Result<IndexMap<SiteLabel, f64>, StatisticsError> {
        self.lattice.site_occupation_statistics()
    }
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("seed", &self.seed)
            .field("time", &self.lattice.time())
            .field("particles", &self.particles)
            .field("steps", &self.metrics.steps)
            .finish()
    }
}
