//! Simulation configuration, validation, and error types.
//!
//! [`SimulationConfig`] is the input for constructing a
//! [`Simulation`](crate::Simulation). [`validate()`](SimulationConfig::validate)
//! checks the cheap structural invariants up front; the lattice
//! constructor then checks ids and neighbour lists.

use std::error::Error;
use std::fmt;

use indexmap::IndexMap;
use kmc_core::{ConfigError, SiteLabel, TransitionError, Vec3};
use kmc_lattice::Site;
use kmc_rate::{Boltzmann, LookupTable, Metropolis, RateModel, Uniform, ROOM_TEMPERATURE_K};

// ── RateModelConfig ────────────────────────────────────────────────

/// Which rate model the lattice uses.
pub enum RateModelConfig {
    /// [`Metropolis`] acceptance at `temperature` (K).
    Metropolis {
        /// Temperature in kelvin.
        temperature: f64,
        /// Attempt frequency.
        prefactor: f64,
    },
    /// Symmetric [`Boltzmann`] rates at `temperature` (K).
    Boltzmann {
        /// Temperature in kelvin.
        temperature: f64,
        /// Attempt frequency.
        prefactor: f64,
    },
    /// The same rate for every hop.
    Uniform {
        /// The rate.
        rate: f64,
    },
    /// Tabulated rates.
    LookupTable(LookupTable),
    /// Any other model.
    Custom(Box<dyn RateModel>),
}

impl Default for RateModelConfig {
    /// Metropolis at room temperature with unit prefactor.
    fn default() -> Self {
        Self::Metropolis {
            temperature: ROOM_TEMPERATURE_K,
            prefactor: 1.0,
        }
    }
}

impl RateModelConfig {
    /// Build the model, validating its parameters.
    pub fn build(self) -> Result<Box<dyn RateModel>, ConfigError> {
        let model: Box<dyn RateModel> = match self {
            Self::Metropolis {
                temperature,
                prefactor,
            } => Box::new(
                Metropolis::builder()
                    .temperature(temperature)
                    .prefactor(prefactor)
                    .build()?,
            ),
            Self::Boltzmann {
                temperature,
                prefactor,
            } => Box::new(Boltzmann::new(temperature, prefactor)?),
            Self::Uniform { rate } => Box::new(Uniform::new(rate)?),
            Self::LookupTable(table) => Box::new(table),
            Self::Custom(model) => model,
        };
        Ok(model)
    }

    fn name(&self) -> &str {
        match self {
            Self::Metropolis { .. } => "Metropolis",
            Self::Boltzmann { .. } => "Boltzmann",
            Self::Uniform { .. } => "Uniform",
            Self::LookupTable(_) => "LookupTable",
            Self::Custom(model) => model.name(),
        }
    }
}

impl fmt::Debug for RateModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── SimulationError ────────────────────────────────────────────────

/// Errors from constructing, resetting or running a simulation.
#[derive(Debug, PartialEq)]
pub enum SimulationError {
    /// The configuration is invalid.
    Config(ConfigError),
    /// A step failed (for example the rate model produced NaN).
    Transition(TransitionError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Transition(e) => write!(f, "transition: {e}"),
        }
    }
}

impl Error for SimulationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Transition(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SimulationError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<TransitionError> for SimulationError {
    fn from(e: TransitionError) -> Self {
        Self::Transition(e)
    }
}

// ── SimulationConfig ───────────────────────────────────────────────

/// Complete configuration for constructing a simulation.
///
/// Start from [`new()`](SimulationConfig::new) and set the public fields.
#[derive(Debug)]
pub struct SimulationConfig {
    /// Lattice sites.
    pub sites: Vec<Site>,
    /// Orthorhombic cell lengths.
    pub cell_lengths: Vec3,
    /// Number of particles to place. Default: 0.
    pub particles: usize,
    /// Restrict initial placement to sites with these labels. `None`
    /// (the default) allows every site.
    pub populate_labels: Option<Vec<SiteLabel>>,
    /// Site energy per label. Default: empty (all energies 0).
    pub site_energies: IndexMap<SiteLabel, f64>,
    /// Nearest-neighbour interaction energy. Default: 0.
    pub nearest_neighbour_energy: f64,
    /// Rate model. Default: Metropolis at room temperature.
    pub rate_model: RateModelConfig,
    /// RNG seed. Default: 0.
    pub seed: u64,
    /// Steps run and discarded after population. Default: 0.
    pub equilibration_steps: u64,
}

impl SimulationConfig {
    /// A configuration with every optional setting at its default.
    pub fn new(sites: Vec<Site>, cell_lengths: Vec3) -> Self {
        Self {
            sites,
            cell_lengths,
            particles: 0,
            populate_labels: None,
            site_energies: IndexMap::new(),
            nearest_neighbour_energy: 0.0,
            rate_model: RateModelConfig::default(),
            seed: 0,
            equilibration_steps: 0,
        }
    }

    /// Validate the structural invariants that do not need a lattice.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Cell lengths finite and positive.
        for (axis, &value) in self.cell_lengths.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveCellLength { axis, value });
            }
        }
        // 2. At least one site.
        if self.sites.is_empty() {
            return Err(ConfigError::EmptyLattice);
        }
        // 3. Enough candidate sites for the particles.
        let available = match &self.populate_labels {
            None => self.sites.len(),
            Some(labels) => self
                .sites
                .iter()
                .filter(|s| labels.contains(s.label()))
                .count(),
        };
        if self.particles > available {
            return Err(ConfigError::PopulationExceedsSites {
                requested: self.particles,
                available,
            });
        }
        // 4. Energies finite.
        if let Some((label, energy)) = self.site_energies.iter().find(|(_, e)| !e.is_finite()) {
            return Err(ConfigError::InvalidEnergy {
                reason: format!("site energy for label '{label}' is {energy}"),
            });
        }
        if !self.nearest_neighbour_energy.is_finite() {
            return Err(ConfigError::InvalidEnergy {
                reason: format!(
                    "nearest-neighbour energy is {}",
                    self.nearest_neighbour_energy
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kmc_test_utils::fixtures::ConstRate;
    use kmc_test_utils::{alternating_ring_sites, ring_cell, ring_sites};

    fn ring_config() -> SimulationConfig {
        SimulationConfig::new(ring_sites(10), ring_cell(10))
    }

    #[test]
    fn defaults_validate() {
        let config = ring_config();
        assert_eq!(config.particles, 0);
        assert_eq!(config.seed, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_cell() {
        let mut config = ring_config();
        config.cell_lengths = [10.0, 0.0, 1.0];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveCellLength { axis: 1, .. })
        ));
    }

    #[test]
    fn rejects_empty_sites() {
        let config = SimulationConfig::new(Vec::new(), [1.0; 3]);
        assert_eq!(config.validate(), Err(ConfigError::EmptyLattice));
    }

    #[test]
    fn rejects_overfull_population() {
        let mut config = ring_config();
        config.particles = 11;
        assert_eq!(
            config.validate(),
            Err(ConfigError::PopulationExceedsSites {
                requested: 11,
                available: 10
            })
        );
    }

    #[test]
    fn population_limit_respects_labels() {
        let mut config = SimulationConfig::new(alternating_ring_sites(10), ring_cell(10));
        config.populate_labels = Some(vec![SiteLabel::new("B")]);
        config.particles = 5;
        assert!(config.validate().is_ok());
        config.particles = 6;
        assert_eq!(
            config.validate(),
            Err(ConfigError::PopulationExceedsSites {
                requested: 6,
                available: 5
            })
        );
    }

    #[test]
    fn rejects_non_finite_energies() {
        let mut config = ring_config();
        config.site_energies.insert(SiteLabel::new("A"), f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEnergy { .. })
        ));

        let mut config = ring_config();
        config.nearest_neighbour_energy = f64::NEG_INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEnergy { .. })
        ));
    }

    #[test]
    fn rate_model_configs_build() {
        assert_eq!(
            RateModelConfig::default().build().unwrap().name(),
            "Metropolis"
        );
        let boltzmann = RateModelConfig::Boltzmann {
            temperature: 500.0,
            prefactor: 2.0,
        };
        assert_eq!(boltzmann.build().unwrap().name(), "Boltzmann");
        let custom = RateModelConfig::Custom(Box::new(ConstRate::new(3.0)));
        assert_eq!(format!("{custom:?}"), "ConstRate");
        assert_eq!(custom.build().unwrap().name(), "ConstRate");
    }

    #[test]
    fn rate_model_parameters_validated() {
        let bad = RateModelConfig::Uniform { rate: -1.0 };
        assert!(matches!(
            bad.build(),
            Err(ConfigError::InvalidRateParameter { .. })
        ));
        let bad = RateModelConfig::Metropolis {
            temperature: 0.0,
            prefactor: 1.0,
        };
        assert!(bad.build().is_err());
    }

    #[test]
    fn simulation_error_wraps_sources() {
        let err: SimulationError = TransitionError::NoTransitionsAvailable.into();
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "transition: no transitions available");
        let err: SimulationError = ConfigError::EmptyLattice.into();
        assert!(matches!(err, SimulationError::Config(ConfigError::EmptyLattice)));
    }
}
