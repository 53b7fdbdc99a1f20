//! Metropolis rate model.
//!
//! Downhill and level hops proceed at the attempt frequency `ν`; uphill
//! hops are suppressed by `exp(-ΔE/kT)`. This is the default model of a
//! lattice. With no energies configured every hop has `ΔE = 0` and the
//! model reduces to uniform rates.
//!
//! Constructed via the builder pattern: [`Metropolis::builder`].

use kmc_core::ConfigError;

use crate::environment::JumpEnvironment;
use crate::model::{thermal_energy, validate_thermal, RateModel, ROOM_TEMPERATURE_K};

/// Metropolis acceptance rates.
#[derive(Clone, Debug, PartialEq)]
pub struct Metropolis {
    kt: f64,
    prefactor: f64,
}

/// Builder for [`Metropolis`].
pub struct MetropolisBuilder {
    temperature: f64,
    prefactor: f64,
}

impl Metropolis {
    /// Create a builder (default: 298 K, prefactor 1).
    pub fn builder() -> MetropolisBuilder {
        MetropolisBuilder {
            temperature: ROOM_TEMPERATURE_K,
            prefactor: 1.0,
        }
    }

    /// `kT` in eV.
    pub fn kt(&self) -> f64 {
        self.kt
    }

    /// Attempt frequency `ν`.
    pub fn prefactor(&self) -> f64 {
        self.prefactor
    }
}

impl Default for Metropolis {
    fn default() -> Self {
        Self {
            kt: thermal_energy(ROOM_TEMPERATURE_K),
            prefactor: 1.0,
        }
    }
}

impl MetropolisBuilder {
    /// Temperature in kelvin (default 298). Must be finite and positive.
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Attempt frequency (default 1). Must be finite and >= 0.
    pub fn prefactor(mut self, prefactor: f64) -> Self {
        self.prefactor = prefactor;
        self
    }

    /// Build the model, validating parameters.
    pub fn build(self) -> Result<Metropolis, ConfigError> {
        validate_thermal(self.temperature, self.prefactor)?;
        Ok(Metropolis {
            kt: thermal_energy(self.temperature),
            prefactor: self.prefactor,
        })
    }
}

impl RateModel for Metropolis {
    fn name(&self) -> &str {
        "Metropolis"
    }

    fn rate(&self, env: &JumpEnvironment<'_>) -> f64 {
        let delta = env.delta_energy();
        if delta <= 0.0 {
            self.prefactor
        } else {
            self.prefactor * (-delta / self.kt).exp()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kmc_core::SiteLabel;
    use proptest::prelude::*;

    fn env_with_delta(label: &SiteLabel, delta: f64) -> JumpEnvironment<'_> {
        JumpEnvironment {
            source_label: label,
            target_label: label,
            source_energy: 0.0,
            target_energy: delta,
            source_occupied_neighbours: 0,
            target_occupied_neighbours: 0,
            nearest_neighbour_energy: 0.0,
        }
    }

    #[test]
    fn downhill_and_level_hops_at_prefactor() {
        let label = SiteLabel::from("A");
        let m = Metropolis::builder().prefactor(2.5).build().unwrap();
        assert_eq!(m.rate(&env_with_delta(&label, -0.3)), 2.5);
        assert_eq!(m.rate(&env_with_delta(&label, 0.0)), 2.5);
    }

    #[test]
    fn uphill_hops_suppressed() {
        let label = SiteLabel::from("A");
        let m = Metropolis::default();
        let r = m.rate(&env_with_delta(&label, 0.1));
        let expected = (-0.1 / m.kt()).exp();
        assert!((r - expected).abs() < 1e-15);
        assert!(r < 1.0);
    }

    #[test]
    fn hotter_means_faster_uphill() {
        let label = SiteLabel::from("A");
        let cold = Metropolis::builder().temperature(100.0).build().unwrap();
        let hot = Metropolis::builder().temperature(1000.0).build().unwrap();
        let e = env_with_delta(&label, 0.05);
        assert!(hot.rate(&e) > cold.rate(&e));
    }

    #[test]
    fn builder_rejects_zero_temperature() {
        match Metropolis::builder().temperature(0.0).build() {
            Err(ConfigError::InvalidRateParameter { .. }) => {}
            other => panic!("expected InvalidRateParameter, got {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn rate_bounded_by_prefactor(
            temperature in 1.0e-3f64..1.0e4,
            prefactor in 0.0f64..1.0e13,
            delta in -10.0f64..10.0,
        ) {
            let label = SiteLabel::from("A");
            let m = Metropolis::builder()
                .temperature(temperature)
                .prefactor(prefactor)
                .build()
                .unwrap();
            let r = m.rate(&env_with_delta(&label, delta));
            prop_assert!(r.is_finite());
            prop_assert!(r >= 0.0);
            prop_assert!(r <= prefactor);
        }
    }
}
