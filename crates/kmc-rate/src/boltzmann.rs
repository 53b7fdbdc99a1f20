//! Symmetric Boltzmann rate model: `ν·exp(-ΔE/2kT)`.
//!
//! Forward and reverse hops split the energy change evenly, so the ratio
//! of their rates is `exp(-ΔE/kT)` and detailed balance holds, as with
//! [`Metropolis`](crate::Metropolis), but downhill hops are accelerated
//! instead of capped.
//!
//! Rates saturate at `exp(MAX_LOG_RATE)` so that steep downhill hops at
//! low temperature stay finite. Detailed balance holds for every pair of
//! hops whose rates are both below the cap.

use kmc_core::ConfigError;

use crate::environment::JumpEnvironment;
use crate::model::{thermal_energy, validate_thermal, RateModel};

/// Natural log of the largest rate [`Boltzmann`] returns.
///
/// Leaves headroom under `f64::MAX` so that summing the rates of many
/// saturated hops stays finite.
pub const MAX_LOG_RATE: f64 = 600.0;

/// Symmetric Boltzmann rates.
#[derive(Clone, Debug, PartialEq)]
pub struct Boltzmann {
    kt: f64,
    prefactor: f64,
}

impl Boltzmann {
    /// Create a model at `temperature` kelvin with attempt frequency
    /// `prefactor`.
    pub fn new(temperature: f64, prefactor: f64) -> Result<Self, ConfigError> {
        validate_thermal(temperature, prefactor)?;
        Ok(Self {
            kt: thermal_energy(temperature),
            prefactor,
        })
    }

    /// `kT` in eV.
    pub fn kt(&self) -> f64 {
        self.kt
    }
}

impl RateModel for Boltzmann {
    fn name(&self) -> &str {
        "Boltzmann"
    }

    fn rate(&self, env: &JumpEnvironment<'_>) -> f64 {
        if self.prefactor == 0.0 {
            return 0.0;
        }
        let log_rate = self.prefactor.ln() - 0.5 * env.delta_energy() / self.kt;
        log_rate.min(MAX_LOG_RATE).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kmc_core::SiteLabel;
    use proptest::prelude::*;

    fn hop(label: &SiteLabel, source_energy: f64, target_energy: f64) -> JumpEnvironment<'_> {
        JumpEnvironment {
            source_label: label,
            target_label: label,
            source_energy,
            target_energy,
            source_occupied_neighbours: 0,
            target_occupied_neighbours: 0,
            nearest_neighbour_energy: 0.0,
        }
    }

    #[test]
    fn forward_reverse_ratio_is_boltzmann_factor() {
        let label = SiteLabel::from("A");
        let model = Boltzmann::new(500.0, 1.0).unwrap();
        let forward = JumpEnvironment {
            source_label: &label,
            target_label: &label,
            source_energy: 0.0,
            target_energy: 0.08,
            source_occupied_neighbours: 0,
            target_occupied_neighbours: 0,
            nearest_neighbour_energy: 0.0,
        };
        let reverse = JumpEnvironment {
            source_energy: 0.08,
            target_energy: 0.0,
            ..forward
        };
        let ratio = model.rate(&forward) / model.rate(&reverse);
        assert!((ratio - (-0.08 / model.kt()).exp()).abs() < 1e-12);
    }

    #[test]
    fn rejects_negative_prefactor() {
        assert!(Boltzmann::new(300.0, -1.0).is_err());
    }

    #[test]
    fn steep_downhill_at_low_temperature_saturates() {
        let label = SiteLabel::from("A");
        let model = Boltzmann::new(1.0, 1.0).unwrap();
        let rate = model.rate(&hop(&label, 0.0, -0.2));
        assert!(rate.is_finite());
        assert_eq!(rate, MAX_LOG_RATE.exp());
        assert!((rate * 1.0e4).is_finite());

        let uphill = model.rate(&hop(&label, -0.2, 0.0));
        assert!(uphill.is_finite());
        assert!(uphill >= 0.0);
    }

    #[test]
    fn zero_prefactor_gives_zero_rate() {
        let label = SiteLabel::from("A");
        let model = Boltzmann::new(1.0, 0.0).unwrap();
        assert_eq!(model.rate(&hop(&label, 0.0, -5.0)), 0.0);
        assert_eq!(model.rate(&hop(&label, 0.0, 5.0)), 0.0);
    }

    proptest! {
        #[test]
        fn rate_is_finite_and_non_negative(
            temperature in 1.0e-3f64..1.0e4,
            prefactor in 0.0f64..1.0e13,
            delta in -10.0f64..10.0,
        ) {
            let label = SiteLabel::from("A");
            let model = Boltzmann::new(temperature, prefactor).unwrap();
            let rate = model.rate(&hop(&label, 0.0, delta));
            prop_assert!(rate.is_finite());
            prop_assert!(rate >= 0.0);
        }

        #[test]
        fn detailed_balance_below_cap(
            temperature in 200.0f64..2000.0,
            prefactor in 1.0e-3f64..1.0e13,
            delta in -1.0f64..1.0,
        ) {
            let label = SiteLabel::from("A");
            let model = Boltzmann::new(temperature, prefactor).unwrap();
            let forward = model.rate(&hop(&label, 0.0, delta));
            let reverse = model.rate(&hop(&label, delta, 0.0));
            let expected = (-delta / model.kt()).exp();
            prop_assert!((forward / reverse - expected).abs() <= 1e-9 * expected);
        }
    }
}
