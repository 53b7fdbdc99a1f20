//! Constant-rate model.

use kmc_core::ConfigError;

use crate::environment::JumpEnvironment;
use crate::model::RateModel;

/// Every hop has the same rate, whatever the energies.
#[derive(Clone, Debug, PartialEq)]
pub struct Uniform {
    rate: f64,
}

impl Uniform {
    /// Create a model with the given rate. Must be finite and positive.
    pub fn new(rate: f64) -> Result<Self, ConfigError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ConfigError::InvalidRateParameter {
                reason: format!("uniform rate must be finite and positive, got {rate}"),
            });
        }
        Ok(Self { rate })
    }
}

impl Default for Uniform {
    fn default() -> Self {
        Self { rate: 1.0 }
    }
}

impl RateModel for Uniform {
    fn name(&self) -> &str {
        "Uniform"
    }

    fn rate(&self, _env: &JumpEnvironment<'_>) -> f64 {
        self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kmc_core::SiteLabel;

    #[test]
    fn ignores_energies() {
        let a = SiteLabel::from("A");
        let model = Uniform::new(3.0).unwrap();
        let env = JumpEnvironment {
            source_label: &a,
            target_label: &a,
            source_energy: -5.0,
            target_energy: 5.0,
            source_occupied_neighbours: 0,
            target_occupied_neighbours: 6,
            nearest_neighbour_energy: 1.0,
        };
        assert_eq!(model.rate(&env), 3.0);
    }

    #[test]
    fn rejects_zero_rate() {
        assert!(Uniform::new(0.0).is_err());
        assert!(Uniform::new(f64::NAN).is_err());
    }
}
