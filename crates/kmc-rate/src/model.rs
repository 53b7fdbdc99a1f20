//! The [`RateModel`] trait and physical constants.

use crate::environment::JumpEnvironment;

/// Boltzmann constant in eV/K.
pub const BOLTZMANN_CONSTANT_EV: f64 = 8.617_330_3e-5;

/// Default temperature for the reference models, in kelvin.
pub const ROOM_TEMPERATURE_K: f64 = 298.0;

/// An energy-to-rate policy for candidate hops.
///
/// # Contract
///
/// - `rate()` MUST be deterministic: the same environment produces the
///   same rate.
/// - The returned rate must be finite and non-negative. A zero rate is
///   allowed; such a hop is never selected. Anything else is rejected
///   by the transition set and aborts the step without mutating state.
/// - `&self`: models are stateless; everything they need arrives in the
///   [`JumpEnvironment`].
///
/// # Object safety
///
/// This trait is object-safe; the lattice stores the active model as
/// `Box<dyn RateModel>`.
///
/// # Examples
///
/// A model that only lets particles hop between sites with the same label:
///
/// ```
/// use kmc_rate::{JumpEnvironment, RateModel};
///
/// struct SameLabelOnly;
///
/// impl RateModel for SameLabelOnly {
///     fn name(&self) -> &str { "same_label_only" }
///
///     fn rate(&self, env: &JumpEnvironment<'_>) -> f64 {
///         if env.source_label == env.target_label { 1.0 } else { 0.0 }
///     }
/// }
///
/// assert_eq!(SameLabelOnly.name(), "same_label_only");
/// ```
pub trait RateModel: Send + 'static {
    /// Human-readable name for diagnostics.
    fn name(&self) -> &str;

    /// Rate of the hop described by `env`.
    fn rate(&self, env: &JumpEnvironment<'_>) -> f64;
}

/// `kT` in eV at `temperature` kelvin.
pub(crate) fn thermal_energy(temperature: f64) -> f64 {
    BOLTZMANN_CONSTANT_EV * temperature
}

/// Shared validation for temperature/prefactor builders.
pub(crate) fn validate_thermal(
    temperature: f64,
    prefactor: f64,
) -> Result<(), kmc_core::ConfigError> {
    if !temperature.is_finite() || temperature <= 0.0 || thermal_energy(temperature) <= 0.0 {
        return Err(kmc_core::ConfigError::InvalidRateParameter {
            reason: format!("temperature must be finite and positive, got {temperature}"),
        });
    }
    if !prefactor.is_finite() || prefactor < 0.0 {
        return Err(kmc_core::ConfigError::InvalidRateParameter {
            reason: format!("prefactor must be finite and >= 0, got {prefactor}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_temperature_kt() {
        let kt = thermal_energy(ROOM_TEMPERATURE_K);
        assert!((kt - 0.025_679_644).abs() < 1e-8);
    }

    #[test]
    fn validate_rejects_bad_parameters() {
        assert!(validate_thermal(0.0, 1.0).is_err());
        assert!(validate_thermal(f64::NAN, 1.0).is_err());
        assert!(validate_thermal(5.0e-324, 1.0).is_err());
        assert!(validate_thermal(300.0, -1.0).is_err());
        assert!(validate_thermal(300.0, f64::INFINITY).is_err());
        assert!(validate_thermal(300.0, 0.0).is_ok());
    }
}
