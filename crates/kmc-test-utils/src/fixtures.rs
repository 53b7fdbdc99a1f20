//! Mock rate models.
//!
//! - [`ConstRate`]: the same rate for every hop.
//! - [`InvalidRate`]: always returns a configurable bad value.
//! - [`FailingRate`]: valid for a number of calls, then NaN.
//! - [`LabelRate`]: rate chosen by the target site's label.

use std::sync::atomic::{AtomicUsize, Ordering};

use kmc_rate::{JumpEnvironment, RateModel};

/// Returns `rate` for every hop.
pub struct ConstRate {
    pub rate: f64,
}

impl ConstRate {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }
}

impl RateModel for ConstRate {
    fn name(&self) -> &str {
        "ConstRate"
    }

    fn rate(&self, _env: &JumpEnvironment<'_>) -> f64 {
        self.rate
    }
}

/// Returns `value` for every hop. Use NaN, infinity or a negative number
/// to exercise rate validation.
pub struct InvalidRate {
    pub value: f64,
}

impl InvalidRate {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl RateModel for InvalidRate {
    fn name(&self) -> &str {
        "InvalidRate"
    }

    fn rate(&self, _env: &JumpEnvironment<'_>) -> f64 {
        self.value
    }
}

/// Returns 1 for the first `succeed_count` calls, then NaN.
///
/// Uses `AtomicUsize` for the call counter so it satisfies `Send`.
pub struct FailingRate {
    pub succeed_count: usize,
    call_count: AtomicUsize,
}

impl FailingRate {
    /// Create a model that prices `succeed_count` hops then fails.
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            call_count: AtomicUsize::new(0),
        }
    }

    /// How many times `rate()` has been called.
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl RateModel for FailingRate {
    fn name(&self) -> &str {
        "FailingRate"
    }

    fn rate(&self, _env: &JumpEnvironment<'_>) -> f64 {
        let n = self.call_count.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            f64::NAN
        } else {
            1.0
        }
    }
}

/// Rate `into` for hops whose target carries `label`, `otherwise` for the
/// rest.
pub struct LabelRate {
    pub label: String,
    pub into: f64,
    pub otherwise: f64,
}

impl LabelRate {
    pub fn new(label: impl Into<String>, into: f64, otherwise: f64) -> Self {
        Self {
            label: label.into(),
            into,
            otherwise,
        }
    }
}

impl RateModel for LabelRate {
    fn name(&self) -> &str {
        "LabelRate"
    }

    fn rate(&self, env: &JumpEnvironment<'_>) -> f64 {
        if env.target_label.as_str() == self.label {
            self.into
        } else {
            self.otherwise
        }
    }
}
