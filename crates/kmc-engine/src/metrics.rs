//! Per-step and cumulative performance metrics.
//!
//! [`StepMetrics`] captures timing and sampling data for a single step;
//! [`RunMetrics`] accumulates them since construction or the last reset.

/// Timing and sampling metrics collected during a single step.
///
/// All durations are wall-clock microseconds. The simulation populates
/// these fields after each successful `step()` call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire step.
    pub total_us: u64,
    /// Time spent enumerating candidate jumps and pricing them.
    pub enumeration_us: u64,
    /// Time spent drawing the event and waiting time.
    pub sampling_us: u64,
    /// Time spent applying the jump to the lattice.
    pub update_us: u64,
    /// Number of candidate jumps.
    pub candidates: usize,
    /// Sum of candidate rates.
    pub total_rate: f64,
    /// Simulated time added (0 on deadlock).
    pub waiting_time: f64,
}

/// Metrics accumulated over many steps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunMetrics {
    /// Steps attempted (jumps plus deadlocks).
    pub steps: u64,
    /// Steps that moved a particle.
    pub jumps: u64,
    /// Steps that found no transition.
    pub deadlocks: u64,
    /// Simulated time added by the recorded steps.
    pub simulated_time: f64,
    /// Wall-clock time spent in the recorded steps.
    pub wall_time_us: u64,
}

impl RunMetrics {
    /// Fold one step into the totals.
    pub fn record(&mut self, step: &StepMetrics, jumped: bool) {
        self.steps += 1;
        if jumped {
            self.jumps += 1;
        } else {
            self.deadlocks += 1;
        }
        self.simulated_time += step.waiting_time;
        self.wall_time_us += step.total_us;
    }

    /// Mean simulated time per jump, or `None` before the first jump.
    pub fn mean_waiting_time(&self) -> Option<f64> {
        (self.jumps > 0).then(|| self.simulated_time / self.jumps as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.enumeration_us, 0);
        assert_eq!(m.sampling_us, 0);
        assert_eq!(m.update_us, 0);
        assert_eq!(m.candidates, 0);
        assert_eq!(m.total_rate, 0.0);
        assert_eq!(m.waiting_time, 0.0);
        assert_eq!(RunMetrics::default().mean_waiting_time(), None);
    }

    #[test]
    fn run_metrics_accumulate() {
        let mut run = RunMetrics::default();
        let step = StepMetrics {
            total_us: 10,
            candidates: 4,
            total_rate: 4.0,
            waiting_time: 0.5,
            ..StepMetrics::default()
        };
        run.record(&step, true);
        run.record(&step, true);
        run.record(&StepMetrics::default(), false);
        assert_eq!(run.steps, 3);
        assert_eq!(run.jumps, 2);
        assert_eq!(run.deadlocks, 1);
        assert_eq!(run.simulated_time, 1.0);
        assert_eq!(run.wall_time_us, 20);
        assert_eq!(run.mean_waiting_time(), Some(0.5));
    }
}
