//! Tabulated rates keyed by site labels and local occupation.
//!
//! For systems where hop rates come from separate calculations (e.g.
//! nudged-elastic-band barriers) rather than a closed-form energy model.
//! A rate is looked up by
//! `(source label, target label, source occupied neighbours,
//! target occupied neighbours)`. Hops with no table entry have rate 0
//! and are never selected.

use indexmap::IndexMap;
use kmc_core::{ConfigError, SiteLabel};

use crate::environment::JumpEnvironment;
use crate::model::RateModel;

type OccupationTable = IndexMap<(usize, usize), f64>;

/// Tabulated hop rates.
#[derive(Clone, Debug, Default)]
pub struct LookupTable {
    table: IndexMap<SiteLabel, IndexMap<SiteLabel, OccupationTable>>,
}

/// Builder for [`LookupTable`].
#[derive(Default)]
pub struct LookupTableBuilder {
    entries: Vec<(SiteLabel, SiteLabel, usize, usize, f64)>,
}

impl LookupTable {
    /// Create an empty builder.
    pub fn builder() -> LookupTableBuilder {
        LookupTableBuilder::default()
    }

    /// Number of tabulated entries.
    pub fn len(&self) -> usize {
        self.table
            .values()
            .flat_map(|targets| targets.values())
            .map(|occupations| occupations.len())
            .sum()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tabulated rate, if any.
    pub fn get(
        &self,
        source: &str,
        target: &str,
        source_occupied: usize,
        target_occupied: usize,
    ) -> Option<f64> {
        self.table
            .get(source)?
            .get(target)?
            .get(&(source_occupied, target_occupied))
            .copied()
    }
}

impl LookupTableBuilder {
    /// Add (or replace) one entry.
    pub fn rate(
        mut self,
        source: impl Into<SiteLabel>,
        target: impl Into<SiteLabel>,
        source_occupied: usize,
        target_occupied: usize,
        rate: f64,
    ) -> Self {
        self.entries.push((
            source.into(),
            target.into(),
            source_occupied,
            target_occupied,
            rate,
        ));
        self
    }

    /// Build the table.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any rate is negative, NaN or infinite.
    pub fn build(self) -> Result<LookupTable, ConfigError> {
        let mut table: IndexMap<SiteLabel, IndexMap<SiteLabel, OccupationTable>> =
            IndexMap::new();
        for (source, target, n_source, n_target, rate) in self.entries {
            if !rate.is_finite() || rate < 0.0 {
                return Err(ConfigError::InvalidRateParameter {
                    reason: format!(
                        "tabulated rate {source}->{target} ({n_source},{n_target}) \
                         must be finite and >= 0, got {rate}"
                    ),
                });
            }
            table
                .entry(source)
                .or_default()
                .entry(target)
                .or_default()
                .insert((n_source, n_target), rate);
        }
        Ok(LookupTable { table })
    }
}

impl RateModel for LookupTable {
    fn name(&self) -> &str {
        "LookupTable"
    }

    fn rate(&self, env: &JumpEnvironment<'_>) -> f64 {
        self.get(
            env.source_label.as_str(),
            env.target_label.as_str(),
            env.source_occupied_neighbours,
            env.target_occupied_neighbours,
        )
        .unwrap_or(0.0)
    }
}
