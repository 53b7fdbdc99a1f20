//! Label-keyed summaries of the lattice.
//!
//! Every map is keyed by [`SiteLabel`] in first-appearance order of the
//! labels in the site list, so output order is stable across runs.

use indexmap::{IndexMap, IndexSet};
use kmc_core::{SiteLabel, StatisticsError};

use crate::lattice::Lattice;

impl Lattice {
    /// Time-averaged number of particles on the sites of each label,
    /// `Σ time_occupied / time`.
    ///
    /// # Errors
    ///
    /// [`StatisticsError::UndefinedStatistic`] when no simulated time has
    /// elapsed since construction or the last [`reset`](Self::reset).
    pub fn site_occupation_statistics(&self) -> Result<IndexMap<SiteLabel, f64>, StatisticsError> {
        let time = self.time();
        if time <= 0.0 {
            return Err(StatisticsError::UndefinedStatistic {
                statistic: "site occupation statistics",
            });
        }
        let mut totals: IndexMap<SiteLabel, f64> = self
            .site_populations
            .keys()
            .map(|label| (label.clone(), 0.0))
            .collect();
        for site in &self.sites {
            if let Some(total) = totals.get_mut(site.label()) {
                *total += site.time_occupied();
            }
        }
        for total in totals.values_mut() {
            *total /= time;
        }
        Ok(totals)
    }

    /// Coordination number of the first site seen with each label.
    pub fn site_coordination_numbers(&self) -> IndexMap<SiteLabel, usize> {
        let mut numbers = IndexMap::with_capacity(self.site_populations.len());
        for site in &self.sites {
            numbers
                .entry(site.label().clone())
                .or_insert_with(|| site.coordination_number());
        }
        numbers
    }

    /// Largest coordination number among the sites of each label.
    pub fn max_site_coordination_numbers(&self) -> IndexMap<SiteLabel, usize> {
        let mut numbers: IndexMap<SiteLabel, usize> =
            IndexMap::with_capacity(self.site_populations.len());
        for site in &self.sites {
            let entry = numbers.entry(site.label().clone()).or_insert(0);
            *entry = (*entry).max(site.coordination_number());
        }
        numbers
    }

    /// For each label, the set of labels found among the neighbours of
    /// its sites.
    ///
    /// Labels whose sites have no neighbours map to an empty set.
    pub fn connected_site_pairs(&self) -> IndexMap<SiteLabel, IndexSet<SiteLabel>> {
        let mut pairs: IndexMap<SiteLabel, IndexSet<SiteLabel>> = IndexMap::new();
        for site in &self.sites {
            let connected = pairs.entry(site.label().clone()).or_default();
            for &n in &site.neighbour_indices {
                connected.insert(self.sites[n].label().clone());
            }
        }
        pairs
    }

    /// Distinct labels, in first-appearance order.
    pub fn site_labels(&self) -> Vec<SiteLabel> {
        self.site_populations.keys().cloned().collect()
    }

    /// Number of sites carrying each label.
    pub fn site_populations(&self) -> &IndexMap<SiteLabel, usize> {
        &self.site_populations
    }
}
