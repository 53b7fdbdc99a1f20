//! The local state of a candidate hop, as seen by a rate model.

use kmc_core::SiteLabel;

/// Everything a [`RateModel`](crate::RateModel) may use to price one hop.
///
/// Built by the lattice for every candidate jump. Occupation counts
/// exclude the hopping particle itself: `target_occupied_neighbours`
/// does not count the source site even when the source is a neighbour
/// of the target.
#[derive(Clone, Copy, Debug)]
pub struct JumpEnvironment<'a> {
    /// Label of the site the particle leaves.
    pub source_label: &'a SiteLabel,
    /// Label of the site the particle enters.
    pub target_label: &'a SiteLabel,
    /// Site energy of the source (0 when unset).
    pub source_energy: f64,
    /// Site energy of the target (0 when unset).
    pub target_energy: f64,
    /// Occupied neighbours of the source before the hop.
    pub source_occupied_neighbours: usize,
    /// Occupied neighbours of the target after the hop.
    pub target_occupied_neighbours: usize,
    /// Nearest-neighbour interaction energy per occupied neighbour
    /// (0 when unset).
    pub nearest_neighbour_energy: f64,
}

impl JumpEnvironment<'_> {
    /// Energy change of the hop.
    ///
    /// `ΔE = (E_target - E_source) + J · (n_target - n_source)` where `J`
    /// is the nearest-neighbour energy and `n` the occupied-neighbour
    /// counts. Zero when no energies are configured.
    pub fn delta_energy(&self) -> f64 {
        let site_term = self.target_energy - self.source_energy;
        let neighbour_change =
            self.target_occupied_neighbours as f64 - self.source_occupied_neighbours as f64;
        site_term + self.nearest_neighbour_energy * neighbour_change
    }
}
