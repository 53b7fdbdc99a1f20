//! Mobile particles and their accumulated displacement.

use kmc_core::geometry::{add, dot};
use kmc_core::{ParticleId, SiteId, Vec3};

/// A mobile occupant of the lattice.
///
/// Tracks where it is, how many hops it has made, and its accumulated
/// displacement. `displacement` is the unwrapped net vector travelled
/// (the sum of minimum-image hop vectors); `summed_squared_displacement`
/// is the sum of squared hop lengths.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    id: ParticleId,
    site: SiteId,
    pub(crate) site_index: usize,
    number_of_hops: u64,
    displacement: Vec3,
    summed_squared_displacement: f64,
}

impl Particle {
    pub(crate) fn new(id: ParticleId, site: SiteId, site_index: usize) -> Self {
        Self {
            id,
            site,
            site_index,
            number_of_hops: 0,
            displacement: [0.0; 3],
            summed_squared_displacement: 0.0,
        }
    }

    /// Particle identifier.
    pub fn id(&self) -> ParticleId {
        self.id
    }

    /// The site currently occupied.
    pub fn site(&self) -> SiteId {
        self.site
    }

    /// Completed hops since population or the last counter reset.
    pub fn number_of_hops(&self) -> u64 {
        self.number_of_hops
    }

    /// Net displacement.
    pub fn displacement(&self) -> Vec3 {
        self.displacement
    }

    /// Sum of squared hop lengths.
    pub fn summed_squared_displacement(&self) -> f64 {
        self.summed_squared_displacement
    }

    /// Squared net displacement, `|Σ dr|²`.
    pub fn squared_displacement(&self) -> f64 {
        dot(&self.displacement, &self.displacement)
    }

    pub(crate) fn record_hop(&mut self, site: SiteId, site_index: usize, dr: &Vec3) {
        self.site = site;
        self.site_index = site_index;
        self.number_of_hops += 1;
        self.displacement = add(&self.displacement, dr);
        self.summed_squared_displacement += dot(dr, dr);
    }

    pub(crate) fn reset_counters(&mut self) {
        self.number_of_hops = 0;
        self.displacement = [0.0; 3];
        self.summed_squared_displacement = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hops_accumulate() {
        let mut p = Particle::new(ParticleId(0), SiteId(4), 4);
        p.record_hop(SiteId(5), 5, &[1.0, 0.0, 0.0]);
        p.record_hop(SiteId(4), 4, &[-1.0, 0.0, 0.0]);
        p.record_hop(SiteId(9), 9, &[0.0, 2.0, 0.0]);
        assert_eq!(p.site(), SiteId(9));
        assert_eq!(p.number_of_hops(), 3);
        assert_eq!(p.displacement(), [0.0, 2.0, 0.0]);
        assert_eq!(p.summed_squared_displacement(), 6.0);
        assert_eq!(p.squared_displacement(), 4.0);
    }

    #[test]
    fn reset_keeps_position() {
        let mut p = Particle::new(ParticleId(1), SiteId(0), 0);
        p.record_hop(SiteId(1), 1, &[0.5, 0.5, 0.0]);
        p.reset_counters();
        assert_eq!(p.site(), SiteId(1));
        assert_eq!(p.number_of_hops(), 0);
        assert_eq!(p.summed_squared_displacement(), 0.0);
    }
}
