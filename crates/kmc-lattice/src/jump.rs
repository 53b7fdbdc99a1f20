//! Candidate hops.

use kmc_core::geometry::{minimum_image, norm, sub};
use kmc_core::{ParticleId, SiteId, Vec3};

use crate::site::Site;

/// One possible hop: a particle on an occupied source site moving to a
/// vacant neighbouring target site, with the rate assigned by the active
/// rate model.
///
/// Jumps are ephemeral. The lattice rebuilds them from its current state
/// at every step.
#[derive(Clone, Debug, PartialEq)]
pub struct Jump {
    particle: ParticleId,
    source: SiteId,
    target: SiteId,
    pub(crate) source_index: usize,
    pub(crate) target_index: usize,
    rate: f64,
    displacement: Vec3,
}

impl Jump {
    pub(crate) fn new(
        particle: ParticleId,
        sites: &[Site],
        source_index: usize,
        target_index: usize,
        cell_lengths: &Vec3,
        rate: f64,
    ) -> Self {
        let source = &sites[source_index];
        let target = &sites[target_index];
        Self {
            particle,
            source: source.id(),
            target: target.id(),
            source_index,
            target_index,
            rate,
            displacement: displacement_between(source, target, cell_lengths),
        }
    }

    /// The particle that would hop.
    pub fn particle(&self) -> ParticleId {
        self.particle
    }

    /// Site the particle leaves.
    pub fn source(&self) -> SiteId {
        self.source
    }

    /// Site the particle enters.
    pub fn target(&self) -> SiteId {
        self.target
    }

    /// Rate assigned by the rate model.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Minimum-image hop vector.
    pub fn displacement(&self) -> Vec3 {
        self.displacement
    }

    /// Length of the hop vector.
    pub fn distance(&self) -> f64 {
        norm(&self.displacement)
    }
}

/// Minimum-image vector from `source` to `target` in a periodic cell.
///
/// Components longer than half a cell length are folded back by one cell
/// length, so a hop across the periodic boundary reports its true length
/// rather than the distance across the whole cell.
pub fn displacement_between(source: &Site, target: &Site, cell_lengths: &Vec3) -> Vec3 {
    minimum_image(sub(&target.position(), &source.position()), cell_lengths)
}
