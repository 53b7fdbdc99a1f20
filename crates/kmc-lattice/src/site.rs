//! Lattice sites.

use kmc_core::{ParticleId, SiteId, SiteLabel, Vec3};
use smallvec::SmallVec;

/// Neighbour lists up to 12 entries (FCC coordination) stay inline.
pub(crate) type NeighbourList<T> = SmallVec<[T; 12]>;

/// A single lattice position.
///
/// Geometry (id, position, label, neighbour ids) is fixed at
/// construction. Occupation and `time_occupied` are mutated only by the
/// owning [`Lattice`](crate::Lattice). A site is occupied exactly when it
/// holds a particle id, so the occupation flag and the particle
/// back-reference cannot disagree.
///
/// # Examples
///
/// ```
/// use kmc_core::SiteId;
/// use kmc_lattice::Site;
///
/// let site = Site::new(SiteId(0), [0.0, 0.0, 0.0], "A", [SiteId(1), SiteId(2)])
///     .with_energy(-0.1);
/// assert_eq!(site.coordination_number(), 2);
/// assert_eq!(site.energy(), Some(-0.1));
/// assert!(!site.is_occupied());
/// ```
#[derive(Clone, Debug)]
pub struct Site {
    id: SiteId,
    pub(crate) position: Vec3,
    label: SiteLabel,
    neighbours: NeighbourList<SiteId>,
    pub(crate) energy: Option<f64>,
    pub(crate) occupant: Option<ParticleId>,
    pub(crate) time_occupied: f64,
    /// Arena indices of `neighbours`, resolved by the lattice.
    pub(crate) neighbour_indices: NeighbourList<usize>,
    /// Arena indices of sites that list this site as a neighbour.
    pub(crate) inbound_indices: NeighbourList<usize>,
}

impl Site {
    /// Create an unoccupied site.
    pub fn new<I>(
        id: impl Into<SiteId>,
        position: Vec3,
        label: impl Into<SiteLabel>,
        neighbours: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SiteId>,
    {
        Self {
            id: id.into(),
            position,
            label: label.into(),
            neighbours: neighbours.into_iter().map(Into::into).collect(),
            energy: None,
            occupant: None,
            time_occupied: 0.0,
            neighbour_indices: SmallVec::new(),
            inbound_indices: SmallVec::new(),
        }
    }

    /// Set the site energy.
    pub fn with_energy(mut self, energy: f64) -> Self {
        self.energy = Some(energy);
        self
    }

    /// Site identifier.
    pub fn id(&self) -> SiteId {
        self.id
    }

    /// Position; wrapped into the cell once the site belongs to a lattice.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Site label.
    pub fn label(&self) -> &SiteLabel {
        &self.label
    }

    /// Neighbour identifiers, in the order given at construction.
    pub fn neighbours(&self) -> &[SiteId] {
        &self.neighbours
    }

    /// Number of neighbours.
    pub fn coordination_number(&self) -> usize {
        self.neighbours.len()
    }

    /// Site energy, if set.
    pub fn energy(&self) -> Option<f64> {
        self.energy
    }

    /// Whether a particle sits here.
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// The particle sitting here, if any.
    pub fn occupant(&self) -> Option<ParticleId> {
        self.occupant
    }

    /// Simulated time this site has spent occupied since the last reset.
    pub fn time_occupied(&self) -> f64 {
        self.time_occupied
    }
}
