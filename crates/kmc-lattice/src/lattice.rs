//! The periodic lattice and the kinetic Monte Carlo step.
//!
//! [`Lattice`] owns every [`Site`] and [`Particle`], the cell geometry,
//! the simulated-time clock and the energy configuration. Each call to
//! [`step()`](Lattice::step) enumerates the possible hops, samples one
//! and its waiting time, advances the clock, charges the waiting time to
//! every occupied site, and moves the particle.
//!
//! # Ownership model
//!
//! Sites refer to their neighbours by [`SiteId`]. The lattice resolves
//! those ids once at construction into arena indices (and the reverse,
//! inbound adjacency), so there are no ownership cycles and no per-step
//! id lookups.
//!
//! # Failure atomicity
//!
//! A step either commits completely (clock, occupied times, occupation,
//! particle counters) or changes nothing. A deadlocked lattice reports
//! [`StepOutcome::NoTransitionsAvailable`] without consuming random
//! numbers.

use std::fmt;

use indexmap::IndexMap;
use kmc_core::geometry::wrap_position;
use kmc_core::{ConfigError, ParticleId, SiteId, SiteLabel, TransitionError, Vec3};
use kmc_rate::{JumpEnvironment, Metropolis, RateModel};
use rand::Rng;
use smallvec::SmallVec;

use crate::jump::Jump;
use crate::outcome::{JumpRecord, StepOutcome};
use crate::particle::Particle;
use crate::site::{NeighbourList, Site};
use crate::transitions::TransitionSet;

// Compile-time assertion: a Lattice can be moved to another thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Lattice>();
    }
};

/// A periodic lattice of sites with mobile particles.
///
/// # Examples
///
/// ```
/// use kmc_lattice::{Lattice, Site, StepOutcome};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// // A ring of four sites along x.
/// let sites: Vec<Site> = (0..4u32)
///     .map(|i| Site::new(i, [i as f64, 0.0, 0.0], "A", [(i + 3) % 4, (i + 1) % 4]))
///     .collect();
/// let mut lattice = Lattice::new(sites, [4.0, 1.0, 1.0]).unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
///
/// lattice.populate(2, &mut rng).unwrap();
/// match lattice.step(&mut rng).unwrap() {
///     StepOutcome::Jumped(record) => assert!(record.waiting_time > 0.0),
///     StepOutcome::NoTransitionsAvailable => unreachable!("ring has vacancies"),
/// }
/// assert_eq!(lattice.number_of_occupied_sites(), 2);
/// ```
pub struct Lattice {
    cell_lengths: Vec3,
    pub(crate) sites: Vec<Site>,
    site_lookup: IndexMap<SiteId, usize>,
    pub(crate) site_populations: IndexMap<SiteLabel, usize>,
    particles: Vec<Particle>,
    number_of_occupied_sites: usize,
    time: f64,
    nearest_neighbour_energy: f64,
    rate_model: Box<dyn RateModel>,
}

impl Lattice {
    /// Build a lattice from sites and orthorhombic cell lengths.
    ///
    /// Wraps every site position into the cell, resolves neighbour ids
    /// and builds the inbound adjacency. The lattice starts empty, at
    /// time 0, with the default [`Metropolis`] rate model and no
    /// energies configured (so all hops have equal rates).
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NonPositiveCellLength`] for a zero, negative or
    ///   non-finite cell length
    /// - [`ConfigError::EmptyLattice`] for an empty site list
    /// - [`ConfigError::NonFinitePosition`] for a NaN/infinite coordinate
    /// - [`ConfigError::DuplicateSiteId`] for repeated ids
    /// - [`ConfigError::UnknownNeighbour`] for unresolvable neighbour ids
    pub fn new(mut sites: Vec<Site>, cell_lengths: Vec3) -> Result<Self, ConfigError> {
        for (axis, &value) in cell_lengths.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveCellLength { axis, value });
            }
        }
        if sites.is_empty() {
            return Err(ConfigError::EmptyLattice);
        }

        let mut site_lookup = IndexMap::with_capacity(sites.len());
        let mut site_populations: IndexMap<SiteLabel, usize> = IndexMap::new();
        for (index, site) in sites.iter().enumerate() {
            if site.position.iter().any(|x| !x.is_finite()) {
                return Err(ConfigError::NonFinitePosition { site: site.id() });
            }
            if site_lookup.insert(site.id(), index).is_some() {
                return Err(ConfigError::DuplicateSiteId { id: site.id() });
            }
            *site_populations.entry(site.label().clone()).or_insert(0) += 1;
        }

        for site in &mut sites {
            site.inbound_indices.clear();
        }
        for index in 0..sites.len() {
            let mut resolved: NeighbourList<usize> = SmallVec::new();
            for &neighbour in sites[index].neighbours() {
                let n = *site_lookup
                    .get(&neighbour)
                    .ok_or(ConfigError::UnknownNeighbour {
                        site: sites[index].id(),
                        neighbour,
                    })?;
                resolved.push(n);
            }
            for &n in &resolved {
                sites[n].inbound_indices.push(index);
            }
            let site = &mut sites[index];
            site.neighbour_indices = resolved;
            site.occupant = None;
            site.time_occupied = 0.0;
        }

        let mut lattice = Self {
            cell_lengths,
            sites,
            site_lookup,
            site_populations,
            particles: Vec::new(),
            number_of_occupied_sites: 0,
            time: 0.0,
            nearest_neighbour_energy: 0.0,
            rate_model: Box::new(Metropolis::default()),
        };
        lattice.enforce_periodic_boundary();
        Ok(lattice)
    }

    /// Wrap every site coordinate into `[0, cell_length)` on each axis.
    ///
    /// Coordinates may be supplied in an unwrapped frame; the wrapped
    /// value is congruent to the original modulo the cell length.
    pub fn enforce_periodic_boundary(&mut self) {
        for site in &mut self.sites {
            site.position = wrap_position(site.position, &self.cell_lengths);
        }
    }

    // ── Accessors ───────────────────────────────────────────────

    /// Cell lengths.
    pub fn cell_lengths(&self) -> Vec3 {
        self.cell_lengths
    }

    /// All sites, in construction order.
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Look up a site by id.
    pub fn site_with_id(&self, id: SiteId) -> Option<&Site> {
        self.site_lookup.get(&id).map(|&i| &self.sites[i])
    }

    /// All particles, indexed by `ParticleId`.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Look up a particle by id.
    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id.0 as usize)
    }

    /// The site a particle currently occupies.
    pub fn site_of(&self, particle: ParticleId) -> Option<&Site> {
        self.particle(particle).map(|p| &self.sites[p.site_index])
    }

    /// Number of sites.
    pub fn number_of_sites(&self) -> usize {
        self.sites.len()
    }

    /// Number of occupied sites (equal to the number of particles).
    pub fn number_of_occupied_sites(&self) -> usize {
        self.number_of_occupied_sites
    }

    /// Simulated time since construction or the last [`reset`](Self::reset).
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Nearest-neighbour interaction energy (0 when unset).
    pub fn nearest_neighbour_energy(&self) -> f64 {
        self.nearest_neighbour_energy
    }

    /// Name of the active rate model.
    pub fn rate_model_name(&self) -> &str {
        self.rate_model.name()
    }

    /// Occupied sites, filtered from the current state on each call.
    pub fn occupied_sites(&self) -> impl Iterator<Item = &Site> + '_ {
        self.sites.iter().filter(|s| s.is_occupied())
    }

    /// Vacant sites, filtered from the current state on each call.
    pub fn vacant_sites(&self) -> impl Iterator<Item = &Site> + '_ {
        self.sites.iter().filter(|s| !s.is_occupied())
    }

    /// Ids of occupied sites.
    pub fn occupied_site_ids(&self) -> Vec<SiteId> {
        self.occupied_sites().map(Site::id).collect()
    }

    /// Ids of vacant sites.
    pub fn vacant_site_ids(&self) -> Vec<SiteId> {
        self.vacant_sites().map(Site::id).collect()
    }

    // ── Energy configuration ────────────────────────────────────

    /// Assign site energies by label.
    ///
    /// Every site whose label appears in `energies` takes that energy;
    /// other sites keep theirs. Labels not present in the lattice are
    /// ignored.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidEnergy`] if any energy is NaN or infinite.
    /// Nothing is assigned in that case.
    pub fn set_site_energies<I, L>(&mut self, energies: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = (L, f64)>,
        L: Into<SiteLabel>,
    {
        let energies: IndexMap<SiteLabel, f64> = energies
            .into_iter()
            .map(|(label, energy)| (label.into(), energy))
            .collect();
        if let Some((label, energy)) = energies.iter().find(|(_, e)| !e.is_finite()) {
            return Err(ConfigError::InvalidEnergy {
                reason: format!("site energy for label '{label}' is {energy}"),
            });
        }
        for site in &mut self.sites {
            if let Some(&energy) = energies.get(site.label()) {
                site.energy = Some(energy);
            }
        }
        Ok(())
    }

    /// Set the nearest-neighbour interaction energy.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidEnergy`] if `energy` is NaN or infinite.
    pub fn set_nearest_neighbour_energy(&mut self, energy: f64) -> Result<(), ConfigError> {
        if !energy.is_finite() {
            return Err(ConfigError::InvalidEnergy {
                reason: format!("nearest-neighbour energy is {energy}"),
            });
        }
        self.nearest_neighbour_energy = energy;
        Ok(())
    }

    /// Replace the rate model.
    pub fn set_rate_model(&mut self, model: Box<dyn RateModel>) {
        self.rate_model = model;
    }

    // ── Population ──────────────────────────────────────────────

    /// Place `count` particles on sites chosen uniformly at random
    /// without replacement, replacing any existing population.
    ///
    /// Returns the new particle ids (`0..count`).
    ///
    /// # Errors
    ///
    /// [`ConfigError::PopulationExceedsSites`] if `count` exceeds the
    /// number of sites. The lattice is unchanged in that case.
    pub fn populate<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<ParticleId>, ConfigError> {
        let candidates: Vec<usize> = (0..self.sites.len()).collect();
        self.populate_from(candidates, count, rng)
    }

    /// Like [`populate`](Self::populate), but only sites carrying one of
    /// `labels` are candidates.
    ///
    /// # Errors
    ///
    /// [`ConfigError::PopulationExceedsSites`] if `count` exceeds the
    /// number of candidate sites.
    pub fn populate_labelled<R, L>(
        &mut self,
        count: usize,
        labels: &[L],
        rng: &mut R,
    ) -> Result<Vec<ParticleId>, ConfigError>
    where
        R: Rng + ?Sized,
        L: AsRef<str>,
    {
        let candidates: Vec<usize> = self
            .sites
            .iter()
            .enumerate()
            .filter(|(_, s)| labels.iter().any(|l| l.as_ref() == s.label().as_str()))
            .map(|(i, _)| i)
            .collect();
        self.populate_from(candidates, count, rng)
    }

    fn populate_from<R: Rng + ?Sized>(
        &mut self,
        candidates: Vec<usize>,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<ParticleId>, ConfigError> {
        if count > candidates.len() {
            return Err(ConfigError::PopulationExceedsSites {
                requested: count,
                available: candidates.len(),
            });
        }
        let particle_cap = u32::try_from(count).map_err(|_| ConfigError::PopulationExceedsSites {
            requested: count,
            available: u32::MAX as usize,
        })?;

        for site in &mut self.sites {
            site.occupant = None;
        }
        self.particles.clear();

        let chosen = rand::seq::index::sample(rng, candidates.len(), count);
        let mut ids = Vec::with_capacity(count);
        for (n, position) in (0..particle_cap).zip(chosen.iter()) {
            let index = candidates[position];
            let id = ParticleId(n);
            let site = &mut self.sites[index];
            site.occupant = Some(id);
            self.particles.push(Particle::new(id, site.id(), index));
            ids.push(id);
        }
        self.number_of_occupied_sites = count;
        Ok(ids)
    }

    // ── Jump enumeration ────────────────────────────────────────

    /// Every possible hop: an occupied source and a vacant target listed
    /// among the source's neighbours, priced by the active rate model.
    ///
    /// Scans whichever of the occupied or vacant sites is the smaller
    /// group. When at most half the sites are occupied it walks the
    /// occupied sites' neighbour lists; otherwise it walks the vacant
    /// sites' inbound lists. Both produce the same set of hops.
    pub fn potential_jumps(&self) -> Vec<Jump> {
        let mut jumps = Vec::new();
        if self.number_of_occupied_sites * 2 <= self.sites.len() {
            for (source, site) in self.sites.iter().enumerate() {
                let Some(particle) = site.occupant else {
                    continue;
                };
                for &target in &site.neighbour_indices {
                    if !self.sites[target].is_occupied() {
                        jumps.push(self.make_jump(particle, source, target));
                    }
                }
            }
        } else {
            for (target, site) in self.sites.iter().enumerate() {
                if site.is_occupied() {
                    continue;
                }
                for &source in &site.inbound_indices {
                    if let Some(particle) = self.sites[source].occupant {
                        jumps.push(self.make_jump(particle, source, target));
                    }
                }
            }
        }
        jumps
    }

    /// Build the transition set for the current state.
    ///
    /// # Errors
    ///
    /// [`TransitionError::InvalidRate`] if the rate model produced a
    /// negative or non-finite rate.
    pub fn transitions(&self) -> Result<TransitionSet, TransitionError> {
        TransitionSet::new(self.potential_jumps())
    }

    fn make_jump(&self, particle: ParticleId, source: usize, target: usize) -> Jump {
        let rate = self.rate_model.rate(&self.jump_environment(source, target));
        Jump::new(
            particle,
            &self.sites,
            source,
            target,
            &self.cell_lengths,
            rate,
        )
    }

    /// The local state the rate model sees for a hop `source → target`.
    fn jump_environment(&self, source: usize, target: usize) -> JumpEnvironment<'_> {
        let s = &self.sites[source];
        let t = &self.sites[target];
        let source_occupied_neighbours = s
            .neighbour_indices
            .iter()
            .filter(|&&n| n != source && self.sites[n].is_occupied())
            .count();
        let target_occupied_neighbours = t
            .neighbour_indices
            .iter()
            .filter(|&&n| n != source && n != target && self.sites[n].is_occupied())
            .count();
        JumpEnvironment {
            source_label: s.label(),
            target_label: t.label(),
            source_energy: s.energy.unwrap_or(0.0),
            target_energy: t.energy.unwrap_or(0.0),
            source_occupied_neighbours,
            target_occupied_neighbours,
            nearest_neighbour_energy: self.nearest_neighbour_energy,
        }
    }

    // ── Stepping ────────────────────────────────────────────────

    /// Execute one kinetic Monte Carlo step.
    ///
    /// Samples a hop (probability proportional to rate) and a waiting
    /// time (exponential in the total rate), then [`commit`](Self::commit)s
    /// them.
    ///
    /// Returns [`StepOutcome::NoTransitionsAvailable`] when no hop is
    /// possible or every rate is zero. The lattice is unchanged and no
    /// random numbers are drawn in that case.
    ///
    /// # Errors
    ///
    /// [`TransitionError::InvalidRate`] if the rate model produced an
    /// invalid rate. The lattice is unchanged.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<StepOutcome, TransitionError> {
        let transitions = self.transitions()?;
        self.step_with(&transitions, rng)
    }

    /// Sample from a transition set built by [`transitions`](Self::transitions)
    /// on the current state, and commit the result.
    ///
    /// # Errors
    ///
    /// As [`commit`](Self::commit).
    pub fn step_with<R: Rng + ?Sized>(
        &mut self,
        transitions: &TransitionSet,
        rng: &mut R,
    ) -> Result<StepOutcome, TransitionError> {
        match transitions.sample(rng) {
            Ok((jump, waiting_time)) => self.commit(jump, waiting_time).map(StepOutcome::Jumped),
            Err(TransitionError::NoTransitionsAvailable) => Ok(StepOutcome::NoTransitionsAvailable),
            Err(e) => Err(e),
        }
    }

    /// Apply a sampled hop: advance the clock by `waiting_time`, add it to
    /// every occupied site's `time_occupied` (the time spent in the
    /// pre-hop configuration), then move the particle.
    ///
    /// # Errors
    ///
    /// - [`TransitionError::StaleJump`] if `jump` was not enumerated from
    ///   the current state
    /// - [`TransitionError::InvalidWaitingTime`] for a negative or
    ///   non-finite waiting time
    ///
    /// The lattice is unchanged on error.
    pub fn commit(&mut self, jump: &Jump, waiting_time: f64) -> Result<JumpRecord, TransitionError> {
        if !waiting_time.is_finite() || waiting_time < 0.0 {
            return Err(TransitionError::InvalidWaitingTime {
                value: waiting_time,
            });
        }
        let stale = TransitionError::StaleJump {
            source: jump.source(),
            target: jump.target(),
        };
        let (Some(source), Some(target)) = (
            self.sites.get(jump.source_index),
            self.sites.get(jump.target_index),
        ) else {
            return Err(stale);
        };
        if source.id() != jump.source()
            || target.id() != jump.target()
            || source.occupant != Some(jump.particle())
            || target.is_occupied()
        {
            return Err(stale);
        }

        self.time += waiting_time;
        self.update_site_occupation_times(waiting_time);
        Ok(self.apply(jump, waiting_time))
    }

    fn update_site_occupation_times(&mut self, delta_t: f64) {
        for site in self.sites.iter_mut().filter(|s| s.is_occupied()) {
            site.time_occupied += delta_t;
        }
    }

    fn apply(&mut self, jump: &Jump, waiting_time: f64) -> JumpRecord {
        let particle = jump.particle();
        let displacement = jump.displacement();
        self.sites[jump.source_index].occupant = None;
        self.sites[jump.target_index].occupant = Some(particle);
        self.particles[particle.0 as usize].record_hop(
            jump.target(),
            jump.target_index,
            &displacement,
        );
        JumpRecord {
            particle,
            source: jump.source(),
            target: jump.target(),
            displacement,
            rate: jump.rate(),
            waiting_time,
        }
    }

    // ── Reset ───────────────────────────────────────────────────

    /// Zero the clock and every site's `time_occupied`. Occupation is
    /// unchanged.
    pub fn reset(&mut self) {
        self.time = 0.0;
        for site in &mut self.sites {
            site.time_occupied = 0.0;
        }
    }

    /// Zero every particle's hop count and displacement. Positions are
    /// unchanged.
    pub fn reset_particles(&mut self) {
        for particle in &mut self.particles {
            particle.reset_counters();
        }
    }
}

impl fmt::Debug for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lattice")
            .field("cell_lengths", &self.cell_lengths)
            .field("number_of_sites", &self.sites.len())
            .field("number_of_occupied_sites", &self.number_of_occupied_sites)
            .field("time", &self.time)
            .field("nearest_neighbour_energy", &self.nearest_neighbour_energy)
            .field("rate_model", &self.rate_model.name())
            .finish()
    }
}
