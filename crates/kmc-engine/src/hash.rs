//! Hashing utilities for replay comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of lattice state. These
//! hashes are not cryptographically secure; they are used for fast
//! equality checks between two runs.

use kmc_lattice::Lattice;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Marker folded in for an empty site.
const VACANT: u32 = u32::MAX;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

#[inline]
fn fnv1a_f64(hash: u64, v: f64) -> u64 {
    fnv1a_u64(hash, v.to_bits())
}

/// Compute a hash over the dynamic state of a lattice.
///
/// Folds in the clock, then each site's occupant and occupied time in
/// site order, then each particle's site, hop count and displacement in
/// particle order. Geometry and energies are not hashed.
pub fn lattice_hash(lattice: &Lattice) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_f64(hash, lattice.time());

    for site in lattice.sites() {
        hash = fnv1a_u32(hash, site.id().0);
        hash = fnv1a_u32(hash, site.occupant().map_or(VACANT, |p| p.0));
        hash = fnv1a_f64(hash, site.time_occupied());
    }

    for particle in lattice.particles() {
        hash = fnv1a_u32(hash, particle.id().0);
        hash = fnv1a_u32(hash, particle.site().0);
        hash = fnv1a_u64(hash, particle.number_of_hops());
        for &x in &particle.displacement() {
            hash = fnv1a_f64(hash, x);
        }
    }

    hash
}
