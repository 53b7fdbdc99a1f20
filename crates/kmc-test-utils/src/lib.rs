//! Test lattices and mock rate models for kmc development.
//!
//! Site-list builders for the small periodic lattices used throughout
//! the test suites, plus mock [`RateModel`](kmc_rate::RateModel)
//! implementations in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use kmc_core::Vec3;
use kmc_lattice::{Lattice, Site};

/// `n` sites on a ring along x with spacing 1, all labelled `"A"`.
///
/// Each site lists its left then right neighbour. Cell: `[n, 1, 1]`.
pub fn ring_sites(n: u32) -> Vec<Site> {
    (0..n)
        .map(|i| {
            Site::new(
                i,
                [f64::from(i), 0.0, 0.0],
                "A",
                [(i + n - 1) % n, (i + 1) % n],
            )
        })
        .collect()
}

/// Like [`ring_sites`], with labels alternating `"A"`, `"B"`.
///
/// Use an even `n` so that every `"A"` site neighbours only `"B"` sites.
pub fn alternating_ring_sites(n: u32) -> Vec<Site> {
    (0..n)
        .map(|i| {
            let label = if i % 2 == 0 { "A" } else { "B" };
            Site::new(
                i,
                [f64::from(i), 0.0, 0.0],
                label,
                [(i + n - 1) % n, (i + 1) % n],
            )
        })
        .collect()
}

/// A ring where each site lists only its right-hand neighbour, so hops
/// go one way.
pub fn directed_ring_sites(n: u32) -> Vec<Site> {
    (0..n)
        .map(|i| Site::new(i, [f64::from(i), 0.0, 0.0], "A", [(i + 1) % n]))
        .collect()
}

/// An `nx × ny` periodic square grid, spacing 1, four neighbours per site
/// in the order -x, +x, -y, +y. Cell: `[nx, ny, 1]`.
pub fn square_sites(nx: u32, ny: u32) -> Vec<Site> {
    let id = |x: u32, y: u32| y * nx + x;
    let mut sites = Vec::with_capacity((nx * ny) as usize);
    for y in 0..ny {
        for x in 0..nx {
            sites.push(Site::new(
                id(x, y),
                [f64::from(x), f64::from(y), 0.0],
                "A",
                [
                    id((x + nx - 1) % nx, y),
                    id((x + 1) % nx, y),
                    id(x, (y + ny - 1) % ny),
                    id(x, (y + 1) % ny),
                ],
            ));
        }
    }
    sites
}

/// An `n × n × n` periodic simple cubic lattice, spacing 1, six
/// neighbours per site. Cell: `[n, n, n]`.
pub fn simple_cubic_sites(n: u32) -> Vec<Site> {
    let id = |x: u32, y: u32, z: u32| (z * n + y) * n + x;
    let prev = |c: u32| (c + n - 1) % n;
    let next = |c: u32| (c + 1) % n;
    let mut sites = Vec::with_capacity((n * n * n) as usize);
    for z in 0..n {
        for y in 0..n {
            for x in 0..n {
                sites.push(Site::new(
                    id(x, y, z),
                    [f64::from(x), f64::from(y), f64::from(z)],
                    "A",
                    [
                        id(prev(x), y, z),
                        id(next(x), y, z),
                        id(x, prev(y), z),
                        id(x, next(y), z),
                        id(x, y, prev(z)),
                        id(x, y, next(z)),
                    ],
                ));
            }
        }
    }
    sites
}

/// Cell lengths matching [`ring_sites`] and friends.
pub fn ring_cell(n: u32) -> Vec3 {
    [f64::from(n), 1.0, 1.0]
}

/// A ready-built empty ring lattice.
///
/// # Panics
///
/// Panics if `n == 0`.
pub fn ring_lattice(n: u32) -> Lattice {
    Lattice::new(ring_sites(n), ring_cell(n)).expect("ring lattice is valid")
}

/// A ready-built empty simple cubic lattice.
///
/// # Panics
///
/// Panics if `n == 0`.
pub fn simple_cubic_lattice(n: u32) -> Lattice {
    let l = f64::from(n);
    Lattice::new(simple_cubic_sites(n), [l, l, l]).expect("simple cubic lattice is valid")
}
