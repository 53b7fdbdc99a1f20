//! Strongly-typed identifiers and the [`SiteLabel`] type.

use std::borrow::Borrow;
use std::fmt;

/// Identifies a lattice site.
///
/// Site identifiers are supplied by whoever builds the lattice geometry
/// and must be unique within one lattice. They are stable for the
/// lifetime of a run; neighbour lists refer to sites by `SiteId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SiteId(pub u32);

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SiteId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a mobile particle.
///
/// Assigned sequentially from zero each time a lattice is populated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u32);

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ParticleId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Category of a lattice site (species, sublattice, site type).
///
/// Labels group sites for energies and statistics. `SiteLabel` borrows
/// as `str`, so label-keyed maps can be queried with string literals:
///
/// ```
/// use std::collections::HashMap;
/// use kmc_core::SiteLabel;
///
/// let mut energies: HashMap<SiteLabel, f64> = HashMap::new();
/// energies.insert(SiteLabel::from("oct"), -0.1);
/// assert_eq!(energies.get("oct"), Some(&-0.1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SiteLabel(String);

impl SiteLabel {
    /// Create a label from anything string-like.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SiteLabel {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl From<String> for SiteLabel {
    fn from(v: String) -> Self {
        Self(v)
    }
}

impl Borrow<str> for SiteLabel {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SiteLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
