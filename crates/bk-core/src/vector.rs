//! `ResourceVector`: one non-negative unit count per resource type.
//!
//! The same type represents total available units, a process's current
//! allocation, or its remaining need; meaning comes from where it is stored.
//!
//! Vectors are plain values.  Every operation that produces a new state
//! returns or mutates an owned copy, so a caller's vector is never observed
//! mid-edit by the evaluator or the trace builder.

use std::fmt;

use crate::ResourceId;

/// Unit counts indexed by [`ResourceId`].  Length is the resource count `R`.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ResourceVector(Vec<u64>);

impl ResourceVector {
    /// A vector of `resources` zeros.
    pub fn zeroed(resources: usize) -> Self {
        Self(vec![0; resources])
    }

    /// Number of resource types `R`.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Units of `resource`, or `None` if out of range.
    #[inline]
    pub fn get(&self, resource: ResourceId) -> Option<u64> {
        self.0.get(resource.index()).copied()
    }

    /// Overwrite the units of `resource`.  Returns `false` (and does nothing)
    /// if `resource` is out of range.
    pub fn set(&mut self, resource: ResourceId, units: u64) -> bool {
        match self.0.get_mut(resource.index()) {
            Some(slot) => {
                *slot = units;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// `true` iff `demand[j] <= self[j]` for every resource `j`.
    ///
    /// Vectors of different length never cover each other; callers validate
    /// shape before reaching this point.
    pub fn covers(&self, demand: &ResourceVector) -> bool {
        self.len() == demand.len()
            && self.0.iter().zip(&demand.0).all(|(&have, &want)| want <= have)
    }

    /// Component-wise `self[j] += released[j]`, saturating at `u64::MAX`.
    pub fn add_assign(&mut self, released: &ResourceVector) {
        for (have, &add) in self.0.iter_mut().zip(&released.0) {
            *have = have.saturating_add(add);
        }
    }
}

impl From<Vec<u64>> for ResourceVector {
    fn from(units: Vec<u64>) -> Self {
        Self(units)
    }
}

impl<const N: usize> From<[u64; N]> for ResourceVector {
    fn from(units: [u64; N]) -> Self {
        Self(units.to_vec())
    }
}

impl From<ResourceVector> for Vec<u64> {
    fn from(v: ResourceVector) -> Vec<u64> {
        v.0
    }
}

impl fmt::Display for ResourceVector {
    /// `[3 3 2]`: space-separated unit counts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, units) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{units}")?;
        }
        f.write_str("]")
    }
}
