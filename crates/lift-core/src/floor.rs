//! The `Floor` value type.
//!
//! A floor is a plain integer level, `0` being the ground floor.  Requests are
//! nothing more than a `Floor`: two calls from the same level are
//! indistinguishable, so the type carries no identity.

use std::fmt;

/// A building level.  Ordered numerically, so `Floor(3) > Floor(1)` means
/// "above".
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u32);

impl Floor {
    pub const GROUND: Floor = Floor(0);

    /// Cast to `usize` for indexing per-floor `Vec`s.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// `true` if `self` lies strictly above `other`.
    #[inline]
    pub fn is_above(self, other: Floor) -> bool {
        self > other
    }

    /// Number of levels between `self` and `other`, regardless of direction.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

impl From<u32> for Floor {
    #[inline(always)]
    fn from(level: u32) -> Floor {
        Floor(level)
    }
}
