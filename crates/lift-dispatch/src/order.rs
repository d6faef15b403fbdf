//! Floor orderings.
//!
//! Both comparators are plain `fn` items: they hold no state, so the same
//! comparator gives the same answer no matter how often it is requested or
//! applied.

use std::cmp::Ordering;

use lift_core::Floor;

/// Signature accepted by `slice::sort_by`.
pub type FloorOrdering = fn(&Floor, &Floor) -> Ordering;

/// Lower floors first.
#[inline]
pub fn ascending(a: &Floor, b: &Floor) -> Ordering {
    a.cmp(b)
}

/// Higher floors first; the exact inverse of [`ascending`].
#[inline]
pub fn descending(a: &Floor, b: &Floor) -> Ordering {
    b.cmp(a)
}

/// Pick an ordering by direction flag: `false` → ascending, `true` →
/// descending.
#[inline]
pub fn comparator(reversed: bool) -> FloorOrdering {
    if reversed { descending } else { ascending }
}
