use std::cmp::Ordering;

use crate::native::{NativeSort, StdStable};

sort_impl!("rust_std_stable");

// Straight to the native primitive, skipping the engine and its probe.

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    StdStable.sort_by(v, T::cmp);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    StdStable.sort_by(v, compare);
}
