use std::cmp::Ordering;

use crate::merge::merge_sort_by;

sort_impl!("probesort_merge_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort_by(v, T::cmp);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort_by(v, compare);
}
