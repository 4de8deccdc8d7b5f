use std::cmp::Ordering;

sort_impl!("probesort_engine_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    crate::sort(v);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    crate::sort_by(v, compare);
}
