use std::cmp::Ordering;

use once_cell::sync::Lazy;

use crate::engine::Engine;
use crate::native::StdUnstable;

sort_impl!("probesort_probed_ipnsort_stable");

static ENGINE: Lazy<Engine<StdUnstable>> = Lazy::new(|| Engine::new(StdUnstable));

pub fn engine() -> &'static Engine<StdUnstable> {
    &ENGINE
}

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    ENGINE.sort_by(v, T::cmp);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    ENGINE.sort_by(v, compare);
}
