//! The host sort primitive the engine may delegate to.
//!
//! Whether a given primitive is stable is not taken on faith, the engine asks
//! [`crate::probe::probe_stability`] before trusting it.

use std::cmp::Ordering;

/// A sort primitive of unknown stability.
pub trait NativeSort {
    fn name(&self) -> String;

    fn sort_by<T, F>(&self, v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

impl<N: NativeSort + ?Sized> NativeSort for &N {
    fn name(&self) -> String {
        (**self).name()
    }

    #[inline]
    fn sort_by<T, F>(&self, v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        (**self).sort_by(v, compare);
    }
}

/// `slice::sort_by`, driftsort at the time of writing.
#[derive(Copy, Clone, Debug, Default)]
pub struct StdStable;

impl NativeSort for StdStable {
    fn name(&self) -> String {
        "rust_std_stable".into()
    }

    #[inline]
    fn sort_by<T, F>(&self, v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        v.sort_by(compare);
    }
}

/// `slice::sort_unstable_by`, ipnsort at the time of writing.
#[derive(Copy, Clone, Debug, Default)]
pub struct StdUnstable;

impl NativeSort for StdUnstable {
    fn name(&self) -> String {
        "rust_std_unstable".into()
    }

    #[inline]
    fn sort_by<T, F>(&self, v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        v.sort_unstable_by(compare);
    }
}
