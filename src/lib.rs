//! Stable sorting on top of a native sort of unknown stability.
//!
//! The native sort is probed once at runtime, see [`probe`]. If it is found to be stable it does
//! the work, otherwise a ping-pong merge sort, see [`merge`], takes over.

use std::cmp::Ordering;

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod comparator;
pub mod engine;
pub mod merge;
pub mod native;
pub mod probe;

// Named implementations for the shared sort tests and the benchmarks.
pub mod stable;

pub use comparator::{by_key, Comparator, Natural};
pub use engine::{default_engine, Engine, Strategy};
pub use merge::merge_sort_by;
pub use native::{NativeSort, StdStable, StdUnstable};
pub use probe::{ProbeConfig, StabilityFlag};

/// Sorts the slice, preserving the initial order of equal elements.
///
/// Uses the process-wide [`default_engine`], which probes the standard library sort once and
/// falls back to [`merge_sort_by`] if the probe catches it reordering equal elements.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// probesort::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    default_engine().sort_by(v, T::cmp);
}

/// Sorts the slice with a comparator function, preserving the initial order of equal elements.
///
/// The comparator must be consistent, the same two elements have to compare the same way every
/// time. If it isn't, the resulting order is unspecified but the slice still holds the same
/// elements. A panic in `compare` propagates to the caller.
///
/// # Examples
///
/// ```
/// let mut v = [(1, "a"), (2, "b"), (1, "c")];
///
/// probesort::sort_by(&mut v, |a, b| a.0.cmp(&b.0));
/// assert!(v == [(1, "a"), (1, "c"), (2, "b")]);
/// ```
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    default_engine().sort_by(v, compare);
}

/// Sorts the slice with a key extraction function, preserving the initial order of equal
/// elements. The key function is called twice per comparison.
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    default_engine().sort_by(v, |a, b| f(a).cmp(&f(b)));
}

/// Sorts the slice with a comparator object, preserving the initial order of equal elements.
#[inline]
pub fn sort_with<T, C>(v: &mut [T], comparator: &C)
where
    C: Comparator<T> + ?Sized,
{
    default_engine().sort_with(v, comparator);
}

/// Sorts the slice with a comparison returning a negative, zero or positive number, preserving
/// the initial order of equal elements.
#[inline]
pub fn sort_by_sign<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> i32,
{
    default_engine().sort_by(v, |a, b| comparator::ordering_from_sign(compare(a, b)));
}
