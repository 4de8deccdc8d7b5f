//! Stable top-down merge sort, used when the native sort can't be trusted to be stable.
//!
//! The recursion ping-pongs between two buffers instead of allocating per merge. Both buffers
//! hold positions into the input slice rather than the elements themselves, so no element is
//! moved until every comparison has been made. The slice is only permuted at the very end, with
//! plain swaps. A panicking comparison therefore leaves the input untouched, and the whole module
//! gets by without `unsafe` or a `T: Clone` bound.

use std::cmp::Ordering;

/// Which of the two buffers holds the sorted data for a sub-range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    Primary,
    Scratch,
}

impl Side {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::Primary => Side::Scratch,
            Side::Scratch => Side::Primary,
        }
    }
}

/// Sorts `v` stably with `compare`, regardless of what any native sort does.
///
/// *O*(*n* \* log(*n*)) comparisons, one scratch allocation of `2 * v.len()` positions.
pub fn merge_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();

    if len < 2 {
        // These inputs are always sorted.
        return;
    }

    let mut primary: Vec<usize> = (0..len).collect();
    let mut scratch: Vec<usize> = vec![0; len];

    let side = sort_range(v, &mut primary, &mut scratch, 0, len - 1, &mut compare);

    let order = match side {
        Side::Primary => &mut primary,
        Side::Scratch => &mut scratch,
    };

    apply_permutation(v, order);
}

/// Sorts the inclusive range `start..=end` and returns the buffer now holding it.
fn sort_range<T, F>(
    v: &[T],
    primary: &mut [usize],
    scratch: &mut [usize],
    start: usize,
    end: usize,
    compare: &mut F,
) -> Side
where
    F: FnMut(&T, &T) -> Ordering,
{
    if start == end {
        return Side::Primary;
    }

    // Left gets the extra element for odd lengths.
    let median = start + (end - start) / 2;

    let left = sort_range(v, primary, scratch, start, median, compare);
    let right = sort_range(v, primary, scratch, median + 1, end, compare);

    let target = left.other();

    let (src, dst) = match left {
        Side::Primary => (&*primary, &mut *scratch),
        Side::Scratch => (&*scratch, &mut *primary),
    };

    merge(v, src, dst, right == target, start, median, end, compare);

    target
}

/// Merges `start..=median` from `src` with `median + 1..=end` into `dst`.
///
/// If `right_in_dst` the right run is read from `dst` itself. That is fine because the write
/// position never overtakes the right read position.
#[allow(clippy::too_many_arguments)]
fn merge<T, F>(
    v: &[T],
    src: &[usize],
    dst: &mut [usize],
    right_in_dst: bool,
    start: usize,
    median: usize,
    end: usize,
    compare: &mut F,
) where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut left = start;
    let mut right = median + 1;

    for out in start..=end {
        debug_assert!(out <= right);

        let right_pos = if right <= end {
            Some(if right_in_dst { dst[right] } else { src[right] })
        } else {
            None
        };

        let take_left = match right_pos {
            None => true,
            Some(_) if left > median => false,
            // Ties go left, which is what makes the sort stable.
            Some(r) => compare(&v[src[left]], &v[r]) != Ordering::Greater,
        };

        if take_left {
            dst[out] = src[left];
            left += 1;
        } else if let Some(r) = right_pos {
            dst[out] = r;
            right += 1;
        }
    }
}

/// Afterwards `v[k]` holds what was at `v[order[k]]`. Follows each cycle once, marking visited
/// slots of `order` as fixed points.
fn apply_permutation<T>(v: &mut [T], order: &mut [usize]) {
    debug_assert_eq!(v.len(), order.len());

    for start in 0..order.len() {
        if order[start] == start {
            continue;
        }

        let mut cur = start;
        loop {
            let src = order[cur];
            order[cur] = cur;
            if src == start {
                break;
            }

            v.swap(cur, src);
            cur = src;
        }
    }
}
