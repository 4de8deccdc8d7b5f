use std::cmp::Ordering;
use std::marker::PhantomData;

/// A comparison object establishing a total preorder over `T`.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a `Comparator`. Implementations must be consistent,
/// comparing the same two elements must always yield the same result. This is not checked, a
/// violating comparator yields an unspecified, but still complete, permutation of the input.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Inverts the order, ties stay ties so stability is unaffected.
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed { inner: self }
    }

    /// Breaks ties of `self` with `next`.
    fn then_with<C>(self, next: C) -> ThenWith<Self, C>
    where
        Self: Sized,
        C: Comparator<T>,
    {
        ThenWith { first: self, next }
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders by `T`'s `Ord` implementation.
pub struct Natural<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized> Natural<T> {
    pub fn new() -> Self {
        Natural(PhantomData)
    }
}

impl<T: ?Sized> Default for Natural<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + ?Sized> Comparator<T> for Natural<T> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

pub struct Reversed<C> {
    inner: C,
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.inner.compare(b, a)
    }
}

pub struct ThenWith<A, B> {
    first: A,
    next: B,
}

impl<T: ?Sized, A: Comparator<T>, B: Comparator<T>> Comparator<T> for ThenWith<A, B> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.first
            .compare(a, b)
            .then_with(|| self.next.compare(a, b))
    }
}

pub struct ByKey<T: ?Sized, F, K> {
    key_fn: F,
    _marker: PhantomData<fn(&T) -> K>,
}

/// Compares elements by the key `key_fn` extracts.
pub fn by_key<T: ?Sized, K: Ord, F: Fn(&T) -> K>(key_fn: F) -> ByKey<T, F, K> {
    ByKey {
        key_fn,
        _marker: PhantomData,
    }
}

impl<T: ?Sized, K: Ord, F: Fn(&T) -> K> Comparator<T> for ByKey<T, F, K> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key_fn)(a).cmp(&(self.key_fn)(b))
    }
}

/// Maps a negative / zero / positive comparison result onto `Ordering`.
#[inline]
pub fn ordering_from_sign(sign: i32) -> Ordering {
    sign.cmp(&0)
}
