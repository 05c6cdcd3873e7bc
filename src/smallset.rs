use {
    smallvec::SmallVec,
    std::{borrow::Borrow, iter::Iterator},
};

/// [`std::collections::HashSet`], but optimized for a (very) small number of entries
/// and preserving insertion order.
///
/// Uses a [`smallvec::SmallVec`] for storage.
/// `O(n)` [`insert`](SmallSet::insert) / [`remove`](SmallSet::remove) / [`contains`](SmallSet::contains) complexity.
#[derive(Clone, Debug)]
pub(crate) struct SmallSet<T, const N: usize>(SmallVec<[T; N]>);

impl<T: Eq, const N: usize> SmallSet<T, N> {
    /// See [`std::collections::HashSet::new`].
    pub(crate) fn new() -> Self {
        Self(SmallVec::new())
    }

    /// See [`std::collections::HashSet::insert`].
    ///
    /// If the set did not have this value present, true is returned.
    /// If the set did have this value present, false is returned.
    pub(crate) fn insert(&mut self, value: T) -> bool {
        if self.contains(&value) {
            false
        } else {
            self.0.push(value);
            true
        }
    }

    /// See [`std::collections::HashSet::take`].
    ///
    /// Unlike the `std` set, the relative order of the remaining entries is preserved.
    pub(crate) fn take<Q: ?Sized>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Eq,
    {
        self.0
            .iter()
            .position(|v| v.borrow() == value)
            .map(|p| self.0.remove(p))
    }

    /// See [`std::collections::HashSet::remove`].
    ///
    /// Returns whether the value was present in the set.
    pub(crate) fn remove<Q: ?Sized>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq,
    {
        self.take(value).is_some()
    }

    /// See [`std::collections::HashSet::get`].
    pub(crate) fn get<Q: ?Sized>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Eq,
    {
        self.0.iter().find(|v| (*v).borrow() == value)
    }

    /// Like [`get`](SmallSet::get), but the caller must not change the value's identity.
    pub(crate) fn get_mut<Q: ?Sized>(&mut self, value: &Q) -> Option<&mut T>
    where
        T: Borrow<Q>,
        Q: Eq,
    {
        self.0.iter_mut().find(|v| (**v).borrow() == value)
    }

    /// See [`std::collections::HashSet::contains`].
    pub(crate) fn contains<Q: ?Sized>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq,
    {
        self.get(value).is_some()
    }

    /// See [`std::collections::HashSet::iter`].
    ///
    /// Iterates in insertion order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    /// See [`std::collections::HashSet::len`].
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    /// See [`std::collections::HashSet::drain`].
    pub(crate) fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.0.drain(..)
    }
}
