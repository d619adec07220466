use crate::pair::Pair;
use std::slice;
use std::vec;

/// An iterator over the pairs of a sorted sequence in container order.
///
/// This struct is created by the `iter` method of `SortedMap` and `SortedByValue`.
#[derive(Clone, Debug)]
pub struct Iter<'a, K, V> {
    pub(crate) inner: slice::Iter<'a, Pair<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Pair<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// An owning iterator over the pairs of a sorted sequence in container order.
///
/// Yields `(key, value)` tuples.
#[derive(Debug)]
pub struct IntoIter<K, V> {
    pub(crate) inner: vec::IntoIter<Pair<K, V>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Pair::into_tuple)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Pair::into_tuple)
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

/// An iterator over the keys of a sorted sequence in container order.
#[derive(Clone, Debug)]
pub struct Keys<'a, K, V> {
    pub(crate) inner: slice::Iter<'a, Pair<K, V>>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|pair| &pair.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Keys<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|pair| &pair.key)
    }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}

/// An iterator over the values of a sorted sequence in container order.
#[derive(Clone, Debug)]
pub struct Values<'a, K, V> {
    pub(crate) inner: slice::Iter<'a, Pair<K, V>>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|pair| &pair.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Values<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|pair| &pair.value)
    }
}

impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {}
