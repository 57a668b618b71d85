use std::fmt;
use std::iter;

/// A finite sequence whose elements are produced only when pulled.
///
/// Every combinator returns a new `LazySeq` without touching the source, so a
/// consumer that stops after `k` elements never pays for element `k + 1`.
/// Ordering is always the ordering of the underlying producers, which makes
/// two sequences built from the same inputs yield identical streams.
pub struct LazySeq<'a, T> {
    inner: Box<dyn Iterator<Item = T> + 'a>,
}

impl<'a, T: 'a> LazySeq<'a, T> {
    /// The sequence with no elements
    pub fn empty() -> Self {
        Self::from_iterator(iter::empty())
    }

    /// The sequence with exactly one element
    pub fn singleton(value: T) -> Self {
        Self::from_iterator(iter::once(value))
    }

    /// `head` followed by every element of `tail`
    pub fn cons(head: T, tail: LazySeq<'a, T>) -> Self {
        Self::from_iterator(iter::once(head).chain(tail))
    }

    /// Wrap any iterator; nothing is pulled from it until the sequence is consumed
    pub fn from_iterator<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self {
            inner: Box::new(source.into_iter()),
        }
    }

    /// Postpone building a sequence until its first element is requested.
    pub fn defer<F>(build: F) -> Self
    where
        F: FnOnce() -> LazySeq<'a, T> + 'a,
    {
        Self::from_iterator(iter::once_with(build).flatten())
    }

    /// Every element of `self`, then every element of `other`
    pub fn concat(self, other: LazySeq<'a, T>) -> Self {
        Self::from_iterator(self.inner.chain(other))
    }

    /// Concatenate a sequence of sequences in order
    pub fn flatten(sequences: LazySeq<'a, LazySeq<'a, T>>) -> Self {
        Self::from_iterator(sequences.inner.flatten())
    }

    /// Keep only the elements accepted by `predicate`, preserving order
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        Self::from_iterator(self.inner.filter(predicate))
    }

    /// Apply `f` to each element as it is pulled
    pub fn map<U, F>(self, f: F) -> LazySeq<'a, U>
    where
        U: 'a,
        F: FnMut(T) -> U + 'a,
    {
        LazySeq::from_iterator(self.inner.map(f))
    }

    /// Map each element to a sequence and concatenate the results.
    ///
    /// This is the comprehension primitive: `for x in xs, for y in f(x)`.
    pub fn flat_map<U, F>(self, f: F) -> LazySeq<'a, U>
    where
        U: 'a,
        F: FnMut(T) -> LazySeq<'a, U> + 'a,
    {
        LazySeq::flatten(self.map(f))
    }
}

impl<T> Iterator for LazySeq<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> fmt::Debug for LazySeq<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LazySeq").finish_non_exhaustive()
    }
}

impl<'a, T: 'a> Default for LazySeq<'a, T> {
    fn default() -> Self {
        Self::empty()
    }
}
