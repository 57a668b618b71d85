use log::trace;

use crate::lazy::LazySeq;

/// Every way to cut `items` into a (prefix, suffix) pair.
///
/// Yields `items.len() + 1` pairs, ordered by prefix length `0..=len`.
/// The empty sequence has the single split `([], [])`.
pub fn split<T>(items: &[T]) -> LazySeq<'static, (Vec<T>, Vec<T>)>
where
    T: Clone + 'static,
{
    trace!("Splitting sequence of {} elements", items.len());

    let items = items.to_vec();
    let cuts = 0..=items.len();
    LazySeq::from_iterator(cuts.map(move |cut| {
        let (prefix, suffix) = items.split_at(cut);
        (prefix.to_vec(), suffix.to_vec())
    }))
}

/// [`split`] without the two cuts that leave one side empty
pub fn non_empty_split<T>(items: &[T]) -> LazySeq<'static, (Vec<T>, Vec<T>)>
where
    T: Clone + 'static,
{
    split(items).filter(|(prefix, suffix)| !prefix.is_empty() && !suffix.is_empty())
}
