use log::debug;

use crate::lazy::LazySeq;
use crate::utils::permutations::permute;
use crate::utils::subsequences::subsequences;

/// Every ordered selection of a sub-multiset of `items`.
///
/// For `n` items this yields `sum(n! / (n - k)!)` for `k` in `0..=n`,
/// starting with the empty selection.
pub fn subbags<T>(items: &[T]) -> LazySeq<'static, Vec<T>>
where
    T: Clone + 'static,
{
    debug!("Enumerating subbags of {} items", items.len());

    subsequences(items).flat_map(|sub| permute(&sub))
}

/// Whether every element of `candidate` can be matched to a distinct element of `pool`.
pub fn is_sub_multiset<T: PartialEq>(candidate: &[T], pool: &[T]) -> bool {
    let mut remaining: Vec<&T> = pool.iter().collect();
    candidate.iter().all(|item| {
        match remaining.iter().position(|available| *available == item) {
            Some(found) => {
                remaining.swap_remove(found);
                true
            }
            None => false,
        }
    })
}
