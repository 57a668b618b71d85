use crate::lazy::LazySeq;

/// All `n!` orderings of `items`.
///
/// The first element is woven into every position of every permutation of
/// the rest. Equal values in different positions are not deduplicated.
pub fn permute<T>(items: &[T]) -> LazySeq<'static, Vec<T>>
where
    T: Clone + 'static,
{
    match items.split_first() {
        None => LazySeq::singleton(Vec::new()),
        Some((head, tail)) => {
            let head = head.clone();
            permute(tail).flat_map(move |perm| interleave(head.clone(), perm))
        }
    }
}

/// Insert `item` at every position of `items`, front to back.
pub fn interleave<T>(item: T, items: Vec<T>) -> LazySeq<'static, Vec<T>>
where
    T: Clone + 'static,
{
    let positions = 0..=items.len();
    LazySeq::from_iterator(positions.map(move |position| {
        let (before, after) = items.split_at(position);
        let mut woven = Vec::with_capacity(items.len() + 1);
        woven.extend_from_slice(before);
        woven.push(item.clone());
        woven.extend_from_slice(after);
        woven
    }))
}
