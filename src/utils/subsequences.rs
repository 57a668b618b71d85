use crate::lazy::LazySeq;

/// All `2^n` order-preserving sub-sequences of `items`.
///
/// Sub-sequences of the tail come first, then the same sub-sequences with
/// the head prepended.
pub fn subsequences<T>(items: &[T]) -> LazySeq<'static, Vec<T>>
where
    T: Clone + 'static,
{
    match items.split_first() {
        None => LazySeq::singleton(Vec::new()),
        Some((head, tail)) => {
            let head = head.clone();
            let rest = tail.to_vec();
            let with_head = LazySeq::defer(move || {
                subsequences(&rest).map(move |sub| {
                    let mut extended = Vec::with_capacity(sub.len() + 1);
                    extended.push(head.clone());
                    extended.extend(sub);
                    extended
                })
            });
            subsequences(tail).concat(with_head)
        }
    }
}
