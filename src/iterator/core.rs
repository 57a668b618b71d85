use log::trace;

use crate::expression::{Evaluated, Expression, Validator, Value};
use crate::iterator::generator::ExpressionGenerator;
use crate::lazy::{LazySeq, Replay};
use crate::utils::non_empty_split;

/// Every expression tree whose leaves are exactly `numbers`, in order.
///
/// Nothing is checked here: trees containing illegal steps are produced too
/// and are meant to be filtered with [`Expression::evaluate`].
pub fn exprs(numbers: &[Value]) -> LazySeq<'static, Expression> {
    match numbers {
        [] => LazySeq::empty(),
        [n] => LazySeq::singleton(Expression::Leaf(*n)),
        _ => over_splits(numbers, exprs, ExpressionGenerator::combine),
    }
}

/// Every canonical expression over `numbers` together with its value.
pub fn results(numbers: &[Value]) -> LazySeq<'static, Evaluated> {
    results_with(numbers, Validator::Canonical)
}

/// Build and evaluate in one pass, pruning with `validator` as each node is formed.
///
/// An illegal node is never built, so nothing above it is either.
pub fn results_with(numbers: &[Value], validator: Validator) -> LazySeq<'static, Evaluated> {
    match numbers {
        [] => LazySeq::empty(),
        [n] if *n > 0 => LazySeq::singleton(Evaluated::leaf(*n)),
        [_] => LazySeq::empty(),
        _ => over_splits(
            numbers,
            move |part: &[Value]| results_with(part, validator),
            move |left: &Evaluated, right: &Evaluated| {
                ExpressionGenerator::combine_evaluated(left, right, validator)
            },
        ),
    }
}

/// For each split, each left operand, each right operand: `combine(left, right)`.
///
/// The right operands of a split are pulled only as the first left operand
/// reaches them, then replayed for every later left operand.
pub(crate) fn over_splits<T, R, C>(
    numbers: &[Value],
    recurse: R,
    combine: C,
) -> LazySeq<'static, T>
where
    T: 'static,
    R: Fn(&[Value]) -> LazySeq<'static, T> + Copy + 'static,
    C: Fn(&T, &T) -> Vec<T> + Copy + 'static,
{
    non_empty_split(numbers).flat_map(move |(ls, rs)| {
        LazySeq::defer(move || {
            trace!("Expanding split {:?} | {:?}", ls, rs);
            let rights = Replay::new(recurse(rs.as_slice()));
            recurse(ls.as_slice())
                .flat_map(move |left| with_each_right(left, rights.clone(), combine))
        })
    })
}

fn with_each_right<T, C>(left: T, rights: Replay<'static, T>, combine: C) -> LazySeq<'static, T>
where
    T: 'static,
    C: Fn(&T, &T) -> Vec<T> + 'static,
{
    let combined = (0..).map_while(move |i| rights.with(i, |right| combine(&left, right)));
    LazySeq::from_iterator(combined.flatten())
}
