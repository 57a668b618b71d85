use std::cell::Cell;

use crate::expression::{Evaluated, Expression, Operator, Validator, Value};
use crate::iterator::core::over_splits;
use crate::iterator::{ExpressionGenerator, exprs, results, results_with};
use crate::lazy::LazySeq;

thread_local! {
    static NODES_BUILT: Cell<usize> = const { Cell::new(0) };
}

fn counting_combine(left: &Expression, right: &Expression) -> Vec<Expression> {
    let built = ExpressionGenerator::combine(left, right);
    NODES_BUILT.with(|count| count.set(count.get() + built.len()));
    built
}

fn counting_exprs(numbers: &[Value]) -> LazySeq<'static, Expression> {
    match numbers {
        [] => LazySeq::empty(),
        [n] => LazySeq::singleton(Expression::Leaf(*n)),
        _ => over_splits(numbers, counting_exprs, counting_combine),
    }
}

fn catalan(n: usize) -> usize {
    (0..n).fold(1, |c, k| c * 2 * (2 * k + 1) / (k + 2))
}

#[test]
fn test_catalan_helper() {
    let values: Vec<_> = (0..6).map(catalan).collect();
    assert_eq!(values, vec![1, 1, 2, 5, 14, 42]);
}

#[test]
fn test_exprs_base_cases() {
    assert_eq!(exprs(&[]).count(), 0);
    assert_eq!(exprs(&[4]).collect::<Vec<_>>(), vec![Expression::leaf(4)]);
    // Leaves are not checked by the naive builder.
    assert_eq!(exprs(&[0]).collect::<Vec<_>>(), vec![Expression::leaf(0)]);
}

#[test]
fn test_exprs_count_is_catalan_times_operators() {
    for n in 1..=5 {
        let numbers: Vec<i64> = (1..=n as i64).collect();
        let expected = catalan(n - 1) * 4usize.pow(n as u32 - 1);
        assert_eq!(exprs(&numbers).count(), expected);
    }
}

#[test]
fn test_exprs_order_for_two_numbers() {
    let built: Vec<_> = exprs(&[2, 3]).collect();
    let expected: Vec<_> = Operator::ALL
        .into_iter()
        .map(|op| Expression::node(op, Expression::leaf(2), Expression::leaf(3)))
        .collect();
    assert_eq!(built, expected);
}

#[test]
fn test_exprs_keep_leaf_order() {
    let numbers = [4, 9, 2, 7];
    for expr in exprs(&numbers) {
        assert_eq!(expr.leaves(), numbers.to_vec());
    }
}

#[test]
fn test_results_base_cases() {
    assert_eq!(results(&[]).count(), 0);
    assert_eq!(results(&[0]).count(), 0);
    assert_eq!(results(&[-2]).count(), 0);
    assert_eq!(results(&[5]).collect::<Vec<_>>(), vec![Evaluated::leaf(5)]);
}

#[test]
fn test_results_prune_identities_and_symmetry() {
    let found: Vec<_> = results(&[1, 1]).collect();
    let expected = vec![Evaluated {
        expression: Expression::node(Operator::Add, Expression::leaf(1), Expression::leaf(1)),
        value: 2,
    }];
    assert_eq!(found, expected);
}

#[test]
fn test_results_values_match_evaluation() {
    for item in results(&[2, 3, 7, 10]) {
        assert_eq!(item.expression.evaluate(), Some(item.value));
        assert_eq!(item.expression.leaves(), vec![2, 3, 7, 10]);
    }
}

#[test]
fn test_naive_fused_search_matches_filtered_exprs() {
    let numbers = [6, 2, 3, 1];
    let fused: Vec<Expression> = results_with(&numbers, Validator::Naive)
        .map(|item| item.expression)
        .collect();
    let filtered: Vec<Expression> = exprs(&numbers)
        .filter(|expr| expr.evaluate().is_some())
        .collect();
    assert_eq!(fused, filtered);
}

#[test]
fn test_canonical_results_are_a_subset_of_naive() {
    let numbers = [2, 4, 4, 1];
    let naive: Vec<_> = results_with(&numbers, Validator::Naive).collect();
    let canonical: Vec<_> = results(&numbers).collect();
    assert!(canonical.len() < naive.len());
    assert!(canonical.iter().all(|item| naive.contains(item)));
}

#[test]
fn test_results_first_element_on_large_input() {
    let mut seq = results(&[1, 3, 7, 10, 25, 50]);
    let first = seq.next();
    assert!(first.is_some());
    if let Some(item) = first {
        assert_eq!(item.expression.evaluate(), Some(item.value));
    }
}

#[test]
fn test_generator_combine_evaluated_filters() {
    let left = Evaluated::leaf(6);
    let right = Evaluated::leaf(3);
    let combined = ExpressionGenerator::combine_evaluated(&left, &right, Validator::Canonical);
    let values: Vec<_> = combined.iter().map(|item| item.value).collect();
    // 6 + 3 and 6 * 3 put the larger operand first
    assert_eq!(values, vec![3, 2]);

    let naive = ExpressionGenerator::combine_evaluated(&left, &right, Validator::Naive);
    let values: Vec<_> = naive.iter().map(|item| item.value).collect();
    assert_eq!(values, vec![9, 3, 18, 2]);
}

#[test]
fn test_generator_combine_builds_every_operator() {
    let built = ExpressionGenerator::combine(&Expression::leaf(1), &Expression::leaf(2));
    assert_eq!(built.len(), 4);
}

#[test]
fn test_first_expression_builds_one_chain_of_nodes() {
    let numbers: Vec<Value> = (1..=8).collect();
    NODES_BUILT.with(|count| count.set(0));

    let mut seq = counting_exprs(&numbers);
    assert_eq!(seq.next(), exprs(&numbers).next());

    // One combine per internal node on the leftmost path, four operators each.
    let built = NODES_BUILT.with(|count| count.get());
    assert_eq!(built, 4 * (numbers.len() - 1));
}

#[test]
fn test_counting_builder_matches_exprs() {
    let numbers = [3, 1, 4, 1];
    let counted: Vec<_> = counting_exprs(&numbers).collect();
    let plain: Vec<_> = exprs(&numbers).collect();
    assert_eq!(counted, plain);
}

#[test]
fn test_first_result_on_long_input_is_cheap_and_valid() {
    let numbers: Vec<Value> = (2..=10).collect();
    let first = results(&numbers).next();
    assert!(first.is_some());
    if let Some(item) = first {
        assert_eq!(item.expression.leaves(), numbers);
        assert_eq!(item.expression.evaluate(), Some(item.value));
    }
}
