use pretty_assertions::assert_eq;

use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Chain {
    heights: Vec<u32>,
}

fn heights() -> RangeExpr<Chain, u32> {
    Expr::from_fn(|chain: &Chain| RangeValue::from_vec(chain.heights.clone()))
}

// RangeValue

#[test]
fn range_random_access() {
    let range = RangeValue::from_vec(vec!['a', 'b', 'c']);
    assert_eq!(range.len(), 3);
    assert!(!range.is_empty());
    assert_eq!(range.get(0), Some('a'));
    assert_eq!(range.get(2), Some('c'));
    assert_eq!(range.get(3), None);
    assert_eq!(range.to_vec(), vec!['a', 'b', 'c']);
}

#[test]
fn range_from_fn_is_lazy() {
    let squares = RangeValue::from_fn(1_000_000, |i| (i as u64) * (i as u64));
    assert_eq!(squares.get(999_999), Some(999_998_000_001));
    assert_eq!(squares.iter().take(4).collect::<Vec<_>>(), vec![0, 1, 4, 9]);
}

#[test]
fn range_equality_compares_elements() {
    let owned = RangeValue::from_vec(vec![0usize, 1, 2]);
    let computed = RangeValue::from_fn(3, |i| i);
    assert_eq!(owned, computed);
    assert_ne!(owned, RangeValue::from_fn(2, |i| i));
    assert_eq!(format!("{owned:?}"), "[0, 1, 2]");
}

#[test]
fn range_collects_from_iterator() {
    let range: RangeValue<u8> = (1..=3).collect();
    assert_eq!(range.to_vec(), vec![1, 2, 3]);
}

#[test]
fn empty_range() {
    let range: RangeValue<i32> = RangeValue::from_vec(vec![]);
    assert!(range.is_empty());
    assert_eq!(range.get(0), None);
    assert_eq!(range.to_iterator().to_vec(), Vec::<i32>::new());
}

// IteratorValue

#[test]
fn iterator_restarts_each_pass() {
    let iter = IteratorValue::from_vec(vec![1, 2, 3]);
    assert_eq!(iter.to_vec(), vec![1, 2, 3]);
    assert_eq!(iter.to_vec(), vec![1, 2, 3]);
    assert_eq!(iter.clone().iter().count(), 3);
}

#[test]
fn iterator_adapters_are_lazy() {
    let naturals = IteratorValue::from_fn(|| 0u64..);
    let even_squares = naturals.filter(|n| n % 2 == 0).map(|n| n * n);
    assert_eq!(
        even_squares.iter().take(3).collect::<Vec<_>>(),
        vec![0, 4, 16]
    );
}

#[test]
fn iterator_from_range_matches_range() {
    let range = RangeValue::from_vec(vec!["x".to_string(), "y".to_string()]);
    let iter = IteratorValue::from(range.clone());
    assert_eq!(iter.to_vec(), range.to_vec());
}

// Expressions

#[test]
fn range_literal_is_simple() {
    let literal: RangeExpr<Chain, u32> = Expr::literal(RangeValue::from_vec(vec![4, 5]));
    assert!(literal.source_type().is_simple());
    let chain = Chain { heights: vec![] };
    assert_eq!(literal.evaluate(&chain).map(|r| r.to_vec()), Ok(vec![4, 5]));
}

#[test]
fn iterator_literal_is_simple() {
    let literal: IteratorExpr<Chain, u32> = Expr::literal(IteratorValue::from_vec(vec![7]));
    assert!(literal.source_type().is_simple());
    let chain = Chain { heights: vec![1] };
    assert_eq!(literal.evaluate(&chain).map(|i| i.to_vec()), Ok(vec![7]));
}

#[test]
fn narrowing_inherits_source() {
    let range = heights();
    let iter = range.narrow();
    assert_eq!(iter.source_type(), range.source_type());
    assert_eq!(*iter.source_type(), TypeDescriptor::of::<Chain>());
}

#[test]
fn narrowing_yields_the_same_sequence() {
    let range = heights();
    let chain = Chain {
        heights: vec![10, 11, 12],
    };

    let direct = range.evaluate(&chain).map(|r| IteratorValue::from(r).to_vec());
    let narrowed = range.narrow().evaluate(&chain).map(|i| i.to_vec());
    assert_eq!(narrowed, direct);
    assert_eq!(narrowed, Ok(vec![10, 11, 12]));
}

#[test]
fn sequence_capability_classifies() {
    let range = heights();
    let iter = range.narrow();

    let sequences: [&dyn SequenceExpr<Item = u32>; 2] = [&range, &iter];
    let kinds: Vec<_> = sequences.iter().map(|s| s.sequence_kind()).collect();
    assert_eq!(kinds, vec![SequenceKind::Range, SequenceKind::Iterator]);
    for seq in sequences {
        assert_eq!(*seq.sequence_source(), TypeDescriptor::of::<Chain>());
    }

    assert_eq!(ProxyKind::from(SequenceKind::Range), ProxyKind::Range);
    assert_eq!(ProxyKind::from(SequenceKind::Iterator), ProxyKind::Iterator);
}
