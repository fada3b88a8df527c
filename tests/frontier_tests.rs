use ordered_float::OrderedFloat;
use pathtrace::{Error, Frontier};

type W = OrderedFloat<f64>;

#[test]
fn test_pop_min_returns_ascending_distances() {
    let mut frontier: Frontier<W> = Frontier::new();
    frontier.push(0, OrderedFloat(10.0));
    frontier.push(1, OrderedFloat(3.0));
    frontier.push(2, OrderedFloat(7.5));

    assert_eq!(frontier.pop_min().unwrap(), (1, OrderedFloat(3.0)));
    assert_eq!(frontier.pop_min().unwrap(), (2, OrderedFloat(7.5)));
    assert_eq!(frontier.pop_min().unwrap(), (0, OrderedFloat(10.0)));
    assert!(frontier.is_empty());
}

#[test]
fn test_equal_distances_break_ties_by_insertion_index() {
    let mut frontier: Frontier<W> = Frontier::new();
    frontier.push(5, OrderedFloat(1.0));
    frontier.push(2, OrderedFloat(1.0));
    frontier.push(9, OrderedFloat(1.0));

    assert_eq!(frontier.pop_min().unwrap().0, 2);
    assert_eq!(frontier.pop_min().unwrap().0, 5);
    assert_eq!(frontier.pop_min().unwrap().0, 9);
}

#[test]
fn test_pop_on_empty_frontier_is_an_error() {
    let mut frontier: Frontier<W> = Frontier::new();
    assert!(matches!(frontier.pop_min(), Err(Error::EmptyFrontier)));
}

#[test]
fn test_duplicate_entries_are_kept() {
    let mut frontier: Frontier<W> = Frontier::new();
    frontier.push(0, OrderedFloat(4.0));
    frontier.push(0, OrderedFloat(2.0));
    assert_eq!(frontier.len(), 2);

    // The fresher, cheaper entry surfaces first; the stale one stays behind
    assert_eq!(frontier.pop_min().unwrap(), (0, OrderedFloat(2.0)));
    assert_eq!(frontier.pop_min().unwrap(), (0, OrderedFloat(4.0)));
}

#[test]
fn test_peek_does_not_remove() {
    let mut frontier: Frontier<W> = Frontier::new();
    frontier.push(3, OrderedFloat(1.5));

    assert_eq!(frontier.peek(), Some((3, OrderedFloat(1.5))));
    assert_eq!(frontier.len(), 1);
}

#[test]
fn test_clear_empties_the_frontier() {
    let mut frontier: Frontier<W> = Frontier::new();
    frontier.push(0, OrderedFloat(1.0));
    frontier.push(1, OrderedFloat(2.0));

    frontier.clear();
    assert!(frontier.is_empty());
    assert_eq!(frontier.len(), 0);
}
