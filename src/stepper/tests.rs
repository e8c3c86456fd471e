use crate::stepper::{Direction, PermutationStepper, Permutations};

fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

fn collect_all(text: &str, direction: Direction) -> Vec<String> {
    Permutations::new(PermutationStepper::new(chars(text), direction))
        .map(|p| p.into_iter().collect())
        .collect()
}

#[test]
fn ascending_walk_visits_every_arrangement_in_order() {
    assert_eq!(
        collect_all("abc", Direction::Ascending),
        ["abc", "acb", "bac", "bca", "cab", "cba"]
    );
}

#[test]
fn descending_walk_visits_every_arrangement_in_order() {
    assert_eq!(
        collect_all("cba", Direction::Descending),
        ["cba", "cab", "bca", "bac", "acb", "abc"]
    );
}

#[test]
fn ascending_from_maximal_arrangement_is_exhausted() {
    let mut stepper = PermutationStepper::ascending(chars("cba"));
    assert!(!stepper.has_next());
    assert_eq!(stepper.advance(), chars("cba"));
}

#[test]
fn descending_from_minimal_arrangement_is_exhausted() {
    let mut stepper = PermutationStepper::descending(chars("abc"));
    assert!(!stepper.has_next());
    assert_eq!(stepper.advance(), chars("abc"));
}

#[test]
fn advance_at_exhaustion_is_idempotent() {
    let mut stepper = PermutationStepper::ascending(chars("ab"));
    assert_eq!(stepper.advance(), chars("ba"));
    assert!(!stepper.has_next());
    assert_eq!(stepper.advance(), chars("ba"));
    assert_eq!(stepper.advance(), chars("ba"));
}

#[test]
fn empty_and_single_sequences_are_trivially_exhausted() {
    let mut empty: PermutationStepper<char> = PermutationStepper::ascending(Vec::new());
    assert!(!empty.has_next());
    assert!(empty.advance().is_empty());

    let mut single = PermutationStepper::descending(chars("z"));
    assert!(!single.has_next());
    assert_eq!(single.advance(), chars("z"));
}

#[test]
fn every_step_preserves_the_symbol_multiset() {
    let mut stepper = PermutationStepper::ascending(chars("badc"));
    let mut expected = chars("badc");
    expected.sort_unstable();

    while stepper.has_next() {
        stepper.advance();
        let mut sorted = stepper.current().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, expected);
    }
}

#[test]
fn ascending_walk_is_strictly_increasing() {
    let mut stepper = PermutationStepper::ascending(chars("abcd"));
    let mut previous = stepper.current().to_vec();

    while stepper.has_next() {
        let next = stepper.advance().to_vec();
        assert!(
            next > previous,
            "expected {:?} to follow {:?}",
            next,
            previous
        );
        previous = next;
    }
}

#[test]
fn descending_walk_is_strictly_decreasing() {
    let mut stepper = PermutationStepper::descending(chars("dcba"));
    let mut previous = stepper.current().to_vec();

    while stepper.has_next() {
        let next = stepper.advance().to_vec();
        assert!(
            next < previous,
            "expected {:?} to follow {:?}",
            next,
            previous
        );
        previous = next;
    }
}

#[test]
fn duplicate_free_walk_visits_factorial_many_arrangements() {
    let all = collect_all("abcd", Direction::Ascending);
    assert_eq!(all.len(), 24);
    assert_eq!(all.first().map(String::as_str), Some("abcd"));
    assert_eq!(all.last().map(String::as_str), Some("dcba"));
}

#[test]
fn repeated_symbols_visit_each_distinct_arrangement_once() {
    assert_eq!(collect_all("aab", Direction::Ascending), ["aab", "aba", "baa"]);
    assert_eq!(collect_all("baa", Direction::Descending), ["baa", "aba", "aab"]);
}

#[test]
fn descending_walk_mirrors_the_reversed_ascending_walk() {
    let mut ascending = collect_all("abcd", Direction::Ascending);
    ascending.reverse();
    assert_eq!(collect_all("dcba", Direction::Descending), ascending);
}

#[test]
fn works_for_any_ordered_symbol_type() {
    let all: Vec<Vec<u32>> =
        Permutations::new(PermutationStepper::ascending(vec![1, 2, 3])).collect();
    assert_eq!(
        all,
        [
            vec![1, 2, 3],
            vec![1, 3, 2],
            vec![2, 1, 3],
            vec![2, 3, 1],
            vec![3, 1, 2],
            vec![3, 2, 1],
        ]
    );
}

#[test]
fn into_inner_returns_the_current_arrangement() {
    let mut stepper = PermutationStepper::new(chars("abc"), Direction::Ascending);
    stepper.advance();
    assert_eq!(stepper.direction(), Direction::Ascending);
    assert_eq!(stepper.into_inner(), chars("acb"));
}
