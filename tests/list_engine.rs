use citylist::{top_k, City, CityList, DoublyLinkedList, ListVariant, SinglyLinkedList};

fn cities(n: usize) -> Vec<City> {
    (1..=n)
        .map(|i| City::new(format!("City{}", i), "ST", 1_000 - i as u64))
        .collect()
}

fn names<'a, L: CityList<'a>>(list: &L) -> Vec<&'a str> {
    list.iter().map(|c| c.name.as_str()).collect()
}

/// Checks the invariants every list must hold between operations.
fn assert_consistent<'a, L: CityList<'a>>(list: &L) {
    assert_eq!(list.iter().count(), list.len(), "len must match reachable nodes");
    assert_eq!(list.iter().len(), list.len(), "size hint must match len");
    assert_eq!(list.is_empty(), list.len() == 0);
}

fn assert_doubly_links(list: &DoublyLinkedList<'_>) {
    let mut backward: Vec<_> = list.iter_rev().map(|c| c.name.as_str()).collect();
    backward.reverse();
    assert_eq!(backward, names(list), "prev links disagree with next links");
}

fn run_example<'a, L: CityList<'a>>(all: &'a [City]) -> L {
    let mut list = L::from_ranked(all);
    assert_eq!(names(&list), ["CityA", "CityB", "CityC"]);

    assert_eq!(list.delete_at(2).map(|c| c.name.as_str()), Some("CityB"));
    assert_eq!(names(&list), ["CityA", "CityC"]);

    list.reverse();
    assert_eq!(names(&list), ["CityC", "CityA"]);

    assert!(list.move_to_front(2));
    assert_eq!(names(&list), ["CityA", "CityC"]);
    assert_consistent(&list);
    list
}

#[test]
fn worked_example() {
    let all = [
        City::new("CityC", "ST", 700),
        City::new("CityA", "ST", 900),
        City::new("CityB", "ST", 800),
    ];
    let ranked = top_k(&all, 3).expect("top 3");
    let ranked: Vec<City> = ranked.into_iter().cloned().collect();

    run_example::<SinglyLinkedList>(&ranked);
    let doubly = run_example::<DoublyLinkedList>(&ranked);
    assert_doubly_links(&doubly);
}

#[test]
fn top_renders_cities() {
    let all = [City::new("Austin", "TX", 961_855)];
    let list = SinglyLinkedList::from_ranked(&all);
    let lines: Vec<String> = list.top(5).map(|c| c.to_string()).collect();
    assert_eq!(lines, ["Austin TX, population 961855"]);
}

fn check_empty<'a, L: CityList<'a>>(mut list: L) {
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert!(list.delete_at(1).is_none());
    assert!(list.delete_at(0).is_none());
    assert!(!list.move_to_front(1));
    assert!(!list.move_to_front(2));
    list.reverse();
    assert_eq!(list.top(3).count(), 0);
    assert!(list.get(1).is_none());
    assert_consistent(&list);
}

#[test]
fn empty_list_operations_are_noops() {
    check_empty(SinglyLinkedList::new());
    check_empty(DoublyLinkedList::new());
    check_empty(SinglyLinkedList::default());
    check_empty(DoublyLinkedList::default());
}

fn check_out_of_range<'a, L: CityList<'a>>(all: &'a [City]) {
    let mut list = L::from_ranked(all);
    let before = names(&list);

    assert!(list.delete_at(0).is_none());
    assert!(list.delete_at(all.len() + 1).is_none());
    assert!(list.delete_at(usize::MAX).is_none());
    assert!(!list.move_to_front(0));
    assert!(!list.move_to_front(1));
    assert!(!list.move_to_front(all.len() + 1));

    assert_eq!(names(&list), before);
    assert_consistent(&list);
}

#[test]
fn out_of_range_positions_are_noops() {
    let all = cities(4);
    check_out_of_range::<SinglyLinkedList>(&all);
    check_out_of_range::<DoublyLinkedList>(&all);
}

fn check_delete_each_position<'a, L: CityList<'a>>(all: &'a [City]) {
    for n in 1..=all.len() {
        let mut list = L::from_ranked(all);
        let removed = list.delete_at(n).expect("position in range");
        assert_eq!(removed, &all[n - 1], "{}: wrong node removed at {}", L::DEBUG_NAME, n);
        assert_eq!(list.len(), all.len() - 1);

        let expected: Vec<&str> = all
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != n - 1)
            .map(|(_, c)| c.name.as_str())
            .collect();
        assert_eq!(names(&list), expected);
        assert_consistent(&list);

        // Tail bookkeeping: appending after a delete lands at the end.
        list.append(&all[0]);
        assert_eq!(list.get(list.len()), Some(&all[0]));
        assert_consistent(&list);
    }
}

#[test]
fn delete_removes_exactly_the_nth_node() {
    let all = cities(5);
    check_delete_each_position::<SinglyLinkedList>(&all);
    check_delete_each_position::<DoublyLinkedList>(&all);
}

fn check_drain_from_front<'a, L: CityList<'a>>(all: &'a [City]) {
    let mut list = L::from_ranked(all);
    for expected in all {
        assert_eq!(list.delete_at(1), Some(expected));
    }
    assert!(list.is_empty());
    assert!(list.delete_at(1).is_none());

    // Released slots are reused and order still follows append order.
    for city in all.iter().rev() {
        list.append(city);
    }
    let expected: Vec<&str> = all.iter().rev().map(|c| c.name.as_str()).collect();
    assert_eq!(names(&list), expected);
    assert_consistent(&list);
}

#[test]
fn draining_and_refilling_reuses_nodes() {
    let all = cities(6);
    check_drain_from_front::<SinglyLinkedList>(&all);
    check_drain_from_front::<DoublyLinkedList>(&all);
}

fn check_reverse<'a, L: CityList<'a>>(all: &'a [City]) {
    let mut list = L::from_ranked(all);
    let original = names(&list);

    list.reverse();
    let mut expected = original.clone();
    expected.reverse();
    assert_eq!(names(&list), expected);
    assert_eq!(list.get(1), all.last());

    list.reverse();
    assert_eq!(names(&list), original);

    // The tail must follow the reversal too.
    list.reverse();
    list.append(&all[0]);
    assert_eq!(list.get(list.len()), Some(&all[0]));
    assert_consistent(&list);
}

#[test]
fn reverse_is_an_involution() {
    for n in [1, 2, 3, 7] {
        let all = cities(n);
        check_reverse::<SinglyLinkedList>(&all);
        check_reverse::<DoublyLinkedList>(&all);
    }
}

fn check_move_to_front<'a, L: CityList<'a>>(all: &'a [City]) {
    for n in 2..=all.len() {
        let mut list = L::from_ranked(all);
        assert!(list.move_to_front(n), "{}: move {} refused", L::DEBUG_NAME, n);

        let mut expected = vec![all[n - 1].name.as_str()];
        expected.extend(
            all.iter()
                .enumerate()
                .filter(|(i, _)| *i != n - 1)
                .map(|(_, c)| c.name.as_str()),
        );
        assert_eq!(names(&list), expected);
        assert_eq!(list.len(), all.len());

        list.append(&all[0]);
        assert_eq!(list.get(list.len()), Some(&all[0]));
        assert_consistent(&list);
    }
}

#[test]
fn move_to_front_preserves_relative_order() {
    let all = cities(5);
    check_move_to_front::<SinglyLinkedList>(&all);
    check_move_to_front::<DoublyLinkedList>(&all);
}

fn check_queries_do_not_mutate<'a, L: CityList<'a>>(all: &'a [City]) {
    let list = L::from_ranked(all);
    let before = names(&list);

    let first: Vec<_> = list.top(3).collect();
    let second: Vec<_> = list.top(3).collect();
    assert_eq!(first, second);
    assert_eq!(list.len(), all.len());
    assert_eq!(list.len(), all.len());
    assert_eq!(list.top(100).count(), all.len());
    assert_eq!(list.top(0).count(), 0);
    assert_eq!(list.top(2).len(), 2);

    assert_eq!(names(&list), before);
}

#[test]
fn size_and_top_are_read_only() {
    let all = cities(4);
    check_queries_do_not_mutate::<SinglyLinkedList>(&all);
    check_queries_do_not_mutate::<DoublyLinkedList>(&all);
}

#[test]
fn doubly_backward_links_follow_every_mutation() {
    let all = cities(6);
    let mut list = DoublyLinkedList::from_ranked(&all);
    assert_doubly_links(&list);

    list.delete_at(1);
    assert_doubly_links(&list);
    list.delete_at(list.len());
    assert_doubly_links(&list);
    list.delete_at(2);
    assert_doubly_links(&list);
    list.reverse();
    assert_doubly_links(&list);
    list.move_to_front(list.len());
    assert_doubly_links(&list);
    list.move_to_front(2);
    assert_doubly_links(&list);
    list.append(&all[0]);
    assert_doubly_links(&list);
    assert_consistent(&list);
}

#[test]
fn variant_names() {
    assert_eq!(ListVariant::default(), ListVariant::Singly);
    assert_eq!(ListVariant::Singly.to_string(), "singly");
    assert_eq!(ListVariant::Doubly.to_string(), "doubly");
}
