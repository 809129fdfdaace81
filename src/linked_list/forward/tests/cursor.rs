extern crate std;

use std::{
    format,
    panic::{AssertUnwindSafe, catch_unwind},
    vec,
    vec::Vec,
};

use crate::linked_list::forward::{Cursor, ForwardList};

/// Collect values by walking positions from `begin` to `end`.
fn walk<T: Copy>(list: &ForwardList<T>) -> Vec<T> {
    let mut values = vec![];
    let mut cursor = list.begin();
    while cursor != list.end() {
        values.push(*cursor.value());
        cursor.move_next();
    }
    values
}

#[test]
fn test_positions_on_empty_list() {
    let list = ForwardList::<i32>::new();
    let before = list.before_begin();

    assert!(before.is_before_begin());
    assert!(!before.is_end());
    assert_eq!(before.get(), None);
    assert_eq!(before.peek_next(), None);
    assert!(list.begin().is_end());
    assert_eq!(list.begin(), list.end());
    assert_eq!(before.next_position(), list.end());
}

#[test]
fn test_walk_matches_iter() {
    let list = ForwardList::from([3, 1, 4, 1, 5]);
    assert_eq!(walk(&list), vec![3, 1, 4, 1, 5]);

    let mut cursor = list.before_begin();
    cursor.move_next();
    assert_eq!(cursor, list.begin());
    assert_eq!(cursor.value(), &3);
    assert_eq!(cursor.peek_next(), Some(&1));
}

#[test]
fn test_cursor_equality_is_identity() {
    let a = ForwardList::from([1, 2]);
    let b = ForwardList::from([1, 2]);

    assert_eq!(a.begin(), a.begin());
    assert_ne!(a.begin(), a.begin().next_position());
    assert_ne!(a.begin(), b.begin());
    assert_ne!(a.before_begin(), b.before_begin());
    assert_ne!(a.before_begin(), a.begin());
    // Every end position is the same marker.
    assert_eq!(a.end(), b.end());
    assert_eq!(a.begin().next_position().next_position(), b.end());
}

#[test]
fn test_insert_after_before_begin_is_push_front() {
    let mut pushed = ForwardList::from([2, 3]);
    pushed.push_front(1);

    let mut inserted = ForwardList::from([2, 3]);
    let mut cursor = inserted.cursor_before_begin_mut();
    cursor.insert_after(1);
    assert_eq!(cursor.get(), Some(&1));

    assert_eq!(inserted, pushed);
    assert_eq!(inserted.len(), 3);
}

#[test]
fn test_erase_after_before_begin_is_pop_front() {
    let mut popped = ForwardList::from([1, 2, 3]);
    popped.pop_front();

    let mut erased = ForwardList::from([1, 2, 3]);
    assert_eq!(erased.cursor_before_begin_mut().erase_after(), 1);

    assert_eq!(erased, popped);
    assert_eq!(erased.len(), 2);
}

#[test]
fn test_insert_after_moves_onto_new_node() {
    let mut list = ForwardList::new();
    let mut cursor = list.cursor_before_begin_mut();
    for value in 1..=4 {
        cursor.insert_after(value);
    }
    assert_eq!(cursor.get(), Some(&4));
    assert_eq!(cursor.peek_next(), None);

    cursor.move_next();
    assert!(cursor.is_end());
    assert_eq!(walk(&list), vec![1, 2, 3, 4]);
    assert_eq!(list.len(), 4);
}

#[test]
fn test_erase_after_relinks() {
    let mut list = ForwardList::from([1, 2, 3, 4]);
    let mut cursor = list.cursor_front_mut();

    assert_eq!(cursor.erase_after(), 2);
    assert_eq!(cursor.get(), Some(&1));
    assert_eq!(cursor.peek_next(), Some(&3));

    cursor.move_next();
    assert_eq!(cursor.erase_after(), 4);
    assert_eq!(cursor.peek_next(), None);

    assert_eq!(walk(&list), vec![1, 3]);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_edit_values_through_cursor() {
    let mut list = ForwardList::from([1, 2, 3]);
    let mut cursor = list.cursor_before_begin_mut();
    assert_eq!(cursor.current(), None);

    while let Some(next) = cursor.peek_next_mut() {
        *next += 10;
        cursor.move_next();
    }
    assert!(cursor.peek_next().is_none());
    *cursor.value_mut() = 0;

    assert_eq!(walk(&list), vec![11, 12, 0]);
}

#[test]
fn test_cursor_mut_as_cursor() {
    let mut list = ForwardList::from([5]);
    let mut cursor = list.cursor_front_mut();
    assert!(!cursor.as_cursor().is_end());
    cursor.move_next();
    assert!(cursor.as_cursor().is_end());
    assert_eq!(cursor.as_cursor(), ForwardList::<i32>::new().end());
}

#[test]
fn test_cursor_debug() {
    let list = ForwardList::from([7]);
    assert_eq!(format!("{:?}", list.before_begin()), "Cursor(BeforeBegin)");
    assert_eq!(format!("{:?}", list.begin()), "Cursor(7)");
    assert_eq!(format!("{:?}", list.end()), "Cursor(End)");
}

#[test]
#[should_panic(expected = "insert_after called on a forward list cursor at the end position")]
fn test_insert_after_end_panics() {
    let mut list = ForwardList::from([1]);
    let mut cursor = list.cursor_front_mut();
    cursor.move_next();
    cursor.insert_after(2);
}

#[test]
fn test_insert_after_end_leaves_list_unchanged() {
    let mut list = ForwardList::new();
    let result = catch_unwind(AssertUnwindSafe(|| {
        let mut cursor = list.cursor_front_mut();
        cursor.insert_after(1);
    }));
    assert!(result.is_err());
    assert!(list.is_empty());
}

#[test]
#[should_panic(expected = "erase_after called on a forward list cursor with no successor")]
fn test_erase_after_last_panics() {
    let mut list = ForwardList::from([1, 2]);
    let mut cursor = list.cursor_front_mut();
    cursor.move_next();
    cursor.erase_after();
}

#[test]
#[should_panic(expected = "erase_after called on a forward list cursor with no successor")]
fn test_erase_after_on_empty_panics() {
    let mut list = ForwardList::<i32>::new();
    list.cursor_before_begin_mut().erase_after();
}

#[test]
#[should_panic(expected = "cannot advance a forward list cursor past the end")]
fn test_move_past_end_panics() {
    let list = ForwardList::<i32>::new();
    let mut cursor: Cursor<'_, i32> = list.end();
    cursor.move_next();
}

#[test]
#[should_panic(expected = "before-begin or end position")]
fn test_value_at_end_panics() {
    let list = ForwardList::from([1]);
    list.end().value();
}

#[test]
#[should_panic(expected = "before-begin or end position")]
fn test_value_mut_before_begin_panics() {
    let mut list = ForwardList::from([1]);
    *list.cursor_before_begin_mut().value_mut() = 2;
}
