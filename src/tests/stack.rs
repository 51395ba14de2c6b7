// This is actually defined at `crate::stack::tests_for_stack`

use super::*;

#[test]
fn push_and_pop_leave_the_original_alone() {
    let empty: Stack<i32> = Stack::new();
    assert!(empty.is_empty());
    assert_eq!(empty.peek(), None);
    assert_eq!(empty.pop(), None);

    let one = empty.push(1);
    let two = one.push(2);
    assert_eq!(empty.len(), 0);
    assert_eq!(one.len(), 1);
    assert_eq!(two.len(), 2);
    assert_eq!(two.peek(), Some(&2));

    let (top, rest) = two.pop().unwrap();
    assert_eq!(top, 2);
    assert_eq!(rest, one);
    assert_eq!(two.len(), 2);
}

#[test]
fn branches_share_their_tail() {
    let base: Stack<&str> = ["x", "y"].into_iter().collect();
    let left = base.push("l");
    let right = base.push("r");
    assert_eq!(left.iter().copied().collect::<Vec<_>>(), ["l", "y", "x"]);
    assert_eq!(right.iter().copied().collect::<Vec<_>>(), ["r", "y", "x"]);
    assert_eq!(left.pop().unwrap().1, right.pop().unwrap().1);
}

#[test]
fn from_iterator_puts_the_last_element_on_top() {
    let s: Stack<i32> = (1..=3).collect();
    assert_eq!(s.peek(), Some(&3));
    assert_eq!(s.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
}

#[test]
fn equality_is_structural() {
    let a: Stack<i32> = (1..=3).collect();
    let b = Stack::new().push(1).push(2).push(3);
    assert_eq!(a, b);
    assert_ne!(a, b.push(4));
    assert_ne!(a, Stack::new());
    assert_eq!(format!("{:?}", a), "[3, 2, 1]");
}
