use forward_list::List;
use std::iter::FromIterator;
use std::mem;

fn contents(list: &List<i32>) -> Vec<i32> {
    Vec::from_iter(list.iter().copied())
}

#[test]
fn construction_split_insertion_and_assignment() {
    // construction
    let mut list1 = List::from([9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
    let mut list2 = list1.clone();
    let mut list3 = mem::take(&mut list1);
    let mut list4 = list3.split_when(|&value| value == 3);

    assert_eq!(contents(&list1), Vec::<i32>::new());
    assert_eq!(contents(&list2), Vec::from_iter(0..10));
    assert_eq!(contents(&list3), vec![0, 1, 2]);
    assert_eq!(contents(&list4), Vec::from_iter(3..10));

    assert_eq!(list1.len(), 0);
    assert_eq!(list2.len(), 10);
    assert_eq!(list3.len(), 3);
    assert_eq!(list4.len(), 7);

    // insertions
    list1.push_front(10);
    list1.push_front(8);
    list1.emplace_front(6);
    list1.emplace_front(4);
    list1.emplace_after(list1.before_begin().position(), 2);
    list1.emplace_after(list1.before_begin().position(), 0);
    assert_eq!(contents(&list1), vec![0, 2, 4, 6, 8, 10]);
    assert_eq!(list1.len(), 6);

    assert_eq!(list1.pop_front(), Some(0));
    assert_eq!(contents(&list1), vec![2, 4, 6, 8, 10]);

    // assignment
    list1.clone_from(&list3);
    list4 = mem::take(&mut list2);

    assert_eq!(contents(&list1), vec![0, 1, 2]);
    assert_eq!(contents(&list2), Vec::<i32>::new());
    assert_eq!(contents(&list3), vec![0, 1, 2]);
    assert_eq!(contents(&list4), Vec::from_iter(0..10));
    assert_eq!(list1.len(), 3);
    assert_eq!(list2.len(), 0);
    assert_eq!(list4.len(), 10);

    // the copies stay independent
    list3.push_front(-1);
    assert_eq!(contents(&list1), vec![0, 1, 2]);
}

#[test]
fn resize_grows_with_value_and_shrinks() {
    let mut list = List::from([3, 2, 1]);
    list.resize(5, 7);
    assert_eq!(contents(&list), vec![1, 2, 3, 7, 7]);

    list.resize(1, 7);
    assert_eq!(contents(&list), vec![1]);

    list.resize(0, 7);
    assert!(list.is_empty());
    list.clear();
    assert!(list.is_empty());
}

#[test]
fn cursor_positions_feed_emplace_after() {
    let mut list = List::from([5, 3, 1]);
    let position = {
        let mut cursor = list.begin();
        while cursor.current().map_or(false, |&x| x < 3) {
            cursor.move_next().unwrap();
        }
        cursor.position()
    };
    list.emplace_after(position, 4);
    list.emplace_after(list.begin().position(), 2);
    assert_eq!(contents(&list), vec![1, 2, 3, 4, 5]);
    // a position is an index, not a handle to the node
    assert_eq!(list.cursor(position).current(), Some(&2));
}
