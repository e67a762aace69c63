use crate::list::cursor::{Cursor, CursorIter};
use crate::list::{List, Node};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// An iterator over the elements of a `List`.
///
/// It holds the next node to yield, until it reaches the end of the list.
///
/// Though the `Iter` does not hold a reference from the list,
/// it actually *borrows* (immutably) from the list, so a phantom
/// marker of `&'a List<T>` is added to protect the list from being
/// write.
///
/// # Examples
///
/// ```compile_fail
/// use forward_list::List;
///
/// let mut list = List::from([3, 2, 1]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_front(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    next: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a List<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        let next = list.front_node();
        let len = list.len();
        let _marker = PhantomData;
        Self { next, len, _marker }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        let mut next = self.next;
        while let Some(node) = next {
            // SAFETY: the nodes after `next` belong to the borrowed list.
            let node = unsafe { node.as_ref() };
            f.field(&node.element);
            next = node.link.next;
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return the element of `next` and move on to its successor,
    /// or return `None` if the end is reached.
    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: `next` is either `None` or a node of the borrowed list.
        let current = unsafe { &*self.next?.as_ptr() };
        self.next = current.link.next;
        self.len -= 1;
        Some(&current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `List`.
///
/// Though the `IterMut` does not hold a reference from the list,
/// it actually *borrows* (mutably) from the list, so a phantom
/// marker of `&'a mut List<T>` is added to protect the list from
/// being read.
///
/// # Examples
///
/// `List` is not readable after an `IterMut` is created.
/// ```compile_fail
/// use forward_list::List;
///
/// let mut list = List::from([3, 2, 1]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.front());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    next: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        let next = list.front_node();
        let len = list.len();
        let _marker = PhantomData;
        Self { next, len, _marker }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("IterMut");
        let mut next = self.next;
        while let Some(node) = next {
            // SAFETY: the nodes after `next` belong to the borrowed list.
            let node = unsafe { node.as_ref() };
            f.field(&node.element);
            next = node.link.next;
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    /// Return the element of `next` and move on to its successor,
    /// or return `None` if the end is reached.
    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: `next` is either `None` or a node of the uniquely borrowed list,
        // and every node is yielded at most once.
        let current = unsafe { &mut *self.next?.as_ptr() };
        self.next = current.link.next;
        self.len -= 1;
        Some(&mut current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: List::into_iter
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len;
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Builds a list by pushing every item to the front, in the order they are
/// yielded. The list therefore holds the items in reverse order.
///
/// # Examples
///
/// ```
/// use forward_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter(1..=3);
/// assert_eq!(Vec::from_iter(list), vec![3, 2, 1]);
/// ```
impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

/// Builds a list from a literal sequence by pushing every item to the front.
/// The list therefore holds the items in reverse order.
///
/// See [`List::assign`] to fill a list in the order of the sequence.
///
/// # Examples
///
/// ```
/// use forward_list::List;
///
/// let list = List::from([9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
/// assert!(list.iter().copied().eq(0..10));
/// ```
impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(array: [T; N]) -> Self {
        Self::from_iter(array)
    }
}

/// Pushes every item to the front, in the order they are yielded.
impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push_front(item));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<'a, T: 'a> Iterator for CursorIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.is_before_begin() {
            self.cursor.move_next().ok()?;
        }
        let current = self.cursor.current()?;
        self.cursor.move_next().ok()?;
        Some(current)
    }
}

impl<'a, T: 'a> FusedIterator for CursorIter<'a, T> {}

/// Convert the cursor to an iterator over the elements from the cursor
/// to the end.
impl<'a, T: 'a> IntoIterator for Cursor<'a, T> {
    type Item = &'a T;
    type IntoIter = CursorIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        CursorIter { cursor: self }
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::fmt::Debug;
    use std::iter::FromIterator;

    #[test]
    fn test_iter() {
        macro_rules! test_iter {
            ($FN:ident, $ITER:ident) => {
                fn $FN<T, I>(input: I, mid: usize)
                where
                    T: Eq + Debug + Clone,
                    I: IntoIterator<Item = T>,
                {
                    #[allow(unused_mut)]
                    let mut vec = Vec::from_iter(input);
                    #[allow(unused_mut)]
                    let mut list = List::from_iter(vec.iter().rev().cloned());
                    let len = vec.len();
                    let mut iter = list.$ITER();
                    for (i, item) in vec.$ITER().enumerate() {
                        assert_eq!(iter.next(), Some(item));
                        assert_eq!(iter.len(), len - i - 1);
                    }
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.len(), 0);

                    let mut iter = list.$ITER();
                    for item in vec.$ITER().take(mid) {
                        assert_eq!(iter.next(), Some(item));
                    }
                    assert_eq!(iter.len(), len - mid);
                }
            };
        }
        test_iter!(test_iter, iter);
        test_iter!(test_iter_mut, iter_mut);

        fn test_case<T, I>(input: I, mid: usize)
        where
            T: Eq + Debug + Clone,
            I: IntoIterator<Item = T> + Clone,
        {
            test_iter(input.clone(), mid);
            test_iter_mut(input, mid);
        }
        test_case(0..10, 10);
        test_case(0..10, 5);
        test_case(0..10, 0);
        test_case(0..2, 1);
        test_case(0..1, 1);
        test_case(0..0, 0);
    }

    #[test]
    fn test_into_iter() {
        let list = List::from(["c", "b", "a"]);
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some("a"));
        assert_eq!(iter.len(), 2);
        assert_eq!(Vec::from_iter(iter), vec!["b", "c"]);
    }

    #[test]
    fn test_from_literal_reverses() {
        let list = List::from([9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(list.len(), 10);
        assert_eq!(Vec::from_iter(list.iter().copied()), Vec::from_iter(0..10));

        let mut list = List::from_iter(0..3);
        list.extend(&[3, 4]);
        assert_eq!(Vec::from_iter(list), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_borrowed_into_iter() {
        let mut list = List::from([3, 2, 1]);
        for x in &mut list {
            *x *= 2;
        }
        let mut sum = 0;
        for x in &list {
            sum += *x;
        }
        assert_eq!(sum, 12);
    }
}
