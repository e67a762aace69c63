use crate::list::{Link, List, Node};
use std::fmt;
use std::fmt::Formatter;
use std::ptr::{self, NonNull};

/// A place in a `List` that does not borrow the list.
///
/// In a list with length *n*, there are *n* + 2 valid positions: the ghost node
/// [`Position::BeforeBegin`], the nodes `At(0)`, ..., `At(n - 1)`, and the end
/// `At(n)`.
///
/// A `Position` is obtained from a cursor with [`Cursor::position`], and can be
/// passed to [`List::emplace_after`] once the cursor is gone.
///
/// # Examples
///
/// ```
/// use forward_list::{List, Position};
///
/// let mut list = List::from([3, 2, 1]);
/// let position = list.begin().position();
/// assert_eq!(position, Position::At(0));
///
/// list.emplace_after(position, 10);
/// assert_eq!(list, List::from([3, 2, 10, 1]));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    /// The ghost node, before the first element.
    BeforeBegin,
    /// The node with the given index, or the end if the index is the length.
    At(usize),
}

impl Position {
    /// Number of steps from the ghost node to this position.
    pub(crate) fn rank(self) -> usize {
        match self {
            Position::BeforeBegin => 0,
            Position::At(index) => index.saturating_add(1),
        }
    }

    pub(crate) fn from_rank(rank: usize) -> Self {
        match rank {
            0 => Position::BeforeBegin,
            rank => Position::At(rank - 1),
        }
    }

    fn successor(self) -> Self {
        Position::from_rank(self.rank().saturating_add(1))
    }
}

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it stops at a place of the list
/// instead of yielding it, and can be turned into a [`Position`].
///
/// It only moves forward: from the ghost node ("before begin"), through every
/// node, to the end. A cursor borrows the list, so it is never left pointing
/// at a removed node.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The ghost node of the
/// list is denoted by `#`, and the end by `$`).
/// ```
/// use forward_list::List;
///
/// // Create a list: [# A B C $]
/// let list = List::from(['C', 'B', 'A']);
///
/// // Create a cursor before begin: [|# A B C $]
/// let mut cursor = list.before_begin();
/// assert_eq!(cursor.current(), None);
/// assert_eq!(cursor.peek_next(), Some(&'A'));
///
/// // Move cursor forward: [# A|B C $]
/// assert!(cursor.seek_forward(2).is_ok());
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Move cursor to the end: [# A B C|$]
/// assert!(cursor.seek_forward(2).is_ok());
/// assert_eq!(cursor, list.end());
///
/// // It cannot move any further
/// assert!(cursor.move_next().is_err());
/// ```
pub struct Cursor<'a, T: 'a> {
    position: Position,
    pub(crate) current: Option<NonNull<Link<T>>>,
    pub(crate) list: &'a List<T>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Cursor::new(self.list, self.current, self.position)
    }
}

/// Compare cursors by the list and the node they point to.
///
/// Only cursors belonging to the same list and pointing to the same node
/// (or both to the end) are considered equal.
///
/// # Examples
/// ```
/// use forward_list::List;
///
/// let list = List::from([3, 2, 1]);
/// let cursor1 = list.begin();
/// let mut cursor2 = cursor1.clone();
/// // The same list, and the same position.
/// assert_eq!(cursor1, cursor2);
///
/// assert!(cursor2.move_next().is_ok());
/// // The same list, but different positions.
/// assert_ne!(cursor1, cursor2);
///
/// let another_list = list.clone();
/// let cursor3 = another_list.begin();
/// // Different list, different positions.
/// assert_ne!(cursor1, cursor3);
/// ```
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_list_with(other) && self.current == other.current
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` holds the unique borrow of the list, so it can splice nodes
/// after its place in constant time. The references it yields are tied to its
/// own lifetime, so it cannot yield multiple elements at once.
///
/// For convenience, [`CursorMut::view`] provides a function to temporarily borrow
/// the list and returns an immutable reference whose lifetime is shorter than the
/// cursor.
///
/// # Examples
///
/// ```compile_fail
/// use forward_list::List;
///
/// let mut list = List::from([3, 2, 1]);
/// let mut cursor = list.begin_mut();
/// println!("{:?}", list.front());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    position: Position,
    pub(crate) current: Option<NonNull<Link<T>>>,
    pub(crate) list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            pub(crate) fn is_ghost_node(&self) -> bool {
                self.current.map_or(false, |link| self.list.is_ghost(link))
            }
            /// The node the cursor points to, or `None` at the ghost node or the end.
            pub(crate) fn current_node(&self) -> Option<NonNull<Node<T>>> {
                if self.is_ghost_node() {
                    return None;
                }
                // A link other than the ghost link is the first field of its node.
                self.current.map(NonNull::cast)
            }
            pub(crate) fn next_node(&self) -> Option<NonNull<Node<T>>> {
                // SAFETY: `current` is either the ghost link or a node of the borrowed list.
                self.current.and_then(|link| unsafe { link.as_ref().next })
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Return the position of the cursor.
            pub fn position(&self) -> Position {
                self.position
            }

            /// Return the index of the cursor, or `None` before begin.
            pub fn index(&self) -> Option<usize> {
                match self.position {
                    Position::BeforeBegin => None,
                    Position::At(index) => Some(index),
                }
            }

            /// Returns the length of the `List`. See [`List::len`].
            pub fn len(&self) -> usize {
                self.list.len()
            }

            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Returns `true` if the cursor is at the ghost node.
            pub fn is_before_begin(&self) -> bool {
                self.position == Position::BeforeBegin
            }

            /// Returns `true` if the cursor is one past the last node.
            pub fn is_end(&self) -> bool {
                self.current.is_none()
            }

            /// Move the cursor to the next position, or return an error
            /// when the cursor is already at the end.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use forward_list::List;
            ///
            /// let list = List::from([1]);
            /// let mut cursor = list.before_begin();
            ///
            /// assert!(cursor.move_next().is_ok());
            /// assert_eq!(cursor.current(), Some(&1));
            ///
            /// assert!(cursor.move_next().is_ok());
            /// assert!(cursor.is_end());
            ///
            /// // Forbid to move past the end
            /// assert!(cursor.move_next().is_err());
            /// assert!(cursor.is_end());
            /// ```
            pub fn move_next(&mut self) -> Result<(), &'static str> {
                if self.is_end() {
                    return Err("`move_next` past the end of the list");
                }
                self.current = self.next_node().map(NonNull::cast);
                self.position = self.position.successor();
                Ok(())
            }

            /// Move forward the cursor by given steps, or return an error
            /// with the steps actually taken when the end is reached first.
            ///
            /// If an error occurs, the cursor will stay at the end.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use forward_list::List;
            ///
            /// let list = List::from([3, 2, 1]);
            /// let mut cursor = list.begin();
            ///
            /// assert!(cursor.seek_forward(2).is_ok());
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// // Forbid to move past the end
            /// assert_eq!(cursor.seek_forward(5), Err(1));
            /// assert!(cursor.is_end());
            /// ```
            pub fn seek_forward(&mut self, steps: usize) -> Result<(), usize> {
                (0..steps).try_for_each(|i| self.move_next().map_err(|_| i))
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("current", &self.current())
                    .field("position", &self.position)
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(
        list: &'a List<T>,
        current: Option<NonNull<Link<T>>>,
        position: Position,
    ) -> Self {
        Self {
            position,
            current,
            list,
        }
    }

    fn same_list_with(&self, other: &Self) -> bool {
        ptr::eq(self.list, other.list)
    }

    /// Provides a reference to the element at the cursor, or `None` if the
    /// cursor is at the ghost node or the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([1]);
    /// assert_eq!(list.before_begin().current(), None);
    /// assert_eq!(list.begin().current(), Some(&1));
    /// assert_eq!(list.end().current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        // SAFETY: a non-ghost node of the borrowed list holds a valid element.
        self.current_node()
            .map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a reference to the element right after the cursor, or `None` if
    /// the cursor is at the last node or the end.
    pub fn peek_next(&self) -> Option<&'a T> {
        // SAFETY: a non-ghost node of the borrowed list holds a valid element.
        self.next_node()
            .map(|node| unsafe { &(*node.as_ptr()).element })
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(
        list: &'a mut List<T>,
        current: Option<NonNull<Link<T>>>,
        position: Position,
    ) -> Self {
        Self {
            position,
            current,
            list,
        }
    }

    /// Provides a reference to the element at the cursor, or `None` if the
    /// cursor is at the ghost node or the end.
    pub fn current(&self) -> Option<&T> {
        // SAFETY: a non-ghost node of the borrowed list holds a valid element.
        self.current_node()
            .map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a mutable reference to the element at the cursor, or `None` if
    /// the cursor is at the ghost node or the end.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        // SAFETY: a non-ghost node of the uniquely borrowed list holds a valid element.
        self.current_node()
            .map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Provides a reference to the element right after the cursor, or `None` if
    /// the cursor is at the last node or the end.
    pub fn peek_next(&self) -> Option<&T> {
        // SAFETY: a non-ghost node of the borrowed list holds a valid element.
        self.next_node()
            .map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Returns a read-only cursor pointing to the current element.
    ///
    /// The lifetime of the returned `Cursor` is bound to that of the `CursorMut`,
    /// which means it cannot outlive the `CursorMut` and that the `CursorMut` is
    /// frozen for the lifetime of the `Cursor`.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.current, self.position)
    }

    /// Converts the `CursorMut` into a read-only cursor at the same position.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.current, self.position)
    }

    /// Provides a read-only view of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([2, 1]);
    /// let mut cursor = list.before_begin_mut();
    /// cursor.insert_after(0);
    /// assert_eq!(cursor.view(), &List::from([2, 1, 0]));
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }

    /// Insert a new node right after the cursor. The cursor stays put.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([3, 1]);
    /// let mut cursor = list.begin_mut();
    ///
    /// cursor.insert_after(2);
    /// assert_eq!(cursor.current(), Some(&1));
    /// assert_eq!(cursor.peek_next(), Some(&2));
    /// assert_eq!(cursor.view(), &List::from([3, 2, 1]));
    /// ```
    pub fn insert_after(&mut self, item: T) {
        let current = self
            .current
            .expect("Cannot insert after the end of the list");
        let node = Node::new_detached(item);
        // SAFETY: `current` is either the ghost link or a node of the list.
        unsafe { self.list.attach_node_after(current, node) };
    }

    /// Split the list into two, after the cursor. Return all the nodes after
    /// the cursor as a new list, and the cursor becomes the last node of the
    /// original one.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([4, 3, 2, 1]);
    /// let mut cursor = list.begin_mut();
    /// assert!(cursor.move_next().is_ok());
    ///
    /// let split = cursor.split_after();
    /// assert_eq!(cursor.peek_next(), None);
    /// assert_eq!(split, List::from([4, 3]));
    /// assert_eq!(list, List::from([2, 1]));
    /// ```
    pub fn split_after(&mut self) -> List<T> {
        let current = match self.current {
            Some(current) => current,
            None => return List::new(),
        };
        let len = self.list.len - self.position.rank();
        // SAFETY: `current` is a link of the list, and the `len` nodes after
        // the first `rank` ones follow it.
        unsafe { self.list.detach_nodes_after(current, len) }
            .map(List::from_detached)
            .unwrap_or_default()
    }
}

/// `CursorIter` provides a forward iterator from the cursor position to the
/// end of the list.
///
/// If you are looking for an iterator over the whole list, see [`Iter`].
///
/// [`Iter`]: crate::Iter
///
/// # Examples
///
/// ```
/// use forward_list::List;
///
/// let list = List::from([3, 2, 1]);
/// let mut cursor = list.begin();
/// assert!(cursor.move_next().is_ok());
///
/// let mut cursor_iter = cursor.into_iter();
/// assert_eq!(cursor_iter.next(), Some(&2));
/// assert_eq!(cursor_iter.next(), Some(&3));
/// assert_eq!(cursor_iter.next(), None);
///
/// // Convert back to a cursor
/// let cursor = cursor_iter.into_cursor();
/// assert_eq!(cursor, list.end());
/// ```
pub struct CursorIter<'a, T: 'a> {
    pub(crate) cursor: Cursor<'a, T>,
}

impl<'a, T: 'a> CursorIter<'a, T> {
    pub fn into_cursor(self) -> Cursor<'a, T> {
        self.cursor
    }
    pub fn peek(&self) -> Option<&'a T> {
        if self.cursor.is_before_begin() {
            return self.cursor.peek_next();
        }
        self.cursor.current()
    }
}

impl<'a, T: 'a> From<CursorIter<'a, T>> for Cursor<'a, T> {
    fn from(cursor_iter: CursorIter<'a, T>) -> Self {
        cursor_iter.into_cursor()
    }
}

impl<'a, T: 'a> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        cursor.into_cursor()
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

unsafe impl<T: Sync> Send for CursorIter<'_, T> {}

unsafe impl<T: Sync> Sync for CursorIter<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::list::cursor::Position;
    use crate::List;
    use std::iter::FromIterator;

    #[test]
    fn cursor_positions() {
        let list = List::from([2, 1, 0]);

        let before_begin = list.before_begin();
        assert!(before_begin.is_before_begin());
        assert!(!before_begin.is_end());
        assert_eq!(before_begin.position(), Position::BeforeBegin);
        assert_eq!(before_begin.index(), None);
        assert_eq!(before_begin.current(), None);
        assert_eq!(before_begin.peek_next(), Some(&0));

        let begin = list.begin();
        assert_eq!(begin.position(), Position::At(0));
        assert_eq!(begin.index(), Some(0));
        assert_eq!(begin.current(), Some(&0));
        assert_eq!(begin.peek_next(), Some(&1));

        let end = list.end();
        assert!(end.is_end());
        assert_eq!(end.position(), Position::At(3));
        assert_eq!(end.current(), None);
        assert_eq!(end.peek_next(), None);

        for (rank, expected) in [None, Some(&0), Some(&1), Some(&2), None]
            .iter()
            .enumerate()
        {
            let position = Position::from_rank(rank);
            assert_eq!(position.rank(), rank);
            assert_eq!(list.cursor(position).current(), *expected);
        }
    }

    #[test]
    fn cursor_move_next() {
        let list = List::from([2, 1, 0]);
        let mut cursor = list.before_begin();
        let mut visited = Vec::new();
        while cursor.move_next().is_ok() {
            if let Some(&x) = cursor.current() {
                visited.push(x);
            }
        }
        assert_eq!(visited, vec![0, 1, 2]);
        assert_eq!(cursor, list.end());
        assert_eq!(cursor.position(), Position::At(3));
        assert!(cursor.move_next().is_err());
        assert_eq!(cursor, list.end());

        let mut cursor = list.before_begin();
        assert_eq!(cursor.seek_forward(4), Ok(()));
        assert_eq!(cursor, list.end());

        let mut cursor = list.begin();
        assert_eq!(cursor.seek_forward(10), Err(3));
        assert!(cursor.is_end());
    }

    #[test]
    fn cursor_empty_list() {
        let list = List::<i32>::new();
        assert_eq!(list.begin(), list.end());
        assert_ne!(list.before_begin(), list.end());

        let mut cursor = list.before_begin();
        assert_eq!(cursor.peek_next(), None);
        assert!(cursor.move_next().is_ok());
        assert_eq!(cursor, list.end());
        assert!(cursor.move_next().is_err());
    }

    #[test]
    #[should_panic(expected = "Cannot create cursor at a nonexistent position")]
    fn cursor_past_the_end() {
        let list = List::from([1]);
        list.cursor(Position::At(2));
    }

    #[test]
    fn cursor_mut_insert_after() {
        let mut list = List::new();
        let mut cursor = list.before_begin_mut();
        cursor.insert_after(3);
        cursor.insert_after(1);
        assert_eq!(cursor.peek_next(), Some(&1));
        assert!(cursor.move_next().is_ok());
        cursor.insert_after(2);
        assert!(cursor.seek_forward(2).is_ok());
        cursor.insert_after(4);
        assert_eq!(cursor.len(), 4);
        assert_eq!(cursor.position(), Position::At(2));
        assert_eq!(cursor.current(), Some(&3));

        if let Some(x) = cursor.current_mut() {
            *x *= 10;
        }
        let cursor = cursor.into_cursor();
        assert_eq!(cursor.current(), Some(&30));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 30, 4]);
    }

    #[test]
    #[should_panic(expected = "Cannot insert after the end of the list")]
    fn cursor_mut_insert_after_end() {
        let mut list = List::from([1]);
        let mut cursor = list.begin_mut();
        assert!(cursor.move_next().is_ok());
        cursor.insert_after(2);
    }

    #[test]
    fn cursor_mut_split_after() {
        fn split_at<const N: usize>(input: [i32; N], rank: usize) -> (Vec<i32>, Vec<i32>) {
            let mut list = List::from(input);
            let split = list.cursor_mut(Position::from_rank(rank)).split_after();
            assert_eq!(list.len(), list.iter().count());
            assert_eq!(split.len(), split.iter().count());
            (Vec::from_iter(list), Vec::from_iter(split))
        }
        assert_eq!(split_at([3, 2, 1], 0), (vec![], vec![1, 2, 3]));
        assert_eq!(split_at([3, 2, 1], 1), (vec![1], vec![2, 3]));
        assert_eq!(split_at([3, 2, 1], 3), (vec![1, 2, 3], vec![]));
        assert_eq!(split_at([3, 2, 1], 4), (vec![1, 2, 3], vec![]));
        assert_eq!(split_at([], 0), (vec![], vec![]));
        assert_eq!(split_at([], 1), (vec![], vec![]));
    }

    #[test]
    fn cursor_mut_insert_and_split_at_ghost() {
        let mut list = List::new();
        let mut cursor = list.before_begin_mut();
        cursor.insert_after(3);
        cursor.insert_after(2);

        let tail = cursor.split_after();
        assert!(cursor.is_empty());
        assert_eq!(cursor.peek_next(), None);

        cursor.insert_after(1);
        cursor.insert_after(0);
        assert!(cursor.move_next().is_ok());
        let rest = cursor.split_after();
        assert_eq!(cursor.len(), 1);

        cursor.insert_after(5);
        assert_eq!(cursor.peek_next(), Some(&5));
        assert!(!cursor.is_before_begin());

        assert_eq!(Vec::from_iter(list), vec![0, 5]);
        assert_eq!(Vec::from_iter(tail), vec![2, 3]);
        assert_eq!(Vec::from_iter(rest), vec![1]);
    }

    #[test]
    fn cursor_iter() {
        let list = List::from([3, 2, 1]);
        assert_eq!(Vec::from_iter(list.before_begin()), vec![&1, &2, &3]);
        assert_eq!(Vec::from_iter(list.begin()), vec![&1, &2, &3]);
        assert_eq!(Vec::from_iter(list.cursor(Position::At(2))), vec![&3]);
        assert_eq!(Vec::from_iter(list.end()), Vec::<&i32>::new());

        let mut iter = list.before_begin().into_iter();
        assert_eq!(iter.peek(), Some(&1));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.peek(), Some(&2));
    }
}
