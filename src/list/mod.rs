use std::fmt::{Debug, Formatter};
use std::iter;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::list::cursor::{Cursor, CursorMut, Position};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `List` is a singly-linked list with owned nodes, anchored by a ghost node.
/// It allows inserting and removing elements at the front in constant time, and
/// inserting after any node a cursor points to.
///
/// The `List` contains:
/// - a pointer `ghost` to the ghost link, allocated on heap, whose `next` points
///   to the first node (or is `None` if the list is empty);
/// - a length field `len` indicating the number of nodes in the list.
///
/// # Naming Conventions
///
/// - "before begin": the position of the ghost node, which has no element;
/// - "end": the position one past the last node, which has no node at all.
pub struct List<T> {
    ghost: NonNull<Link<T>>,
    /// the length of the list
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// The successor pointer shared by the ghost node and every node of the list.
///
/// It is the first field of [`Node`], so a pointer to the link of a node can
/// be cast back to the node itself.
#[repr(C)]
pub(crate) struct Link<T> {
    pub(crate) next: Option<NonNull<Node<T>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) link: Link<T>,
    pub(crate) element: T,
}

/// Nodes fragment detached from a list, used in list splitting.
///
/// The fragment starts at `front` and follows `next` until `None`.
pub(crate) struct DetachedNodes<T> {
    pub(crate) front: NonNull<Node<T>>,
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

// private methods
impl<T> List<T> {
    pub(crate) fn ghost_link(&self) -> NonNull<Link<T>> {
        self.ghost
    }
    pub(crate) fn front_node(&self) -> Option<NonNull<Node<T>>> {
        // SAFETY: the ghost link lives as long as the list.
        unsafe { self.ghost.as_ref().next }
    }
    pub(crate) fn is_ghost(&self, link: NonNull<Link<T>>) -> bool {
        link == self.ghost
    }

    /// Returns the link of the node at `position`, or `None` if there is no
    /// such node.
    pub(crate) fn link_at_mut(&mut self, position: Position) -> Option<NonNull<Link<T>>> {
        let mut link = self.ghost_link();
        for _ in 0..position.rank() {
            // SAFETY: `link` is either the ghost link or a node owned by the list.
            link = unsafe { link.as_ref().next }?.cast();
        }
        Some(link)
    }

    /// Returns the link of the last node, or the ghost link if the list is empty.
    pub(crate) fn back_link_mut(&mut self) -> NonNull<Link<T>> {
        let mut link = self.ghost_link();
        // SAFETY: `link` is either the ghost link or a node owned by the list.
        while let Some(next) = unsafe { link.as_ref().next } {
            link = next.cast();
        }
        link
    }

    /// Attach a single detached node `node` right after the link `prev`.
    ///
    /// It is unsafe because it does not check whether `prev` belongs to the list.
    ///
    /// If `prev` does not belong to the list, this function call will make
    /// the list ill-formed.
    pub(crate) unsafe fn attach_node_after(
        &mut self,
        mut prev: NonNull<Link<T>>,
        mut node: NonNull<Node<T>>,
    ) {
        debug_assert!(node.as_ref().link.next.is_none());
        let next = prev.as_mut().next.replace(node);
        node.as_mut().link.next = next;
        self.len += 1;
    }

    /// Detach the node right after the link `prev`, and return it as a box,
    /// or return `None` if `prev` is the last link.
    ///
    /// It is unsafe because it does not check whether `prev` belongs to the list.
    pub(crate) unsafe fn detach_node_after(
        &mut self,
        mut prev: NonNull<Link<T>>,
    ) -> Option<Box<Node<T>>> {
        let mut node = Box::from_raw(prev.as_mut().next?.as_ptr());
        prev.as_mut().next = node.link.next.take();
        self.len -= 1;
        Some(node)
    }

    /// Detach all the nodes after the link `prev`, and return the detached
    /// nodes, or return `None` if `prev` is the last link.
    ///
    /// It is unsafe because it does not check whether `prev` belongs to the list,
    /// or whether exactly `len` nodes follow `prev`.
    pub(crate) unsafe fn detach_nodes_after(
        &mut self,
        mut prev: NonNull<Link<T>>,
        len: usize,
    ) -> Option<DetachedNodes<T>> {
        let front = prev.as_mut().next.take()?;
        self.len -= len;
        Some(DetachedNodes::new(front, len))
    }

    /// Construct a list from detached nodes.
    ///
    /// It is safe because the detached nodes are guaranteed to be a valid chain
    /// when construction.
    pub(crate) fn from_detached(detached: DetachedNodes<T>) -> Self {
        let mut list = List::new();
        // SAFETY: the ghost link of a new list is empty and owned by it.
        unsafe { list.ghost.as_mut().next = Some(detached.front) };
        list.len = detached.len;
        list
    }

    /// Append the items of `iter` after the last node, in order.
    pub(crate) fn append_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.back_link_mut();
        for item in iter {
            let node = Node::new_detached(item);
            // SAFETY: `tail` is the last link of the list.
            unsafe { self.attach_node_after(tail, node) };
            tail = node.cast();
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use forward_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        let ghost = NonNull::from(Box::leak(Box::new(Link { next: None })));
        let len = 0;
        let _marker = PhantomData;
        Self {
            ghost,
            len,
            _marker,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node().is_none()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the largest length a `List` can report.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// assert_eq!(List::<u8>::new().max_size(), usize::MAX);
    /// ```
    #[inline]
    pub const fn max_size(&self) -> usize {
        usize::MAX
    }

    /// Removes all elements from the `List`.
    ///
    /// The nodes are destroyed one by one from the front, so dropping a long
    /// list never recurses.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.begin().current()
    }

    /// Provides a mutable reference to the front element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// if let Some(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `ghost.next` is either `None` or the first node owned by the list.
        self.front_node()
            .map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front().unwrap(), &2);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front().unwrap(), &1);
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.emplace_front(elt);
    }

    /// Adds an element first in the list, and returns a mutable reference to it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// *list.emplace_front(2) += 40;
    /// assert_eq!(list.front(), Some(&42));
    /// ```
    pub fn emplace_front(&mut self, elt: T) -> &mut T {
        self.emplace_after(Position::BeforeBegin, elt)
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let ghost = self.ghost_link();
        // SAFETY: the ghost link always belongs to the list.
        unsafe { self.detach_node_after(ghost) }.map(Node::into_element)
    }

    /// Inserts an element right after the node at `position`, and returns a
    /// mutable reference to it.
    ///
    /// [`Position::BeforeBegin`] inserts a new first element. Positions are
    /// usually taken from a cursor with [`Cursor::position`].
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*k*) time, where *k* is the index
    /// of `position`, since the node is located by walking from the front.
    /// See [`CursorMut::insert_after`] for the constant time version.
    ///
    /// # Panics
    ///
    /// Panics if there is no node at `position` (e.g. it is the end of the list).
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::{List, Position};
    ///
    /// let mut list = List::from([3, 1, 0]);
    /// list.emplace_after(Position::At(1), 2);
    /// list.emplace_after(list.before_begin().position(), -1);
    ///
    /// assert_eq!(list, List::from([3, 2, 1, 0, -1]));
    /// ```
    pub fn emplace_after(&mut self, position: Position, elt: T) -> &mut T {
        let prev = self
            .link_at_mut(position)
            .expect("Cannot emplace after a nonexistent node");
        let mut node = Node::new_detached(elt);
        // SAFETY: `prev` is a link of the list, found by walking from the ghost node.
        unsafe {
            self.attach_node_after(prev, node);
            &mut node.as_mut().element
        }
    }

    /// Shortens the list, keeping the first `len` elements and dropping
    /// the rest.
    ///
    /// If `len` is greater than or equal to the list's current length, this
    /// has no effect.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([4, 3, 2, 1]);
    /// list.truncate(2);
    /// assert_eq!(list, List::from([2, 1]));
    ///
    /// list.truncate(5);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let removed = self.len - len;
        if let Some(prev) = self.link_at_mut(Position::from_rank(len)) {
            // SAFETY: `prev` is a link of the list, and exactly `removed` nodes follow it.
            if let Some(detached) = unsafe { self.detach_nodes_after(prev, removed) } {
                drop(List::from_detached(detached));
            }
        }
    }

    /// Resizes the list in-place so that `len` is equal to `new_size`.
    ///
    /// If `new_size` is greater than `len`, the list is extended at the back
    /// by the difference, with each additional slot filled with `value`.
    /// If `new_size` is less than `len`, the list is simply truncated.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([3, 2, 1]);
    /// list.resize(5, 7);
    /// assert_eq!(list, List::from([7, 7, 3, 2, 1]));
    ///
    /// list.resize(2, 0);
    /// assert_eq!(list, List::from([2, 1]));
    /// ```
    pub fn resize(&mut self, new_size: usize, value: T)
    where
        T: Clone,
    {
        self.resize_with(new_size, || value.clone());
    }

    /// Resizes the list in-place, filling the additional slots with
    /// `T::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([1]);
    /// list.resize_default(3);
    /// assert_eq!(list, List::from([0, 0, 1]));
    /// ```
    pub fn resize_default(&mut self, new_size: usize)
    where
        T: Default,
    {
        self.resize_with(new_size, T::default);
    }

    /// Resizes the list in-place, filling the additional slots with the values
    /// returned by calling `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    /// let mut counter = 0;
    /// list.resize_with(3, || {
    ///     counter += 1;
    ///     counter
    /// });
    /// assert_eq!(list, List::from([3, 2, 1]));
    /// ```
    pub fn resize_with<F>(&mut self, new_size: usize, f: F)
    where
        F: FnMut() -> T,
    {
        if new_size == 0 {
            self.clear();
        } else if new_size > self.len {
            let additional = new_size - self.len;
            self.append_iter(iter::repeat_with(f).take(additional));
        } else {
            self.truncate(new_size);
        }
    }

    /// Provides a cursor at the ghost node, which is the position before the
    /// first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([2, 1]);
    /// let cursor = list.before_begin();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.peek_next(), Some(&1));
    /// ```
    pub fn before_begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, Some(self.ghost_link()), Position::BeforeBegin)
    }

    /// Provides a cursor at the first node.
    ///
    /// The cursor is at the end if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([3, 2, 1]);
    /// assert_eq!(list.begin().current(), Some(&1));
    ///
    /// let empty = List::<i32>::new();
    /// assert_eq!(empty.begin(), empty.end());
    /// ```
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node().map(NonNull::cast), Position::At(0))
    }

    /// Provides a cursor at the end, one past the last node.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let list = List::from([1]);
    /// let mut cursor = list.begin();
    /// assert!(cursor.move_next().is_ok());
    /// assert_eq!(cursor, list.end());
    /// ```
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, None, Position::At(self.len))
    }

    /// Provides a cursor at the given position.
    ///
    /// By convention, the cursor is at the end if `position` is `At(len)`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is past the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::{List, Position};
    ///
    /// let list = List::from([3, 2, 1]);
    /// assert_eq!(list.cursor(Position::At(1)).current(), Some(&2));
    /// assert_eq!(list.cursor(Position::At(3)), list.end());
    /// ```
    pub fn cursor(&self, position: Position) -> Cursor<'_, T> {
        assert!(
            position.rank() <= self.len + 1,
            "Cannot create cursor at a nonexistent position"
        );
        let mut cursor = self.before_begin();
        cursor
            .seek_forward(position.rank())
            .expect("Cannot create cursor at a nonexistent position");
        cursor
    }

    /// Provides a cursor with editing operations at the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([2, 1]);
    /// list.before_begin_mut().insert_after(0);
    /// assert_eq!(list, List::from([2, 1, 0]));
    /// ```
    pub fn before_begin_mut(&mut self) -> CursorMut<'_, T> {
        let ghost = self.ghost_link();
        CursorMut::new(self, Some(ghost), Position::BeforeBegin)
    }

    /// Provides a cursor with editing operations at the first node.
    ///
    /// The cursor is at the end if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([3, 2, 1]);
    /// let mut cursor = list.begin_mut();
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&5));
    /// ```
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        let front = self.front_node().map(NonNull::cast);
        CursorMut::new(self, front, Position::At(0))
    }

    /// Provides a cursor with editing operations at the given position.
    ///
    /// # Panics
    ///
    /// Panics if `position` is past the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::{List, Position};
    ///
    /// let mut list = List::from([3, 2, 1]);
    /// let mut cursor = list.cursor_mut(Position::At(1));
    /// cursor.insert_after(10);
    /// assert_eq!(list, List::from([3, 10, 2, 1]));
    /// ```
    pub fn cursor_mut(&mut self, position: Position) -> CursorMut<'_, T> {
        assert!(
            position.rank() <= self.len + 1,
            "Cannot create cursor at a nonexistent position"
        );
        let mut cursor = self.before_begin_mut();
        cursor
            .seek_forward(position.rank())
            .expect("Cannot create cursor at a nonexistent position");
        cursor
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// list.push_front(0);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([2, 1, 0]);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&11));
    /// assert_eq!(iter.next(), Some(&12));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        let link = Link { next: None };
        NonNull::from(Box::leak(Box::new(Node { link, element })))
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T> DetachedNodes<T> {
    /// It is unsafe because it must be guaranteed that `front` starts a chain
    /// of exactly `len` nodes that no list owns.
    unsafe fn new(front: NonNull<Node<T>>, len: usize) -> Self {
        let _marker = PhantomData;
        debug_assert!(len > 0, "Cannot detach nodes of length 0");
        Self {
            front,
            len,
            _marker,
        }
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: the ghost link was leaked from a box in `List::new`, and no
        // node or cursor refers to it any more.
        unsafe { drop(Box::from_raw(self.ghost.as_ptr())) };
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}


// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests {
    use std::collections::VecDeque;
    use std::iter::FromIterator;

    use proptest::prelude::*;
    use proptest::test_runner::Config;
    use proptest_state_machine::{ReferenceStateMachine, StateMachineTest};

    use super::*;

    proptest_state_machine::prop_state_machine! {
        #![proptest_config(Config {
            failure_persistence: None,
            .. Config::default()
        })]

        #[test]
        fn list_state_machine_test(
            sequential
            1..200
            =>
            List<u32>
        );
    }

    /// The possible transitions of the state machine.
    #[derive(Clone, Debug)]
    pub enum Transition {
        PushFront(u32),
        PopFront,
        /// Inserts after the position selected by the first value, modulo `len + 1`.
        EmplaceAfter(usize, u32),
        Resize(usize, u32),
        SplitWhen(u32),
        Clear,
    }

    pub struct ListStateMachine;

    fn selected_position(selector: usize, len: usize) -> Position {
        Position::from_rank(selector % (len + 1))
    }

    impl ReferenceStateMachine for ListStateMachine {
        type State = VecDeque<u32>;
        type Transition = Transition;

        fn init_state() -> BoxedStrategy<Self::State> {
            Just(VecDeque::new()).boxed()
        }

        fn transitions(_state: &Self::State) -> BoxedStrategy<Self::Transition> {
            prop_oneof![
                3 => any::<u32>().prop_map(Transition::PushFront),
                2 => Just(Transition::PopFront),
                3 => (any::<usize>(), any::<u32>())
                    .prop_map(|(selector, value)| Transition::EmplaceAfter(selector, value)),
                1 => (0..32_usize, any::<u32>())
                    .prop_map(|(new_size, value)| Transition::Resize(new_size, value)),
                1 => any::<u32>().prop_map(Transition::SplitWhen),
                1 => Just(Transition::Clear),
            ]
            .boxed()
        }

        fn apply(mut state: Self::State, transition: &Self::Transition) -> Self::State {
            match *transition {
                Transition::PushFront(value) => state.push_front(value),
                Transition::PopFront => {
                    state.pop_front();
                }
                Transition::EmplaceAfter(selector, value) => {
                    let rank = selected_position(selector, state.len()).rank();
                    state.insert(rank, value);
                }
                Transition::Resize(new_size, value) => state.resize(new_size, value),
                Transition::SplitWhen(threshold) => {
                    let at = state
                        .iter()
                        .position(|&x| x >= threshold)
                        .unwrap_or(state.len());
                    state.truncate(at);
                }
                Transition::Clear => state.clear(),
            }
            state
        }
    }

    impl StateMachineTest for List<u32> {
        type SystemUnderTest = Self;
        type Reference = ListStateMachine;

        fn init_test(
            _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
        ) -> Self::SystemUnderTest {
            List::new()
        }

        fn apply(
            mut state: Self::SystemUnderTest,
            _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
            transition: Transition,
        ) -> Self::SystemUnderTest {
            match transition {
                Transition::PushFront(value) => state.push_front(value),
                Transition::PopFront => {
                    state.pop_front();
                }
                Transition::EmplaceAfter(selector, value) => {
                    let position = selected_position(selector, state.len());
                    state.emplace_after(position, value);
                }
                Transition::Resize(new_size, value) => state.resize(new_size, value),
                Transition::SplitWhen(threshold) => {
                    let before = state.len();
                    let suffix = state.split_when(|&x| x >= threshold);
                    assert_eq!(state.len() + suffix.len(), before);
                    assert!(suffix.front().map_or(true, |&x| x >= threshold));
                }
                Transition::Clear => state.clear(),
            }
            state
        }

        fn check_invariants(
            state: &Self::SystemUnderTest,
            ref_state: &<Self::Reference as ReferenceStateMachine>::State,
        ) {
            assert_eq!(state.len(), ref_state.len());
            assert_eq!(state.iter().count(), ref_state.len());
            assert_eq!(state.is_empty(), ref_state.is_empty());

            for (value, ref_value) in state.iter().zip(ref_state.iter()) {
                assert_eq!(value, ref_value);
            }
        }
    }

    proptest! {
        #[test]
        fn split_when_concatenates_back(values in prop::collection::vec(0..16_u32, 0..64), target in 0..16_u32) {
            let original = Vec::from_iter(values.iter().rev().copied());
            let mut prefix = List::from_iter(values.iter().copied());
            let suffix = prefix.split_when(|&x| x == target);

            let matched = original.iter().position(|&x| x == target).unwrap_or(original.len());
            prop_assert_eq!(prefix.len(), matched);
            prop_assert_eq!(suffix.len(), original.len() - matched);
            prop_assert_eq!(suffix.front().is_some(), matched < original.len());

            let joined = Vec::from_iter(prefix.iter().chain(suffix.iter()).copied());
            prop_assert_eq!(joined, original);
        }

        #[test]
        fn resize_fills_with_value(len in 0..32_usize, new_size in 0..64_usize, fill in any::<u32>()) {
            let mut list = List::new();
            list.resize(len, 0);
            list.resize(new_size, fill);

            prop_assert_eq!(list.len(), new_size);
            for (i, &value) in list.iter().enumerate() {
                prop_assert_eq!(value, if i < len { 0 } else { fill });
            }
        }

        #[test]
        fn clone_is_independent(values in prop::collection::vec(any::<u32>(), 0..32), pushed in any::<u32>()) {
            let original = List::from_iter(values.iter().copied());
            let mut copy = original.clone();
            prop_assert_eq!(&copy, &original);

            copy.push_front(pushed);
            copy.iter_mut().for_each(|x| *x = x.wrapping_add(1));
            prop_assert_eq!(original.len(), values.len());
            prop_assert!(original.iter().eq(values.iter().rev()));
        }
    }
}
