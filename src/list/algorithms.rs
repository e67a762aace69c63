use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

/// Cloning a list builds a new chain of nodes holding clones of the elements,
/// in the same order.
///
/// # Examples
///
/// ```
/// use forward_list::List;
///
/// let list = List::from([3, 2, 1]);
/// let mut copy = list.clone();
/// copy.push_front(0);
///
/// assert_eq!(list, List::from([3, 2, 1]));
/// assert_eq!(copy, List::from([3, 2, 1, 0]));
/// ```
impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        let mut list = List::new();
        list.append_iter(self.iter().cloned());
        list
    }

    /// Brings `self` to the length of `source`, reusing its nodes: the
    /// surplus nodes are dropped, the kept elements are overwritten with
    /// `clone_from`, and the missing ones are appended at the back.
    fn clone_from(&mut self, source: &Self) {
        self.truncate(source.len());
        let mut rest = source.iter();
        for (elem, elem_source) in self.iter_mut().zip(&mut rest) {
            elem.clone_from(elem_source);
        }
        self.append_iter(rest.cloned());
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
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
    /// list.push_front(0);
    /// list.push_front(1);
    /// list.push_front(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Replaces the contents of the list with the items of `iter`, keeping
    /// their order.
    ///
    /// The existing nodes are reused: the list is truncated or extended at the
    /// back to the number of items, and the elements are overwritten from the
    /// front.
    ///
    /// Unlike [`List::from`] and [`FromIterator`], which push every item to the
    /// front, `assign` does not reverse the sequence.
    ///
    /// [`FromIterator`]: std::iter::FromIterator
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* + *m*) time, where *m* is the
    /// number of items.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([2, 1]);
    /// list.assign([7, 8, 9]);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![7, 8, 9]);
    ///
    /// list.assign(vec![4]);
    /// assert_eq!(list.len(), 1);
    /// assert_eq!(list.front(), Some(&4));
    /// ```
    pub fn assign<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut iter = iter.into_iter();
        let mut assigned = 0;
        for elem in self.iter_mut() {
            match iter.next() {
                Some(item) => *elem = item,
                None => break,
            }
            assigned += 1;
        }
        self.truncate(assigned);
        self.append_iter(iter);
    }

    /// Splits the list at the first element satisfying `predicate`.
    ///
    /// The matched element and everything after it are moved into the returned
    /// list; the elements before it stay in `self`. If no element matches, the
    /// returned list is empty. If the first element matches, `self` becomes
    /// empty.
    ///
    /// The predicate is called on the elements in order, and is never called
    /// again once it returns `true`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*k*) time, where *k* is the index
    /// of the matched element. No element is moved or cloned, only the links
    /// between nodes change.
    ///
    /// # Examples
    ///
    /// ```
    /// use forward_list::List;
    ///
    /// let mut list = List::from([9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
    /// let suffix = list.split_when(|&x| x == 3);
    ///
    /// assert_eq!(list, List::from([2, 1, 0]));
    /// assert_eq!(suffix, List::from([9, 8, 7, 6, 5, 4, 3]));
    /// ```
    pub fn split_when<P>(&mut self, mut predicate: P) -> List<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut cursor = self.before_begin_mut();
        while let Some(next) = cursor.peek_next() {
            if predicate(next) || cursor.move_next().is_err() {
                break;
            }
        }
        cursor.split_after()
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::iter::FromIterator;

    fn to_vec<T: Clone>(list: &List<T>) -> Vec<T> {
        Vec::from_iter(list.iter().cloned())
    }

    #[test]
    fn test_split_when() {
        let mut list = List::from([9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
        let suffix = list.split_when(|&x| x == 3);
        assert_eq!(to_vec(&list), vec![0, 1, 2]);
        assert_eq!(list.len(), 3);
        assert_eq!(to_vec(&suffix), vec![3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(suffix.len(), 7);

        // no match
        let mut list = List::from([3, 2, 1]);
        let suffix = list.split_when(|&x| x > 10);
        assert_eq!(to_vec(&list), vec![1, 2, 3]);
        assert!(suffix.is_empty());
        assert_eq!(suffix.len(), 0);

        // the first element matches
        let mut list = List::from([3, 2, 1]);
        let suffix = list.split_when(|&x| x == 1);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(to_vec(&suffix), vec![1, 2, 3]);

        // the last element matches
        let mut list = List::from([3, 2, 1]);
        let suffix = list.split_when(|&x| x == 3);
        assert_eq!(to_vec(&list), vec![1, 2]);
        assert_eq!(to_vec(&suffix), vec![3]);

        let mut list = List::<i32>::new();
        let suffix = list.split_when(|_| true);
        assert!(list.is_empty());
        assert!(suffix.is_empty());
    }

    #[test]
    fn test_split_when_stops_at_first_match() {
        let mut list = List::from([5, 4, 5, 3, 2, 1]);
        let mut calls = Vec::new();
        let suffix = list.split_when(|&x| {
            calls.push(x);
            x == 5
        });
        assert_eq!(calls, vec![1, 2, 3, 5]);
        assert_eq!(to_vec(&list), vec![1, 2, 3]);
        assert_eq!(to_vec(&suffix), vec![5, 4, 5]);

        let mut list = List::<i32>::new();
        let mut called = false;
        list.split_when(|_| {
            called = true;
            false
        });
        assert!(!called);
    }

    #[test]
    fn test_split_when_halves_are_independent() {
        let mut list = List::from([4, 3, 2, 1]);
        let mut suffix = list.split_when(|&x| x == 3);
        list.push_front(0);
        suffix.resize(3, 5);
        assert_eq!(to_vec(&list), vec![0, 1, 2]);
        assert_eq!(to_vec(&suffix), vec![3, 4, 5]);

        suffix.clear();
        assert_eq!(to_vec(&list), vec![0, 1, 2]);
    }

    #[test]
    fn test_clone() {
        let list = List::from([9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
        let mut copy = list.clone();
        assert_eq!(copy, list);
        assert_eq!(copy.len(), 10);

        copy.pop_front();
        copy.push_front(100);
        if let Some(x) = copy.front_mut() {
            *x += 1;
        }
        assert_eq!(list.front(), Some(&0));
        assert_eq!(copy.front(), Some(&101));
        assert_eq!(to_vec(&list), Vec::from_iter(0..10));

        let empty = List::<String>::new();
        assert!(empty.clone().is_empty());
    }

    #[test]
    fn test_clone_from() {
        let source = List::from([2, 1, 0]);

        let mut shorter = List::from([7]);
        shorter.clone_from(&source);
        assert_eq!(shorter, source);
        assert_eq!(shorter.len(), 3);

        let mut longer = List::from([7, 7, 7, 7, 7]);
        longer.clone_from(&source);
        assert_eq!(longer, source);
        assert_eq!(longer.len(), 3);

        let mut empty = List::new();
        empty.clone_from(&source);
        assert_eq!(empty, source);

        longer.clone_from(&List::new());
        assert!(longer.is_empty());

        shorter.push_front(5);
        assert_eq!(to_vec(&source), vec![0, 1, 2]);
    }

    #[test]
    fn test_assign() {
        let mut list = List::new();
        list.assign(vec![1, 2, 3]);
        assert_eq!(to_vec(&list), vec![1, 2, 3]);

        list.assign(vec![4, 5, 6, 7, 8]);
        assert_eq!(to_vec(&list), vec![4, 5, 6, 7, 8]);
        assert_eq!(list.len(), 5);

        list.assign(vec![9]);
        assert_eq!(to_vec(&list), vec![9]);
        assert_eq!(list.len(), 1);

        list.assign(Vec::new());
        assert!(list.is_empty());
    }

    #[test]
    fn test_eq_and_ord() {
        let a = List::from([3, 2, 1]);
        let b = List::from([3, 2, 1]);
        let c = List::from([2, 1]);
        let d = List::from([4, 2, 1]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(c < a);
        assert!(a < d);
        assert!(a.contains(&3));
        assert!(!c.contains(&3));
    }

    #[test]
    fn test_hash() {
        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }
        let a = List::from([3, 2, 1]);
        let b = a.clone();
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(hash_of(&a), hash_of(&List::from([2, 1])));
    }
}
