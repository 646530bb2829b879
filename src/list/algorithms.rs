use crate::list::{next_of, List, Node};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Two lists are equal when they have the same length and their elements
/// are pairwise equal from head to tail.
///
/// Lists of different lengths compare unequal in *O*(1) time, otherwise the
/// comparison stops at the first unequal pair.
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

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Overwrite `self` with a copy of `other`, reusing the nodes `self`
    /// already owns. Surplus nodes are dropped from the back and missing ones
    /// are allocated.
    fn clone_from(&mut self, other: &Self) {
        while self.len() > other.len() {
            drop(self.pop_back());
        }
        let mut iter_other = other.iter();
        self.iter_mut()
            .zip(&mut iter_other)
            .for_each(|(elem, elem_other)| elem.clone_from(elem_other));
        self.extend(iter_other.cloned());
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.iter().for_each(|elt| elt.hash(state));
        self.len().hash(state);
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_list::List;
    ///
    /// let list = List::from([0, 1, 2]);
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

    /// Removes the first element (from head to tail) equal to `value`, and
    /// returns whether an element was removed.
    ///
    /// Nothing changes if no element matches, which includes an empty list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_list::List;
    ///
    /// let mut naturals_mod_3 = List::from([0, 1, 2, 0, 1, 2, 0]);
    ///
    /// assert!(naturals_mod_3.remove(&0));
    /// assert!(naturals_mod_3.remove(&0));
    /// assert!(naturals_mod_3.remove(&0));
    /// assert_eq!(naturals_mod_3, List::from([1, 2, 1, 2]));
    ///
    /// assert!(!naturals_mod_3.remove(&0));
    /// assert_eq!(naturals_mod_3, List::from([1, 2, 1, 2]));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq<T>,
    {
        let ghost = self.ghost_node();
        let mut node = self.front_node();
        while node != ghost {
            // SAFETY: every node in `front..ghost` is an element node of this list.
            unsafe {
                if Node::element(node) == value {
                    drop(self.detach_node(node));
                    return true;
                }
                node = next_of(node);
            }
        }
        false
    }

    /// Creates a new list holding `f` applied to every element, in the same
    /// order. The list itself is left untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time, plus the cost of `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_list::List;
    ///
    /// let naturals = List::from([1, 2, 3, 4, 5]);
    /// let squares = naturals.map(|x| x * x);
    /// assert_eq!(squares, List::from([1, 4, 9, 16, 25]));
    ///
    /// let empty: List<i32> = List::new();
    /// assert!(empty.map(|x| x * x).is_empty());
    /// ```
    pub fn map<U, F>(&self, f: F) -> List<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(f).collect()
    }

    /// Replaces every element with `f` applied to it, in place. The order and
    /// the length of the list are preserved, and no node is reallocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_list::List;
    ///
    /// let mut list = List::from([1, 2, 3, 4, 5]);
    /// list.map_in_place(|x| x * x);
    /// assert_eq!(list, List::from([1, 4, 9, 16, 25]));
    /// ```
    pub fn map_in_place<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> T,
    {
        self.iter_mut().for_each(|elem| *elem = f(&*elem));
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn list_eq() {
        let empty = List::<i32>::new();
        let one = List::from([1]);
        let fibonacci = List::from([1, 1, 2, 3, 5, 8]);
        let fibonacci_zero = List::from([0, 1, 1, 2, 3, 5, 8]);

        assert_eq!(empty, List::new());
        assert_eq!(one, List::from([1]));
        assert_eq!(fibonacci, List::from([1, 1, 2, 3, 5, 8]));

        assert!(empty != one);
        assert!(one != fibonacci);
        assert!(fibonacci != fibonacci_zero);
        assert!(!(fibonacci != fibonacci.clone()));

        // same length, different elements
        assert_ne!(List::from([1, 2, 3]), List::from([1, 2, 4]));
        assert_ne!(List::from([1, 2, 3]), List::from([3, 2, 1]));
    }

    #[test]
    fn list_ord_and_hash() {
        assert!(List::from([1, 2]) < List::from([1, 3]));
        assert!(List::from([1, 2]) < List::from([1, 2, 0]));
        assert!(List::<i32>::new() < List::from([0]));

        assert_eq!(hash_of(&List::from([1, 2, 3])), hash_of(&List::from([1, 2, 3])));
        assert_ne!(hash_of(&List::from([1, 2, 3])), hash_of(&List::from([1, 2])));
    }

    #[test]
    fn list_remove() {
        let mut list = List::from([0, 1, 2, 0, 1, 2, 0]);
        assert!(list.remove(&0));
        assert_eq!(list, List::from([1, 2, 0, 1, 2, 0]));
        assert!(list.remove(&0));
        assert_eq!(list, List::from([1, 2, 1, 2, 0]));
        assert!(list.remove(&0));
        assert_eq!(list, List::from([1, 2, 1, 2]));
        assert_eq!(list.len(), 4);

        assert!(!list.remove(&0));
        assert_eq!(list, List::from([1, 2, 1, 2]));
        assert_eq!(list.len(), 4);

        let mut empty = List::<i32>::new();
        assert!(!empty.remove(&0));
        assert!(empty.is_empty());
    }

    #[test]
    fn list_remove_ends() {
        // removing the tail keeps `back` and `push_back` consistent
        let mut list = List::from([1, 2, 3]);
        assert!(list.remove(&3));
        assert_eq!(list.back(), &2);
        list.push_back(4);
        assert_eq!(list, List::from([1, 2, 4]));

        // removing the head keeps `front` and `push_front` consistent
        assert!(list.remove(&1));
        assert_eq!(list.front(), &2);
        list.push_front(0);
        assert_eq!(list, List::from([0, 2, 4]));

        // removing the only element empties the list
        let mut list = List::from(["only"]);
        assert!(list.remove(&"only"));
        assert!(list.is_empty());
        assert_eq!(list.cursor_start(), list.cursor_end());
        list.push_back("again");
        assert_eq!(list.front(), &"again");
        assert_eq!(list.back(), &"again");
    }

    #[test]
    fn list_map() {
        let naturals = List::from([1, 2, 3, 4, 5]);
        assert_eq!(naturals.map(|x| x * x), List::from([1, 4, 9, 16, 25]));
        // the source is left untouched
        assert_eq!(naturals, List::from([1, 2, 3, 4, 5]));

        let empty = List::<i32>::new();
        assert_eq!(empty.map(|x| x * x), List::new());

        let words = List::from(["alpha", "beta"]);
        assert_eq!(words.map(|w| w.len()), List::from([5, 4]));
    }

    #[test]
    fn list_map_in_place() {
        let mut naturals = List::from([1, 2, 3, 4, 5]);
        naturals.map_in_place(|x| x * x);
        assert_eq!(naturals, List::from([1, 4, 9, 16, 25]));
        assert_eq!(naturals.len(), 5);

        let mut empty = List::<i32>::new();
        empty.map_in_place(|x| x * x);
        assert!(empty.is_empty());
    }

    #[test]
    fn list_clone_is_independent() {
        let mut pi = List::from([3, 1, 4, 1, 5, 9]);
        let mut pi_copy = pi.clone();
        assert_eq!(pi, pi_copy);

        pi_copy.push_back(2);
        pi_copy.pop_front();
        *pi_copy.front_mut() = 7;
        assert_eq!(pi, List::from([3, 1, 4, 1, 5, 9]));

        pi.clear();
        assert_eq!(pi_copy, List::from([7, 4, 1, 5, 9, 2]));
    }

    #[test]
    fn list_clone_from() {
        let pi = List::from([3, 1, 4, 1, 5, 9]);

        // onto an empty list
        let mut pi_copy = List::new();
        pi_copy.clone_from(&pi);
        assert_eq!(pi_copy, pi);

        // onto a shorter list
        let mut pi_small = List::from([2, 7]);
        pi_small.clone_from(&pi);
        assert_eq!(pi_small, pi);
        assert_eq!(pi_small.len(), 6);

        // onto a longer list
        let mut pi_large = List::from_iter(0..20);
        pi_large.clone_from(&pi);
        assert_eq!(pi_large, pi);
        assert_eq!(pi_large.back(), &9);

        // from an empty list
        pi_large.clone_from(&List::new());
        assert!(pi_large.is_empty());

        // the copy stays independent
        pi_small.push_front(0);
        assert_eq!(pi, List::from([3, 1, 4, 1, 5, 9]));
    }
}
