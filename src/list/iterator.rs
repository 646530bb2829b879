use crate::list::cursor::{Cursor, RevCursor};
use crate::list::{next_of, prev_of, List, Node};
use std::fmt;
use std::iter::{FromIterator, FusedIterator, Rev};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A double-ended iterator over shared references to the elements of a
/// `List`, from head to tail.
///
/// The remaining elements are the half-open node range `start..end`: the front
/// end yields `start` and steps along `next`, the back end steps `end` along
/// `prev` and yields it. Both ends meet when the range is empty, so the
/// iterator never wraps around the ghost node.
///
/// The iterator stores raw node pointers, and its `PhantomData<&'a List<T>>`
/// keeps the list borrowed for as long as it lives.
///
/// # Examples
///
/// ```compile_fail
/// use sequence_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_back(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    len: usize,
    _marker: PhantomData<&'a List<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        // SAFETY: `front..ghost` covers the whole list.
        unsafe { Self::from_range(list.front_node(), list.ghost_node(), list.len()) }
    }

    /// It is unsafe because `start..end` must be a valid range of a list
    /// borrowed for `'a`, and `len` must be its length.
    pub(crate) unsafe fn from_range(
        start: NonNull<Node<T>>,
        end: NonNull<Node<T>>,
        len: usize,
    ) -> Self {
        Self {
            start,
            end,
            len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.len).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start..end` is always a valid range of a list,
        // and it is not empty here, so `start` holds an element.
        let current = self.start;
        unsafe {
            self.start = next_of(current);
            self.len -= 1;
            Some(Node::element(current))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start..end` is always a valid range of a list,
        // and it is not empty here, so `end.prev` holds an element.
        unsafe {
            self.end = prev_of(self.end);
            self.len -= 1;
            Some(Node::element(self.end))
        }
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A double-ended iterator over mutable references to the elements of a
/// `List`. It walks the same `start..end` range as [`Iter`].
///
/// Elements can be rewritten through it, the links cannot. The list stays
/// mutably borrowed while it lives, so no other access can observe a node
/// being handed out.
///
/// # Examples
///
/// ```compile_fail
/// use sequence_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    len: usize,
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        Self {
            start: list.front_node(),
            end: list.ghost_node(),
            len: list.len(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.len).finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start..end` is always a valid range of a list, and it is
        // not empty here. Each node is yielded at most once, so the mutable
        // references never alias.
        let current = self.start;
        unsafe {
            self.start = next_of(current);
            self.len -= 1;
            Some(Node::element_mut(current))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: see `next`.
        unsafe {
            self.end = prev_of(self.end);
            self.len -= 1;
            Some(Node::element_mut(self.end))
        }
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
        self.list.take_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len;
        (len, Some(len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.take_back()
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

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(array: [T; N]) -> Self {
        Self::from_iter(array)
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push_back(item));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

/// Iterate from the cursor (inclusive) to the terminal sentinel.
///
/// # Examples
///
/// ```
/// use sequence_list::List;
///
/// let list = List::from([1, 2, 3, 4]);
/// let mut cursor = list.cursor_start();
/// cursor.move_next();
/// assert_eq!(Vec::from_iter(cursor), vec![&2, &3, &4]);
/// assert_eq!(list.cursor_end().into_iter().next(), None);
/// ```
impl<'a, T: 'a> IntoIterator for Cursor<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        // SAFETY: `current..ghost` is a valid range of the borrowed list, and
        // `index` nodes lie before `current`.
        unsafe {
            Iter::from_range(
                self.current,
                self.list.ghost_node(),
                self.list.len() - self.index(),
            )
        }
    }
}

/// Iterate from the cursor (inclusive) towards the head, in reverse order.
///
/// # Examples
///
/// ```
/// use sequence_list::List;
///
/// let list = List::from([1, 2, 3, 4]);
/// assert_eq!(Vec::from_iter(list.rev_cursor_start()), vec![&4, &3, &2, &1]);
/// assert_eq!(list.rev_cursor_end().into_iter().next(), None);
/// ```
impl<'a, T: 'a> IntoIterator for RevCursor<'a, T> {
    type Item = &'a T;
    type IntoIter = Rev<Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        // SAFETY: `front..=current` is a valid range of the borrowed list
        // (empty when `current` is the ghost node), and `index` nodes lie
        // after `current`.
        unsafe {
            Iter::from_range(
                self.list.front_node(),
                next_of(self.current),
                self.list.len() - self.index(),
            )
            .rev()
        }
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::List;

    #[test]
    fn iter_meets_in_the_middle() {
        for len in 0..6 {
            let values = Vec::from_iter(0..len);
            let list = List::from_iter(values.clone());
            for split in 0..=len {
                // `split` items from the head, the rest from the tail
                let mut iter = list.iter();
                let mut front = Vec::new();
                let mut back = Vec::new();
                for _ in 0..split {
                    front.push(*iter.next().unwrap());
                }
                assert_eq!(iter.len(), len - split);
                while let Some(&value) = iter.next_back() {
                    back.push(value);
                }
                back.reverse();
                assert_eq!(front, &values[..split]);
                assert_eq!(back, &values[split..]);
                assert_eq!(iter.len(), 0);
                assert_eq!(iter.next(), None);
                assert_eq!(iter.next_back(), None);
            }
            let reversed = Vec::from_iter(values.iter().rev().copied());
            assert_eq!(Vec::from_iter(list.iter().rev().copied()), reversed);
            assert_eq!(list.iter().last(), values.last());
        }
    }

    #[test]
    fn iter_mut_rewrites_elements() {
        let mut list = List::from([1, 2, 3, 4, 5]);
        let mut iter = list.iter_mut();
        *iter.next().unwrap() *= 10;
        *iter.next_back().unwrap() *= 100;
        assert_eq!(iter.len(), 3);
        iter.rev().for_each(|value| *value = -*value);
        assert_eq!(list, List::from([10, -2, -3, -4, 500]));

        for value in &mut list {
            *value += 1;
        }
        assert_eq!(list, List::from([11, -1, -2, -3, 501]));
        assert_eq!(list.iter_mut().last(), Some(&mut 501));
        assert_eq!(List::<i32>::new().iter_mut().next(), None);
    }

    #[test]
    fn test_into_iter() {
        let list = List::from(["a", "b", "c", "d"]);
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some("a"));
        assert_eq!(iter.next_back(), Some("d"));
        assert_eq!(iter.len(), 2);
        assert_eq!(Vec::from_iter(iter), vec!["b", "c"]);
    }

    #[test]
    fn test_cursor_into_iter() {
        let values = [1, 1, 2, 3, 5, 8];
        let list = List::from(values);

        // forward from every position reproduces the matching suffix
        let mut cursor = list.cursor_start();
        for at in 0..=values.len() {
            let rest = Vec::from_iter(cursor.into_iter().copied());
            assert_eq!(rest, &values[at..]);
            assert_eq!(cursor.into_iter().len(), values.len() - at);
            if at < values.len() {
                cursor.move_next();
            }
        }

        // backward from every position reproduces the matching prefix reversed
        let mut cursor = list.rev_cursor_start();
        for at in 0..=values.len() {
            let rest = Vec::from_iter(cursor.into_iter().copied());
            let expected = Vec::from_iter(values[..values.len() - at].iter().rev().copied());
            assert_eq!(rest, expected);
            if at < values.len() {
                cursor.move_next();
            }
        }
    }

    #[test]
    fn test_extend() {
        let mut list = List::from([1, 2]);
        list.extend([3, 4]);
        list.extend(&[5, 6]);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(list.len(), 6);

        let collected: List<_> = (0..3).collect();
        assert_eq!(collected, List::from([0, 1, 2]));
    }

    #[test]
    fn test_debug() {
        let list = List::from([1, 2, 3]);
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
        assert_eq!(format!("{:?}", List::<i32>::new()), "[]");
    }
}
