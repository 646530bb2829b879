use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::list::cursor::{Cursor, RevCursor};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `List` is a doubly-linked sequence container with owned nodes. The chain
/// of nodes is closed into a ring by a payload-free ghost node, which stands in
/// for both "one past the end" and "one before the start".
///
/// Inserting or removing at either end takes *O*(1) time, the length is
/// known in *O*(1) time, and searching by value takes *O*(*n*) time.
///
/// The `List` contains:
/// - a pointer `ghost` to the ghost node, whose `next` is the head and
///   whose `prev` is the tail (both are the ghost itself in an empty list);
/// - a length field `len`, the number of element nodes.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (probably the ghost node).
pub struct List<T> {
    ghost: NonNull<Node<Erased>>,
    /// the length of the list
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// `next` and `prev` lead the layout, so a `Node<Erased>` can be read as a
/// `Node<T>` as long as only the links are touched.
#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

struct Erased;

/// Nodes fragment detached from a list, used in appending and moving.
///
/// When detached from a list, reading of `front.prev` and `back.next`
/// is invalid.
pub(crate) struct DetachedNodes<T> {
    pub(crate) front: NonNull<Node<T>>,
    pub(crate) back: NonNull<Node<T>>,
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// Read the `next` link of `node`.
///
/// Only the link field is read, so it is also valid on the ghost node.
///
/// # Safety
///
/// `node` must be a live node of a list (the ghost node included).
#[inline]
pub(crate) unsafe fn next_of<T>(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
    (*node.as_ptr()).next
}

/// Read the `prev` link of `node`. See [`next_of`].
///
/// # Safety
///
/// `node` must be a live node of a list (the ghost node included).
#[inline]
pub(crate) unsafe fn prev_of<T>(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
    (*node.as_ptr()).prev
}

/// Link `prev` and `next` to each other.
///
/// # Safety
///
/// Both nodes must be live nodes (the ghost node included). Whatever was
/// linked to them before is unlinked without being dropped.
#[inline]
pub(crate) unsafe fn connect<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    (*prev.as_ptr()).next = next;
    (*next.as_ptr()).prev = prev;
}

// private methods
impl<T> List<T> {
    pub(crate) fn ghost_node(&self) -> NonNull<Node<T>> {
        self.ghost.cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.next` is always valid (either `ghost` itself, or the first element
        // in the list).
        unsafe { next_of(self.ghost_node()) }
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.prev` is always valid (either `ghost` itself, or the last element
        // in the list).
        unsafe { prev_of(self.ghost_node()) }
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the list,
    /// or whether it is the ghost node.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        debug_assert!(node != self.ghost_node(), "Cannot detach the ghost node");
        self.len -= 1;
        connect(prev_of(node), next_of(node));
        Box::from_raw(node.as_ptr())
    }

    /// Attach a single node `node` to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belongs
    /// to the list, or whether the `prev` and `next` is adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        self.len += 1;
    }

    /// Detach a range of nodes `front..=back` of length `len` from the list.
    ///
    /// It is unsafe because it does not check whether `front..=back` is a valid,
    /// non-empty range of the list, or whether `len` is its length.
    pub(crate) unsafe fn detach_nodes(
        &mut self,
        front: NonNull<Node<T>>,
        back: NonNull<Node<T>>,
        len: usize,
    ) -> DetachedNodes<T> {
        self.len -= len;
        connect(prev_of(front), next_of(back));
        DetachedNodes::new(front, back, len)
    }

    /// Attach a range of detached nodes to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belongs
    /// to the list, or whether the `prev` and `next` is adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    pub(crate) unsafe fn attach_nodes(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        detached: DetachedNodes<T>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, detached.front);
        connect(detached.back, next);
        self.len += detached.len;
    }

    /// Detach all nodes from the list, or return `None` if the list is empty.
    ///
    /// It is safe because `self.front_node()..=self.back_node()` is a valid range.
    pub(crate) fn detach_all_nodes(&mut self) -> Option<DetachedNodes<T>> {
        if self.is_empty() {
            return None;
        }
        unsafe { Some(self.detach_nodes(self.front_node(), self.back_node(), self.len)) }
    }

    /// Remove the first element, or return `None` if the list is empty.
    pub(crate) fn take_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is not empty, so the front node is an element node.
        Some(unsafe { self.detach_node(self.front_node()) }.into_element())
    }

    /// Remove the last element, or return `None` if the list is empty.
    pub(crate) fn take_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is not empty, so the back node is an element node.
        Some(unsafe { self.detach_node(self.back_node()) }.into_element())
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use sequence_list::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            ghost: new_ghost(),
            len: 0,
            _marker: PhantomData,
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
    /// use sequence_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.ghost_node()
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
    /// use sequence_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`. Clearing an empty list does
    /// nothing.
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
    /// let mut list = List::from([1, 2]);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list, List::new());
    /// ```
    pub fn clear(&mut self) {
        while self.take_front().is_some() {}
    }

    /// Provides a reference to the front element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_front(1);
    /// assert_eq!(list.front(), &1);
    /// ```
    #[inline]
    pub fn front(&self) -> &T {
        self.cursor_start()
            .current()
            .expect("Cannot access the front of an empty list")
    }

    /// Provides a mutable reference to the front element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_list::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// *list.front_mut() = 5;
    /// assert_eq!(list.front(), &5);
    /// ```
    pub fn front_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "Cannot access the front of an empty list");
        // SAFETY: the list is not empty, so the front node holds an element,
        // and `&mut self` guarantees the access is unique.
        unsafe { Node::element_mut(self.front_node()) }
    }

    /// Provides a reference to the back element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.back(), &2);
    /// ```
    #[inline]
    pub fn back(&self) -> &T {
        self.rev_cursor_start()
            .current()
            .expect("Cannot access the back of an empty list")
    }

    /// Provides a mutable reference to the back element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn back_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "Cannot access the back of an empty list");
        // SAFETY: the list is not empty, so the back node holds an element,
        // and `&mut self` guarantees the access is unique.
        unsafe { Node::element_mut(self.back_node()) }
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
    /// use sequence_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), &2);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), &1);
    /// assert_eq!(list.back(), &2);
    /// ```
    pub fn push_front(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        // SAFETY: the ghost node and the front node are adjacent nodes of this list.
        unsafe { self.attach_node(self.ghost_node(), self.front_node(), node) }
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), &3);
    /// ```
    pub fn push_back(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        // SAFETY: the back node and the ghost node are adjacent nodes of this list.
        unsafe { self.attach_node(self.back_node(), self.ghost_node(), node) }
    }

    /// Removes the first element and returns it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty; check [`List::is_empty`] first.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), 3);
    /// assert_eq!(list.pop_front(), 1);
    /// assert!(list.is_empty());
    /// ```
    pub fn pop_front(&mut self) -> T {
        self.take_front()
            .expect("Cannot pop the front of an empty list")
    }

    /// Removes the last element and returns it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty; check [`List::is_empty`] first.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), 3);
    /// ```
    pub fn pop_back(&mut self) -> T {
        self.take_back()
            .expect("Cannot pop the back of an empty list")
    }

    /// Provides a forward cursor at the first node (`begin`).
    ///
    /// The cursor is pointing to the terminal sentinel if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let cursor = list.cursor_start();
    /// assert_eq!(cursor.current(), Some(&1));
    ///
    /// let empty: List<i32> = List::new();
    /// assert_eq!(empty.cursor_start(), empty.cursor_end());
    /// ```
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node(), 0)
    }

    /// Provides a forward cursor at the terminal sentinel, one past the
    /// last node (`end`).
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let cursor = list.cursor_end();
    /// assert_eq!(cursor.current(), None);
    /// assert!(cursor.is_terminal());
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.ghost_node(), self.len)
    }

    /// Provides a backward cursor at the last node (`rbegin`).
    ///
    /// The cursor is pointing to the terminal sentinel if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let cursor = list.rev_cursor_start();
    /// assert_eq!(cursor.current(), Some(&3));
    /// ```
    pub fn rev_cursor_start(&self) -> RevCursor<'_, T> {
        RevCursor::new(self, self.back_node(), 0)
    }

    /// Provides a backward cursor at the terminal sentinel, one before the
    /// first node (`rend`).
    pub fn rev_cursor_end(&self) -> RevCursor<'_, T> {
        RevCursor::new(self, self.ghost_node(), self.len)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
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
    /// use sequence_list::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(list, List::from([10, 11, 12]));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`. After
    /// this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_list::List;
    ///
    /// let mut list1 = List::from(['a']);
    /// let mut list2 = List::from(['b', 'c']);
    ///
    /// list1.append(&mut list2);
    ///
    /// assert_eq!(list1, List::from(['a', 'b', 'c']));
    /// assert!(list2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // `self.back_node()` and `self.ghost_node()` are valid
            // nodes in the list and they are adjacent, so it is safe.
            unsafe { self.attach_nodes(self.back_node(), self.ghost_node(), detached) }
        }
    }

    /// Moves all elements from `other` to the begin of the list.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`. After
    /// this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_list::List;
    ///
    /// let mut list1 = List::from(['a']);
    /// let mut list2 = List::from(['b', 'c']);
    ///
    /// list2.prepend(&mut list1);
    ///
    /// assert_eq!(list2, List::from(['a', 'b', 'c']));
    /// assert!(list1.is_empty());
    /// ```
    pub fn prepend(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // `self.ghost_node()` and `self.front_node()` are valid
            // nodes in the list and they are adjacent, so it is safe.
            unsafe { self.attach_nodes(self.ghost_node(), self.front_node(), detached) }
        }
    }

    /// Move-assigns `other` into `self`: the elements previously held by
    /// `self` are dropped, then `self` takes over the nodes of `other`, which
    /// is left empty.
    ///
    /// Passing the same list twice cannot be expressed, so the data of a list
    /// is never lost to a self-move.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*m*) time, where *m* is the former
    /// length of `self`. Taking over the nodes of `other` is *O*(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use sequence_list::List;
    ///
    /// let mut months_en = List::from(["January", "February"]);
    /// let mut months_fi = List::from(["tammikuu", "helmikuu", "maaliskuu"]);
    ///
    /// months_en.move_from(&mut months_fi);
    ///
    /// assert_eq!(months_en, List::from(["tammikuu", "helmikuu", "maaliskuu"]));
    /// assert!(months_fi.is_empty());
    /// ```
    pub fn move_from(&mut self, other: &mut Self) {
        self.clear();
        self.append(other);
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
    ///
    /// The links are dangling until the node is attached to a list.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        })))
    }

    /// It is unsafe because `node` must be a live, non-ghost node, and the
    /// returned reference must not outlive it.
    pub(crate) unsafe fn element<'a>(node: NonNull<Self>) -> &'a T {
        &(*node.as_ptr()).element
    }

    /// Like [`Node::element`], and the caller must also guarantee that no
    /// other reference to the element is alive.
    pub(crate) unsafe fn element_mut<'a>(node: NonNull<Self>) -> &'a mut T {
        &mut (*node.as_ptr()).element
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T> DetachedNodes<T> {
    /// If is unsafe because it must be guaranteed that `front..=back` is
    /// a valid range and its length must be equal to `len`.
    unsafe fn new(front: NonNull<Node<T>>, back: NonNull<Node<T>>, len: usize) -> Self {
        debug_assert!(len > 0, "Cannot detach nodes of length 0");
        Self {
            front,
            back,
            len,
            _marker: PhantomData,
        }
    }
}

fn new_ghost() -> NonNull<Node<Erased>> {
    let ghost = Node::new_detached(Erased);
    // SAFETY: `ghost` is freshly allocated, and its links are initialized to
    // point to itself here, before any read. `ghost.element` is never read.
    unsafe { connect(ghost, ghost) };
    ghost
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(next_of(prev), next);
        assert_eq!(prev_of(next), prev);
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: the ghost node was leaked from a box in `new_ghost`, and
        // nothing links to it once the list is empty.
        unsafe { drop(Box::from_raw(self.ghost.as_ptr())) }
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
