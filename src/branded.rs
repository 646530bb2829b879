//! A doubly-linked sequence written in safe Rust.
//!
//! Every node is owned jointly by its two neighbours: the link from its
//! predecessor (or the list's `head`) holds one half of a [`StaticRc`], and the
//! link from its successor (or the list's `tail`) holds the other half. The
//! halves are joined back into a box when the node is unlinked. All nodes of a
//! list live in [`GhostCell`]s branded with the same `'id`, so reading them
//! takes a shared borrow of the [`GhostToken`] and relinking them takes a
//! mutable one.
//!
//! Nodes can only be released through the token, so a [`GhostList`] is
//! destroyed with [`GhostList::drop_in`] (or emptied with [`GhostList::clear`],
//! or drained with [`GhostList::into_vec`]). Dropping a list that still holds
//! elements without the token leaks them instead of releasing them.
//!
//! # Examples
//!
//! ```
//! use ghost_cell::GhostToken;
//! use sequence_list::branded::GhostList;
//!
//! GhostToken::new(|mut token| {
//!     let mut list = GhostList::from_iter_in([1, 2, 3], &mut token);
//!     list.push_front(0, &mut token);
//!     assert_eq!(list.to_vec(&token), vec![0, 1, 2, 3]);
//!
//!     let mut squares = list.map(|x| x * x, &mut token);
//!     assert_eq!(squares.to_vec(&token), vec![0, 1, 4, 9]);
//!
//!     assert_eq!(list.into_vec(&mut token), vec![0, 1, 2, 3]);
//!     squares.drop_in(&mut token);
//! });
//! ```

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::mem;
use std::ops::Deref;

pub struct GhostList<'id, T> {
    links: [Option<NodePtr<'id, T>>; 2],
    len: usize,
}

struct Node<'id, T> {
    links: [Option<NodePtr<'id, T>>; 2],
    elem: T,
}

type NodePtr<'id, T> = Half<GhostCell<'id, Node<'id, T>>>;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

impl<'id, T> Node<'id, T> {
    const NEXT: usize = 0;
    fn next(&self) -> Option<&NodePtr<'id, T>> {
        self.links[Self::NEXT].as_ref()
    }
    fn new(elem: T) -> Self {
        let links = [None, None];
        Self { elem, links }
    }
}

impl<'id, T> Drop for GhostList<'id, T> {
    // Without the token the halves cannot be joined, and dropping an unjoined
    // half fails an assertion in `StaticRc`. The nodes are leaked instead.
    fn drop(&mut self) {
        self.links.iter_mut().for_each(|link| {
            if let Some(half) = link.take() {
                mem::forget(half);
            }
        });
    }
}

impl<'id, T> Default for GhostList<'id, T> {
    fn default() -> Self {
        let links = [None, None];
        Self { links, len: 0 }
    }
}

// `HEAD` and `TAIL` double as the indices of a node's `next` and `prev` links,
// so a side of the list and the link of a node facing that side share an index.
impl<'id, T> GhostList<'id, T> {
    const HEAD: usize = 0;
    const TAIL: usize = 1;

    fn head(&self) -> Option<&NodePtr<'id, T>> {
        self.links[Self::HEAD].as_ref()
    }
    fn tail(&self) -> Option<&NodePtr<'id, T>> {
        self.links[Self::TAIL].as_ref()
    }
    fn push_at(&mut self, side: usize, elem: T, token: &mut GhostToken<'id>) {
        debug_assert!(side < 2);
        let oppo = 1 - side;
        let (left, right) = Full::split(Full::new(GhostCell::new(Node::new(elem))));
        match self.links[side].take() {
            Some(this_side) => {
                this_side.deref().borrow_mut(token).links[oppo] = Some(left);
                right.deref().borrow_mut(token).links[side] = Some(this_side);
            }
            None => self.links[oppo] = Some(left),
        }
        self.links[side] = Some(right);
        self.len += 1;
    }
    fn pop_at(&mut self, side: usize, token: &mut GhostToken<'id>) -> Option<T> {
        debug_assert!(side < 2);
        let oppo = 1 - side;
        let right = self.links[side].take()?;
        let left = match right.deref().borrow_mut(token).links[side].take() {
            Some(this_side) => {
                let left = this_side.deref().borrow_mut(token).links[oppo]
                    .take()
                    .expect("A linked neighbour must hold the other half of the node");
                self.links[side] = Some(this_side);
                left
            }
            None => self.links[oppo]
                .take()
                .expect("The only node must be held by both ends of the list"),
        };
        self.len -= 1;
        Some(Full::into_box(Full::join(left, right)).into_inner().elem)
    }
}

impl<'id, T> GhostList<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Builds a list holding the items of `iter` in order.
    pub fn from_iter_in<I>(iter: I, token: &mut GhostToken<'id>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new();
        iter.into_iter()
            .for_each(|elem| list.push_back(elem, token));
        list
    }

    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.head().is_none()
    }

    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn front<'a>(&'a self, token: &'a GhostToken<'id>) -> &'a T {
        let node = self
            .head()
            .expect("Cannot access the front of an empty list");
        &node.deref().borrow(token).elem
    }

    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn back<'a>(&'a self, token: &'a GhostToken<'id>) -> &'a T {
        let node = self
            .tail()
            .expect("Cannot access the back of an empty list");
        &node.deref().borrow(token).elem
    }

    pub fn push_back(&mut self, elem: T, token: &mut GhostToken<'id>) {
        self.push_at(Self::TAIL, elem, token);
    }
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> T {
        self.pop_at(Self::TAIL, token)
            .expect("Cannot pop the back of an empty list")
    }
    pub fn push_front(&mut self, elem: T, token: &mut GhostToken<'id>) {
        self.push_at(Self::HEAD, elem, token);
    }
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> T {
        self.pop_at(Self::HEAD, token)
            .expect("Cannot pop the front of an empty list")
    }

    /// Drops every element, head to tail. Clearing an empty list does nothing.
    pub fn clear(&mut self, token: &mut GhostToken<'id>) {
        while !self.is_empty() {
            drop(self.pop_front(token));
        }
    }

    /// Destroys the list, releasing every node and dropping every element.
    pub fn drop_in(mut self, token: &mut GhostToken<'id>) {
        self.clear(token);
    }

    /// Destroys the list, moving its elements out in order.
    pub fn into_vec(mut self, token: &mut GhostToken<'id>) -> Vec<T> {
        let mut elems = Vec::with_capacity(self.len);
        while !self.is_empty() {
            elems.push(self.pop_front(token));
        }
        elems
    }

    pub fn iter<'a>(&'a self, token: &'a GhostToken<'id>) -> Iter<'a, 'id, T> {
        Iter {
            next: self.head(),
            token,
            len: self.len,
        }
    }

    /// Removes the first element (from head to tail) equal to `value`, and
    /// returns whether an element was removed.
    ///
    /// A node is only reachable through the halves held by its neighbours, so
    /// the elements between the nearer end and the match are popped, and
    /// pushed back after the match is dropped.
    pub fn remove(&mut self, value: &T, token: &mut GhostToken<'id>) -> bool
    where
        T: PartialEq,
    {
        let position = match self.iter(token).position(|elem| elem == value) {
            Some(position) => position,
            None => return false,
        };
        let from_tail = self.len - 1 - position;
        let (side, steps) = if position <= from_tail {
            (Self::HEAD, position)
        } else {
            (Self::TAIL, from_tail)
        };
        let mut peeled = Vec::with_capacity(steps);
        for _ in 0..steps {
            peeled.extend(self.pop_at(side, token));
        }
        drop(self.pop_at(side, token));
        while let Some(elem) = peeled.pop() {
            self.push_at(side, elem, token);
        }
        true
    }

    /// Creates a new list of the same brand holding `f` applied to every
    /// element, in the same order.
    pub fn map<U, F>(&self, f: F, token: &mut GhostToken<'id>) -> GhostList<'id, U>
    where
        F: FnMut(&T) -> U,
    {
        let mapped: Vec<U> = self.iter(token).map(f).collect();
        GhostList::from_iter_in(mapped, token)
    }

    /// Returns `true` if both lists have the same length and pairwise equal
    /// elements.
    pub fn eq(&self, other: &Self, token: &GhostToken<'id>) -> bool
    where
        T: PartialEq,
    {
        self.len == other.len && self.iter(token).eq(other.iter(token))
    }

    pub fn to_vec(&self, token: &GhostToken<'id>) -> Vec<T>
    where
        T: Clone,
    {
        self.iter(token).cloned().collect()
    }
}

/// An iterator over the elements of a [`GhostList`], from head to tail.
pub struct Iter<'a, 'id, T> {
    next: Option<&'a NodePtr<'id, T>>,
    token: &'a GhostToken<'id>,
    len: usize,
}

impl<'a, 'id, T> Iterator for Iter<'a, 'id, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?.deref().borrow(self.token);
        self.next = node.next();
        self.len -= 1;
        Some(&node.elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, 'id, T> ExactSizeIterator for Iter<'a, 'id, T> {}
