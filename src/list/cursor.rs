use crate::list::{next_of, prev_of, List, Node};
use std::fmt;
use std::fmt::Formatter;
use std::ptr::NonNull;

/// A forward cursor over a `List`.
///
/// A `Cursor` observes one node of the list, or the terminal sentinel "one
/// past the end" (the ghost node). Advancing follows the `next` links.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the cursor,
/// indexed by 0, 1, ..., *n*, where *n* is the terminal sentinel.
///
/// The cursor borrows the list, so the list cannot be structurally mutated
/// while the cursor is alive.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The ghost node of the
/// list is denoted by `#`).
/// ```
/// use sequence_list::List;
///
/// // Create a list: [ A B C #]
/// let list = List::from(['A', 'B', 'C']);
///
/// // Create a cursor at start: [|A B C #] (index = 0)
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Move cursor forward: [ A|B C #] (index = 1)
/// cursor.move_next();
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Move past the last node: [ A B C|#] (index = 3)
/// cursor.move_next();
/// cursor.move_next();
/// assert_eq!(cursor.current(), None);
/// assert_eq!(cursor, list.cursor_end());
/// ```
///
/// The terminal sentinel cannot be advanced.
/// ```should_panic
/// use sequence_list::List;
///
/// let list = List::from(['A']);
/// list.cursor_end().move_next();
/// ```
///
/// ```compile_fail
/// use sequence_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let cursor = list.cursor_start();
///
/// // Won't compile, because the cursor still borrows the list.
/// list.pop_front();
/// println!("{:?}", cursor.current());
/// ```
pub struct Cursor<'a, T: 'a> {
    index: usize,
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a List<T>,
}

/// A backward cursor over a `List`.
///
/// A `RevCursor` observes one node of the list, or the terminal sentinel "one
/// before the start" (the ghost node). Advancing follows the `prev` links, so
/// the cursor created by [`List::rev_cursor_start`] visits the list from the
/// tail to the head.
///
/// Its index counts the steps taken from the tail: the tail is at 0 and the
/// terminal sentinel is at *n*.
///
/// # Examples
///
/// ```
/// use sequence_list::List;
///
/// let list = List::from(["T5600", "Premio", "Skull Canyon"]);
/// let mut cursor = list.rev_cursor_start();
/// let mut seen: Vec<&&str> = Vec::new();
/// while cursor != list.rev_cursor_end() {
///     seen.extend(cursor.current());
///     cursor.move_next();
/// }
/// assert_eq!(seen, vec![&"Skull Canyon", &"Premio", &"T5600"]);
/// ```
pub struct RevCursor<'a, T: 'a> {
    index: usize,
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident, $step:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            pub(crate) fn new(list: &'a List<T>, current: NonNull<Node<T>>, index: usize) -> Self {
                Self {
                    index,
                    current,
                    list,
                }
            }
            pub(crate) fn is_ghost_node(&self) -> bool {
                self.current == self.list.ghost_node()
            }
            pub(crate) fn step_node(&self) -> NonNull<Node<T>> {
                // SAFETY: the links of `current` are always valid since it is a
                // ring closed by the ghost node.
                unsafe { $step(self.current) }
            }
            fn same_list_with(&self, other: &Self) -> bool {
                std::ptr::eq(self.list, other.list)
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Return the number of steps the cursor is away from where it
            /// started; the terminal sentinel is at the length of the list.
            pub fn index(&self) -> usize {
                self.index
            }

            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Returns `true` if the cursor is at the terminal sentinel.
            pub fn is_terminal(&self) -> bool {
                self.is_ghost_node()
            }

            /// Advance the cursor by one node, landing on the terminal
            /// sentinel after the last node in its direction.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Panics
            ///
            /// Panics if the cursor is already at the terminal sentinel;
            /// check [`is_terminal`](Self::is_terminal) first.
            pub fn move_next(&mut self) {
                assert!(
                    !self.is_ghost_node(),
                    "Cannot advance a cursor past the terminal sentinel"
                );
                self.current = self.step_node();
                self.index += 1;
            }

            /// Return an immutable reference of current node of the cursor,
            /// or return `None` if it is located at the terminal sentinel.
            pub fn current(&self) -> Option<&'a T> {
                if self.is_ghost_node() {
                    return None;
                }
                // SAFETY: it is safe because non-ghost nodes must hold a
                // valid element, and the list is borrowed for `'a`.
                unsafe { Some(Node::element(self.current)) }
            }

            /// Return the element [`move_next`](Self::move_next) would land on,
            /// or `None` if it would land on (or is already at) the terminal
            /// sentinel.
            pub fn peek_next(&self) -> Option<&'a T> {
                if self.is_ghost_node() {
                    return None;
                }
                let next = self.step_node();
                if next == self.list.ghost_node() {
                    return None;
                }
                // SAFETY: `next` is a non-ghost node of the borrowed list.
                unsafe { Some(Node::element(next)) }
            }
        }

        impl<'a, T: 'a> Clone for $CURSOR<'a, T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<'a, T: 'a> Copy for $CURSOR<'a, T> {}

        /// Compare cursors by its position.
        ///
        /// Only cursors belong to the same list and have the same positions
        /// are considered equal. Every terminal cursor of a list equals the
        /// other terminal cursors of the same direction.
        impl<'a, T: 'a> PartialEq for $CURSOR<'a, T> {
            fn eq(&self, other: &Self) -> bool {
                self.same_list_with(other) && self.current == other.current
            }
        }

        impl<'a, T: 'a> Eq for $CURSOR<'a, T> {}

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("current", &self.current())
                    .field("index", &self.index)
                    .finish()
            }
        }

        unsafe impl<T: Sync> Send for $CURSOR<'_, T> {}

        unsafe impl<T: Sync> Sync for $CURSOR<'_, T> {}
    };
}

impl_cursor!(Cursor, next_of);
impl_cursor!(RevCursor, prev_of);
