//! The XOR-linked list.
//!
//! [`XorList`] is a doubly-traversable list whose nodes carry a single
//! link field — the XOR of the two neighbor addresses — instead of
//! separate forward and backward pointers. Nodes live in a paged bump
//! arena owned by the list; erased nodes give up their value but their
//! storage is only reclaimed when the list itself goes away.
//!
//! Positions are [`Cursor`]s: detached `(prev, current)` address pairs
//! that the list validates on use. Every structural mutation bumps the
//! list's version; in debug builds a cursor from before the mutation is
//! rejected with [`ListError::InvalidIterator`], in release builds the
//! version and ownership checks are skipped and correct cursor usage is a
//! caller precondition (memory safety is never at stake either way).

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use skein_arena::{Arena, ArenaConfig, SlotAddr, SlotAlloc};

use crate::cursor::{Cursor, Iter};
use crate::error::{IteratorFault, ListError};
use crate::node::{neighbor, relink, Node};

/// Counter for unique [`ListId`] allocation.
static LIST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of one list instance.
///
/// Cursors capture it at creation so that, in debug builds, a cursor
/// applied to a different list is caught instead of silently decoding
/// addresses against the wrong arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ListId(u64);

impl ListId {
    /// Allocate a fresh, unique list identity.
    fn next() -> Self {
        Self(LIST_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// A doubly-traversable linked list with one XOR link per node.
///
/// All operations are O(1) except [`Clone`], [`XorList::clear`], and
/// destruction, which are O(n). The list is single-threaded, like the
/// arena underneath it.
///
/// # Example
///
/// ```
/// use skein::XorList;
///
/// let mut list: XorList<i32> = (1..=3).collect();
/// list.push_front(0);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3]);
/// assert_eq!(list.pop_back(), Ok(3));
/// assert_eq!(list.back(), Ok(&2));
/// ```
pub struct XorList<T> {
    pub(crate) nodes: Arena<Node<T>>,
    pub(crate) head: SlotAddr,
    pub(crate) tail: SlotAddr,
    pub(crate) len: usize,
    pub(crate) version: u64,
    pub(crate) id: ListId,
}

impl<T> XorList<T> {
    /// Create an empty list with the default page policy.
    pub fn new() -> Self {
        Self::with_config(ArenaConfig::default())
    }

    /// Create an empty list whose node arena uses the given page policy.
    pub fn with_config(config: ArenaConfig) -> Self {
        Self {
            nodes: Arena::with_config(config),
            head: SlotAddr::NULL,
            tail: SlotAddr::NULL,
            len: 0,
            version: 0,
            id: ListId::next(),
        }
    }

    /// Create an empty list drawing its node storage policy from an
    /// element allocator handle.
    ///
    /// This is the rebind step of the allocator contract: node storage is
    /// a fresh, independent arena that keeps the handle's page policy —
    /// exactly what rebinding the handle to the node type produces. The
    /// caller's handle keeps its own arena untouched.
    pub fn with_allocator(alloc: &SlotAlloc<T>) -> Self {
        Self::with_config(alloc.config())
    }

    /// Create a list of `count` clones of `value`.
    pub fn from_elem(count: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut list = Self::new();
        for _ in 0..count {
            list.push_back(value.clone());
        }
        list
    }

    /// Number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Cursor at the first element, or at the end position if empty.
    pub fn begin(&self) -> Cursor {
        Cursor::new(SlotAddr::NULL, self.head, self.id, self.version)
    }

    /// Cursor at the end position (one past the tail).
    pub fn end(&self) -> Cursor {
        Cursor::new(self.tail, SlotAddr::NULL, self.id, self.version)
    }

    /// Borrowing iterator from front to back.
    ///
    /// Supports reverse traversal via [`Iterator::rev`]. While an
    /// iterator is alive the list cannot be structurally mutated — the
    /// borrow checker enforces what the cursor version checks can only
    /// detect at run time.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// First element.
    ///
    /// # Errors
    ///
    /// [`ListError::Empty`] if the list has no elements.
    pub fn front(&self) -> Result<&T, ListError> {
        if self.head.is_null() {
            return Err(ListError::Empty);
        }
        Ok(&self.node(self.head).value)
    }

    /// Mutable first element.
    ///
    /// # Errors
    ///
    /// [`ListError::Empty`] if the list has no elements.
    pub fn front_mut(&mut self) -> Result<&mut T, ListError> {
        if self.head.is_null() {
            return Err(ListError::Empty);
        }
        let head = self.head;
        Ok(&mut self.node_mut(head).value)
    }

    /// Last element.
    ///
    /// # Errors
    ///
    /// [`ListError::Empty`] if the list has no elements.
    pub fn back(&self) -> Result<&T, ListError> {
        if self.tail.is_null() {
            return Err(ListError::Empty);
        }
        Ok(&self.node(self.tail).value)
    }

    /// Mutable last element.
    ///
    /// # Errors
    ///
    /// [`ListError::Empty`] if the list has no elements.
    pub fn back_mut(&mut self) -> Result<&mut T, ListError> {
        if self.tail.is_null() {
            return Err(ListError::Empty);
        }
        let tail = self.tail;
        Ok(&mut self.node_mut(tail).value)
    }

    /// Append an element at the back.
    pub fn push_back(&mut self, value: T) {
        let _ = self.splice_before(self.tail, SlotAddr::NULL, value);
    }

    /// Prepend an element at the front.
    pub fn push_front(&mut self, value: T) {
        let _ = self.splice_before(SlotAddr::NULL, self.head, value);
    }

    /// Insert `value` before the cursor's position and return a cursor
    /// that still denotes the same logical successor, now with the new
    /// element as its predecessor.
    ///
    /// Inserting before the end position appends; before `begin()`
    /// prepends.
    ///
    /// # Errors
    ///
    /// In debug builds, [`ListError::InvalidIterator`] if the cursor is
    /// stale or from another list.
    pub fn insert_before(&mut self, cursor: Cursor, value: T) -> Result<Cursor, ListError> {
        self.debug_check(&cursor)?;
        let addr = self.splice_before(cursor.prev, cursor.current, value);
        Ok(Cursor::new(addr, cursor.current, self.id, self.version))
    }

    /// Insert `value` after the cursor's element and return a cursor at
    /// that element.
    ///
    /// Defined as: step forward, [`insert_before`](Self::insert_before)
    /// there, step the result back twice.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidIterator`] at the end position (there is no
    /// element to insert after); in debug builds also for stale or
    /// foreign cursors.
    pub fn insert_after(&mut self, cursor: Cursor, value: T) -> Result<Cursor, ListError> {
        if cursor.is_end() {
            return Err(ListError::invalid(IteratorFault::AtEnd));
        }
        let ahead = cursor.next(self)?;
        let at_successor = self.insert_before(ahead, value)?;
        let at_inserted = at_successor.prev(self)?;
        at_inserted.prev(self)
    }

    /// Remove the cursor's element and return its value.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidIterator`] at the end position; in debug
    /// builds also for stale or foreign cursors.
    pub fn erase(&mut self, cursor: Cursor) -> Result<T, ListError> {
        if cursor.is_end() {
            return Err(ListError::invalid(IteratorFault::AtEnd));
        }
        self.debug_check(&cursor)?;

        let link = self.node(cursor.current).link;
        let next = neighbor(link, cursor.prev);

        if next.is_null() {
            self.tail = cursor.prev;
        } else {
            let n = self.node_mut(next);
            n.link = relink(n.link, cursor.current, cursor.prev);
        }
        if cursor.prev.is_null() {
            self.head = next;
        } else {
            let p = self.node_mut(cursor.prev);
            p.link = relink(p.link, cursor.current, next);
        }

        let node = self
            .nodes
            .take(cursor.current)
            .expect("erase target was resolved to a live node above");
        self.len -= 1;
        self.version += 1;
        Ok(node.value)
    }

    /// Remove and return the last element.
    ///
    /// # Errors
    ///
    /// [`ListError::Empty`] if the list has no elements.
    pub fn pop_back(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        let last = self.end().prev(self)?;
        self.erase(last)
    }

    /// Remove and return the first element.
    ///
    /// # Errors
    ///
    /// [`ListError::Empty`] if the list has no elements.
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        let first = self.begin();
        self.erase(first)
    }

    /// Drop every element, front to back.
    ///
    /// Node storage stays with the arena; the list is empty and fully
    /// usable afterwards. Also what [`Drop`] runs.
    pub fn clear(&mut self) {
        let mut prev = SlotAddr::NULL;
        let mut current = self.head;
        while !current.is_null() {
            let node = self
                .nodes
                .take(current)
                .expect("traversal from head reaches only live nodes");
            let next = neighbor(node.link, prev);
            prev = current;
            current = next;
        }
        self.head = SlotAddr::NULL;
        self.tail = SlotAddr::NULL;
        self.len = 0;
        self.version += 1;
    }

    /// Move the contents out, leaving this list empty but usable.
    ///
    /// O(1): transfers the node arena and the head/tail bookkeeping. The
    /// emptied source behaves like a freshly constructed list with the
    /// same page policy; cursors taken before the move no longer belong
    /// to it (debug builds report [`IteratorFault::ForeignList`]).
    pub fn take(&mut self) -> XorList<T> {
        let config = self.nodes.config().clone();
        std::mem::replace(self, Self::with_config(config))
    }

    /// Splice a new node between `prev` and `next` (either may be null)
    /// and return its address. Bumps size and version.
    fn splice_before(&mut self, prev: SlotAddr, next: SlotAddr, value: T) -> SlotAddr {
        let addr = self.nodes.alloc(1);
        self.nodes.set(addr, Node::new(value, prev, next));

        if next.is_null() {
            self.tail = addr;
        } else {
            let n = self.node_mut(next);
            n.link = relink(n.link, prev, addr);
        }
        if prev.is_null() {
            self.head = addr;
        } else {
            let p = self.node_mut(prev);
            p.link = relink(p.link, next, addr);
        }

        self.len += 1;
        self.version += 1;
        addr
    }

    /// Resolve a live node.
    ///
    /// A cursor that survived the debug checks (or, in release builds, a
    /// correctly used one) only ever carries live addresses; anything
    /// else is a caller contract violation and panics.
    pub(crate) fn node(&self, addr: SlotAddr) -> &Node<T> {
        self.nodes
            .get(addr)
            .expect("address does not refer to a live node")
    }

    pub(crate) fn node_mut(&mut self, addr: SlotAddr) -> &mut Node<T> {
        self.nodes
            .get_mut(addr)
            .expect("address does not refer to a live node")
    }

    /// Debug-build cursor validation: ownership first (a version
    /// comparison across lists means nothing), then the version snapshot.
    /// Release builds skip both and return `Ok`.
    pub(crate) fn debug_check(&self, cursor: &Cursor) -> Result<(), ListError> {
        if cfg!(debug_assertions) {
            if cursor.list != self.id {
                return Err(ListError::invalid(IteratorFault::ForeignList));
            }
            if cursor.version != self.version {
                return Err(ListError::invalid(IteratorFault::Stale {
                    cursor_version: cursor.version,
                    list_version: self.version,
                }));
            }
        }
        Ok(())
    }
}

impl<T> Default for XorList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for XorList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for XorList<T> {
    /// Deep copy: front-to-back traversal of the source, each value
    /// cloned into a fresh list with its own arena (same page policy).
    /// O(n); the source is untouched and shares no nodes with the copy.
    fn clone(&self) -> Self {
        let mut copy = Self::with_config(self.nodes.config().clone());
        for value in self.iter() {
            copy.push_back(value.clone());
        }
        copy
    }
}

impl<T: PartialEq> PartialEq for XorList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for XorList<T> {}

impl<T: fmt::Debug> fmt::Debug for XorList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for XorList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}
