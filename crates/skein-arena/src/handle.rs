//! Shared typed allocator handles.
//!
//! A [`SlotAlloc<T>`] is the per-element-type face of one arena. Cloning a
//! handle shares the arena (reference-counted); rebinding to another
//! element type produces a handle over a fresh, independent arena that
//! keeps the same page policy. Containers consume handles through four
//! operations: `allocate`, `deallocate` (a deliberate no-op), `construct`,
//! and `destroy`.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::addr::SlotAddr;
use crate::arena::Arena;
use crate::config::ArenaConfig;

/// Typed handle to a shared bump arena.
///
/// The handle is single-threaded by design, like everything in this
/// workspace: sharing is `Rc`-based and access is checked by `RefCell`.
/// Guards returned by [`get`](SlotAlloc::get) / [`get_mut`](SlotAlloc::get_mut)
/// must be dropped before the next allocating or mutating call through any
/// handle of the same arena.
pub struct SlotAlloc<T> {
    arena: Rc<RefCell<Arena<T>>>,
}

impl<T> SlotAlloc<T> {
    /// Create a handle over a fresh arena with the default page policy.
    pub fn new() -> Self {
        Self::with_config(ArenaConfig::default())
    }

    /// Create a handle over a fresh arena with an explicit page policy.
    pub fn with_config(config: ArenaConfig) -> Self {
        Self {
            arena: Rc::new(RefCell::new(Arena::with_config(config))),
        }
    }

    /// Bump-allocate `count` contiguous uninitialized slots.
    ///
    /// See [`Arena::alloc`] for sizing behavior and panics.
    pub fn allocate(&self, count: usize) -> SlotAddr {
        self.arena.borrow_mut().alloc(count)
    }

    /// Release `count` slots starting at `addr`. **This is a no-op.**
    ///
    /// The arena never reclaims individual allocations; storage is
    /// released in bulk when the last handle to the arena drops. The
    /// method exists so containers can speak the full allocator contract
    /// and the no-reclaim policy holds end-to-end.
    pub fn deallocate(&self, _addr: SlotAddr, _count: usize) {}

    /// Place a value into an uninitialized slot.
    ///
    /// # Panics
    ///
    /// Panics if the slot already holds a value, or if `addr` was never
    /// allocated from this arena.
    pub fn construct(&self, addr: SlotAddr, value: T) {
        let mut arena = self.arena.borrow_mut();
        assert!(
            arena.get(addr).is_none(),
            "construct on an occupied slot {addr}"
        );
        arena.set(addr, value);
    }

    /// Drop the value in a slot, returning the slot to uninitialized.
    ///
    /// Deallocates nothing — the storage stays reserved.
    ///
    /// # Panics
    ///
    /// Panics if the slot holds no value, or if `addr` was never
    /// allocated from this arena.
    pub fn destroy(&self, addr: SlotAddr) {
        let value = self.arena.borrow_mut().take(addr);
        assert!(value.is_some(), "destroy on an empty slot {addr}");
    }

    /// Shared access to the value in a slot, if one has been constructed.
    ///
    /// # Panics
    ///
    /// Panics if `addr` was never allocated from this arena.
    pub fn get(&self, addr: SlotAddr) -> Option<Ref<'_, T>> {
        Ref::filter_map(self.arena.borrow(), |arena| arena.get(addr)).ok()
    }

    /// Mutable access to the value in a slot, if one has been constructed.
    ///
    /// # Panics
    ///
    /// Panics if `addr` was never allocated from this arena.
    pub fn get_mut(&self, addr: SlotAddr) -> Option<RefMut<'_, T>> {
        RefMut::filter_map(self.arena.borrow_mut(), |arena| arena.get_mut(addr)).ok()
    }

    /// Produce a handle for element type `U` over a **new, independent**
    /// arena that keeps this handle's page policy.
    ///
    /// Contrast with [`Clone`], which shares the arena with the source.
    pub fn rebind<U>(&self) -> SlotAlloc<U> {
        SlotAlloc::with_config(self.config())
    }

    /// The page policy of the underlying arena.
    pub fn config(&self) -> ArenaConfig {
        self.arena.borrow().config().clone()
    }

    /// Whether two handles allocate from the same arena.
    pub fn shares_arena_with(&self, other: &SlotAlloc<T>) -> bool {
        Rc::ptr_eq(&self.arena, &other.arena)
    }

    /// Number of live handles sharing this arena.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.arena)
    }

    /// Pages opened by the underlying arena.
    pub fn page_count(&self) -> usize {
        self.arena.borrow().page_count()
    }

    /// Backing memory of the underlying arena, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.arena.borrow().memory_bytes()
    }
}

impl<T> Clone for SlotAlloc<T> {
    /// Copies share the same arena with the source handle.
    fn clone(&self) -> Self {
        Self {
            arena: Rc::clone(&self.arena),
        }
    }
}

impl<T> Default for SlotAlloc<T> {
    fn default() -> Self {
        Self::new()
    }
}
