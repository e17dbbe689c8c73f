//! Paged bump allocation with explicit slot lifetimes.
//!
//! An [`Arena<T>`] owns a growable list of fixed-capacity pages and hands
//! out [`SlotAddr`]s by advancing a cursor through the current page. Pages
//! are never freed or compacted while the arena lives, so every address
//! stays valid until the arena is dropped. There is no per-slot
//! deallocation; reclamation happens in bulk when the arena goes away.
//!
//! Each slot is an `Option<T>`: `None` after [`Arena::alloc`] (storage
//! reserved, no value), `Some` once a value is placed with [`Arena::set`].
//! [`Arena::take`] ends a value's lifetime without releasing its storage,
//! keeping allocation and initialization as separate, composable steps.

use crate::addr::SlotAddr;
use crate::config::ArenaConfig;

/// One fixed-capacity page of slots.
///
/// Capacity is decided at creation and never changes. The cursor only
/// moves forward; slots behind it are reachable through their addresses,
/// slots ahead of it do not exist yet as far as callers are concerned.
struct Page<T> {
    slots: Vec<Option<T>>,
    cursor: usize,
}

impl<T> Page<T> {
    fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, cursor: 0 }
    }

    /// Bump-allocate `count` contiguous slots, or `None` if they don't fit.
    fn alloc(&mut self, count: usize) -> Option<u32> {
        let new_cursor = self.cursor.checked_add(count)?;
        if new_cursor > self.slots.len() {
            return None;
        }
        let offset = self.cursor as u32;
        self.cursor = new_cursor;
        Some(offset)
    }

    fn remaining(&self) -> usize {
        self.slots.len() - self.cursor
    }
}

/// A growable paged bump store for values of type `T`.
///
/// Allocation only ever moves forward: when a request does not fit in the
/// current page, a new page sized for the request is opened and the old
/// page's remaining capacity is abandoned. Retired pages are never
/// revisited — this is an intentional property of the allocator, not an
/// oversight, and it is what keeps previously issued addresses stable.
///
/// Page capacity is derived from `size_of::<T>()` against the configured
/// page byte budget; the per-slot liveness flag is constant overhead not
/// counted by the sizing policy. Slot storage is `Vec`-backed, so every
/// slot is aligned for `T` by construction — there is no alignment
/// arithmetic to get wrong.
///
/// Running out of system memory while opening a page is fatal and aborts
/// through the global allocator; it is never retried.
pub struct Arena<T> {
    pages: Vec<Page<T>>,
    config: ArenaConfig,
}

impl<T> Arena<T> {
    /// Create an empty arena with the default page size.
    ///
    /// No page is opened until the first allocation.
    pub fn new() -> Self {
        Self::with_config(ArenaConfig::default())
    }

    /// Create an empty arena with an explicit page policy.
    pub fn with_config(config: ArenaConfig) -> Self {
        Self {
            pages: Vec::new(),
            config,
        }
    }

    /// Element size used for page-capacity arithmetic.
    ///
    /// Zero-sized types occupy bookkeeping slots but no payload bytes;
    /// they are costed at one byte so capacity stays finite.
    fn slot_bytes() -> usize {
        std::mem::size_of::<T>().max(1)
    }

    /// Bump-allocate `count` contiguous uninitialized slots.
    ///
    /// Returns the address of the first slot; the rest are reachable via
    /// [`SlotAddr::add`]. All `count` slots live on a single page.
    /// `alloc(0)` allocates nothing and returns [`SlotAddr::NULL`].
    ///
    /// # Panics
    ///
    /// Panics if the request's byte size or the page table overflows the
    /// address space (more than `u32::MAX` pages or slots per page).
    pub fn alloc(&mut self, count: usize) -> SlotAddr {
        if count == 0 {
            return SlotAddr::NULL;
        }

        if let Some(page) = self.pages.last_mut() {
            if let Some(offset) = page.alloc(count) {
                return SlotAddr::new((self.pages.len() - 1) as u32, offset);
            }
        }

        // Current page (if any) can't satisfy the request: retire it and
        // open a page sized to a whole multiple of the configured budget.
        let request_bytes = count
            .checked_mul(Self::slot_bytes())
            .expect("allocation size overflows the address space");
        let page_bytes = request_bytes
            .div_ceil(self.config.page_bytes)
            .max(1)
            .checked_mul(self.config.page_bytes)
            .expect("page size overflows the address space");
        let capacity = page_bytes / Self::slot_bytes();
        assert!(
            capacity <= u32::MAX as usize,
            "page capacity exceeds the addressable slot range"
        );
        assert!(
            self.pages.len() < u32::MAX as usize,
            "page table exceeds the addressable page range"
        );

        let mut page = Page::new(capacity);
        let offset = page
            .alloc(count)
            .expect("fresh page is sized for the request, so it always fits");
        self.pages.push(page);
        SlotAddr::new((self.pages.len() - 1) as u32, offset)
    }

    /// Resolve an address to its slot, panicking on anything not allocated.
    fn slot(&self, addr: SlotAddr) -> &Option<T> {
        assert!(!addr.is_null(), "cannot resolve the null address");
        let page = &self.pages[addr.page() as usize];
        let slot = addr.slot() as usize;
        assert!(slot < page.cursor, "address {addr} outside allocated range");
        &page.slots[slot]
    }

    fn slot_mut(&mut self, addr: SlotAddr) -> &mut Option<T> {
        assert!(!addr.is_null(), "cannot resolve the null address");
        let page = &mut self.pages[addr.page() as usize];
        let slot = addr.slot() as usize;
        assert!(slot < page.cursor, "address {addr} outside allocated range");
        &mut page.slots[slot]
    }

    /// Place a value into an allocated slot, returning whatever was there.
    ///
    /// # Panics
    ///
    /// Panics if `addr` is null or was never allocated from this arena.
    pub fn set(&mut self, addr: SlotAddr, value: T) -> Option<T> {
        self.slot_mut(addr).replace(value)
    }

    /// Remove and return the value in a slot, leaving it uninitialized.
    ///
    /// The slot's storage remains allocated — this ends the value's
    /// lifetime, nothing more.
    ///
    /// # Panics
    ///
    /// Panics if `addr` is null or was never allocated from this arena.
    pub fn take(&mut self, addr: SlotAddr) -> Option<T> {
        self.slot_mut(addr).take()
    }

    /// Shared access to the value in a slot, or `None` if uninitialized.
    ///
    /// # Panics
    ///
    /// Panics if `addr` is null or was never allocated from this arena.
    pub fn get(&self, addr: SlotAddr) -> Option<&T> {
        self.slot(addr).as_ref()
    }

    /// Mutable access to the value in a slot, or `None` if uninitialized.
    ///
    /// # Panics
    ///
    /// Panics if `addr` is null or was never allocated from this arena.
    pub fn get_mut(&mut self, addr: SlotAddr) -> Option<&mut T> {
        self.slot_mut(addr).as_mut()
    }

    /// The arena's page policy.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Number of pages opened so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total slots handed out across all pages, live or not.
    pub fn allocated_slots(&self) -> usize {
        self.pages.iter().map(|p| p.cursor).sum()
    }

    /// Number of slots currently holding a value. O(allocated).
    pub fn live_slots(&self) -> usize {
        self.pages
            .iter()
            .flat_map(|p| p.slots[..p.cursor].iter())
            .filter(|s| s.is_some())
            .count()
    }

    /// Backing memory across all pages, in bytes.
    pub fn memory_bytes(&self) -> usize {
        let per_slot = std::mem::size_of::<Option<T>>();
        self.pages.iter().map(|p| p.slots.len() * per_slot).sum()
    }

    /// Remaining capacity of the current page, in slots.
    pub fn current_page_remaining(&self) -> usize {
        self.pages.last().map_or(0, Page::remaining)
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}
