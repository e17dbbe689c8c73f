//! Paged bump allocation for skein containers.
//!
//! Provides the two layers of the allocation story:
//!
//! ```text
//! SlotAlloc<T> (typed handle, Rc-shared)
//! └── Arena<T> (paged bump store)
//!     └── Page<T>[] (fixed-capacity Option<T> slots, cursor-allocated)
//! ```
//!
//! # Design
//!
//! - **Bump-only.** Allocation advances a cursor; nothing is reclaimed per
//!   slot. A request that outgrows the current page retires that page's
//!   tail forever and opens a new page sized for the request. All storage
//!   is released together when the arena drops.
//! - **Integer addresses.** [`SlotAddr`] packs `(page, slot)` into one
//!   address-sized integer with `0` reserved as null, and implements
//!   `BitXor` — containers can fold two neighbor addresses into a single
//!   link field and decode either side later.
//! - **Split lifetimes.** Allocation (storage) and construction (value)
//!   are separate steps: a slot is uninitialized until
//!   [`SlotAlloc::construct`] and again after [`SlotAlloc::destroy`].
//! - **Sharing.** Cloning a [`SlotAlloc`] shares its arena;
//!   [`SlotAlloc::rebind`] starts an independent arena with the same page
//!   policy.
//!
//! Everything here is single-threaded and 100% safe Rust.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod addr;
pub mod arena;
pub mod config;
pub mod handle;

// Public re-exports for the primary API surface.
pub use addr::SlotAddr;
pub use arena::Arena;
pub use config::ArenaConfig;
pub use handle::SlotAlloc;
