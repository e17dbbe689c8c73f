//! Test utilities for skein development.
//!
//! Provides [`Probe`], a value that records its lifecycle events
//! (creation, cloning, dropping) into a shared [`EventLog`], and the
//! [`ops`] module, which generates deterministic operation sequences for
//! cross-checking list implementations against a reference container.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod ops;
pub mod probe;

pub use ops::{random_ops, Op};
pub use probe::{EventLog, LifeEvent, Probe};
