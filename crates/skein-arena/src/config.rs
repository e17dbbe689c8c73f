//! Arena configuration parameters.

/// Configuration for a paged bump arena.
///
/// Controls page sizing. Cloned into every arena derived from a handle via
/// [`rebind`](crate::SlotAlloc::rebind), so a rebound handle keeps the
/// allocation policy of its source while owning fresh storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Nominal size of one page in bytes.
    ///
    /// Default: 4096. A request larger than one page gets a dedicated
    /// page rounded up to a whole multiple of this value.
    pub page_bytes: usize,
}

impl ArenaConfig {
    /// Default page size in bytes.
    pub const DEFAULT_PAGE_BYTES: usize = 4096;

    /// Create a config with the given page size.
    ///
    /// # Panics
    ///
    /// Panics if `page_bytes` is zero.
    pub fn new(page_bytes: usize) -> Self {
        assert!(page_bytes > 0, "page_bytes must be non-zero");
        Self { page_bytes }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE_BYTES)
    }
}
