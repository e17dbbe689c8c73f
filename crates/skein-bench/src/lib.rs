//! Benchmark profiles and helpers for the skein workspace.
//!
//! Provides list builders shared by the bench targets so all profiles
//! measure against identically constructed inputs.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use skein::XorList;

/// Build a list of `len` sequential integers via `push_back`.
pub fn int_list(len: usize) -> XorList<i64> {
    (0..len as i64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_list_builds_requested_length() {
        assert_eq!(int_list(100).len(), 100);
    }
}
