//! Compact slot addresses and the XOR link primitive.
//!
//! A [`SlotAddr`] names one slot inside an [`Arena`](crate::Arena). It is
//! an address-sized integer rather than a machine pointer: `0` is the null
//! address, and a non-null address packs a `(page, slot)` pair. Because the
//! encoding is injective and never zero, two addresses can be folded into a
//! single field with bitwise XOR and recovered later given either neighbor —
//! the trick that lets a doubly-traversable list carry one link per node.

use std::fmt;
use std::ops::BitXor;

/// Address of a single slot within an arena.
///
/// Addresses are stable for the lifetime of the arena that issued them:
/// pages are never moved, freed, or compacted. The null address compares
/// equal to [`SlotAddr::NULL`] and decodes no location.
///
/// XOR-ing two addresses produces a link value from which either operand
/// can be recovered given the other: `(p ^ q) ^ p == q`. This holds for
/// the null address as well, since null is encoded as zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct SlotAddr(u64);

impl SlotAddr {
    /// The null address. Encodes "no slot"; XOR identity element.
    pub const NULL: SlotAddr = SlotAddr(0);

    /// Pack a page index and a slot offset into an address.
    ///
    /// The raw value is offset by one so that `(0, 0)` does not collide
    /// with the null encoding.
    pub(crate) fn new(page: u32, slot: u32) -> Self {
        SlotAddr((u64::from(page) << 32 | u64::from(slot)) + 1)
    }

    /// Page index of a non-null address.
    pub(crate) fn page(self) -> u32 {
        debug_assert!(!self.is_null(), "null address has no location");
        ((self.0 - 1) >> 32) as u32
    }

    /// Slot offset within the page of a non-null address.
    pub(crate) fn slot(self) -> u32 {
        debug_assert!(!self.is_null(), "null address has no location");
        ((self.0 - 1) & u64::from(u32::MAX)) as u32
    }

    /// Whether this is the null address.
    pub fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Address of the `n`-th slot after `self`.
    ///
    /// Only meaningful within a single contiguous allocation, which is
    /// guaranteed to live on one page.
    ///
    /// # Panics
    ///
    /// Panics if `self` is null.
    pub fn add(self, n: u32) -> SlotAddr {
        assert!(!self.is_null(), "cannot offset the null address");
        SlotAddr::new(self.page(), self.slot() + n)
    }
}

impl BitXor for SlotAddr {
    type Output = SlotAddr;

    fn bitxor(self, rhs: SlotAddr) -> SlotAddr {
        SlotAddr(self.0 ^ rhs.0)
    }
}

impl fmt::Display for SlotAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "null")
        } else {
            write!(f, "{}:{}", self.page(), self.slot())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_round_trip() {
        let a = SlotAddr::new(3, 1024);
        assert_eq!(a.page(), 3);
        assert_eq!(a.slot(), 1024);
        assert!(!a.is_null());
    }

    #[test]
    fn origin_is_not_null() {
        let a = SlotAddr::new(0, 0);
        assert!(!a.is_null());
        assert_ne!(a, SlotAddr::NULL);
    }

    #[test]
    fn xor_recovers_either_operand() {
        let p = SlotAddr::new(0, 7);
        let q = SlotAddr::new(2, 19);
        let link = p ^ q;
        assert_eq!(link ^ p, q);
        assert_eq!(link ^ q, p);
    }

    #[test]
    fn xor_with_null_is_identity() {
        let p = SlotAddr::new(1, 5);
        assert_eq!(p ^ SlotAddr::NULL, p);
        assert_eq!(SlotAddr::NULL ^ SlotAddr::NULL, SlotAddr::NULL);
    }

    #[test]
    fn add_stays_on_page() {
        let a = SlotAddr::new(2, 10);
        let b = a.add(5);
        assert_eq!(b.page(), 2);
        assert_eq!(b.slot(), 15);
    }

    #[test]
    #[should_panic(expected = "null address")]
    fn add_rejects_null() {
        let _ = SlotAddr::NULL.add(1);
    }

    #[test]
    fn display_forms() {
        assert_eq!(SlotAddr::NULL.to_string(), "null");
        assert_eq!(SlotAddr::new(1, 42).to_string(), "1:42");
    }
}
