//! Deterministic operation sequences for cross-check harnesses.
//!
//! [`random_ops`] expands a seed into a sequence of deque-style
//! operations. The same seed always produces the same sequence
//! (ChaCha8), so a failing cross-check run can be replayed exactly.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// One operation against a doubly-ended list.
///
/// Observation operations ([`Op::Front`], [`Op::Back`]) carry no payload;
/// the harness compares what both containers report. Removal operations
/// are generated regardless of emptiness — harnesses are expected to
/// apply them to both containers only when legal, or to compare the
/// error behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    PushBack(i32),
    PushFront(i32),
    PopBack,
    PopFront,
    Front,
    Back,
}

/// Generate `len` operations from `seed`.
///
/// Values pushed are drawn from `0..1000`; the six operation kinds are
/// uniformly distributed.
pub fn random_ops(seed: u64, len: usize) -> Vec<Op> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| match rng.random_range(0..6) {
            0 => Op::PushBack(rng.random_range(0..1000)),
            1 => Op::PushFront(rng.random_range(0..1000)),
            2 => Op::PopBack,
            3 => Op::PopFront,
            4 => Op::Front,
            _ => Op::Back,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        assert_eq!(random_ops(42, 100), random_ops(42, 100));
    }

    #[test]
    fn different_seeds_diverge() {
        assert_ne!(random_ops(1, 100), random_ops(2, 100));
    }

    #[test]
    fn generates_requested_length() {
        assert_eq!(random_ops(7, 250).len(), 250);
    }
}
