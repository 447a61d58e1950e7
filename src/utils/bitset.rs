/*!
# Node BitSets

A fixed-size set over nodes `0..n` backed by a [`BitVec`].
Traversals and the planarity tests use it to track visited / reached states.
*/

use std::fmt::Debug;

use bitvec::prelude::*;

use crate::node::{Node, NumNodes};

/// BitSet for Nodes
#[derive(Clone, PartialEq, Eq, Default)]
pub struct NodeBitSet {
    bits: BitVec,
}

impl NodeBitSet {
    /// Creates a bitset with `n` cleared entries
    pub fn new(n: NumNodes) -> Self {
        Self {
            bits: BitVec::repeat(false, n as usize),
        }
    }

    /// Sets bit `u` and returns its previous value
    /// ** Panics if `u >= n` **
    pub fn set_bit(&mut self, u: Node) -> bool {
        self.bits.replace(u as usize, true)
    }

    /// Clears bit `u` and returns its previous value
    /// ** Panics if `u >= n` **
    pub fn clear_bit(&mut self, u: Node) -> bool {
        self.bits.replace(u as usize, false)
    }

    /// Returns the value of bit `u`
    /// ** Panics if `u >= n` **
    pub fn get_bit(&self, u: Node) -> bool {
        self.bits[u as usize]
    }

    /// Returns the number of set bits
    pub fn cardinality(&self) -> NumNodes {
        self.bits.count_ones() as NumNodes
    }

    /// Returns *true* if all bits are set
    pub fn are_all_set(&self) -> bool {
        self.bits.all()
    }

    /// Iterates over all set bits in increasing order
    pub fn iter_set_bits(&self) -> impl Iterator<Item = Node> + '_ {
        self.bits.iter_ones().map(|u| u as Node)
    }

    /// Returns the smallest cleared bit `>= from`
    pub fn first_cleared_from(&self, from: Node) -> Option<Node> {
        let from = (from as usize).min(self.bits.len());
        self.bits[from..].first_zero().map(|u| (u + from) as Node)
    }
}

impl Debug for NodeBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter_set_bits()).finish()
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn set_and_clear() {
        let mut set = NodeBitSet::new(70);
        assert_eq!(set.cardinality(), 0);

        assert!(!set.set_bit(3));
        assert!(set.set_bit(3));
        assert!(!set.set_bit(68));
        assert_eq!(set.cardinality(), 2);
        assert_eq!(set.iter_set_bits().collect_vec(), vec![3, 68]);

        assert!(set.clear_bit(3));
        assert!(!set.clear_bit(3));
        assert!(!set.get_bit(3));
        assert!(set.get_bit(68));
        assert_eq!(set.first_cleared_from(0), Some(0));
        assert_eq!(set.first_cleared_from(68), Some(69));
        assert_eq!(set.first_cleared_from(70), None);
        assert_eq!(set.first_cleared_from(100), None);
    }

    #[test]
    fn all_set() {
        let mut set = NodeBitSet::new(3);
        assert_eq!(format!("{set:?}"), "{}");
        for u in 0..3 {
            assert!(!set.are_all_set());
            set.set_bit(u);
        }
        assert!(set.are_all_set());
        assert_eq!(set.first_cleared_from(0), None);
        assert_eq!(format!("{set:?}"), "{0, 1, 2}");
    }
}
