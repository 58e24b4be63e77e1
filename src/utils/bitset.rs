/*!
# Node BitSets

A dense set over the nodes `0..n`, stored as 64-bit words.
It is used for visited-markers during traversals and as the rows of the adjacency matrix
every [`Graph`](crate::repr::Graph) keeps for constant-time edge queries.
*/

use std::fmt::Debug;

use crate::node::*;

const WORD_BITS: usize = 64;

/// BitSet for Nodes
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct NodeBitSet {
    words: Vec<u64>,
    len: NumNodes,
}

impl NodeBitSet {
    /// Creates an empty bitset with one entry per node in `0..n`
    pub fn new(n: NumNodes) -> Self {
        Self {
            words: vec![0; (n as usize).div_ceil(WORD_BITS)],
            len: n,
        }
    }

    /// Creates a bitset over `0..n` with all bits set
    pub fn new_all_set(n: NumNodes) -> Self {
        let mut set = Self {
            words: vec![u64::MAX; (n as usize).div_ceil(WORD_BITS)],
            len: n,
        };
        set.clear_excess_bits();
        set
    }

    /// Creates a bitset over `0..n` where exactly the given bits are set
    /// ** Panics if any `u >= n` **
    pub fn new_with_bits_set<I>(n: NumNodes, bits: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let mut set = Self::new(n);
        set.set_bits(bits);
        set
    }

    fn clear_excess_bits(&mut self) {
        let rem = self.len as usize % WORD_BITS;
        if rem != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << rem) - 1;
            }
        }
    }

    /// Number of entries (set or unset) of the bitset
    pub fn number_of_bits(&self) -> NumNodes {
        self.len
    }

    /// Sets bit `u` and returns *true* if it was set before
    /// ** Panics if `u >= n` **
    pub fn set_bit(&mut self, u: Node) -> bool {
        assert!(u < self.len, "bit {u} out of bounds 0..{}", self.len);
        let (word, mask) = Self::locate(u);
        let was_set = self.words[word] & mask != 0;
        self.words[word] |= mask;
        was_set
    }

    /// Sets all given bits
    /// ** Panics if any `u >= n` **
    pub fn set_bits<I>(&mut self, bits: I)
    where
        I: IntoIterator<Item = Node>,
    {
        for u in bits {
            self.set_bit(u);
        }
    }

    /// Clears bit `u` and returns *true* if it was set before
    /// ** Panics if `u >= n` **
    pub fn clear_bit(&mut self, u: Node) -> bool {
        assert!(u < self.len, "bit {u} out of bounds 0..{}", self.len);
        let (word, mask) = Self::locate(u);
        let was_set = self.words[word] & mask != 0;
        self.words[word] &= !mask;
        was_set
    }

    /// Returns *true* if bit `u` is set
    /// ** Panics if `u >= n` **
    pub fn get_bit(&self, u: Node) -> bool {
        assert!(u < self.len, "bit {u} out of bounds 0..{}", self.len);
        let (word, mask) = Self::locate(u);
        self.words[word] & mask != 0
    }

    /// Clears all bits
    pub fn clear_all(&mut self) {
        self.words.iter_mut().for_each(|w| *w = 0);
    }

    /// Returns the number of set bits
    pub fn cardinality(&self) -> NumNodes {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    /// Returns *true* if every bit in `0..n` is set
    pub fn are_all_set(&self) -> bool {
        self.cardinality() == self.len
    }

    /// Returns *true* if no bit is set
    pub fn are_all_unset(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Returns an iterator over all set bits in increasing order
    pub fn iter_set_bits(&self) -> SetBitsIter<'_> {
        SetBitsIter {
            words: &self.words,
            word_idx: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    #[inline]
    fn locate(u: Node) -> (usize, u64) {
        let u = u as usize;
        (u / WORD_BITS, 1u64 << (u % WORD_BITS))
    }
}

impl Debug for NodeBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter_set_bits()).finish()
    }
}

/// Iterator over the set bits of a [`NodeBitSet`].
///
/// Returned by [`NodeBitSet::iter_set_bits`].
#[derive(Clone)]
pub struct SetBitsIter<'a> {
    words: &'a [u64],
    word_idx: usize,
    current: u64,
}

impl Iterator for SetBitsIter<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current == 0 {
            self.word_idx += 1;
            self.current = *self.words.get(self.word_idx)?;
        }

        let bit = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1;
        Some((self.word_idx * WORD_BITS + bit) as Node)
    }
}
