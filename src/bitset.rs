//! Bit set for tracking which codes of a `W`-bit space are taken.
//!
//! The embedding builder marks every codomain code already claimed by an
//! original function entry and then hands out the free ones in ascending
//! order.

/// A fixed-universe bit set backed by a vector of u64 words.
#[derive(Debug, Clone)]
pub struct BitSet {
    /// Storage: each u64 holds 64 bits
    words: Vec<u64>,
    /// Number of codes in the universe `0..universe`
    universe: usize,
    /// Number of set bits
    count: usize,
}

impl BitSet {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    /// Creates an empty set over the universe `0..universe`.
    pub fn new(universe: usize) -> Self {
        let num_words = universe.div_ceil(Self::BITS_PER_WORD);
        Self {
            words: vec![0; num_words],
            universe,
            count: 0,
        }
    }

    /// Returns the size of the universe.
    pub fn universe(&self) -> usize {
        self.universe
    }

    #[inline]
    fn word_and_bit(index: usize) -> (usize, usize) {
        (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD)
    }

    /// Sets the bit at the given index. Returns true if it was not previously set.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the universe.
    #[inline]
    pub fn insert(&mut self, index: usize) -> bool {
        assert!(index < self.universe, "Index {} outside universe of {}", index, self.universe);
        let (w, b) = Self::word_and_bit(index);
        let mask = 1u64 << b;
        let was_clear = self.words[w] & mask == 0;
        if was_clear {
            self.words[w] |= mask;
            self.count += 1;
        }
        was_clear
    }

    /// Returns true if every code of the universe is set.
    pub fn is_full(&self) -> bool {
        self.count == self.universe
    }

    /// Iterates over clear indices in ascending order, skipping full words.
    pub fn iter_missing(&self) -> MissingIter<'_> {
        MissingIter {
            bitset: self,
            word_idx: 0,
            current_word: self.words.first().map_or(0, |w| !w),
        }
    }
}

/// Iterator over clear bits in a [`BitSet`].
pub struct MissingIter<'a> {
    bitset: &'a BitSet,
    word_idx: usize,
    /// Complement of the current word, with already yielded bits cleared
    current_word: u64,
}

impl Iterator for MissingIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let bit_idx = self.current_word.trailing_zeros() as usize;
                self.current_word &= self.current_word - 1; // Clear lowest set bit
                let index = self.word_idx * BitSet::BITS_PER_WORD + bit_idx;
                // The last word may extend past the universe.
                return if index < self.bitset.universe { Some(index) } else { None };
            }

            self.word_idx += 1;
            if self.word_idx >= self.bitset.words.len() {
                return None;
            }
            self.current_word = !self.bitset.words[self.word_idx];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let bs = BitSet::new(10);
        assert!(!bs.is_full());
        assert_eq!(bs.universe(), 10);
        assert_eq!(bs.iter_missing().collect::<Vec<_>>(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_insert() {
        let mut bs = BitSet::new(100);
        assert!(bs.insert(42));
        assert!(!bs.insert(42)); // Already set
        assert!(!bs.iter_missing().any(|i| i == 42));
        assert_eq!(bs.iter_missing().count(), 99);
    }

    #[test]
    fn test_iter_missing_across_words() {
        let mut bs = BitSet::new(130);
        for i in 0..130 {
            if i != 3 && i != 64 && i != 129 {
                bs.insert(i);
            }
        }
        assert_eq!(bs.iter_missing().collect::<Vec<_>>(), vec![3, 64, 129]);
        bs.insert(3);
        bs.insert(64);
        bs.insert(129);
        assert!(bs.is_full());
        assert_eq!(bs.iter_missing().next(), None);
    }

    #[test]
    #[should_panic(expected = "outside universe")]
    fn test_insert_outside_universe() {
        let mut bs = BitSet::new(4);
        bs.insert(4);
    }
}
