//! Growable bit set over square indices.
//!
//! Words live inline for boards of up to 256 squares and spill to the heap
//! beyond that.

use smallvec::{smallvec, SmallVec};

const WORD_BITS: usize = 64;

#[inline]
fn words_for(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

/// A set of square indices stored as 64-bit words.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BitSet {
    words: SmallVec<[u64; 4]>,
}

impl BitSet {
    /// Creates an empty set with room for `bits` indices.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            words: smallvec![0; words_for(bits)],
        }
    }

    /// Creates a set containing the given indices.
    pub fn from_indices<I>(bits: usize, indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut set = Self::with_capacity(bits);
        for index in indices {
            set.insert(index);
        }
        set
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.words
            .get(index / WORD_BITS)
            .is_some_and(|w| (w >> (index % WORD_BITS)) & 1 != 0)
    }

    /// Adds `index`, growing the set if needed.
    #[inline]
    pub fn insert(&mut self, index: usize) {
        let word = index / WORD_BITS;
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= 1u64 << (index % WORD_BITS);
    }

    /// Number of indices in the set.
    #[inline]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Highest index in the set, or `None` if empty.
    pub fn last(&self) -> Option<usize> {
        self.words
            .iter()
            .enumerate()
            .rev()
            .find(|&(_, &w)| w != 0)
            .map(|(i, &w)| i * WORD_BITS + (WORD_BITS - 1 - w.leading_zeros() as usize))
    }

    /// True if both sets contain a common index.
    #[inline]
    pub fn intersects(&self, other: &BitSet) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .any(|(a, b)| a & b != 0)
    }

    /// Returns a new set holding every index of `self` and `other`.
    pub fn union(&self, other: &BitSet) -> BitSet {
        let (long, short) = if self.words.len() >= other.words.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut words = long.words.clone();
        for (w, s) in words.iter_mut().zip(short.words.iter()) {
            *w |= s;
        }
        BitSet { words }
    }

    /// Smallest index `>= from` that is not in the set.
    ///
    /// Indices past the last stored word are always clear.
    pub fn next_clear(&self, from: usize) -> usize {
        let mut word_index = from / WORD_BITS;
        if word_index >= self.words.len() {
            return from;
        }
        let mut clear = !self.words[word_index] & (u64::MAX << (from % WORD_BITS));
        loop {
            if clear != 0 {
                return word_index * WORD_BITS + clear.trailing_zeros() as usize;
            }
            word_index += 1;
            if word_index == self.words.len() {
                return word_index * WORD_BITS;
            }
            clear = !self.words[word_index];
        }
    }

    /// Iterates over the indices in the set, ascending.
    pub fn iter(&self) -> Ones<'_> {
        Ones {
            words: &self.words,
            word_index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }
}

/// Iterator over the indices of a [`BitSet`].
#[derive(Debug, Clone)]
pub struct Ones<'a> {
    words: &'a [u64],
    word_index: usize,
    current: u64,
}

impl Iterator for Ones<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some(self.word_index * WORD_BITS + bit);
            }
            self.word_index += 1;
            self.current = *self.words.get(self.word_index)?;
        }
    }
}
