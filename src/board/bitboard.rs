//! Bit set over board cells, used for traversal marks and dead-stone sets

use super::Pos;

/// Bitboard representation sized for one board edge.
/// Uses ceil(size*size / 64) words.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bitboard {
    size: usize,
    bits: Vec<u64>,
}

impl Bitboard {
    /// Create empty bitboard for a board of `size` x `size`
    pub fn new(size: usize) -> Self {
        let cells = size * size;
        Self {
            size,
            bits: vec![0; cells.div_ceil(64)],
        }
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        let idx = pos.to_index(self.size);
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        let idx = pos.to_index(self.size);
        (self.bits[idx / 64] >> (idx % 64)) & 1 == 1
    }

    /// Set the bit, returning true if it was previously clear
    #[inline]
    pub fn insert(&mut self, pos: Pos) -> bool {
        let fresh = !self.get(pos);
        self.set(pos);
        fresh
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Iterate over set bit positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter<'_> {
        BitboardIter {
            board: self,
            word_idx: 0,
            current_word: self.bits.first().copied().unwrap_or(0),
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter<'a> {
    board: &'a Bitboard,
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitboardIter<'_> {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_word == 0 {
            self.word_idx += 1;
            if self.word_idx >= self.board.bits.len() {
                return None;
            }
            self.current_word = self.board.bits[self.word_idx];
        }

        let bit_pos = self.current_word.trailing_zeros() as usize;
        let idx = self.word_idx * 64 + bit_pos;
        self.current_word &= self.current_word - 1;

        // Trailing bits past the last cell are never set
        Some(Pos::from_index(idx, self.board.size))
    }
}
