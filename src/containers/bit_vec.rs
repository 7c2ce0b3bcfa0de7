use crate::parity_assert_simple;

/// A fixed-width vector of bits packed into 64-bit words.
///
/// Bit `i` lives in word `i / 64` at offset `i % 64`. The whole point of this
/// representation is that folding and elimination can combine rows with
/// word-wide exclusive-or via [`BitVec::xor_assign`] instead of per-bit loops.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitVec {
    words: Box<[u64]>,
    num_bits: usize,
}

const fn word_index(bit: usize) -> usize {
    bit >> 6
}

const fn bit_mask(bit: usize) -> u64 {
    1_u64 << (bit & 63)
}

impl BitVec {
    /// Create an all-zero bit vector with capacity for `num_bits` bits.
    pub fn zeroed(num_bits: usize) -> BitVec {
        let num_words = num_bits.div_ceil(64);
        BitVec {
            words: vec![0; num_words].into_boxed_slice(),
            num_bits,
        }
    }

    /// The number of bits this vector holds.
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Whether bit `bit` is set.
    pub fn get(&self, bit: usize) -> bool {
        parity_assert_simple!(bit < self.num_bits);

        self.words[word_index(bit)] & bit_mask(bit) != 0
    }

    /// Flip bit `bit`. Toggling the same bit twice restores the original
    /// vector, which is exactly the GF(2) cancellation the row builder relies
    /// on for duplicated variables.
    pub fn toggle(&mut self, bit: usize) {
        parity_assert_simple!(bit < self.num_bits);

        self.words[word_index(bit)] ^= bit_mask(bit);
    }

    /// Whether no bit is set.
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Exclusive-or `other` into `self`, word by word. Both vectors must have
    /// the same width.
    pub fn xor_assign(&mut self, other: &BitVec) {
        parity_assert_simple!(self.num_bits == other.num_bits);

        for (word, other_word) in self.words.iter_mut().zip(other.words.iter()) {
            *word ^= other_word;
        }
    }
}
