// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{Display, Formatter};
use std::ops::{BitXor, BitXorAssign, Index};

use rand::Rng;

use crate::Error;

pub type Word = u128;

/// Widest row a [`BitRow`] can hold.
pub const MAX_WIDTH: usize = Word::BITS as usize;

/// A row of `N` bits. Column 0 is the most significant of the `N` low bits of
/// the backing word, so [`BitRow::bits`] reads the row as a base-2 numeral.
/// Bits at positions `N` and above are always clear.
#[must_use]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BitRow<const N: usize> {
    bits: Word,
}

impl<const N: usize> BitRow<N> {
    const MASK: Word = {
        assert!(N <= MAX_WIDTH, "BitRow width exceeds 128 bits");
        if N == MAX_WIDTH {
            Word::MAX
        } else {
            (1 << N) - 1
        }
    };

    pub const fn zeros() -> Self {
        _ = Self::MASK;
        Self { bits: 0 }
    }

    pub const fn ones() -> Self {
        Self { bits: Self::MASK }
    }

    /// # Panics
    ///
    /// Will panic if column out of range
    pub fn unit(column: usize) -> Self {
        let mut row = Self::zeros();
        row.set(column, true);
        row
    }

    /// Builds a row from its base-2 numeral.
    pub fn from_bits(bits: Word) -> Result<Self, Error> {
        if bits & !Self::MASK != 0 {
            return Err(Error::RowWidth {
                value: bits,
                width: N,
            });
        }
        Ok(Self { bits })
    }

    /// Every column is an independent fair coin flip.
    pub fn random(random_number_generator: &mut impl Rng) -> Self {
        Self {
            bits: random_number_generator.r#gen::<Word>() & Self::MASK,
        }
    }

    #[must_use]
    pub const fn bits(self) -> Word {
        self.bits
    }

    /// # Panics
    ///
    /// Will panic if column out of range
    #[must_use]
    pub fn get(self, column: usize) -> bool {
        self.bits & Self::column_mask(column) != 0
    }

    /// # Panics
    ///
    /// Will panic if column out of range
    pub fn set(&mut self, column: usize, to: bool) {
        let mask = Self::column_mask(column);
        if to {
            self.bits |= mask;
        } else {
            self.bits &= !mask;
        }
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.bits == 0
    }

    /// Column of the leftmost set bit.
    #[must_use]
    pub const fn leading_column(self) -> Option<usize> {
        if self.bits == 0 {
            return None;
        }
        Some(self.bits.leading_zeros() as usize - (MAX_WIDTH - N))
    }

    pub fn iter(self) -> impl ExactSizeIterator<Item = bool> {
        (0..N).map(move |column| self.get(column))
    }

    fn column_mask(column: usize) -> Word {
        assert!(column < N, "column {column} out of range for width {N}");
        1 << (N - 1 - column)
    }
}

impl<const N: usize> From<BitRow<N>> for Word {
    fn from(row: BitRow<N>) -> Self {
        row.bits
    }
}

impl<const N: usize> TryFrom<Word> for BitRow<N> {
    type Error = Error;

    fn try_from(bits: Word) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

impl<const N: usize> FromIterator<bool> for BitRow<N> {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        let mut row = Self::zeros();
        for (column, value) in iter.into_iter().take(N).enumerate() {
            row.set(column, value);
        }
        row
    }
}

impl<const N: usize> Index<usize> for BitRow<N> {
    type Output = bool;

    fn index(&self, column: usize) -> &Self::Output {
        if self.get(column) {
            return &true;
        }
        &false
    }
}

impl<const N: usize> BitXorAssign for BitRow<N> {
    fn bitxor_assign(&mut self, other: Self) {
        self.bits ^= other.bits;
    }
}

impl<const N: usize> BitXor for BitRow<N> {
    type Output = Self;

    fn bitxor(mut self, other: Self) -> Self::Output {
        self ^= other;
        self
    }
}

impl<const N: usize> Display for BitRow<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for value in self.iter() {
            write!(f, "{}", u8::from(value))?;
        }
        Ok(())
    }
}
