// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{Display, Formatter};
use std::ops::{BitXor, BitXorAssign, Index};
use std::str::FromStr;

use rand::Rng;

use super::bitrow::{BitRow, Word};
use crate::Error;

/// An `N`×`N` matrix over GF(2), stored row-major.
#[must_use]
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct BitMatrix<const N: usize> {
    rows: [BitRow<N>; N],
}

impl<const N: usize> BitMatrix<N> {
    pub fn zeros() -> Self {
        Self::from_rows([BitRow::zeros(); N])
    }

    pub fn ones() -> Self {
        Self::from_rows([BitRow::ones(); N])
    }

    pub fn identity() -> Self {
        let mut res = Self::zeros();
        for index in 0..N {
            res.set((index, index), true);
        }
        res
    }

    pub fn random(random_number_generator: &mut impl Rng) -> Self {
        let mut res = Self::zeros();
        for row in &mut res.rows {
            *row = BitRow::random(random_number_generator);
        }
        res
    }

    pub const fn from_rows(rows: [BitRow<N>; N]) -> Self {
        Self { rows }
    }

    /// Builds a matrix from the base-2 numerals of its rows, first column most
    /// significant.
    pub fn from_row_values(values: impl IntoIterator<Item = Word>) -> Result<Self, Error> {
        let mut res = Self::zeros();
        let mut found = 0;
        for value in values {
            let row = BitRow::from_bits(value)?;
            if let Some(slot) = res.rows.get_mut(found) {
                *slot = row;
            }
            found += 1;
        }
        if found != N {
            return Err(Error::RowCount { expected: N, found });
        }
        Ok(res)
    }

    pub fn from_bit_rows<Row, Rows>(iter: Rows) -> Result<Self, Error>
    where
        Row: IntoIterator<Item = bool>,
        Rows: IntoIterator<Item = Row>,
    {
        let mut res = Self::zeros();
        let mut rowcount = 0;
        for row in iter {
            let row: Vec<bool> = row.into_iter().collect();
            if row.len() != N {
                return Err(Error::RowLength {
                    row: rowcount,
                    expected: N,
                    found: row.len(),
                });
            }
            if let Some(slot) = res.rows.get_mut(rowcount) {
                *slot = row.into_iter().collect();
            }
            rowcount += 1;
        }
        if rowcount != N {
            return Err(Error::RowCount {
                expected: N,
                found: rowcount,
            });
        }
        Ok(res)
    }

    #[must_use]
    pub fn row(&self, index: usize) -> BitRow<N> {
        self.rows[index]
    }

    pub fn row_mut(&mut self, index: usize) -> &mut BitRow<N> {
        &mut self.rows[index]
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = BitRow<N>> + '_ {
        self.rows.iter().copied()
    }

    /// Rows as base-2 numerals, first column most significant.
    pub fn row_values(&self) -> impl ExactSizeIterator<Item = Word> + '_ {
        self.rows().map(BitRow::bits)
    }

    /// # Panics
    ///
    /// Will panic if index out of range
    pub fn set(&mut self, index: (usize, usize), to: bool) {
        self.rows[index.0].set(index.1, to);
    }

    /// # Panics
    ///
    /// Will panic if index out of range
    #[must_use]
    pub fn get(&self, index: (usize, usize)) -> bool {
        self.rows[index.0].get(index.1)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.rows.iter().all(|row| row.is_zero())
    }

    pub fn swap_rows(&mut self, left_row_index: usize, right_row_index: usize) {
        self.rows.swap(left_row_index, right_row_index);
    }

    pub fn add_into_row(&mut self, to_index: usize, from_index: usize) {
        let from = self.rows[from_index];
        self.rows[to_index] ^= from;
    }

    /// Reduces the matrix in place to reduced row-echelon form using XOR row
    /// additions and returns the rank profile, the pivot column of each
    /// nonzero row in order.
    pub fn echelonize(&mut self) -> Vec<usize> {
        let mut rank_profile = Vec::<usize>::with_capacity(N);
        let mut pivot = pivot_of(self, (0, 0));

        for row_index in 0..N {
            if pivot.1 >= N {
                break;
            }
            self.swap_rows(pivot.0, row_index);
            pivot.0 = row_index;
            rank_profile.push(pivot.1);
            reduce(self, pivot);
            pivot = pivot_of(self, (pivot.0 + 1, pivot.1 + 1));
        }
        rank_profile
    }

    /// Exact rank over GF(2).
    #[must_use]
    pub fn rank(&self) -> usize {
        self.clone().echelonize().len()
    }

    pub fn transposed(&self) -> Self {
        let mut res = Self::zeros();
        for i in 0..N {
            for j in 0..N {
                res.set((j, i), self[(i, j)]);
            }
        }
        res
    }
}

/// First row at or below `starting_at.0` holding a one, scanning columns left
/// to right from `starting_at.1`. Returns a column of `N` when none remain.
fn pivot_of<const N: usize>(matrix: &BitMatrix<N>, starting_at: (usize, usize)) -> (usize, usize) {
    let (row_start, column_start) = starting_at;
    if row_start >= N {
        return (row_start, N);
    }
    for column_index in column_start..N {
        if let Some(offset) = matrix.rows[row_start..]
            .iter()
            .position(|row| row.get(column_index))
        {
            return (row_start + offset, column_index);
        }
    }
    (row_start, N)
}

fn reduce<const N: usize>(matrix: &mut BitMatrix<N>, from: (usize, usize)) {
    let pivot_row = matrix.rows[from.0];
    for (row_index, row) in matrix.rows.iter_mut().enumerate() {
        if row_index != from.0 && row.get(from.1) {
            *row ^= pivot_row;
        }
    }
}

impl<const N: usize> Default for BitMatrix<N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize> Index<(usize, usize)> for BitMatrix<N> {
    type Output = bool;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        if self.get(index) {
            return &true;
        }
        &false
    }
}

impl<const N: usize> Index<[usize; 2]> for BitMatrix<N> {
    type Output = bool;

    fn index(&self, index: [usize; 2]) -> &Self::Output {
        &self[(index[0], index[1])]
    }
}

impl<const N: usize> BitXorAssign<&BitMatrix<N>> for BitMatrix<N> {
    fn bitxor_assign(&mut self, other: &BitMatrix<N>) {
        for (row, other_row) in self.rows.iter_mut().zip(other.rows) {
            *row ^= other_row;
        }
    }
}

impl<const N: usize> BitXor for &BitMatrix<N> {
    type Output = BitMatrix<N>;

    fn bitxor(self, other: Self) -> Self::Output {
        let mut clone = self.clone();
        clone ^= other;
        clone
    }
}

impl<const N: usize> Display for BitMatrix<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

impl<const N: usize> FromStr for BitMatrix<N> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::<Vec<bool>>::new();
        for row_string in s.split(['|', '[', ']', '(', ')', ';', '\n']) {
            let mut res = Vec::<bool>::new();
            for char in row_string.chars() {
                match char {
                    '0' | '.' => res.push(false),
                    '1' => res.push(true),
                    ' ' | '-' | ',' | '\r' | '\t' => {}
                    _ => return Err(Error::InvalidCharacter(char)),
                }
            }
            if !res.is_empty() {
                rows.push(res);
            }
        }
        Self::from_bit_rows(rows)
    }
}
