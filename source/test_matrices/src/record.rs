// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use std::fmt::{Display, Formatter};
use std::str::FromStr;

use bitrank::{BitMatrix, Word};

use crate::{Error, Result};

const PREFIX: &str = "TestMatrix {matrix:[";
const SEPARATOR: &str = "],rank:";
const SUFFIX: &str = "},";

/// A generated matrix paired with the rank computed from it.
///
/// Displays as one corpus line without the line terminator:
/// `TestMatrix {matrix:[v0,...,v(N-1)],rank:R},` where `vi` is row `i` read
/// as a base-2 numeral with the first column most significant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TestMatrix<const N: usize> {
    matrix: BitMatrix<N>,
    rank: usize,
}

impl<const N: usize> TestMatrix<N> {
    #[must_use]
    pub fn new(matrix: BitMatrix<N>) -> Self {
        let rank = matrix.rank();
        Self { matrix, rank }
    }

    #[must_use]
    pub fn matrix(&self) -> &BitMatrix<N> {
        &self.matrix
    }

    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank
    }
}

impl<const N: usize> Display for TestMatrix<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_record(f, self.matrix.row_values(), self.rank)
    }
}

/// A record read back from a corpus. The rank is whatever the line claims.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fixture<const N: usize> {
    pub matrix: BitMatrix<N>,
    pub rank: usize,
}

impl<const N: usize> Display for Fixture<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_record(f, self.matrix.row_values(), self.rank)
    }
}

impl<const N: usize> FromStr for Fixture<N> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let body = s
            .strip_prefix(PREFIX)
            .ok_or_else(|| Error::Parse(format!("expected line to start with `{PREFIX}`")))?;
        let body = body
            .strip_suffix(SUFFIX)
            .ok_or_else(|| Error::Parse(format!("expected line to end with `{SUFFIX}`")))?;
        let (rows, rank) = body
            .split_once(SEPARATOR)
            .ok_or_else(|| Error::Parse(format!("missing `{SEPARATOR}`")))?;

        let values = if rows.is_empty() {
            Vec::new()
        } else {
            rows.split(',')
                .map(parse_decimal::<Word>)
                .collect::<Result<Vec<_>>>()?
        };
        let rank = parse_decimal::<usize>(rank)?;
        if rank > N {
            return Err(Error::Parse(format!(
                "rank {rank} exceeds the matrix dimension {N}"
            )));
        }
        let matrix = BitMatrix::from_row_values(values)?;
        Ok(Self { matrix, rank })
    }
}

impl<const N: usize> From<TestMatrix<N>> for Fixture<N> {
    fn from(record: TestMatrix<N>) -> Self {
        Self {
            matrix: record.matrix,
            rank: record.rank,
        }
    }
}

fn write_record(
    f: &mut Formatter<'_>,
    values: impl Iterator<Item = Word>,
    rank: usize,
) -> std::fmt::Result {
    write!(f, "{PREFIX}")?;
    for (index, value) in values.enumerate() {
        if index > 0 {
            write!(f, ",")?;
        }
        write!(f, "{value}")?;
    }
    write!(f, "{SEPARATOR}{rank}{SUFFIX}")
}

/// Unsigned decimal without sign, whitespace or leading zeros.
fn parse_decimal<T: FromStr>(text: &str) -> Result<T> {
    let canonical = !text.is_empty()
        && text.bytes().all(|byte| byte.is_ascii_digit())
        && (text == "0" || !text.starts_with('0'));
    if !canonical {
        return Err(Error::Parse(format!("`{text}` is not an unsigned decimal")));
    }
    text.parse()
        .map_err(|_| Error::Parse(format!("`{text}` is out of range")))
}
