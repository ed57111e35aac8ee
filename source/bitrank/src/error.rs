// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use miette::Diagnostic;
use thiserror::Error;

/// Shape violations detected while building a matrix from untrusted input.
#[derive(Clone, Debug, Diagnostic, Eq, Error, PartialEq)]
pub enum Error {
    #[error("expected {expected} rows, found {found}")]
    #[diagnostic(code("Bitrank.RowCount"))]
    RowCount { expected: usize, found: usize },
    #[error("row value {value} does not fit in {width} bits")]
    #[diagnostic(code("Bitrank.RowWidth"))]
    RowWidth { value: u128, width: usize },
    #[error("row {row} has {found} columns, expected {expected}")]
    #[diagnostic(code("Bitrank.RowLength"))]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unexpected character {0:?} in bit matrix")]
    #[diagnostic(code("Bitrank.InvalidCharacter"))]
    #[diagnostic(help("use 0 or . for clear bits, 1 for set bits and | to delimit rows"))]
    InvalidCharacter(char),
}
