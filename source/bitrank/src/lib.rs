// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Square bit matrices over GF(2) with a compile-time width, and an exact
//! rank computation by XOR row reduction.

pub mod bits;
mod error;

pub use bits::{BitMatrix, BitRow, Word, MAX_WIDTH};
pub use error::Error;
