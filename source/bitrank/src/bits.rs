// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

mod bitrow;
pub use bitrow::{BitRow, Word, MAX_WIDTH};

pub mod bitmatrix;
pub use bitmatrix::BitMatrix;
