// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Builds a corpus of square GF(2) matrices with their exact rank, as fixtures
//! for an independent rank implementation.
//!
//! Matrices come from four constructions biased toward different ranks. Every
//! rank is recomputed by [`bitrank::BitMatrix::rank`] from the exact matrix
//! that gets written.

/// Instantiates a dimension-generic function for one of the supported matrix
/// sizes.
macro_rules! with_dimension {
    ($dimension:expr, $function:ident ( $($argument:expr),* $(,)? )) => {
        match $dimension {
            8 => $function::<8>($($argument),*),
            16 => $function::<16>($($argument),*),
            32 => $function::<32>($($argument),*),
            64 => $function::<64>($($argument),*),
            128 => $function::<128>($($argument),*),
            dimension => Err($crate::Error::UnsupportedDimension { dimension }),
        }
    };
}

pub mod config;
pub mod driver;
mod error;
pub mod plan;
pub mod record;
pub mod synthesis;
pub mod verify;

pub use config::GeneratorConfig;
pub use driver::{CorpusDriver, CorpusSummary, generate_corpus};
pub use error::{Error, Result};
pub use plan::{CorpusPlan, Family, PlanEntry, StepSchedule, Strategy};
pub use record::{Fixture, TestMatrix};
pub use synthesis::Synthesizer;
pub use verify::{verify_corpus, verify_records};
