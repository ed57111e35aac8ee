// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::plan::{CorpusPlan, StepSchedule};
use crate::{Error, Result};

/// All matrices are square with this many rows and columns.
pub const MATRIX_SIZE: usize = 32;
pub const RESULT_FILE: &str = "test_matrices.txt";

pub const RANDOM_REDUCED_TEST_CASES: [usize; 7] = [256, 128, 128, 64, 64, 64, 64];
pub const SPARSE_REPLACED_TEST_CASES: [usize; 5] = [1, 64, 64, 64, 64];
pub const DENSE_REPLACED_TEST_CASES: [usize; 5] = [1, 64, 64, 64, 64];

/// Everything a corpus run depends on. Read from an optional JSON file in
/// which every field may be omitted.
///
/// The sparse and dense sections each carry their own step list. By default
/// both use the replacement steps `0..=4`; a configuration may set them apart,
/// and each section then follows its own list.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct GeneratorConfig {
    pub output: PathBuf,
    pub dimension: usize,
    /// Drawn at random and logged when absent.
    pub seed: Option<u64>,
    pub random_reduced: StepSchedule,
    pub sparse_replaced: StepSchedule,
    pub dense_replaced: StepSchedule,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(RESULT_FILE),
            dimension: MATRIX_SIZE,
            seed: None,
            random_reduced: StepSchedule::enumerated(&RANDOM_REDUCED_TEST_CASES),
            sparse_replaced: StepSchedule::enumerated(&SPARSE_REPLACED_TEST_CASES),
            dense_replaced: StepSchedule::enumerated(&DENSE_REPLACED_TEST_CASES),
        }
    }
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn plan(&self) -> Result<CorpusPlan> {
        CorpusPlan::new(
            &self.random_reduced,
            &self.sparse_replaced,
            &self.dense_replaced,
        )
    }
}
