// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A perturbed construction family, parameterized by a step count.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Family {
    /// A random matrix with rows overwritten by copies of other rows.
    RandomReduced,
    /// The zero matrix with random rows injected.
    SparseReplaced,
    /// The all-ones matrix with random rows injected.
    DenseReplaced,
}

impl Family {
    #[must_use]
    pub fn strategy(self, steps: usize) -> Strategy {
        match self {
            Family::RandomReduced => Strategy::RandomReduced(steps),
            Family::SparseReplaced => Strategy::SparseReplaced(steps),
            Family::DenseReplaced => Strategy::DenseReplaced(steps),
        }
    }
}

impl Display for Family {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Family::RandomReduced => write!(f, "random-reduced"),
            Family::SparseReplaced => write!(f, "sparse-replaced"),
            Family::DenseReplaced => write!(f, "dense-replaced"),
        }
    }
}

/// How one matrix is synthesized.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Strategy {
    Identity,
    RandomReduced(usize),
    SparseReplaced(usize),
    DenseReplaced(usize),
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Identity => write!(f, "identity matrices"),
            Strategy::RandomReduced(steps) => {
                write!(f, "random matrices with {steps} reduction steps")
            }
            Strategy::SparseReplaced(steps) => {
                write!(f, "sparse matrices with {steps} replacement steps")
            }
            Strategy::DenseReplaced(steps) => {
                write!(f, "dense matrices with {steps} replacement steps")
            }
        }
    }
}

/// Step values of one family, each paired with how many matrices to emit.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StepSchedule {
    pub steps: Vec<usize>,
    pub counts: Vec<usize>,
}

impl StepSchedule {
    /// Pairs the counts with the step values `0, 1, 2, ...`.
    #[must_use]
    pub fn enumerated(counts: &[usize]) -> Self {
        Self {
            steps: (0..counts.len()).collect(),
            counts: counts.to_vec(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlanEntry {
    pub strategy: Strategy,
    pub count: usize,
}

/// The ordered list of strategies a corpus is generated from. The order of
/// the entries is the order of the records in the output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CorpusPlan {
    entries: Vec<PlanEntry>,
}

impl CorpusPlan {
    /// One identity matrix, then the random-reduced, sparse-replaced and
    /// dense-replaced schedules in that order.
    pub fn new(
        random_reduced: &StepSchedule,
        sparse_replaced: &StepSchedule,
        dense_replaced: &StepSchedule,
    ) -> Result<Self> {
        let mut entries = vec![PlanEntry {
            strategy: Strategy::Identity,
            count: 1,
        }];
        for (family, schedule) in [
            (Family::RandomReduced, random_reduced),
            (Family::SparseReplaced, sparse_replaced),
            (Family::DenseReplaced, dense_replaced),
        ] {
            if schedule.steps.len() != schedule.counts.len() {
                return Err(Error::ConfigMismatch {
                    family,
                    steps: schedule.steps.len(),
                    counts: schedule.counts.len(),
                });
            }
            entries.extend(
                std::iter::zip(&schedule.steps, &schedule.counts).map(|(&steps, &count)| {
                    PlanEntry {
                        strategy: family.strategy(steps),
                        count,
                    }
                }),
            );
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    #[must_use]
    pub fn record_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }
}
