// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use bitrank::{BitMatrix, BitRow};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::plan::Strategy;

/// Builds matrices whose rank leans toward a chosen extreme. None of the
/// constructions fixes the rank; it has to be computed afterwards.
///
/// The synthesizer owns its random number generator, so a fixed seed yields
/// a fixed sequence of matrices.
pub struct Synthesizer<R = StdRng> {
    random_number_generator: R,
}

impl Synthesizer<StdRng> {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Synthesizer<R> {
    pub fn new(random_number_generator: R) -> Self {
        Self {
            random_number_generator,
        }
    }

    /// Ones on the diagonal.
    pub fn identity<const N: usize>() -> BitMatrix<N> {
        BitMatrix::identity()
    }

    /// All ones.
    pub fn full<const N: usize>() -> BitMatrix<N> {
        BitMatrix::ones()
    }

    /// All zeros.
    pub fn empty<const N: usize>() -> BitMatrix<N> {
        BitMatrix::zeros()
    }

    /// Every entry an independent fair coin flip.
    pub fn random<const N: usize>(&mut self) -> BitMatrix<N> {
        BitMatrix::random(&mut self.random_number_generator)
    }

    /// Overwrites each of the first `min(steps, N)` rows, in index order, with
    /// a uniformly chosen row of the matrix as it stands at that moment.
    pub fn reduce_by_duplication<const N: usize>(
        &mut self,
        matrix: &BitMatrix<N>,
        steps: usize,
    ) -> BitMatrix<N> {
        let mut res = matrix.clone();
        for row_index in 0..steps.min(N) {
            let source_index = self.random_number_generator.gen_range(0..N);
            *res.row_mut(row_index) = res.row(source_index);
        }
        res
    }

    /// Runs `steps` trials, each overwriting a uniformly chosen row with a
    /// fresh random row. Rows may be hit more than once and `steps` is not
    /// bounded by `N`.
    pub fn inject_random_rows<const N: usize>(
        &mut self,
        matrix: &BitMatrix<N>,
        steps: usize,
    ) -> BitMatrix<N> {
        let mut res = matrix.clone();
        if N == 0 {
            return res;
        }
        for _ in 0..steps {
            let row_index = self.random_number_generator.gen_range(0..N);
            *res.row_mut(row_index) = BitRow::random(&mut self.random_number_generator);
        }
        res
    }

    pub fn sparse_test_matrix<const N: usize>(&mut self, steps: usize) -> BitMatrix<N> {
        self.inject_random_rows(&Self::empty(), steps)
    }

    pub fn dense_test_matrix<const N: usize>(&mut self, steps: usize) -> BitMatrix<N> {
        self.inject_random_rows(&Self::full(), steps)
    }

    pub fn intermediate_test_matrix<const N: usize>(&mut self, steps: usize) -> BitMatrix<N> {
        let base = self.random();
        self.reduce_by_duplication(&base, steps)
    }

    pub fn generate<const N: usize>(&mut self, strategy: Strategy) -> BitMatrix<N> {
        match strategy {
            Strategy::Identity => Self::identity(),
            Strategy::RandomReduced(steps) => self.intermediate_test_matrix(steps),
            Strategy::SparseReplaced(steps) => self.sparse_test_matrix(steps),
            Strategy::DenseReplaced(steps) => self.dense_test_matrix(steps),
        }
    }
}
