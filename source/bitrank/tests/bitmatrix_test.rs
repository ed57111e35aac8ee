// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use bitrank::{BitMatrix, BitRow, Error};
use itertools::iproduct;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::str::FromStr;

macro_rules! bitmatrix{
    ($($t:tt)+) => {
        BitMatrix::from_str(stringify!($($t)+)).expect("well-formed bit matrix")
    };
}

proptest! {
    #[test]
    fn indexing(matrix in arbitrary_bitmatrix::<32>()) {
        for index in iproduct!(0..32, 0..32) {
            assert_eq!(matrix[index], matrix[[index.0, index.1]]);
            assert_eq!(matrix[index], matrix.row(index.0)[index.1]);
        }
    }

    #[test]
    fn swap_rows(matrix in arbitrary_bitmatrix::<32>(), left in 0..32usize, right in 0..32usize) {
        let mut swapped = matrix.clone();
        swapped.swap_rows(left, right);
        assert_eq!(swapped.row(left), matrix.row(right));
        assert_eq!(swapped.row(right), matrix.row(left));
        for row_index in (0..32).filter(|index| *index != left && *index != right) {
            assert_eq!(swapped.row(row_index), matrix.row(row_index));
        }
    }

    #[test]
    fn xor((left, right) in (arbitrary_bitmatrix::<32>(), arbitrary_bitmatrix::<32>())) {
        let sum = &left ^ &right;
        for index in iproduct!(0..32, 0..32) {
            assert_eq!(sum[index], left[index] ^ right[index]);
        }
        assert_eq!(sum, &right ^ &left);
    }

    #[test]
    fn transpose(matrix in arbitrary_bitmatrix::<32>()) {
        let transposed = matrix.transposed();
        for (row, column) in iproduct!(0..32, 0..32) {
            assert_eq!(matrix[(row, column)], transposed[(column, row)]);
        }
        assert_eq!(transposed.transposed(), matrix);
    }

    #[test]
    fn row_values_reconstruct_matrix(matrix in arbitrary_bitmatrix::<32>()) {
        let decoded =
            BitMatrix::<32>::from_row_values(matrix.row_values()).expect("row values fit");
        assert_eq!(decoded, matrix);
    }

    #[test]
    fn echelon_form(matrix in arbitrary_bitmatrix::<32>()) {
        let mut echeloned = matrix.clone();
        let profile = echeloned.echelonize();
        assert!(is_rref(&echeloned, &profile));
        assert!(preserves_rowspan_of(&matrix, &echeloned, &profile));
    }

    #[test]
    fn echelon_form_of_low_rank(matrix in low_rank_bitmatrix::<32>(6)) {
        let mut echeloned = matrix.clone();
        let profile = echeloned.echelonize();
        assert!(profile.len() <= 6);
        assert!(is_rref(&echeloned, &profile));
        assert!(preserves_rowspan_of(&matrix, &echeloned, &profile));
    }

    #[test]
    fn rank_is_bounded(matrix in arbitrary_bitmatrix::<48>()) {
        assert!(matrix.rank() <= 48);
    }

    #[test]
    fn rank_is_deterministic(matrix in arbitrary_bitmatrix::<32>()) {
        assert_eq!(matrix.rank(), matrix.rank());
    }

    #[test]
    fn rank_of_transpose(matrix in low_rank_bitmatrix::<24>(10)) {
        assert_eq!(matrix.rank(), matrix.transposed().rank());
    }

    #[test]
    fn rank_invariant_under_row_operations(
        matrix in arbitrary_bitmatrix::<32>(),
        seed in any::<u64>(),
    ) {
        let mut random_number_generator = StdRng::seed_from_u64(seed);
        let mut transformed = matrix.clone();
        for _ in 0..64 {
            let from_index = random_number_generator.gen_range(0..32);
            let to_index = random_number_generator.gen_range(0..32);
            if from_index == to_index {
                transformed.swap_rows(from_index, 31 - from_index);
            } else {
                transformed.add_into_row(to_index, from_index);
            }
        }
        assert_eq!(transformed.rank(), matrix.rank());
    }

    #[test]
    fn duplicated_row_lowers_full_rank(
        seed in any::<u64>(),
        from_index in 0..16usize,
        to_index in 0..16usize,
    ) {
        prop_assume!(from_index != to_index);
        let mut random_number_generator = StdRng::seed_from_u64(seed);
        let mut matrix = BitMatrix::<16>::identity();
        for _ in 0..64 {
            let from = random_number_generator.gen_range(0..16);
            let to = random_number_generator.gen_range(0..16);
            if from != to {
                matrix.add_into_row(to, from);
            }
        }
        assert_eq!(matrix.rank(), 16);
        *matrix.row_mut(to_index) = matrix.row(from_index);
        assert_eq!(matrix.rank(), 15);
    }
}

#[test]
fn zeros() {
    let matrix = BitMatrix::<40>::zeros();
    for index in iproduct!(0..40, 0..40) {
        assert!(!matrix[index]);
    }
    assert!(matrix.is_zero());
}

#[test]
fn identity_has_full_rank() {
    assert_eq!(BitMatrix::<0>::identity().rank(), 0);
    assert_eq!(BitMatrix::<1>::identity().rank(), 1);
    assert_eq!(BitMatrix::<2>::identity().rank(), 2);
    assert_eq!(BitMatrix::<32>::identity().rank(), 32);
    assert_eq!(BitMatrix::<64>::identity().rank(), 64);
    assert_eq!(BitMatrix::<128>::identity().rank(), 128);
}

#[test]
fn ones_has_rank_one() {
    assert_eq!(BitMatrix::<0>::ones().rank(), 0);
    assert_eq!(BitMatrix::<1>::ones().rank(), 1);
    assert_eq!(BitMatrix::<7>::ones().rank(), 1);
    assert_eq!(BitMatrix::<32>::ones().rank(), 1);
    assert_eq!(BitMatrix::<128>::ones().rank(), 1);
}

#[test]
fn zeros_has_rank_zero() {
    assert_eq!(BitMatrix::<1>::zeros().rank(), 0);
    assert_eq!(BitMatrix::<32>::zeros().rank(), 0);
    assert_eq!(BitMatrix::<128>::zeros().rank(), 0);
}

#[test]
fn identical_rows_are_dependent() {
    let matrix: BitMatrix<3> = bitmatrix!(
        |110|
        |110|
        |001|);
    assert_eq!(matrix.rank(), 2);

    let matrix: BitMatrix<2> = bitmatrix!(
        |10|
        |10|);
    assert_eq!(matrix.rank(), 1);
}

#[test]
fn equal_rows_xor_to_zero() {
    let mut matrix: BitMatrix<2> = bitmatrix!(
        |11|
        |11|);
    let profile = matrix.echelonize();
    assert_eq!(profile, vec![0]);
    assert!(matrix.row(1).is_zero());
    assert_eq!(matrix.row(0), BitRow::ones());
}

#[test]
fn xor_dependency_is_detected() {
    // Third row is the GF(2) sum of the first two; over the reals these rows
    // are independent.
    let matrix: BitMatrix<3> = bitmatrix!(
        |110|
        |011|
        |101|);
    assert_eq!(matrix.rank(), 2);
}

#[test]
fn echelonize_reports_pivot_columns() {
    let mut matrix: BitMatrix<4> = bitmatrix!(
        |0011|
        |0110|
        |0101|
        |0000|);
    let profile = matrix.echelonize();
    assert_eq!(profile, vec![1, 2]);
    assert_eq!(
        matrix,
        bitmatrix!(
            |0101|
            |0011|
            |0000|
            |0000|)
    );
}

#[test]
fn display() {
    let matrix: BitMatrix<3> = bitmatrix!(
        |100|
        |011|
        |...|);
    assert_eq!(matrix.to_string(), "100\n011\n000\n");
}

#[test]
fn from_str_rejects_invalid_characters() {
    assert_eq!(
        BitMatrix::<2>::from_str("|1x|01|"),
        Err(Error::InvalidCharacter('x'))
    );
}

#[test]
fn from_str_rejects_wrong_shape() {
    assert_eq!(
        BitMatrix::<2>::from_str("|10|01|11|"),
        Err(Error::RowCount {
            expected: 2,
            found: 3
        })
    );
    assert_eq!(
        BitMatrix::<2>::from_str("|10|011|"),
        Err(Error::RowLength {
            row: 1,
            expected: 2,
            found: 3
        })
    );
}

#[test]
fn from_row_values_checks_shape() {
    assert_eq!(
        BitMatrix::<2>::from_row_values([2, 1]),
        Ok(BitMatrix::<2>::identity())
    );
    assert_eq!(
        BitMatrix::<2>::from_row_values([2, 1, 3]),
        Err(Error::RowCount {
            expected: 2,
            found: 3
        })
    );
    assert_eq!(
        BitMatrix::<2>::from_row_values([2]),
        Err(Error::RowCount {
            expected: 2,
            found: 1
        })
    );
    assert_eq!(
        BitMatrix::<2>::from_row_values([4, 1]),
        Err(Error::RowWidth { value: 4, width: 2 })
    );
}

fn arbitrary_bitmatrix<const N: usize>() -> impl Strategy<Value = BitMatrix<N>> {
    any::<u64>().prop_map(|seed| BitMatrix::random(&mut StdRng::seed_from_u64(seed)))
}

fn low_rank_bitmatrix<const N: usize>(max_rank: usize) -> impl Strategy<Value = BitMatrix<N>> {
    any::<u64>().prop_map(move |seed| {
        let mut random_number_generator = StdRng::seed_from_u64(seed);
        let basis: Vec<BitRow<N>> = (0..max_rank)
            .map(|_| BitRow::random(&mut random_number_generator))
            .collect();
        let mut matrix = BitMatrix::zeros();
        for row_index in 0..N {
            for basis_row in &basis {
                if random_number_generator.r#gen::<bool>() {
                    *matrix.row_mut(row_index) ^= *basis_row;
                }
            }
        }
        matrix
    })
}

fn preserves_rowspan_of<const N: usize>(
    matrix: &BitMatrix<N>,
    rref_matrix: &BitMatrix<N>,
    profile: &[usize],
) -> bool {
    matrix.rows().all(|row| {
        let mut reduced = row;
        for (row_index, &column_index) in profile.iter().enumerate() {
            if reduced.get(column_index) {
                reduced ^= rref_matrix.row(row_index);
            }
        }
        reduced.is_zero()
    })
}

fn is_rref<const N: usize>(matrix: &BitMatrix<N>, with_profile: &[usize]) -> bool {
    let leading_columns_match = matrix
        .rows()
        .enumerate()
        .all(|(row_index, row)| row.leading_column() == with_profile.get(row_index).copied());
    let strictly_increasing = with_profile.windows(2).all(|pair| pair[0] < pair[1]);
    let pivots_are_alone = with_profile.iter().all(|&column_index| {
        matrix
            .rows()
            .filter(|row| row.get(column_index))
            .count()
            == 1
    });
    leading_columns_match && strictly_increasing && pivots_are_alone
}
