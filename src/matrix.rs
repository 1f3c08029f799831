//! Modulo-26 arithmetic over small square integer matrices.
//!
//! Every function reduces matrix entries into `[0, 26)` before using them,
//! so keys may carry arbitrary (including negative) integers without
//! overflowing intermediate products.

use crate::error::{HillError, Result};

/// Size of the alphabet; all arithmetic happens in Z/26Z
pub const MODULUS: i64 = 26;

/// Sign-correct reduction into `[0, MODULUS)`
pub fn modulo(value: i64) -> i64 {
    value.rem_euclid(MODULUS)
}

/// Greatest common divisor (always non-negative)
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Check the matrix is square with a supported size and return that size
pub fn check_square(matrix: &[Vec<i64>]) -> Result<usize> {
    let size = matrix.len();
    if size != 2 && size != 3 {
        return Err(HillError::InvalidConfiguration(size));
    }
    if let Some(row) = matrix.iter().find(|row| row.len() != size) {
        return Err(HillError::InvalidKey(format!(
            "expected {size}x{size} matrix, found a row of length {}",
            row.len()
        )));
    }
    Ok(size)
}

/// Matrix-vector product with every component reduced modulo 26
pub fn multiply(matrix: &[Vec<i64>], vector: &[i64]) -> Vec<i64> {
    matrix
        .iter()
        .map(|row| {
            row.iter()
                .zip(vector)
                .fold(0, |acc, (&k, &v)| modulo(acc + modulo(k) * modulo(v)))
        })
        .collect()
}

/// Matrix-matrix product modulo 26; both operands must be square and of
/// the same supported size
pub fn multiply_matrices(a: &[Vec<i64>], b: &[Vec<i64>]) -> Result<Vec<Vec<i64>>> {
    let size = check_square(a)?;
    if check_square(b)? != size {
        return Err(HillError::InvalidKey(format!(
            "cannot multiply {0}x{0} by {1}x{1}",
            size,
            b.len()
        )));
    }
    Ok(a.iter()
        .map(|row| {
            (0..size)
                .map(|j| {
                    row.iter()
                        .zip(b)
                        .fold(0, |acc, (&x, b_row)| modulo(acc + modulo(x) * modulo(b_row[j])))
                })
                .collect()
        })
        .collect())
}

/// Identity matrix of the given size
pub fn identity(size: usize) -> Vec<Vec<i64>> {
    (0..size)
        .map(|i| (0..size).map(|j| i64::from(i == j)).collect())
        .collect()
}

/// Determinant modulo 26, in `[0, 26)`.
///
/// Closed form for 2x2 (`ad - bc`) and cofactor expansion along the first
/// row for 3x3. Other sizes fail with [`HillError::InvalidConfiguration`].
pub fn determinant(matrix: &[Vec<i64>]) -> Result<i64> {
    let size = check_square(matrix)?;
    let m = |r: usize, c: usize| modulo(matrix[r][c]);

    let det = match size {
        2 => m(0, 0) * m(1, 1) - m(0, 1) * m(1, 0),
        3 => {
            m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
                - m(0, 1) * (m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0))
                + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0))
        }
        other => return Err(HillError::InvalidConfiguration(other)),
    };

    Ok(modulo(det))
}

/// Largest modulus [`mod_inverse`] will search; keeps `a * x` far from overflow
pub const MAX_SEARCH_MODULUS: i64 = 1 << 16;

/// Find `x` in `[1, modulus)` with `(a * x) mod modulus == 1` by linear search.
///
/// Fails with [`HillError::ModularInverse`] when `a` and `modulus` are not
/// coprime; there is no fallback value. Moduli above [`MAX_SEARCH_MODULUS`]
/// are rejected with [`HillError::UnsupportedModulus`].
pub fn mod_inverse(a: i64, modulus: i64) -> Result<i64> {
    if modulus > MAX_SEARCH_MODULUS {
        return Err(HillError::UnsupportedModulus(modulus));
    }
    if modulus < 2 {
        return Err(HillError::ModularInverse { value: a, modulus });
    }
    let a = a.rem_euclid(modulus);
    (1..modulus)
        .find(|x| (a * x) % modulus == 1)
        .ok_or(HillError::ModularInverse { value: a, modulus })
}

/// Matrix with `row` and `col` removed
pub fn minor(matrix: &[Vec<i64>], row: usize, col: usize) -> Vec<Vec<i64>> {
    matrix
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != row)
        .map(|(_, r)| {
            r.iter()
                .enumerate()
                .filter(|(j, _)| *j != col)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}

/// Inverse modulo 26 by the adjugate method.
///
/// 2x2 uses the swap/negate closed form; 3x3 places the signed cofactor of
/// `(i, j)` at the transposed position `(j, i)`. Both are scaled by the
/// modular inverse of the determinant.
pub fn invert_matrix(matrix: &[Vec<i64>]) -> Result<Vec<Vec<i64>>> {
    let size = check_square(matrix)?;
    let inverse_det = mod_inverse(determinant(matrix)?, MODULUS)?;
    let m = |r: usize, c: usize| modulo(matrix[r][c]);

    match size {
        2 => Ok(vec![
            vec![modulo(m(1, 1) * inverse_det), modulo(-m(0, 1) * inverse_det)],
            vec![modulo(-m(1, 0) * inverse_det), modulo(m(0, 0) * inverse_det)],
        ]),
        3 => {
            let mut inverse = vec![vec![0; 3]; 3];
            for i in 0..3 {
                for j in 0..3 {
                    let cofactor = determinant(&minor(matrix, i, j))?;
                    let sign = if (i + j) % 2 == 0 { 1 } else { -1 };
                    inverse[j][i] = modulo(sign * cofactor * inverse_det);
                }
            }
            Ok(inverse)
        }
        other => Err(HillError::InvalidConfiguration(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_3x3() -> Vec<Vec<i64>> {
        vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]]
    }

    #[test]
    fn test_modulo_handles_negatives() {
        assert_eq!(modulo(-1), 25);
        assert_eq!(modulo(-26), 0);
        assert_eq!(modulo(53), 1);
    }

    #[test]
    fn test_multiply() {
        let key = vec![vec![1, 2], vec![3, 5]];
        // H=7, I=8
        assert_eq!(multiply(&key, &[7, 8]), vec![23, 9]);
    }

    #[test]
    fn test_multiply_negative_and_large_entries() {
        let key = vec![vec![-25, 28], vec![3 - 26 * 1000, 5]];
        assert_eq!(multiply(&key, &[7, 8]), vec![23, 9]);
    }

    #[test]
    fn test_determinant_2x2() {
        assert_eq!(determinant(&[vec![1, 2], vec![3, 5]]).unwrap(), 25);
        assert_eq!(determinant(&[vec![3, 3], vec![2, 5]]).unwrap(), 9);
    }

    #[test]
    fn test_determinant_3x3() {
        // 441 mod 26
        assert_eq!(determinant(&classic_3x3()).unwrap(), 25);
    }

    #[test]
    fn test_determinant_rejects_other_sizes() {
        let one = vec![vec![1]];
        assert!(matches!(
            determinant(&one),
            Err(HillError::InvalidConfiguration(1))
        ));
        let four = identity(4);
        assert!(matches!(
            determinant(&four),
            Err(HillError::InvalidConfiguration(4))
        ));
    }

    #[test]
    fn test_check_square_rejects_ragged_rows() {
        let ragged = vec![vec![1, 2], vec![3]];
        assert!(matches!(check_square(&ragged), Err(HillError::InvalidKey(_))));
    }

    #[test]
    fn test_mod_inverse_units() {
        for a in [1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25] {
            let x = mod_inverse(a, MODULUS).unwrap();
            assert!((1..MODULUS).contains(&x));
            assert_eq!((a * x) % MODULUS, 1, "inverse of {a}");
        }
        assert_eq!(mod_inverse(-1, MODULUS).unwrap(), 25);
    }

    #[test]
    fn test_mod_inverse_fails_without_fallback() {
        for a in [0, 2, 13, 26] {
            match mod_inverse(a, MODULUS) {
                Err(HillError::ModularInverse { modulus, .. }) => assert_eq!(modulus, 26),
                other => panic!("expected ModularInverse for {a}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_minor() {
        let m = classic_3x3();
        assert_eq!(minor(&m, 0, 0), vec![vec![16, 10], vec![17, 15]]);
        assert_eq!(minor(&m, 1, 2), vec![vec![6, 24], vec![20, 17]]);
    }

    #[test]
    fn test_invert_2x2() {
        let key = vec![vec![1, 2], vec![3, 5]];
        let inverse = invert_matrix(&key).unwrap();
        assert_eq!(inverse, vec![vec![21, 2], vec![3, 25]]);
        assert_eq!(multiply_matrices(&key, &inverse).unwrap(), identity(2));
    }

    #[test]
    fn test_invert_3x3() {
        let key = classic_3x3();
        let inverse = invert_matrix(&key).unwrap();
        assert_eq!(
            inverse,
            vec![vec![8, 5, 10], vec![21, 8, 21], vec![21, 12, 8]]
        );
        assert_eq!(multiply_matrices(&key, &inverse).unwrap(), identity(3));
        assert_eq!(multiply_matrices(&inverse, &key).unwrap(), identity(3));
    }

    #[test]
    fn test_invert_negative_entries() {
        let key = vec![vec![1 - 26, 2], vec![-23, 5 + 52]];
        let inverse = invert_matrix(&key).unwrap();
        assert_eq!(multiply_matrices(&key, &inverse).unwrap(), identity(2));
    }

    #[test]
    fn test_invert_singular_fails() {
        // determinant 2*4 - 3*2 = 2, shares a factor with 26
        let key = vec![vec![2, 3], vec![2, 4]];
        assert!(matches!(
            invert_matrix(&key),
            Err(HillError::ModularInverse { value: 2, modulus: 26 })
        ));
    }

    #[test]
    fn test_mod_inverse_bounds_modulus() {
        let largest = MAX_SEARCH_MODULUS - 1;
        assert_eq!(mod_inverse(3, largest).unwrap() * 3 % largest, 1);
        assert!(matches!(
            mod_inverse(3, i64::MAX),
            Err(HillError::UnsupportedModulus(i64::MAX))
        ));
        assert!(matches!(
            mod_inverse(3, MAX_SEARCH_MODULUS + 1),
            Err(HillError::UnsupportedModulus(_))
        ));
    }

    #[test]
    fn test_multiply_matrices_rejects_mismatched_operands() {
        let key = vec![vec![1, 2], vec![3, 5]];
        let ragged = vec![vec![1, 2], vec![3]];
        assert!(matches!(
            multiply_matrices(&key, &ragged),
            Err(HillError::InvalidKey(_))
        ));
        assert!(matches!(
            multiply_matrices(&key, &identity(3)),
            Err(HillError::InvalidKey(_))
        ));
        assert!(matches!(
            multiply_matrices(&[], &key),
            Err(HillError::InvalidConfiguration(0))
        ));
        assert_eq!(multiply_matrices(&key, &identity(2)).unwrap(), key);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(25, 26), 1);
        assert_eq!(gcd(13, 26), 13);
        assert_eq!(gcd(-4, 26), 2);
        assert_eq!(gcd(0, 26), 26);
    }
}
