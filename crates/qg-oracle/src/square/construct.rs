//! Algorithmic square construction.

use super::{MagicSquare, check_size};
use crate::error::{OracleError, OracleResult};

/// Build an odd-order magic square with the Siamese method.
///
/// Starts at the top-middle cell and steps up-right with wrap-around; when
/// that cell is taken, drops one row from the current cell instead.
pub fn siamese(size: usize) -> OracleResult<MagicSquare> {
    check_size(size)?;
    if size % 2 == 0 {
        return Err(OracleError::even_for_siamese(size));
    }

    let n = size;
    let mut rows = vec![vec![0u32; n]; n];
    let (mut i, mut j) = (0, n / 2);
    for num in 1..=(n * n) as u32 {
        rows[i][j] = num;
        let (up, right) = ((i + n - 1) % n, (j + 1) % n);
        if rows[up][right] != 0 {
            i = (i + 1) % n;
        } else {
            i = up;
            j = right;
        }
    }

    MagicSquare::from_rows(rows)
}

/// Fill an N×N grid with 1..=N² in row-major order.
///
/// The result is not magic for any N; it only stands in for even orders.
pub fn sequential(size: usize) -> OracleResult<MagicSquare> {
    check_size(size)?;
    let rows = (0..size)
        .map(|r| (0..size).map(|c| (r * size + c + 1) as u32).collect())
        .collect();
    MagicSquare::from_rows(rows)
}

/// Build a square of any order 3..=9: Siamese for odd orders, the
/// sequential (non-magic) fill for even ones.
pub fn custom_square(size: usize) -> OracleResult<MagicSquare> {
    if size % 2 == 1 {
        siamese(size)
    } else {
        sequential(size)
    }
}
