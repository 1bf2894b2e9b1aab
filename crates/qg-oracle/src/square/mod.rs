//! Planetary magic squares.
//!
//! Seven traditional squares (orders 3-9) are fixed tables, one per
//! planet. Other odd orders are built with the Siamese method; even orders
//! only get a sequential fill, which is not magic.

pub mod construct;
pub mod display;
pub mod fixed;

pub use construct::{custom_square, sequential, siamese};
pub use display::{render_plain, render_square};
pub use fixed::planet_square;

use serde::{Deserialize, Serialize};

use crate::error::{OracleError, OracleResult};
use crate::planet::Planet;

/// Smallest supported order.
pub const MIN_SIZE: usize = 3;
/// Largest supported order.
pub const MAX_SIZE: usize = 9;

/// The magic constant N·(N²+1)/2 for order `n`.
pub fn magic_constant(n: usize) -> u32 {
    let n = n as u32;
    n * (n * n + 1) / 2
}

/// Check that `size` is within 3..=9.
pub fn check_size(size: usize) -> OracleResult<()> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(OracleError::out_of_range(size))
    }
}

/// An N×N grid of integers, 3 ≤ N ≤ 9.
///
/// The grid is not necessarily magic; see [`MagicSquare::is_magic`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")]
pub struct MagicSquare {
    rows: Vec<Vec<u32>>,
}

impl MagicSquare {
    /// Build from rows, validating the order and shape.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> OracleResult<Self> {
        let size = rows.len();
        check_size(size)?;
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(OracleError::MalformedSquare(format!(
                "row {i} has {} cells, expected {size}",
                row.len()
            )));
        }
        Ok(Self { rows })
    }

    /// The order N.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// The rows, top to bottom.
    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    /// The value at `row`, `col`.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// The reference constant N·(N²+1)/2 for this order.
    pub fn magic_constant(&self) -> u32 {
        magic_constant(self.size())
    }

    /// Sum of every row.
    pub fn row_sums(&self) -> Vec<u32> {
        self.rows.iter().map(|r| r.iter().sum()).collect()
    }

    /// Sum of every column.
    pub fn column_sums(&self) -> Vec<u32> {
        (0..self.size())
            .map(|c| self.rows.iter().map(|r| r[c]).sum())
            .collect()
    }

    /// Main diagonal and anti-diagonal sums.
    pub fn diagonal_sums(&self) -> (u32, u32) {
        let n = self.size();
        let main = (0..n).map(|i| self.rows[i][i]).sum();
        let anti = (0..n).map(|i| self.rows[i][n - 1 - i]).sum();
        (main, anti)
    }

    /// Whether the grid holds 1..=N² exactly once and every row, column,
    /// and both diagonals sum to the magic constant.
    pub fn is_magic(&self) -> bool {
        let n = self.size();
        let mut values: Vec<u32> = self.rows.iter().flatten().copied().collect();
        values.sort_unstable();
        if values != (1..=(n * n) as u32).collect::<Vec<_>>() {
            return false;
        }
        let target = self.magic_constant();
        let (main, anti) = self.diagonal_sums();
        self.row_sums().iter().all(|&s| s == target)
            && self.column_sums().iter().all(|&s| s == target)
            && main == target
            && anti == target
    }
}

impl TryFrom<Vec<Vec<u32>>> for MagicSquare {
    type Error = OracleError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<MagicSquare> for Vec<Vec<u32>> {
    fn from(square: MagicSquare) -> Self {
        square.rows
    }
}

/// Look up a planet's square by name, returning it with its order.
///
/// Unrecognized names fall back to the Saturn square.
pub fn square_for_planet(name: &str) -> (MagicSquare, usize) {
    let planet = Planet::parse(name).unwrap_or(Planet::Saturn);
    let square = planet_square(planet);
    let size = square.size();
    (square, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(magic_constant(3), 15);
        assert_eq!(magic_constant(4), 34);
        assert_eq!(magic_constant(5), 65);
        assert_eq!(magic_constant(7), 175);
        assert_eq!(magic_constant(9), 369);
    }

    #[test]
    fn saturn_lookup() {
        let (square, size) = square_for_planet("Saturn");
        assert_eq!(size, 3);
        assert_eq!(
            square.rows(),
            &[vec![4, 9, 2], vec![3, 5, 7], vec![8, 1, 6]]
        );
        assert_eq!(square.magic_constant(), 15);
    }

    #[test]
    fn unknown_planet_falls_back_to_saturn() {
        let (square, size) = square_for_planet("Pluto");
        assert_eq!(size, 3);
        assert_eq!(square, planet_square(Planet::Saturn));
    }

    #[test]
    fn lookup_returns_each_planets_order() {
        for planet in Planet::CHALDEAN {
            let (square, size) = square_for_planet(&planet.to_string());
            assert_eq!(size, planet.square_size());
            assert_eq!(square.size(), size);
        }
    }

    #[test]
    fn from_rows_validates_shape() {
        assert_eq!(
            MagicSquare::from_rows(vec![vec![1, 2], vec![3, 4]]),
            Err(OracleError::out_of_range(2))
        );
        assert!(matches!(
            MagicSquare::from_rows(vec![vec![1, 2, 3], vec![4, 5], vec![6, 7, 8]]),
            Err(OracleError::MalformedSquare(_))
        ));
    }

    #[test]
    fn is_magic_rejects_repeats() {
        let square = MagicSquare::from_rows(vec![vec![5, 5, 5], vec![5, 5, 5], vec![5, 5, 5]]).unwrap();
        assert_eq!(square.row_sums(), vec![15, 15, 15]);
        assert!(!square.is_magic());
    }

    #[test]
    fn check_size_bounds() {
        assert!(check_size(3).is_ok());
        assert!(check_size(9).is_ok());
        assert_eq!(check_size(2), Err(OracleError::out_of_range(2)));
        assert_eq!(check_size(10), Err(OracleError::out_of_range(10)));
    }
}
