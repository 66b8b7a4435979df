//! Grid representation and state transitions for the 2048 sliding-tile puzzle.
//!
//! The crate is split in two layers:
//!
//! - [`core`] - the [`Grid`] value type, its geometric transforms and [`Direction`]
//! - [`engine`] - move legality, slide/merge application and deterministic tile spawning
//!
//! Every move direction is reduced to one canonical "slide left" primitive by composing it
//! with [`transpose`] and [`invert`].
//!
//! # Example
//!
//! ```
//! use tilesearch_engine::{Direction, Grid, SpawnSequence};
//!
//! let spawns = SpawnSequence::new(vec![2]).unwrap();
//! let mut grid = Grid::from_rows([[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]])
//!     .unwrap();
//!
//! // Nothing can slide or merge towards the left edge.
//! assert!(!grid.apply_move(Direction::Left, &spawns, 0));
//!
//! assert!(grid.apply_move(Direction::Right, &spawns, 0));
//! assert_eq!(grid.get(0, 0), 2);
//! assert_eq!(grid.get(3, 0), 2);
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Error returned when a grid cannot be built from the given cells.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    #[display("grid must have at least one row and one column")]
    Empty,
    #[display("row {row} has {actual} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[display("cell ({x}, {y}) holds {value}, which is neither 0 nor a power of two")]
    InvalidTile { x: usize, y: usize, value: u32 },
}

/// Error returned when a spawn sequence is rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SpawnSequenceError {
    #[display("spawn sequence must contain at least one value")]
    Empty,
    #[display("spawn value #{index} is {value}, which is not a power of two")]
    InvalidValue { index: usize, value: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid direction: {input:?} (expected one of U, D, L, R)")]
pub struct ParseDirectionError {
    #[error(not(source))]
    input: String,
}

/// Returns `true` if `value` is a valid tile: empty (`0`) or a power of two.
#[must_use]
pub const fn is_valid_tile(value: u32) -> bool {
    value == 0 || value.is_power_of_two()
}

/// Returns the tile produced by merging two `value` tiles.
///
/// `None` for empty cells and for `1 << 31`, whose double does not fit in a `u32`; such
/// pairs never merge.
#[must_use]
pub const fn merged_tile(value: u32) -> Option<u32> {
    if value == 0 {
        None
    } else {
        value.checked_mul(2)
    }
}
