use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{SpawnSequenceError, core::grid::Grid};

/// Pre-generated, read-only list of tile values inserted after each successful move.
///
/// The sequence is replayed deterministically: the n-th spawn on a path uses
/// `value_at(n)`, wrapping around once the end is reached. Cloning is cheap; all clones
/// share the same values.
///
/// # Example
///
/// ```
/// use tilesearch_engine::SpawnSequence;
///
/// let spawns = SpawnSequence::new(vec![2, 2, 4]).unwrap();
/// assert_eq!(spawns.value_at(2), 4);
/// assert_eq!(spawns.value_at(3), 2);
///
/// assert!(SpawnSequence::new(vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct SpawnSequence {
    values: Arc<[u32]>,
}

impl SpawnSequence {
    /// Validates and wraps `values`.
    ///
    /// The sequence must be non-empty and every value must be a power of two.
    pub fn new(values: Vec<u32>) -> Result<Self, SpawnSequenceError> {
        if values.is_empty() {
            return Err(SpawnSequenceError::Empty);
        }
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_power_of_two())
        {
            return Err(SpawnSequenceError::InvalidValue { index, value });
        }
        Ok(Self {
            values: values.into(),
        })
    }

    /// Returns the value for spawn number `cursor`, wrapping modulo the length.
    #[must_use]
    pub fn value_at(&self, cursor: usize) -> u32 {
        self.values[cursor % self.values.len()]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }
}

impl TryFrom<Vec<u32>> for SpawnSequence {
    type Error = SpawnSequenceError;

    fn try_from(values: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<SpawnSequence> for Vec<u32> {
    fn from(sequence: SpawnSequence) -> Self {
        sequence.values.to_vec()
    }
}

/// Places the next spawn value into the first empty corner.
///
/// Corners are tried in fixed priority order: top-left, top-right, bottom-right,
/// bottom-left. Returns the `(x, y)` position that received the tile, or `None` if all four
/// corners are occupied, in which case the grid is left unchanged.
///
/// This intentionally differs from the real game, which spawns into a random empty cell
/// anywhere on the board. Interior cells are never considered, so a grid with free interior
/// cells but full corners receives no tile.
pub fn spawn(grid: &mut Grid, sequence: &SpawnSequence, cursor: usize) -> Option<(usize, usize)> {
    let value = sequence.value_at(cursor);
    let (x, y) = grid
        .size()
        .corners()
        .into_iter()
        .find(|&(x, y)| grid.get(x, y) == 0)?;
    grid.set(x, y, value);
    Some((x, y))
}
