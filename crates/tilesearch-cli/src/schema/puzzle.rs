use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tilesearch_engine::{Grid, SpawnSequence};
use tilesearch_search::{NodeError, SearchNode, SearchProblem};

use crate::seed::PuzzleSeed;

/// Puzzle file: start grid, goal tile and the spawn sequence to replay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    /// Start grid as a list of rows
    pub grid: Grid,
    /// Target tile value (power of two)
    pub goal: u32,
    /// Tile values inserted after each successful move, reused cyclically
    pub spawn_sequence: SpawnSequence,
    /// Seed the spawn sequence was generated from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<PuzzleSeed>,
}

impl Puzzle {
    /// Builds the root search node, optionally overriding the goal.
    pub fn root_node(&self, goal: Option<u32>) -> Result<SearchNode, NodeError> {
        let problem = SearchProblem::new(
            self.grid.size(),
            goal.unwrap_or(self.goal),
            self.spawn_sequence.clone(),
        )?;
        SearchNode::root(Arc::new(problem), self.grid.clone())
    }
}
