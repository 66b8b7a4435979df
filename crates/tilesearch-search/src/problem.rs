use tilesearch_engine::{GridSize, SpawnSequence};
use tilesearch_evaluator::heuristic::{Heuristic, MergeLogHeuristic};

use crate::NodeError;

/// Constants shared by every node of one search.
///
/// Nodes hold the problem behind an `Arc`, so the spawn sequence and heuristic are never
/// copied per node.
#[derive(Debug)]
pub struct SearchProblem {
    size: GridSize,
    goal: u32,
    spawn_sequence: SpawnSequence,
    heuristic: Box<dyn Heuristic>,
}

impl SearchProblem {
    /// Creates a problem using [`MergeLogHeuristic`].
    ///
    /// `goal` must be a power of two greater than 1.
    pub fn new(
        size: GridSize,
        goal: u32,
        spawn_sequence: SpawnSequence,
    ) -> Result<Self, NodeError> {
        Self::with_heuristic(size, goal, spawn_sequence, Box::new(MergeLogHeuristic))
    }

    pub fn with_heuristic(
        size: GridSize,
        goal: u32,
        spawn_sequence: SpawnSequence,
        heuristic: Box<dyn Heuristic>,
    ) -> Result<Self, NodeError> {
        if goal < 2 || !goal.is_power_of_two() {
            return Err(NodeError::InvalidGoal(goal));
        }
        Ok(Self {
            size,
            goal,
            spawn_sequence,
            heuristic,
        })
    }

    /// Like [`Self::new`], validating raw spawn values first.
    ///
    /// An empty `spawn_values` fails here rather than at the first spawn.
    pub fn from_spawn_values(
        size: GridSize,
        goal: u32,
        spawn_values: Vec<u32>,
    ) -> Result<Self, NodeError> {
        Self::new(size, goal, SpawnSequence::new(spawn_values)?)
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn goal(&self) -> u32 {
        self.goal
    }

    #[must_use]
    pub fn spawn_sequence(&self) -> &SpawnSequence {
        &self.spawn_sequence
    }

    #[must_use]
    pub fn heuristic(&self) -> &dyn Heuristic {
        self.heuristic.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use tilesearch_engine::SpawnSequenceError;

    use super::*;

    #[test]
    fn test_rejects_empty_spawn_values() {
        let err = SearchProblem::from_spawn_values(GridSize::CLASSIC, 2048, vec![]).unwrap_err();
        assert_eq!(err, NodeError::Spawn(SpawnSequenceError::Empty));
    }

    #[test]
    fn test_rejects_invalid_goal() {
        let spawns = SpawnSequence::new(vec![2]).unwrap();
        for goal in [0, 1, 3, 1000] {
            let err = SearchProblem::new(GridSize::CLASSIC, goal, spawns.clone()).unwrap_err();
            assert_eq!(err, NodeError::InvalidGoal(goal));
        }
    }

    #[test]
    fn test_accessors() {
        let problem =
            SearchProblem::from_spawn_values(GridSize::new(3, 5), 512, vec![2, 4]).unwrap();
        assert_eq!(problem.size(), GridSize::new(3, 5));
        assert_eq!(problem.goal(), 512);
        assert_eq!(problem.spawn_sequence().values(), &[2, 4]);
    }
}
