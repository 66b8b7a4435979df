//! Best-first search over 2048 grids.
//!
//! - [`SearchProblem`] - per-search constants shared by every node (grid size, goal tile,
//!   spawn sequence, heuristic)
//! - [`SearchNode`] - an immutable search state with cached `H`/`F`, priority ordering,
//!   content-based equality and [`expand`](SearchNode::expand)
//! - [`BestFirstSearch`] - a reference A* driver owning the open and closed sets
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use tilesearch_engine::{Grid, SpawnSequence};
//! use tilesearch_search::{BestFirstSearch, SearchNode, SearchProblem};
//!
//! let grid = Grid::from_rows([[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 2]])
//!     .unwrap();
//! let spawns = SpawnSequence::new(vec![2]).unwrap();
//! let problem = Arc::new(SearchProblem::new(grid.size(), 8, spawns).unwrap());
//! let root = SearchNode::root(problem, grid).unwrap();
//!
//! let outcome = BestFirstSearch::default().run(root).unwrap();
//! assert!(outcome.is_solved());
//! assert!(outcome.node().state().max_tile() >= 8);
//! ```

pub use self::{best_first::*, node::*, problem::*};

mod best_first;
mod node;
mod problem;

use tilesearch_engine::{GridSize, SpawnSequenceError};
use tilesearch_evaluator::heuristic::HeuristicDomainError;

/// Error returned when a search problem or node cannot be constructed.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum NodeError {
    #[display("invalid spawn sequence: {_0}")]
    Spawn(SpawnSequenceError),
    #[display("heuristic cannot be evaluated: {_0}")]
    Heuristic(HeuristicDomainError),
    #[display("goal {_0} is not a power of two greater than 1")]
    #[from(ignore)]
    InvalidGoal(#[error(not(source))] u32),
    #[display("grid is {actual}, but the search problem expects {expected}")]
    #[from(ignore)]
    SizeMismatch { expected: GridSize, actual: GridSize },
}
