use serde::Serialize;
use tilesearch_engine::{Direction, Grid};
use tilesearch_search::{SearchNode, SearchOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    Solved,
    Exhausted,
    BudgetExceeded,
}

/// Result of `solve`.
///
/// When the search fails, `path` and `final_grid` describe the best node found.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub status: SolveStatus,
    pub goal: u32,
    /// Direction codes from the start grid, e.g. `"URDL"`
    pub path: String,
    pub moves: usize,
    pub expanded_nodes: usize,
    pub max_tile: u32,
    pub final_grid: Grid,
}

impl SolveReport {
    #[must_use]
    pub fn from_outcome(outcome: &SearchOutcome) -> Self {
        let status = match outcome {
            SearchOutcome::Solved { .. } => SolveStatus::Solved,
            SearchOutcome::Exhausted { .. } => SolveStatus::Exhausted,
            SearchOutcome::BudgetExceeded { .. } => SolveStatus::BudgetExceeded,
        };
        let node = outcome.node();
        Self {
            status,
            goal: node.problem().goal(),
            path: node.path_codes(),
            moves: node.depth(),
            expanded_nodes: outcome.expanded(),
            max_tile: node.state().max_tile(),
            final_grid: node.state().clone(),
        }
    }
}

/// One successor printed by `expand`.
#[derive(Debug, Clone, Serialize)]
pub struct ChildReport {
    pub direction: Direction,
    pub path: String,
    pub h: f64,
    pub f: f64,
    pub is_goal: bool,
    pub merge_factor: i32,
    pub smoothness: u64,
    pub monotonicity: i32,
    pub grid: Grid,
}
