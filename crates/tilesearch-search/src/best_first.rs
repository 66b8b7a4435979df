//! Reference A* driver.
//!
//! [`BestFirstSearch`] owns the open set (a min-priority queue keyed by
//! [`NodePriority`](crate::NodePriority)) and the closed set (keyed by grid content). It
//! tests for the goal when a node is popped, before the node is expanded, so the heuristic
//! is never asked to rank a grid that already holds the goal tile.
//!
//! Nodes with equal priority are popped in insertion order, which together with the fixed
//! expansion order of [`SearchNode::expand`] makes every run reproducible.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashSet},
};

use tilesearch_engine::Grid;

use crate::{NodeError, node::SearchNode};

/// Budget for a single search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of nodes to expand before giving up.
    pub max_expansions: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_expansions: 100_000,
        }
    }
}

/// Result of a search run.
///
/// Every variant carries a node: the goal node when solved, otherwise the best node seen
/// (highest max tile, then lowest `F`).
#[derive(Debug, Clone, derive_more::IsVariant)]
pub enum SearchOutcome {
    /// A goal node was popped from the open set.
    Solved { node: SearchNode, expanded: usize },
    /// The open set ran empty without reaching the goal.
    Exhausted { best: SearchNode, expanded: usize },
    /// The expansion budget ran out.
    BudgetExceeded { best: SearchNode, expanded: usize },
}

impl SearchOutcome {
    /// The goal node, or the best node seen if the search failed.
    #[must_use]
    pub fn node(&self) -> &SearchNode {
        match self {
            Self::Solved { node, .. }
            | Self::Exhausted { best: node, .. }
            | Self::BudgetExceeded { best: node, .. } => node,
        }
    }

    #[must_use]
    pub fn expanded(&self) -> usize {
        match self {
            Self::Solved { expanded, .. }
            | Self::Exhausted { expanded, .. }
            | Self::BudgetExceeded { expanded, .. } => *expanded,
        }
    }
}

struct OpenEntry {
    node: SearchNode,
    seq: u64,
}

impl OpenEntry {
    fn key(&self) -> (crate::NodePriority, u64) {
        (self.node.priority(), self.seq)
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key().cmp(&other.key())
    }
}

#[derive(Debug, Default, Clone)]
pub struct BestFirstSearch {
    limits: SearchLimits,
}

impl BestFirstSearch {
    const PROGRESS_INTERVAL: usize = 10_000;

    #[must_use]
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }

    #[must_use]
    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Runs A* from `root` until a goal node is popped, the open set empties, or the
    /// expansion budget is spent.
    pub fn run(&self, root: SearchNode) -> Result<SearchOutcome, NodeError> {
        let mut open = BinaryHeap::new();
        let mut closed: HashSet<Grid> = HashSet::new();
        let mut seq = 0;
        let mut expanded = 0;
        let mut best = root.clone();

        open.push(Reverse(OpenEntry { node: root, seq }));

        while let Some(Reverse(OpenEntry { node, .. })) = open.pop() {
            if node.is_goal() {
                tracing::info!(
                    moves = node.depth(),
                    expanded,
                    path = %node.path_codes(),
                    "goal reached"
                );
                return Ok(SearchOutcome::Solved { node, expanded });
            }
            if !closed.insert(node.state().clone()) {
                continue;
            }
            if expanded >= self.limits.max_expansions {
                tracing::info!(
                    expanded,
                    max_tile = best.state().max_tile(),
                    "expansion budget exceeded"
                );
                return Ok(SearchOutcome::BudgetExceeded { best, expanded });
            }

            expanded += 1;
            if expanded.is_multiple_of(Self::PROGRESS_INTERVAL) {
                tracing::debug!(
                    expanded,
                    open = open.len(),
                    closed = closed.len(),
                    f = node.f(),
                    max_tile = best.state().max_tile(),
                    "search progress"
                );
            }

            for child in node.expand()? {
                if closed.contains(child.state()) {
                    continue;
                }
                if is_better(&child, &best) {
                    best = child.clone();
                }
                seq += 1;
                open.push(Reverse(OpenEntry { node: child, seq }));
            }
        }

        tracing::info!(
            expanded,
            max_tile = best.state().max_tile(),
            "open set exhausted"
        );
        Ok(SearchOutcome::Exhausted { best, expanded })
    }
}

fn is_better(candidate: &SearchNode, best: &SearchNode) -> bool {
    let (c, b) = (candidate.state().max_tile(), best.state().max_tile());
    c > b || (c == b && candidate.cmp_priority(best).is_lt())
}
