use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    sync::Arc,
};

use arrayvec::ArrayVec;
use tilesearch_engine::{Direction, Grid, path_codes};

use crate::{NodeError, problem::SearchProblem};

/// Priority-queue key of a [`SearchNode`]: `F` first, then `H`.
///
/// Lower keys are expanded first. `f64` values are compared with [`f64::total_cmp`], which
/// agrees with `<` on every value a heuristic can produce.
#[derive(Debug, Clone, Copy)]
pub struct NodePriority {
    pub f: f64,
    pub h: f64,
}

impl Ord for NodePriority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.h.total_cmp(&other.h))
    }
}

impl PartialOrd for NodePriority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodePriority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for NodePriority {}

/// An immutable best-first search state.
///
/// `H` and `F = H + depth` are computed once at construction. A node whose grid already
/// holds a tile `≥ goal` is a goal node: its `H` is `0` and the heuristic is not evaluated.
///
/// # Identity
///
/// Equality and hashing use the grid content only. Two nodes reached by different paths or
/// with different spawn counters compare equal if their grids match, which is what a
/// visited set needs. Ordering for the open set is separate: see [`Self::priority`].
#[derive(Debug, Clone)]
pub struct SearchNode {
    problem: Arc<SearchProblem>,
    state: Grid,
    path: Vec<Direction>,
    spawn_counter: usize,
    h: f64,
    f: f64,
    is_goal: bool,
}

impl SearchNode {
    /// Creates the root node: empty path, spawn counter 0.
    pub fn root(problem: Arc<SearchProblem>, state: Grid) -> Result<Self, NodeError> {
        if state.size() != problem.size() {
            return Err(NodeError::SizeMismatch {
                expected: problem.size(),
                actual: state.size(),
            });
        }
        Self::with_parts(problem, state, vec![], 0)
    }

    #[expect(clippy::cast_precision_loss)]
    fn with_parts(
        problem: Arc<SearchProblem>,
        state: Grid,
        path: Vec<Direction>,
        spawn_counter: usize,
    ) -> Result<Self, NodeError> {
        let is_goal = state.max_tile() >= problem.goal();
        let h = if is_goal {
            0.0
        } else {
            problem.heuristic().estimate(&state, problem.goal())?
        };
        let f = h + path.len() as f64;
        Ok(Self {
            problem,
            state,
            path,
            spawn_counter,
            h,
            f,
            is_goal,
        })
    }

    #[must_use]
    pub fn problem(&self) -> &Arc<SearchProblem> {
        &self.problem
    }

    #[must_use]
    pub fn state(&self) -> &Grid {
        &self.state
    }

    #[must_use]
    pub fn path(&self) -> &[Direction] {
        &self.path
    }

    /// The path as direction codes, e.g. `"UDLR"`.
    #[must_use]
    pub fn path_codes(&self) -> String {
        path_codes(&self.path)
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    #[must_use]
    pub fn spawn_counter(&self) -> usize {
        self.spawn_counter
    }

    #[must_use]
    pub fn h(&self) -> f64 {
        self.h
    }

    #[must_use]
    pub fn f(&self) -> f64 {
        self.f
    }

    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.is_goal
    }

    #[must_use]
    pub fn priority(&self) -> NodePriority {
        NodePriority {
            f: self.f,
            h: self.h,
        }
    }

    /// Orders `self` before `other` iff `F` is lower, or `F` ties and `H` is lower.
    #[must_use]
    pub fn cmp_priority(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }

    /// Returns the successor nodes in `Up, Down, Left, Right` order, skipping illegal moves.
    ///
    /// Each child is built from its own copy of the grid, with the direction appended to
    /// the path and the spawn counter advanced by one. The returned order is stable so that
    /// children with equal priority are queued deterministically.
    pub fn expand(&self) -> Result<ArrayVec<SearchNode, { Direction::LEN }>, NodeError> {
        let mut children = ArrayVec::new();
        for direction in Direction::ALL {
            let mut state = self.state.clone();
            if !state.apply_move(
                direction,
                self.problem.spawn_sequence(),
                self.spawn_counter,
            ) {
                continue;
            }
            let mut path = Vec::with_capacity(self.path.len() + 1);
            path.extend_from_slice(&self.path);
            path.push(direction);
            children.push(Self::with_parts(
                Arc::clone(&self.problem),
                state,
                path,
                self.spawn_counter + 1,
            )?);
        }
        Ok(children)
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl Eq for SearchNode {}

impl Hash for SearchNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}
