use std::path::PathBuf;

use anyhow::Context as _;
use tilesearch_search::{BestFirstSearch, SearchLimits};

use crate::{
    schema::report::SolveReport,
    util::{self, OutputTarget},
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SolveArg {
    /// Path to the puzzle file (JSON format)
    puzzle: PathBuf,
    /// Override the puzzle's goal tile
    #[arg(long)]
    goal: Option<u32>,
    /// Maximum number of nodes to expand
    #[arg(long, default_value_t = SearchLimits::default().max_expansions)]
    max_expansions: usize,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SolveArg) -> anyhow::Result<()> {
    let SolveArg {
        puzzle,
        goal,
        max_expansions,
        output,
    } = arg;

    let puzzle = util::read_puzzle_file(puzzle)?;
    let root = puzzle
        .root_node(*goal)
        .context("Failed to build the start node")?;
    tracing::info!(
        size = %root.state().size(),
        goal = root.problem().goal(),
        spawn_values = root.problem().spawn_sequence().len(),
        h = root.h(),
        "starting search"
    );

    let search = BestFirstSearch::new(SearchLimits {
        max_expansions: *max_expansions,
    });
    let outcome = search.run(root).context("Search aborted")?;

    if !outcome.is_solved() {
        tracing::warn!(
            expanded = outcome.expanded(),
            max_tile = outcome.node().state().max_tile(),
            "no solution found"
        );
    }
    eprintln!("{}", outcome.node().state());

    OutputTarget::from(output.clone()).write_json(&SolveReport::from_outcome(&outcome))?;
    Ok(())
}
