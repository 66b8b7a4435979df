use std::path::PathBuf;

use anyhow::Context as _;
use tilesearch_engine::Direction;
use tilesearch_evaluator::grid_analysis::GridAnalysis;

use crate::{
    schema::report::ChildReport,
    util::{self, OutputTarget},
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ExpandArg {
    /// Path to the puzzle file (JSON format)
    puzzle: PathBuf,
    /// Apply these direction codes (e.g. `URDL`) before expanding
    #[arg(long, default_value = "")]
    after: String,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ExpandArg) -> anyhow::Result<()> {
    let ExpandArg {
        puzzle,
        after,
        output,
    } = arg;

    let puzzle = util::read_puzzle_file(puzzle)?;
    let mut node = puzzle
        .root_node(None)
        .context("Failed to build the start node")?;

    for code in after.chars() {
        let direction: Direction = code.to_string().parse()?;
        node = node
            .expand()?
            .into_iter()
            .find(|child| child.path().last() == Some(&direction))
            .with_context(|| {
                format!(
                    "Move {direction} is not legal after {:?}",
                    node.path_codes()
                )
            })?;
    }

    let children = node
        .expand()?
        .iter()
        .map(|child| {
            let analysis = GridAnalysis::new(child.state());
            ChildReport {
                direction: *child.path().last().expect("child paths are never empty"),
                path: child.path_codes(),
                h: child.h(),
                f: child.f(),
                is_goal: child.is_goal(),
                merge_factor: analysis.merge_factor(),
                smoothness: analysis.smoothness(),
                monotonicity: analysis.monotonicity(),
                grid: child.state().clone(),
            }
        })
        .collect::<Vec<_>>();
    if children.is_empty() {
        tracing::warn!(path = %node.path_codes(), "no legal moves");
    }

    OutputTarget::from(output.clone()).write_json(&children)?;
    Ok(())
}
