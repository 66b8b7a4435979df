use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use self::{expand::ExpandArg, generate::GenerateArg, solve::SolveArg};

mod expand;
mod generate;
mod solve;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log filter directives (e.g. `debug`, `tilesearch_search=debug`); overrides `RUST_LOG`
    #[arg(long, global = true)]
    log: Option<String>,
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Search for the shortest move sequence reaching the goal tile
    Solve(#[clap(flatten)] SolveArg),
    /// Print the successors of the puzzle's start grid
    Expand(#[clap(flatten)] ExpandArg),
    /// Generate a puzzle file with a seeded spawn sequence
    Generate(#[clap(flatten)] GenerateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logging(args.log.as_deref())?;
    match args.mode {
        Mode::Solve(arg) => solve::run(&arg)?,
        Mode::Expand(arg) => expand::run(&arg)?,
        Mode::Generate(arg) => generate::run(&arg)?,
    }
    Ok(())
}

fn init_logging(directives: Option<&str>) -> anyhow::Result<()> {
    let filter = match directives {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}
