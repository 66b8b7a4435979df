use std::path::PathBuf;

use anyhow::{Context as _, ensure};
use rand::{Rng, SeedableRng as _, seq::index};
use rand_pcg::Pcg32;
use tilesearch_engine::{Grid, GridSize, SpawnSequence};

use crate::{schema::puzzle::Puzzle, seed::PuzzleSeed, util::OutputTarget};

const START_TILES: usize = 2;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    /// Grid width
    #[arg(long, default_value_t = 4)]
    width: usize,
    /// Grid height
    #[arg(long, default_value_t = 4)]
    height: usize,
    /// Goal tile (power of two)
    #[arg(long, default_value_t = 2048)]
    goal: u32,
    /// Number of values in the spawn sequence
    #[arg(long, default_value_t = 1024)]
    length: usize,
    /// Probability that a spawned tile is a 4 instead of a 2
    #[arg(long, default_value_t = 0.1)]
    four_probability: f64,
    /// 32-character hex seed (random if omitted)
    #[arg(long)]
    seed: Option<PuzzleSeed>,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let GenerateArg {
        width,
        height,
        goal,
        length,
        four_probability,
        seed,
        output,
    } = arg;

    ensure!(
        *width > 0 && *height > 0 && width * height >= START_TILES,
        "grid must have at least {START_TILES} cells, got {width}x{height}"
    );
    ensure!(*length > 0, "spawn sequence length must be positive");
    ensure!(
        (0.0..=1.0).contains(four_probability),
        "four probability must be within [0, 1], got {four_probability}"
    );

    let seed = match seed {
        Some(seed) => *seed,
        None => rand::rng().random(),
    };
    let puzzle = generate_puzzle(
        GridSize::new(*width, *height),
        *goal,
        *length,
        *four_probability,
        seed,
    )
    .context("Failed to generate puzzle")?;
    tracing::info!(%seed, size = %puzzle.grid.size(), goal, length, "generated puzzle");

    OutputTarget::from(output.clone()).write_json(&puzzle)?;
    Ok(())
}

fn generate_puzzle(
    size: GridSize,
    goal: u32,
    length: usize,
    four_probability: f64,
    seed: PuzzleSeed,
) -> anyhow::Result<Puzzle> {
    let mut rng = Pcg32::from_seed(seed.to_bytes());
    let random_tile = |rng: &mut Pcg32| {
        if rng.random_bool(four_probability) {
            4
        } else {
            2
        }
    };

    let mut cells = vec![0u32; size.num_cells()];
    for i in index::sample(&mut rng, cells.len(), START_TILES) {
        cells[i] = random_tile(&mut rng);
    }
    let grid = Grid::from_rows(cells.chunks(size.width))?;

    let values = (0..length).map(|_| random_tile(&mut rng)).collect();
    let spawn_sequence = SpawnSequence::new(values)?;

    let puzzle = Puzzle {
        grid,
        goal,
        spawn_sequence,
        seed: Some(seed),
    };
    puzzle.root_node(None)?;
    Ok(puzzle)
}

#[cfg(test)]
mod tests {
    use tilesearch_search::NodeError;

    use super::*;

    const SEED: &str = "0123456789abcdeffedcba9876543210";

    fn seed() -> PuzzleSeed {
        SEED.parse().unwrap()
    }

    #[test]
    fn test_generated_puzzle_shape() {
        let puzzle = generate_puzzle(GridSize::new(5, 3), 512, 64, 0.1, seed()).unwrap();
        assert_eq!(puzzle.grid.size(), GridSize::new(5, 3));
        assert_eq!(puzzle.grid.num_tiles(), START_TILES);
        assert!(puzzle.grid.cells().iter().all(|&v| [0, 2, 4].contains(&v)));
        assert_eq!(puzzle.spawn_sequence.len(), 64);
        assert!(puzzle.spawn_sequence.values().iter().all(|&v| v == 2 || v == 4));
        assert_eq!(puzzle.seed, Some(seed()));
        assert_eq!(puzzle.root_node(None).unwrap().depth(), 0);
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let a = generate_puzzle(GridSize::CLASSIC, 2048, 128, 0.1, seed()).unwrap();
        let b = generate_puzzle(GridSize::CLASSIC, 2048, 128, 0.1, seed()).unwrap();
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.spawn_sequence, b.spawn_sequence);
    }

    #[test]
    fn test_goal_bounds_match_search_problem() {
        assert!(generate_puzzle(GridSize::CLASSIC, 2, 8, 0.1, seed()).is_ok());
        for goal in [0, 1, 12] {
            let err = generate_puzzle(GridSize::CLASSIC, goal, 8, 0.1, seed()).unwrap_err();
            assert_eq!(
                err.downcast_ref::<NodeError>(),
                Some(&NodeError::InvalidGoal(goal))
            );
        }
    }

    #[test]
    fn test_four_probability_extremes() {
        let twos = generate_puzzle(GridSize::CLASSIC, 2048, 32, 0.0, seed()).unwrap();
        assert!(twos.spawn_sequence.values().iter().all(|&v| v == 2));
        let fours = generate_puzzle(GridSize::CLASSIC, 2048, 32, 1.0, seed()).unwrap();
        assert!(fours.spawn_sequence.values().iter().all(|&v| v == 4));
    }

    #[test]
    fn test_puzzle_file_roundtrip_keeps_seed() {
        let puzzle = generate_puzzle(GridSize::CLASSIC, 2048, 8, 0.1, seed()).unwrap();
        let json = serde_json::to_string(&puzzle).unwrap();
        assert!(json.contains(SEED));
        let back: Puzzle = serde_json::from_str(&json).unwrap();
        assert_eq!(back.grid, puzzle.grid);
        assert_eq!(back.spawn_sequence, puzzle.spawn_sequence);
        assert_eq!(back.seed, Some(seed()));
    }
}
