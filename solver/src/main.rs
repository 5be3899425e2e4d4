use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use minesight::config::{Config, Difficulty, GameConfig};
use minesight::controller::{IterationController, State};
use minesight::minefield::{Minefield, SharedMinefield};

/// Play seeded in-memory games of Minesweeper with the local solver and report how it did.
#[derive(Parser, Debug)]
#[command(name = "solver", version, about)]
struct Cli {
    /// TOML configuration to start from.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Board preset, overriding the configuration.
    #[arg(long, conflicts_with_all = ["rows", "cols", "mines"])]
    difficulty: Option<Difficulty>,
    /// Custom board height.
    #[arg(long, requires_all = ["cols", "mines"])]
    rows: Option<usize>,
    /// Custom board width.
    #[arg(long, requires_all = ["rows", "mines"])]
    cols: Option<usize>,
    /// Custom mine count.
    #[arg(long, requires_all = ["rows", "cols"])]
    mines: Option<usize>,
    /// Seed of the first game; later games count up from it.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Number of games to play.
    #[arg(long, default_value_t = 1)]
    games: u64,
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path).with_context(|| format!("loading {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(difficulty) = self.difficulty {
            config.game = difficulty.config();
        }
        if let (Some(rows), Some(cols), Some(mines)) = (self.rows, self.cols, self.mines) {
            config.game = GameConfig { rows, cols, mines };
            config.game.validate()?;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.config()?;
    info!("playing {} game(s) of {}x{} with {} mines",
        cli.games, config.game.rows, config.game.cols, config.game.mines);

    let mut wins = 0;
    for seed in cli.seed..cli.seed + cli.games {
        let field = SharedMinefield::new(Minefield::new(config.game, seed)?);
        let mut controller = IterationController::new(field.clone(), field.clone(), config.game, config.solver);

        let start = Instant::now();
        let summary = controller.run()?;
        let elapsed = start.elapsed();

        let won = field.borrow().is_won();
        if won {
            wins += 1;
        }
        debug!("seed {} final board\n{}", seed, field.borrow().view());

        let outcome = match summary.state {
            State::Lost => "lost",
            _ if won => "won",
            _ => "stuck",
        };
        println!("seed {:>4}: {:<5} rounds {:>4}  guesses {:>3}  flags {:>3}/{}  {:.2?}",
            seed, outcome, summary.rounds, summary.guesses, summary.flags_found, config.game.mines, elapsed);
    }

    if cli.games > 1 {
        println!("won {} of {} games", wins, cli.games);
    }
    Ok(())
}
