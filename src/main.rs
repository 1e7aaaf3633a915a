//! Terminal 2048 runner (default binary).
//!
//! `tui-2048` plays interactively; `tui-2048 screensaver` plays itself.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;

use tui_2048::engine::{EndReason, Game, GameConfig, Outcome};
use tui_2048::input::TerminalKeys;
use tui_2048::term::TerminalRenderer;
use tui_2048::types::{Mode, SCREENSAVER_RENDER_INTERVAL};

#[derive(Debug, Parser)]
#[command(author, version, about = "2048 in the terminal")]
struct Cli {
    /// "screensaver" lets the game play itself; anything else is interactive
    mode: Option<String>,

    /// Seed for tile spawns (defaults to the system clock)
    #[arg(long, env = "TUI2048_SEED", value_name = "N")]
    seed: Option<u32>,

    /// Screensaver draws one frame every N turns
    #[arg(
        long,
        env = "TUI2048_RENDER_EVERY",
        value_name = "N",
        default_value_t = SCREENSAVER_RENDER_INTERVAL,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    render_every: u64,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            mode: Mode::from_arg(self.mode.as_deref()),
            seed: self.seed.unwrap_or_else(clock_seed),
            render_interval: self.render_every,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = cli.game_config();
    info!("seed {}", config.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(config, &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    let outcome = result?;
    println!("{}", summary(&outcome));
    Ok(())
}

fn run(config: GameConfig, term: &mut TerminalRenderer) -> Result<Outcome> {
    let mut game = Game::new(config, TerminalKeys::new(), term);
    game.run()
}

fn summary(outcome: &Outcome) -> String {
    let lead = match outcome.reason {
        EndReason::NoMovesLeft => "Game over!",
        EndReason::Quit => "Quit.",
    };
    format!("{} Highest tile: {}", lead, outcome.highest_tile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_argument_selects_screensaver() {
        let cli = Cli::parse_from(["tui-2048", "screensaver", "--seed", "5"]);
        let config = cli.game_config();
        assert_eq!(config.mode, Mode::Screensaver);
        assert_eq!(config.seed, 5);
        assert_eq!(config.render_interval, SCREENSAVER_RENDER_INTERVAL);
    }

    #[test]
    fn unknown_mode_is_interactive() {
        let cli = Cli::parse_from(["tui-2048", "dance", "--render-every", "10"]);
        let config = cli.game_config();
        assert_eq!(config.mode, Mode::Interactive);
        assert_eq!(config.render_interval, 10);
    }

    #[test]
    fn zero_render_interval_is_rejected() {
        assert!(Cli::try_parse_from(["tui-2048", "--render-every", "0"]).is_err());
    }

    #[test]
    fn summary_names_the_reason() {
        let outcome = Outcome {
            highest_tile: 512,
            turns: 300,
            reason: EndReason::NoMovesLeft,
        };
        assert_eq!(summary(&outcome), "Game over! Highest tile: 512");

        let quit = Outcome {
            reason: EndReason::Quit,
            ..outcome
        };
        assert_eq!(summary(&quit), "Quit. Highest tile: 512");
    }
}
