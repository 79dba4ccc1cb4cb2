//! UNO driver.
//!
//! Deals a table, plays it out turn by turn, prints the table after every
//! turn and finally the winner as `Winner is Player <seat>!`, where the
//! seat is 0-based like every other player label (`Player 0`, `P0`).
//!
//! Options: --players, --seed, --config, --max-turns, --json, --history, --verbose

use std::path::PathBuf;

use clap::Parser;
use rust_uno::{ConfigError, GameConfig, UnoGame};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Play a self-running game of UNO",
    long_about = "Play a self-running game of UNO. Seats are numbered from 0, \
                  so the winner line names the 0-based seat index."
)]
struct Args {
    /// Number of players (clamped to 2-255)
    #[arg(short, long)]
    players: Option<usize>,

    /// Shuffle seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON configuration file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many turns if nobody has won
    #[arg(long)]
    max_turns: Option<usize>,

    /// Print table views as JSON lines instead of text
    #[arg(long)]
    json: bool,

    /// Print the turn log once the game ends
    #[arg(long)]
    history: bool,

    /// Log every turn
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(players) = self.players {
            config.player_count = players;
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(max_turns) = self.max_turns {
            config = config.with_max_turns(max_turns);
        }
        Ok(config.normalized())
    }
}

fn log(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    if let Err(err) = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Warning: logger unavailable: {err}");
    }
}

fn print_view(game: &UnoGame, json: bool) {
    if json {
        match serde_json::to_string(&game.view()) {
            Ok(line) => println!("{line}"),
            Err(err) => log::error!("failed to encode table view: {err}"),
        }
    } else {
        println!("{}", game.state());
    }
}

fn main() {
    let args = Args::parse();
    log(args.verbose);

    let config = match args.game_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    let max_turns = config.max_turns;

    let mut game = UnoGame::with_config(config);
    game.initialize();

    let mut turns = 0;
    while !game.is_game_over() && !game.table().is_stalled() && turns < max_turns {
        game.play_turn();
        print_view(&game, args.json);
        turns += 1;
    }

    if args.history {
        for record in game.history() {
            println!("{record}");
        }
    }

    match game.winner() {
        Some(winner) => println!("Winner is Player {}!", winner.index()),
        None if game.table().is_stalled() => {
            log::warn!("table stalled after {} turns", turns);
            println!("No winner: deck empty and nobody can play after {turns} turns.");
            std::process::exit(2);
        }
        None => {
            log::warn!("no winner after {} turns", turns);
            println!("No winner after {turns} turns.");
            std::process::exit(2);
        }
    }
}
