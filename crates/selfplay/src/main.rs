//! Self-play matches and position analysis for the Senet search.
//!
//! `play` pits the expectiminimax player against a baseline opponent,
//! alternating colours, and can save every game as MessagePack. `analyze`
//! runs one diagnostic search and prints the trace as JSON.

mod baseline;

use anyhow::{Context, Result};
use baseline::Opponent;
use clap::{Parser, Subcommand};
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use senet_expectiminimax::{choose_with, SearchConfig};
use senet_rules::{Action, GameState, HeuristicWeights, SenetHeuristic, Side, Sticks, Throw, STICKS};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Senet expectiminimax self-play and analysis tool.
#[derive(Parser)]
#[command(name = "senet-selfplay")]
#[command(about = "Play the Senet search against baselines and inspect its decisions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a match against a baseline opponent.
    Play {
        /// Number of games to play.
        #[arg(short, long, default_value = "20")]
        games: usize,

        /// Search depth in chance layers.
        #[arg(short, long, default_value = "2")]
        depth: usize,

        /// Baseline opponent.
        #[arg(long, value_enum, default_value = "greedy")]
        opponent: Opponent,

        /// Random seed for reproducibility.
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Give up on a game after this many turns.
        #[arg(long, default_value = "2000")]
        max_turns: usize,

        /// Output directory for game records.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON file with evaluator weights. Defaults are used if omitted.
        #[arg(short, long)]
        weights: Option<PathBuf>,
    },

    /// Search one position with diagnostics and print the trace.
    Analyze {
        /// Position in board notation, e.g. "LDLDLDLDLDLDLD................ L".
        /// Defaults to a position reached by random play.
        #[arg(short, long)]
        position: Option<String>,

        /// Random turns played from the opening when no position is given.
        #[arg(long, default_value = "20")]
        plies: usize,

        /// Throw to search for (1-5). Drawn from the sticks if omitted.
        #[arg(short, long)]
        throw: Option<u8>,

        /// Search depth in chance layers.
        #[arg(short, long, default_value = "2", allow_negative_numbers = true)]
        depth: i64,

        /// Random seed for reproducibility.
        #[arg(long, default_value = "42")]
        seed: u64,

        /// JSON file with evaluator weights. Defaults are used if omitted.
        #[arg(short, long)]
        weights: Option<PathBuf>,
    },
}

/// One turn of a recorded game.
#[derive(Serialize, Deserialize, Debug)]
struct TurnRecord {
    side: Side,
    faces: [bool; STICKS],
    throw: Throw,
    /// None for a skipped turn
    action: Option<Action>,
    /// Search value, for turns played by the search
    value: Option<f64>,
    note: String,
}

/// A complete game.
#[derive(Serialize, Deserialize, Debug)]
struct GameRecord {
    turns: Vec<TurnRecord>,

    /// None if the game hit the turn limit.
    winner: Option<Side>,

    /// Side played by the search.
    search_side: Side,

    metadata: HashMap<String, serde_json::Value>,
}

/// Match results from the search's point of view.
#[derive(Debug, Default, PartialEq)]
struct MatchResult {
    search_wins: usize,
    opponent_wins: usize,
    unfinished: usize,
    total_games: usize,
}

impl MatchResult {
    fn tally(records: &[GameRecord]) -> Self {
        let mut result = MatchResult {
            total_games: records.len(),
            ..Default::default()
        };
        for record in records {
            match record.winner {
                Some(side) if side == record.search_side => result.search_wins += 1,
                Some(_) => result.opponent_wins += 1,
                None => result.unfinished += 1,
            }
        }
        result
    }

    fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.search_wins as f64 / self.total_games as f64
        }
    }
}

/// Read evaluator weights from a JSON file
fn load_heuristic(path: Option<&Path>) -> Result<SenetHeuristic> {
    let Some(path) = path else {
        return Ok(SenetHeuristic::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read weights file: {:?}", path))?;
    let weights: HeuristicWeights = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse weights file: {:?}", path))?;
    info!("loaded evaluator weights from {:?}", path);
    Ok(SenetHeuristic::new(weights))
}

/// Play one game between the search and `opponent`.
fn play_game(
    config: &SearchConfig,
    heuristic: &SenetHeuristic,
    opponent: Opponent,
    search_side: Side,
    seed: u64,
    max_turns: usize,
) -> Result<GameRecord> {
    let mut sticks = Sticks::seeded(seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
    let mut state = GameState::starting();
    let mut turns = Vec::new();

    while !state.is_terminal() && turns.len() < max_turns {
        let side = state.side_to_move();
        let toss = sticks.toss();

        let (action, value) = if side == search_side {
            let choice = choose_with(&state, toss.throw, config.clone(), heuristic.clone());
            (choice.action, Some(choice.value))
        } else {
            (opponent.choose(&state, toss.throw, &mut rng), None)
        };

        let note = action.map(|a| a.note()).unwrap_or_default();
        state = match action {
            Some(action) => state
                .apply(action)
                .with_context(|| format!("illegal move {} in game {}", action, seed))?,
            None => state.pass(),
        };

        turns.push(TurnRecord {
            side,
            faces: toss.faces,
            throw: toss.throw,
            action,
            value,
            note,
        });
    }

    let winner = state.winner();
    debug!("game {} finished after {} turns, winner {:?}", seed, turns.len(), winner);

    let mut metadata = HashMap::new();
    metadata.insert("seed".to_string(), serde_json::json!(seed));
    metadata.insert(
        "search".to_string(),
        serde_json::to_value(config).context("Failed to encode search config")?,
    );
    metadata.insert(
        "weights".to_string(),
        serde_json::to_value(heuristic.weights()).context("Failed to encode weights")?,
    );
    metadata.insert("opponent".to_string(), serde_json::json!(opponent.name()));
    metadata.insert("final".to_string(), serde_json::json!(state.to_notation()));

    Ok(GameRecord {
        turns,
        winner,
        search_side,
        metadata,
    })
}

/// Save each game to a separate MessagePack file
fn save_records(output: &Path, records: &[GameRecord]) -> Result<()> {
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {:?}", output))?;
    for (i, record) in records.iter().enumerate() {
        let filename = output.join(format!("game_{:06}.msgpack", i));
        let file = File::create(&filename)
            .with_context(|| format!("Failed to create file: {:?}", filename))?;
        let mut writer = BufWriter::new(file);
        rmp_serde::encode::write_named(&mut writer, record)
            .with_context(|| format!("Failed to serialize game {}", i))?;
    }
    Ok(())
}

/// Run the play command.
fn cmd_play(
    games: usize,
    depth: usize,
    opponent: Opponent,
    seed: u64,
    max_turns: usize,
    output: Option<PathBuf>,
    weights: Option<PathBuf>,
) -> Result<()> {
    let heuristic = load_heuristic(weights.as_deref())?;
    println!(
        "Playing {} games: expectiminimax (depth {}) vs {}",
        games,
        depth,
        opponent.name()
    );
    println!("Seed: {}", seed);

    let start = Instant::now();
    let config = SearchConfig::with_depth(depth);

    // Alternate colours for fairness
    let records: Vec<GameRecord> = (0..games)
        .into_par_iter()
        .map(|i| {
            let search_side = if i % 2 == 0 { Side::Light } else { Side::Dark };
            let game_seed = seed.wrapping_add(i as u64 * 1000);
            play_game(&config, &heuristic, opponent, search_side, game_seed, max_turns)
        })
        .collect::<Result<_>>()?;

    if let Some(output) = &output {
        save_records(output, &records)?;
        info!("saved {} records to {:?}", records.len(), output);
    }

    let elapsed = start.elapsed();
    let total_turns: usize = records.iter().map(|r| r.turns.len()).sum();
    let result = MatchResult::tally(&records);

    println!("\nCompleted in {:.2}s", elapsed.as_secs_f64());
    println!(
        "Average game length: {:.1} turns",
        total_turns as f64 / games.max(1) as f64
    );
    println!("================================================");
    println!("Search wins:   {}", result.search_wins);
    println!("{:<14} {}", format!("{} wins:", opponent.name()), result.opponent_wins);
    println!("Unfinished:    {}", result.unfinished);
    println!("------------------------------------------------");
    println!("Win rate: {:.1}%", result.win_rate() * 100.0);

    Ok(())
}

/// Play `plies` random turns from the opening
fn random_position(seed: u64, plies: usize) -> GameState {
    let mut sticks = Sticks::seeded(seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
    let mut state = GameState::starting();
    for _ in 0..plies {
        if state.is_terminal() {
            break;
        }
        let throw = sticks.sample();
        state = match Opponent::Random.choose(&state, throw, &mut rng) {
            Some(action) => state.make_move(action),
            None => state.pass(),
        };
    }
    state
}

/// Run the analyze command.
fn cmd_analyze(
    position: Option<String>,
    plies: usize,
    throw: Option<u8>,
    depth: i64,
    seed: u64,
    weights: Option<PathBuf>,
) -> Result<()> {
    let heuristic = load_heuristic(weights.as_deref())?;
    let state = match &position {
        Some(notation) => GameState::from_notation(notation)
            .with_context(|| format!("Invalid position: {:?}", notation))?,
        None => random_position(seed, plies),
    };
    let throw = match throw {
        Some(value) => value,
        None => Sticks::seeded(seed.wrapping_add(2)).sample().value(),
    };

    let throw = Throw::new(throw).context("Invalid throw")?;
    let config = SearchConfig::checked(depth, true).context("Invalid depth")?;
    let choice = choose_with(&state, throw, config, heuristic);

    println!("Position: {}", state);
    println!("{} to move, throw {}", state.side_to_move(), throw);
    match choice.action {
        Some(action) => {
            let note = action.note();
            if note.is_empty() {
                println!("Best: {} (value {:.3})", action, choice.value);
            } else {
                println!("Best: {} - {} (value {:.3})", action, note, choice.value);
            }
        }
        None => println!("No legal move, turn passes (value {:.3})", choice.value),
    }
    let json = serde_json::to_string_pretty(&choice.trace).context("Failed to encode trace")?;
    println!("{}", json);

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            games,
            depth,
            opponent,
            seed,
            max_turns,
            output,
            weights,
        } => cmd_play(games, depth, opponent, seed, max_turns, output, weights),

        Commands::Analyze {
            position,
            plies,
            throw,
            depth,
            seed,
            weights,
        } => cmd_analyze(position, plies, throw, depth, seed, weights),
    }
}
