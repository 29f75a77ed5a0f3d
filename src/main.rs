//! Headless runner: plays seeded games with the first-hint policy and
//! reports results, either as human-readable event lines or as one JSON
//! object per game for automation.

use anyhow::{anyhow, Result};

use match_three::core::{CascadePass, GameSession, SessionObserver};
use match_three::engine::play_to_end;
use match_three::types::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CliArgs {
    seed: u32,
    games: u32,
    json: bool,
    config: GameConfig,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            seed: 1,
            games: 1,
            json: false,
            config: GameConfig::default(),
        }
    }
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --seed"))?;
                cli.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--games" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --games"))?;
                cli.games = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --games value: {}", v))?;
            }
            "--size" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --size"))?;
                cli.config.board_size = v
                    .parse::<usize>()
                    .map_err(|_| anyhow!("invalid --size value: {}", v))?;
            }
            "--kinds" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --kinds"))?;
                cli.config.tile_kinds = v
                    .parse::<usize>()
                    .map_err(|_| anyhow!("invalid --kinds value: {}", v))?;
            }
            "--moves" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --moves"))?;
                cli.config.max_moves = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --moves value: {}", v))?;
            }
            "--json" => {
                cli.json = true;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(cli)
}

/// Prints one line per session event, in the order the engine emits them.
struct ConsoleObserver;

impl SessionObserver for ConsoleObserver {
    fn on_cascade_pass(&mut self, pass: &CascadePass) {
        println!("PASS cleared {}", pass.cleared.len());
    }

    fn on_score_changed(&mut self, score: u32) {
        println!("SCORE {}", score);
    }

    fn on_moves_changed(&mut self, remaining: u32) {
        println!("MOVES {}", remaining);
    }

    fn on_game_over(&mut self, final_score: u32) {
        println!("GAME OVER, final score {}", final_score);
    }
}

/// One finished game, serialized on `--json`.
#[derive(Debug, serde::Serialize)]
struct GameReport {
    seed: u32,
    board_size: usize,
    tile_kinds: usize,
    max_moves: u32,
    moves_played: u32,
    total_cleared: usize,
    final_score: u32,
    stalled: bool,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;

    for game in 0..cli.games {
        let seed = cli.seed.wrapping_add(game);
        let mut session = GameSession::new(cli.config, seed)
            .map_err(|err| anyhow!("invalid config: {}", err.message()))?;

        if !cli.json {
            println!("game {} (seed {})", game + 1, seed);
            session.subscribe(Box::new(ConsoleObserver));
        }

        let summary =
            play_to_end(&mut session).map_err(|err| anyhow!("autoplay failed: {}", err.message()))?;

        if cli.json {
            let report = GameReport {
                seed,
                board_size: cli.config.board_size,
                tile_kinds: cli.config.tile_kinds,
                max_moves: cli.config.max_moves,
                moves_played: summary.moves_played,
                total_cleared: summary.total_cleared,
                final_score: summary.final_score,
                stalled: summary.stalled,
            };
            println!("{}", serde_json::to_string(&report)?);
        } else if summary.stalled {
            println!(
                "no legal moves left after {} moves, score {}",
                summary.moves_played, summary.final_score
            );
        } else {
            println!(
                "budget spent: {} moves, {} tiles cleared, score {}",
                summary.moves_played, summary.total_cleared, summary.final_score
            );
        }
    }

    Ok(())
}
