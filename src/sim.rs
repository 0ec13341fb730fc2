//! Random self-play simulation.
//!
//! Plays full games with a random decision driver against a silent sink
//! and aggregates winner statistics. Useful for balance checks and for
//! exercising the whole turn engine without a terminal.

use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::game::{Game, Verdict};
use crate::input::Input;
use crate::player::{Seat, SEAT_COUNT};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of games to play.
    pub games: usize,
    /// Turn cap per game; games still running are counted as aborted.
    pub max_turns: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Probability that the driver answers yes to a purchase offer.
    pub buy_probability: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            games: 100,
            max_turns: 500,
            seed: 0,
            buy_probability: 0.75,
        }
    }
}

/// Aggregated results of a simulation run.
#[derive(Debug, Clone, Default)]
pub struct SimReport {
    /// Games played.
    pub games: usize,
    /// Wins per seat.
    pub wins: [usize; SEAT_COUNT],
    /// Games decided by bankruptcy.
    pub by_bankruptcy: usize,
    /// Games decided by a full collection.
    pub by_collection: usize,
    /// Games cut off at the turn cap.
    pub aborted: usize,
    /// Turns played across all games.
    pub total_turns: usize,
}

impl SimReport {
    /// Writes a human-readable summary.
    pub fn print_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Simulated {} games", self.games)?;
        for seat in [Seat::P1, Seat::P2] {
            writeln!(
                out,
                "  {} wins: {}",
                seat.default_name(),
                self.wins[seat.index()]
            )?;
        }
        writeln!(out, "  by bankruptcy: {}", self.by_bankruptcy)?;
        writeln!(out, "  by collection: {}", self.by_collection)?;
        writeln!(out, "  aborted at turn cap: {}", self.aborted)?;
        let finished = self.games - self.aborted;
        if finished > 0 {
            writeln!(
                out,
                "  avg turns per finished game: {:.1}",
                self.total_turns as f64 / finished as f64
            )?;
        }
        Ok(())
    }
}

/// Answers every decision randomly: weighted yes/no for purchases,
/// uniform destinations for travel.
pub struct RandomInput {
    rng: SmallRng,
    buy_probability: f64,
}

impl RandomInput {
    pub fn new(seed: u64, buy_probability: f64) -> RandomInput {
        let rng = if seed == 0 {
            SmallRng::from_entropy()
        } else {
            SmallRng::seed_from_u64(seed)
        };
        RandomInput {
            rng,
            buy_probability,
        }
    }
}

impl Input for RandomInput {
    fn confirm_roll(&mut self, _prompt: &str) {}

    fn ask_yes_no(&mut self, _prompt: &str) -> bool {
        self.rng.gen_bool(self.buy_probability)
    }

    fn ask_slot_number(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..=high)
    }

    fn acknowledge(&mut self, _message: &str) {}
}

/// Plays `config.games` random games and aggregates the outcomes.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut seeds = if config.seed == 0 {
        SmallRng::from_entropy()
    } else {
        SmallRng::seed_from_u64(config.seed)
    };

    let mut report = SimReport {
        games: config.games,
        ..SimReport::default()
    };
    let mut sink = io::sink();

    for _ in 0..config.games {
        // Derive a non-zero per-game seed so each game is reproducible
        // from the run seed alone.
        let game_seed = seeds.gen_range(1..u64::MAX);
        let game_config = GameConfig {
            seed: game_seed,
            ..GameConfig::default()
        };
        let mut game = Game::new(&game_config);
        let mut driver = RandomInput::new(game_seed, config.buy_probability);

        let mut finished = false;
        for turn in 1..=config.max_turns {
            let outcome = game
                .play_turn(&mut driver, &mut sink)
                .expect("writing to a sink cannot fail");
            if let Some(verdict) = outcome {
                report.wins[verdict.winner().index()] += 1;
                match verdict {
                    Verdict::Bankruptcy { .. } => report.by_bankruptcy += 1,
                    Verdict::Collection { .. } => report.by_collection += 1,
                }
                report.total_turns += turn;
                finished = true;
                break;
            }
        }
        if !finished {
            report.aborted += 1;
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_simulation_is_deterministic() {
        let config = SimConfig {
            games: 3,
            max_turns: 300,
            seed: 99,
            buy_probability: 0.75,
        };
        let a = run_simulation(&config);
        let b = run_simulation(&config);
        assert_eq!(a.wins, b.wins);
        assert_eq!(a.by_bankruptcy, b.by_bankruptcy);
        assert_eq!(a.by_collection, b.by_collection);
        assert_eq!(a.total_turns, b.total_turns);
    }

    #[test]
    fn every_game_is_accounted_for() {
        let config = SimConfig {
            games: 5,
            max_turns: 300,
            seed: 7,
            buy_probability: 0.75,
        };
        let report = run_simulation(&config);
        assert_eq!(report.games, 5);
        assert_eq!(
            report.wins[0] + report.wins[1] + report.aborted,
            report.games
        );
        assert_eq!(
            report.by_bankruptcy + report.by_collection,
            report.wins[0] + report.wins[1]
        );
    }

    #[test]
    fn summary_mentions_the_game_count() {
        let report = SimReport {
            games: 42,
            ..SimReport::default()
        };
        let mut out = Vec::new();
        report.print_summary(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Simulated 42 games"));
    }
}
