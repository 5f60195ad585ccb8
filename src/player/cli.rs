#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use anyhow::bail;
use rand::rngs::SmallRng;

use crate::core::{Board, BoardView, Coord, GameConfig, GuessResult, Orientation, TargetingEngine};
use crate::ui::{
    coord_to_string, parse_coord, write_fleet_status, write_own_board, write_target_board,
};

use super::Player;

/// Human player reading commands from `input` and writing prompts to `output`.
///
/// Keeps its own [`TargetingEngine`] over its shots so it can offer the
/// same suggestion the computer would make.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    advisor: TargetingEngine,
    orientation: Orientation,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player on the process's stdin and stdout.
    pub fn stdio(config: &GameConfig) -> Self {
        Self::new(config, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(config: &GameConfig, input: R, output: W) -> Self {
        Self {
            input,
            output,
            advisor: TargetingEngine::new(config),
            orientation: Orientation::Horizontal,
        }
    }

    /// Consume the player and hand back its output, e.g. for inspection.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask whether to start another match. Closed input counts as no.
    pub fn play_again(&mut self) -> anyhow::Result<bool> {
        loop {
            let answer = match self.prompt("\nPlay again? (y/n): ") {
                Ok(line) => line.to_ascii_lowercase(),
                Err(_) => return Ok(false),
            };
            match answer.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "✗ Please answer y or n.")?,
            }
        }
    }

    fn prompt(&mut self, message: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed");
        }
        Ok(line.trim().to_string())
    }

    fn orientation_name(&self) -> &'static str {
        match self.orientation {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> anyhow::Result<()> {
        writeln!(self.output, "\nSHIP PLACEMENT")?;
        writeln!(
            self.output,
            "  <cell> [H|V] places the ship, ENTER places it randomly,"
        )?;
        writeln!(self.output, "  'r' rotates, 'reset' starts over, 'help' repeats this.")?;

        loop {
            let next = board.unplaced().next().cloned();
            let Some(next) = next else { break };
            writeln!(self.output)?;
            write_own_board(&mut self.output, board)?;
            write_fleet_status(&mut self.output, board)?;
            let line = self.prompt(&format!(
                "Place your {} (length {}, {}): ",
                next.name(),
                next.length(),
                self.orientation_name()
            ))?;

            if line.is_empty() {
                let (anchor, orient) = board.random_placement(rng, &next)?;
                board.place_ship(next.name(), next.length(), anchor, orient)?;
                writeln!(
                    self.output,
                    "✓ {} randomly placed at {}",
                    next.name(),
                    coord_to_string(anchor.0, anchor.1)
                )?;
                continue;
            }
            if line.eq_ignore_ascii_case("help") {
                writeln!(self.output, "  Example: A5 H or B3 V. Ships extend right (H) or down (V).")?;
                continue;
            }
            if line.eq_ignore_ascii_case("r") || line.eq_ignore_ascii_case("rotate") {
                self.orientation = self.orientation.flipped();
                continue;
            }
            if line.eq_ignore_ascii_case("reset") {
                board.reset_placement()?;
                continue;
            }

            let mut parts = line.split_whitespace();
            let anchor = match parts.next().map(|s| parse_coord(s, board.size())) {
                Some(Ok(coord)) => coord,
                Some(Err(e)) => {
                    writeln!(self.output, "✗ Error: {}", e)?;
                    continue;
                }
                None => continue,
            };
            let orient = match parts.next().map(|s| s.to_ascii_uppercase()) {
                None => self.orientation,
                Some(s) if s.starts_with('H') => Orientation::Horizontal,
                Some(s) if s.starts_with('V') => Orientation::Vertical,
                Some(s) => {
                    writeln!(self.output, "✗ Error: Invalid orientation '{}' - use H or V", s)?;
                    continue;
                }
            };
            match board.place_ship(next.name(), next.length(), anchor, orient) {
                Ok(()) => writeln!(
                    self.output,
                    "✓ {} placed at {}",
                    next.name(),
                    coord_to_string(anchor.0, anchor.1)
                )?,
                Err(e) => writeln!(self.output, "✗ {}", e)?,
            }
        }
        writeln!(self.output, "\n✓ All ships placed! Ready to begin battle.")?;
        Ok(())
    }

    fn select_target(&mut self, opponent: BoardView<'_>) -> anyhow::Result<Coord> {
        writeln!(self.output, "\nEnemy waters:")?;
        write_target_board(&mut self.output, opponent)?;
        let suggestion = self.advisor.get_next_target().ok();
        loop {
            let hint = suggestion
                .map(|(r, c)| format!(" [suggested: {}]", coord_to_string(r, c)))
                .unwrap_or_default();
            let line = self.prompt(&format!("Enter target{}: ", hint))?;

            let target = if line.is_empty() {
                match suggestion {
                    Some(coord) => coord,
                    None => continue,
                }
            } else {
                match parse_coord(&line, opponent.size()) {
                    Ok(coord) => coord,
                    Err(e) => {
                        writeln!(self.output, "✗ Invalid coordinate: {}", e)?;
                        continue;
                    }
                }
            };
            if opponent.is_attacked(target.0, target.1) {
                writeln!(self.output, "✗ You already fired at {}.", coord_to_string(target.0, target.1))?;
                continue;
            }
            return Ok(target);
        }
    }

    fn handle_guess_result(&mut self, coord: Coord, result: &GuessResult) -> anyhow::Result<()> {
        let at = coord_to_string(coord.0, coord.1);
        match result {
            GuessResult::Hit(_) => writeln!(self.output, "\n🎯 HIT at {}!", at)?,
            GuessResult::Miss => writeln!(self.output, "\n💧 Miss at {}.", at)?,
            GuessResult::Sink(name) => writeln!(self.output, "\n💥 SUNK! You destroyed the enemy's {}!", name)?,
        }
        self.advisor
            .update_game_state(coord.0, coord.1, result)
            .map_err(|e| anyhow::anyhow!(e))
    }

    fn handle_opponent_guess(&mut self, coord: Coord, result: &GuessResult) {
        let at = coord_to_string(coord.0, coord.1);
        let _ = match result {
            GuessResult::Hit(name) => writeln!(self.output, "⚠️  Enemy hit your {} at {}", name, at),
            GuessResult::Miss => writeln!(self.output, "✓ Enemy missed at {}", at),
            GuessResult::Sink(name) => writeln!(self.output, "💀 Enemy sank your {} at {}", name, at),
        };
    }
}
