//! Turn loop tying a [`GameEngine`] to two players.

use anyhow::{anyhow, bail};
use rand::rngs::SmallRng;

use crate::core::{Board, GameEngine, MatchPhase, Side, TurnReport};
use crate::player::Player;

/// Outcome of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSummary {
    pub winner: Side,
    pub human_shots: usize,
    pub computer_shots: usize,
}

/// A match between a human-side and a computer-side player.
pub struct Session<H, C> {
    engine: GameEngine,
    human: H,
    computer: C,
}

impl<H: Player, C: Player> Session<H, C> {
    pub fn new(engine: GameEngine, human: H, computer: C) -> Self {
        Self {
            engine,
            human,
            computer,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn human(&self) -> &H {
        &self.human
    }

    pub fn human_mut(&mut self) -> &mut H {
        &mut self.human
    }

    pub fn computer(&self) -> &C {
        &self.computer
    }

    /// Let each player lay out a fleet, then hand it to the engine, which
    /// validates every ship again.
    pub fn place_fleets(&mut self, rng: &mut SmallRng) -> anyhow::Result<()> {
        for side in [Side::Human, Side::Computer] {
            let mut scratch = Board::new(self.engine.config());
            match side {
                Side::Human => self.human.place_ships(rng, &mut scratch)?,
                Side::Computer => self.computer.place_ships(rng, &mut scratch)?,
            }
            for ship in scratch.ships() {
                self.engine
                    .place_ship(side, ship.name(), ship.length(), ship.origin(), ship.orientation())
                    .map_err(|e| anyhow!(e))?;
            }
        }
        if self.engine.phase() != MatchPhase::InProgress {
            bail!("fleets incomplete after placement");
        }
        Ok(())
    }

    /// Play a single shot for whichever side is due to fire.
    pub fn play_turn(&mut self) -> anyhow::Result<TurnReport> {
        let side = self.engine.turn();
        let (shooter, target): (&mut dyn Player, &mut dyn Player) = match side {
            Side::Human => (&mut self.human, &mut self.computer),
            Side::Computer => (&mut self.computer, &mut self.human),
        };
        let coord = shooter.select_target(self.engine.board(side.opponent()).public_view())?;
        let report = self
            .engine
            .fire(side, coord.0, coord.1)
            .map_err(|e| anyhow!(e))?;
        log::debug!("{:?} fired at {:?}: {:?}", side, coord, report.result);
        shooter.handle_guess_result(coord, &report.result)?;
        target.handle_opponent_guess(coord, &report.result);
        Ok(report)
    }

    /// Place both fleets and alternate turns until one side has won.
    pub fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<MatchSummary> {
        self.place_fleets(rng)?;
        let size = self.engine.config().board_size();
        // Every shot hits a fresh cell, so both boards together bound the match.
        let max_turns = 2 * size * size;
        for _ in 0..max_turns {
            if let Some(winner) = self.play_turn()?.winner {
                return Ok(self.summary(winner));
            }
        }
        bail!("match did not finish within {} turns", max_turns)
    }

    fn summary(&self, winner: Side) -> MatchSummary {
        MatchSummary {
            winner,
            human_shots: self.engine.shots_fired(Side::Human),
            computer_shots: self.engine.shots_fired(Side::Computer),
        }
    }
}
