// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Turn handling for a game between the human player and the computer.
//!
//! [`TurnResolver`] borrows both boards for the length of a game and routes every shot to
//! the board of the side that is not acting. A hit or a destroyed vessel keeps the turn
//! with the shooter; a miss passes it to the other side. The game ends the moment either
//! board has lost all of its vessels.
use std::fmt;

use log::{debug, info};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::{Coordinate, Grid, ShotOutcome};

pub use self::errors::TurnError;

mod errors;

/// One of the two sides of the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    /// The human player.
    Player,
    /// The automated opponent.
    Computer,
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Side::Player => "Player",
            Side::Computer => "Computer",
        })
    }
}

impl Distribution<Side> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Side {
        if rng.gen() {
            Side::Player
        } else {
            Side::Computer
        }
    }
}

/// What happened on a successfully resolved turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TurnReport {
    /// Effect of the shot on the opponent's board.
    pub outcome: ShotOutcome,
    /// Side that acts next.
    pub next: Side,
    /// Set once the shot destroyed the opponent's last vessel.
    pub winner: Option<Side>,
}

/// Routes shots between the two boards and keeps track of whose turn it is.
#[derive(Debug)]
pub struct TurnResolver<'g> {
    player: &'g mut Grid,
    computer: &'g mut Grid,

    /// Side whose turn it is.
    current: Side,

    winner: Option<Side>,

    /// Number of shots that resolved, rejected shots not included.
    shots: usize,
}

impl<'g> TurnResolver<'g> {
    /// Start a game between the two boards, with `first` taking the first shot.
    pub fn new(player: &'g mut Grid, computer: &'g mut Grid, first: Side) -> Self {
        let winner = if player.is_defeated() {
            Some(Side::Computer)
        } else if computer.is_defeated() {
            Some(Side::Player)
        } else {
            None
        };
        Self {
            player,
            computer,
            current: first,
            winner,
            shots: 0,
        }
    }

    /// Get the side whose turn it currently is.
    pub fn current(&self) -> Side {
        self.current
    }

    /// Get the winner, or `None` while the game is in progress.
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Number of shots that hit the water or a vessel so far.
    pub fn shots_fired(&self) -> usize {
        self.shots
    }

    /// Get the board owned by `side`.
    pub fn grid(&self, side: Side) -> &Grid {
        match side {
            Side::Player => &*self.player,
            Side::Computer => &*self.computer,
        }
    }

    fn grid_mut(&mut self, side: Side) -> &mut Grid {
        match side {
            Side::Player => &mut *self.player,
            Side::Computer => &mut *self.computer,
        }
    }

    /// Have `actor` fire at `coord` on the opponent's board.
    ///
    /// Rejected shots change nothing, and the same actor is expected to choose again.
    pub fn execute_turn(&mut self, actor: Side, coord: Coordinate) -> Result<TurnReport, TurnError> {
        if let Some(winner) = self.winner {
            return Err(TurnError::GameOver(winner));
        }
        if actor != self.current {
            return Err(TurnError::OutOfTurn(actor));
        }

        let target = actor.opponent();
        let outcome = self.grid_mut(target).resolve_shot(coord)?;
        self.shots += 1;
        debug!("{} fired at {}: {:?}", actor, coord, outcome);

        if self.grid(target).is_defeated() {
            info!("{} won after {} shots", actor, self.shots);
            self.winner = Some(actor);
        }
        self.current = if outcome.grants_repeat() {
            actor
        } else {
            target
        };
        Ok(TurnReport {
            outcome,
            next: self.current,
            winner: self.winner,
        })
    }
}
