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
//! Random fleet placement.
//!
//! Vessels are dropped at random anchors with random orientations until each one lands
//! in a legal spot. If an arrangement runs out of attempts the whole board is thrown away
//! and placement starts again from an empty board, so a finished board is always a valid
//! layout. Both loops are bounded.
use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::{
    board::{Grid, SquareDimensions},
    config::{GameConfig, BOARD_RETRY_LIMIT, PLACEMENT_ATTEMPT_BUDGET},
    game::Side,
    ships::Vessel,
};

/// Reason a fleet could not be placed.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum PlacementError {
    /// The roster was empty or contained a zero-length vessel.
    #[error("invalid roster {0:?}: needs at least one vessel and every length must be nonzero")]
    InvalidRoster(Vec<usize>),

    /// The board dimension was zero or too large.
    #[error("invalid board dimension {0}")]
    InvalidDimension(usize),

    /// Every whole-board arrangement ran out of attempts.
    #[error("could not place the fleet after {boards} boards of {attempts} attempts each")]
    Exhausted { boards: usize, attempts: usize },
}

/// Places a fixed roster of vessels onto fresh boards.
#[derive(Debug, Clone)]
pub struct FleetPlacer {
    roster: Vec<usize>,
    dim: SquareDimensions,
    attempt_budget: usize,
    board_limit: usize,
}

impl FleetPlacer {
    /// Build a placer for the given vessel lengths on boards of `dimension` cells per
    /// side.
    pub fn new(roster: &[usize], dimension: usize) -> Result<Self, PlacementError> {
        if roster.is_empty() || roster.contains(&0) {
            return Err(PlacementError::InvalidRoster(roster.to_vec()));
        }
        let dim = SquareDimensions::try_new(dimension)
            .ok_or(PlacementError::InvalidDimension(dimension))?;
        Ok(Self {
            roster: roster.to_vec(),
            dim,
            attempt_budget: PLACEMENT_ATTEMPT_BUDGET,
            board_limit: BOARD_RETRY_LIMIT,
        })
    }

    /// Build a placer from the roster, dimension and budgets of a [`GameConfig`].
    pub fn from_config(config: &GameConfig) -> Result<Self, PlacementError> {
        Ok(Self::new(&config.roster, config.dimension)?
            .with_attempt_budget(config.attempt_budget)
            .with_board_limit(config.board_limit))
    }

    /// Set the number of attempts allowed for one whole-board arrangement.
    pub fn with_attempt_budget(mut self, attempts: usize) -> Self {
        self.attempt_budget = attempts;
        self
    }

    /// Set the number of whole-board arrangements tried by [`place`][Self::place].
    pub fn with_board_limit(mut self, boards: usize) -> Self {
        self.board_limit = boards;
        self
    }

    pub fn roster(&self) -> &[usize] {
        &self.roster
    }

    /// Make a single attempt at arranging the whole roster on an empty board. Returns
    /// `None` if the attempt budget ran out before every vessel was placed.
    pub fn try_place<R: Rng + ?Sized>(&self, owner: Side, rng: &mut R) -> Option<Grid> {
        let mut grid = Grid::with_dimensions(owner, self.dim);
        let mut attempts = 0;
        for &len in &self.roster {
            loop {
                attempts += 1;
                if attempts > self.attempt_budget {
                    return None;
                }
                let vessel = Vessel::new(rng.sample(&self.dim), len, rng.gen());
                if grid.place_vessel(vessel).is_ok() {
                    break;
                }
            }
        }
        grid.clear_placement_marks();
        debug!("placed fleet for {} in {} attempts", owner, attempts);
        Some(grid)
    }

    /// Arrange the whole roster, starting over from an empty board whenever an attempt
    /// runs out of budget.
    pub fn place<R: Rng + ?Sized>(&self, owner: Side, rng: &mut R) -> Result<Grid, PlacementError> {
        for board in 1..=self.board_limit {
            if let Some(grid) = self.try_place(owner, rng) {
                return Ok(grid);
            }
            debug!("fleet placement for {} ran out of attempts on board {}", owner, board);
        }
        Err(PlacementError::Exhausted {
            boards: self.board_limit,
            attempts: self.attempt_budget,
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::config::STANDARD_ROSTER;

    #[test]
    fn rejects_bad_rosters() {
        assert_eq!(
            FleetPlacer::new(&[], 6).unwrap_err(),
            PlacementError::InvalidRoster(vec![])
        );
        assert!(matches!(
            FleetPlacer::new(&[2, 0], 6),
            Err(PlacementError::InvalidRoster(_))
        ));
        assert_eq!(
            FleetPlacer::new(&[1], 0).unwrap_err(),
            PlacementError::InvalidDimension(0)
        );
        assert_eq!(
            FleetPlacer::new(&[1], usize::MAX).unwrap_err(),
            PlacementError::InvalidDimension(usize::MAX)
        );
    }

    #[test]
    fn roster_is_kept_in_order() {
        let placer = FleetPlacer::new(&STANDARD_ROSTER, 6).unwrap();
        assert_eq!(placer.roster(), &STANDARD_ROSTER[..]);
    }

    #[test]
    fn placed_board_starts_with_no_marks() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = FleetPlacer::new(&STANDARD_ROSTER, 6)
            .unwrap()
            .place(Side::Computer, &mut rng)
            .unwrap();
        assert_eq!(grid.owner(), Side::Computer);
        assert_eq!(grid.vessels().len(), STANDARD_ROSTER.len());
        let lengths: Vec<_> = grid.vessels().iter().map(|v| v.len()).collect();
        assert_eq!(lengths, STANDARD_ROSTER.to_vec());
        for row in grid.dimensions().iter_coordinates() {
            for c in row {
                assert!(!grid.is_marked(&c));
            }
        }
    }

    #[test]
    fn impossible_roster_is_exhausted() {
        let mut rng = StdRng::seed_from_u64(11);
        let placer = FleetPlacer::new(&[3, 3], 2)
            .unwrap()
            .with_attempt_budget(50)
            .with_board_limit(4);
        assert!(placer.try_place(Side::Player, &mut rng).is_none());
        assert_eq!(
            placer.place(Side::Player, &mut rng).unwrap_err(),
            PlacementError::Exhausted {
                boards: 4,
                attempts: 50
            }
        );
    }

    #[test]
    fn same_seed_same_board() {
        let placer = FleetPlacer::new(&STANDARD_ROSTER, 6).unwrap();
        let a = placer
            .place(Side::Player, &mut StdRng::seed_from_u64(99))
            .unwrap();
        let b = placer
            .place(Side::Player, &mut StdRng::seed_from_u64(99))
            .unwrap();
        assert_eq!(a.render(true), b.render(true));
    }
}
