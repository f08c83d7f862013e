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
//! Sources of shots: the human at the keyboard or the random computer opponent.
use std::io::{self, BufRead, Write};

use rand::{rngs::StdRng, Rng};

use crate::{
    board::{Coordinate, SquareDimensions},
    game::Side,
};

pub use self::input::{parse_shot, InputError, InputReader};

mod input;

/// Prompt shown to the human player.
pub const SHOT_PROMPT: &str = "Make Your shoot:";

/// Picks shots uniformly at random over the whole board. It keeps no memory of earlier
/// shots; repeats are rejected by the board and simply drawn again.
#[derive(Debug, Clone)]
pub struct RandomShooter {
    side: Side,
    dim: SquareDimensions,
    rng: StdRng,
}

impl RandomShooter {
    pub fn new(side: Side, dim: SquareDimensions, rng: StdRng) -> Self {
        Self { side, dim, rng }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Draw the next target.
    pub fn pick(&mut self) -> Coordinate {
        self.rng.sample(&self.dim)
    }
}

/// Something that chooses where to shoot.
#[derive(Debug)]
pub enum Actor<B, W> {
    /// Reads shots typed by a person.
    Human(InputReader<B, W>),
    /// Shoots at random.
    Automated(RandomShooter),
}

impl<B: BufRead, W: Write> Actor<B, W> {
    /// Ask for the next target. The coordinate is not validated against any board.
    pub fn request(&mut self) -> io::Result<Coordinate> {
        match self {
            Actor::Human(input) => input.read_shot(SHOT_PROMPT),
            Actor::Automated(shooter) => Ok(shooter.pick()),
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Actor::Human(_))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use rand::SeedableRng;

    use super::*;

    #[test]
    fn automated_actor_stays_on_the_board() {
        let dim = SquareDimensions::new(4);
        let mut actor: Actor<io::Empty, io::Sink> = Actor::Automated(RandomShooter::new(
            Side::Computer,
            dim,
            StdRng::seed_from_u64(5),
        ));
        assert!(!actor.is_human());
        if let Actor::Automated(shooter) = &actor {
            assert_eq!(shooter.side(), Side::Computer);
        }
        for _ in 0..100 {
            assert!(dim.contains(actor.request().unwrap()));
        }
    }

    #[test]
    fn human_actor_reads_row_then_column() {
        let mut actor = Actor::Human(InputReader::new(Cursor::new("6 1\n"), io::sink()));
        assert!(actor.is_human());
        assert_eq!(actor.request().unwrap(), Coordinate::new(0, 5));
    }
}
