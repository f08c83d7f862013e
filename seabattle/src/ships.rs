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
//! Types used for defining vessels and the cells they cover.
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::Coordinate;

pub use self::linear::LineCells;

mod linear;

/// Placement orientation of a vessel.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    /// Cells extend along `x` from the anchor.
    Horizontal,
    /// Cells extend along `y` from the anchor.
    Vertical,
}

impl Orientation {
    /// Unit step from one cell of a vessel to the next.
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

impl Distribution<Orientation> for Standard {
    /// Pick either orientation with equal probability.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A straight-line vessel. Its health starts at its length and drops by one for every
/// section that is hit.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Vessel {
    /// First cell of the vessel.
    anchor: Coordinate,
    len: usize,
    orientation: Orientation,
    health: usize,
}

impl Vessel {
    /// Construct a vessel of the given length. Panics if `len` is 0.
    pub fn new(anchor: Coordinate, len: usize, orientation: Orientation) -> Self {
        assert!(len > 0, "vessels must have at least one cell");
        Self {
            anchor,
            len,
            orientation,
            health: len,
        }
    }

    /// The cell the vessel extends from.
    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    /// Number of cells the vessel covers.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of sections not yet hit.
    pub fn health(&self) -> usize {
        self.health
    }

    /// A vessel is destroyed once every section has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    /// Iterate the cells of the vessel, starting from the anchor.
    pub fn occupied_cells(&self) -> LineCells {
        LineCells::new(self.anchor, self.orientation.step(), self.len)
    }

    /// Returns true if `coord` is one of the vessel's cells.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        let (dx, dy) = self.orientation.step();
        let (along, across) = if dx != 0 {
            (
                i64::from(coord.x) - i64::from(self.anchor.x),
                i64::from(coord.y) - i64::from(self.anchor.y),
            )
        } else {
            (
                i64::from(coord.y) - i64::from(self.anchor.y),
                i64::from(coord.x) - i64::from(self.anchor.x),
            )
        };
        across == 0 && along >= 0 && (along as u64) < self.len as u64
    }

    /// Record a hit on one of the vessel's sections. The caller is responsible for
    /// checking the section belongs to this vessel and was not hit before.
    pub fn apply_hit(&mut self) {
        debug_assert!(self.health > 0, "hit on a destroyed vessel");
        self.health = self.health.saturating_sub(1);
    }
}
