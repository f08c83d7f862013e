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
//! Dimensions of the square board.
use std::{borrow::Borrow, convert::TryFrom};

use rand::{distributions::Distribution, Rng};

use crate::board::Coordinate;

/// Offsets of the 3x3 block centered on a cell, the center included.
static NEAR: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Square dimensions shared by both players' boards.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SquareDimensions {
    /// Number of cells along each side of the board.
    size: i32,
}

impl SquareDimensions {
    /// Create new [`SquareDimensions`] with the given side length.
    /// Panics if `size` is 0 or does not fit a [`Coordinate`] component.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Some(dim) => dim,
            None => panic!("SquareDimensions must be in 1..={}, got {}", i32::MAX, size),
        }
    }

    /// Create new [`SquareDimensions`] with the given side length.
    /// Returns `None` if `size` is 0 or does not fit a [`Coordinate`] component.
    pub fn try_new(size: usize) -> Option<Self> {
        match i32::try_from(size) {
            Ok(size) if size > 0 => Some(Self { size }),
            _ => None,
        }
    }

    /// Get the side length of these [`SquareDimensions`].
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Compute the total number of cells.
    pub fn total_size(&self) -> usize {
        self.size() * self.size()
    }

    /// Returns true if the coordinate lies on the board.
    #[inline]
    pub fn contains<B: Borrow<Coordinate>>(&self, coord: B) -> bool {
        let c = coord.borrow();
        (0..self.size).contains(&c.x) && (0..self.size).contains(&c.y)
    }

    /// Convert a coordinate to a linear index. Returns `None` if the coordinate is out
    /// of bounds.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.y as usize * self.size() + coord.x as usize)
        } else {
            None
        }
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let size = self.size;
        (0..size).map(move |y| (0..size).map(move |x| Coordinate::new(x, y)))
    }

    /// Iterate the in-bounds cells of the 3x3 block around `coord`, `coord` itself
    /// included. Out-of-bounds centers still yield their in-bounds neighbors.
    pub fn surrounding(self, coord: Coordinate) -> impl Iterator<Item = Coordinate> {
        NEAR.iter()
            .map(move |&(dx, dy)| coord.offset(dx, dy))
            .filter(move |c| self.contains(c))
    }

    /// Returns true if the two coordinates are the same cell or touch, including
    /// diagonally.
    pub fn is_adjacent(&self, c1: &Coordinate, c2: &Coordinate) -> bool {
        (c1.x - c2.x).abs() <= 1 && (c1.y - c2.y).abs() <= 1
    }
}

impl Default for SquareDimensions {
    /// The classic Sea Battle board, 6x6.
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DIMENSION)
    }
}

impl Distribution<Coordinate> for SquareDimensions {
    /// Sample a coordinate uniformly from the cells of the board.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
        Coordinate::new(rng.gen_range(0, self.size), rng.gen_range(0, self.size))
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn zero_size_is_rejected() {
        assert!(SquareDimensions::try_new(0).is_none());
        assert_eq!(SquareDimensions::try_new(6).map(|d| d.size()), Some(6));
    }

    #[test]
    fn linearize_rejects_negative_and_large() {
        let dim = SquareDimensions::new(6);
        assert_eq!(dim.try_linearize(&Coordinate::new(-1, 0)), None);
        assert_eq!(dim.try_linearize(&Coordinate::new(0, 6)), None);
        assert_eq!(dim.try_linearize(&Coordinate::new(2, 1)), Some(8));
    }

    #[test]
    fn surrounding_is_clipped_at_corners() {
        let dim = SquareDimensions::new(6);
        assert_eq!(dim.surrounding(Coordinate::new(0, 0)).count(), 4);
        assert_eq!(dim.surrounding(Coordinate::new(3, 3)).count(), 9);
        assert_eq!(dim.surrounding(Coordinate::new(5, 2)).count(), 6);
    }

    #[test]
    fn samples_stay_in_bounds() {
        let dim = SquareDimensions::new(3);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(dim.contains(rng.sample(&dim)));
        }
    }
}
