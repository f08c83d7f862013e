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
//! Defines the display surface of a player's board.

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::board::{Coordinate, SquareDimensions};

/// What a single cell of the board shows.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellState {
    /// Nothing known about the cell.
    Empty,
    /// An intact section of a vessel.
    Ship,
    /// A section of a vessel that was shot.
    Hit,
    /// A shot that missed, or water next to a destroyed vessel.
    Miss,
}

impl CellState {
    /// Symbol used when printing the board. Intact vessels are only drawn when
    /// `reveal` is set.
    pub fn symbol(self, reveal: bool) -> char {
        match self {
            CellState::Empty => 'O',
            CellState::Ship if reveal => '■',
            CellState::Ship => 'O',
            CellState::Hit => 'X',
            CellState::Miss => '.',
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Empty
    }
}

/// Cell-state matrix of a single board.
#[derive(Debug, Clone)]
pub(super) struct Surface {
    /// Dimensions of this board.
    pub(super) dim: SquareDimensions,
    /// Cells that make up this board, row by row.
    pub(super) cells: Box<[CellState]>,
}

impl Surface {
    pub(super) fn new(dim: SquareDimensions) -> Self {
        let cells = vec![CellState::default(); dim.total_size()].into_boxed_slice();
        Self { dim, cells }
    }

    /// Get the state of the cell at the given [`Coordinate`].
    pub(super) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<CellState> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
            .copied()
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut CellState> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Iterate the rows of the surface.
    pub(super) fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.dim.size())
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Surface {
    type Output = CellState;

    fn index(&self, coord: B) -> &Self::Output {
        let idx = self.dim.try_linearize(coord.borrow()).expect("coordinate out of bounds");
        &self.cells[idx]
    }
}

impl<B: Borrow<Coordinate>> IndexMut<B> for Surface {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
