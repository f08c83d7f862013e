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
//! Types that make up the game board.

use std::{collections::HashSet, fmt};

use log::{debug, trace};

use crate::{game::Side, ships::Vessel};

use self::grid::Surface;
pub use self::{
    coordinate::Coordinate,
    dimensions::SquareDimensions,
    errors::{CannotPlaceReason, CannotShootReason, ShipPlacementError, ShotError},
    grid::CellState,
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;

/// Result of a shot on a single player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit a vessel but did not destroy it.
    Hit,
    /// The shot hit the last intact section of a vessel.
    Destroyed,
}

impl ShotOutcome {
    /// Whether the shooter gets to fire again. Anything but a miss keeps the turn.
    pub fn grants_repeat(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            ShotOutcome::Miss => "Miss!",
            ShotOutcome::Hit => "Hit!",
            ShotOutcome::Destroyed => "Destruction!",
        })
    }
}

/// Represents a single player's board, including their vessels and their side of the
/// ocean.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Player the board belongs to.
    owner: Side,

    /// Vessels in the order they were placed.
    vessels: Vec<Vessel>,

    /// Cells that can no longer be used. During setup this holds vessels and their
    /// exclusion buffers, during play it holds every cell that was shot or revealed.
    marked: HashSet<Coordinate>,

    /// What each cell shows.
    surface: Surface,

    /// Number of destroyed vessels.
    losses: usize,
}

impl Grid {
    /// Create an empty board with `dimension` cells per side.
    /// Panics if `dimension` is 0.
    pub fn new(owner: Side, dimension: usize) -> Self {
        Self::with_dimensions(owner, SquareDimensions::new(dimension))
    }

    /// Create an empty board with `dimension` cells per side.
    /// Returns `None` if `dimension` is 0.
    pub fn try_new(owner: Side, dimension: usize) -> Option<Self> {
        SquareDimensions::try_new(dimension).map(|dim| Self::with_dimensions(owner, dim))
    }

    /// Create an empty board with the given [`SquareDimensions`].
    pub fn with_dimensions(owner: Side, dim: SquareDimensions) -> Self {
        Self {
            owner,
            vessels: Vec::new(),
            marked: HashSet::new(),
            surface: Surface::new(dim),
            losses: 0,
        }
    }

    pub fn owner(&self) -> Side {
        self.owner
    }

    /// Get the [`SquareDimensions`] of this board.
    pub fn dimensions(&self) -> SquareDimensions {
        self.surface.dim
    }

    /// Number of cells along each side.
    pub fn dimension(&self) -> usize {
        self.surface.dim.size()
    }

    /// Vessels on this board, destroyed ones included.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels destroyed so far.
    pub fn losses(&self) -> usize {
        self.losses
    }

    /// Returns true once every vessel on a non-empty board has been destroyed.
    pub fn is_defeated(&self) -> bool {
        !self.vessels.is_empty() && self.losses == self.vessels.len()
    }

    /// Get the state of a cell, or `None` if the coordinate is off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        self.surface.get(coord)
    }

    /// Returns true if the cell can no longer be used for placement or shots.
    pub fn is_marked(&self, coord: &Coordinate) -> bool {
        self.marked.contains(coord)
    }

    pub fn is_out_of_bounds(&self, coord: &Coordinate) -> bool {
        !self.surface.dim.contains(coord)
    }

    /// Attempts to place the vessel. Fails if any of its cells is off the board, taken
    /// by another vessel, or touches another vessel. The board is left untouched on
    /// failure.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), ShipPlacementError> {
        for cell in vessel.occupied_cells() {
            if self.is_out_of_bounds(&cell) {
                return Err(ShipPlacementError::new(
                    CannotPlaceReason::OutOfBounds,
                    cell,
                    vessel,
                ));
            }
            if self.marked.contains(&cell) {
                return Err(ShipPlacementError::new(
                    CannotPlaceReason::AlreadyMarked,
                    cell,
                    vessel,
                ));
            }
        }
        // Already ensured that every cell is valid and free.
        for cell in vessel.occupied_cells() {
            self.surface[cell] = CellState::Ship;
            self.marked.insert(cell);
        }
        let dim = self.surface.dim;
        self.marked
            .extend(vessel.occupied_cells().flat_map(|cell| dim.surrounding(cell)));
        trace!(
            "{:?} placed vessel of length {} at {} ({:?})",
            self.owner,
            vessel.len(),
            vessel.anchor(),
            vessel.orientation()
        );
        self.vessels.push(vessel);
        Ok(())
    }

    /// Forget the exclusion marks left by placement so that only real shots are
    /// tracked once the game starts. Vessels and the display are kept.
    pub fn clear_placement_marks(&mut self) {
        self.marked.clear();
    }

    /// Fire a shot at this board, returning why the shot was rejected or what it did.
    /// The board is left untouched when the shot is rejected.
    pub fn resolve_shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        if self.is_out_of_bounds(&coord) {
            return Err(ShotError::new(CannotShootReason::OutOfBounds, coord));
        }
        if !self.marked.insert(coord) {
            return Err(ShotError::new(CannotShootReason::AlreadyTargeted, coord));
        }

        let idx = match self.vessels.iter().position(|v| v.contains(&coord)) {
            Some(idx) => idx,
            None => {
                self.surface[coord] = CellState::Miss;
                trace!("{:?} board: miss at {}", self.owner, coord);
                return Ok(ShotOutcome::Miss);
            }
        };

        self.vessels[idx].apply_hit();
        self.surface[coord] = CellState::Hit;
        if !self.vessels[idx].is_destroyed() {
            trace!("{:?} board: hit at {}", self.owner, coord);
            return Ok(ShotOutcome::Hit);
        }

        self.losses += 1;
        self.draw_wreckage(idx);
        debug!(
            "{:?} lost a vessel of length {} ({} of {} destroyed)",
            self.owner,
            self.vessels[idx].len(),
            self.losses,
            self.vessels.len()
        );
        debug_assert_eq!(
            self.losses,
            self.vessels.iter().filter(|v| v.is_destroyed()).count()
        );
        Ok(ShotOutcome::Destroyed)
    }

    /// Reveal the water around a destroyed vessel. Those cells become misses and can no
    /// longer be shot; cells already shot keep their state.
    fn draw_wreckage(&mut self, idx: usize) {
        let dim = self.surface.dim;
        let around: Vec<Coordinate> = self.vessels[idx]
            .occupied_cells()
            .flat_map(|cell| dim.surrounding(cell))
            .collect();
        for cell in around {
            if self.marked.insert(cell) {
                self.surface[cell] = CellState::Miss;
            }
        }
    }

    /// Get a printable view of the board. Intact vessels are hidden unless `reveal` is
    /// set.
    pub fn view(&self, reveal: bool) -> BoardView {
        BoardView { grid: self, reveal }
    }

    /// Render the board as text. Intact vessels are hidden unless `reveal` is set.
    pub fn render(&self, reveal: bool) -> String {
        self.view(reveal).to_string()
    }
}

/// Display helper that draws a [`Grid`] with 1-indexed row and column labels.
#[derive(Debug, Copy, Clone)]
pub struct BoardView<'a> {
    grid: &'a Grid,
    reveal: bool,
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(" ")?;
        for col in 1..=self.grid.dimension() {
            write!(f, " | {}", col)?;
        }
        f.write_str(" |")?;
        for (row, cells) in self.grid.surface.rows().enumerate() {
            write!(f, "\n{} |", row + 1)?;
            for cell in cells {
                write!(f, " {} |", cell.symbol(self.reveal))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::Orientation;

    fn vessel(x: i32, y: i32, len: usize, orientation: Orientation) -> Vessel {
        Vessel::new(Coordinate::new(x, y), len, orientation)
    }

    #[test]
    fn diagonal_neighbor_is_rejected() {
        let mut grid = Grid::new(Side::Player, 6);
        grid.place_vessel(vessel(0, 0, 3, Orientation::Horizontal))
            .unwrap();
        let err = grid
            .place_vessel(vessel(1, 1, 1, Orientation::Horizontal))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyMarked);
        assert_eq!(grid.vessels().len(), 1);
    }

    #[test]
    fn vessel_sticking_out_is_rejected_without_changes() {
        let mut grid = Grid::new(Side::Player, 6);
        let err = grid
            .place_vessel(vessel(4, 0, 3, Orientation::Horizontal))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
        assert_eq!(err.cell(), Coordinate::new(6, 0));
        assert_eq!(err.into_vessel().len(), 3);
        assert!(grid.vessels().is_empty());
        assert_eq!(grid.cell(Coordinate::new(4, 0)), Some(CellState::Empty));
        assert!(!grid.is_marked(&Coordinate::new(4, 0)));
    }

    #[test]
    fn vessel_at_integer_limit_is_out_of_bounds() {
        let mut grid = Grid::new(Side::Player, 6);
        let err = grid
            .place_vessel(vessel(i32::MAX, 0, 1, Orientation::Horizontal))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
        assert_eq!(err.cell(), Coordinate::new(i32::MAX, 0));
        assert_eq!(err.vessel().anchor(), Coordinate::new(i32::MAX, 0));

        let err = grid
            .place_vessel(vessel(0, i32::MAX - 1, 3, Orientation::Vertical))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
        let err = grid
            .place_vessel(vessel(i32::MIN, i32::MIN, 2, Orientation::Horizontal))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
        assert!(grid.vessels().is_empty());
    }

    #[test]
    fn try_new_rejects_empty_board() {
        assert!(Grid::try_new(Side::Computer, 0).is_none());
        let grid = Grid::try_new(Side::Computer, 4).unwrap();
        assert_eq!(grid.owner(), Side::Computer);
        assert_eq!(grid.dimension(), 4);
        assert!(!grid.is_defeated());
    }

    #[test]
    fn placement_error_names_the_cell_once() {
        use std::error::Error as _;

        let mut grid = Grid::new(Side::Player, 6);
        let err = grid
            .place_vessel(vessel(5, 5, 2, Orientation::Vertical))
            .unwrap_err();
        assert_eq!(err.to_string(), "could not place vessel at (5, 6)");
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("the vessel does not fit on the board"));
    }

    #[test]
    fn placement_marks_buffer_but_not_display() {
        let mut grid = Grid::new(Side::Player, 6);
        grid.place_vessel(vessel(2, 2, 1, Orientation::Vertical))
            .unwrap();
        assert!(grid.is_marked(&Coordinate::new(3, 3)));
        assert_eq!(grid.cell(Coordinate::new(3, 3)), Some(CellState::Empty));
        assert_eq!(grid.cell(Coordinate::new(2, 2)), Some(CellState::Ship));

        grid.clear_placement_marks();
        assert!(!grid.is_marked(&Coordinate::new(3, 3)));
        assert!(!grid.is_marked(&Coordinate::new(2, 2)));
        assert_eq!(grid.cell(Coordinate::new(2, 2)), Some(CellState::Ship));
        assert_eq!(grid.vessels().len(), 1);
    }

    #[test]
    fn single_cell_vessel_is_destroyed_in_one_shot() {
        let mut grid = Grid::new(Side::Computer, 6);
        grid.place_vessel(vessel(2, 2, 1, Orientation::Horizontal))
            .unwrap();
        grid.clear_placement_marks();
        assert_eq!(
            grid.resolve_shot(Coordinate::new(2, 2)),
            Ok(ShotOutcome::Destroyed)
        );
        assert_eq!(grid.losses(), 1);
        assert!(grid.is_defeated());
    }

    #[test]
    fn two_cell_vessel_is_hit_then_destroyed() {
        let mut grid = Grid::new(Side::Computer, 6);
        grid.place_vessel(vessel(3, 3, 2, Orientation::Vertical))
            .unwrap();
        grid.clear_placement_marks();
        assert_eq!(grid.resolve_shot(Coordinate::new(3, 3)), Ok(ShotOutcome::Hit));
        assert_eq!(grid.losses(), 0);
        assert_eq!(
            grid.resolve_shot(Coordinate::new(3, 4)),
            Ok(ShotOutcome::Destroyed)
        );
        assert_eq!(grid.losses(), 1);
    }

    #[test]
    fn out_of_bounds_shot_is_rejected() {
        let mut grid = Grid::new(Side::Computer, 6);
        let err = grid.resolve_shot(Coordinate::new(10, 10)).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::OutOfBounds);
        let err = grid.resolve_shot(Coordinate::new(-1, 0)).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::OutOfBounds);
    }

    #[test]
    fn repeated_shot_is_rejected() {
        let mut grid = Grid::new(Side::Computer, 6);
        assert_eq!(grid.resolve_shot(Coordinate::new(0, 5)), Ok(ShotOutcome::Miss));
        let err = grid.resolve_shot(Coordinate::new(0, 5)).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::AlreadyTargeted);
        assert_eq!(err.coord(), Coordinate::new(0, 5));
        assert_eq!(grid.cell(Coordinate::new(0, 5)), Some(CellState::Miss));
    }

    #[test]
    fn wreckage_contour_keeps_hits_and_blocks_water() {
        let mut grid = Grid::new(Side::Computer, 6);
        grid.place_vessel(vessel(0, 0, 2, Orientation::Horizontal))
            .unwrap();
        grid.clear_placement_marks();
        grid.resolve_shot(Coordinate::new(0, 0)).unwrap();
        grid.resolve_shot(Coordinate::new(1, 0)).unwrap();

        assert_eq!(grid.cell(Coordinate::new(0, 0)), Some(CellState::Hit));
        assert_eq!(grid.cell(Coordinate::new(1, 0)), Some(CellState::Hit));
        for &(x, y) in &[(2, 0), (0, 1), (1, 1), (2, 1)] {
            let c = Coordinate::new(x, y);
            assert_eq!(grid.cell(c), Some(CellState::Miss), "{}", c);
            assert_eq!(
                grid.resolve_shot(c).unwrap_err().reason(),
                CannotShootReason::AlreadyTargeted
            );
        }
        assert_eq!(grid.cell(Coordinate::new(3, 0)), Some(CellState::Empty));
    }

    #[test]
    fn render_hides_vessels_unless_revealed() {
        let mut grid = Grid::new(Side::Player, 3);
        grid.place_vessel(vessel(0, 0, 2, Orientation::Horizontal))
            .unwrap();
        grid.clear_placement_marks();
        grid.resolve_shot(Coordinate::new(0, 0)).unwrap();
        grid.resolve_shot(Coordinate::new(2, 2)).unwrap();

        assert_eq!(
            grid.render(true),
            "  | 1 | 2 | 3 |\n1 | X | ■ | O |\n2 | O | O | O |\n3 | O | O | . |"
        );
        assert_eq!(
            grid.render(false),
            "  | 1 | 2 | 3 |\n1 | X | O | O |\n2 | O | O | O |\n3 | O | O | . |"
        );
    }
}
