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
//! Errors used by the [`Grid`][crate::board::Grid].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{board::Coordinate, ships::Vessel};

/// Reason why a vessel could not be placed where it was asked to go.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// At least one cell of the vessel was off the board.
    #[error("the vessel does not fit on the board")]
    OutOfBounds,
    /// At least one cell of the vessel was occupied by, or touches, another vessel.
    #[error("the vessel overlaps or touches another vessel")]
    AlreadyMarked,
}

/// Error caused when attempting to place a vessel in an invalid position. Hands the
/// rejected vessel back so the caller can reuse it.
#[derive(Error)]
#[error("could not place vessel at {cell}")]
pub struct ShipPlacementError {
    #[source]
    reason: CannotPlaceReason,
    /// First cell of the vessel that failed the check.
    cell: Coordinate,
    vessel: Vessel,
}

impl Debug for ShipPlacementError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl ShipPlacementError {
    pub(super) fn new(reason: CannotPlaceReason, cell: Coordinate, vessel: Vessel) -> Self {
        Self {
            reason,
            cell,
            vessel,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// The cell that could not be used.
    pub fn cell(&self) -> Coordinate {
        self.cell
    }

    /// Get a reference to the vessel that was not placed.
    pub fn vessel(&self) -> &Vessel {
        &self.vessel
    }

    /// Extract the vessel from this error.
    pub fn into_vessel(self) -> Vessel {
        self.vessel
    }
}

/// Reason why a particular cell could not be shot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The cell selected was out of bounds on the board.
    #[error("Out of board")]
    OutOfBounds,

    /// A shot has already been fired at that cell, or it is known to be empty water
    /// around a destroyed vessel.
    #[error("Wrong dot")]
    AlreadyTargeted,
}

/// Error returned when trying to shoot a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("{reason}: {coord}")]
pub struct ShotError {
    /// Reason why the cell could not be shot.
    reason: CannotShootReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified cell.
    pub(super) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the shot cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}
