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
//! Sea Battle: the Battleship variant played on a small square board where vessels may
//! not touch each other, not even diagonally.
//!
//! [`setup::FleetPlacer`] builds a [`board::Grid`] per side with a random, legal fleet.
//! [`game::TurnResolver`] then routes the shots chosen by each [`actor::Actor`] to the
//! opposing grid until one fleet is gone.

pub mod actor;
pub mod board;
pub mod config;
pub mod game;
pub mod setup;
pub mod ships;

pub use crate::{
    board::{Coordinate, Grid, ShotOutcome},
    game::{Side, TurnResolver},
};
