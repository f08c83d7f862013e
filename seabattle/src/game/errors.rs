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
use thiserror::Error;

use crate::{board::ShotError, game::Side};

/// Reason a turn could not be taken. None of these change the state of the game.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum TurnError {
    /// The game already has a winner.
    #[error("the game is already over, {0} won")]
    GameOver(Side),

    /// The given side attempted to shoot when it was not its turn.
    #[error("{0} attempted to shoot out of turn")]
    OutOfTurn(Side),

    /// The opponent's board rejected the shot.
    #[error(transparent)]
    Shot(#[from] ShotError),
}
