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
//! Game constants and the settings a game is started with.

/// Side length of the classic Sea Battle board.
pub const DEFAULT_DIMENSION: usize = 6;

/// Largest board the text interface supports.
pub const MAX_DIMENSION: usize = 26;

/// Vessel lengths every side starts with: one of three cells, two of two and four
/// single-cell boats.
pub const STANDARD_ROSTER: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Total placement attempts allowed for one whole-board arrangement.
pub const PLACEMENT_ATTEMPT_BUDGET: usize = 2000;

/// Number of whole-board arrangements tried before giving up.
pub const BOARD_RETRY_LIMIT: usize = 1000;

/// Settings for a single game.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameConfig {
    /// Side length shared by both boards.
    pub dimension: usize,
    /// Lengths of the vessels each side places.
    pub roster: Vec<usize>,
    /// Attempts per whole-board arrangement.
    pub attempt_budget: usize,
    /// Whole-board arrangements tried before placement fails.
    pub board_limit: usize,
    /// Seed for every random choice in the game. Chosen from entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            roster: STANDARD_ROSTER.to_vec(),
            attempt_budget: PLACEMENT_ATTEMPT_BUDGET,
            board_limit: BOARD_RETRY_LIMIT,
            seed: None,
        }
    }
}
