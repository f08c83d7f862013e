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
use std::{convert::TryFrom, iter::FusedIterator};

use crate::board::Coordinate;

/// Iterator over the cells of a straight vessel. Each cell is computed from the start
/// on demand, so no cell past the last one is ever built.
#[derive(Debug, Clone)]
pub struct LineCells {
    start: Coordinate,
    step: (i32, i32),
    index: usize,
    len: usize,
}

impl LineCells {
    pub(super) fn new(start: Coordinate, step: (i32, i32), len: usize) -> Self {
        Self {
            start,
            step,
            index: 0,
            len,
        }
    }
}

impl Iterator for LineCells {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        if self.index >= self.len {
            return None;
        }
        let i = i32::try_from(self.index).unwrap_or(i32::MAX);
        let cell = self
            .start
            .offset(self.step.0.saturating_mul(i), self.step.1.saturating_mul(i));
        self.index += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LineCells {}
impl FusedIterator for LineCells {}
