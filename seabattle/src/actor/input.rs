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
use std::io::{self, BufRead, Write};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::Coordinate;

/// Why a line typed by the player is not a shot.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum InputError {
    /// The line did not have exactly two parts.
    #[error(" Type in 2 coordinates in 'row col' style ")]
    TokenCount(usize),
    /// One of the parts was not a number.
    #[error(" Coordinates must be digits ")]
    NotDigits(String),
    /// One of the numbers does not fit on any board.
    #[error(" Coordinate {0} is too large ")]
    TooLarge(String),
}

/// Parse a shot typed as `row col`, both 1-indexed. A comma may separate the two
/// numbers instead of whitespace.
pub fn parse_shot(line: &str) -> Result<Coordinate, InputError> {
    static SHOT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<col>[0-9]+)$").unwrap()
    });
    static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*,\s*|\s+").unwrap());

    let line = line.trim();
    let captures = match SHOT.captures(line) {
        Some(captures) => captures,
        None => {
            let tokens: Vec<&str> = SEPARATOR.split(line).filter(|t| !t.is_empty()).collect();
            return Err(match tokens.len() {
                2 => match tokens.iter().find(|t| !t.bytes().all(|b| b.is_ascii_digit())) {
                    Some(bad) => InputError::NotDigits(bad.to_string()),
                    // Two numbers around a doubled separator, as in `1,,2`.
                    None => InputError::TokenCount(SEPARATOR.split(line).count()),
                },
                n => InputError::TokenCount(n),
            });
        }
    };
    let number = |name: &str| -> Result<i32, InputError> {
        let text = &captures[name];
        text.parse::<i32>()
            .map_err(|_| InputError::TooLarge(text.to_owned()))
    };
    let row = number("row")?;
    let col = number("col")?;
    Ok(Coordinate::new(col - 1, row - 1))
}

/// Helper to read input from the player. Prompts and complaints about malformed lines
/// go to `write`.
#[derive(Debug)]
pub struct InputReader<B, W> {
    read: B,
    write: W,
    buf: String,
}

impl<B, W> InputReader<B, W> {
    pub fn new(read: B, write: W) -> Self {
        Self {
            read,
            write,
            buf: String::new(),
        }
    }
}

impl<B: BufRead, W: Write> InputReader<B, W> {
    /// Repeatedly prompt for a shot until a well-formed one is typed. Whether the shot
    /// lands on the board is up to the board.
    pub fn read_shot(&mut self, prompt: &str) -> io::Result<Coordinate> {
        loop {
            self.read_line(prompt)?;
            match parse_shot(&self.buf) {
                Ok(coord) => return Ok(coord),
                Err(err) => writeln!(self.write, "{}", err)?,
            }
        }
    }

    /// Print the prompt, clear the string buffer and read a line. Running out of input
    /// is reported as [`io::ErrorKind::UnexpectedEof`].
    fn read_line(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.write, "{} ", prompt)?;
        self.write.flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            writeln!(self.write)?;
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn first_number_is_the_row() {
        assert_eq!(parse_shot("2 5"), Ok(Coordinate::new(4, 1)));
        assert_eq!(parse_shot("  1\t1 "), Ok(Coordinate::new(0, 0)));
        assert_eq!(parse_shot("3,4"), Ok(Coordinate::new(3, 2)));
    }

    #[test]
    fn zero_is_parsed_and_left_to_the_board() {
        assert_eq!(parse_shot("0 1"), Ok(Coordinate::new(0, -1)));
    }

    #[test]
    fn malformed_lines_are_rejected() {
        assert_eq!(parse_shot(""), Err(InputError::TokenCount(0)));
        assert_eq!(parse_shot("1"), Err(InputError::TokenCount(1)));
        assert_eq!(parse_shot("1 2 3"), Err(InputError::TokenCount(3)));
        assert_eq!(parse_shot("a 2"), Err(InputError::NotDigits("a".into())));
        assert_eq!(parse_shot("1 -2"), Err(InputError::NotDigits("-2".into())));
        assert_eq!(
            parse_shot("99999999999 1"),
            Err(InputError::TooLarge("99999999999".into()))
        );
    }

    #[test]
    fn doubled_separator_is_a_token_count_error() {
        assert_eq!(parse_shot("1,,2"), Err(InputError::TokenCount(3)));
        assert_eq!(parse_shot("1 , , 2"), Err(InputError::TokenCount(3)));
    }

    #[test]
    fn reader_skips_bad_lines() {
        let mut reader = InputReader::new(Cursor::new("nope\n1 2 3\n4 6\n"), io::sink());
        assert_eq!(reader.read_shot(">").unwrap(), Coordinate::new(5, 3));
    }

    #[test]
    fn reader_writes_prompts_and_complaints() {
        let mut reader = InputReader::new(Cursor::new("1,,2\n3 4\n"), Vec::new());
        assert_eq!(reader.read_shot(">").unwrap(), Coordinate::new(3, 2));
        let out = String::from_utf8(reader.write).unwrap();
        assert_eq!(out, ">  Type in 2 coordinates in 'row col' style \n> ");
    }

    #[test]
    fn reader_reports_end_of_input() {
        let mut reader = InputReader::new(Cursor::new("x y\n"), Vec::new());
        let err = reader.read_shot(">").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        let out = String::from_utf8(reader.write).unwrap();
        assert_eq!(out, ">  Coordinates must be digits \n> \n");
    }
}
