//! Text notation for squares, actions and boards.
//!
//! Squares are `a1`..`h8` (file = column, rank = row + 1). Actions are
//! written `step a2 a3`, `push e2 e3 e4` and `pull e2 e3 e1` with the squares
//! of the attacker, the victim and the destination. Boards use a FEN-like
//! string of eight `/`-separated ranks from rank 8 down to rank 1.

use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::{board::Board, types::*};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("invalid square '{0}'")]
    BadSquare(String),
    #[error("invalid action '{0}'")]
    BadAction(String),
    #[error("invalid board: {0}")]
    BadBoard(String),
    #[error("invalid side '{0}'")]
    BadSide(String),
}

/// Board notation of the standard opening position.
pub const START_BOARD: &str = "rrrrrrrr/cdhmehdc/8/8/8/8/CDHMEHDC/RRRRRRRR";

pub fn parse_square(s: &str) -> Result<Pos, NotationError> {
    let b = s.as_bytes();
    if b.len() != 2 || !(b'a'..=b'h').contains(&b[0]) || !(b'1'..=b'8').contains(&b[1]) {
        return Err(NotationError::BadSquare(s.to_string()));
    }
    Ok(Pos::new((b[1] - b'1') as i8, (b[0] - b'a') as i8))
}

/// Parses an action. A bare pair of squares is read as a step.
pub fn parse_action(s: &str) -> Result<Action, NotationError> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    let squares = |names: &[&str]| -> Result<Vec<Pos>, NotationError> {
        names.iter().map(|n| parse_square(n)).collect()
    };
    match parts.as_slice() {
        ["step", a, b] | [a, b] => {
            let p = squares(&[*a, *b])?;
            Ok(Action::step(p[0], p[1]))
        }
        ["push", a, b, c] => {
            let p = squares(&[*a, *b, *c])?;
            Ok(Action::push(p[0], p[1], p[2]))
        }
        ["pull", a, b, c] => {
            let p = squares(&[*a, *b, *c])?;
            Ok(Action::pull(p[0], p[1], p[2]))
        }
        _ => Err(NotationError::BadAction(s.to_string())),
    }
}

pub fn format_action(action: Action) -> String {
    match action {
        Action::Step { from, to } => format!("step {from} {to}"),
        Action::Push {
            attacker,
            victim,
            dest,
        } => format!("push {attacker} {victim} {dest}"),
        Action::Pull {
            attacker,
            victim,
            dest,
        } => format!("pull {attacker} {victim} {dest}"),
    }
}

pub fn parse_board(s: &str) -> Result<Board, NotationError> {
    let ranks: Vec<&str> = s.trim().split('/').collect();
    if ranks.len() != BOARD_SIZE as usize {
        return Err(NotationError::BadBoard(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = Board::empty();
    for (idx, rank) in ranks.iter().enumerate() {
        let row = BOARD_SIZE - 1 - idx as i8;
        let mut col: i8 = 0;
        for ch in rank.chars() {
            if let Some(d) = ch.to_digit(10) {
                if d as i8 > BOARD_SIZE - col {
                    return Err(NotationError::BadBoard(format!(
                        "rank {} has more than 8 files",
                        row + 1
                    )));
                }
                col += d as i8;
            } else {
                let piece = Piece::from_char(ch).ok_or_else(|| {
                    NotationError::BadBoard(format!("unknown piece '{ch}' on rank {}", row + 1))
                })?;
                if col >= BOARD_SIZE {
                    return Err(NotationError::BadBoard(format!(
                        "rank {} has more than 8 files",
                        row + 1
                    )));
                }
                board.place(Pos::new(row, col), piece);
                col += 1;
            }
        }
        if col != BOARD_SIZE {
            return Err(NotationError::BadBoard(format!(
                "rank {} does not span 8 files",
                row + 1
            )));
        }
    }
    Ok(board)
}

pub fn board_to_notation(board: &Board) -> String {
    let mut ranks = Vec::with_capacity(BOARD_SIZE as usize);
    for row in (0..BOARD_SIZE).rev() {
        let mut rank = String::new();
        let mut empty = 0;
        for col in 0..BOARD_SIZE {
            match board.piece_at(Pos::new(row, col)) {
                Some(pc) => {
                    if empty > 0 {
                        rank.push_str(&empty.to_string());
                        empty = 0;
                    }
                    rank.push(pc.to_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            rank.push_str(&empty.to_string());
        }
        ranks.push(rank);
    }
    ranks.join("/")
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_action(*self))
    }
}

impl FromStr for Action {
    type Err = NotationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_action(s)
    }
}

impl FromStr for Pos {
    type Err = NotationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_square(s)
    }
}

impl FromStr for Board {
    type Err = NotationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_board(s)
    }
}

impl FromStr for Side {
    type Err = NotationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gold" | "g" => Ok(Side::Gold),
            "silver" | "s" => Ok(Side::Silver),
            _ => Err(NotationError::BadSide(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
