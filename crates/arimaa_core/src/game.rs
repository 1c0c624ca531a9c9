//! Rules engine: turn state, action validation and victory detection.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{info, trace};

use crate::{
    board::Board,
    movegen::{generate_within, has_any_action, rabbit_retreats},
    types::*,
};

/// Why a single action was rejected. The board is never modified when an
/// action is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("no piece on {0}")]
    NoPiece(Pos),
    #[error("the piece on {0} does not belong to the side to move")]
    WrongSide(Pos),
    #[error("the piece on {0} is not an enemy piece")]
    NotEnemy(Pos),
    #[error("{0} is occupied")]
    Occupied(Pos),
    #[error("{0} and {1} are not adjacent")]
    NotAdjacent(Pos, Pos),
    #[error("rabbit on {0} cannot move backward")]
    RabbitBackward(Pos),
    #[error("the piece on {0} is frozen")]
    Frozen(Pos),
    #[error("the piece on {attacker} is not stronger than the piece on {victim}")]
    TooWeak { attacker: Pos, victim: Pos },
    #[error("action needs {needed} steps but only {remaining} remain")]
    StepBudget { needed: u8, remaining: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),
    #[error("game over: {0}")]
    GameOver(Outcome),
    #[error("position {0} is off the board")]
    OutOfBounds(Pos),
    #[error("turn incomplete: at least one step must be taken")]
    TurnIncomplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VictoryReason {
    /// A rabbit reached the far edge.
    GoalReached,
    /// The opponent has no rabbits left.
    RabbitsEliminated,
    /// The opponent has no legal action.
    Immobilized,
    /// The opponent resigned.
    Resignation,
}

impl fmt::Display for VictoryReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VictoryReason::GoalReached => "goal reached",
            VictoryReason::RabbitsEliminated => "rabbits eliminated",
            VictoryReason::Immobilized => "opponent immobilized",
            VictoryReason::Resignation => "resignation",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Side,
    pub reason: VictoryReason,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wins by {}", self.winner, self.reason)
    }
}

/// Everything that happened during one completed turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub side: Side,
    pub actions: Vec<Action>,
    /// Pieces removed from traps when the turn ended.
    pub captures: Vec<(Pos, Piece)>,
}

/// A game in progress. Owns the authoritative board and the turn state.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Side,
    steps_taken: u8,
    outcome: Option<Outcome>,
    current: Vec<Action>,
    history: Vec<TurnRecord>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard opening position, Gold to move.
    pub fn new() -> Self {
        Self::from_board(Board::startpos(), Side::Gold)
    }

    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        Self {
            board,
            side_to_move,
            steps_taken: 0,
            outcome: None,
            current: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only snapshot of the grid, indexed `[row][col]`.
    pub fn board_state(&self) -> [[Option<Piece>; 8]; 8] {
        self.board.grid()
    }

    pub fn piece_at(&self, pos: Pos) -> Result<Option<Piece>, RuleError> {
        check_bounds(pos)?;
        Ok(self.board.piece_at(pos))
    }

    pub fn current_player(&self) -> Side {
        self.side_to_move
    }

    pub fn steps_taken(&self) -> u8 {
        self.steps_taken
    }

    pub fn steps_remaining(&self) -> u8 {
        STEPS_PER_TURN - self.steps_taken
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Completed turns, oldest first.
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Actions already played in the turn in progress.
    pub fn current_turn(&self) -> &[Action] {
        &self.current
    }

    /// Number of the turn in progress, starting at 1.
    pub fn turn_number(&self) -> usize {
        self.history.len() + 1
    }

    /// Actions the side to move may still play this turn.
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.is_game_over() {
            return Vec::new();
        }
        generate_within(&self.board, self.side_to_move, self.steps_remaining())
    }

    /// Validates `action` without applying it.
    pub fn validate(&self, action: Action) -> Result<(), RuleError> {
        self.ensure_running()?;
        match action {
            Action::Step { from, to } => self.validate_step(from, to),
            Action::Push {
                attacker,
                victim,
                dest,
            } => self.validate_displacement(attacker, victim, dest, victim),
            Action::Pull {
                attacker,
                victim,
                dest,
            } => self.validate_displacement(attacker, victim, dest, attacker),
        }
    }

    /// Validates and plays one action. When the step budget is exhausted the
    /// turn ends automatically, with trap and victory resolution.
    pub fn apply_action(&mut self, action: Action) -> Result<(), RuleError> {
        self.validate(action)?;

        self.board.apply_unchecked(action);
        self.steps_taken += action.cost();
        self.current.push(action);
        trace!(side = %self.side_to_move, ?action, steps = self.steps_taken, "applied action");

        if self.steps_taken == STEPS_PER_TURN {
            self.change_turn();
        }
        Ok(())
    }

    pub fn apply_step(&mut self, from: Pos, to: Pos) -> Result<(), RuleError> {
        self.apply_action(Action::step(from, to))
    }

    pub fn apply_push(&mut self, attacker: Pos, victim: Pos, dest: Pos) -> Result<(), RuleError> {
        self.apply_action(Action::push(attacker, victim, dest))
    }

    pub fn apply_pull(&mut self, attacker: Pos, victim: Pos, dest: Pos) -> Result<(), RuleError> {
        self.apply_action(Action::pull(attacker, victim, dest))
    }

    /// Ends the turn voluntarily. At least one step must have been taken.
    pub fn end_turn(&mut self) -> Result<Option<Outcome>, RuleError> {
        self.ensure_running()?;
        if self.steps_taken == 0 {
            return Err(RuleError::TurnIncomplete);
        }
        self.change_turn();
        Ok(self.outcome)
    }

    /// The side to move gives up.
    pub fn resign(&mut self) -> Result<Outcome, RuleError> {
        self.ensure_running()?;
        let outcome = Outcome {
            winner: self.side_to_move.other(),
            reason: VictoryReason::Resignation,
        };
        info!(%outcome, "game over");
        self.outcome = Some(outcome);
        Ok(outcome)
    }

    fn ensure_running(&self) -> Result<(), RuleError> {
        match self.outcome {
            Some(outcome) => Err(RuleError::GameOver(outcome)),
            None => Ok(()),
        }
    }

    fn validate_step(&self, from: Pos, to: Pos) -> Result<(), RuleError> {
        check_bounds(from)?;
        check_bounds(to)?;
        self.check_budget(1)?;

        let piece = self.board.piece_at(from).ok_or(IllegalMove::NoPiece(from))?;
        if piece.side != self.side_to_move {
            return Err(IllegalMove::WrongSide(from).into());
        }
        if self.board.piece_at(to).is_some() {
            return Err(IllegalMove::Occupied(to).into());
        }
        if !from.is_adjacent(to) {
            return Err(IllegalMove::NotAdjacent(from, to).into());
        }
        if rabbit_retreats(piece, from, to) {
            return Err(IllegalMove::RabbitBackward(from).into());
        }
        if self.board.is_frozen(from) {
            return Err(IllegalMove::Frozen(from).into());
        }
        Ok(())
    }

    /// Shared checks for push and pull. `anchor` is the square `dest` must
    /// touch: the victim for a push, the attacker for a pull.
    fn validate_displacement(
        &self,
        attacker: Pos,
        victim: Pos,
        dest: Pos,
        anchor: Pos,
    ) -> Result<(), RuleError> {
        check_bounds(attacker)?;
        check_bounds(victim)?;
        check_bounds(dest)?;
        self.check_budget(2)?;

        let a = self
            .board
            .piece_at(attacker)
            .ok_or(IllegalMove::NoPiece(attacker))?;
        let v = self
            .board
            .piece_at(victim)
            .ok_or(IllegalMove::NoPiece(victim))?;
        if a.side != self.side_to_move {
            return Err(IllegalMove::WrongSide(attacker).into());
        }
        if v.side == self.side_to_move {
            return Err(IllegalMove::NotEnemy(victim).into());
        }
        if a.strength() <= v.strength() {
            return Err(IllegalMove::TooWeak { attacker, victim }.into());
        }
        if self.board.piece_at(dest).is_some() {
            return Err(IllegalMove::Occupied(dest).into());
        }
        if !attacker.is_adjacent(victim) {
            return Err(IllegalMove::NotAdjacent(attacker, victim).into());
        }
        if !anchor.is_adjacent(dest) {
            return Err(IllegalMove::NotAdjacent(anchor, dest).into());
        }
        if self.board.is_frozen(attacker) {
            return Err(IllegalMove::Frozen(attacker).into());
        }
        Ok(())
    }

    fn check_budget(&self, needed: u8) -> Result<(), RuleError> {
        let remaining = self.steps_remaining();
        if needed > remaining {
            return Err(IllegalMove::StepBudget { needed, remaining }.into());
        }
        Ok(())
    }

    fn change_turn(&mut self) {
        let mover = self.side_to_move;
        let captures = self.board.resolve_traps();
        if !captures.is_empty() {
            info!(side = %mover, ?captures, "trap captures");
        }
        self.history.push(TurnRecord {
            side: mover,
            actions: std::mem::take(&mut self.current),
            captures,
        });

        self.side_to_move = mover.other();
        self.steps_taken = 0;

        self.outcome = victory(&self.board, mover);
        if let Some(outcome) = self.outcome {
            info!(%outcome, turns = self.history.len(), "game over");
        }
    }
}

/// Victory check run after every turn change, first match wins:
/// goal reached, then rabbits eliminated, then no legal action.
/// `mover` is the side whose turn just ended.
pub fn victory(board: &Board, mover: Side) -> Option<Outcome> {
    if let Some(outcome) = goal_or_elimination(board, mover) {
        return Some(outcome);
    }
    // The side now to move is checked first
    for side in [mover.other(), mover] {
        if !has_any_action(board, side) {
            return Some(Outcome {
                winner: side.other(),
                reason: VictoryReason::Immobilized,
            });
        }
    }
    None
}

/// The material part of `victory`: a rabbit on its goal row, or a side with
/// no rabbits left. `mover` is checked first in both.
pub fn goal_or_elimination(board: &Board, mover: Side) -> Option<Outcome> {
    let order = [mover, mover.other()];

    for side in order {
        if board.rabbit_on_goal(side) {
            return Some(Outcome {
                winner: side,
                reason: VictoryReason::GoalReached,
            });
        }
    }
    for side in order {
        if board.count(side.other(), Species::Rabbit) == 0 {
            return Some(Outcome {
                winner: side,
                reason: VictoryReason::RabbitsEliminated,
            });
        }
    }
    None
}

fn check_bounds(pos: Pos) -> Result<(), RuleError> {
    if pos.in_bounds() {
        Ok(())
    } else {
        Err(RuleError::OutOfBounds(pos))
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
