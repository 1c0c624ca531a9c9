//! Interactive game session on a text board.
//!
//! Reads one command per line; the engine plays every turn of the side(s)
//! the human does not control.

use std::fmt::Display;
use std::io::{self, Write};

use arimaa_core::{Action, Board, Engine, Game, SearchSettings, Side};
use tracing::{debug, warn};

const HELP: &str = "\
commands:
  step a2 a3 | a2 a3     move a piece one square
  push e2 e3 e4          attacker, victim, victim's destination
  pull e2 e3 e1          attacker, victim, attacker's destination
  end                    end the turn (after at least one step)
  moves                  list legal actions
  board                  show the board
  resign                 give up
  quit                   leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    game: Game,
    engine: Box<dyn Engine>,
    /// Side controlled from the keyboard, None for engine self-play
    human: Option<Side>,
    search: SearchSettings,
    max_turns: u32,
}

impl Session {
    pub fn new(
        game: Game,
        engine: Box<dyn Engine>,
        human: Option<Side>,
        search: SearchSettings,
        max_turns: u32,
    ) -> Self {
        Self {
            game,
            engine,
            human,
            search,
            max_turns,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Shows the board and lets the engine move if it is on turn.
    pub fn start(&mut self, out: &mut impl Write) -> io::Result<()> {
        self.print_board(out)?;
        self.engine_moves(out)
    }

    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        match line.trim() {
            "" => {}
            "quit" | "exit" => return Ok(Flow::Quit),
            "help" => writeln!(out, "{HELP}")?,
            "board" => self.print_board(out)?,
            "moves" => {
                let actions: Vec<String> =
                    self.game.legal_actions().iter().map(|a| a.to_string()).collect();
                writeln!(out, "{} legal: {}", actions.len(), actions.join(", "))?;
            }
            "end" => match self.game.end_turn() {
                Ok(_) => self.after_turn(out)?,
                Err(e) => error(out, e)?,
            },
            "resign" => match self.game.resign() {
                Ok(outcome) => writeln!(out, "{outcome}")?,
                Err(e) => error(out, e)?,
            },
            text => match text.parse::<Action>() {
                Ok(action) => self.human_action(action, out)?,
                Err(e) => error(out, e)?,
            },
        }
        Ok(Flow::Continue)
    }

    fn human_action(&mut self, action: Action, out: &mut impl Write) -> io::Result<()> {
        if self.human != Some(self.game.current_player()) {
            return error(out, "not your turn");
        }
        let turns = self.game.history().len();
        if let Err(e) = self.game.apply_action(action) {
            return error(out, e);
        }
        if self.game.history().len() > turns {
            self.after_turn(out)
        } else {
            self.print_board(out)
        }
    }

    fn after_turn(&mut self, out: &mut impl Write) -> io::Result<()> {
        self.print_board(out)?;
        self.engine_moves(out)
    }

    /// Plays engine turns until the human is on turn, the game ends or the
    /// turn cap is reached.
    fn engine_moves(&mut self, out: &mut impl Write) -> io::Result<()> {
        while !self.game.is_game_over()
            && self.human != Some(self.game.current_player())
            && self.game.history().len() < self.max_turns as usize
        {
            self.engine_turn(out)?;
            self.print_board(out)?;
        }
        if self.game.history().len() >= self.max_turns as usize && !self.game.is_game_over() {
            writeln!(out, "turn limit reached, game drawn")?;
        }
        Ok(())
    }

    fn engine_turn(&mut self, out: &mut impl Write) -> io::Result<()> {
        let side = self.game.current_player();
        let limits = self.search.to_limits();
        let plan = self
            .engine
            .plan_turn(self.game.board(), side, self.game.steps_remaining(), &limits);
        debug!(%side, actions = plan.len(), "engine plan");

        if plan.is_empty() {
            return self.engine_resigns(out);
        }
        for action in plan {
            if let Err(e) = self.game.apply_action(action) {
                warn!(%action, error = %e, "engine played an illegal action");
                return self.engine_resigns(out);
            }
            writeln!(out, "{side}: {action}")?;
        }
        if !self.game.is_game_over()
            && self.game.current_player() == side
            && self.game.steps_taken() > 0
        {
            if let Err(e) = self.game.end_turn() {
                error(out, e)?;
            }
        }
        Ok(())
    }

    fn engine_resigns(&mut self, out: &mut impl Write) -> io::Result<()> {
        match self.game.resign() {
            Ok(outcome) => writeln!(out, "{} resigns: {outcome}", self.engine.name()),
            Err(e) => error(out, e),
        }
    }

    fn print_board(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self.game.board())?;
        match self.game.outcome() {
            Some(outcome) => writeln!(out, "{outcome}"),
            None => writeln!(
                out,
                "turn {}: {} to move, {} steps left",
                self.game.turn_number(),
                self.game.current_player(),
                self.game.steps_remaining()
            ),
        }
    }
}

fn error(out: &mut impl Write, e: impl Display) -> io::Result<()> {
    writeln!(out, "error: {e}")
}

/// One-line answer for `bestmove`: the engine's next action or its whole
/// turn.
pub fn best_move_line(
    engine: &mut dyn Engine,
    board: &Board,
    side: Side,
    steps: u8,
    search: &SearchSettings,
    full_turn: bool,
) -> String {
    if full_turn {
        let plan = engine.plan_turn(board, side, steps, &search.to_limits());
        if plan.is_empty() {
            return "bestturn none".to_string();
        }
        let actions: Vec<String> = plan.iter().map(|a| a.to_string()).collect();
        return format!("bestturn {}", actions.join(", "));
    }

    let result = engine.search(board, side, steps, search.to_limits());
    match result.best_action {
        Some(action) => format!(
            "bestmove {action} score {:.1} nodes {}",
            result.score, result.nodes
        ),
        None => "bestmove none".to_string(),
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
