use crate::types::*;
use std::fmt;

/// The four trap squares.
pub const TRAPS: [Pos; 4] = [
    Pos::new(2, 2),
    Pos::new(2, 5),
    Pos::new(5, 2),
    Pos::new(5, 5),
];

pub fn is_trap(pos: Pos) -> bool {
    TRAPS.contains(&pos)
}

const CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// 8×8 grid of optional pieces. Holds no turn state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self { cells: [None; CELLS] }
    }

    /// Standard opening layout: rabbits on the home rows, officers in front.
    pub fn startpos() -> Self {
        let mut b = Board::empty();
        let officers = [
            Species::Cat,
            Species::Dog,
            Species::Horse,
            Species::Camel,
            Species::Elephant,
            Species::Horse,
            Species::Dog,
            Species::Cat,
        ];
        for (col, &species) in officers.iter().enumerate() {
            let col = col as i8;
            b.place(Pos::new(0, col), Piece::new(Side::Gold, Species::Rabbit));
            b.place(Pos::new(1, col), Piece::new(Side::Gold, species));
            b.place(Pos::new(6, col), Piece::new(Side::Silver, species));
            b.place(Pos::new(7, col), Piece::new(Side::Silver, Species::Rabbit));
        }
        b
    }

    pub fn in_bounds(pos: Pos) -> bool {
        pos.in_bounds()
    }

    pub fn is_adjacent(a: Pos, b: Pos) -> bool {
        a.is_adjacent(b)
    }

    /// On-board orthogonal neighbours in `Direction::ALL` order.
    pub fn neighbors(pos: Pos) -> impl Iterator<Item = Pos> {
        Direction::ALL
            .into_iter()
            .map(move |d| pos.offset(d))
            .filter(|p| p.in_bounds())
    }

    /// Piece on `pos`; `None` when empty or off the board.
    pub fn piece_at(&self, pos: Pos) -> Option<Piece> {
        if !pos.in_bounds() {
            return None;
        }
        self.cells[pos.index()]
    }

    /// True for an on-board empty cell.
    pub fn is_vacant(&self, pos: Pos) -> bool {
        pos.in_bounds() && self.cells[pos.index()].is_none()
    }

    pub fn place(&mut self, pos: Pos, piece: Piece) {
        debug_assert!(pos.in_bounds(), "place off the board: {pos}");
        self.cells[pos.index()] = Some(piece);
    }

    pub fn remove(&mut self, pos: Pos) -> Option<Piece> {
        debug_assert!(pos.in_bounds(), "remove off the board: {pos}");
        self.cells[pos.index()].take()
    }

    /// Moves whatever stands on `from` to `to`, overwriting `to`.
    pub fn move_raw(&mut self, from: Pos, to: Pos) {
        let piece = self.remove(from);
        self.cells[to.index()] = piece;
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        Pos::all().filter_map(|pos| self.cells[pos.index()].map(|pc| (pos, pc)))
    }

    pub fn count(&self, side: Side, species: Species) -> usize {
        self.pieces()
            .filter(|(_, pc)| pc.side == side && pc.species == species)
            .count()
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// True if the piece on `pos` has an orthogonally adjacent ally.
    pub fn has_support(&self, pos: Pos) -> bool {
        let Some(pc) = self.piece_at(pos) else {
            return false;
        };
        Board::neighbors(pos).any(|n| matches!(self.piece_at(n), Some(o) if o.side == pc.side))
    }

    /// A piece is frozen when it has no adjacent ally and touches a strictly
    /// stronger enemy.
    pub fn is_frozen(&self, pos: Pos) -> bool {
        let Some(pc) = self.piece_at(pos) else {
            return false;
        };
        let mut overpowered = false;
        for n in Board::neighbors(pos) {
            if let Some(other) = self.piece_at(n) {
                if other.side == pc.side {
                    return false;
                }
                if other.dominates(pc) {
                    overpowered = true;
                }
            }
        }
        overpowered
    }

    /// Removes every unsupported piece standing on a trap.
    pub fn resolve_traps(&mut self) -> Vec<(Pos, Piece)> {
        let doomed: Vec<Pos> = TRAPS
            .iter()
            .copied()
            .filter(|&t| self.piece_at(t).is_some() && !self.has_support(t))
            .collect();
        doomed
            .into_iter()
            .filter_map(|t| self.remove(t).map(|pc| (t, pc)))
            .collect()
    }

    /// True if a rabbit of `side` stands on that side's goal row.
    pub fn rabbit_on_goal(&self, side: Side) -> bool {
        let row = side.goal_row();
        (0..BOARD_SIZE).any(|col| {
            matches!(self.piece_at(Pos::new(row, col)),
                Some(pc) if pc.side == side && pc.is_rabbit())
        })
    }

    /// Row-indexed snapshot of the grid.
    pub fn grid(&self) -> [[Option<Piece>; 8]; 8] {
        let mut g = [[None; 8]; 8];
        for pos in Pos::all() {
            g[pos.row as usize][pos.col as usize] = self.cells[pos.index()];
        }
        g
    }

    /// Returns a copy with `action` played. Legality is not checked.
    pub fn apply(&self, action: Action) -> Board {
        let mut next = self.clone();
        next.apply_unchecked(action);
        next
    }

    /// Plays `action` in place. Legality is not checked.
    pub fn apply_unchecked(&mut self, action: Action) {
        match action {
            Action::Step { from, to } => self.move_raw(from, to),
            Action::Push {
                attacker,
                victim,
                dest,
            } => {
                self.move_raw(victim, dest);
                self.move_raw(attacker, victim);
            }
            Action::Pull {
                attacker,
                victim,
                dest,
            } => {
                self.move_raw(attacker, dest);
                self.move_raw(victim, attacker);
            }
        }
    }
}

impl fmt::Display for Board {
    /// Diagram with rank 8 on top; empty traps are shown as `x`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for row in (0..BOARD_SIZE).rev() {
            write!(f, "{} |", row + 1)?;
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row, col);
                let c = match self.piece_at(pos) {
                    Some(pc) => pc.to_char(),
                    None if is_trap(pos) => 'x',
                    None => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  +-----------------+")?;
        write!(f, "    a b c d e f g h")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
