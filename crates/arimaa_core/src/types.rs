use serde::{Deserialize, Serialize};
use std::fmt;

/// Width and height of the board.
pub const BOARD_SIZE: i8 = 8;

/// Maximum number of steps a side may spend in one turn.
pub const STEPS_PER_TURN: u8 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Gold,
    Silver,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Gold, Side::Silver];

    pub fn other(self) -> Side {
        match self {
            Side::Gold => Side::Silver,
            Side::Silver => Side::Gold,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Side::Gold => 0,
            Side::Silver => 1,
        }
    }

    /// Edge the side starts on. Its rabbits may never step toward it.
    pub fn home_row(self) -> i8 {
        match self {
            Side::Gold => 0,
            Side::Silver => BOARD_SIZE - 1,
        }
    }

    /// Edge a rabbit of this side has to reach to win.
    pub fn goal_row(self) -> i8 {
        self.other().home_row()
    }

    /// Row delta of a forward step.
    pub fn forward(self) -> i8 {
        match self {
            Side::Gold => 1,
            Side::Silver => -1,
        }
    }

    /// Multiplier turning a Gold-positive score into this side's view.
    pub fn sign(self) -> f64 {
        match self {
            Side::Gold => 1.0,
            Side::Silver => -1.0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Gold => write!(f, "Gold"),
            Side::Silver => write!(f, "Silver"),
        }
    }
}

/// Piece species, declared weakest first so the derived ordering is strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Species {
    Rabbit,
    Cat,
    Dog,
    Horse,
    Camel,
    Elephant,
}

impl Species {
    pub const ALL: [Species; 6] = [
        Species::Rabbit,
        Species::Cat,
        Species::Dog,
        Species::Horse,
        Species::Camel,
        Species::Elephant,
    ];

    /// Strength rank, Rabbit = 1 up to Elephant = 6.
    pub fn strength(self) -> u8 {
        self.idx() as u8 + 1
    }

    pub fn idx(self) -> usize {
        match self {
            Species::Rabbit => 0,
            Species::Cat => 1,
            Species::Dog => 2,
            Species::Horse => 3,
            Species::Camel => 4,
            Species::Elephant => 5,
        }
    }

    /// Uppercase notation letter.
    pub fn letter(self) -> char {
        match self {
            Species::Rabbit => 'R',
            Species::Cat => 'C',
            Species::Dog => 'D',
            Species::Horse => 'H',
            Species::Camel => 'M',
            Species::Elephant => 'E',
        }
    }

    pub fn from_letter(c: char) -> Option<Species> {
        match c.to_ascii_uppercase() {
            'R' => Some(Species::Rabbit),
            'C' => Some(Species::Cat),
            'D' => Some(Species::Dog),
            'H' => Some(Species::Horse),
            'M' => Some(Species::Camel),
            'E' => Some(Species::Elephant),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub side: Side,
    pub species: Species,
}

impl Piece {
    pub const fn new(side: Side, species: Species) -> Self {
        Self { side, species }
    }

    pub fn strength(self) -> u8 {
        self.species.strength()
    }

    pub fn is_rabbit(self) -> bool {
        self.species == Species::Rabbit
    }

    /// True if `self` is an enemy strictly stronger than `other`.
    pub fn dominates(self, other: Piece) -> bool {
        self.side != other.side && self.strength() > other.strength()
    }

    /// Notation character: uppercase for Gold, lowercase for Silver.
    pub fn to_char(self) -> char {
        let c = self.species.letter();
        match self.side {
            Side::Gold => c,
            Side::Silver => c.to_ascii_lowercase(),
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        let species = Species::from_letter(c)?;
        let side = if c.is_ascii_uppercase() {
            Side::Gold
        } else {
            Side::Silver
        };
        Some(Piece { side, species })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Board coordinate. Signed so that off-board neighbours can be represented
/// and rejected by `in_bounds` instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: i8,
    pub col: i8,
}

impl Pos {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    pub fn offset(self, dir: Direction) -> Pos {
        let (dr, dc) = dir.delta();
        Pos::new(self.row + dr, self.col + dc)
    }

    pub fn manhattan(self, other: Pos) -> u32 {
        (self.row as i32 - other.row as i32).unsigned_abs()
            + (self.col as i32 - other.col as i32).unsigned_abs()
    }

    pub fn is_adjacent(self, other: Pos) -> bool {
        self.manhattan(other) == 1
    }

    /// Row-major index, only meaningful for in-bounds positions.
    pub fn index(self) -> usize {
        (self.row as usize) * (BOARD_SIZE as usize) + self.col as usize
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Pos::new(row, col)))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.in_bounds() {
            return write!(f, "({},{})", self.row, self.col);
        }
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'1' + self.row as u8) as char;
        write!(f, "{file}{rank}")
    }
}

/// Orthogonal direction. The declaration order is the iteration order used
/// everywhere neighbours are enumerated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, col)` delta. Up decreases the row.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// One atomic unit of play submitted to the rules engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Step { from: Pos, to: Pos },
    Push { attacker: Pos, victim: Pos, dest: Pos },
    Pull { attacker: Pos, victim: Pos, dest: Pos },
}

impl Action {
    pub fn step(from: Pos, to: Pos) -> Self {
        Action::Step { from, to }
    }
    pub fn push(attacker: Pos, victim: Pos, dest: Pos) -> Self {
        Action::Push {
            attacker,
            victim,
            dest,
        }
    }
    pub fn pull(attacker: Pos, victim: Pos, dest: Pos) -> Self {
        Action::Pull {
            attacker,
            victim,
            dest,
        }
    }

    /// Steps consumed from the turn budget.
    pub fn cost(self) -> u8 {
        match self {
            Action::Step { .. } => 1,
            Action::Push { .. } | Action::Pull { .. } => 2,
        }
    }

    /// Square of the piece that initiates the action.
    pub fn mover(self) -> Pos {
        match self {
            Action::Step { from, .. } => from,
            Action::Push { attacker, .. } | Action::Pull { attacker, .. } => attacker,
        }
    }
}
