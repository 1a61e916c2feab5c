//! various types that are shared across the engine, plus the traits through
//! which the engine talks to hardware
use crate::audio::Pwm;
use crate::board::{ObjectType, HEIGHT, WIDTH};
use crate::scheduler::{Button, Status};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reading of the monotonic millisecond clock
pub type Tick = u32;

/// A vector with which to do positional math
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector {
    /// x displacement
    pub x: i8,
    /// y displacement
    pub y: i8,
}

impl Vector {
    /// make a vector from its components
    pub const fn new(x: i8, y: i8) -> Self {
        Vector { x, y }
    }

    /// true when this vector moves more than one cell along either axis
    pub fn is_multi_cell(&self) -> bool {
        self.x.unsigned_abs() > 1 || self.y.unsigned_abs() > 1
    }

    /// true when this vector moves exactly one cell along either axis
    pub fn is_unit(&self) -> bool {
        self.x.unsigned_abs() == 1 || self.y.unsigned_abs() == 1
    }

    /// true when this vector does not move at all
    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

/// A cell coordinate. `(0, 0)` is the bottom left of the board.
///
/// Coordinates are signed because movement routinely produces transient
/// off-board candidates before they are pulled back in bounds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    #[allow(missing_docs)]
    pub x: i8,
    #[allow(missing_docs)]
    pub y: i8,
}

impl Position {
    /// make a position from its components
    pub const fn new(x: i8, y: i8) -> Self {
        Position { x, y }
    }

    /// offset this position by a vector
    pub fn add_vec(&self, v: Vector) -> Position {
        Position {
            x: self.x.wrapping_add(v.x),
            y: self.y.wrapping_add(v.y),
        }
    }

    /// the vector that takes `other` to `self`
    pub fn sub(&self, other: Position) -> Vector {
        Vector {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// determines if this position lies on the board
    pub fn on_board(&self) -> bool {
        self.x >= 0 && (self.x as usize) < WIDTH && self.y >= 0 && (self.y as usize) < HEIGHT
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Represents a single-cell directional move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    #[allow(missing_docs)]
    Left,
    #[allow(missing_docs)]
    Down,
    #[allow(missing_docs)]
    Up,
    #[allow(missing_docs)]
    Right,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Left => write!(f, "left"),
            Move::Right => write!(f, "right"),
            Move::Up => write!(f, "up"),
            Move::Down => write!(f, "down"),
        }
    }
}

impl Move {
    /// convert this move to a vector
    pub fn to_vector(self) -> Vector {
        match self {
            Move::Left => Vector { x: -1, y: 0 },
            Move::Right => Vector { x: 1, y: 0 },
            Move::Up => Vector { x: 0, y: 1 },
            Move::Down => Vector { x: 0, y: -1 },
        }
    }

    /// create a Move from the given vector, if it is one of the four unit directions
    pub fn from_vector(vector: Vector) -> Option<Self> {
        match vector {
            Vector { x: -1, y: 0 } => Some(Self::Left),
            Vector { x: 1, y: 0 } => Some(Self::Right),
            Vector { x: 0, y: 1 } => Some(Self::Up),
            Vector { x: 0, y: -1 } => Some(Self::Down),
            _ => None,
        }
    }

    /// returns all possible moves
    pub fn all() -> [Move; 4] {
        [Move::Up, Move::Down, Move::Left, Move::Right]
    }
}

/// token to represent one of the two players
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    #[allow(missing_docs)]
    Player1,
    #[allow(missing_docs)]
    Player2,
}

impl PlayerId {
    /// both players, in index order
    pub const ALL: [PlayerId; 2] = [PlayerId::Player1, PlayerId::Player2];

    /// convert this player id to an index into per-player arrays
    pub fn as_usize(&self) -> usize {
        match self {
            PlayerId::Player1 => 0,
            PlayerId::Player2 => 1,
        }
    }

    /// the opponent of this player
    pub fn other(&self) -> PlayerId {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::Player1 => write!(f, "Player 1"),
            PlayerId::Player2 => write!(f, "Player 2"),
        }
    }
}

/// What gets drawn at a cell: either a board object or a player token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// the static board object
    Object(ObjectType),
    /// a player token
    Player(PlayerId),
}

/// Monotonic millisecond time source
pub trait Clock {
    /// current time, never decreasing except by wrapping
    fn now(&self) -> Tick;
}

/// Draws cells of the board. Calls must not block.
pub trait CellRenderer {
    /// draw `glyph` at `position`; idempotent
    fn render_cell(&mut self, position: Position, glyph: Glyph);

    /// show the status readout (turn digit, dice face, time remaining)
    fn render_status(&mut self, _status: &Status) {}
}

/// Hardware audio output
pub trait ToneOutput {
    /// program the oscillator with the given settings, starting it if halted
    fn emit_tone(&mut self, pwm: Pwm);

    /// stop the oscillator entirely
    fn halt_oscillator(&mut self);
}

/// Raw, already debounced input edges
pub trait InputSource {
    /// a directional delta from the joystick, if it produced an edge this poll
    fn poll_directional(&mut self) -> Option<Vector>;

    /// a button or key command, if one arrived this poll
    fn poll_discrete(&mut self) -> Option<Button>;
}

/// A game which can have it's winner determined
pub trait VictorDeterminableGame: std::fmt::Debug {
    #[allow(missing_docs)]
    fn is_over(&self) -> bool;

    /// get the winner for a given game, will return None if the game is not over
    fn get_winner(&self) -> Option<PlayerId>;
}
