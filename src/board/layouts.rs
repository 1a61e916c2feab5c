//! The two built-in layouts.
//!
//! Layouts are written top row first so they read like the physical board;
//! `layout[HEIGHT - 1 - y][x]` is the cell at `(x, y)`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::cell::{Cell, ObjectType};
use super::{HEIGHT, WIDTH};

/// A full board template, top row first
pub type Layout = [[Cell; WIDTH]; HEIGHT];

const __: Cell = Cell::EMPTY;
const ST: Cell = Cell::new(ObjectType::StartPoint, 0);
const FN: Cell = Cell::new(ObjectType::FinishLine, 0);
const SM: Cell = Cell::new(ObjectType::SnakeMiddle, 0);
const LM: Cell = Cell::new(ObjectType::LadderMiddle, 0);
const XM: Cell = Cell::new(ObjectType::SnakeLadderMiddle, 0);

const fn ss(id: u8) -> Cell {
    Cell::new(ObjectType::SnakeStart, id)
}

const fn se(id: u8) -> Cell {
    Cell::new(ObjectType::SnakeEnd, id)
}

const fn ls(id: u8) -> Cell {
    Cell::new(ObjectType::LadderStart, id)
}

const fn le(id: u8) -> Cell {
    Cell::new(ObjectType::LadderEnd, id)
}

#[rustfmt::skip]
pub(crate) const BOARD_ONE: Layout = [
    [FN,    __,    __,    __,    __,    __,    __,    __   ],
    [__,    ss(4), __,    __,    le(4), __,    __,    __   ],
    [__,    SM,    __,    LM,    __,    __,    __,    __   ],
    [__,    SM,    ls(4), __,    __,    __,    __,    __   ],
    [__,    se(4), __,    __,    __,    __,    ss(3), __   ],
    [__,    __,    __,    __,    le(3), __,    SM,    __   ],
    [ss(2), __,    __,    __,    LM,    __,    SM,    __   ],
    [__,    SM,    __,    __,    ls(3), __,    se(3), __   ],
    [__,    __,    se(2), __,    __,    __,    __,    __   ],
    [__,    __,    __,    __,    __,    __,    __,    __   ],
    [__,    __,    __,    __,    __,    __,    __,    __   ],
    [__,    __,    __,    ss(1), __,    __,    __,    le(1)],
    [__,    le(2), __,    SM,    __,    __,    LM,    __   ],
    [__,    LM,    __,    SM,    __,    ls(1), __,    __   ],
    [__,    ls(2), __,    SM,    __,    __,    __,    __   ],
    [ST,    __,    __,    se(1), __,    __,    __,    __   ],
];

#[rustfmt::skip]
pub(crate) const BOARD_TWO: Layout = [
    [FN,    __,    ss(4), __,    le(4), __,    __,    __   ],
    [__,    __,    SM,    __,    __,    LM,    __,    __   ],
    [__,    __,    se(4), __,    __,    __,    ls(4), ss(3)],
    [__,    __,    __,    __,    __,    __,    SM,    __   ],
    [le(3), __,    __,    le(2), __,    SM,    __,    __   ],
    [LM,    __,    __,    __,    XM,    __,    __,    __   ],
    [LM,    __,    __,    SM,    __,    LM,    __,    __   ],
    [LM,    __,    se(3), __,    __,    __,    LM,    __   ],
    [LM,    __,    __,    __,    __,    __,    ss(2), ls(2)],
    [ls(3), __,    __,    __,    __,    __,    SM,    __   ],
    [__,    __,    __,    __,    __,    __,    SM,    __   ],
    [__,    ss(1), __,    le(1), __,    __,    SM,    __   ],
    [__,    __,    SM,    LM,    __,    __,    se(2), __   ],
    [__,    __,    __,    XM,    __,    __,    __,    __   ],
    [__,    __,    __,    LM,    SM,    __,    __,    __   ],
    [ST,    __,    __,    ls(1), __,    se(1), __,    __   ],
];

/// Which built-in layout to play on
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BoardNumber {
    #[default]
    #[allow(missing_docs)]
    One,
    #[allow(missing_docs)]
    Two,
}

impl BoardNumber {
    /// the other layout; selection cycles between the two
    pub fn toggle(self) -> Self {
        match self {
            BoardNumber::One => BoardNumber::Two,
            BoardNumber::Two => BoardNumber::One,
        }
    }

    /// the template for this layout
    pub fn layout(&self) -> &'static Layout {
        match self {
            BoardNumber::One => &BOARD_ONE,
            BoardNumber::Two => &BOARD_TWO,
        }
    }

    /// the level number shown to the player
    pub fn number(&self) -> u8 {
        match self {
            BoardNumber::One => 1,
            BoardNumber::Two => 2,
        }
    }
}

impl fmt::Display for BoardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level: {}", self.number())
    }
}
