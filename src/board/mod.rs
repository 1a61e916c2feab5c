//! The static board: a fixed grid of packed cells and the snake/ladder pairing
//! between them.
//!
//! Player tokens are never written into the grid, so a token standing on a
//! ladder never hides the ladder. Positions live on [crate::game::Player].

mod cell;
mod layouts;

use std::fmt;

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::error::{BoardError, ConfigError};
use crate::types::{CellRenderer, Glyph, Position};

pub use cell::{Cell, ObjectType};
pub use layouts::{BoardNumber, Layout};

/// cells per row
pub const WIDTH: usize = 8;
/// rows on the board
pub const HEIGHT: usize = 16;
/// total cells on the board
pub const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// An immutable game board
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Builds a board from a layout, failing if any snake or ladder is not
    /// paired exactly once
    pub fn new(layout: &Layout) -> Result<Self, BoardError> {
        let board = Self::format(layout);
        board.validate()?;
        Ok(board)
    }

    /// One of the built-in boards. Both layouts are checked by the test suite,
    /// and again here in debug builds.
    pub fn standard(number: BoardNumber) -> Self {
        let board = Self::format(number.layout());
        debug_assert!(board.validate().is_ok(), "built-in layout {} is invalid", number);
        board
    }

    /// Loads a custom layout: a JSON array of 16 rows (top row first) of 8 cell bytes
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let rows: Vec<Vec<Cell>> = serde_json::from_str(json)?;
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if rows.len() != HEIGHT || rows.iter().any(|r| r.len() != WIDTH) {
            return Err(BoardError::Dimensions {
                expected_width: WIDTH,
                expected_height: HEIGHT,
                width,
                height: rows.len(),
            }
            .into());
        }

        let mut layout: Layout = [[Cell::EMPTY; WIDTH]; HEIGHT];
        for (row, cells) in layout.iter_mut().zip(rows) {
            row.copy_from_slice(&cells);
        }
        Ok(Self::new(&layout)?)
    }

    fn format(layout: &Layout) -> Self {
        let mut cells = [Cell::EMPTY; BOARD_SIZE];
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                cells[y * WIDTH + x] = layout[HEIGHT - 1 - y][x];
            }
        }
        Board { cells }
    }

    fn validate(&self) -> Result<(), BoardError> {
        let mut starts: FxHashMap<(ObjectType, u8), Position> = FxHashMap::default();
        let mut ends: FxHashMap<(ObjectType, u8), Position> = FxHashMap::default();

        for (at, cell) in self.iter_cells() {
            let kind = match ObjectType::from_bits(cell.type_bits()) {
                Some(kind) => kind,
                None => {
                    return Err(BoardError::UnknownObject {
                        byte: cell.raw(),
                        at,
                    })
                }
            };
            let id = cell.identifier();

            if matches!(kind, ObjectType::Player1 | ObjectType::Player2) {
                return Err(BoardError::PlayerInLayout { at });
            } else if kind.is_start() {
                if let Some(first) = starts.insert((kind, id), at) {
                    return Err(BoardError::DuplicateStart {
                        kind,
                        id,
                        first,
                        second: at,
                    });
                }
            } else if kind.is_end() {
                if let Some(first) = ends.insert((kind, id), at) {
                    return Err(BoardError::DuplicateEnd {
                        kind,
                        id,
                        first,
                        second: at,
                    });
                }
            }
        }

        for ((kind, id), at) in starts.iter().sorted_by_key(|(key, _)| **key) {
            let end = kind.paired_end().map(|end| (end, *id));
            if !end.map_or(false, |key| ends.contains_key(&key)) {
                return Err(BoardError::MissingEnd {
                    kind: *kind,
                    id: *id,
                    at: *at,
                });
            }
        }

        for ((kind, id), at) in ends.iter().sorted_by_key(|(key, _)| **key) {
            let start = kind.paired_start().map(|start| (start, *id));
            if !start.map_or(false, |key| starts.contains_key(&key)) {
                return Err(BoardError::OrphanEnd {
                    kind: *kind,
                    id: *id,
                    at: *at,
                });
            }
        }

        Ok(())
    }

    /// The cell at `(x, y)`; anything off the board is empty
    pub fn cell_at(&self, x: i8, y: i8) -> Cell {
        if x < 0 || x as usize >= WIDTH || y < 0 || y as usize >= HEIGHT {
            Cell::EMPTY
        } else {
            self.cells[y as usize * WIDTH + x as usize]
        }
    }

    /// The cell at a position; anything off the board is empty
    pub fn cell_at_position(&self, pos: Position) -> Cell {
        self.cell_at(pos.x, pos.y)
    }

    /// Where a snake or ladder starting at `cell` ends.
    ///
    /// Scans row-major from the bottom left, returning the first cell whose
    /// type is the start's end type and whose identifier matches. Any cell that
    /// is not a start has no pair.
    pub fn paired_cell(&self, cell: Cell) -> Option<Position> {
        let end = cell.object_type().paired_end()?;
        let id = cell.identifier();

        self.iter_cells()
            .find(|(_, c)| c.type_bits() == end as u8 && c.identifier() == id)
            .map(|(pos, _)| pos)
    }

    /// Every cell with its position, bottom row first, left to right
    pub fn iter_cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(idx, cell)| {
            let pos = Position::new((idx % WIDTH) as i8, (idx / WIDTH) as i8);
            (pos, *cell)
        })
    }

    /// The start point of the board, if the layout has one
    pub fn start_point(&self) -> Option<Position> {
        self.iter_cells()
            .find(|(_, c)| c.object_type() == ObjectType::StartPoint)
            .map(|(pos, _)| pos)
    }

    /// Draws every static cell
    pub fn render_all<R: CellRenderer>(&self, renderer: &mut R) {
        for (pos, cell) in self.iter_cells() {
            renderer.render_cell(pos, Glyph::Object(cell.object_type()));
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for i in 0..HEIGHT {
            let y = (HEIGHT - i - 1) as i8;
            for x in 0..WIDTH {
                let c = match self.cell_at(x as i8, y).object_type() {
                    ObjectType::Empty => '.',
                    ObjectType::StartPoint => '@',
                    ObjectType::FinishLine => 'F',
                    ObjectType::Player1 => '1',
                    ObjectType::Player2 => '2',
                    ObjectType::SnakeStart => 'S',
                    ObjectType::SnakeEnd => 's',
                    ObjectType::SnakeMiddle => '~',
                    ObjectType::LadderStart => 'L',
                    ObjectType::LadderEnd => 'l',
                    ObjectType::LadderMiddle => '#',
                    ObjectType::SnakeLadderMiddle => '+',
                };
                write!(f, "{} ", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
