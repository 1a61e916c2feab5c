//! Construction-time failures. The running engine has no error paths; these
//! only surface while building a board or loading configuration.

use thiserror::Error;

use crate::board::ObjectType;
use crate::types::Position;

/// A board layout that breaks the snake/ladder pairing rules
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A start cell whose end cell is nowhere on the board
    #[error("{kind:?} {id} at {at} has no matching end cell")]
    MissingEnd {
        /// the start type that was left unpaired
        kind: ObjectType,
        /// the shared identifier
        id: u8,
        /// where the start was found
        at: Position,
    },

    /// Two start cells share the same identifier
    #[error("{kind:?} {id} appears at both {first} and {second}")]
    DuplicateStart {
        #[allow(missing_docs)]
        kind: ObjectType,
        #[allow(missing_docs)]
        id: u8,
        #[allow(missing_docs)]
        first: Position,
        #[allow(missing_docs)]
        second: Position,
    },

    /// Two end cells share the same identifier
    #[error("{kind:?} {id} appears at both {first} and {second}")]
    DuplicateEnd {
        #[allow(missing_docs)]
        kind: ObjectType,
        #[allow(missing_docs)]
        id: u8,
        #[allow(missing_docs)]
        first: Position,
        #[allow(missing_docs)]
        second: Position,
    },

    /// An end cell that no start leads to
    #[error("{kind:?} {id} at {at} has no matching start cell")]
    OrphanEnd {
        #[allow(missing_docs)]
        kind: ObjectType,
        #[allow(missing_docs)]
        id: u8,
        #[allow(missing_docs)]
        at: Position,
    },

    /// A byte whose upper nibble is not a known object type
    #[error("unknown object byte {byte:#04x} at {at}")]
    UnknownObject {
        #[allow(missing_docs)]
        byte: u8,
        #[allow(missing_docs)]
        at: Position,
    },

    /// Player tokens are tracked out of band and may not be baked into a layout
    #[error("player token stored in the layout at {at}")]
    PlayerInLayout {
        #[allow(missing_docs)]
        at: Position,
    },

    /// A custom layout with the wrong number of rows or columns
    #[error("layout must be {expected_width}x{expected_height}, found {width}x{height}")]
    Dimensions {
        #[allow(missing_docs)]
        expected_width: usize,
        #[allow(missing_docs)]
        expected_height: usize,
        #[allow(missing_docs)]
        width: usize,
        #[allow(missing_docs)]
        height: usize,
    },
}

/// Failure to load game settings or a custom layout
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The JSON itself did not parse
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    /// The layout parsed but is not a valid board
    #[error("invalid board layout: {0}")]
    Board(#[from] BoardError),
}
