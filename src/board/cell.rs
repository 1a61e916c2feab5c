use serde::{Deserialize, Deserializer, Serialize, Serializer};

const TYPE_MASK: u8 = 0xF0;
const ID_MASK: u8 = 0x0F;
/// distance between a start type and its end type
const END_OFFSET: u8 = 0x10;

/// The upper nibble of a cell byte
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ObjectType {
    #[allow(missing_docs)]
    Empty = 0x00,
    #[allow(missing_docs)]
    StartPoint = 0x10,
    #[allow(missing_docs)]
    FinishLine = 0x20,
    /// transient, never stored on the grid
    Player1 = 0x40,
    /// transient, never stored on the grid
    Player2 = 0x50,
    #[allow(missing_docs)]
    SnakeStart = 0x80,
    #[allow(missing_docs)]
    SnakeEnd = 0x90,
    #[allow(missing_docs)]
    SnakeMiddle = 0xA0,
    #[allow(missing_docs)]
    LadderStart = 0xC0,
    #[allow(missing_docs)]
    LadderEnd = 0xD0,
    #[allow(missing_docs)]
    LadderMiddle = 0xE0,
    /// visual marker where a snake and a ladder cross
    SnakeLadderMiddle = 0xF0,
}

impl ObjectType {
    /// decode a type nibble (already masked), None for unassigned values
    pub fn from_bits(bits: u8) -> Option<Self> {
        let t = match bits {
            0x00 => ObjectType::Empty,
            0x10 => ObjectType::StartPoint,
            0x20 => ObjectType::FinishLine,
            0x40 => ObjectType::Player1,
            0x50 => ObjectType::Player2,
            0x80 => ObjectType::SnakeStart,
            0x90 => ObjectType::SnakeEnd,
            0xA0 => ObjectType::SnakeMiddle,
            0xC0 => ObjectType::LadderStart,
            0xD0 => ObjectType::LadderEnd,
            0xE0 => ObjectType::LadderMiddle,
            0xF0 => ObjectType::SnakeLadderMiddle,
            _ => return None,
        };
        Some(t)
    }

    /// true for the two types that trigger a warp when landed on
    pub fn is_start(&self) -> bool {
        matches!(self, ObjectType::SnakeStart | ObjectType::LadderStart)
    }

    /// true for the two types a warp lands on
    pub fn is_end(&self) -> bool {
        matches!(self, ObjectType::SnakeEnd | ObjectType::LadderEnd)
    }

    /// the end type linked to this start type
    pub fn paired_end(&self) -> Option<ObjectType> {
        if self.is_start() {
            Self::from_bits(*self as u8 + END_OFFSET)
        } else {
            None
        }
    }

    /// the start type linked to this end type
    pub fn paired_start(&self) -> Option<ObjectType> {
        if self.is_end() {
            Self::from_bits(*self as u8 - END_OFFSET)
        } else {
            None
        }
    }
}

/// One packed board byte: object type in the upper nibble, identifier in the lower
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Cell(u8);

impl Cell {
    /// the empty cell, also returned for any off-board lookup
    pub const EMPTY: Cell = Cell(0);

    /// pack a type and identifier; the identifier is truncated to four bits
    pub const fn new(object_type: ObjectType, id: u8) -> Self {
        Cell(object_type as u8 | (id & ID_MASK))
    }

    /// wrap a raw byte without checking it
    pub const fn from_raw(byte: u8) -> Self {
        Cell(byte)
    }

    /// the raw byte
    pub fn raw(&self) -> u8 {
        self.0
    }

    /// the masked type nibble, `byte & 0xF0`
    pub fn type_bits(&self) -> u8 {
        self.0 & TYPE_MASK
    }

    /// the identifier nibble, `byte & 0x0F`
    pub fn identifier(&self) -> u8 {
        self.0 & ID_MASK
    }

    /// the decoded object type; unassigned nibbles read as empty
    pub fn object_type(&self) -> ObjectType {
        ObjectType::from_bits(self.type_bits()).unwrap_or(ObjectType::Empty)
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.object_type() == ObjectType::Empty
    }

    /// true when this is the finish line
    pub fn is_finish(&self) -> bool {
        self.object_type() == ObjectType::FinishLine
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u8::deserialize(deserializer).map(Cell)
    }
}
