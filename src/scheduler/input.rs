use super::Phase;
use crate::config::Difficulty;
use crate::types::Move;

/// push buttons on the board
pub const PUSH_BUTTON_COUNT: u8 = 4;

/// A discrete command from a push button or the terminal
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Button {
    /// walk the current player one cell
    AdvanceOne,
    /// walk the current player two cells
    AdvanceTwo,
    /// start or stop the dice
    ToggleDice,
    #[allow(missing_docs)]
    Pause,
    /// nudge the current player one cell, without passing the turn
    Step(Move),
    /// switch between the built-in layouts
    ToggleBoard,
    #[allow(missing_docs)]
    SetDifficulty(Difficulty),
    /// play alone (`true`) or against a second player
    SinglePlayer(bool),
    #[allow(missing_docs)]
    ToggleMute,
    /// leave the current screen
    Start,
}

impl Button {
    /// Translate a terminal key. `s` starts from any menu screen and steps
    /// down while playing. Keys are case-insensitive.
    pub fn from_key(key: char, phase: Phase) -> Option<Button> {
        let button = match key.to_ascii_lowercase() {
            's' if phase != Phase::Playing => Button::Start,
            'w' => Button::Step(Move::Up),
            'a' => Button::Step(Move::Left),
            's' => Button::Step(Move::Down),
            'd' => Button::Step(Move::Right),
            'r' => Button::ToggleDice,
            'p' => Button::Pause,
            'e' => Button::SetDifficulty(Difficulty::Easy),
            'm' => Button::SetDifficulty(Difficulty::Medium),
            'h' => Button::SetDifficulty(Difficulty::Hard),
            'b' => Button::ToggleBoard,
            '1' => Button::SinglePlayer(true),
            '2' => Button::SinglePlayer(false),
            'q' => Button::ToggleMute,
            _ => return None,
        };
        Some(button)
    }

    /// Translate a push button. Any button leaves a menu screen; while
    /// playing they advance one, advance two, roll and pause.
    pub fn from_push_button(index: u8, phase: Phase) -> Option<Button> {
        if index >= PUSH_BUTTON_COUNT {
            return None;
        }
        if phase != Phase::Playing {
            return Some(Button::Start);
        }
        match index {
            0 => Some(Button::AdvanceOne),
            1 => Some(Button::AdvanceTwo),
            2 => Some(Button::ToggleDice),
            _ => Some(Button::Pause),
        }
    }
}
