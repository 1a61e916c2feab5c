use super::GameState;
use crate::board::ObjectType;
use crate::types::{PlayerId, VictorDeterminableGame};

impl GameState {
    fn on_finish(&self, player: PlayerId) -> bool {
        self.board.cell_at_position(self.position(player)).object_type() == ObjectType::FinishLine
    }

    fn out_of_time(&self, player: PlayerId) -> bool {
        self.time_remaining(player) == Some(0)
    }
}

impl VictorDeterminableGame for GameState {
    fn is_over(&self) -> bool {
        self.get_winner().is_some()
    }

    /// Reaching the finish wins outright, player 1 checked first. Only then is
    /// the clock consulted: a player whose opponent has run out of time wins.
    fn get_winner(&self) -> Option<PlayerId> {
        if let Some(finisher) = PlayerId::ALL.into_iter().find(|p| self.on_finish(*p)) {
            return Some(finisher);
        }
        PlayerId::ALL
            .into_iter()
            .find(|p| self.out_of_time(p.other()))
    }
}
