//! Game state for one match: the board, both players and the turn bookkeeping.
//!
//! All mutation happens synchronously from the scheduler's single execution
//! context; the [GameState] is owned by [crate::scheduler::Engine] and lent
//! to whichever component is running.

mod animation;
mod dice;
mod movement;
mod victory;

use crate::board::Board;
use crate::config::Difficulty;
use crate::move_queue::MoveQueue;
use crate::types::{CellRenderer, Glyph, PlayerId, Position};

pub use dice::Dice;
pub use movement::{boustrophedon_step, reflect_into_bounds, top_corner, MoveReport, Warp, WarpKind};

/// One player's token and counters
#[derive(Debug, Copy, Clone)]
pub struct Player {
    position: Position,
    queue: MoveQueue,
    turns: u8,
    elapsed: u16,
    visible: bool,
}

impl Player {
    fn new() -> Self {
        Player {
            position: Position::new(0, 0),
            queue: MoveQueue::new(),
            turns: 0,
            elapsed: 0,
            visible: false,
        }
    }

    /// where the token logically is, which may be ahead of what is drawn
    pub fn position(&self) -> Position {
        self.position
    }

    /// waypoints still to be animated
    pub fn queue(&self) -> &MoveQueue {
        &self.queue
    }

    /// completed turns
    pub fn turns(&self) -> u8 {
        self.turns
    }

    /// elapsed-time count used against the difficulty limit
    pub fn elapsed(&self) -> u16 {
        self.elapsed
    }

    /// whether the cursor flash currently shows the token
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// The state of one game
#[derive(Debug, Copy, Clone)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    difficulty: Difficulty,
    single_player: bool,
    current: PlayerId,
    dice: Dice,
}

impl GameState {
    /// a fresh game on `board` with both tokens at the origin
    pub fn new(board: Board, difficulty: Difficulty, single_player: bool) -> Self {
        GameState {
            board,
            players: [Player::new(), Player::new()],
            difficulty,
            single_player,
            current: PlayerId::Player1,
            dice: Dice::new(),
        }
    }

    #[allow(missing_docs)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// swap in a new board; tokens and queues are reset since old positions mean nothing on it
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
        self.reset_players();
    }

    #[allow(missing_docs)]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.as_usize()]
    }

    fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.as_usize()]
    }

    /// logical position of a player
    pub fn position(&self, id: PlayerId) -> Position {
        self.player(id).position
    }

    /// teleport a player without animating or resolving collisions
    pub fn set_position(&mut self, id: PlayerId, pos: Position) {
        self.player_mut(id).position = pos;
    }

    /// the player whose turn it is
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// hand the turn to the other player; single player games keep player 1
    pub fn pass_turn(&mut self) -> PlayerId {
        if !self.single_player {
            self.current = self.current.other();
        }
        self.current
    }

    #[allow(missing_docs)]
    pub fn is_single_player(&self) -> bool {
        self.single_player
    }

    #[allow(missing_docs)]
    pub fn set_single_player(&mut self, single_player: bool) {
        self.single_player = single_player;
        if single_player {
            self.current = PlayerId::Player1;
        }
    }

    #[allow(missing_docs)]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Change the time limit. Both clocks restart from zero and any pending
    /// animation is dropped, with the tokens redrawn where they logically are.
    pub fn set_difficulty<R: CellRenderer>(&mut self, difficulty: Difficulty, renderer: &mut R) {
        self.difficulty = difficulty;
        for player in self.players.iter_mut() {
            player.elapsed = 0;
        }
        if self.clear_queues(renderer) {
            self.draw_tokens(renderer);
        }
    }

    /// empty both move queues, restoring every queued cell; true if anything was queued
    fn clear_queues<R: CellRenderer>(&mut self, renderer: &mut R) -> bool {
        let mut cleared = false;
        for id in PlayerId::ALL {
            while let Some(waypoint) = self.player_mut(id).queue.pop_front() {
                renderer.render_cell(waypoint, self.visual_at(waypoint, id));
                cleared = true;
            }
        }
        cleared
    }

    #[allow(missing_docs)]
    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    #[allow(missing_docs)]
    pub fn dice_mut(&mut self) -> &mut Dice {
        &mut self.dice
    }

    /// turns taken by both players together
    pub fn total_turns(&self) -> u16 {
        self.players.iter().map(|p| p.turns as u16).sum()
    }

    /// put both tokens back at the origin with empty queues and zeroed counters
    pub fn reset_players(&mut self) {
        self.players = [Player::new(), Player::new()];
        self.current = PlayerId::Player1;
        self.dice = Dice::new();
    }

    /// count one elapsed-time unit against a player, returning the new count
    pub fn tick_elapsed(&mut self, id: PlayerId) -> u16 {
        let player = self.player_mut(id);
        player.elapsed = player.elapsed.saturating_add(1);
        player.elapsed
    }

    /// time units a player has left, None when the difficulty is unlimited
    pub fn time_remaining(&self, id: PlayerId) -> Option<u16> {
        self.difficulty
            .time_limit()
            .map(|limit| limit.saturating_sub(self.player(id).elapsed))
    }

    /// What should be drawn at `pos` when `mover`'s token leaves it: the
    /// opponent's token if they stand there, otherwise the board object
    pub fn visual_at(&self, pos: Position, mover: PlayerId) -> Glyph {
        let opponent = mover.other();
        if !self.single_player && self.position(opponent) == pos {
            Glyph::Player(opponent)
        } else {
            Glyph::Object(self.board.cell_at_position(pos).object_type())
        }
    }

    /// draw the tokens taking part in the game
    pub fn draw_tokens<R: CellRenderer>(&self, renderer: &mut R) {
        renderer.render_cell(self.position(PlayerId::Player1), Glyph::Player(PlayerId::Player1));
        if !self.single_player {
            renderer.render_cell(self.position(PlayerId::Player2), Glyph::Player(PlayerId::Player2));
        }
    }
}
