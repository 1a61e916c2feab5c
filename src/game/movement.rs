use tracing::{debug, instrument};

use super::GameState;
use crate::board::{ObjectType, HEIGHT, WIDTH};
use crate::types::{CellRenderer, Glyph, PlayerId, Position, Vector};

/// Which kind of object forced a warp
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WarpKind {
    /// slid down a snake
    Snake,
    /// climbed a ladder
    Ladder,
}

/// A forced move from a snake or ladder start to its paired end
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Warp {
    #[allow(missing_docs)]
    pub kind: WarpKind,
    /// the start cell the player landed on
    pub from: Position,
    /// the paired end cell
    pub to: Position,
}

/// The outcome of one move request
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MoveReport {
    #[allow(missing_docs)]
    pub player: PlayerId,
    /// logical position before the move
    pub from: Position,
    /// logical position once any warp has been applied
    pub to: Position,
    /// whether the move counted as a completed turn
    pub turn_counted: bool,
    /// the snake or ladder taken, if any
    pub warp: Option<Warp>,
}

/// Pulls a coordinate that went past an edge back onto the board.
///
/// Overflow reflects as `dimension - value` and underflow as
/// `dimension + value`, so `x = 8` lands on column 0 and `x = -1` on column 7.
pub fn reflect_into_bounds(pos: Position) -> Position {
    Position::new(reflect(pos.x, WIDTH as i8), reflect(pos.y, HEIGHT as i8))
}

fn reflect(v: i8, dim: i8) -> i8 {
    if v >= dim {
        dim.wrapping_sub(v)
    } else if v < 0 {
        dim.wrapping_add(v)
    } else {
        v
    }
}

/// The cell a token ends on when an advance walks past the last row
pub fn top_corner() -> Position {
    let top = HEIGHT as i8 - 1;
    let x = if top % 2 == 0 { WIDTH as i8 - 1 } else { 0 };
    Position::new(x, top)
}

/// One step along the snaking path: even rows walk right, odd rows walk left,
/// and hitting a wall climbs a row. Returns None when the step would leave
/// the top of the board.
pub fn boustrophedon_step(pos: Position) -> Option<Position> {
    let next = if pos.y % 2 != 0 {
        if pos.x > 0 {
            Position::new(pos.x - 1, pos.y)
        } else {
            Position::new(pos.x, pos.y + 1)
        }
    } else if pos.x + 1 < WIDTH as i8 {
        Position::new(pos.x + 1, pos.y)
    } else {
        Position::new(pos.x, pos.y + 1)
    };

    if next.y >= HEIGHT as i8 {
        None
    } else {
        Some(next)
    }
}

impl GameState {
    /// Queue a waypoint for `player`.
    ///
    /// When either queue is within one slot of capacity, the requesting
    /// player's oldest waypoint is evicted and its cell redrawn first.
    pub fn enqueue_waypoint<R: CellRenderer>(
        &mut self,
        player: PlayerId,
        pos: Position,
        renderer: &mut R,
    ) {
        let crowded = self.players.iter().any(|p| p.queue.is_nearly_full());
        if crowded {
            if let Some(evicted) = self.player_mut(player).queue.pop_front() {
                debug!(%player, %evicted, "move queue crowded, evicting oldest waypoint");
                renderer.render_cell(evicted, self.visual_at(evicted, player));
            }
        }
        let pushed = self.player_mut(player).queue.push_back(pos);
        debug_assert!(pushed.is_ok(), "queue trimmed below capacity before push");
    }

    /// Walk `player` forward `n` cells along the snaking path, queueing every
    /// cell for animation, then resolve any snake or ladder at the end.
    #[instrument(level = "trace", skip(self, renderer))]
    pub fn advance_by<R: CellRenderer>(
        &mut self,
        n: u8,
        player: PlayerId,
        renderer: &mut R,
    ) -> MoveReport {
        let from = self.position(player);
        self.enqueue_waypoint(player, from, renderer);

        let mut pos = from;
        let mut clamped = false;
        for _ in 0..n {
            match boustrophedon_step(pos) {
                Some(next) => {
                    pos = next;
                    self.enqueue_waypoint(player, pos, renderer);
                }
                None => {
                    pos = top_corner();
                    clamped = true;
                    break;
                }
            }
        }

        if !clamped {
            let p = self.player_mut(player);
            p.turns = p.turns.wrapping_add(1);
        }
        self.set_position(player, pos);

        let warp = self.resolve_collision(player, renderer);
        MoveReport {
            player,
            from,
            to: self.position(player),
            turn_counted: !clamped,
            warp,
        }
    }

    /// Move `player` by `delta`, reflecting off the edges, then resolve any
    /// snake or ladder it lands on. Never counts as a turn.
    #[instrument(level = "trace", skip(self, renderer))]
    pub fn step_by<R: CellRenderer>(
        &mut self,
        delta: Vector,
        player: PlayerId,
        renderer: &mut R,
    ) -> MoveReport {
        let from = self.position(player);
        self.displace(delta, player, renderer);
        let warp = self.resolve_collision(player, renderer);
        MoveReport {
            player,
            from,
            to: self.position(player),
            turn_counted: false,
            warp,
        }
    }

    fn displace<R: CellRenderer>(&mut self, delta: Vector, player: PlayerId, renderer: &mut R) {
        let from = self.position(player);
        renderer.render_cell(from, self.visual_at(from, player));

        if delta.is_multi_cell() {
            self.enqueue_waypoint(player, from, renderer);
            let mut partial = Vector::default();
            while partial.x.unsigned_abs() < delta.x.unsigned_abs()
                || partial.y.unsigned_abs() < delta.y.unsigned_abs()
            {
                partial.x += (delta.x - partial.x).signum();
                partial.y += (delta.y - partial.y).signum();
                let waypoint = reflect_into_bounds(from.add_vec(partial));
                self.enqueue_waypoint(player, waypoint, renderer);
            }
        }

        let to = reflect_into_bounds(from.add_vec(delta));
        self.set_position(player, to);

        if delta.is_unit() {
            renderer.render_cell(to, Glyph::Player(player));
        }
    }

    fn resolve_collision<R: CellRenderer>(
        &mut self,
        player: PlayerId,
        renderer: &mut R,
    ) -> Option<Warp> {
        let at = self.position(player);
        let cell = self.board.cell_at_position(at);
        let kind = match cell.object_type() {
            ObjectType::SnakeStart => WarpKind::Snake,
            ObjectType::LadderStart => WarpKind::Ladder,
            _ => return None,
        };
        let end = self.board.paired_cell(cell)?;
        let delta = end.sub(at);
        if delta.is_zero() {
            return None;
        }

        debug!(%player, from = %at, to = %end, ?kind, "warp");
        // a paired end is never itself a start, so there is nothing further to resolve
        self.displace(delta, player, renderer);
        Some(Warp { kind, from: at, to: end })
    }
}
