//! A fixed capacity FIFO of waypoints used to stagger animated movement.
//!
//! The queue never allocates. Overflow policy (evicting the oldest waypoint
//! and repainting it) belongs to the caller, see
//! [crate::game::GameState::enqueue_waypoint].

use crate::types::Position;

/// waypoints each player's queue can hold
pub const MOVE_BUFFER_SIZE: usize = 24;

/// Bounded ring buffer of positions, oldest first
#[derive(Debug, Copy, Clone)]
pub struct MoveQueue<const N: usize = MOVE_BUFFER_SIZE> {
    slots: [Position; N],
    head: usize,
    len: usize,
}

impl<const N: usize> MoveQueue<N> {
    /// an empty queue
    pub fn new() -> Self {
        MoveQueue {
            slots: [Position::default(); N],
            head: 0,
            len: 0,
        }
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[allow(missing_docs)]
    pub fn capacity(&self) -> usize {
        N
    }

    /// true once `capacity() - 1` waypoints are queued, which is the point at
    /// which the game starts evicting
    pub fn is_nearly_full(&self) -> bool {
        self.len + 1 >= N
    }

    /// the oldest waypoint
    pub fn front(&self) -> Option<Position> {
        if self.is_empty() {
            None
        } else {
            Some(self.slots[self.head])
        }
    }

    /// append a waypoint, handing it back if there is no room
    pub fn push_back(&mut self, pos: Position) -> Result<(), Position> {
        if self.len == N {
            return Err(pos);
        }
        let tail = (self.head + self.len) % N;
        self.slots[tail] = pos;
        self.len += 1;
        Ok(())
    }

    /// remove and return the oldest waypoint
    pub fn pop_front(&mut self) -> Option<Position> {
        let front = self.front()?;
        self.head = (self.head + 1) % N;
        self.len -= 1;
        Some(front)
    }

    /// drop every waypoint
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// the queued waypoints, oldest first
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.len).map(move |i| self.slots[(self.head + i) % N])
    }
}

impl<const N: usize> Default for MoveQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
