use super::GameState;
use crate::types::{CellRenderer, Glyph, PlayerId};

impl GameState {
    /// A player is animating while more than one waypoint is still queued
    pub fn is_animating(&self, player: PlayerId) -> bool {
        self.player(player).queue.len() > 1
    }

    /// Advance both players' animations by one frame.
    ///
    /// Each non-empty queue has its head restored to the static glyph and
    /// popped. Players with two or more waypoints left get the new head drawn
    /// as their token; a player down to its last waypoint is shown at its
    /// logical position instead.
    pub fn drain_animation<R: CellRenderer>(&mut self, renderer: &mut R) {
        for id in PlayerId::ALL {
            if let Some(head) = self.player_mut(id).queue.pop_front() {
                renderer.render_cell(head, self.visual_at(head, id));
                self.set_visibility(id, true, renderer);
            }
        }

        for id in PlayerId::ALL {
            if self.is_animating(id) {
                if let Some(head) = self.player(id).queue.front() {
                    renderer.render_cell(head, Glyph::Player(id));
                }
            }
        }
    }

    /// Blink `player`'s token on or off. Does nothing mid-animation.
    pub fn flash_cursor<R: CellRenderer>(&mut self, player: PlayerId, renderer: &mut R) {
        if self.is_animating(player) {
            return;
        }

        let pos = self.position(player);
        if self.player(player).visible {
            renderer.render_cell(pos, self.visual_at(pos, player));
        } else {
            renderer.render_cell(pos, Glyph::Player(player));
        }
        let p = self.player_mut(player);
        p.visible = !p.visible;
    }

    /// Force `player`'s token shown or hidden. Hiding only records the state;
    /// the next flash redraws. Does nothing mid-animation.
    pub fn set_visibility<R: CellRenderer>(
        &mut self,
        player: PlayerId,
        visible: bool,
        renderer: &mut R,
    ) {
        if self.is_animating(player) {
            return;
        }

        self.player_mut(player).visible = visible;
        if visible {
            renderer.render_cell(self.position(player), Glyph::Player(player));
        }
    }
}
