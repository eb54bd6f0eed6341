//! Renderer and audio sink for a terminal: everything goes to the log.

use tracing::{debug, info, trace};

use plateau_core::{Piece, PieceId, Position};
use plateau_game::{Animation, Audio, LevelPos, Renderer, SoundCue};

/// Records sprite traffic as log events.
#[derive(Debug, Default)]
pub struct ConsoleRenderer {
    /// Cell under the hover marker; motion events only log when it changes.
    hover: Option<Position>,
}

impl Renderer for ConsoleRenderer {
    fn spawn_sprite(&mut self, id: PieceId, piece: &Piece) {
        trace!(piece = %id, texture = %piece.texture_name(), at = %piece.position(), "spawn sprite");
    }

    fn despawn_sprite(&mut self, id: PieceId) {
        trace!(piece = %id, "despawn sprite");
    }

    fn set_texture(&mut self, id: PieceId, texture: &str) {
        debug!(piece = %id, texture, "texture swapped");
    }

    fn move_sprite(&mut self, id: PieceId, to: LevelPos, animation: Option<Animation>) {
        match animation {
            Some(Animation { duration, easing }) => {
                debug!(piece = %id, x = to.x, y = to.y, ?duration, %easing, "sprite animated")
            }
            None => trace!(piece = %id, x = to.x, y = to.y, "sprite dragged"),
        }
    }

    fn set_raised(&mut self, id: PieceId, raised: bool) {
        trace!(piece = %id, raised, "sprite layer");
    }

    fn show_hover(&mut self, cell: Position) {
        if self.hover != Some(cell) {
            trace!(%cell, "hover");
            self.hover = Some(cell);
        }
    }

    fn hide_hover(&mut self) {
        if self.hover.take().is_some() {
            trace!("hover hidden");
        }
    }
}

/// Logs the sound file a real mixer would play.
#[derive(Debug, Default)]
pub struct ConsoleAudio;

impl Audio for ConsoleAudio {
    fn play(&mut self, cue: SoundCue) {
        info!(sound = cue.file_name(), "play");
    }
}

#[cfg(test)]
mod tests {
    use super::ConsoleRenderer;
    use plateau_core::Position;
    use plateau_game::Renderer;

    #[test]
    fn tracks_hover_cell() {
        let mut renderer = ConsoleRenderer::default();
        renderer.show_hover(Position::new(2, 3));
        renderer.show_hover(Position::new(2, 3));
        assert_eq!(renderer.hover, Some(Position::new(2, 3)));
        renderer.hide_hover();
        assert_eq!(renderer.hover, None);
        renderer.hide_hover();
        assert_eq!(renderer.hover, None);
    }
}
