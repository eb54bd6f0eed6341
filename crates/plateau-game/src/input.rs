//! Pointer and keyboard handling: drag a piece, drop it on a cell.

use tracing::trace;

use plateau_core::{MoveOutcome, PieceId};

use crate::presenter::{Audio, LevelPos, Renderer};
use crate::session::GameSession;

/// A window coordinate in pixels, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPos {
    /// Pixels from the left edge.
    pub x: f32,
    /// Pixels from the top edge.
    pub y: f32,
}

impl ScreenPos {
    pub const fn new(x: f32, y: f32) -> ScreenPos {
        ScreenPos { x, y }
    }
}

/// A mouse button. Only the left one moves pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Picks pieces up and drops them.
    Left,
    /// Ignored.
    Middle,
    /// Ignored.
    Right,
}

/// A key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable key; `r` or `R` restarts the game.
    Char(char),
    /// Left arrow; accepted and ignored.
    ArrowLeft,
    /// Right arrow; accepted and ignored.
    ArrowRight,
    /// Anything else.
    Other,
}

/// A discrete event from the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A button went down at `at`.
    Press {
        /// The button.
        button: MouseButton,
        /// Cursor position.
        at: ScreenPos,
    },
    /// A button came up at `at`.
    Release {
        /// The button.
        button: MouseButton,
        /// Cursor position.
        at: ScreenPos,
    },
    /// The cursor moved to `at`.
    Motion {
        /// Cursor position.
        at: ScreenPos,
    },
    /// A key was pressed.
    Key(Key),
}

/// A piece being carried by the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Drag {
    pub(crate) piece: PieceId,
    /// Where inside its cell the piece was grabbed.
    pub(crate) grab: LevelPos,
}

impl<R: Renderer, A: Audio> GameSession<R, A> {
    /// Feed one input event to the session.
    ///
    /// Returns the outcome when the event dropped a piece, `None` otherwise.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<MoveOutcome> {
        match event {
            InputEvent::Press {
                button: MouseButton::Left,
                at,
            } => {
                self.on_press(at);
                None
            }
            InputEvent::Release {
                button: MouseButton::Left,
                at,
            } => self.on_release(at),
            InputEvent::Motion { at } => {
                self.on_motion(at);
                None
            }
            InputEvent::Key(Key::Char('r' | 'R')) => {
                self.restart();
                None
            }
            InputEvent::Press { .. } | InputEvent::Release { .. } | InputEvent::Key(_) => None,
        }
    }

    fn on_press(&mut self, at: ScreenPos) {
        if self.drag.is_some() {
            return;
        }
        let level = self.config().to_level(at);
        let Some(cell) = level.cell() else {
            return;
        };
        let Some(piece) = self.board().piece_at(cell) else {
            return;
        };

        trace!(piece = %piece, %cell, "picked up");
        self.drag = Some(Drag {
            piece,
            grab: level - LevelPos::from(cell),
        });
        self.renderer.set_raised(piece, true);
    }

    fn on_motion(&mut self, at: ScreenPos) {
        let Some(drag) = self.drag else {
            return;
        };
        let level = self.config().to_level(at);
        self.renderer.move_sprite(drag.piece, level - drag.grab, None);

        let size = self.board().size();
        match level.cell() {
            Some(cell) if cell.is_on_board(size) => self.renderer.show_hover(cell),
            _ => self.renderer.hide_hover(),
        }
    }

    fn on_release(&mut self, at: ScreenPos) -> Option<MoveOutcome> {
        let drag = self.drag.take()?;
        let level = self.config().to_level(at);

        let outcome = match level.cell() {
            Some(dest) => self.try_move(drag.piece, dest),
            None => {
                let origin = self.board().get(drag.piece).map(|piece| piece.position());
                if let Some(origin) = origin {
                    let animation = self.config().animation();
                    self.renderer
                        .move_sprite(drag.piece, LevelPos::from(origin), Some(animation));
                }
                MoveOutcome::rejected()
            }
        };

        self.renderer.set_raised(drag.piece, false);
        self.renderer.hide_hover();
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::{InputEvent, Key, MouseButton, ScreenPos};
    use crate::config::SessionConfig;
    use crate::session::GameSession;
    use plateau_core::{Position, Team};

    fn headless() -> GameSession<(), ()> {
        GameSession::new(SessionConfig::default(), (), ()).unwrap()
    }

    // Centre of a cell with the default 120px cells.
    fn centre(file: i8, rank: i8) -> ScreenPos {
        ScreenPos::new(file as f32 * 120.0 + 60.0, rank as f32 * 120.0 + 60.0)
    }

    fn press(at: ScreenPos) -> InputEvent {
        InputEvent::Press {
            button: MouseButton::Left,
            at,
        }
    }

    fn release(at: ScreenPos) -> InputEvent {
        InputEvent::Release {
            button: MouseButton::Left,
            at,
        }
    }

    #[test]
    fn drag_and_drop_moves_piece() {
        let mut session = headless();
        let pawn = session.board().piece_at(Position::new(3, 6)).unwrap();

        assert_eq!(session.handle_event(press(centre(3, 6))), None);
        assert_eq!(session.dragged_piece(), Some(pawn));
        session.handle_event(InputEvent::Motion { at: centre(3, 5) });

        let outcome = session.handle_event(release(centre(3, 4))).unwrap();
        assert!(outcome.applied);
        assert_eq!(session.board().piece_at(Position::new(3, 4)), Some(pawn));
        assert_eq!(session.dragged_piece(), None);
        assert_eq!(session.turn(), Team::Black);
    }

    #[test]
    fn press_on_empty_cell_selects_nothing() {
        let mut session = headless();
        session.handle_event(press(centre(3, 3)));
        assert_eq!(session.dragged_piece(), None);
        assert_eq!(session.handle_event(release(centre(3, 4))), None);
    }

    #[test]
    fn right_button_is_ignored() {
        let mut session = headless();
        session.handle_event(InputEvent::Press {
            button: MouseButton::Right,
            at: centre(3, 6),
        });
        assert_eq!(session.dragged_piece(), None);
    }

    #[test]
    fn second_press_keeps_first_selection() {
        let mut session = headless();
        let pawn = session.board().piece_at(Position::new(3, 6)).unwrap();
        session.handle_event(press(centre(3, 6)));
        session.handle_event(press(centre(4, 6)));
        assert_eq!(session.dragged_piece(), Some(pawn));
    }

    #[test]
    fn drop_off_board_is_rejected() {
        let mut session = headless();
        session.handle_event(press(centre(3, 6)));
        let outcome = session
            .handle_event(release(ScreenPos::new(-30.0, 2000.0)))
            .unwrap();
        assert!(!outcome.applied);
        assert_eq!(session.turn(), Team::White);
    }

    #[test]
    fn r_key_restarts() {
        let mut session = headless();
        session.handle_event(press(centre(3, 6)));
        session.handle_event(release(centre(3, 4)));
        session.handle_event(InputEvent::Key(Key::Char('r')));
        assert_eq!(session.turn(), Team::White);
        assert!(session.board().is_occupied(Position::new(3, 6)));
        assert!(!session.board().is_occupied(Position::new(3, 4)));
    }

    #[test]
    fn arrow_keys_do_nothing() {
        let mut session = headless();
        assert_eq!(session.handle_event(InputEvent::Key(Key::ArrowLeft)), None);
        assert_eq!(session.turn(), Team::White);
    }
}
