//! Seams to the presentation layer: sprites, hover marker and sound.
//!
//! The session never draws or plays anything itself. It drives a
//! [`Renderer`] and an [`Audio`] sink, both supplied by the embedding
//! application. `()` implements both as a no-op for headless use.

use std::fmt;
use std::ops::{Add, Sub};
use std::time::Duration;

use plateau_core::{MoveOutcome, Piece, PieceId, Position};

/// A point in level space, measured in cells. `(0.0, 0.0)` is the top-left
/// corner of cell (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LevelPos {
    /// Horizontal distance from the left edge, in cells.
    pub x: f32,
    /// Vertical distance from the top edge, in cells.
    pub y: f32,
}

impl LevelPos {
    pub const fn new(x: f32, y: f32) -> LevelPos {
        LevelPos { x, y }
    }

    /// Return the cell containing this point, if the point is finite.
    pub fn cell(self) -> Option<Position> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return None;
        }
        // Float-to-int casts saturate, and saturated cells are off any board.
        Some(Position::new(self.x.floor() as i8, self.y.floor() as i8))
    }
}

impl From<Position> for LevelPos {
    fn from(position: Position) -> LevelPos {
        LevelPos::new(position.file() as f32, position.rank() as f32)
    }
}

impl Add for LevelPos {
    type Output = LevelPos;

    fn add(self, rhs: LevelPos) -> LevelPos {
        LevelPos::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for LevelPos {
    type Output = LevelPos;

    fn sub(self, rhs: LevelPos) -> LevelPos {
        LevelPos::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Sound effect played after an applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// `move.mp3` -- a quiet move.
    Move,
    /// `override.mp3` -- a piece was taken.
    Capture,
    /// `promote.mp3` -- a pawn became a queen.
    Promotion,
    /// `castling.mp3` -- king and rook moved together.
    Castle,
}

impl SoundCue {
    /// Pick the cue for an outcome: castle over promotion over capture over
    /// a plain move.
    pub fn for_outcome(outcome: &MoveOutcome) -> SoundCue {
        if outcome.castled {
            SoundCue::Castle
        } else if outcome.promoted {
            SoundCue::Promotion
        } else if outcome.captured {
            SoundCue::Capture
        } else {
            SoundCue::Move
        }
    }

    /// Asset name of the effect.
    pub const fn file_name(self) -> &'static str {
        match self {
            SoundCue::Move => "move.mp3",
            SoundCue::Capture => "override.mp3",
            SoundCue::Promotion => "promote.mp3",
            SoundCue::Castle => "castling.mp3",
        }
    }
}

/// Timing curve of a sprite animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Easing {
    /// `linear` -- constant speed.
    #[default]
    Linear,
    /// `ease-in` -- slow start.
    EaseIn,
    /// `ease-out` -- slow finish.
    EaseOut,
    /// `ease-in-out` -- slow start and finish.
    EaseInOut,
}

impl Easing {
    /// Every curve, in declaration order.
    pub const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ];

    /// Name used on the command line and in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }

    /// Look a curve up by [`name`](Easing::name), ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Easing> {
        Easing::ALL
            .into_iter()
            .find(|easing| easing.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a sprite glides to its new place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Animation {
    /// Time from start to finish.
    pub duration: Duration,
    /// Speed curve over that time.
    pub easing: Easing,
}

/// Sprite and marker display.
pub trait Renderer {
    /// Show a new sprite for `piece`.
    fn spawn_sprite(&mut self, id: PieceId, piece: &Piece);

    /// Remove a sprite for good.
    fn despawn_sprite(&mut self, id: PieceId);

    /// Swap the texture of a sprite, e.g. after promotion.
    fn set_texture(&mut self, id: PieceId, texture: &str);

    /// Move a sprite, animated when `animation` is given, instantly otherwise.
    fn move_sprite(&mut self, id: PieceId, to: LevelPos, animation: Option<Animation>);

    /// Draw a sprite above the others while it is being dragged.
    fn set_raised(&mut self, id: PieceId, raised: bool);

    /// Highlight the cell under the cursor.
    fn show_hover(&mut self, cell: Position);

    /// Remove the highlight.
    fn hide_hover(&mut self);
}

/// Sound playback.
pub trait Audio {
    /// Start playing a cue; never blocks until it finishes.
    fn play(&mut self, cue: SoundCue);
}

impl Renderer for () {
    fn spawn_sprite(&mut self, _id: PieceId, _piece: &Piece) {}
    fn despawn_sprite(&mut self, _id: PieceId) {}
    fn set_texture(&mut self, _id: PieceId, _texture: &str) {}
    fn move_sprite(&mut self, _id: PieceId, _to: LevelPos, _animation: Option<Animation>) {}
    fn set_raised(&mut self, _id: PieceId, _raised: bool) {}
    fn show_hover(&mut self, _cell: Position) {}
    fn hide_hover(&mut self) {}
}

impl Audio for () {
    fn play(&mut self, _cue: SoundCue) {}
}
