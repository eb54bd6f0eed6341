//! Integration tests for what the session tells the renderer and audio sink.
//!
//! A recording renderer and audio sink capture every call so the tests can
//! check sprite animation, snapping back, captures, promotion textures,
//! castling and the hover marker.

use std::time::Duration;

use plateau_core::{Piece, PieceId, Position, Team};
use plateau_game::{
    Animation, Audio, Easing, GameSession, InputEvent, LevelPos, MouseButton, Renderer, ScreenPos,
    SessionConfig, SoundCue,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Spawn(PieceId, String),
    Despawn(PieceId),
    Texture(PieceId, String),
    Move(PieceId, LevelPos, Option<Animation>),
    Raise(PieceId, bool),
    ShowHover(Position),
    HideHover,
}

#[derive(Default)]
struct RecordingRenderer {
    calls: Vec<Call>,
}

impl Renderer for RecordingRenderer {
    fn spawn_sprite(&mut self, id: PieceId, piece: &Piece) {
        self.calls.push(Call::Spawn(id, piece.texture_name()));
    }
    fn despawn_sprite(&mut self, id: PieceId) {
        self.calls.push(Call::Despawn(id));
    }
    fn set_texture(&mut self, id: PieceId, texture: &str) {
        self.calls.push(Call::Texture(id, texture.to_string()));
    }
    fn move_sprite(&mut self, id: PieceId, to: LevelPos, animation: Option<Animation>) {
        self.calls.push(Call::Move(id, to, animation));
    }
    fn set_raised(&mut self, id: PieceId, raised: bool) {
        self.calls.push(Call::Raise(id, raised));
    }
    fn show_hover(&mut self, cell: Position) {
        self.calls.push(Call::ShowHover(cell));
    }
    fn hide_hover(&mut self) {
        self.calls.push(Call::HideHover);
    }
}

#[derive(Default)]
struct RecordingAudio {
    cues: Vec<SoundCue>,
}

impl Audio for RecordingAudio {
    fn play(&mut self, cue: SoundCue) {
        self.cues.push(cue);
    }
}

type Session = GameSession<RecordingRenderer, RecordingAudio>;

const ANIMATION: Option<Animation> = Some(Animation {
    duration: Duration::from_millis(100),
    easing: Easing::Linear,
});

fn session() -> Session {
    GameSession::new(
        SessionConfig::default(),
        RecordingRenderer::default(),
        RecordingAudio::default(),
    )
    .unwrap()
}

fn p(file: i8, rank: i8) -> Position {
    Position::new(file, rank)
}

fn id_at(session: &Session, file: i8, rank: i8) -> PieceId {
    session.board().piece_at(p(file, rank)).unwrap()
}

fn calls(session: &Session) -> &[Call] {
    &session.renderer().calls
}

/// Play a sequence of (from, to) moves that must all be accepted.
fn play(session: &mut Session, moves: &[((i8, i8), (i8, i8))]) {
    for &((ff, fr), (tf, tr)) in moves {
        let id = id_at(session, ff, fr);
        assert!(session.try_move(id, p(tf, tr)).applied, "({ff},{fr}) -> ({tf},{tr})");
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

#[test]
fn spawns_every_piece() {
    let session = session();
    let spawns = calls(&session)
        .iter()
        .filter(|c| matches!(c, Call::Spawn(..)))
        .count();
    assert_eq!(spawns, 32);
    assert!(calls(&session).contains(&Call::Spawn(id_at(&session, 4, 7), "white-king.png".into())));
}

#[test]
fn restart_despawns_then_respawns() {
    let mut session = session();
    session.restart();
    let despawns = calls(&session)
        .iter()
        .filter(|c| matches!(c, Call::Despawn(_)))
        .count();
    let spawns = calls(&session)
        .iter()
        .filter(|c| matches!(c, Call::Spawn(..)))
        .count();
    assert_eq!(despawns, 32);
    assert_eq!(spawns, 64);
}

// ── Moves ─────────────────────────────────────────────────────────────────────

#[test]
fn applied_move_animates_and_plays_move_cue() {
    let mut session = session();
    let knight = id_at(&session, 6, 7);
    assert!(session.try_move(knight, p(5, 5)).applied);

    assert_eq!(
        calls(&session).last(),
        Some(&Call::Move(knight, LevelPos::new(5.0, 5.0), ANIMATION))
    );
    assert_eq!(session.audio().cues, vec![SoundCue::Move]);
}

#[test]
fn out_of_turn_move_snaps_back_silently() {
    let mut session = session();
    let black_knight = id_at(&session, 1, 0);
    assert!(!session.try_move(black_knight, p(2, 2)).applied);

    assert_eq!(
        calls(&session).last(),
        Some(&Call::Move(black_knight, LevelPos::new(1.0, 0.0), ANIMATION))
    );
    assert!(session.audio().cues.is_empty());
    assert_eq!(session.turn(), Team::White);
}

#[test]
fn capture_despawns_victim() {
    let mut session = session();
    play(&mut session, &[((4, 6), (4, 4)), ((3, 1), (3, 3))]);
    let victim = id_at(&session, 3, 3);
    let pawn = id_at(&session, 4, 4);

    let outcome = session.try_move(pawn, p(3, 3));
    assert!(outcome.captured);
    assert!(calls(&session).contains(&Call::Despawn(victim)));
    assert_eq!(session.audio().cues.last(), Some(&SoundCue::Capture));
}

#[test]
fn promotion_swaps_texture() {
    let mut session = session();
    // White's h-pawn marches up the h-file after taking on g-file.
    play(
        &mut session,
        &[
            ((7, 6), (7, 4)),
            ((6, 1), (6, 3)),
            ((7, 4), (6, 3)),
            ((0, 1), (0, 2)),
            ((6, 3), (6, 2)),
            ((0, 2), (0, 3)),
            ((6, 2), (7, 1)),
            ((0, 3), (0, 4)),
        ],
    );
    let pawn = id_at(&session, 7, 1);
    let outcome = session.try_move(pawn, p(6, 0));
    assert!(outcome.promoted && outcome.captured);
    assert!(calls(&session).contains(&Call::Texture(pawn, "white-queen.png".into())));
    assert_eq!(session.audio().cues.last(), Some(&SoundCue::Promotion));
}

#[test]
fn castling_moves_both_sprites_and_passes_turn_once() {
    let mut session = session();
    play(
        &mut session,
        &[
            ((6, 7), (5, 5)),
            ((0, 1), (0, 2)),
            ((4, 6), (4, 5)),
            ((0, 2), (0, 3)),
            ((5, 7), (4, 6)),
            ((0, 3), (0, 4)),
        ],
    );
    let king = id_at(&session, 4, 7);
    let rook = id_at(&session, 7, 7);

    let outcome = session.try_move(king, p(6, 7));
    assert!(outcome.castled);
    assert_eq!(session.turn(), Team::Black);

    let tail = &calls(&session)[calls(&session).len() - 2..];
    assert_eq!(
        tail,
        &[
            Call::Move(king, LevelPos::new(6.0, 7.0), ANIMATION),
            Call::Move(rook, LevelPos::new(5.0, 7.0), ANIMATION),
        ]
    );
    assert_eq!(session.audio().cues.last(), Some(&SoundCue::Castle));
}

#[test]
fn configured_easing_reaches_every_animation() {
    let config = SessionConfig {
        move_duration: Duration::from_millis(250),
        easing: Easing::EaseOut,
        ..SessionConfig::default()
    };
    let mut session = GameSession::new(
        config,
        RecordingRenderer::default(),
        RecordingAudio::default(),
    )
    .unwrap();
    let expected = Some(Animation {
        duration: Duration::from_millis(250),
        easing: Easing::EaseOut,
    });

    let knight = id_at(&session, 1, 7);
    assert!(session.try_move(knight, p(2, 5)).applied);
    assert_eq!(
        calls(&session).last(),
        Some(&Call::Move(knight, LevelPos::new(2.0, 5.0), expected))
    );

    // Black's rook is boxed in by its own pawn.
    let rook = id_at(&session, 0, 0);
    assert!(!session.try_move(rook, p(0, 3)).applied);
    assert_eq!(
        calls(&session).last(),
        Some(&Call::Move(rook, LevelPos::new(0.0, 0.0), expected))
    );
}

// ── Pointer ───────────────────────────────────────────────────────────────────

#[test]
fn drag_raises_follows_and_hovers() {
    let mut session = session();
    let pawn = id_at(&session, 2, 6);

    session.handle_event(InputEvent::Press {
        button: MouseButton::Left,
        at: ScreenPos::new(2.0 * 120.0 + 30.0, 6.0 * 120.0 + 90.0),
    });
    assert_eq!(calls(&session).last(), Some(&Call::Raise(pawn, true)));

    session.handle_event(InputEvent::Motion {
        at: ScreenPos::new(2.0 * 120.0 + 30.0, 5.0 * 120.0 + 90.0),
    });
    let n = calls(&session).len();
    assert_eq!(
        &calls(&session)[n - 2..],
        &[
            Call::Move(pawn, LevelPos::new(2.0, 5.0), None),
            Call::ShowHover(p(2, 5)),
        ]
    );

    let outcome = session
        .handle_event(InputEvent::Release {
            button: MouseButton::Left,
            at: ScreenPos::new(2.0 * 120.0 + 30.0, 5.0 * 120.0 + 90.0),
        })
        .unwrap();
    assert!(outcome.applied);
    let n = calls(&session).len();
    assert_eq!(
        &calls(&session)[n - 3..],
        &[
            Call::Move(pawn, LevelPos::new(2.0, 5.0), ANIMATION),
            Call::Raise(pawn, false),
            Call::HideHover,
        ]
    );
}

#[test]
fn motion_off_board_hides_hover() {
    let mut session = session();
    session.handle_event(InputEvent::Press {
        button: MouseButton::Left,
        at: ScreenPos::new(60.0, 60.0),
    });
    session.handle_event(InputEvent::Motion {
        at: ScreenPos::new(-50.0, 60.0),
    });
    assert_eq!(calls(&session).last(), Some(&Call::HideHover));
}
