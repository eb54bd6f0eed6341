//! A running game: board, turn order and presentation.

use tracing::{debug, info};

use plateau_core::{
    Board, MoveList, MoveOutcome, MovementTable, PieceId, Position, Team, attempt_move,
    generate_legal_moves,
};

use crate::config::SessionConfig;
use crate::error::ConfigError;
use crate::input::Drag;
use crate::presenter::{Audio, LevelPos, Renderer, SoundCue};

/// One game between two players sharing the same input device.
///
/// The session owns the turn: a move by the side not on turn is rejected
/// before the rules are even consulted. Every accepted move is mirrored to the
/// renderer and audio sink, and every rejected one snaps the sprite back.
pub struct GameSession<R, A> {
    config: SessionConfig,
    table: MovementTable,
    /// Untouched starting layout, cloned on restart.
    initial: Board,
    board: Board,
    turn: Team,
    pub(crate) drag: Option<Drag>,
    pub(crate) renderer: R,
    audio: A,
}

impl<R: Renderer, A: Audio> GameSession<R, A> {
    /// Start a game in the standard layout with White to move.
    pub fn new(config: SessionConfig, renderer: R, audio: A) -> Result<Self, ConfigError> {
        config.validate()?;
        let initial = Board::starting_position(config.board_size)?;
        let mut session = Self {
            table: MovementTable::new(config.board_size),
            board: initial.clone(),
            initial,
            turn: Team::White,
            drag: None,
            renderer,
            audio,
            config,
        };
        session.spawn_all();
        info!(board_size = session.config.board_size, "game started");
        Ok(session)
    }

    /// Return the active configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Return the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the movement tables in use.
    pub fn table(&self) -> &MovementTable {
        &self.table
    }

    /// Return the side to move.
    pub fn turn(&self) -> Team {
        self.turn
    }

    /// Return the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Return the audio sink.
    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Return the piece currently held by the pointer, if any.
    pub fn dragged_piece(&self) -> Option<PieceId> {
        self.drag.as_ref().map(|drag| drag.piece)
    }

    /// Legal destinations of a piece, regardless of whose turn it is.
    pub fn legal_moves(&self, id: PieceId) -> MoveList {
        generate_legal_moves(&self.board, &self.table, id)
    }

    /// Play a move for the side on turn.
    ///
    /// Rejected moves leave the board as it was and glide the sprite back to
    /// its cell.
    pub fn try_move(&mut self, id: PieceId, dest: Position) -> MoveOutcome {
        let Some(piece) = self.board.get(id) else {
            return MoveOutcome::rejected();
        };
        let origin = piece.position();

        if piece.team() != self.turn {
            debug!(piece = %id, team = %piece.team(), turn = %self.turn, "not this side's turn");
            self.snap_back(id, origin);
            return MoveOutcome::rejected();
        }

        let outcome = attempt_move(&mut self.board, &self.table, id, dest);
        if !outcome.applied {
            debug!(piece = %id, from = %origin, to = %dest, "move rejected");
            self.snap_back(id, origin);
            return outcome;
        }

        self.present(id, &outcome);
        self.next_turn();
        outcome
    }

    /// Throw the current game away and set up a fresh one.
    pub fn restart(&mut self) {
        for (id, _) in self.board.iter() {
            self.renderer.despawn_sprite(id);
        }
        self.renderer.hide_hover();
        self.drag = None;
        self.board = self.initial.clone();
        self.turn = Team::White;
        self.spawn_all();
        info!("game restarted");
    }

    /// Replace the configuration and restart with it.
    pub fn reconfigure(&mut self, config: SessionConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.initial = Board::starting_position(config.board_size)?;
        self.table = MovementTable::new(config.board_size);
        self.config = config;
        self.restart();
        Ok(())
    }

    fn next_turn(&mut self) {
        self.turn = !self.turn;
        debug!(turn = %self.turn, "turn passed");
    }

    fn spawn_all(&mut self) {
        for (id, piece) in self.board.iter() {
            self.renderer.spawn_sprite(id, piece);
        }
    }

    fn snap_back(&mut self, id: PieceId, origin: Position) {
        self.renderer
            .move_sprite(id, LevelPos::from(origin), Some(self.config.animation()));
    }

    fn present(&mut self, id: PieceId, outcome: &MoveOutcome) {
        self.audio.play(SoundCue::for_outcome(outcome));

        if let Some(removed) = outcome.removed {
            self.renderer.despawn_sprite(removed);
        }
        if outcome.promoted
            && let Some(piece) = self.board.get(id)
        {
            self.renderer.set_texture(id, &piece.texture_name());
        }
        for relocation in &outcome.relocations {
            self.renderer.move_sprite(
                relocation.piece,
                LevelPos::from(relocation.to),
                Some(self.config.animation()),
            );
        }
    }
}
