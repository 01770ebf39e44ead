//! The move/turn engine.
//!
//! `JanggiGame` owns the board, the terminal state and the last mover. All
//! board writes of a live game go through `try_move`, which either commits a
//! move completely or leaves every cell as it found it. The only failing call
//! that changes anything is the one that discovers the mover is checkmated:
//! it ends the game in the opponent's favor.

use log::{debug, info};

use crate::game_state::board::Board;
use crate::game_state::game_config::GameConfig;
use crate::game_state::game_state::GameState;
use crate::game_state::janggi_types::{Color, Piece, PieceKind, Square};
use crate::janggi_errors::{JanggiErrors, MoveRejection};
use crate::move_generation::legal_move_apply::{revert_move, simulate_move};
use crate::move_generation::legal_move_checks;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::pseudo_legal_moves::pseudo_legal_moves;
use crate::moves::move_descriptions::{MoveOutcome, MoveRecord, PlayerMove};
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::layout_generator::generate_layout;
use crate::utils::layout_parser::{parse_layout, starting_board};

#[derive(Debug, Clone)]
pub struct JanggiGame {
    board: Board,
    state: GameState,
    last_mover: Color,
    config: GameConfig,
    history: Vec<MoveRecord>,
}

impl Default for JanggiGame {
    fn default() -> Self {
        Self::new()
    }
}

impl JanggiGame {
    /// Canonical starting position; Blue moves first.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self::from_board(starting_board(), config)
    }

    /// Start a game from an arbitrary position.
    pub fn from_board(board: Board, config: GameConfig) -> Self {
        Self {
            board,
            state: GameState::InProgress,
            last_mover: config.first_mover.opposite(),
            config,
            history: Vec::new(),
        }
    }

    pub fn from_layout(layout: &str, config: GameConfig) -> Result<Self, JanggiErrors> {
        Ok(Self::from_board(parse_layout(layout)?, config))
    }

    #[inline]
    pub fn game_state(&self) -> GameState {
        self.state
    }

    /// Read-only view of the board for presentation layers.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn occupant(&self, square: Square) -> Option<Piece> {
        self.board.occupant(square)
    }

    #[inline]
    pub fn last_mover(&self) -> Color {
        self.last_mover
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.last_mover.opposite()
    }

    #[inline]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        legal_move_checks::is_in_check(&self.board, color)
    }

    pub fn is_checkmated(&self, color: Color) -> bool {
        legal_move_checks::is_checkmated(&self.board, color)
    }

    /// Pseudo-legal destinations of the piece on `square`, if any.
    pub fn destinations_from(&self, square: Square) -> Option<Vec<Square>> {
        let piece = self.board.occupant(square)?;
        Some(pseudo_legal_moves(&piece, square, &self.board).iter().collect())
    }

    /// Every move the side to move could make right now.
    pub fn legal_moves(&self) -> Vec<PlayerMove> {
        if self.state.is_over() {
            return Vec::new();
        }
        generate_legal_moves(&self.board, self.side_to_move())
    }

    pub fn layout(&self) -> String {
        generate_layout(&self.board)
    }

    /// Boolean form of `try_move`. `from == to` is a pass.
    pub fn make_move(&mut self, from: Square, to: Square) -> bool {
        self.try_move(PlayerMove::from_squares(from, to)).is_ok()
    }

    /// `make_move` on textual coordinates such as `"e7"`. Malformed text is an
    /// error and never reaches the engine.
    pub fn make_move_algebraic(&mut self, from: &str, to: &str) -> Result<bool, JanggiErrors> {
        let from = algebraic_to_square(from)?;
        let to = algebraic_to_square(to)?;
        Ok(self.make_move(from, to))
    }

    pub fn try_move(&mut self, mv: PlayerMove) -> Result<MoveOutcome, MoveRejection> {
        let result = self.apply_player_move(mv);
        match &result {
            Ok(outcome) => debug!("accepted {mv}: {outcome:?}"),
            Err(rejection) => debug!("rejected {mv}: {rejection}"),
        }
        result
    }

    fn apply_player_move(&mut self, mv: PlayerMove) -> Result<MoveOutcome, MoveRejection> {
        if self.state.is_over() {
            return Err(MoveRejection::GameOver);
        }

        let source = mv.source();
        let piece = self
            .board
            .occupant(source)
            .ok_or(MoveRejection::EmptySource(source))?;
        let mover = piece.color();

        if mover == self.last_mover {
            return Err(MoveRejection::NotYourTurn(mover));
        }

        let (from, to) = match mv {
            PlayerMove::Pass { .. } => {
                if self.is_in_check(mover) {
                    return Err(MoveRejection::PassWhileInCheck(mover));
                }
                self.record(mv, mover, None);
                return Ok(MoveOutcome::Passed);
            }
            PlayerMove::Step { from, to } => (from, to),
        };

        if self.is_in_check(mover) && self.is_checkmated(mover) {
            let winner = mover.opposite();
            self.state = GameState::won_by(winner);
            info!("{mover} is checkmated; {winner} wins");
            return Err(MoveRejection::Checkmated { winner });
        }

        if !pseudo_legal_moves(&piece, from, &self.board).contains(to) {
            return Err(MoveRejection::IllegalDestination { from, to });
        }

        let undo = simulate_move(&mut self.board, from, to)
            .ok_or(MoveRejection::EmptySource(from))?;
        if self.is_in_check(mover) {
            revert_move(&mut self.board, undo);
            return Err(MoveRejection::LeavesGeneralInCheck { from, to });
        }

        let captured = undo.displaced_piece;
        self.record(mv, mover, captured);

        if captured.is_some_and(|victim| victim.kind() == PieceKind::General) {
            self.state = GameState::won_by(mover);
            info!("{mover} captured the opposing general; {mover} wins");
            return Ok(MoveOutcome::CapturedGeneral { winner: mover });
        }

        Ok(MoveOutcome::Moved { captured })
    }

    fn record(&mut self, mv: PlayerMove, mover: Color, captured: Option<Piece>) {
        self.last_mover = mover;
        self.history.push(MoveRecord {
            mv,
            mover,
            captured,
        });
    }
}
