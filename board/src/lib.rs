// Board capability consumed by search, agents and the match runner.
//
// The rules of chess come from the `chess` crate. This crate only wraps a
// position history behind the `Board` trait and adds the termination rules
// the crate does not track on its own (halfmove clock, repetitions,
// insufficient material).

mod attacks;
mod error;
mod game_board;
mod guard;
mod material;

use arrayvec::ArrayVec;
use chess::{BitBoard, ChessMove, Color, Piece, Square};

pub use error::BoardError;
pub use game_board::GameBoard;
pub use guard::BoardGuard;
pub use material::has_insufficient_material;

/// Upper bound on legal moves in any reachable chess position.
pub const MAX_MOVES: usize = 256;

pub type MoveList = ArrayVec<ChessMove, MAX_MOVES>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
    FivefoldRepetition,
}

/// Result of a finished game. `winner` is `None` for every draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub winner: Option<Color>,
    pub termination: Termination,
}

impl Outcome {
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

pub trait Board: Clone + Default + Send + Sync {
    fn legal_moves(&self) -> MoveList;

    fn is_legal(&self, mv: ChessMove) -> bool {
        self.legal_moves().contains(&mv)
    }

    /// Applies `mv`. Every push must be matched by exactly one `pop`.
    fn push(&mut self, mv: ChessMove);

    /// Undoes the last pushed move. Returns `None` at the root position.
    fn pop(&mut self) -> Option<ChessMove>;

    fn outcome(&self) -> Option<Outcome>;

    fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }

    fn is_stalemate(&self) -> bool {
        matches!(
            self.outcome(),
            Some(Outcome {
                termination: Termination::Stalemate,
                ..
            })
        )
    }

    fn turn(&self) -> Color;

    fn pieces_of(&self, color: Color, piece: Piece) -> BitBoard;

    fn is_attacked_by(&self, color: Color, square: Square) -> bool {
        self.attackers_of(color, square).popcnt() > 0
    }

    /// Squares holding pieces of `color` that attack `square`.
    fn attackers_of(&self, color: Color, square: Square) -> BitBoard;

    /// Squares attacked by the piece standing on `square`.
    fn attacks_from(&self, square: Square) -> BitBoard;

    fn fen(&self) -> String;
}
