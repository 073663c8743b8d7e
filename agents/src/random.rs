use board::Board;
use chess::ChessMove;
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::Agent;

/// Uniform choice among the legal moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn new() -> Self {
        Self
    }
}

impl<B: Board> Agent<B> for RandomAgent {
    fn name(&self) -> &str {
        "Random"
    }

    fn make_move(&mut self, board: &mut B) -> Option<ChessMove> {
        board.legal_moves().choose(&mut thread_rng()).copied()
    }
}
