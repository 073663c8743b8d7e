use board::Board;
use chess::ChessMove;
use evaluation::values::PIECES_BY_VALUE;
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::Agent;

/// Captures the most valuable enemy piece it can; otherwise plays a random
/// move that does not stalemate the opponent.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAgent;

impl GreedyAgent {
    pub fn new() -> Self {
        Self
    }

    fn best_capture<B: Board>(board: &B) -> Option<ChessMove> {
        let us = board.turn();
        let moves = board.legal_moves();

        for piece in PIECES_BY_VALUE {
            for target in board.pieces_of(!us, piece) {
                for from in board.attackers_of(us, target) {
                    let capture = moves
                        .iter()
                        .find(|mv| mv.get_source() == from && mv.get_dest() == target);
                    if let Some(&mv) = capture {
                        return Some(mv);
                    }
                }
            }
        }
        None
    }
}

/// Random legal move, avoiding moves that stalemate the opponent unless it is
/// the only move available.
pub(crate) fn random_non_stalemating<B: Board>(board: &mut B) -> Option<ChessMove> {
    let mut moves = board.legal_moves();
    if moves.len() <= 1 {
        return moves.first().copied();
    }

    moves.shuffle(&mut thread_rng());
    let fallback = moves[0];
    let found = moves.into_iter().find(|&mv| {
        board.push(mv);
        let stalemate = board.is_stalemate();
        board.pop();
        !stalemate
    });
    Some(found.unwrap_or(fallback))
}

impl<B: Board> Agent<B> for GreedyAgent {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn make_move(&mut self, board: &mut B) -> Option<ChessMove> {
        Self::best_capture(board).or_else(|| random_non_stalemating(board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board::GameBoard;
    use std::str::FromStr;

    #[test]
    fn test_captures_most_valuable_piece() {
        // Knight on d4 can take either the pawn on e6 or the queen on c6
        let mut board = GameBoard::from_fen("4k3/8/2q1p3/8/3N4/8/8/4K3 w - - 0 1").unwrap();
        let mv = GreedyAgent::new().make_move(&mut board).unwrap();
        assert_eq!(mv, ChessMove::from_str("d4c6").unwrap());
    }

    #[test]
    fn test_captures_with_promotion() {
        let mut board = GameBoard::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let mv = GreedyAgent::new().make_move(&mut board).unwrap();
        assert_eq!(mv.get_source(), chess::Square::A7);
        assert_eq!(mv.get_dest(), chess::Square::B8);
        assert!(mv.get_promotion().is_some());
    }

    #[test]
    fn test_avoids_stalemating_opponent() {
        // Qg6 stalemates; every other legal move keeps the game going
        let mut board = GameBoard::from_fen("7k/8/5K2/8/8/8/8/6Q1 w - - 0 1").unwrap();
        let stalemate = ChessMove::from_str("g1g6").unwrap();
        for _ in 0..50 {
            let mv = GreedyAgent::new().make_move(&mut board).unwrap();
            assert_ne!(mv, stalemate);
            assert!(board.is_legal(mv));
        }
        assert_eq!(board.ply(), 0);
    }
}
