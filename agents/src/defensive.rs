use board::Board;
use chess::ChessMove;
use evaluation::values::PIECES_BY_VALUE;
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::Agent;

/// Takes any immediate draw, otherwise moves its most valuable attacked piece
/// to a square the opponent does not attack.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefensiveAgent;

impl DefensiveAgent {
    pub fn new() -> Self {
        Self
    }

    fn drawing_move<B: Board>(board: &mut B, moves: &[ChessMove]) -> Option<ChessMove> {
        moves.iter().copied().find(|&mv| {
            board.push(mv);
            let draw = board.outcome().is_some_and(|outcome| outcome.is_draw());
            board.pop();
            draw
        })
    }

    fn escape<B: Board>(board: &mut B, moves: &[ChessMove]) -> Option<ChessMove> {
        let us = board.turn();
        let them = !us;

        for piece in PIECES_BY_VALUE {
            for from in board.pieces_of(us, piece) {
                if !board.is_attacked_by(them, from) {
                    continue;
                }

                for to in board.attacks_from(from) {
                    let Some(&mv) = moves
                        .iter()
                        .find(|mv| mv.get_source() == from && mv.get_dest() == to)
                    else {
                        continue;
                    };

                    board.push(mv);
                    let safe = !board.is_attacked_by(them, to);
                    board.pop();
                    if safe {
                        return Some(mv);
                    }
                }
            }
        }
        None
    }
}

impl<B: Board> Agent<B> for DefensiveAgent {
    fn name(&self) -> &str {
        "Defensive"
    }

    fn make_move(&mut self, board: &mut B) -> Option<ChessMove> {
        let moves = board.legal_moves();

        Self::drawing_move(board, &moves)
            .or_else(|| Self::escape(board, &moves))
            .or_else(|| moves.choose(&mut thread_rng()).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board::GameBoard;
    use std::str::FromStr;

    #[test]
    fn test_takes_stalemate() {
        let mut board = GameBoard::from_fen("7k/8/5K2/8/8/8/8/6Q1 w - - 0 1").unwrap();
        let mv = DefensiveAgent::new().make_move(&mut board).unwrap();
        assert_eq!(mv, ChessMove::from_str("g1g6").unwrap());
        assert_eq!(board.ply(), 0);
    }

    #[test]
    fn test_moves_attacked_piece_to_safety() {
        // Pawn on d5 attacks the knight on e4
        let mut board = GameBoard::from_fen("r3k3/8/8/3p4/4N3/8/8/4K3 w - - 0 1").unwrap();
        let mv = DefensiveAgent::new().make_move(&mut board).unwrap();
        assert_eq!(mv, ChessMove::from_str("e4d2").unwrap());
    }

    #[test]
    fn test_falls_back_to_legal_move() {
        let mut board = GameBoard::default();
        let mv = DefensiveAgent::new().make_move(&mut board).unwrap();
        assert!(board.is_legal(mv));
    }
}
