use board::Board;
use chess::{Color, Piece, ALL_COLORS, ALL_PIECES};

use crate::pst::table_index;
use crate::EvaluationParameters;

/// Scores positions with material values and piece-square tables.
///
/// Holds no state of its own, so repeated evaluation of a position with the
/// same parameters always yields the same score.
#[derive(Clone, Copy)]
pub struct Evaluator<'a> {
    params: &'a EvaluationParameters,
}

impl<'a> Evaluator<'a> {
    pub fn new(params: &'a EvaluationParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EvaluationParameters {
        self.params
    }

    /// Summed material value of `color`'s pieces, king included.
    pub fn material<B: Board>(&self, board: &B, color: Color) -> f32 {
        ALL_PIECES
            .iter()
            .map(|&piece| {
                board.pieces_of(color, piece).popcnt() as f32 * self.params.material_value(piece)
            })
            .sum()
    }

    /// Material plus piece-square score of `color`'s pieces.
    pub fn evaluate<B: Board>(&self, board: &B, color: Color, is_endgame: bool) -> f32 {
        let mut positional = 0.0;
        for piece in ALL_PIECES {
            let table = if piece == Piece::King && is_endgame {
                &self.params.king_endgame
            } else {
                self.params.table(piece)
            };

            for square in board.pieces_of(color, piece) {
                positional += table[table_index(square, color)];
            }
        }

        self.material(board, color) + positional
    }

    /// No queens on the board, or no side holding a single queen together
    /// with more than a minor piece and the king.
    pub fn is_endgame<B: Board>(&self, board: &B) -> bool {
        let queens: [u32; 2] = [
            board.pieces_of(Color::White, Piece::Queen).popcnt(),
            board.pieces_of(Color::Black, Piece::Queen).popcnt(),
        ];
        if queens.iter().all(|&count| count == 0) {
            return true;
        }

        let max_material = self.params.material_value(Piece::Bishop)
            + self.params.material_value(Piece::Queen)
            + self.params.material_value(Piece::King);

        !ALL_COLORS.iter().any(|&color| {
            queens[color.to_index()] == 1 && self.material(board, color) > max_material
        })
    }
}
