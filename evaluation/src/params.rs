use chess::{Piece, ALL_PIECES, NUM_PIECES};

use crate::pst::{
    BISHOP_PST, KING_ENDGAME_PST, KING_PST, KNIGHT_PST, PAWN_PST, QUEEN_PST, ROOK_PST,
};
use crate::values::{piece_value, KING_VALUE};

/// Material values and piece-square tables, indexed by `Piece::to_index()`.
///
/// Tables are White-oriented (a1 = 0, h8 = 63); see [`crate::pst::table_index`].
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationParameters {
    pub material: [f32; NUM_PIECES],
    pub tables: [[f32; 64]; NUM_PIECES],
    /// Replaces the king table once the position is classified as an endgame.
    pub king_endgame: [f32; 64],
}

impl EvaluationParameters {
    pub fn standard() -> Self {
        let mut material = [0.0; NUM_PIECES];
        for piece in ALL_PIECES {
            material[piece.to_index()] = piece_value(piece);
        }

        let mut tables = [[0.0; 64]; NUM_PIECES];
        tables[Piece::Pawn.to_index()] = PAWN_PST;
        tables[Piece::Knight.to_index()] = KNIGHT_PST;
        tables[Piece::Bishop.to_index()] = BISHOP_PST;
        tables[Piece::Rook.to_index()] = ROOK_PST;
        tables[Piece::Queen.to_index()] = QUEEN_PST;
        tables[Piece::King.to_index()] = KING_PST;

        Self {
            material,
            tables,
            king_endgame: KING_ENDGAME_PST,
        }
    }

    #[inline(always)]
    pub fn material_value(&self, piece: Piece) -> f32 {
        self.material[piece.to_index()]
    }

    #[inline(always)]
    pub fn table(&self, piece: Piece) -> &[f32; 64] {
        &self.tables[piece.to_index()]
    }

    /// Checks the invariants every parameter set must hold.
    pub fn is_valid(&self) -> bool {
        self.material_value(Piece::King) == KING_VALUE
            && self.material.iter().all(|v| v.is_finite() && *v >= 0.0)
            && self.tables.iter().flatten().all(|v| v.is_finite())
            && self.king_endgame.iter().all(|v| v.is_finite())
    }
}

impl Default for EvaluationParameters {
    fn default() -> Self {
        Self::standard()
    }
}
