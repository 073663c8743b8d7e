pub const PAWN_VALUE: f32 = 100.0;
pub const KNIGHT_VALUE: f32 = 320.0;
pub const BISHOP_VALUE: f32 = 330.0;
pub const ROOK_VALUE: f32 = 500.0;
pub const QUEEN_VALUE: f32 = 900.0;

/// Sentinel larger than any realistic material sum. Never mutated.
pub const KING_VALUE: f32 = 20_000.0;

#[inline(always)]
pub fn piece_value(piece: chess::Piece) -> f32 {
    match piece {
        chess::Piece::Pawn => PAWN_VALUE,
        chess::Piece::Knight => KNIGHT_VALUE,
        chess::Piece::Bishop => BISHOP_VALUE,
        chess::Piece::Rook => ROOK_VALUE,
        chess::Piece::Queen => QUEEN_VALUE,
        chess::Piece::King => KING_VALUE,
    }
}

/// Piece kinds from the most to the least valuable, king first.
pub const PIECES_BY_VALUE: [chess::Piece; chess::NUM_PIECES] = [
    chess::Piece::King,
    chess::Piece::Queen,
    chess::Piece::Rook,
    chess::Piece::Bishop,
    chess::Piece::Knight,
    chess::Piece::Pawn,
];
