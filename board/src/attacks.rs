use chess::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves,
    BitBoard, Board, Color, Piece, Square, EMPTY,
};

/// Squares attacked by the piece on `square`, regardless of what stands on them.
pub fn attacks_from(board: &Board, square: Square) -> BitBoard {
    let (piece, color) = match (board.piece_on(square), board.color_on(square)) {
        (Some(piece), Some(color)) => (piece, color),
        _ => return EMPTY,
    };
    let occupied = *board.combined();

    match piece {
        Piece::Pawn => get_pawn_attacks(square, color, !EMPTY),
        Piece::Knight => get_knight_moves(square),
        Piece::Bishop => get_bishop_moves(square, occupied),
        Piece::Rook => get_rook_moves(square, occupied),
        Piece::Queen => get_bishop_moves(square, occupied) | get_rook_moves(square, occupied),
        Piece::King => get_king_moves(square),
    }
}

/// Squares of `color`'s pieces that attack `square`.
pub fn attackers_of(board: &Board, color: Color, square: Square) -> BitBoard {
    let occupied = *board.combined();
    let own = *board.color_combined(color);

    let pawns = *board.pieces(Piece::Pawn) & own;
    let knights = *board.pieces(Piece::Knight) & own;
    let kings = *board.pieces(Piece::King) & own;
    let queens = *board.pieces(Piece::Queen) & own;
    let diagonal = (*board.pieces(Piece::Bishop) & own) | queens;
    let straight = (*board.pieces(Piece::Rook) & own) | queens;

    // A pawn of `color` attacks `square` exactly when a pawn of the other
    // colour standing on `square` would attack it back.
    get_pawn_attacks(square, !color, pawns)
        | (get_knight_moves(square) & knights)
        | (get_king_moves(square) & kings)
        | (get_bishop_moves(square, occupied) & diagonal)
        | (get_rook_moves(square, occupied) & straight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_start_position_attackers() {
        let board = Board::default();
        // f3 is covered by the g1 knight and the e2/g2 pawns
        let attackers = attackers_of(&board, Color::White, Square::F3);
        assert_eq!(attackers.popcnt(), 3);
        assert!(attackers_of(&board, Color::Black, Square::F3) == EMPTY);
    }

    #[test]
    fn test_slider_attacks_are_blocked() {
        let board = Board::from_str("4k3/8/8/8/8/8/4P3/R3K3 w - - 0 1").unwrap();
        let rook = attacks_from(&board, Square::A1);
        assert!(rook & BitBoard::from_square(Square::A8) != EMPTY);
        assert!(rook & BitBoard::from_square(Square::E1) != EMPTY);
        assert!(rook & BitBoard::from_square(Square::F1) == EMPTY);
    }

    #[test]
    fn test_empty_square_attacks_nothing() {
        assert!(attacks_from(&Board::default(), Square::E4) == EMPTY);
    }
}
