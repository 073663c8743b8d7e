use chess::{Color, Square};

/// Index into a White-oriented table for a piece of `color` on `square`.
/// Black reads the table with ranks mirrored (a1 <-> a8, h1 <-> h8).
#[inline(always)]
pub fn table_index(square: Square, color: Color) -> usize {
    match color {
        Color::White => square.to_index(),
        Color::Black => square.to_index() ^ 56,
    }
}

// Classic "simplified evaluation function" tables, a1..h1 first.

// - Pushes central pawns, keeps f2/g2/h2 home for the castled king
pub const PAWN_PST: [f32; 64] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, // RANK 1: a1..h1
    5.0, 10.0, 10.0, -20.0, -20.0, 10.0, 10.0, 5.0, // RANK 2
    5.0, -5.0, -10.0, 0.0, 0.0, -10.0, -5.0, 5.0, // RANK 3
    0.0, 0.0, 0.0, 20.0, 20.0, 0.0, 0.0, 0.0, // RANK 4
    5.0, 5.0, 10.0, 25.0, 25.0, 10.0, 5.0, 5.0, // RANK 5
    10.0, 10.0, 20.0, 30.0, 30.0, 20.0, 10.0, 10.0, // RANK 6
    50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, // RANK 7
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, // RANK 8
];

// - Knights on the rim are dim
pub const KNIGHT_PST: [f32; 64] = [
    -50.0, -40.0, -30.0, -30.0, -30.0, -30.0, -40.0, -50.0, // RANK 1: a1..h1
    -40.0, -20.0, 0.0, 5.0, 5.0, 0.0, -20.0, -40.0, // RANK 2
    -30.0, 5.0, 10.0, 15.0, 15.0, 10.0, 5.0, -30.0, // RANK 3
    -30.0, 0.0, 15.0, 20.0, 20.0, 15.0, 0.0, -30.0, // RANK 4
    -30.0, 5.0, 15.0, 20.0, 20.0, 15.0, 5.0, -30.0, // RANK 5
    -30.0, 0.0, 10.0, 15.0, 15.0, 10.0, 0.0, -30.0, // RANK 6
    -40.0, -20.0, 0.0, 0.0, 0.0, 0.0, -20.0, -40.0, // RANK 7
    -50.0, -40.0, -30.0, -30.0, -30.0, -30.0, -40.0, -50.0, // RANK 8
];

// - Avoids corners and borders, likes b2/g2 fianchetto squares
pub const BISHOP_PST: [f32; 64] = [
    -20.0, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0, -20.0, // RANK 1: a1..h1
    -10.0, 5.0, 0.0, 0.0, 0.0, 0.0, 5.0, -10.0, // RANK 2
    -10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, -10.0, // RANK 3
    -10.0, 0.0, 10.0, 10.0, 10.0, 10.0, 0.0, -10.0, // RANK 4
    -10.0, 5.0, 5.0, 10.0, 10.0, 5.0, 5.0, -10.0, // RANK 5
    -10.0, 0.0, 5.0, 10.0, 10.0, 5.0, 0.0, -10.0, // RANK 6
    -10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -10.0, // RANK 7
    -20.0, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0, -20.0, // RANK 8
];

// - Centralise and reach the seventh rank
pub const ROOK_PST: [f32; 64] = [
    0.0, 0.0, 0.0, 5.0, 5.0, 0.0, 0.0, 0.0, // RANK 1: a1..h1
    -5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -5.0, // RANK 2
    -5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -5.0, // RANK 3
    -5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -5.0, // RANK 4
    -5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -5.0, // RANK 5
    -5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -5.0, // RANK 6
    5.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 5.0, // RANK 7
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, // RANK 8
];

// - Mild center bonus
pub const QUEEN_PST: [f32; 64] = [
    -20.0, -10.0, -10.0, -5.0, -5.0, -10.0, -10.0, -20.0, // RANK 1: a1..h1
    -10.0, 0.0, 5.0, 0.0, 0.0, 0.0, 0.0, -10.0, // RANK 2
    -10.0, 5.0, 5.0, 5.0, 5.0, 5.0, 0.0, -10.0, // RANK 3
    0.0, 0.0, 5.0, 5.0, 5.0, 5.0, 0.0, -5.0, // RANK 4
    -5.0, 0.0, 5.0, 5.0, 5.0, 5.0, 0.0, -5.0, // RANK 5
    -10.0, 0.0, 5.0, 5.0, 5.0, 5.0, 0.0, -10.0, // RANK 6
    -10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -10.0, // RANK 7
    -20.0, -10.0, -10.0, -5.0, -5.0, -10.0, -10.0, -20.0, // RANK 8
];

// - Stay behind the pawn shield, castle
pub const KING_PST: [f32; 64] = [
    20.0, 30.0, 10.0, 0.0, 0.0, 10.0, 30.0, 20.0, // RANK 1: a1..h1
    20.0, 20.0, 0.0, 0.0, 0.0, 0.0, 20.0, 20.0, // RANK 2
    -10.0, -20.0, -20.0, -20.0, -20.0, -20.0, -20.0, -10.0, // RANK 3
    -20.0, -30.0, -30.0, -40.0, -40.0, -30.0, -30.0, -20.0, // RANK 4
    -30.0, -40.0, -40.0, -50.0, -50.0, -40.0, -40.0, -30.0, // RANK 5
    -30.0, -40.0, -40.0, -50.0, -50.0, -40.0, -40.0, -30.0, // RANK 6
    -30.0, -40.0, -40.0, -50.0, -50.0, -40.0, -40.0, -30.0, // RANK 7
    -30.0, -40.0, -40.0, -50.0, -50.0, -40.0, -40.0, -30.0, // RANK 8
];

// - Endgame king walks to the center
pub const KING_ENDGAME_PST: [f32; 64] = [
    -50.0, -30.0, -30.0, -30.0, -30.0, -30.0, -30.0, -50.0, // RANK 1: a1..h1
    -30.0, -30.0, 0.0, 0.0, 0.0, 0.0, -30.0, -30.0, // RANK 2
    -30.0, -10.0, 20.0, 30.0, 30.0, 20.0, -10.0, -30.0, // RANK 3
    -30.0, -10.0, 30.0, 40.0, 40.0, 30.0, -10.0, -30.0, // RANK 4
    -30.0, -10.0, 30.0, 40.0, 40.0, 30.0, -10.0, -30.0, // RANK 5
    -30.0, -10.0, 20.0, 30.0, 30.0, 20.0, -10.0, -30.0, // RANK 6
    -30.0, -20.0, -10.0, 0.0, 0.0, -10.0, -20.0, -30.0, // RANK 7
    -50.0, -40.0, -30.0, -20.0, -20.0, -30.0, -40.0, -50.0, // RANK 8
];
