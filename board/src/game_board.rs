use std::str::FromStr;

use ahash::AHashMap;
use chess::{BitBoard, BoardStatus, ChessMove, Color, MoveGen, Piece, Square};

use crate::{
    attacks, has_insufficient_material, Board, BoardError, MoveList, Outcome, Termination,
};

/// Halfmoves without a capture or pawn move that end the game outright.
const SEVENTY_FIVE_MOVE_PLIES: u16 = 150;
const FIVEFOLD_REPETITION: u8 = 5;

/// A game in progress: the root position plus every position reached from it.
#[derive(Debug, Clone)]
pub struct GameBoard {
    positions: Vec<chess::Board>,
    moves: Vec<ChessMove>,
    halfmove_clocks: Vec<u16>,
    repetitions: AHashMap<u64, u8>,
    root_fullmove: u16,
}

impl GameBoard {
    pub fn new(root: chess::Board) -> Self {
        Self::with_clocks(root, 0, 1)
    }

    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        let root = chess::Board::from_str(fen).map_err(|e| BoardError::InvalidFen {
            fen: fen.to_string(),
            reason: format!("{:?}", e),
        })?;

        let fields: Vec<&str> = fen.split_whitespace().collect();
        let halfmove_clock = fields.get(4).and_then(|s| s.parse().ok()).unwrap_or(0);
        let fullmove = fields.get(5).and_then(|s| s.parse().ok()).unwrap_or(1);

        Ok(Self::with_clocks(root, halfmove_clock, fullmove))
    }

    fn with_clocks(root: chess::Board, halfmove_clock: u16, fullmove: u16) -> Self {
        let mut repetitions = AHashMap::new();
        repetitions.insert(root.get_hash(), 1);

        Self {
            positions: vec![root],
            moves: Vec::new(),
            halfmove_clocks: vec![halfmove_clock],
            repetitions,
            root_fullmove: fullmove.max(1),
        }
    }

    #[inline]
    pub fn position(&self) -> &chess::Board {
        // Never empty: the root is pushed in the constructor and never popped.
        &self.positions[self.positions.len() - 1]
    }

    /// Number of plies played since the root position.
    pub fn ply(&self) -> usize {
        self.moves.len()
    }

    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clocks[self.halfmove_clocks.len() - 1]
    }

    pub fn fullmove_number(&self) -> u16 {
        let root_offset = match self.positions[0].side_to_move() {
            Color::White => 0,
            Color::Black => 1,
        };
        self.root_fullmove + ((self.moves.len() + root_offset) / 2) as u16
    }

    fn repetition_count(&self) -> u8 {
        self.repetitions
            .get(&self.position().get_hash())
            .copied()
            .unwrap_or(0)
    }
}

impl Default for GameBoard {
    fn default() -> Self {
        Self::new(chess::Board::default())
    }
}

impl Board for GameBoard {
    fn legal_moves(&self) -> MoveList {
        MoveGen::new_legal(self.position()).collect()
    }

    fn push(&mut self, mv: ChessMove) {
        let current = *self.position();

        let is_pawn_move = current.piece_on(mv.get_source()) == Some(Piece::Pawn);
        let is_capture = current.piece_on(mv.get_dest()).is_some();
        let clock = if is_pawn_move || is_capture {
            0
        } else {
            self.halfmove_clock().saturating_add(1)
        };

        let next = current.make_move_new(mv);
        *self.repetitions.entry(next.get_hash()).or_insert(0) += 1;

        self.positions.push(next);
        self.moves.push(mv);
        self.halfmove_clocks.push(clock);
    }

    fn pop(&mut self) -> Option<ChessMove> {
        if self.positions.len() == 1 {
            return None;
        }

        let hash = self.position().get_hash();
        if let Some(count) = self.repetitions.get_mut(&hash) {
            *count -= 1;
            if *count == 0 {
                self.repetitions.remove(&hash);
            }
        }

        self.positions.pop();
        self.halfmove_clocks.pop();
        self.moves.pop()
    }

    fn outcome(&self) -> Option<Outcome> {
        let position = self.position();

        let (winner, termination) = match position.status() {
            BoardStatus::Checkmate => (Some(!position.side_to_move()), Termination::Checkmate),
            BoardStatus::Stalemate => (None, Termination::Stalemate),
            BoardStatus::Ongoing => {
                if has_insufficient_material(position) {
                    (None, Termination::InsufficientMaterial)
                } else if self.halfmove_clock() >= SEVENTY_FIVE_MOVE_PLIES {
                    (None, Termination::SeventyFiveMoves)
                } else if self.repetition_count() >= FIVEFOLD_REPETITION {
                    (None, Termination::FivefoldRepetition)
                } else {
                    return None;
                }
            }
        };

        Some(Outcome {
            winner,
            termination,
        })
    }

    #[inline]
    fn turn(&self) -> Color {
        self.position().side_to_move()
    }

    #[inline]
    fn pieces_of(&self, color: Color, piece: Piece) -> BitBoard {
        let position = self.position();
        position.pieces(piece) & position.color_combined(color)
    }

    fn attackers_of(&self, color: Color, square: Square) -> BitBoard {
        attacks::attackers_of(self.position(), color, square)
    }

    fn attacks_from(&self, square: Square) -> BitBoard {
        attacks::attacks_from(self.position(), square)
    }

    fn fen(&self) -> String {
        // The chess crate does not track clocks, so the last two fields are ours.
        let placement: Vec<String> = self
            .position()
            .to_string()
            .split_whitespace()
            .take(4)
            .map(str::to_string)
            .collect();

        format!(
            "{} {} {}",
            placement.join(" "),
            self.halfmove_clock(),
            self.fullmove_number()
        )
    }
}
