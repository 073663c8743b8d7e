use std::ops::{Deref, DerefMut};

use chess::ChessMove;

use crate::Board;

/// Pushes a move on construction and pops it on drop, so a recursive search
/// restores the board on every exit path, including cutoffs.
pub struct BoardGuard<'a, B: Board> {
    board: &'a mut B,
}

impl<'a, B: Board> BoardGuard<'a, B> {
    #[inline]
    pub fn push(board: &'a mut B, mv: ChessMove) -> Self {
        board.push(mv);
        Self { board }
    }
}

impl<B: Board> Deref for BoardGuard<'_, B> {
    type Target = B;

    #[inline]
    fn deref(&self) -> &B {
        self.board
    }
}

impl<B: Board> DerefMut for BoardGuard<'_, B> {
    #[inline]
    fn deref_mut(&mut self) -> &mut B {
        self.board
    }
}

impl<B: Board> Drop for BoardGuard<'_, B> {
    #[inline]
    fn drop(&mut self) {
        self.board.pop();
    }
}
