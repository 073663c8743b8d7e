mod defensive;
mod greedy;
mod random;
mod table_search;
mod uci;

use board::Board;
use chess::ChessMove;

pub use defensive::DefensiveAgent;
pub use greedy::GreedyAgent;
pub use random::RandomAgent;
pub use table_search::TableSearchAgent;
pub use uci::{UciAgent, UciError};

/// A player that picks moves for whichever side is to move.
///
/// `make_move` may push and pop moves while deciding but must hand the board
/// back in the position it received. Returning `None`, or a move that is not
/// legal, forfeits the game.
pub trait Agent<B: Board>: Send {
    fn name(&self) -> &str;

    fn make_move(&mut self, board: &mut B) -> Option<ChessMove>;
}
