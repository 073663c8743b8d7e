use agents::Agent;
use board::{Board, Outcome};
use chess::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    WhiteWins,
    BlackWins,
    Draw,
}

impl MatchResult {
    pub fn win_for(color: Color) -> Self {
        match color {
            Color::White => MatchResult::WhiteWins,
            Color::Black => MatchResult::BlackWins,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            MatchResult::WhiteWins => Some(Color::White),
            MatchResult::BlackWins => Some(Color::Black),
            MatchResult::Draw => None,
        }
    }

    /// 1 for a win, 0.5 for a draw and 0 for a loss.
    pub fn score_for(&self, color: Color) -> f32 {
        match self.winner() {
            None => 0.5,
            Some(winner) if winner == color => 1.0,
            Some(_) => 0.0,
        }
    }
}

impl From<Outcome> for MatchResult {
    fn from(outcome: Outcome) -> Self {
        outcome.winner.map_or(MatchResult::Draw, MatchResult::win_for)
    }
}

/// One game between two agents.
pub struct Match<'a, B: Board> {
    white: &'a mut dyn Agent<B>,
    black: &'a mut dyn Agent<B>,
    move_limit: Option<u32>,
}

impl<'a, B: Board> Match<'a, B> {
    pub fn new(white: &'a mut dyn Agent<B>, black: &'a mut dyn Agent<B>) -> Self {
        Self {
            white,
            black,
            move_limit: None,
        }
    }

    /// Adjudicates a draw once this many full moves have been played.
    pub fn with_move_limit(mut self, move_limit: Option<u32>) -> Self {
        self.move_limit = move_limit;
        self
    }

    /// Plays from `board` until the game ends, a side forfeits or the move
    /// limit is reached.
    pub fn play(&mut self, mut board: B) -> MatchResult {
        let mut plies: u32 = 0;

        let result = loop {
            if let Some(outcome) = board.outcome() {
                log::debug!("Game over by {:?} after {} plies", outcome.termination, plies);
                break outcome.into();
            }
            if plies > 0 && self.move_limit.is_some_and(|limit| plies / 2 >= limit) {
                log::debug!("Move limit reached: {}", board.fen());
                break MatchResult::Draw;
            }

            let color = board.turn();
            let player = match color {
                Color::White => &mut *self.white,
                Color::Black => &mut *self.black,
            };

            match player.make_move(&mut board) {
                Some(mv) if board.is_legal(mv) => board.push(mv),
                mv => {
                    log::debug!("Illegal move by {}: {:?}", player.name(), mv);
                    break MatchResult::win_for(!color);
                }
            }
            plies += 1;
        };

        log::debug!(
            "{} vs {} = {:?}",
            self.white.name(),
            self.black.name(),
            result
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agents::RandomAgent;
    use board::GameBoard;
    use chess::ChessMove;
    use std::str::FromStr;

    /// Plays a fixed list of moves, then nothing.
    struct Scripted {
        moves: Vec<ChessMove>,
    }

    impl Scripted {
        fn new(moves: &[&str]) -> Self {
            Self {
                moves: moves
                    .iter()
                    .rev()
                    .map(|s| ChessMove::from_str(s).unwrap())
                    .collect(),
            }
        }
    }

    impl Agent<GameBoard> for Scripted {
        fn name(&self) -> &str {
            "Scripted"
        }

        fn make_move(&mut self, _board: &mut GameBoard) -> Option<ChessMove> {
            self.moves.pop()
        }
    }

    fn play(white: &mut dyn Agent<GameBoard>, black: &mut dyn Agent<GameBoard>) -> MatchResult {
        Match::new(white, black).play(GameBoard::default())
    }

    #[test]
    fn test_illegal_move_forfeits() {
        let mut white = Scripted::new(&["e2e5"]);
        let mut black = RandomAgent::new();
        let result = play(&mut white, &mut black);
        assert_eq!(result, MatchResult::BlackWins);
    }

    #[test]
    fn test_missing_move_forfeits() {
        let mut white = Scripted::new(&["e2e4"]);
        let mut black = Scripted::new(&[]);
        let result = play(&mut white, &mut black);
        assert_eq!(result, MatchResult::WhiteWins);
    }

    #[test]
    fn test_checkmate_ends_match() {
        let mut white = Scripted::new(&["f2f3", "g2g4"]);
        let mut black = Scripted::new(&["e7e5", "d8h4"]);
        let result = play(&mut white, &mut black);
        assert_eq!(result, MatchResult::BlackWins);
    }

    #[test]
    fn test_move_limit_is_draw() {
        let mut white = RandomAgent::new();
        let mut black = RandomAgent::new();
        let result = Match::<GameBoard>::new(&mut white, &mut black)
            .with_move_limit(Some(1))
            .play(GameBoard::default());
        assert_eq!(result, MatchResult::Draw);
    }

    #[test]
    fn test_score_for() {
        assert_eq!(MatchResult::WhiteWins.score_for(Color::White), 1.0);
        assert_eq!(MatchResult::WhiteWins.score_for(Color::Black), 0.0);
        assert_eq!(MatchResult::Draw.score_for(Color::Black), 0.5);
    }
}
