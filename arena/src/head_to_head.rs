use agents::Agent;
use board::Board;
use chess::Color;

use crate::{Match, Summary};

/// Alternating-colour series between two agents.
pub struct HeadToHead<'a, B: Board> {
    player: &'a mut dyn Agent<B>,
    opponent: &'a mut dyn Agent<B>,
}

impl<'a, B: Board> HeadToHead<'a, B> {
    pub fn new(player: &'a mut dyn Agent<B>, opponent: &'a mut dyn Agent<B>) -> Self {
        Self { player, opponent }
    }

    /// Plays `iterations / 2` games with each agent as White.
    pub fn evaluate(&mut self, iterations: u32, move_limit: Option<u32>) -> Summary {
        self.evaluate_with(iterations, move_limit, |_| {})
    }

    /// Like [`HeadToHead::evaluate`], calling `on_game` with the running
    /// tally after every game.
    pub fn evaluate_with(
        &mut self,
        iterations: u32,
        move_limit: Option<u32>,
        mut on_game: impl FnMut(&Summary),
    ) -> Summary {
        let mut summary = Summary::new(self.player.name(), self.opponent.name());

        for color in [Color::White, Color::Black] {
            for _ in 0..iterations / 2 {
                let result = match color {
                    Color::White => Match::new(&mut *self.player, &mut *self.opponent),
                    Color::Black => Match::new(&mut *self.opponent, &mut *self.player),
                }
                .with_move_limit(move_limit)
                .play(B::default());

                summary.record_game(result, color);
                on_game(&summary);
            }
        }

        log::info!(
            "{} vs {}: {}/{}/{} (W/L/D)",
            summary.player,
            summary.opponent,
            summary.wins(),
            summary.losses,
            summary.draws
        );
        summary
    }
}
