use std::fmt;

use chess::Color;

use crate::MatchResult;

/// Head-to-head tally from the first player's point of view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub player: String,
    pub opponent: String,
    pub wins_as_white: u32,
    pub wins_as_black: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Summary {
    pub fn new(player: &str, opponent: &str) -> Self {
        Self {
            player: player.to_string(),
            opponent: opponent.to_string(),
            ..Default::default()
        }
    }

    pub fn record_game(&mut self, result: MatchResult, playing_as: Color) {
        match result.winner() {
            None => self.draws += 1,
            Some(winner) if winner == playing_as => match playing_as {
                Color::White => self.wins_as_white += 1,
                Color::Black => self.wins_as_black += 1,
            },
            Some(_) => self.losses += 1,
        }
    }

    #[inline]
    pub fn wins(&self) -> u32 {
        self.wins_as_white + self.wins_as_black
    }

    #[inline]
    pub fn games(&self) -> u32 {
        self.wins() + self.losses + self.draws
    }

    #[inline]
    pub fn score(&self) -> f64 {
        self.wins() as f64 + self.draws as f64 * 0.5
    }

    pub fn win_rate(&self) -> f64 {
        percentage(self.wins(), self.games())
    }

    pub fn loss_rate(&self) -> f64 {
        percentage(self.losses, self.games())
    }

    pub fn draw_rate(&self) -> f64 {
        percentage(self.draws, self.games())
    }
}

#[inline]
fn percentage(count: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        (count as f64 / total as f64) * 100.0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vs {}", self.player, self.opponent)?;
        writeln!(f, "==================")?;
        writeln!(f, "Total Games: {}", self.games())?;
        writeln!(f, "   Wins as White: {}", self.wins_as_white)?;
        writeln!(f, "   Wins as Black: {}", self.wins_as_black)?;
        writeln!(f, "   Score: {:.1}/{}", self.score(), self.games())?;
        writeln!(f, "{} win {:.1}%", self.player, self.win_rate())?;
        writeln!(f, "{} win {:.1}%", self.opponent, self.loss_rate())?;
        writeln!(f, "draws {:.1}%", self.draw_rate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_from_player_view() {
        let mut summary = Summary::new("Greedy", "Random");
        summary.record_game(MatchResult::WhiteWins, Color::White);
        summary.record_game(MatchResult::WhiteWins, Color::Black);
        summary.record_game(MatchResult::BlackWins, Color::Black);
        summary.record_game(MatchResult::Draw, Color::White);

        assert_eq!(summary.wins(), 2);
        assert_eq!(summary.wins_as_black, 1);
        assert_eq!(summary.losses, 1);
        assert_eq!(summary.draws, 1);
        assert_eq!(summary.score(), 2.5);
        assert_eq!(summary.win_rate(), 50.0);
    }

    #[test]
    fn test_empty_summary_rates() {
        let summary = Summary::new("a", "b");
        assert_eq!(summary.win_rate(), 0.0);
        assert!(summary.to_string().contains("Total Games: 0"));
    }
}
