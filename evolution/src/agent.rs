use board::Board;
use chess::ChessMove;
use evaluation::{EvaluationParameters, Evaluator};
use rand::Rng;
use search::{AdaptiveDepth, Searcher};

use agents::Agent;

use crate::Genome;

/// Table-search agent driven by its own evolving genome.
#[derive(Debug, Clone)]
pub struct EvolvableAgent {
    name: String,
    genome: Genome,
    searcher: Searcher,
    depth: AdaptiveDepth,
}

impl EvolvableAgent {
    pub fn new(genome: Genome, searcher: Searcher) -> Self {
        let depth = searcher.config().depth;

        Self {
            name: format!("Evo Table (d={})", depth),
            genome,
            searcher,
            depth: AdaptiveDepth::new(depth),
        }
    }

    /// Mutated child. It searches at the configured depth again, whatever
    /// depth the parent has reached.
    pub fn offspring<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self::new(self.genome.offspring(rng), self.searcher.clone())
    }

    pub fn params(&self) -> &EvaluationParameters {
        &self.genome.params
    }

    pub fn depth(&self) -> &AdaptiveDepth {
        &self.depth
    }
}

impl<B: Board> Agent<B> for EvolvableAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn make_move(&mut self, board: &mut B) -> Option<ChessMove> {
        let evaluator = Evaluator::new(&self.genome.params);
        let depth = self.depth.observe(evaluator.is_endgame(&*board));

        self.searcher
            .best_move(board, &evaluator, depth)
            .map(|(mv, _)| mv)
    }
}
