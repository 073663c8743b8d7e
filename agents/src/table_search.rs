use std::sync::Arc;

use board::Board;
use chess::ChessMove;
use evaluation::{EvaluationParameters, Evaluator};
use search::{AdaptiveDepth, ConfigError, SearchConfig, Searcher};

/// Alpha-beta agent over one fixed, shared parameter set.
#[derive(Debug, Clone)]
pub struct TableSearchAgent {
    name: String,
    params: Arc<EvaluationParameters>,
    searcher: Searcher,
    depth: AdaptiveDepth,
}

impl TableSearchAgent {
    /// Agent over the standard piece values and tables.
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        Self::with_params(Arc::new(EvaluationParameters::standard()), config)
    }

    pub fn with_params(
        params: Arc<EvaluationParameters>,
        config: SearchConfig,
    ) -> Result<Self, ConfigError> {
        let searcher = Searcher::new(config)?;

        Ok(Self {
            name: format!("Table Search (d={})", config.depth),
            params,
            searcher,
            depth: AdaptiveDepth::new(config.depth),
        })
    }

    pub fn params(&self) -> &Arc<EvaluationParameters> {
        &self.params
    }

    pub fn depth(&self) -> &AdaptiveDepth {
        &self.depth
    }
}

impl<B: Board> crate::Agent<B> for TableSearchAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn make_move(&mut self, board: &mut B) -> Option<ChessMove> {
        let evaluator = Evaluator::new(&self.params);
        let depth = self.depth.observe(evaluator.is_endgame(&*board));

        self.searcher
            .best_move(board, &evaluator, depth)
            .map(|(mv, _)| mv)
    }
}
