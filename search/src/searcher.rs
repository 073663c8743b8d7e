use std::sync::Arc;

use board::Board;
use chess::ChessMove;
use evaluation::Evaluator;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::alpha_beta::{score_root_move, select_best};
use crate::{ConfigError, SearchConfig};

/// Root move selection on top of [`crate::alpha_beta`].
///
/// With more than one thread every root move is scored on a shared rayon pool,
/// each task on its own clone of the board. Scores are collected in move order
/// before the maximum is taken, so the chosen move never depends on which task
/// finishes first. Clones share the pool.
#[derive(Debug, Clone)]
pub struct Searcher {
    config: SearchConfig,
    pool: Option<Arc<ThreadPool>>,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        let config = SearchConfig::new(config.depth, config.threads)?.with_shuffle(config.shuffle);

        let pool = if config.threads > 1 {
            let pool = ThreadPoolBuilder::new()
                .num_threads(config.threads)
                .thread_name(|i| format!("search-{}", i))
                .build()
                .map_err(|e| ConfigError::ThreadPool(e.to_string()))?;
            Some(Arc::new(pool))
        } else {
            None
        };

        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Best move for the side to move, searched `depth` plies below the root.
    pub fn best_move<B: Board>(
        &self,
        board: &mut B,
        evaluator: &Evaluator<'_>,
        depth: u8,
    ) -> Option<(ChessMove, f32)> {
        let color = board.turn();
        let mut moves = board.legal_moves();
        if self.config.shuffle {
            moves.shuffle(&mut rand::thread_rng());
        }

        let scores: Vec<f32> = match &self.pool {
            Some(pool) => {
                let root: &B = board;
                pool.install(|| {
                    moves
                        .as_slice()
                        .par_iter()
                        .map(|&mv| {
                            let mut board = root.clone();
                            score_root_move(&mut board, evaluator, mv, depth, color)
                        })
                        .collect()
                })
            }
            None => moves
                .iter()
                .map(|&mv| score_root_move(board, evaluator, mv, depth, color))
                .collect(),
        };

        let best = select_best(&scores).map(|i| (moves[i], scores[i]));
        if let Some((mv, score)) = best {
            log::debug!("Best move: {}, Score: {} (depth {})", mv, score, depth);
        }
        best
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self {
            config: SearchConfig::default(),
            pool: None,
        }
    }
}
