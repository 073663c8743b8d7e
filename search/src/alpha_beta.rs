use board::{Board, BoardGuard};
use chess::{ChessMove, Color};
use evaluation::scores::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
use evaluation::Evaluator;

/// Minimax value of `board` for `eval_color`, pruned with an alpha-beta window.
///
/// `minimizing` is true on plies where the opponent of `eval_color` chooses.
/// Terminal positions score as a win, loss or draw for `eval_color` at any
/// depth; leaves are scored with [`Evaluator::evaluate`] for `eval_color`
/// alone, classifying the endgame from the leaf position itself.
pub fn alpha_beta<B: Board>(
    board: &mut B,
    evaluator: &Evaluator<'_>,
    depth: u8,
    eval_color: Color,
    mut alpha: f32,
    mut beta: f32,
    minimizing: bool,
) -> f32 {
    if let Some(outcome) = board.outcome() {
        return match outcome.winner {
            None => DRAW_SCORE,
            Some(winner) if winner == eval_color => WIN_SCORE,
            Some(_) => LOSS_SCORE,
        };
    }

    if depth == 0 {
        let is_endgame = evaluator.is_endgame(&*board);
        return evaluator.evaluate(&*board, eval_color, is_endgame);
    }

    let moves = board.legal_moves();
    assert!(
        !moves.is_empty(),
        "no legal moves in a position that is not over: {}",
        board.fen()
    );

    if minimizing {
        let mut value = f32::INFINITY;
        for mv in moves {
            let mut child = BoardGuard::push(board, mv);
            let score = alpha_beta(&mut *child, evaluator, depth - 1, eval_color, alpha, beta, false);
            value = value.min(score);
            if value < alpha {
                break;
            }
            beta = beta.min(value);
        }
        value
    } else {
        let mut value = f32::NEG_INFINITY;
        for mv in moves {
            let mut child = BoardGuard::push(board, mv);
            let score = alpha_beta(&mut *child, evaluator, depth - 1, eval_color, alpha, beta, true);
            value = value.max(score);
            if value > beta {
                break;
            }
            alpha = alpha.max(value);
        }
        value
    }
}

/// Scores a single root move for `color` with a full window.
pub(crate) fn score_root_move<B: Board>(
    board: &mut B,
    evaluator: &Evaluator<'_>,
    mv: ChessMove,
    depth: u8,
    color: Color,
) -> f32 {
    let mut child = BoardGuard::push(board, mv);
    alpha_beta(
        &mut *child,
        evaluator,
        depth,
        color,
        f32::NEG_INFINITY,
        f32::INFINITY,
        true,
    )
}

/// Index of the strictly greatest score; the earliest wins ties.
pub(crate) fn select_best(scores: &[f32]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &score) in scores.iter().enumerate() {
        match best {
            Some(b) if score <= scores[b] => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Best move for `moving_color`, scoring every root move independently.
/// Returns `None` only when there is no legal move.
pub fn best_move<B: Board>(
    board: &mut B,
    evaluator: &Evaluator<'_>,
    depth: u8,
    moving_color: Color,
) -> Option<(ChessMove, f32)> {
    let moves = board.legal_moves();
    let scores: Vec<f32> = moves
        .iter()
        .map(|&mv| score_root_move(board, evaluator, mv, depth, moving_color))
        .collect();

    for (mv, score) in moves.iter().zip(&scores) {
        log::debug!("Move: {}, Score: {}", mv, score);
    }

    select_best(&scores).map(|i| (moves[i], scores[i]))
}
