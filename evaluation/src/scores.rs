// Score bounds for alpha-beta search. Scores are always oriented so that
// larger is better for the colour being evaluated.
pub const WIN_SCORE: f32 = f32::INFINITY;
pub const LOSS_SCORE: f32 = f32::NEG_INFINITY;
pub const DRAW_SCORE: f32 = 0.0;
