use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },
}
