use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use chess::{Piece, ALL_PIECES};
use chrono::{DateTime, Local};
use evaluation::{EvaluationParameters, KING_VALUE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse parameter bundle: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing {kind} for {piece}")]
    Missing { kind: &'static str, piece: &'static str },
    #[error("table for {name} has {len} entries, expected 64")]
    TableLength { name: String, len: usize },
    #[error("invalid material value {value} for {piece}")]
    InvalidMaterial { piece: &'static str, value: f32 },
    #[error("table for {name} contains a non-finite value")]
    NonFinite { name: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleMetadata {
    pub fitness: f32,
    pub generation: u32,
    pub saved_at: DateTime<Local>,
}

/// On-disk form of [`EvaluationParameters`], keyed by piece name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterBundle {
    pub material: BTreeMap<String, f32>,
    pub tables: BTreeMap<String, Vec<f32>>,
    pub king_endgame: Vec<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BundleMetadata>,
}

pub fn piece_name(piece: Piece) -> &'static str {
    match piece {
        Piece::Pawn => "pawn",
        Piece::Knight => "knight",
        Piece::Bishop => "bishop",
        Piece::Rook => "rook",
        Piece::Queen => "queen",
        Piece::King => "king",
    }
}

impl ParameterBundle {
    pub fn new(params: &EvaluationParameters) -> Self {
        let material = ALL_PIECES
            .iter()
            .map(|&piece| (piece_name(piece).to_string(), params.material_value(piece)))
            .collect();
        let tables = ALL_PIECES
            .iter()
            .map(|&piece| (piece_name(piece).to_string(), params.table(piece).to_vec()))
            .collect();

        Self {
            material,
            tables,
            king_endgame: params.king_endgame.to_vec(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, fitness: f32, generation: u32) -> Self {
        self.metadata = Some(BundleMetadata {
            fitness,
            generation,
            saved_at: Local::now(),
        });
        self
    }

    /// Rebuilds the parameters, rejecting missing pieces, short tables and
    /// negative or non-finite material.
    pub fn to_params(&self) -> Result<EvaluationParameters, BundleError> {
        let mut params = EvaluationParameters::standard();

        for piece in ALL_PIECES {
            let name = piece_name(piece);
            let i = piece.to_index();

            let value = *self.material.get(name).ok_or(BundleError::Missing {
                kind: "material value",
                piece: name,
            })?;
            let valid = match piece {
                Piece::King => value == KING_VALUE,
                _ => value.is_finite() && value >= 0.0,
            };
            if !valid {
                return Err(BundleError::InvalidMaterial { piece: name, value });
            }
            params.material[i] = value;

            let table = self.tables.get(name).ok_or(BundleError::Missing {
                kind: "table",
                piece: name,
            })?;
            params.tables[i] = to_table(name, table)?;
        }
        params.king_endgame = to_table("king endgame", &self.king_endgame)?;

        Ok(params)
    }

    pub fn save(&self, path: &Path) -> Result<(), BundleError> {
        let io_error = |source| BundleError::Io {
            path: path.display().to_string(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer).map_err(io_error)?;
        writer.flush().map_err(io_error)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, BundleError> {
        let file = File::open(path).map_err(|source| BundleError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let bundle: Self = serde_json::from_reader(BufReader::new(file))?;

        // Validate eagerly so a bad file fails at load time
        bundle.to_params()?;
        Ok(bundle)
    }
}

fn to_table(name: &str, values: &[f32]) -> Result<[f32; 64], BundleError> {
    let table: [f32; 64] = values.try_into().map_err(|_| BundleError::TableLength {
        name: name.to_string(),
        len: values.len(),
    })?;
    if table.iter().any(|v| !v.is_finite()) {
        return Err(BundleError::NonFinite {
            name: name.to_string(),
        });
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Genome, TrainerConfig};
    use board::GameBoard;
    use chess::Color;
    use evaluation::Evaluator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn evolved_params() -> EvaluationParameters {
        let mut rng = StdRng::seed_from_u64(11);
        let genome = Genome::random(&mut rng, &TrainerConfig::default());
        genome.offspring(&mut rng).params
    }

    #[test]
    fn test_round_trip_preserves_evaluation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("champion.json");
        let params = evolved_params();

        ParameterBundle::new(&params)
            .with_metadata(7.5, 3)
            .save(&path)
            .unwrap();
        let loaded = ParameterBundle::load(&path).unwrap();
        let restored = loaded.to_params().unwrap();

        assert_eq!(restored, params);
        assert_eq!(loaded.metadata.as_ref().map(|m| m.generation), Some(3));

        let board: GameBoard = GameBoard::from_fen(
            "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
        )
        .unwrap();
        for color in [Color::White, Color::Black] {
            assert_eq!(
                Evaluator::new(&restored).evaluate(&board, color, false),
                Evaluator::new(&params).evaluate(&board, color, false)
            );
        }
    }

    #[test]
    fn test_rejects_short_table() {
        let mut bundle = ParameterBundle::new(&EvaluationParameters::standard());
        bundle.tables.insert("rook".to_string(), vec![0.0; 63]);
        assert!(matches!(
            bundle.to_params(),
            Err(BundleError::TableLength { len: 63, .. })
        ));
    }

    #[test]
    fn test_rejects_negative_material() {
        let mut bundle = ParameterBundle::new(&EvaluationParameters::standard());
        bundle.material.insert("knight".to_string(), -1.0);
        assert!(matches!(
            bundle.to_params(),
            Err(BundleError::InvalidMaterial { piece: "knight", .. })
        ));
    }

    #[test]
    fn test_rejects_missing_piece() {
        let mut bundle = ParameterBundle::new(&EvaluationParameters::standard());
        bundle.material.remove("queen");
        assert!(matches!(
            bundle.to_params(),
            Err(BundleError::Missing { piece: "queen", .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ParameterBundle::load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(BundleError::Io { .. })));
    }
}
