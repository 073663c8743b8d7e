use std::array;

use chess::{Piece, ALL_PIECES, NUM_PIECES};
use evaluation::EvaluationParameters;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::TrainerConfig;

/// Material values of every piece but the king, plus every table entry.
/// The king endgame table is inherited unchanged and not counted.
pub const MUTABLE_PARAMS: usize = (NUM_PIECES - 1) + NUM_PIECES * 64;

/// Evaluation parameters together with one mutation step size per parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Genome {
    pub params: EvaluationParameters,
    /// King entry is never read.
    pub material_steps: [f32; NUM_PIECES],
    pub table_steps: [[f32; 64]; NUM_PIECES],
}

impl Genome {
    /// Founder with integer material and table values drawn uniformly from
    /// the configured ranges. King material and the king endgame table keep
    /// their standard values.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, config: &TrainerConfig) -> Self {
        let mut params = EvaluationParameters::standard();
        let mut material_steps = [0.0; NUM_PIECES];
        let mut table_steps = [[0.0; 64]; NUM_PIECES];

        for piece in ALL_PIECES {
            let i = piece.to_index();
            if piece != Piece::King {
                params.material[i] = rng.gen_range(config.material_range.clone()) as f32;
                material_steps[i] = rng.gen_range(config.step_range.clone());
            }
            params.tables[i] =
                array::from_fn(|_| rng.gen_range(config.table_range.clone()) as f32);
            table_steps[i] = array::from_fn(|_| rng.gen_range(config.step_range.clone()));
        }

        Self {
            params,
            material_steps,
            table_steps,
        }
    }

    pub fn from_params(params: EvaluationParameters, step: f32) -> Self {
        let mut material_steps = [step; NUM_PIECES];
        material_steps[Piece::King.to_index()] = 0.0;

        Self {
            params,
            material_steps,
            table_steps: [[step; 64]; NUM_PIECES],
        }
    }

    /// Learning rate shared by every step size.
    #[inline]
    pub fn tau() -> f32 {
        1.0 / (2.0 * MUTABLE_PARAMS as f32).sqrt()
    }

    /// Mutated copy: each step size is scaled by `exp(tau * Z)`, then the
    /// parameter moves by Gaussian noise with the new step size. Material
    /// never drops below zero.
    pub fn offspring<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let tau = Self::tau();
        let mut child = self.clone();

        for piece in ALL_PIECES {
            let i = piece.to_index();
            if piece != Piece::King {
                let (value, step) =
                    mutate(rng, tau, self.params.material[i], self.material_steps[i]);
                child.params.material[i] = value.max(0.0);
                child.material_steps[i] = step;
            }

            let table = &self.params.tables[i];
            let steps = &self.table_steps[i];
            for square in 0..64 {
                let (value, step) = mutate(rng, tau, table[square], steps[square]);
                child.params.tables[i][square] = value;
                child.table_steps[i][square] = step;
            }
        }

        child
    }
}

#[inline]
fn mutate<R: Rng + ?Sized>(rng: &mut R, tau: f32, value: f32, step: f32) -> (f32, f32) {
    let z: f32 = rng.sample(StandardNormal);
    let step = step * (tau * z).exp();
    let noise: f32 = rng.sample(StandardNormal);
    (value + step * noise, step)
}
