use std::sync::atomic::{AtomicBool, Ordering};

use agents::Agent;
use arena::{get_two_mut, Match};
use board::GameBoard;
use chess::Color;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use search::{SearchConfig, Searcher};

use crate::{EvolvableAgent, Genome, TrainerConfig, TrainerError};

#[derive(Debug, Clone)]
pub struct Individual {
    /// Unique within a trainer run. Opponents are excluded by id.
    pub id: u64,
    pub agent: EvolvableAgent,
    pub fitness: f32,
    /// Matches played as the evaluated side in the last fitness evaluation.
    pub matches_played: u32,
    /// Ids of the opponents drawn for those matches, in play order.
    pub opponents: Vec<u64>,
}

pub struct Trainer {
    config: TrainerConfig,
    searcher: Searcher,
    rng: StdRng,
    next_id: u64,
    generations_completed: u32,
    standings: Vec<(u64, f32)>,
}

impl Trainer {
    pub fn new(config: TrainerConfig) -> Result<Self, TrainerError> {
        config.validate()?;
        let searcher = Searcher::new(SearchConfig::new(config.search_depth, config.threads)?)?;

        Ok(Self {
            config,
            searcher,
            rng: StdRng::from_entropy(),
            next_id: 0,
            generations_completed: 0,
            standings: Vec::new(),
        })
    }

    /// Replaces the random source used for founders, mutation and opponent
    /// sampling.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Generations fully evaluated by the last run.
    pub fn generations_completed(&self) -> u32 {
        self.generations_completed
    }

    /// `(id, fitness)` of every member of the last evaluated working set,
    /// fittest first.
    pub fn standings(&self) -> &[(u64, f32)] {
        &self.standings
    }

    /// Runs `generations` generations and returns the fittest individual of
    /// the last one.
    pub fn run(&mut self, generations: u32) -> Result<Individual, TrainerError> {
        self.run_until(generations, &AtomicBool::new(false))
    }

    /// Like [`Trainer::run`], but finishes early once `stop` is set. The flag
    /// is checked after each generation has been evaluated.
    pub fn run_until(
        &mut self,
        generations: u32,
        stop: &AtomicBool,
    ) -> Result<Individual, TrainerError> {
        if generations == 0 {
            return Err(TrainerError::ZeroGenerations);
        }

        let mut population: Vec<Individual> = (0..self.config.population_size)
            .map(|_| {
                let genome = Genome::random(&mut self.rng, &self.config);
                self.individual(EvolvableAgent::new(genome, self.searcher.clone()))
            })
            .collect();

        self.generations_completed = 0;
        loop {
            let mut working_set: Vec<Individual> = population
                .iter()
                .map(|parent| {
                    let child = parent.agent.offspring(&mut self.rng);
                    self.individual(child)
                })
                .collect();
            working_set.append(&mut population);
            population = working_set;

            self.evaluate_fitness(&mut population);
            // Stable, and offspring come first: ties are won by the offspring
            population.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
            self.standings = population.iter().map(|i| (i.id, i.fitness)).collect();

            let best = population[0].fitness;
            let mean =
                population.iter().map(|i| i.fitness).sum::<f32>() / population.len() as f32;
            log::info!(
                "Generation {} complete: best fitness {:.1}, mean {:.2}",
                self.generations_completed,
                best,
                mean
            );

            self.generations_completed += 1;
            let completed = self.generations_completed;
            if completed >= generations || stop.load(Ordering::Relaxed) {
                if completed < generations {
                    log::info!("Stopping after {} generations", completed);
                }
                return Ok(population.swap_remove(0));
            }
            population.truncate(self.config.population_size);
        }
    }

    fn individual(&mut self, agent: EvolvableAgent) -> Individual {
        let id = self.next_id;
        self.next_id += 1;

        Individual {
            id,
            agent,
            fitness: 0.0,
            matches_played: 0,
            opponents: Vec::new(),
        }
    }

    /// Scores every member against opponents drawn with replacement from the
    /// rest of `population`: 1 per win, 0.5 per draw.
    fn evaluate_fitness(&mut self, population: &mut [Individual]) {
        for i in 0..population.len() {
            let mut fitness = 0.0;
            let mut matches_played = 0;
            let mut opponents = Vec::new();

            for color in [Color::White, Color::Black] {
                for _ in 0..self.config.matches_per_color {
                    let j = self.pick_opponent(population, i);
                    let (player, opponent) = get_two_mut(population, i, j);
                    log::debug!(
                        "Individual {} plays individual {} as {:?}",
                        player.id,
                        opponent.id,
                        color
                    );

                    let (white, black): (&mut dyn Agent<GameBoard>, &mut dyn Agent<GameBoard>) =
                        match color {
                            Color::White => (&mut player.agent, &mut opponent.agent),
                            Color::Black => (&mut opponent.agent, &mut player.agent),
                        };
                    let result = Match::new(white, black)
                        .with_move_limit(self.config.move_limit)
                        .play(GameBoard::default());

                    fitness += result.score_for(color);
                    matches_played += 1;
                    opponents.push(opponent.id);
                }
            }

            population[i].fitness = fitness;
            population[i].matches_played = matches_played;
            population[i].opponents = opponents;
        }
    }

    /// Index of a uniformly drawn individual whose id differs from `i`'s.
    fn pick_opponent(&mut self, population: &[Individual], i: usize) -> usize {
        let own_id = population[i].id;
        loop {
            let j = self.rng.gen_range(0..population.len());
            if population[j].id != own_id {
                return j;
            }
        }
    }
}
