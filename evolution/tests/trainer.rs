use std::sync::atomic::AtomicBool;

use evolution::{Genome, Individual, Trainer, TrainerConfig, TrainerError};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn quick_config(population_size: usize) -> TrainerConfig {
    TrainerConfig {
        population_size,
        generations: 1,
        search_depth: 1,
        move_limit: Some(10),
        ..Default::default()
    }
}

/// Founders drawn the same way the trainer draws them from a fresh seed.
fn founders(config: &TrainerConfig, seed: u64) -> Vec<Genome> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..config.population_size)
        .map(|_| Genome::random(&mut rng, config))
        .collect()
}

fn assert_played_working_set(best: &Individual) {
    assert_eq!(best.matches_played, 10);
    assert_eq!(best.opponents.len(), 10);
    for &id in &best.opponents {
        assert!(id < 4, "opponent {} outside the working set", id);
        assert_ne!(id, best.id);
    }
}

#[test]
fn single_generation_returns_one_champion() {
    let mut trainer = Trainer::new(quick_config(2))
        .unwrap()
        .with_rng(StdRng::seed_from_u64(2024));

    let best = trainer.run(1).unwrap();

    // Founders get ids 0 and 1, their offspring 2 and 3
    assert!(best.id < 4);
    assert_played_working_set(&best);
    assert!((0.0..=10.0).contains(&best.fitness));
    assert!(best.agent.params().is_valid());
    assert_eq!(trainer.standings().len(), 4);
    assert_eq!(trainer.standings()[0].0, best.id);
}

#[test]
fn tied_fitness_returns_mutated_offspring() {
    // One full move per game: every match is drawn and every fitness is 5
    let config = TrainerConfig {
        move_limit: Some(1),
        ..quick_config(2)
    };
    let founders = founders(&config, 77);
    let mut trainer = Trainer::new(config)
        .unwrap()
        .with_rng(StdRng::seed_from_u64(77));

    let best = trainer.run(1).unwrap();

    assert!(trainer.standings().iter().all(|&(_, fitness)| fitness == 5.0));
    // First child, bred from founder 0
    assert_eq!(best.id, 2);
    assert_eq!(best.fitness, 5.0);
    assert_played_working_set(&best);
    for founder in &founders {
        assert_ne!(best.agent.params(), &founder.params);
    }
}

#[test]
fn unlimited_games_rank_offspring_ahead_on_ties() {
    let config = TrainerConfig {
        move_limit: None,
        ..quick_config(2)
    };
    let founders = founders(&config, 31);
    let mut trainer = Trainer::new(config)
        .unwrap()
        .with_rng(StdRng::seed_from_u64(31));

    let best = trainer.run(1).unwrap();
    assert_played_working_set(&best);

    let standings = trainer.standings();
    let mut ids: Vec<u64> = standings.iter().map(|&(id, _)| id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![0, 1, 2, 3]);
    assert_eq!(standings[0], (best.id, best.fitness));

    // A founder never precedes an offspring with the same fitness
    for pair in standings.windows(2) {
        let ((first, a), (second, b)) = (pair[0], pair[1]);
        assert!(a >= b);
        if a == b {
            assert!(!(first < 2 && second >= 2), "{:?}", standings);
        }
    }

    if best.id >= 2 {
        for founder in &founders {
            assert_ne!(best.agent.params(), &founder.params);
        }
    } else {
        // A founder only survives by outscoring both offspring
        assert!(standings
            .iter()
            .filter(|&&(id, _)| id >= 2)
            .all(|&(_, fitness)| fitness < best.fitness));
        assert_eq!(best.agent.params(), &founders[best.id as usize].params);
    }
}

#[test]
fn population_of_one_has_an_opponent() {
    let mut trainer = Trainer::new(quick_config(1))
        .unwrap()
        .with_rng(StdRng::seed_from_u64(5));

    let best = trainer.run(1).unwrap();
    assert!(best.id < 2);
    assert_eq!(best.matches_played, 10);
    // The only peer is the other member of the pair
    assert!(best.opponents.iter().all(|&id| id == 1 - best.id));
}

#[test]
fn stop_flag_ends_after_current_generation() {
    let mut trainer = Trainer::new(quick_config(2))
        .unwrap()
        .with_rng(StdRng::seed_from_u64(9));

    let stop = AtomicBool::new(true);
    let best = trainer.run_until(50, &stop).unwrap();

    // Only the first generation ran: ids 0..4
    assert!(best.id < 4);
    assert_eq!(trainer.generations_completed(), 1);
}

#[test]
fn zero_generations_is_rejected() {
    let mut trainer = Trainer::new(quick_config(2)).unwrap();
    assert_eq!(trainer.run(0).unwrap_err(), TrainerError::ZeroGenerations);
}

#[test]
fn invalid_config_is_rejected() {
    let config = TrainerConfig {
        population_size: 0,
        ..Default::default()
    };
    assert!(matches!(
        Trainer::new(config),
        Err(TrainerError::EmptyPopulation)
    ));
}
