mod args;
mod players;

use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use arena::HeadToHead;
use args::{Args, Command, EvolveArgs, MatchArgs};
use chrono::Local;
use clap::Parser;
use evolution::{ParameterBundle, Trainer, TrainerConfig};
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::{Config, SimpleLogger, WriteLogger};

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    match args.command {
        Command::Evolve(evolve_args) => evolve(evolve_args),
        Command::Match(match_args) => play(match_args),
    }
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    match &args.log_file {
        Some(log_file) => WriteLogger::init(level, Config::default(), File::create(log_file)?)?,
        None => SimpleLogger::init(level, Config::default())?,
    }

    Ok(args)
}

fn evolve(args: EvolveArgs) -> Result<(), Box<dyn Error>> {
    // Set up SIGINT handler
    let stop_flag = Arc::new(AtomicBool::new(false));
    let stop_flag_handler = Arc::clone(&stop_flag);

    ctrlc::set_handler(move || {
        log::info!("Received SIGINT, stopping after the current generation...");
        stop_flag_handler.store(true, Ordering::Relaxed);
    })?;

    let config = TrainerConfig {
        population_size: args.population,
        generations: args.generations,
        search_depth: args.depth,
        threads: args.threads.unwrap_or_else(num_cpus::get),
        move_limit: args.move_limit,
        ..Default::default()
    };
    log::info!(
        "Evolving {} individuals for {} generations at depth {} ({} threads)",
        config.population_size,
        config.generations,
        config.search_depth,
        config.threads
    );

    let mut trainer = Trainer::new(config)?;
    if let Some(seed) = args.seed {
        trainer = trainer.with_rng(StdRng::seed_from_u64(seed));
    }

    let best = trainer.run_until(args.generations, &stop_flag)?;
    log::info!(
        "Evolution complete: individual {} with fitness {:.1}",
        best.id,
        best.fitness
    );
    for (rank, (id, fitness)) in trainer.standings().iter().enumerate() {
        log::debug!("#{} individual {}: {:.1}", rank + 1, id, fitness);
    }

    let bundle = ParameterBundle::new(best.agent.params())
        .with_metadata(best.fitness, trainer.generations_completed());
    log::info!("Best piece values: {:?}", bundle.material);

    let path = args.output.unwrap_or_else(default_output_path);
    log::info!("Writing parameters to {}", path.display());
    bundle.save(&path)?;

    Ok(())
}

fn default_output_path() -> PathBuf {
    let timestamp = Local::now().format("%Y-%m-%d-%H%M%S");
    PathBuf::from(format!("evolved/{}.json", timestamp))
}

fn play(args: MatchArgs) -> Result<(), Box<dyn Error>> {
    let threads = args.threads.unwrap_or_else(num_cpus::get);
    let mut white = args.white.build(threads)?;
    let mut black = args.black.build(threads)?;

    log::info!("{} vs {}", white.name(), black.name());

    let progress = ProgressBar::new(u64::from(args.games / 2 * 2));
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} {pos}/{len} [{wide_bar:.cyan/blue}] {eta_precise} | {msg}")?,
    );

    let summary = HeadToHead::new(white.as_mut(), black.as_mut()).evaluate_with(
        args.games,
        args.move_limit,
        |summary| {
            progress.set_message(format!(
                "+{} -{} ={}",
                summary.wins(),
                summary.losses,
                summary.draws
            ));
            progress.inc(1);
        },
    );
    progress.finish_and_clear();

    println!("{}", summary);
    Ok(())
}
