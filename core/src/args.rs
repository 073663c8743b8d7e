use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::players::AgentSpec;

#[derive(Parser, Debug)]
#[command(name = "evochess")]
#[command(author = "evochess contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Evolve piece-square table chess agents through self-play")]
pub struct Args {
    /// Write logs to a file instead of the terminal.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log per-move search scores and match results.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evolve a population and save the champion's parameters.
    Evolve(EvolveArgs),
    /// Play a head-to-head series between two agents.
    Match(MatchArgs),
}

#[derive(ClapArgs, Debug)]
pub struct EvolveArgs {
    #[arg(long, default_value_t = 10)]
    pub population: usize,

    #[arg(long, default_value_t = 5)]
    pub generations: u32,

    #[arg(long, default_value_t = search::DEFAULT_DEPTH)]
    pub depth: u8,

    /// Threads per agent for root move scoring. Defaults to all cores.
    #[arg(long)]
    pub threads: Option<usize>,

    /// Adjudicate a draw after this many full moves.
    #[arg(long)]
    pub move_limit: Option<u32>,

    /// Defaults to evolved/<timestamp>.json.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed for founders, mutation and opponent sampling.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(ClapArgs, Debug)]
pub struct MatchArgs {
    /// random, greedy, defensive, table[:depth], evolved:<path>[:depth] or uci:<path>
    #[arg(long)]
    pub white: AgentSpec,

    #[arg(long)]
    pub black: AgentSpec,

    /// Games in total, split evenly between colours.
    #[arg(long, default_value_t = 100)]
    pub games: u32,

    #[arg(long)]
    pub move_limit: Option<u32>,

    #[arg(long)]
    pub threads: Option<usize>,
}
