use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use agents::{Agent, DefensiveAgent, GreedyAgent, RandomAgent, TableSearchAgent, UciAgent};
use board::GameBoard;
use evolution::ParameterBundle;
use search::{SearchConfig, DEFAULT_DEPTH};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("unknown agent `{0}`: expected random, greedy, defensive, table[:depth], evolved:<path>[:depth] or uci:<path>")]
pub struct SpecError(String);

/// Agent selected on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentSpec {
    Random,
    Greedy,
    Defensive,
    Table { depth: u8 },
    Evolved { path: PathBuf, depth: u8 },
    Uci { path: PathBuf },
}

impl FromStr for AgentSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || SpecError(s.to_string());
        let (kind, rest) = match s.split_once(':') {
            Some((kind, rest)) => (kind, Some(rest)),
            None => (s, None),
        };

        match (kind.to_ascii_lowercase().as_str(), rest) {
            ("random", None) => Ok(AgentSpec::Random),
            ("greedy", None) => Ok(AgentSpec::Greedy),
            ("defensive", None) => Ok(AgentSpec::Defensive),
            ("table", None) => Ok(AgentSpec::Table {
                depth: DEFAULT_DEPTH,
            }),
            ("table", Some(depth)) => Ok(AgentSpec::Table {
                depth: depth.parse().map_err(|_| err())?,
            }),
            ("evolved", Some(rest)) if !rest.is_empty() => {
                // A trailing `:N` is a depth unless it does not parse as one
                let (path, depth) = match rest.rsplit_once(':') {
                    Some((path, depth)) if !path.is_empty() => match depth.parse() {
                        Ok(depth) => (path, depth),
                        Err(_) => (rest, DEFAULT_DEPTH),
                    },
                    _ => (rest, DEFAULT_DEPTH),
                };
                Ok(AgentSpec::Evolved {
                    path: PathBuf::from(path),
                    depth,
                })
            }
            ("uci", Some(path)) if !path.is_empty() => Ok(AgentSpec::Uci {
                path: PathBuf::from(path),
            }),
            _ => Err(err()),
        }
    }
}

impl AgentSpec {
    pub fn build(&self, threads: usize) -> Result<Box<dyn Agent<GameBoard>>, Box<dyn Error>> {
        let agent: Box<dyn Agent<GameBoard>> = match self {
            AgentSpec::Random => Box::new(RandomAgent::new()),
            AgentSpec::Greedy => Box::new(GreedyAgent::new()),
            AgentSpec::Defensive => Box::new(DefensiveAgent::new()),
            AgentSpec::Table { depth } => {
                Box::new(TableSearchAgent::new(SearchConfig::new(*depth, threads)?)?)
            }
            AgentSpec::Evolved { path, depth } => {
                let bundle = ParameterBundle::load(path)?;
                if let Some(metadata) = &bundle.metadata {
                    log::info!(
                        "Loaded {} (fitness {:.1}, generation {}, saved {})",
                        path.display(),
                        metadata.fitness,
                        metadata.generation,
                        metadata.saved_at.format("%Y-%m-%d %H:%M")
                    );
                }
                let params = Arc::new(bundle.to_params()?);
                Box::new(TableSearchAgent::with_params(
                    params,
                    SearchConfig::new(*depth, threads)?,
                )?)
            }
            AgentSpec::Uci { path } => Box::new(UciAgent::new(path)?),
        };
        Ok(agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_specs() {
        assert_eq!("random".parse::<AgentSpec>().unwrap(), AgentSpec::Random);
        assert_eq!("Greedy".parse::<AgentSpec>().unwrap(), AgentSpec::Greedy);
        assert_eq!(
            "table".parse::<AgentSpec>().unwrap(),
            AgentSpec::Table { depth: 2 }
        );
        assert_eq!(
            "table:3".parse::<AgentSpec>().unwrap(),
            AgentSpec::Table { depth: 3 }
        );
    }

    #[test]
    fn test_parse_evolved_paths() {
        assert_eq!(
            "evolved:out/best.json:4".parse::<AgentSpec>().unwrap(),
            AgentSpec::Evolved {
                path: PathBuf::from("out/best.json"),
                depth: 4
            }
        );
        assert_eq!(
            "evolved:C:/runs/best.json".parse::<AgentSpec>().unwrap(),
            AgentSpec::Evolved {
                path: PathBuf::from("C:/runs/best.json"),
                depth: 2
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("minimax".parse::<AgentSpec>().is_err());
        assert!("table:deep".parse::<AgentSpec>().is_err());
        assert!("uci:".parse::<AgentSpec>().is_err());
        assert!("random:1".parse::<AgentSpec>().is_err());
    }
}
