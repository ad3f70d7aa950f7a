//! Demo settings: an optional TOML file, overridden by command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use gridpath::Algorithm;
use serde::{Deserialize, Serialize};

/// Solve shortest paths on a text map (`#` blocked, `.` free, `S` start, `E` end).
#[derive(Debug, Parser)]
#[command(name = "gridpath", version)]
pub struct Cli {
    /// Map file to solve.
    pub map: PathBuf,

    /// TOML settings file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Search strategy: dijkstra or astar.
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,

    /// Run both strategies and compare their costs.
    #[arg(long)]
    pub compare: bool,

    /// Mark the cells each search finalized.
    #[arg(long)]
    pub show_visited: bool,

    /// Log level (error, warn, info, debug, trace) or a flexi_logger spec.
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub algorithm: Algorithm,
    pub compare: bool,
    pub show_visited: bool,
    pub log_level: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Dijkstra,
            compare: false,
            show_visited: false,
            log_level: "warn".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl DemoConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Settings from the file named on the command line (or the defaults),
    /// with flags applied on top.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply(cli);
        Ok(config)
    }

    fn apply(&mut self, cli: &Cli) {
        if let Some(alg) = cli.algorithm {
            self.algorithm = alg;
        }
        self.compare |= cli.compare;
        self.show_visited |= cli.show_visited;
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
    }

    /// Strategies to run, in order.
    pub fn algorithms(&self) -> Vec<Algorithm> {
        if self.compare {
            Algorithm::ALL.to_vec()
        } else {
            vec![self.algorithm]
        }
    }
}
