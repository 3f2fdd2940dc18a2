//! Command-line configuration
//!
//! Everything the front end needs to build its first traces: which algorithm
//! and traversal to show, the input array (typed, random or default), the
//! playback speed and where to write the log.

use crate::playback::Speed;
use crate::sorting::Algorithm;
use crate::structures::MemoryLayout;
use crate::traversal::TraversalMode;
use clap::{Parser, ValueEnum};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Array shown when no values are supplied
pub const DEFAULT_VALUES: [i32; 10] = [12, 34, 8, 25, 45, 30, 15, 20, 38, 5];

/// Bounds for randomly generated arrays
pub const MIN_RANDOM_SIZE: usize = 5;
pub const MAX_RANDOM_SIZE: usize = 100;
pub const DEFAULT_RANDOM_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TraversalArg {
    Bfs,
    Dfs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    Array,
    Vector,
    LinkedList,
}

/// Step-by-step sorting and graph traversal visualizer
#[derive(Parser, Debug, Clone)]
#[command(name = "algotty", version, about)]
pub struct Config {
    /// Sorting algorithm: bubble, insertion, merge, quick, selection, cycle
    #[arg(short, long, default_value = "bubble")]
    pub algorithm: String,

    /// Comma-separated integers to sort, e.g. "5,3,8,1,9"
    #[arg(short, long)]
    pub values: Option<String>,

    /// Sort a random array of this many values (5..=100)
    #[arg(short, long)]
    pub random: Option<usize>,

    /// Seed for random arrays
    #[arg(long)]
    pub seed: Option<u64>,

    /// Animation speed (1..=100)
    #[arg(short, long, default_value_t = 50, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub speed: u8,

    /// Graph traversal mode
    #[arg(short, long, value_enum, default_value_t = TraversalArg::Bfs)]
    pub traversal: TraversalArg,

    /// Memory layout shown in the memory pane
    #[arg(long, value_enum, default_value_t = LayoutArg::Array)]
    pub structure: LayoutArg,

    /// Log file (the terminal is owned by the UI)
    #[arg(long, default_value = "algotty.log")]
    pub log_file: PathBuf,
}

impl Config {
    /// The selected algorithm; unknown names fall back to bubble sort
    pub fn algorithm(&self) -> Algorithm {
        Algorithm::lookup(&self.algorithm).unwrap_or_else(|| {
            warn!(name = %self.algorithm, "unknown algorithm, using bubble sort");
            Algorithm::Bubble
        })
    }

    pub fn speed(&self) -> Speed {
        Speed::new(self.speed)
    }

    pub fn traversal(&self) -> TraversalMode {
        match self.traversal {
            TraversalArg::Bfs => TraversalMode::Bfs,
            TraversalArg::Dfs => TraversalMode::Dfs,
        }
    }

    pub fn layout(&self) -> MemoryLayout {
        match self.structure {
            LayoutArg::Array => MemoryLayout::Array,
            LayoutArg::Vector => MemoryLayout::Vector,
            LayoutArg::LinkedList => MemoryLayout::LinkedList,
        }
    }

    /// Random size requested on the command line, clamped to the valid range
    pub fn random_size(&self) -> usize {
        clamp_random_size(self.random.unwrap_or(DEFAULT_RANDOM_SIZE))
    }

    /// The array to sort first
    ///
    /// Typed values win over `--random`; if no typed token parses, the
    /// default array is used.
    pub fn initial_values(&self, rng: &mut ChaCha8Rng) -> Vec<i32> {
        if let Some(raw) = &self.values {
            let values = parse_values(raw);
            if !values.is_empty() {
                return values;
            }
            warn!(input = %raw, "no numeric values in input, using default array");
        } else if self.random.is_some() {
            return random_values(self.random_size(), rng);
        }

        DEFAULT_VALUES.to_vec()
    }
}

/// Send `tracing` output to `path`
///
/// The terminal belongs to the UI, so logs never go to stdout. `RUST_LOG`
/// overrides the default `info` filter. Fails if the file cannot be created
/// or a global subscriber is already installed.
pub fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    let log_file = File::create(path)
        .map_err(|e| format!("cannot create log file {}: {}", path.display(), e))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| format!("cannot initialise logging: {}", e))?;

    Ok(())
}

/// Parse comma-separated integers
///
/// Each token contributes its leading integer (`"7.5"` is 7, `"12px"` is
/// 12); tokens without one are discarded. At most [`MAX_RANDOM_SIZE`]
/// values are kept.
pub fn parse_values(input: &str) -> Vec<i32> {
    input
        .split(',')
        .filter_map(|token| leading_integer(token.trim()))
        .take(MAX_RANDOM_SIZE)
        .collect()
}

/// Optional sign followed by at least one digit; out-of-range runs saturate
fn leading_integer(token: &str) -> Option<i32> {
    let (negative, rest) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let magnitude = rest[..digits].bytes().fold(0i64, |acc, b| {
        (acc * 10 + i64::from(b - b'0')).min(i64::from(i32::MAX) + 1)
    });
    let value = if negative { -magnitude } else { magnitude };
    Some(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

pub fn clamp_random_size(size: usize) -> usize {
    size.clamp(MIN_RANDOM_SIZE, MAX_RANDOM_SIZE)
}

/// `size` values drawn uniformly from 1..=100
pub fn random_values(size: usize, rng: &mut impl Rng) -> Vec<i32> {
    (0..size).map(|_| rng.gen_range(1..=100)).collect()
}

/// A reproducible generator; without a seed a fresh one is drawn
pub fn seeded_rng(seed: Option<u64>) -> (ChaCha8Rng, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    (ChaCha8Rng::seed_from_u64(seed), seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_values_discards_garbage() {
        assert_eq!(parse_values("5, 3,8 ,1,9"), vec![5, 3, 8, 1, 9]);
        assert_eq!(parse_values("4,x,,-2, 7.5"), vec![4, -2, 7]);
        assert!(parse_values("").is_empty());
    }

    #[test]
    fn test_parse_values_keeps_leading_integer() {
        assert_eq!(parse_values("5, 7.5, 12px, 3"), vec![5, 7, 12, 3]);
        assert_eq!(parse_values("+8,-,px12, -0"), vec![8, 0]);
        assert_eq!(parse_values("99999999999"), vec![i32::MAX]);
        assert_eq!(parse_values("-99999999999"), vec![i32::MIN]);
    }

    #[test]
    fn test_typed_values_are_capped() {
        let input = vec!["1"; MAX_RANDOM_SIZE + 50].join(",");
        assert_eq!(parse_values(&input).len(), MAX_RANDOM_SIZE);
    }

    #[test]
    fn test_random_values_are_reproducible() {
        let (mut a, _) = seeded_rng(Some(7));
        let (mut b, _) = seeded_rng(Some(7));
        let first = random_values(20, &mut a);

        assert_eq!(first, random_values(20, &mut b));
        assert!(first.iter().all(|v| (1..=100).contains(v)));
    }

    #[test]
    fn test_initial_values_precedence() {
        let (mut rng, _) = seeded_rng(Some(1));

        let config = Config::parse_from(["algotty", "--values", "3,1,2", "--random", "9"]);
        assert_eq!(config.initial_values(&mut rng), vec![3, 1, 2]);

        let config = Config::parse_from(["algotty", "--values", "a,b"]);
        assert_eq!(config.initial_values(&mut rng), DEFAULT_VALUES.to_vec());

        let config = Config::parse_from(["algotty", "--random", "500"]);
        assert_eq!(config.initial_values(&mut rng).len(), MAX_RANDOM_SIZE);
    }

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["algotty"]);
        assert_eq!(config.algorithm(), Algorithm::Bubble);
        assert_eq!(config.speed(), Speed::new(50));
        assert_eq!(config.traversal(), TraversalMode::Bfs);
        assert_eq!(config.layout(), MemoryLayout::Array);

        let config = Config::parse_from(["algotty", "-a", "shell", "-t", "dfs"]);
        assert_eq!(config.algorithm(), Algorithm::Bubble);
        assert_eq!(config.traversal(), TraversalMode::Dfs);
    }

    #[test]
    fn test_init_logging_reports_failures() {
        let missing = std::env::temp_dir()
            .join("algotty-no-such-dir")
            .join("nested")
            .join("algotty.log");
        assert!(init_logging(&missing).is_err());

        let path = std::env::temp_dir().join(format!("algotty-test-{}.log", std::process::id()));
        assert!(init_logging(&path).is_ok());
        // Only one global subscriber may be installed
        assert!(init_logging(&path).is_err());
        let _ = std::fs::remove_file(&path);
    }
}
