use crate::error::ConfigError;
use ca_rulegen::Rule;
#[cfg(feature = "clap")]
use clap::Args;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The configuration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(Args))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// The rule string of the cellular automaton, in `B[0-8]*/S[0-8]*`
    /// notation (case-insensitive).
    ///
    /// If this is [`None`], a rule is generated randomly. Generated rules
    /// restrict their digits to `1`–`8`; digit `0` is reachable only through
    /// an explicit rule string.
    ///
    /// The string is lower-cased and otherwise handed to the engine
    /// verbatim. A malformed rule string is rejected by the engine, not
    /// here.
    #[cfg_attr(feature = "clap", arg(short, long))]
    pub rule_str: Option<String>,

    /// Side length of the square grid.
    #[cfg_attr(feature = "clap", arg(short, long, default_value = "100"))]
    pub grid_size: u32,

    /// Percentage of cells set alive by the initial random noise fill.
    #[cfg_attr(feature = "clap", arg(short, long, default_value = "50"))]
    pub fill_percentage: u32,

    /// Maximum generation index to explore.
    ///
    /// Generation indices start at 0, so a run that never stops early
    /// writes `max_generations + 1` snapshots.
    #[cfg_attr(feature = "clap", arg(short, long, default_value = "100"))]
    pub max_generations: u32,

    /// Random seed for rule generation.
    ///
    /// If this is [`None`], then the seed is randomly generated.
    #[cfg_attr(feature = "clap", arg(long))]
    pub seed: Option<u64>,

    /// Number of differing lines between consecutive snapshot files
    /// attributed to the engine's per-file header.
    ///
    /// Two snapshot files of an identical grid state still differ in this
    /// many lines, so the convergence check looks for exactly this
    /// difference rather than for equality.
    #[cfg_attr(feature = "clap", arg(long, default_value = "1"))]
    pub header_lines: usize,

    /// Directory under which each rule's snapshot directory is created.
    #[cfg_attr(feature = "clap", arg(short, long, default_value = "patterns"))]
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a configuration with the default grid: side length 100, 50%
    /// noise fill, 100 generations, a randomly generated rule.
    pub fn new() -> Self {
        Self {
            rule_str: None,
            grid_size: 100,
            fill_percentage: 50,
            max_generations: 100,
            seed: None,
            header_lines: 1,
            output_dir: PathBuf::from("patterns"),
        }
    }

    /// Set the rule string.
    ///
    /// See [`rule_str`](Config::rule_str) for more details.
    #[inline]
    pub fn with_rule_str(mut self, rule_str: &str) -> Self {
        self.rule_str = Some(rule_str.to_string());
        self
    }

    /// Set the side length of the grid.
    ///
    /// See [`grid_size`](Config::grid_size) for more details.
    #[inline]
    pub const fn with_grid_size(mut self, grid_size: u32) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Set the noise fill percentage.
    ///
    /// See [`fill_percentage`](Config::fill_percentage) for more details.
    #[inline]
    pub const fn with_fill_percentage(mut self, fill_percentage: u32) -> Self {
        self.fill_percentage = fill_percentage;
        self
    }

    /// Set the maximum generation index.
    ///
    /// See [`max_generations`](Config::max_generations) for more details.
    #[inline]
    pub const fn with_max_generations(mut self, max_generations: u32) -> Self {
        self.max_generations = max_generations;
        self
    }

    /// Set the random seed for rule generation.
    ///
    /// See [`seed`](Config::seed) for more details.
    #[inline]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of header lines tolerated by the convergence check.
    ///
    /// See [`header_lines`](Config::header_lines) for more details.
    #[inline]
    pub const fn with_header_lines(mut self, header_lines: usize) -> Self {
        self.header_lines = header_lines;
        self
    }

    /// Set the output directory.
    ///
    /// See [`output_dir`](Config::output_dir) for more details.
    #[inline]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Check whether the configuration is valid.
    pub fn check(self) -> Result<Self, ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::InvalidGridSize);
        }

        if self.fill_percentage > 100 {
            return Err(ConfigError::InvalidFillPercentage);
        }

        Ok(self)
    }

    /// Resolve the rule of the run: normalize the configured rule string,
    /// or generate a random rule when none is configured.
    ///
    /// Generation uses an RNG seeded from [`seed`](Config::seed), so a run
    /// without a rule string is still reproducible under a fixed seed.
    pub fn resolve_rule(&self) -> Rule {
        match &self.rule_str {
            Some(rule_str) => Rule::normalize(rule_str),
            None => Rule::random(&mut self.rng()),
        }
    }

    /// The random number generator of the run.
    fn rng(&self) -> Xoshiro256StarStar {
        match self.seed {
            Some(seed) => Xoshiro256StarStar::seed_from_u64(seed),
            None => Xoshiro256StarStar::from_entropy(),
        }
    }
}
