use crate::{
    config::Config, convergence::ConvergenceDetector, engine::Engine, error::RunError,
    snapshot::Snapshot,
};
use ca_rulegen::Rule;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use strum::Display;

/// Status of a run.
///
/// A run starts out [`Running`](Status::Running); the other three states are
/// terminal. On every generation, extinction is evaluated first, then
/// convergence, then the generation bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// The run is still advancing the automaton.
    Running,

    /// The live-cell population went extinct.
    Extinct,

    /// Consecutive snapshots stopped changing: the rule reached a fixed
    /// point.
    Converged,

    /// The maximum generation index was reached.
    MaxGenerations,
}

impl Status {
    /// Whether the run has stopped.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// One run of a rule: the ordered sequence of snapshots produced while the
/// automaton evolves, bounded by the configured maximum generation count and
/// terminated early by extinction or convergence.
///
/// A `Run` threads the engine, the rule, and the loop state through one
/// explicit value: construct it, [`step`](Run::step) it one generation at a
/// time (or drive it to the end with [`run`](Run::run)), and inspect the
/// [`Status`]. Stepping one generation at a time leaves room for the caller
/// to abort between generations.
///
/// Snapshots are written once, never mutated, and outlive the run as
/// persisted artifacts, one directory per rule:
/// `<output_dir>/<rule-dir>/<rule-dir>_<generation>.<ext>`.
#[derive(Debug)]
pub struct Run<E> {
    /// The automaton engine.
    engine: E,

    /// The configuration of the run.
    config: Config,

    /// The rule under exploration.
    rule: Rule,

    /// The convergence detector.
    detector: ConvergenceDetector,

    /// The directory holding this run's snapshots.
    directory: PathBuf,

    /// Index of the current generation.
    generation: u32,

    /// Snapshot of the previous generation.
    prev: Option<Snapshot>,

    /// Number of snapshots written so far.
    snapshots_written: u32,

    /// Status of the run.
    status: Status,
}

impl<E: Engine> Run<E> {
    /// Create a new run.
    ///
    /// This checks the configuration, resolves the rule (normalizing the
    /// configured rule string, or generating a random one), configures the
    /// engine with the initial noise-filled grid, and creates the rule's
    /// snapshot directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, if the engine
    /// rejects the rule, or if the snapshot directory cannot be created.
    pub fn new(config: Config, mut engine: E) -> Result<Self, RunError> {
        let config = config.check()?;
        let rule = config.resolve_rule();

        engine.configure(&rule, config.grid_size, config.fill_percentage)?;

        let directory = config.output_dir.join(rule.directory_name());
        fs::create_dir_all(&directory)?;

        log::info!(
            "exploring rule {rule} for up to {} generations",
            config.max_generations
        );

        let detector = ConvergenceDetector::new(config.header_lines);

        Ok(Self {
            engine,
            config,
            rule,
            detector,
            directory,
            generation: 0,
            prev: None,
            snapshots_written: 0,
            status: Status::Running,
        })
    }

    /// The rule under exploration.
    pub const fn rule(&self) -> &Rule {
        &self.rule
    }

    /// The configuration of the run.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Index of the current generation.
    pub const fn generation(&self) -> u32 {
        self.generation
    }

    /// Number of snapshots written so far.
    pub const fn snapshots_written(&self) -> u32 {
        self.snapshots_written
    }

    /// Status of the run.
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Persist the current generation's snapshot, then decide whether the
    /// run stops here.
    ///
    /// Extinction is evaluated first, then convergence, then the generation
    /// bound; only when none of them fires is the automaton advanced to the
    /// next generation. The snapshot of the generation where a stop
    /// condition fires is still written, so a run that stops at generation
    /// `n` leaves `n + 1` snapshots behind.
    ///
    /// Does nothing if the run has already stopped.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be persisted.
    pub fn step(&mut self) -> Result<Status, RunError> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }

        let file_name = self
            .rule
            .snapshot_file_name(self.generation, self.engine.file_extension());
        let snapshot = self.engine.snapshot_to(&self.directory.join(file_name))?;
        self.snapshots_written += 1;

        let grid_is_empty = self.engine.is_empty();
        let is_first_generation = self.generation == 0;

        if grid_is_empty {
            self.status = Status::Extinct;
        } else if self.detector.should_stop(
            self.prev.as_ref(),
            &snapshot,
            is_first_generation,
            grid_is_empty,
        ) {
            self.status = Status::Converged;
        } else if self.generation == self.config.max_generations {
            self.status = Status::MaxGenerations;
        } else {
            self.engine.step(1);
            self.generation += 1;
        }

        self.prev = Some(snapshot);

        match self.status {
            Status::Running => log::debug!("rule {}: generation {}", self.rule, self.generation),
            status => log::info!(
                "rule {} stopped at generation {}: {status}",
                self.rule,
                self.generation
            ),
        }

        Ok(self.status)
    }

    /// Drive the run until it stops, and return the final status.
    ///
    /// # Errors
    ///
    /// Returns an error if a snapshot cannot be persisted.
    pub fn run(&mut self) -> Result<Status, RunError> {
        while self.status == Status::Running {
            self.step()?;
        }

        Ok(self.status)
    }

    /// Consume the run and return the engine.
    pub fn into_engine(self) -> E {
        self.engine
    }
}
