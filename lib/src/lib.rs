//! A library for exploring the behavior of Life-like cellular automata rules.
//!
//! A [`Run`] seeds a finite grid with random noise under a rule — supplied by
//! the user or generated randomly — and advances the automaton generation by
//! generation, persisting a snapshot of every generation for later
//! inspection. The run stops early when the population dies out or when
//! consecutive snapshots stop changing, i.e. when the rule has reached a
//! fixed point.
//!
//! The automaton itself (grid storage, rule application, neighbor counting,
//! snapshot encoding) is not part of this crate; it is reached through the
//! [`Engine`] trait.
//!
//! More documentation will be added later.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::use_self)]
#![warn(missing_docs)]

mod config;
mod convergence;
mod engine;
mod error;
mod run;
mod snapshot;

pub use ca_rulegen::Rule;
pub use config::Config;
pub use convergence::ConvergenceDetector;
pub use engine::Engine;
pub use error::{ConfigError, RunError};
pub use run::{Run, Status};
pub use snapshot::Snapshot;
