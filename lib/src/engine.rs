use crate::{error::ConfigError, snapshot::Snapshot};
use ca_rulegen::Rule;
use std::{io, path::Path};

/// The interface of an external cellular-automaton engine.
///
/// The run loop is generic over this trait and treats the engine as a black
/// box: grid storage, rule application, neighbor counting, and the on-disk
/// snapshot encoding all live behind it. The loop only calls the engine and
/// interprets its return values.
///
/// All methods are synchronous. The engine is free to block; cancellation
/// between generations, if needed, is the caller's responsibility.
pub trait Engine {
    /// Establish the initial randomized grid under the given rule.
    ///
    /// `fill_percentage` percent of the cells of a `grid_size` × `grid_size`
    /// square are set alive.
    ///
    /// Rule-string syntax validation belongs to the engine: a malformed rule
    /// string must be rejected here with [`ConfigError::InvalidRule`].
    ///
    /// # Errors
    ///
    /// Returns an error if `grid_size` is zero, if `fill_percentage` is
    /// greater than 100, or if the rule string is malformed.
    fn configure(
        &mut self,
        rule: &Rule,
        grid_size: u32,
        fill_percentage: u32,
    ) -> Result<(), ConfigError>;

    /// Whether the live-cell population is currently zero.
    fn is_empty(&self) -> bool;

    /// Advance the simulation by the given number of generations.
    fn step(&mut self, generations: u32);

    /// Persist the current generation's state to the given path, and return
    /// the written text.
    ///
    /// The returned [`Snapshot`] is what the run loop compares between
    /// generations, so the encoding only needs to be line-oriented and
    /// stable. It is diffed, never parsed.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not writable.
    fn snapshot_to(&mut self, path: &Path) -> Result<Snapshot, io::Error>;

    /// File extension of the engine's snapshot encoding, without the dot.
    fn file_extension(&self) -> &str {
        "rle"
    }
}
