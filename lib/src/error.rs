use thiserror::Error;

/// An error that can occur when validating a run configuration.
///
/// The automaton engine checks the same conditions when it is configured;
/// they are also rejected here, before an engine is ever attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The grid side length is zero.
    #[error("The grid side length must be positive")]
    InvalidGridSize,

    /// The fill percentage is greater than 100.
    #[error("The fill percentage must be between 0 and 100")]
    InvalidFillPercentage,

    /// The engine rejected the rule string.
    #[error("The rule string is invalid")]
    InvalidRule,
}

/// An error that can occur during a run.
///
/// Engine failures are surfaced unmodified: a failed configuration or write
/// indicates a programming or environment error rather than a transient
/// condition, so nothing is retried.
#[derive(Debug, Error)]
pub enum RunError {
    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A snapshot or its directory could not be persisted.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
