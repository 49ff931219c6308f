/// Convenience result type used across scoregrid.
pub type ScoregridResult<T> = Result<T, ScoregridError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Only [`ScoregridError::Config`] and [`ScoregridError::Ingest`] abort a run;
/// asset and per-field failures degrade into documented fallbacks and surface
/// as diagnostics instead.
#[derive(thiserror::Error, Debug)]
pub enum ScoregridError {
    /// Invalid deployment configuration detected at startup.
    #[error("config error: {0}")]
    Config(String),

    /// Input data missing, unreadable, or undecodable.
    #[error("ingest error: {0}")]
    Ingest(String),

    /// Internal rendering invariant violation.
    #[error("render error: {0}")]
    Render(String),

    /// Output codec or filesystem failure.
    #[error("output error: {0}")]
    Output(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScoregridError {
    /// Build a [`ScoregridError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ScoregridError::Ingest`] value.
    pub fn ingest(msg: impl Into<String>) -> Self {
        Self::Ingest(msg.into())
    }

    /// Build a [`ScoregridError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ScoregridError::Output`] value.
    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }
}
