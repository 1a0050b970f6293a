use std::fmt;

/// Errors raised while mounting sidebar content or fetching chart data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An element the sidebar depends on is missing from the container. Holds
    /// the id or class name that was looked up.
    MissingElement(String),
    /// The canvas could not provide a 2D drawing context for the chart.
    NoDrawingContext,
    /// The time-series request failed.
    Fetch(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingElement(name) => write!(f, "required element `{}` not found", name),
            Error::NoDrawingContext => write!(f, "canvas has no 2d drawing context"),
            Error::Fetch(msg) => write!(f, "fetch failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
