use std::fmt;

/// Errors raised while registering patterns or loading pattern tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The dialect's splitter rejected the input
    InvalidPath {
        path: String,
    },
    /// A pattern has more segments than the matcher's depth limit
    TooDeep {
        path: String,
        segments: usize,
        max_depth: usize,
    },
    /// A pattern table could not be loaded
    Config {
        context: String,
    },
}

impl MatchError {
    /// Create an error for input the splitter rejected
    pub fn invalid_path(path: impl Into<String>) -> Self {
        MatchError::InvalidPath { path: path.into() }
    }

    /// Create an error for a pattern over the depth limit
    pub fn too_deep(path: impl Into<String>, segments: usize, max_depth: usize) -> Self {
        MatchError::TooDeep {
            path: path.into(),
            segments,
            max_depth,
        }
    }

    /// Create a configuration error with context
    pub fn config(context: impl Into<String>) -> Self {
        MatchError::Config {
            context: context.into(),
        }
    }

    pub fn is_invalid_path(&self) -> bool {
        matches!(self, MatchError::InvalidPath { .. })
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::InvalidPath { path } => {
                write!(f, "invalid path: '{}'", path)
            }
            MatchError::TooDeep {
                path,
                segments,
                max_depth,
            } => {
                write!(
                    f,
                    "path '{}' has {} segments (limit: {})",
                    path, segments, max_depth
                )
            }
            MatchError::Config { context } => {
                write!(f, "Configuration error: {}", context)
            }
        }
    }
}

impl std::error::Error for MatchError {}

impl From<serde_json::Error> for MatchError {
    fn from(error: serde_json::Error) -> Self {
        MatchError::config(error.to_string())
    }
}

/// Result type alias for matcher operations
pub type MatchResult<T> = Result<T, MatchError>;

/// Extension trait for attaching context to config errors
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> MatchResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<MatchError>,
{
    fn context(self, context: impl Into<String>) -> MatchResult<T> {
        self.map_err(|e| match e.into() {
            MatchError::Config { context: inner } => {
                MatchError::config(format!("{}: {}", context.into(), inner))
            }
            other => other,
        })
    }
}
