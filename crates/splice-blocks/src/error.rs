//! Error types for splice-blocks

/// Result type for splice-blocks operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while compiling patterns or rewriting a region
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid {role} pattern: {source}")]
    InvalidPattern {
        role: PatternRole,
        #[source]
        source: regex::Error,
    },

    #[error("Declaration pattern `{pattern}` must capture a name and a value")]
    MissingCaptureGroups { pattern: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Which of the configurable patterns an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternRole {
    Declaration,
    Target,
    Separator,
}

impl std::fmt::Display for PatternRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Declaration => "declaration",
            Self::Target => "target",
            Self::Separator => "separator",
        };
        f.write_str(name)
    }
}
