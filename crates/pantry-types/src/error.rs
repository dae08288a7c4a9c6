use thiserror::Error;

/// Errors produced by type-level validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid quantity {input:?}: {reason}")]
    InvalidQuantity { input: String, reason: String },

    #[error("invalid identifier {input:?}: {reason}")]
    InvalidId { input: String, reason: String },
}

impl TypeError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

/// Classes of failure a presentation layer distinguishes when messaging the
/// user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad input: empty or reserved name, duplicate name, non-positive
    /// quantity, unknown reference. Nothing was written.
    Validation,
    /// The target location is protected and cannot be renamed or deleted.
    Protected,
    /// The storage backend failed. Prior state is intact.
    Persistence,
    /// The referenced record does not exist.
    NotFound,
    /// Settings are out of range or unreadable.
    Config,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Validation => "validation",
            Self::Protected => "protected",
            Self::Persistence => "persistence",
            Self::NotFound => "not found",
            Self::Config => "config",
        };
        f.write_str(s)
    }
}
