//! Error types for the acquisition core.

use std::fmt;

use thiserror::Error;

/// The two kinds of long-running procedure a session can own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcedureKind {
    /// Path traversal.
    Traversal,
    /// Object relocation.
    ObjectMove,
}

impl fmt::Display for ProcedureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Traversal => f.write_str("traversal"),
            Self::ObjectMove => f.write_str("object-move"),
        }
    }
}

/// Errors surfaced by session-state operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A box acquisition ran before the status display was attached.
    #[error("status display is not attached")]
    DisplayDetached,

    /// A halt was requested for a procedure that is not running.
    #[error("no {0} procedure is active")]
    ProcedureNotActive(ProcedureKind),
}

/// Result type for session-state operations.
pub type Result<T> = std::result::Result<T, CoreError>;
