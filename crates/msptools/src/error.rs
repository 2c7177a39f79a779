use std::path::PathBuf;

use thiserror::Error;

/// Status code reported for a successful call.
pub const SUCCESS: i32 = 0;

/// Errors raised by the buffers, the text I/O layer and the solver facades.
///
/// Precondition and buffer errors map onto the fixed range `-101..=-107`
/// through [`LinalgError::status`]; kernel-reported failures keep the
/// kernel's own `info` value, so the two ranges never collide.
#[derive(Error, Debug)]
pub enum LinalgError {
    #[error("matrix or right-hand side is missing")]
    NullInput,

    #[error("matrix must be square, got shape ({rows}, {cols})")]
    NotSquare { rows: usize, cols: usize },

    #[error("least squares needs rows >= cols, got shape ({rows}, {cols})")]
    Underdetermined { rows: usize, cols: usize },

    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("failed to allocate storage for {requested} values")]
    Allocation { requested: usize },

    #[error("{path}:{line}: {reason}")]
    Format {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("matrix is singular: U({pivot},{pivot}) is exactly zero")]
    SingularMatrix { pivot: usize },

    #[error("matrix does not have full rank: R({index},{index}) vanishes")]
    RankDeficient { index: usize },

    #[error("parameter {param} passed to {routine} had an illegal value")]
    InvalidKernelArgument { routine: &'static str, param: usize },
}

impl LinalgError {
    /// Integer status of this error, using the convention of the
    /// `call_dgesv`/`call_dgels` entry points.
    pub fn status(&self) -> i32 {
        match self {
            LinalgError::NullInput => -101,
            LinalgError::NotSquare { .. } => -102,
            LinalgError::Underdetermined { .. } => -103,
            LinalgError::DimensionMismatch { .. } => -104,
            LinalgError::Allocation { .. } => -105,
            LinalgError::Format { .. } => -106,
            LinalgError::Io { .. } => -107,
            LinalgError::SingularMatrix { pivot } => *pivot as i32,
            LinalgError::RankDeficient { index } => *index as i32,
            LinalgError::InvalidKernelArgument { param, .. } => -(*param as i32),
        }
    }

    /// True for faults that indicate a marshaling defect rather than bad
    /// user input.
    pub fn is_internal(&self) -> bool {
        matches!(self, LinalgError::InvalidKernelArgument { .. })
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LinalgError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn format(path: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        LinalgError::Format {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LinalgError>;
