//! Short status lines for operation feedback.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Info,
    Success,
    Failure,
}

/// One-line feedback such as "Collapsed Europe/London" or a failed purge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    kind: StatusKind,
    message: String,
}

impl OperationStatus {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Failure,
            message: message.into(),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            StatusKind::Info => writeln!(f, "{}", self.message),
            StatusKind::Success => writeln!(f, "Success: {}", self.message),
            StatusKind::Failure => writeln!(f, "Error: {}", self.message),
        }
    }
}
