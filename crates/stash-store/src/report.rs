//! Error reports delivered through the error channel

use serde_json::Value;

use crate::error::StoreError;

/// Operation a report originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Set,
    Get,
    Remove,
    Clear,
}

impl Op {
    pub fn as_str(&self) -> &'static str {
        match self {
            Op::Set => "set",
            Op::Get => "get",
            Op::Remove => "remove",
            Op::Clear => "clear",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Description of a failed store operation, handed to error handlers.
#[derive(Debug)]
pub struct ErrorReport {
    /// Key involved, absent only for `clear`
    pub key: Option<String>,
    /// Which operation failed
    pub op: Op,
    /// Rejected value, carried only for `set` and only when it could itself
    /// be captured as JSON
    pub value: Option<Value>,
    /// The underlying failure
    pub error: StoreError,
}
