//! Refresh progress markers used for rejection logging

use std::fmt;

/// Where a refresh attempt is in its lifecycle
///
/// A refresh moves strictly forward through these stages. A rejection
/// at any stage ends the attempt; the stage is recorded in the log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStage {
    Received,
    SessionLookup,
    HashCheck,
    RoleLookup,
    Reissue,
    Done,
}

impl RefreshStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefreshStage::Received => "received",
            RefreshStage::SessionLookup => "session_lookup",
            RefreshStage::HashCheck => "hash_check",
            RefreshStage::RoleLookup => "role_lookup",
            RefreshStage::Reissue => "reissue",
            RefreshStage::Done => "done",
        }
    }
}

impl fmt::Display for RefreshStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
