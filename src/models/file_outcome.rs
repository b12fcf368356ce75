// src/models/file_outcome.rs

/// What happened to a single candidate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Content changed and was written back.
    Updated,
    /// Content would change, but this is a dry run.
    WouldUpdate,
    /// No qualifying class pair was found.
    Unchanged,
}

impl FileOutcome {
    #[inline]
    #[must_use]
    pub const fn is_change(self) -> bool {
        matches!(self, Self::Updated | Self::WouldUpdate)
    }
}
