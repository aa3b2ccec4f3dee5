/// Errors reported by the editor when an action cannot be applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// An index-addressed action referred to a record that does not exist
    IndexOutOfRange {
        /// Index carried by the action
        index: usize,
        /// Number of records at the time of the action
        len: usize,
    },
}

impl core::fmt::Display for EditorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Record index {index} out of range ({len} records)")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EditorError {}

/// Result type for editor operations
pub type Result<T> = core::result::Result<T, EditorError>;
