use thiserror::Error;

/// Failures reported by [`ChainedTable`](crate::ChainedTable) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// An argument can never produce a usable table.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Storage for buckets or entries could not be obtained.
    #[error("allocation failure")]
    AllocationFailure,

    /// The key is not present in the table.
    #[error("key not found")]
    NotFound,
}

impl From<std::collections::TryReserveError> for TableError {
    fn from(_: std::collections::TryReserveError) -> Self {
        TableError::AllocationFailure
    }
}

pub type Result<T> = std::result::Result<T, TableError>;
