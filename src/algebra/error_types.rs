use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by compressed sparse matrix operations.
pub enum SparseMatrixError {
    /// A square matrix was required
    #[error("Matrix is not square ({major} x {minor})")]
    DimensionMismatch { major: usize, minor: usize },
    /// A line or coordinate index exceeds the declared dimension
    #[error("Index {index} out of range for dimension {dim}")]
    IndexOutOfRange { index: usize, dim: usize },
    /// Repeated coordinate entry during assembly
    #[error("Duplicate entry at ({row}, {column})")]
    DuplicateEntry { row: usize, column: usize },
    /// Assembly settings failed validation
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by assembly settings validation.
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field {0}")]
    BadFieldValue(&'static str),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by [`check_format`](crate::algebra::CsMatrix::check_format).
pub enum SparseFormatError {
    /// Number of stored lines disagrees with the major dimension
    #[error("Number of lines does not match the major dimension")]
    IncompatibleDimension,
    /// Data is not strictly sorted by index within each line
    #[error("Data is not sorted by index within each line")]
    BadOrdering,
    #[error("Entry index exceeds the minor dimension")]
    /// Entry index exceeds the minor dimension
    BadIndex,
}
