use std::fmt;

/// Main error type for the map data generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// The input file could not be read
    Io(String),
    /// Error related to the dex number reference table
    DexData(DexDataError),
}

/// Errors related to the dex number reference table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DexDataError {
    /// The lookup file was not found or not readable
    LookupFileNotFound(String),
    /// The lookup file is not a valid RON name -> number map
    MalformedData(String),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::Io(details) => write!(f, "I/O error: {}", details),
            TransformError::DexData(err) => write!(f, "Dex data error: {}", err),
        }
    }
}

impl fmt::Display for DexDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DexDataError::LookupFileNotFound(path) => {
                write!(f, "Dex lookup file not found: {}", path)
            }
            DexDataError::MalformedData(details) => {
                write!(f, "Malformed dex lookup data: {}", details)
            }
        }
    }
}

impl std::error::Error for TransformError {}
impl std::error::Error for DexDataError {}

impl From<DexDataError> for TransformError {
    fn from(err: DexDataError) -> Self {
        TransformError::DexData(err)
    }
}

/// Type alias for Results using TransformError
pub type TransformResult<T> = Result<T, TransformError>;

/// Type alias for Results using DexDataError
pub type DexDataResult<T> = Result<T, DexDataError>;
