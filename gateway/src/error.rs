use std::{
    error::Error,
    fmt::{self, Display},
    io,
    path::PathBuf,
};

/// The result type of every model invocation.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Failures raised while loading the model artifact.
///
/// Any of these is fatal at startup, a process holding no model must not serve.
#[derive(Debug)]
pub enum LoadError {
    /// The artifact could not be read from disk.
    Io { path: PathBuf, source: io::Error },
    /// The artifact is not valid JSON or doesn't match the expected layout.
    Parse(serde_json::Error),
    /// The artifact parsed but its contents are inconsistent.
    Invalid(String),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "cannot read model artifact '{}': {source}", path.display())
            }
            LoadError::Parse(e) => write!(f, "malformed model artifact: {e}"),
            LoadError::Invalid(msg) => write!(f, "invalid model artifact: {msg}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Parse(e) => Some(e),
            LoadError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Boundary conversion for binaries returning `io::Result`.
impl From<LoadError> for io::Error {
    fn from(value: LoadError) -> Self {
        match value {
            LoadError::Io { source, .. } => source,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

/// Failures raised by a model while computing a prediction.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The frame lacks a column the model reads.
    MissingColumn(String),
    /// The column exists but holds the wrong kind of values.
    ColumnType {
        column: String,
        expected: &'static str,
    },
    /// A categorical value was never seen while fitting.
    UnknownCategory { column: String, value: String },
    /// Two sizes that must agree don't.
    ShapeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    /// The model produced NaN or an infinity.
    NonFiniteOutput(f64),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::MissingColumn(column) => write!(f, "missing input column: {column}"),
            ModelError::ColumnType { column, expected } => {
                write!(f, "column {column} must hold {expected} values")
            }
            ModelError::UnknownCategory { column, value } => {
                write!(f, "found unknown category '{value}' in column {column}")
            }
            ModelError::ShapeMismatch {
                what,
                got,
                expected,
            } => write!(f, "shape mismatch for {what}: got {got}, expected {expected}"),
            ModelError::NonFiniteOutput(value) => {
                write!(f, "model produced a non-finite output: {value}")
            }
        }
    }
}

impl Error for ModelError {}

/// Every way a single prediction request can fail.
///
/// The shells render the `Display` output verbatim, so each variant names
/// the field or column it is about.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    /// A form field was not submitted at all.
    MissingField(&'static str),
    /// A form field could not be coerced to its type.
    InvalidField {
        field: &'static str,
        value: String,
        reason: String,
    },
    /// The model rejected the request.
    Model(ModelError),
}

impl Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::MissingField(field) => write!(f, "missing field: {field}"),
            PredictError::InvalidField {
                field,
                value,
                reason,
            } => write!(f, "invalid value for {field} ('{value}'): {reason}"),
            PredictError::Model(e) => write!(f, "{e}"),
        }
    }
}

impl Error for PredictError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PredictError::Model(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ModelError> for PredictError {
    fn from(value: ModelError) -> Self {
        Self::Model(value)
    }
}
