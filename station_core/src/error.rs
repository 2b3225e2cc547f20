use thiserror::Error;

/// Failures at the station's input boundaries. The engine itself never fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StationError {
    #[error("malformed sensor sample: {0}")]
    MalformedSample(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("unknown route: {method} {path}")]
    UnknownRoute { method: String, path: String },
}

/// Operator text that is not a valid number or keyword.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid {field}: {input:?} is not a number")]
    InvalidNumber { field: &'static str, input: String },
    #[error("invalid {field}: {input:?} is not a whole number")]
    InvalidInteger { field: &'static str, input: String },
    #[error("invalid input {input:?}: expected {expected}")]
    InvalidKeyword {
        expected: &'static str,
        input: String,
    },
}

#[derive(Debug, Error, Clone)]
pub enum BuildError {
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}
