use thiserror::Error;

/// Failure modes shared by every exercise.
///
/// Two kinds cover the whole workbook: the input is not of the expected
/// kind at all (`TypeMismatch`, produced by the parsing boundary in
/// [`crate::input`]), or it has the right kind but lies outside the
/// accepted domain (`Validation`, produced by the exercises themselves).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KataError {
    #[error("type mismatch: expected {expected}, found `{found}`")]
    TypeMismatch { expected: &'static str, found: String },

    #[error("validation failed: {0}")]
    Validation(String),
}

impl KataError {
    pub fn type_mismatch(expected: &'static str, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected,
            found: found.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, KataError>;
