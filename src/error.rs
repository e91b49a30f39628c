//! Error types for Evaluar operations.
//!
//! All construction-time contract violations surface here; the analysis
//! stages themselves are total functions over validated data.

use std::fmt;

/// Main error type for Evaluar operations.
///
/// Covers dataset construction contract violations (non-binary responses,
/// duplicate identifiers, unknown question keys) and dimension mismatches
/// in the underlying primitives.
///
/// # Examples
///
/// ```
/// use evaluar::error::EvaluarError;
///
/// let err = EvaluarError::NonBinaryResponse {
///     student_id: "S001".to_string(),
///     question_id: "q3".to_string(),
///     value: 4,
/// };
/// assert!(err.to_string().contains("must be 0 or 1"));
/// ```
#[derive(Debug)]
pub enum EvaluarError {
    /// Student identifier is empty.
    EmptyStudentId,

    /// Two student records share the same identifier.
    DuplicateStudent {
        /// Offending student identifier
        student_id: String,
    },

    /// Two questions in the canonical item list share the same identifier.
    DuplicateQuestion {
        /// Offending question identifier
        question_id: String,
    },

    /// A response value is outside {0, 1}.
    NonBinaryResponse {
        /// Student whose record carries the value
        student_id: String,
        /// Question the value was recorded for
        question_id: String,
        /// Value found
        value: u8,
    },

    /// A student's response map references a question that is not in the
    /// dataset's canonical item list.
    UnknownQuestion {
        /// Student whose record carries the key
        student_id: String,
        /// Unrecognized question identifier
        question_id: String,
    },

    /// Matrix/vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for EvaluarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluarError::EmptyStudentId => write!(f, "Student ID cannot be empty"),
            EvaluarError::DuplicateStudent { student_id } => {
                write!(f, "Duplicate student ID: {student_id}")
            }
            EvaluarError::DuplicateQuestion { question_id } => {
                write!(f, "Duplicate question ID: {question_id}")
            }
            EvaluarError::NonBinaryResponse {
                student_id,
                question_id,
                value,
            } => {
                write!(
                    f,
                    "Response for {question_id} by student {student_id} must be 0 or 1, got {value}"
                )
            }
            EvaluarError::UnknownQuestion {
                student_id,
                question_id,
            } => {
                write!(
                    f,
                    "Student {student_id} has a response for {question_id}, which is not in the question list"
                )
            }
            EvaluarError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {expected}, got {actual}")
            }
            EvaluarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for EvaluarError {}

impl From<&str> for EvaluarError {
    fn from(msg: &str) -> Self {
        EvaluarError::Other(msg.to_string())
    }
}

impl From<String> for EvaluarError {
    fn from(msg: String) -> Self {
        EvaluarError::Other(msg)
    }
}

/// Convenience Result type alias for Evaluar operations.
pub type Result<T> = std::result::Result<T, EvaluarError>;
