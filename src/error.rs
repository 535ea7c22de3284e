use thiserror::Error;

pub type Result<T> = std::result::Result<T, AcademyError>;

/// All errors produced by the CSS Academy crate.
///
/// Validation and preview composition are total functions and never
/// appear here; this covers catalog lookups and request handling. The
/// server maps each variant to an HTTP status and message body.
#[derive(Error, Debug)]
pub enum AcademyError {
    #[error("Lesson not found: {id}")]
    LessonNotFound { id: String },

    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },

    #[error("Cannot infer language from '{path}': expected a .html or .css extension")]
    UnknownLanguage { path: String },

    #[error("Invalid request data: {0}")]
    InvalidRequest(String),

    #[error("Storage unavailable")]
    StorageUnavailable,
}
