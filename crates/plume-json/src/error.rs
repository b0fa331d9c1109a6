//! Error types for JSON parsing and the file adapters.

use thiserror::Error;

/// Errors produced while parsing JSON text or running the file adapters.
///
/// Every parse-side variant carries the byte offset into the source text
/// where the failure was detected. Failures are terminal for the call that
/// produced them: errors short-circuit up the recursive descent and no
/// partial tree is returned.
#[derive(Error, Debug)]
pub enum JsonError {
    /// A string token was unterminated or contained an unknown escape.
    #[error("malformed string at offset {offset}: {message}")]
    MalformedString { offset: usize, message: String },

    /// A number token contained a second decimal point, a non-digit
    /// character, or no digits at all.
    #[error("malformed number at offset {offset}: {message}")]
    MalformedNumber { offset: usize, message: String },

    /// A literal token was not exactly `true`, `false`, or `null`.
    #[error("malformed literal at offset {offset}: {message}")]
    MalformedLiteral { offset: usize, message: String },

    /// A container was structurally broken: missing `:`, missing or trailing
    /// `,`, unterminated `}`/`]`, or a non-string object key.
    #[error("malformed container at offset {offset}: {message}")]
    MalformedContainer { offset: usize, message: String },

    /// No value form matches the character at the cursor.
    #[error("unexpected token at offset {offset}: {message}")]
    UnexpectedToken { offset: usize, message: String },

    /// Container nesting exceeded the depth ceiling.
    #[error("nesting deeper than {limit} levels at offset {offset}")]
    TooDeeplyNested { offset: usize, limit: usize },

    /// A file adapter failed to read or write (load/dump path only).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl JsonError {
    /// Byte offset into the source text where the failure was detected.
    ///
    /// `None` for [`JsonError::Io`], which has no position in the input.
    pub fn offset(&self) -> Option<usize> {
        match self {
            JsonError::MalformedString { offset, .. }
            | JsonError::MalformedNumber { offset, .. }
            | JsonError::MalformedLiteral { offset, .. }
            | JsonError::MalformedContainer { offset, .. }
            | JsonError::UnexpectedToken { offset, .. }
            | JsonError::TooDeeplyNested { offset, .. } => Some(*offset),
            JsonError::Io(_) => None,
        }
    }
}

/// Convenience alias used throughout plume-json.
pub type Result<T> = std::result::Result<T, JsonError>;
