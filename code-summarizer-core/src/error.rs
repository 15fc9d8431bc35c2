// typed failures the pipeline reports to its caller

use thiserror::Error;

/// errors surfaced to the shell; messages are meant to be shown verbatim
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryError {
    /// code input was blank or whitespace-only; the caller should re-prompt
    #[error("no code provided: input is empty or whitespace-only")]
    EmptyInput,

    /// language tag (supplied or auto-detected) has no pattern registry entry
    #[error("summarization for '{0}' is not yet supported")]
    UnsupportedLanguage(String),

    /// a configured pattern failed to compile; a registry defect, caught by
    /// the load-time self-check rather than during a request
    #[error("pattern engine failure for language '{language}': {message}")]
    PatternEngine { language: String, message: String },
}
