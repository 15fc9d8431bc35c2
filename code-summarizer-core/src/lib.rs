// code-summarizer-core/src/lib.rs

// declare modules
pub mod analysis;
pub mod error;
pub mod patterns;

// re-export key structs/functions for external use by other crates
pub use anyhow::{Context, Result}; // re-export for convenience
pub use crate::analysis::{
    compose, detect, extract, rank, strip_comments, ExtractedStructure, FunctionInfo,
    DEFAULT_TERM_LIMIT,
};
pub use crate::error::SummaryError;
pub use crate::patterns::{
    lookup, supported_languages, verify_patterns, LanguagePatternSet, DEFAULT_LANGUAGE,
};

/// resolve a language tag (or the literal "auto") to its pattern set,
/// rejecting blank code up front. "auto detect" is accepted as an alias for
/// "auto", matching what selection menus historically sent.
pub fn resolve_patterns(
    code: &str,
    language: &str,
) -> std::result::Result<&'static LanguagePatternSet, SummaryError> {
    if code.trim().is_empty() {
        return Err(SummaryError::EmptyInput);
    }
    let tag = language.trim().to_lowercase();
    if tag == "auto" || tag == "auto detect" {
        return patterns::lookup(detect(code)?);
    }
    patterns::lookup(&tag)
}

/// run the whole summarization pipeline over one block of source code and
/// return the composed display string.
///
/// the request is synchronous and self-contained: no i/o, no shared mutable
/// state beyond the read-only pattern registry, so concurrent callers need
/// no coordination.
pub fn summarize(code: &str, language: &str) -> std::result::Result<String, SummaryError> {
    summarize_with_limit(code, language, DEFAULT_TERM_LIMIT)
}

/// like [`summarize`] but with an explicit cap on reported key concepts
pub fn summarize_with_limit(
    code: &str,
    language: &str,
    term_limit: usize,
) -> std::result::Result<String, SummaryError> {
    let patterns = resolve_patterns(code, language)?;

    let comment_free = strip_comments(code, patterns);
    let structure = extract(code, &comment_free, patterns);
    let terms = rank(code, patterns, term_limit);

    Ok(compose(&structure, &terms, patterns, code.lines().count()))
}
