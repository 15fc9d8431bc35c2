// analysis module - organises the summarization pipeline into submodules

pub mod compose;
pub mod detect;
pub mod extract;
pub mod terms;

// re-export key public items for convenient access
pub use compose::compose;
pub use detect::detect;
pub use extract::{extract, strip_comments, ExtractedStructure, FunctionInfo};
pub use terms::{rank, DEFAULT_TERM_LIMIT};
