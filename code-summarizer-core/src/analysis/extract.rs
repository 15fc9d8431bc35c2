// structural extraction - a single regex pass over the source, not parsing

use crate::patterns::LanguagePatternSet;
use regex::Captures;
use serde::Serialize;

/// a recognised function and its parameter names, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionInfo {
    pub name: String,
    pub parameters: Vec<String>,
}

/// structural facts recognised in one block of source code.
///
/// `detected_modules` uses raw substring containment against the import
/// statements ("re" matches "import requests"); the false positives are a
/// known property of the heuristic and tightening it would change output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedStructure {
    pub class_names: Vec<String>,
    pub functions: Vec<FunctionInfo>,
    pub import_statements: Vec<String>,
    pub detected_modules: Vec<String>,
}

/// remove comments by plain textual substitution: the block pattern first
/// across the whole text, then the single-line pattern. not quote-aware, so
/// comment-like sequences inside string literals are stripped too; that
/// approximation is the contract, not a bug to fix here.
pub fn strip_comments(code: &str, patterns: &LanguagePatternSet) -> String {
    let without_blocks = match &patterns.comment_multi {
        Some(multi) => multi.replace_all(code, "").into_owned(),
        None => code.to_string(),
    };
    patterns
        .comment_single
        .replace_all(&without_blocks, "")
        .into_owned()
}

/// pick the first non-empty capture group of a match. patterns with
/// alternative sub-patterns carry one name group per alternative and exactly
/// one is expected to be non-empty; a match with none is discarded upstream.
fn first_capture(caps: &Captures) -> Option<String> {
    caps.iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str())
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

/// run the extraction pass. classes and functions are found in the
/// comment-free text; imports are matched against the original text, since
/// an import statement is never itself a comment and the raw fragment is
/// what the shell displays.
pub fn extract(
    code: &str,
    comment_free: &str,
    patterns: &LanguagePatternSet,
) -> ExtractedStructure {
    let mut structure = ExtractedStructure::default();

    for caps in patterns.class_pattern.captures_iter(comment_free) {
        if let Some(name) = first_capture(&caps) {
            structure.class_names.push(name);
        }
    }

    for caps in patterns.function_pattern.captures_iter(comment_free) {
        let Some(name) = first_capture(&caps) else {
            continue;
        };
        // some name patterns stop before the parameter list (javascript's
        // `function name`), so the arguments probe starts at the function's
        // own match and takes its first hit from there
        let start = caps.get(0).map(|m| m.start()).unwrap_or(0);
        let parameters = extract_arguments(&comment_free[start..], patterns);
        register_function(&mut structure.functions, name, parameters);
    }

    for import in patterns.import_pattern.find_iter(code) {
        structure.import_statements.push(import.as_str().to_string());
    }

    structure.detected_modules = detect_modules(&structure.import_statements, patterns);
    structure
}

/// run the arguments pattern against the text of one function (the region
/// beginning at its match), then comma-split the first non-empty captured
/// list, trimming each part and dropping empties
fn extract_arguments(function_text: &str, patterns: &LanguagePatternSet) -> Vec<String> {
    let Some(arguments_pattern) = &patterns.arguments_pattern else {
        return Vec::new();
    };
    let Some(caps) = arguments_pattern.captures(function_text) else {
        return Vec::new();
    };
    let Some(list) = first_capture(&caps) else {
        return Vec::new();
    };
    list.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// a re-registered function name replaces its parameters but keeps its
/// first-seen position, matching insertion-ordered map semantics
fn register_function(functions: &mut Vec<FunctionInfo>, name: String, parameters: Vec<String>) {
    if let Some(existing) = functions.iter_mut().find(|f| f.name == name) {
        existing.parameters = parameters;
    } else {
        functions.push(FunctionInfo { name, parameters });
    }
}

fn detect_modules(imports: &[String], patterns: &LanguagePatternSet) -> Vec<String> {
    let lowered: Vec<String> = imports.iter().map(|i| i.to_lowercase()).collect();
    patterns
        .known_modules
        .iter()
        .filter(|module| {
            let needle = module.to_lowercase();
            lowered.iter().any(|import| import.contains(&needle))
        })
        .map(|module| module.to_string())
        .collect()
}
