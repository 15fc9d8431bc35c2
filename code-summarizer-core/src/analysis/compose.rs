// summary composition - deterministic assembly of one flat display string

use crate::analysis::extract::ExtractedStructure;
use crate::patterns::LanguagePatternSet;
use std::collections::HashSet;

/// assemble the summary sentences in their fixed order: language, main
/// class, functions, imports, module purposes, key concepts, line count.
/// a sentence is omitted only when its triggering data is empty; everything
/// is joined with single spaces, no paragraphs or markup.
pub fn compose(
    structure: &ExtractedStructure,
    terms: &[String],
    patterns: &LanguagePatternSet,
    line_count: usize,
) -> String {
    let mut sentences: Vec<String> = Vec::new();

    sentences.push(format!(
        "This code is written in {}.",
        capitalise(patterns.name)
    ));

    if let Some(first) = structure.class_names.first() {
        // "0 additional" is legitimate for a single class and is not
        // suppressed; the first-seen class is always the main one
        sentences.push(format!(
            "It has a main class '{}' and {} additional class(es).",
            first,
            structure.class_names.len() - 1
        ));
    }

    if !structure.functions.is_empty() {
        sentences.push(format!(
            "It contains {} function(s).",
            structure.functions.len()
        ));
        for function in &structure.functions {
            if function.parameters.is_empty() {
                sentences.push(format!("Function '{}' takes no arguments.", function.name));
            } else {
                sentences.push(format!(
                    "Function '{}' takes {} argument(s): {}.",
                    function.name,
                    function.parameters.len(),
                    function.parameters.join(", ")
                ));
            }
        }
    }

    if !structure.import_statements.is_empty() {
        let distinct: HashSet<&str> = structure
            .import_statements
            .iter()
            .map(String::as_str)
            .collect();
        sentences.push(format!("It imports {} distinct module(s).", distinct.len()));
    }

    for module in &structure.detected_modules {
        // modules without a configured purpose are silently skipped
        if let Some(purpose) = patterns.module_purposes.get(module.as_str()) {
            sentences.push(format!("The '{module}' module is used to {purpose}."));
        }
    }

    if !terms.is_empty() {
        sentences.push(format!("Key concepts include: {}.", terms.join(", ")));
    }

    sentences.push(format!("Total lines of code: {line_count}."));

    sentences.join(" ")
}

fn capitalise(language: &str) -> String {
    let mut chars = language.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extract::FunctionInfo;
    use crate::patterns::lookup;

    fn structure() -> ExtractedStructure {
        ExtractedStructure {
            class_names: vec!["Foo".to_string()],
            functions: vec![
                FunctionInfo {
                    name: "bar".to_string(),
                    parameters: vec!["self".to_string(), "x".to_string()],
                },
                FunctionInfo {
                    name: "tick".to_string(),
                    parameters: Vec::new(),
                },
            ],
            import_statements: vec!["import ast".to_string(), "import ast".to_string()],
            detected_modules: vec!["ast".to_string()],
        }
    }

    #[test]
    fn sentences_appear_in_fixed_order() {
        let patterns = lookup("python").unwrap();
        let terms = vec!["process".to_string(), "data".to_string()];
        let summary = compose(&structure(), &terms, patterns, 4);

        let language = summary.find("written in Python").unwrap();
        let class = summary.find("main class 'Foo'").unwrap();
        let functions = summary.find("contains 2 function(s)").unwrap();
        let imports = summary.find("imports 1 distinct module(s)").unwrap();
        let purpose = summary.find("'ast' module is used to").unwrap();
        let concepts = summary.find("Key concepts include: process, data.").unwrap();
        let lines = summary.find("Total lines of code: 4.").unwrap();
        assert!(language < class);
        assert!(class < functions);
        assert!(functions < imports);
        assert!(imports < purpose);
        assert!(purpose < concepts);
        assert!(concepts < lines);
    }

    #[test]
    fn single_class_reports_zero_additional() {
        let patterns = lookup("python").unwrap();
        let summary = compose(&structure(), &[], patterns, 1);
        assert!(summary.contains("main class 'Foo' and 0 additional class(es)"));
    }

    #[test]
    fn functions_report_argument_names_or_no_arguments() {
        let patterns = lookup("python").unwrap();
        let summary = compose(&structure(), &[], patterns, 1);
        assert!(summary.contains("Function 'bar' takes 2 argument(s): self, x."));
        assert!(summary.contains("Function 'tick' takes no arguments."));
    }

    #[test]
    fn empty_structure_omits_everything_but_language_and_lines() {
        let patterns = lookup("go").unwrap();
        let summary = compose(&ExtractedStructure::default(), &[], patterns, 2);
        assert_eq!(
            summary,
            "This code is written in Go. Total lines of code: 2."
        );
    }

    #[test]
    fn output_is_one_flat_string() {
        let patterns = lookup("python").unwrap();
        let terms = vec!["data".to_string()];
        let summary = compose(&structure(), &terms, patterns, 3);
        assert!(!summary.contains('\n'));
    }
}
