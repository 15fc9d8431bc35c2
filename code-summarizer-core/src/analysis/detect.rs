// language detection - ordered signature probes over the raw text

use crate::error::SummaryError;
use crate::patterns::{self, DEFAULT_LANGUAGE};

/// infer a language tag from code characteristics.
///
/// probes run in registry order and the first signature matching anywhere in
/// the text wins; when nothing matches the fixed default language is
/// returned, so detection degrades to a best guess rather than failing.
/// this is a heuristic: syntax shared between languages resolves to the
/// earlier-listed one, and callers depend on that precedence.
pub fn detect(code: &str) -> Result<&'static str, SummaryError> {
    for &(language, ref signature) in patterns::detectors()? {
        if signature.is_match(code) {
            return Ok(language);
        }
    }
    Ok(DEFAULT_LANGUAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_python_from_def() {
        assert_eq!(detect("def greet(name):\n    pass").unwrap(), "python");
    }

    #[test]
    fn detects_java_from_visibility_modifier() {
        assert_eq!(detect("public class Server {}").unwrap(), "java");
    }

    #[test]
    fn detects_javascript_from_function_keyword() {
        assert_eq!(detect("function add(a, b) { return a + b; }").unwrap(), "javascript");
    }

    #[test]
    fn detects_cpp_from_include() {
        assert_eq!(detect("#include <iostream>\nint main() {}").unwrap(), "cpp");
    }

    #[test]
    fn detects_go_from_func() {
        assert_eq!(detect("func main() {\n}").unwrap(), "go");
    }

    #[test]
    fn detects_php_from_open_tag() {
        assert_eq!(detect("<?php echo 'hi';").unwrap(), "php");
    }

    #[test]
    fn python_wins_over_java_when_both_signatures_match() {
        // precedence contract: the detection list checks python before java,
        // so mixed input resolves to python even with a java class present
        let code = "def foo():\n    pass\npublic class Bar {}";
        assert_eq!(detect(code).unwrap(), "python");
    }

    #[test]
    fn ruby_def_resolves_to_python_by_table_order() {
        assert_eq!(detect("def greet\n  puts 'hi'\nend").unwrap(), "python");
    }

    #[test]
    fn falls_back_to_default_language() {
        assert_eq!(detect("SELECT * FROM users;").unwrap(), DEFAULT_LANGUAGE);
    }
}
