// language pattern registry - the single source of truth for per-language
// recognition rules; the pipeline itself never hard-codes any syntax

use crate::error::SummaryError;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

/// fallback language when detection finds no signature
pub const DEFAULT_LANGUAGE: &str = "python";

/// compiled recognition rules for one language.
///
/// `arguments_pattern` and `comment_multi` are optional and default to
/// "no match"; the other four patterns are mandatory for every entry.
#[derive(Debug)]
pub struct LanguagePatternSet {
    /// lowercase registry key, e.g. "python"
    pub name: &'static str,
    pub class_pattern: Regex,
    pub function_pattern: Regex,
    pub arguments_pattern: Option<Regex>,
    pub import_pattern: Regex,
    pub comment_single: Regex,
    pub comment_multi: Option<Regex>,
    /// library names probed by substring against raw import statements
    pub known_modules: &'static [&'static str],
    /// one-sentence purpose per known module, keyed by module name
    pub module_purposes: HashMap<&'static str, &'static str>,
}

/// uncompiled registry entry; compiled once into a `LanguagePatternSet`
struct RawPatternSet {
    name: &'static str,
    class_pattern: &'static str,
    function_pattern: &'static str,
    arguments_pattern: Option<&'static str>,
    import_pattern: &'static str,
    comment_single: &'static str,
    comment_multi: Option<&'static str>,
    known_modules: &'static [&'static str],
    module_purposes: &'static [(&'static str, &'static str)],
}

const RAW_PATTERNS: &[RawPatternSet] = &[
    RawPatternSet {
        name: "python",
        class_pattern: r"class\s+(\w+)",
        function_pattern: r"def\s+(\w+)\s*\([^)]*\)",
        arguments_pattern: Some(r"def\s+\w+\s*\((.*?)\)"),
        import_pattern: r"(?:from\s+[\w.]+\s+)?import\s+[\w,\s]+",
        comment_single: r"#.*",
        comment_multi: Some(r##""""[\s\S]*?""""##),
        known_modules: &["ast", "tkinter", "nltk", "re"],
        module_purposes: &[
            ("ast", "parse and analyze the structure of Python code"),
            ("tkinter", "create an interactive graphical user interface"),
            ("nltk", "perform Natural Language Processing for text analysis"),
            ("re", "handle regular expressions and pattern matching"),
        ],
    },
    RawPatternSet {
        name: "java",
        class_pattern: r"class\s+(\w+)",
        function_pattern: r"(?:public|private|protected)?\s*(?:static\s+)?[\w<>\[\],\s]+\s+(\w+)\s*\([^)]*\)",
        arguments_pattern: Some(
            r"(?:public|private|protected)?\s*(?:static\s+)?[\w<>\[\],\s]+\s+\w+\s*\((.*?)\)",
        ),
        import_pattern: r"import\s+[\w.]+(?:\s*\*)?;",
        comment_single: r"//.*",
        comment_multi: Some(r"/\*[\s\S]*?\*/"),
        known_modules: &["java.util", "java.io", "javax.swing"],
        module_purposes: &[
            ("java.util", "provide essential utility classes"),
            ("java.io", "handle input/output operations"),
            ("javax.swing", "create graphical user interfaces"),
        ],
    },
    RawPatternSet {
        name: "javascript",
        class_pattern: r"class\s+(\w+)",
        function_pattern: r"(?:function\s+(\w+)|const\s+(\w+)\s*=\s*(?:async\s*)?(?:\(.*?\)|[^=>]*)\s*=>)",
        arguments_pattern: Some(r"function\s+\w+\s*\((.*?)\)|const\s+\w+\s*=\s*\((.*?)\)\s*=>"),
        import_pattern: r#"(?:import\s+.*?from\s+['"].*?['"]|require\s*\(['"].*?['"]\))"#,
        comment_single: r"//.*",
        comment_multi: Some(r"/\*[\s\S]*?\*/"),
        known_modules: &["react", "express", "node"],
        module_purposes: &[
            ("react", "build user interfaces"),
            ("express", "create web applications and APIs"),
            ("node", "execute JavaScript server-side"),
        ],
    },
    RawPatternSet {
        name: "cpp",
        class_pattern: r"class\s+(\w+)",
        function_pattern: r"(?:[\w\*&]+\s+)?(\w+)\s*\([^)]*\)\s*(?:const)?\s*(?:\{|;)",
        arguments_pattern: Some(r"(?:[\w\*&]+\s+)?\w+\s*\((.*?)\)"),
        import_pattern: r##"#include\s*[<"][\w.]+[>"]"##,
        comment_single: r"//.*",
        comment_multi: Some(r"/\*[\s\S]*?\*/"),
        known_modules: &["iostream", "string", "vector"],
        module_purposes: &[
            ("iostream", "handle input/output operations"),
            ("string", "work with text strings"),
            ("vector", "manage dynamic arrays"),
        ],
    },
    RawPatternSet {
        name: "go",
        class_pattern: r"type\s+(\w+)\s+struct",
        function_pattern: r"func\s+(?:\(\w+\s+\*?\w+\)\s+)?(\w+)\s*\([^)]*\)",
        arguments_pattern: Some(r"func\s+(?:\(\w+\s+\*?\w+\)\s+)?\w+\s*\((.*?)\)"),
        import_pattern: r#"import\s+(?:\([^)]*\)|"[^"]*")"#,
        comment_single: r"//.*",
        comment_multi: Some(r"/\*[\s\S]*?\*/"),
        known_modules: &["fmt", "net/http", "encoding/json"],
        module_purposes: &[
            ("fmt", "format and print text"),
            ("net/http", "create HTTP servers and clients"),
            ("encoding/json", "work with JSON data"),
        ],
    },
    RawPatternSet {
        name: "php",
        class_pattern: r"class\s+(\w+)",
        function_pattern: r"function\s+(\w+)\s*\([^)]*\)",
        arguments_pattern: Some(r"function\s+\w+\s*\((.*?)\)"),
        import_pattern: r#"(?:require|include|require_once|include_once)\s*(?:\(['"].*?['"]\)|['"].*?['"])"#,
        comment_single: r"(?://|#).*",
        comment_multi: Some(r"/\*[\s\S]*?\*/"),
        known_modules: &["PDO", "mysqli", "Laravel"],
        module_purposes: &[
            ("PDO", "handle database operations"),
            ("mysqli", "work with MySQL databases"),
            ("Laravel", "build web applications"),
        ],
    },
    RawPatternSet {
        name: "ruby",
        class_pattern: r"class\s+(\w+)",
        function_pattern: r"def\s+(\w+)",
        arguments_pattern: Some(r"def\s+\w+(?:\((.*?)\))?"),
        import_pattern: r#"(?:require|include)\s+['"].*?['"]"#,
        comment_single: r"#.*",
        comment_multi: Some(r"=begin[\s\S]*?=end"),
        known_modules: &["rails", "sinatra", "active_record"],
        module_purposes: &[
            ("rails", "build web applications"),
            ("sinatra", "create web services"),
            ("active_record", "work with databases"),
        ],
    },
];

// ordered detection probes; earlier entries win when signatures overlap.
// python and ruby share the `def name` signature on purpose: table order is
// the documented tie-break, so ruby code using `def` resolves to python.
const DETECTION_SIGNATURES: &[(&str, &str)] = &[
    ("python", r"def\s+\w+"),
    ("java", r"(?:public|private|protected)\s+class"),
    ("javascript", r"(?:function\s+\w+|const\s+\w+\s*=\s*\(.*\)\s*=>)"),
    ("cpp", r##"#include\s*[<"]"##),
    ("go", r"func\s+\w+\s*\("),
    ("php", r"<\?php"),
    ("ruby", r"def\s+\w+"),
];

fn compile(language: &'static str, pattern: &str) -> Result<Regex, SummaryError> {
    Regex::new(pattern).map_err(|e| SummaryError::PatternEngine {
        language: language.to_string(),
        message: e.to_string(),
    })
}

fn compile_entry(raw: &RawPatternSet) -> Result<LanguagePatternSet, SummaryError> {
    Ok(LanguagePatternSet {
        name: raw.name,
        class_pattern: compile(raw.name, raw.class_pattern)?,
        function_pattern: compile(raw.name, raw.function_pattern)?,
        arguments_pattern: raw
            .arguments_pattern
            .map(|p| compile(raw.name, p))
            .transpose()?,
        import_pattern: compile(raw.name, raw.import_pattern)?,
        comment_single: compile(raw.name, raw.comment_single)?,
        comment_multi: raw
            .comment_multi
            .map(|p| compile(raw.name, p))
            .transpose()?,
        known_modules: raw.known_modules,
        module_purposes: raw.module_purposes.iter().copied().collect(),
    })
}

fn build_registry() -> Result<HashMap<&'static str, LanguagePatternSet>, SummaryError> {
    let mut registry = HashMap::with_capacity(RAW_PATTERNS.len());
    for raw in RAW_PATTERNS {
        registry.insert(raw.name, compile_entry(raw)?);
    }
    Ok(registry)
}

fn build_detectors() -> Result<Vec<(&'static str, Regex)>, SummaryError> {
    DETECTION_SIGNATURES
        .iter()
        .map(|&(language, signature)| {
            // signatures live in the same registry config surface, so a bad
            // one is the same class of defect as a bad extraction pattern
            let probe = Regex::new(signature).map_err(|e| SummaryError::PatternEngine {
                language: language.to_string(),
                message: e.to_string(),
            })?;
            Ok((language, probe))
        })
        .collect()
}

lazy_static! {
    static ref REGISTRY: Result<HashMap<&'static str, LanguagePatternSet>, SummaryError> =
        build_registry();
    static ref DETECTORS: Result<Vec<(&'static str, Regex)>, SummaryError> = build_detectors();
}

/// case-insensitive registry lookup; an absent language is a typed failure,
/// never a silent default
pub fn lookup(language: &str) -> Result<&'static LanguagePatternSet, SummaryError> {
    let registry = REGISTRY.as_ref().map_err(Clone::clone)?;
    let key = language.trim().to_lowercase();
    registry
        .get(key.as_str())
        .ok_or(SummaryError::UnsupportedLanguage(key))
}

/// ordered (language, compiled signature) probes for the detector
pub(crate) fn detectors() -> Result<&'static [(&'static str, Regex)], SummaryError> {
    DETECTORS
        .as_ref()
        .map(|probes| probes.as_slice())
        .map_err(Clone::clone)
}

/// languages in registry declaration order, for shell menus and `--list`
pub fn supported_languages() -> Vec<&'static str> {
    RAW_PATTERNS.iter().map(|raw| raw.name).collect()
}

/// force-compile every configured pattern, surfacing registry defects at
/// startup instead of first use; idempotent, repeated calls are free
pub fn verify_patterns() -> Result<(), SummaryError> {
    REGISTRY.as_ref().map_err(Clone::clone)?;
    detectors()?;
    Ok(())
}
