use anyhow::{Context, Result};
use clap::Parser;
use code_summarizer_core::{
    extract, resolve_patterns, strip_comments, summarize_with_limit, supported_languages,
    verify_patterns, DEFAULT_TERM_LIMIT,
};
use console::style;
use std::fs;
use std::io::Read;
use std::path::Path;

/// regex-based multi-language code summarizer
#[derive(Parser, Debug)]
#[command(name = "code-summarizer")]
struct CliArgs {
    /// path to a source file; reads piped stdin when omitted
    path: Option<String>,

    /// language tag, or "auto" to infer from the file extension or the code
    #[arg(short, long, default_value = "auto")]
    language: String,

    /// number of key concepts to report
    #[arg(short, long, default_value_t = DEFAULT_TERM_LIMIT)]
    terms: usize,

    /// print the extracted structure as json instead of prose
    #[arg(long)]
    json: bool,

    /// list supported languages and exit
    #[arg(long)]
    list: bool,
}

fn main() {
    let args = CliArgs::parse();
    if let Err(e) = run(args) {
        eprintln!(
            "{} {}",
            style("❌ code-summarizer failed:").red().bold(),
            style(&e).red()
        );
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<()> {
    // surface registry defects before touching any input
    verify_patterns().context("language pattern registry failed its self-check")?;

    if args.list {
        for language in supported_languages() {
            println!("{language}");
        }
        return Ok(());
    }

    let (code, language) = read_input(&args)?;

    if args.json {
        let patterns = resolve_patterns(&code, &language)?;
        let comment_free = strip_comments(&code, patterns);
        let structure = extract(&code, &comment_free, patterns);
        println!("{}", serde_json::to_string_pretty(&structure)?);
        return Ok(());
    }

    println!("{}", style("\ncode-summarizer 🔍").cyan().bold());
    println!(
        "{}\n",
        style("regex-based multi-language code summarizer").dim()
    );

    let summary = summarize_with_limit(&code, &language, args.terms)?;
    println!("{}", style(summary).yellow());
    Ok(())
}

/// gather the source text and the language tag to analyse it with
fn read_input(args: &CliArgs) -> Result<(String, String)> {
    if let Some(path) = &args.path {
        let bytes =
            fs::read(path).with_context(|| format!("failed to read source file '{path}'"))?;
        // decode leniently: source files are not always valid utf-8
        let (text, _, _) = encoding_rs::UTF_8.decode(&bytes);
        let language = if args.language == "auto" {
            extension_language(path).unwrap_or("auto").to_string()
        } else {
            args.language.clone()
        };
        return Ok((text.into_owned(), language));
    }

    if atty::is(atty::Stream::Stdin) {
        anyhow::bail!("no input: pass a file path or pipe source code on stdin");
    }
    let mut code = String::new();
    std::io::stdin()
        .read_to_string(&mut code)
        .context("failed to read source code from stdin")?;
    Ok((code, args.language.clone()))
}

/// map a file extension to a registry language tag; unknown extensions fall
/// back to content-based detection
fn extension_language(path: &str) -> Option<&'static str> {
    let extension = Path::new(path).extension()?.to_str()?.to_lowercase();
    match extension.as_str() {
        "py" => Some("python"),
        "java" => Some("java"),
        "js" => Some("javascript"),
        "cpp" | "cc" | "cxx" | "hpp" => Some("cpp"),
        "go" => Some("go"),
        "php" => Some("php"),
        "rb" => Some("ruby"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_extensions_to_languages() {
        assert_eq!(extension_language("app/main.py"), Some("python"));
        assert_eq!(extension_language("Server.java"), Some("java"));
        assert_eq!(extension_language("lib/util.js"), Some("javascript"));
        assert_eq!(extension_language("core.cxx"), Some("cpp"));
        assert_eq!(extension_language("cmd/root.go"), Some("go"));
        assert_eq!(extension_language("index.php"), Some("php"));
        assert_eq!(extension_language("app/model.rb"), Some("ruby"));
    }

    #[test]
    fn unknown_extension_falls_back_to_detection() {
        assert_eq!(extension_language("README.md"), None);
        assert_eq!(extension_language("Makefile"), None);
    }
}
