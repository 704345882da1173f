//! # Luthor CLI
//!
//! Tokenizes a file, or every file under a directory, and prints the tokens
//! as a listing or as JSON.

use clap::{Parser, ValueEnum};
use luthor::config::compile_time;
use luthor::config::runtime::{LexicalPreferences, RuntimeConfig};
use luthor::logging::{self, codes, LogLevel};
use luthor::{
    log_debug, log_error, log_info, Lexer, Scanner, SourceLoader, Token, TokenLines,
};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "luthor", author, version, about = "Split text into character-class tokens")]
struct Cli {
    /// File or directory to tokenize
    path: PathBuf,

    /// Collapse every whitespace run to a single space
    #[arg(short, long)]
    compress_whitespace: bool,

    /// Group tokens by the line they start on
    #[arg(short, long)]
    lines: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Replace the letters charset
    #[arg(long)]
    letters: Option<String>,

    /// Replace the digits charset
    #[arg(long)]
    digits: Option<String>,

    /// Replace the symbols charset
    #[arg(long)]
    symbols: Option<String>,

    /// Replace the whitespace charset
    #[arg(long)]
    whitespace: Option<String>,

    /// Replace the quote delimiters
    #[arg(long)]
    quotes: Option<String>,

    /// Only tokenize files directly inside a directory argument
    #[arg(long)]
    no_recursive: bool,

    /// Print debug logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = RuntimeConfig::from_env();
    if cli.verbose {
        config.logging.enable_console_logging = true;
        config.logging.min_log_level = LogLevel::Debug;
    }
    logging::init_global_logging(&config.logging)?;

    log_debug!(codes::cli::STARTED, "Starting luthor",
        "profile" => compile_time::PROFILE,
        "path" => cli.path.display());

    let files = collect_files(&cli.path, !cli.no_recursive)?;
    if files.is_empty() {
        println!("No files found: {}", cli.path.display());
        return Ok(());
    }
    log_info!(codes::cli::FILES_DISCOVERED, "Discovered input files", "count" => files.len());

    let loader = SourceLoader::new(config.loader.clone());
    let show_headers = files.len() > 1;
    let mut json_results = Vec::new();
    let mut failed = 0;

    for file in &files {
        let source = match loader.load(file) {
            Ok(source) => source,
            Err(e) => {
                failed += 1;
                eprintln!("{}: {} [{}]", file.display(), e, e.code());
                continue;
            }
        };

        let mut lexer = build_lexer(&cli, &source.text, config.lexical.clone());
        let output = if cli.lines {
            TokenOutput::Lines(lexer.get_tokens_as_lines(cli.compress_whitespace))
        } else {
            TokenOutput::Flat(lexer.get_tokens(cli.compress_whitespace))
        };

        match cli.format {
            OutputFormat::Text => {
                if show_headers {
                    println!("==> {} <==", file.display());
                }
                print!("{}", output.render_text());
            }
            OutputFormat::Json => {
                json_results.push(serde_json::json!({
                    "file": file.display().to_string(),
                    "tokens": output.to_json()?,
                }));
            }
        }
    }

    if cli.format == OutputFormat::Json {
        let document = if show_headers {
            serde_json::Value::Array(json_results)
        } else {
            json_results.pop().unwrap_or(serde_json::Value::Null)
        };
        println!("{}", serde_json::to_string_pretty(&document)?);
    }

    if failed > 0 {
        log_error!(codes::cli::FILES_FAILED, "Some files could not be tokenized",
            "failed" => failed,
            "total" => files.len());
        return Err(format!("{} of {} file(s) failed", failed, files.len()).into());
    }

    Ok(())
}

enum TokenOutput {
    Flat(Vec<Token>),
    Lines(TokenLines),
}

impl TokenOutput {
    fn render_text(&self) -> String {
        let mut out = String::new();
        match self {
            TokenOutput::Flat(tokens) => {
                for token in tokens {
                    out.push_str(&format!("{}\n", token));
                }
            }
            TokenOutput::Lines(lines) => {
                for (line, tokens) in lines {
                    out.push_str(&format!("line {}\n", line));
                    for token in tokens {
                        out.push_str(&format!("  {}\n", token));
                    }
                }
            }
        }
        out
    }

    fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            TokenOutput::Flat(tokens) => serde_json::to_value(tokens),
            TokenOutput::Lines(lines) => serde_json::to_value(lines),
        }
    }
}

/// Build a lexer over `source` with any charset overrides applied
fn build_lexer(cli: &Cli, source: &str, preferences: LexicalPreferences) -> Lexer {
    let mut lexer = Lexer::with_preferences(Scanner::new(source), preferences);
    if let Some(letters) = &cli.letters {
        lexer.set_chars(letters);
    }
    if let Some(digits) = &cli.digits {
        lexer.set_digits(digits);
    }
    if let Some(symbols) = &cli.symbols {
        lexer.set_symbols(symbols);
    }
    if let Some(whitespace) = &cli.whitespace {
        lexer.set_whitespace(whitespace);
    }
    if let Some(quotes) = &cli.quotes {
        lexer.set_quotes(quotes);
    }
    lexer
}

/// A file argument yields itself; a directory yields its files in sorted order
fn collect_files(path: &Path, recursive: bool) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(format!("Input must be a file or directory: {}", path.display()).into());
    }

    let mut walker = WalkDir::new(path).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use luthor::TokenType;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "luthor",
            "input.txt",
            "--compress-whitespace",
            "--lines",
            "--format",
            "json",
            "--digits",
            "01",
            "--no-recursive",
        ])
        .unwrap();

        assert_eq!(cli.path, PathBuf::from("input.txt"));
        assert!(cli.compress_whitespace);
        assert!(cli.lines);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.digits.as_deref(), Some("01"));
        assert!(cli.no_recursive);
        assert!(cli.letters.is_none());
    }

    #[test]
    fn test_build_lexer_applies_overrides() {
        let cli = Cli::try_parse_from(["luthor", "x", "--whitespace", "_", "--quotes", "|"]).unwrap();
        let tokens = build_lexer(&cli, "a_|b c|", LexicalPreferences::default()).get_tokens(false);

        assert_eq!(tokens[1].token_type, TokenType::Whitespace);
        assert_eq!(tokens[2].token_type, TokenType::String);
        assert_eq!(tokens[2].content, "|b c|");
    }

    #[test]
    fn test_collect_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.txt"), "c").unwrap();

        let all = collect_files(dir.path(), true).unwrap();
        assert_eq!(all.len(), 3);
        assert!(all[0].ends_with("a.txt"));
        assert!(all[1].ends_with("b.txt"));

        let top = collect_files(dir.path(), false).unwrap();
        assert_eq!(top.len(), 2);

        let single = collect_files(&dir.path().join("a.txt"), true).unwrap();
        assert_eq!(single, vec![dir.path().join("a.txt")]);

        assert!(collect_files(&dir.path().join("missing"), true).is_err());
    }

    #[test]
    fn test_render_text() {
        let tokens = Lexer::from_source("ab\n").get_tokens(false);
        let text = TokenOutput::Flat(tokens).render_text();
        assert_eq!(text, "   1,1   Letters      ab\n   1,3   EOL\n   2,1   EOF\n");

        let lines = Lexer::from_source("ab\n").get_tokens_as_lines(false);
        let text = TokenOutput::Lines(lines).render_text();
        assert!(text.starts_with("line 1\n     1,1   Letters      ab\n"));
        assert!(text.contains("line 2\n"));
    }

    #[test]
    fn test_json_output_shape() {
        let tokens = Lexer::from_source("a").get_tokens(false);
        let json = TokenOutput::Flat(tokens).to_json().unwrap();
        assert_eq!(json[0]["tokenType"], "Letters");
        assert_eq!(json[1]["tokenType"], "EOF");

        let lines = Lexer::from_source("a\nb").get_tokens_as_lines(false);
        let json = TokenOutput::Lines(lines).to_json().unwrap();
        assert_eq!(json["2"][0]["content"], "b");
    }
}
