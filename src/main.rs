//! ahklex - print AutoHotkey scripts with syntax highlighting and fold marks

use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use ahklex::error::{LexError, Result};
use ahklex::render::{self, Renderer};
use ahklex::{Config, Document, Highlighter, KeywordClass};

/// Parsed command line
#[derive(Debug, Default)]
struct Options {
    config: Option<PathBuf>,
    no_color: bool,
    dump: bool,
    file: Option<PathBuf>,
}

fn main() {
    init_logging();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Log to stderr, filtered by `AHKLEX_LOG` (default `warn`)
fn init_logging() {
    let filter = EnvFilter::try_from_env("AHKLEX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run() -> Result<()> {
    let mut options = Options::default();
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            "--config" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| LexError::Message(format!("{} needs a path", arg)))?;
                options.config = Some(PathBuf::from(path));
            }
            "--no-color" => options.no_color = true,
            "--dump" => options.dump = true,
            _ if arg.starts_with('-') => {
                return Err(LexError::Message(format!("Unknown option: {}", arg)));
            }
            _ => options.file = Some(PathBuf::from(arg)),
        }
    }

    let Some(path) = options.file else {
        print_usage();
        return Err(LexError::Message("No input file".to_string()));
    };

    let config = Config::load(options.config.as_deref())?;
    let mut doc = Document::from_file(&path)?;
    let report = Highlighter::with_keywords(config.keywords.clone()).style_all(&mut doc);
    debug!(
        file = doc.name(),
        bytes = report.window.len,
        folds = report.fold_changes.len(),
        "styled"
    );

    let mut stdout = io::stdout().lock();
    if options.dump {
        return render::dump(&mut stdout, &doc);
    }

    let is_tty = stdout.is_terminal();
    let mut renderer = Renderer::new(&config).with_color(is_tty && !options.no_color);
    if is_tty {
        if let Ok((cols, _)) = crossterm::terminal::size() {
            renderer = renderer.with_width(cols as usize);
        }
    }
    renderer.render(&mut stdout, &doc)
}

fn print_usage() {
    println!("ahklex {} - AutoHotkey syntax highlighter", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: ahklex [OPTIONS] FILE");
    println!();
    println!("Options:");
    println!("  -c, --config PATH  Read settings from PATH instead of ~/.ahklex.toml");
    println!("      --no-color     Print plain text");
    println!("      --dump         Print one `line:col style text` row per token");
    println!("  -h, --help         Show this help message");
    println!("  -V, --version      Show version information");
    println!();
    println!("Keyword lists ([keywords] table in the config file):");
    print!("{}", keyword_list_help());
    println!();
    println!("Set AHKLEX_LOG (e.g. AHKLEX_LOG=debug) to log lexing passes to stderr.");
}

/// One row per keyword list, in the order words are matched
fn keyword_list_help() -> String {
    KeywordClass::ALL
        .iter()
        .map(|class| {
            format!(
                "  {:<13} list {}, {}\n",
                class.name(),
                class.number(),
                class.description()
            )
        })
        .collect()
}

fn print_version() {
    println!("ahklex {}", env!("CARGO_PKG_VERSION"));
    println!("Incremental AutoHotkey lexer and fold classifier");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_list_help() {
        let help = keyword_list_help();
        let rows: Vec<&str> = help.lines().collect();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0], "  keywords      list 1, ahk keywords");
        assert_eq!(rows[7], "  udf           list 8, ahk udf");
    }
}
