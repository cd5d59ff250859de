//! jshl - highlight JavaScript source as HTML or ANSI text

mod cli;

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::process;

use cli::{Command, Options};
use jshl::config::{Config, OutputMode};
use jshl::error::Result;
use jshl::syntax::{Highlighter, Theme};
use jshl::terminal::AnsiWriter;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    match cli::parse_args(env::args().skip(1))? {
        Command::Help => {
            print_usage();
            Ok(())
        }
        Command::Version => {
            print_version();
            Ok(())
        }
        Command::Highlight(options) => highlight(options, Config::load()),
    }
}

fn highlight(options: Options, config: Config) -> Result<()> {
    let theme = match options.theme.or(config.theme) {
        Some(path) => Theme::load(&path)?,
        None => Theme::default(),
    };
    let highlighter = Highlighter::new()
        .with_styles(theme.styles)
        .with_profile(theme.profile);

    let source = match &options.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    log::debug!("read {} bytes of input", source.len());

    let mut stdout = io::stdout().lock();
    match options.output.unwrap_or(config.output) {
        OutputMode::Html => writeln!(stdout, "{}", highlighter.render(&source).to_html())?,
        OutputMode::Markup => write!(stdout, "{}", highlighter.highlight(&source))?,
        OutputMode::Ansi => AnsiWriter::new(stdout).write_highlighted(&highlighter, &source)?,
        OutputMode::Tokens => {
            for token in highlighter.tokens(&source) {
                writeln!(
                    stdout,
                    "{} {}..{} {:?}",
                    token.kind.name(),
                    token.start,
                    token.end,
                    token.text(&source)
                )?;
            }
        }
    }

    Ok(())
}

fn print_usage() {
    println!("jshl {} - JavaScript syntax highlighter", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: jshl [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE, or standard input when FILE is absent or -.");
    println!();
    println!("Options:");
    println!("  --html           Write a styled <pre> block (default)");
    println!("  --markup         Write only the colored spans");
    println!("  --ansi           Write colored text for the terminal");
    println!("  --tokens         List tokens with their kinds and offsets");
    println!("  -t, --theme FILE Load colors and profile from a TOML theme");
    println!("  -h, --help       Show this help message");
    println!("  -V, --version    Show version information");
    println!();
    println!("Defaults can be set in ~/.jshl.conf (theme = PATH, output = MODE).");
    println!("Set RUST_LOG=debug for diagnostics.");
}

fn print_version() {
    println!("jshl {}", env!("CARGO_PKG_VERSION"));
}
