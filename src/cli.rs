//! Command line parsing

use std::path::PathBuf;

use jshl::config::OutputMode;
use jshl::{HighlightError, Result};

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    Highlight(Options),
}

/// Options for a highlighting run; `None` means "use the config file"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Input file; stdin when absent
    pub input: Option<PathBuf>,
    pub theme: Option<PathBuf>,
    pub output: Option<OutputMode>,
}

/// Parse arguments (without the program name)
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--html" => options.output = Some(OutputMode::Html),
            "--markup" => options.output = Some(OutputMode::Markup),
            "--ansi" => options.output = Some(OutputMode::Ansi),
            "--tokens" => options.output = Some(OutputMode::Tokens),
            "--theme" | "-t" => {
                let path = args
                    .next()
                    .ok_or_else(|| HighlightError::Usage(format!("{} needs a file", arg)))?;
                options.theme = Some(PathBuf::from(path));
            }
            "-" => options.input = None,
            flag if flag.starts_with('-') => {
                return Err(HighlightError::Usage(format!("unknown option: {}", flag)))
            }
            path => {
                if options.input.is_some() {
                    return Err(HighlightError::Usage(format!("unexpected argument: {}", path)));
                }
                options.input = Some(PathBuf::from(path));
            }
        }
    }

    Ok(Command::Highlight(options))
}
