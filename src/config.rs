//! Command-line configuration for the `hal` binary
//!
//! ```text
//! hal [--parse] [--strict] [--no-color]    interactive read loop
//! hal [--strict] <file>                    parse a file and print the result
//! hal --tui [--strict] [file]              terminal explorer
//! ```

use crate::parser::ParserOptions;
use crate::repl::{ReplMode, ReplOptions};
use std::fmt;
use std::path::PathBuf;

/// What the binary should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Repl(ReplMode),
    File(PathBuf),
    Explorer(Option<PathBuf>),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub parser: ParserOptions,
    pub color: bool,
}

impl Config {
    /// Parse arguments, excluding the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parse_mode = false;
        let mut tui = false;
        let mut help = false;
        let mut parser = ParserOptions::default();
        let mut color = true;
        let mut path: Option<PathBuf> = None;

        for arg in args {
            let arg = arg.into();
            match arg.as_str() {
                "--parse" => parse_mode = true,
                "--strict" => parser.strict = true,
                "--tui" => tui = true,
                "--no-color" => color = false,
                "-h" | "--help" => help = true,
                flag if flag.starts_with('-') => return Err(ConfigError::UnknownFlag(arg)),
                _ => {
                    if path.is_some() {
                        return Err(ConfigError::UnexpectedArgument(arg));
                    }
                    path = Some(PathBuf::from(arg));
                }
            }
        }

        let mode = if help {
            Mode::Help
        } else if tui {
            if parse_mode {
                return Err(ConfigError::Conflict("--tui", "--parse"));
            }
            Mode::Explorer(path)
        } else if let Some(path) = path {
            if parse_mode {
                return Err(ConfigError::Conflict("--parse", "<file>"));
            }
            Mode::File(path)
        } else if parse_mode {
            Mode::Repl(ReplMode::Parse)
        } else {
            Mode::Repl(ReplMode::Tokens)
        };

        Ok(Config {
            mode,
            parser,
            color,
        })
    }

    pub fn repl_options(&self) -> ReplOptions {
        let mode = match self.mode {
            Mode::Repl(mode) => mode,
            _ => ReplMode::default(),
        };
        ReplOptions {
            mode,
            parser: self.parser,
            color: self.color,
        }
    }
}

pub fn usage(program_name: &str) -> String {
    format!(
        "Usage: {0} [--parse] [--strict] [--no-color]\n\
         \x20      {0} [--strict] <file>\n\
         \x20      {0} --tui [--strict] [file]\n\
         \n\
         Options:\n\
         \x20 --parse     print parsed statements instead of tokens\n\
         \x20 --strict    report every dropped statement as a diagnostic\n\
         \x20 --tui       open the interactive explorer\n\
         \x20 --no-color  disable styled output\n\
         \x20 -h, --help  show this message",
        program_name
    )
}

/// Command-line error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownFlag(String),
    UnexpectedArgument(String),
    Conflict(&'static str, &'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownFlag(flag) => write!(f, "unknown option '{}'", flag),
            ConfigError::UnexpectedArgument(arg) => {
                write!(f, "unexpected argument '{}': only one file may be given", arg)
            }
            ConfigError::Conflict(a, b) => write!(f, "'{}' cannot be combined with '{}'", a, b),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, ConfigError> {
        Config::from_args(args.iter().copied())
    }

    #[test]
    fn test_defaults_to_token_repl() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.mode, Mode::Repl(ReplMode::Tokens));
        assert!(!config.parser.strict);
        assert!(config.color);
    }

    #[test]
    fn test_file_mode_with_strict() {
        let config = parse(&["--strict", "prog.hal"]).unwrap();
        assert_eq!(config.mode, Mode::File(PathBuf::from("prog.hal")));
        assert!(config.parser.strict);
    }

    #[test]
    fn test_parse_repl_options() {
        let config = parse(&["--parse", "--no-color"]).unwrap();
        let options = config.repl_options();
        assert_eq!(options.mode, ReplMode::Parse);
        assert!(!options.color);
    }

    #[test]
    fn test_explorer() {
        assert_eq!(parse(&["--tui"]).unwrap().mode, Mode::Explorer(None));
        assert_eq!(
            parse(&["--tui", "a.hal"]).unwrap().mode,
            Mode::Explorer(Some(PathBuf::from("a.hal")))
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse(&["--verbose"]),
            Err(ConfigError::UnknownFlag("--verbose".to_string()))
        );
        assert_eq!(
            parse(&["a.hal", "b.hal"]),
            Err(ConfigError::UnexpectedArgument("b.hal".to_string()))
        );
        assert!(parse(&["--tui", "--parse"]).is_err());
        assert_eq!(
            parse(&["--parse", "prog.hal"]),
            Err(ConfigError::Conflict("--parse", "<file>"))
        );
    }

    #[test]
    fn test_help_wins() {
        assert_eq!(parse(&["--strict", "--help"]).unwrap().mode, Mode::Help);
    }
}
