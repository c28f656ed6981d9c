use crate::error::TuiError;
use crate::theme::ThemeName;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Largest grid the terminal layout handles (clue numbers stay two digits)
pub const MAX_SIZE: usize = 12;

/// Solve a crossword in the terminal
#[derive(Debug, Default, Parser)]
#[command(name = "crossword", version, about)]
pub struct Args {
    /// Puzzle JSON to load: a `{grid, clues}` payload or a generator response
    #[arg(short, long)]
    pub puzzle: Option<PathBuf>,

    /// Size of the built-in sample puzzle when no file is given
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..=MAX_SIZE as i64))]
    pub size: Option<u16>,

    /// Color theme
    #[arg(short, long, value_enum)]
    pub theme: Option<ThemeName>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(long)]
    pub debug: bool,

    /// Read settings from this file instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Settings persisted in `config.json`; command-line flags take precedence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeName,
    pub size: usize,
    pub log_file: Option<PathBuf>,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeName::Dark,
            size: crossword_core::DEFAULT_SIZE,
            log_file: None,
            debug: false,
        }
    }
}

impl Config {
    /// Default config file location
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("crossword")
            .join("config.json")
    }

    /// Load the config file named on the command line, or the default one
    pub fn load(args: &Args) -> Result<Self, TuiError> {
        let path = args.config.clone().unwrap_or_else(Self::default_path);
        Ok(Self::load_from(&path)?.with_args(args))
    }

    /// Load settings from `path`; a missing file gives the defaults
    pub fn load_from(path: &Path) -> Result<Self, TuiError> {
        match fs::read_to_string(path) {
            Ok(json) => serde_json::from_str(&json).map_err(|source| TuiError::Config {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply command-line overrides
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(theme) = args.theme {
            self.theme = theme;
        }
        if let Some(size) = args.size {
            self.size = usize::from(size);
        }
        if let Some(path) = &args.log_file {
            self.log_file = Some(path.clone());
        }
        self.debug |= args.debug;
        self.size = self.size.clamp(1, MAX_SIZE);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("crossword-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("crossword-config-that-does-not-exist.json");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_file("partial.json", r#"{"theme": "high-contrast"}"#);
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme, ThemeName::HighContrast);
        assert_eq!(config.size, 5);
        assert!(!config.debug);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let path = temp_file("broken.json", "{ theme = dark }");
        assert!(matches!(Config::load_from(&path), Err(TuiError::Config { .. })));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_args_override_file() {
        let file = Config {
            theme: ThemeName::Light,
            size: 4,
            log_file: None,
            debug: false,
        };
        let args = Args::parse_from(["crossword", "--size", "7", "--theme", "dark", "--debug"]);
        let config = file.with_args(&args);
        assert_eq!(config.theme, ThemeName::Dark);
        assert_eq!(config.size, 7);
        assert!(config.debug);
    }

    #[test]
    fn test_size_is_clamped() {
        let file = Config {
            size: 40,
            ..Config::default()
        };
        assert_eq!(file.with_args(&Args::default()).size, MAX_SIZE);
        assert!(Args::try_parse_from(["crossword", "--size", "0"]).is_err());
    }
}
