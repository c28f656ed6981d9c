use crossword_core::PuzzleError;
use std::io;
use std::path::PathBuf;

/// Anything that can stop the TUI from starting or running
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("could not read puzzle file {}: {source}", .path.display())]
    ReadPuzzle {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not load puzzle {}: {source}", .path.display())]
    Puzzle {
        path: PathBuf,
        #[source]
        source: PuzzleError,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
