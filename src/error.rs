use std::path::PathBuf;

/// Errors raised by the board engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must be at least 4x4, got {rows}x{columns}")]
    InvalidDimension { rows: usize, columns: usize },

    #[error("column {column} is out of range (0-{max})", max = .columns - 1)]
    OutOfRange { column: usize, columns: usize },

    #[error("column {column} has no open row")]
    ColumnFull { column: usize },
}

/// Errors returned when a submitted move is rejected. All of these are
/// recoverable: the caller re-prompts and the game state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (0-{max})", max = .columns - 1)]
    OutOfRange { column: usize, columns: usize },

    #[error("column {column} is full")]
    IllegalMove { column: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Why a controller did not apply a column.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Rejected(#[from] MoveError),

    #[error("recording move failed: {0}")]
    Record(#[from] ExportError),
}

/// Errors produced by a move source.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("not a column number: {0:?}")]
    Parse(String),

    #[error("input closed")]
    Closed,

    #[error("agent input is not available")]
    AgentUnavailable,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    /// Whether the session can carry on by asking the same source again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, InputError::Parse(_))
    }
}

/// Errors that end a game session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("move source failed: {0}")]
    Input(#[from] InputError),

    #[error("export failed: {0}")]
    Export(#[from] ExportError),

    #[error("render failed: {0}")]
    Render(#[from] std::io::Error),
}

/// Errors that can occur while exporting or loading training data.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed state file {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

/// Errors raised while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to install log subscriber: {0}")]
    Init(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
