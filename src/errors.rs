use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Crate-wide error set.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Parsing & Routing --------------------------------------------------
    /// Bad user input tokens (times, dates, hours, command arguments).
    #[error("Parse error: {0}")]
    Parse(String),

    /// No command matched the first token of the input line.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // ---- Scheduling / Domain -----------------------------------------------
    /// A value that parsed fine but breaks a model invariant
    /// (interval ending before it starts, non-positive task duration).
    #[error("Validation error: {0}")]
    Validation(String),

    // ---- Config -------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Error::Validation(msg.into())
    }
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
    pub fn unknown<S: Into<String>>(cmd: S) -> Self {
        Error::UnknownCommand(cmd.into())
    }
}

/// Map an `Option<T>` into `Result<T, Error::Parse>` with a custom message.
/// Used when pulling positional tokens out of a command line.
pub fn require_parse<T, S: Into<String>>(opt: Option<T>, msg: S) -> Result<T> {
    opt.ok_or_else(|| Error::Parse(msg.into()))
}
