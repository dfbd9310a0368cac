use thiserror::Error;

#[derive(Error, Debug)]
pub enum T9Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Letter '{letter}' already exists in the pad (key {key})")]
    DuplicateLetter { letter: char, key: u8 },

    #[error("Letter '{0}' not found in the pad")]
    NotFound(char),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, T9Error>;
