use thiserror::Error;

#[derive(Error, Debug)]
pub enum KataError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{reason}")]
    InvalidKey { reason: String },

    #[error("Invalid letter: {letter}")]
    InvalidLetter { letter: char },

    #[error("Key is shorter than the text ({key_len} < {text_len})")]
    KeyTooShort { key_len: usize, text_len: usize },

    #[error("{value} is out of range, expected {min}..={max}")]
    OutOfRange { value: i64, min: i64, max: i64 },
}

impl KataError {
    /// Errors caused by the caller's arguments rather than the environment.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            KataError::InvalidKey { .. }
                | KataError::InvalidLetter { .. }
                | KataError::KeyTooShort { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, KataError>;
