use crate::config::toml_config::{CipherConfig, DEFAULT_GENERATED_KEY_LENGTH};
use crate::domain::model::KeyOverflow;
use crate::domain::ports::{default_key_source, KeySource};
use crate::utils::error::{KataError, Result};

pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Keyed shift cipher over the lowercase latin alphabet.
#[derive(Debug, Clone)]
pub struct Cipher {
    key: String,
    overflow: KeyOverflow,
}

impl Cipher {
    /// Uses `key` when given, otherwise a random key of the default length.
    pub fn new(key: Option<&str>) -> Result<Self> {
        match key {
            Some(key) => Self::with_key(key),
            None => Ok(Self::random()),
        }
    }

    pub fn with_key(key: &str) -> Result<Self> {
        validate_key(key)?;
        Ok(Self {
            key: key.to_string(),
            overflow: KeyOverflow::default(),
        })
    }

    pub fn random() -> Self {
        Self::from_source(&mut default_key_source(), DEFAULT_GENERATED_KEY_LENGTH)
    }

    pub fn from_source<S: KeySource + ?Sized>(source: &mut S, length: usize) -> Self {
        let key = source.generate_key(ALPHABET, length.max(1));
        tracing::debug!("Generated random cipher key of {} characters", key.len());
        Self {
            key,
            overflow: KeyOverflow::default(),
        }
    }

    pub fn from_config(key: Option<&str>, config: &CipherConfig) -> Result<Self> {
        let cipher = match key {
            Some(key) => Self::with_key(key)?,
            None => Self::from_source(&mut default_key_source(), config.generated_key_length()),
        };
        Ok(cipher.with_overflow(config.key_overflow()))
    }

    pub fn with_overflow(mut self, overflow: KeyOverflow) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn overflow(&self) -> KeyOverflow {
        self.overflow
    }

    pub fn encode(&self, plain_text: &str) -> Result<String> {
        self.shift_each(plain_text, |key, letter| (key + letter) % ALPHABET.len())
    }

    pub fn decode(&self, cipher_text: &str) -> Result<String> {
        self.shift_each(cipher_text, |key, letter| {
            if letter >= key {
                letter - key
            } else {
                letter + ALPHABET.len() - key
            }
        })
    }

    fn shift_each<F>(&self, text: &str, shift: F) -> Result<String>
    where
        F: Fn(usize, usize) -> usize,
    {
        if self.overflow == KeyOverflow::Reject {
            let key_len = self.key.chars().count();
            let text_len = text.chars().count();
            if text_len > key_len {
                return Err(KataError::KeyTooShort { key_len, text_len });
            }
        }

        text.chars()
            .zip(self.key.chars().cycle())
            .map(|(letter, key)| {
                let key = letter_index(key)?;
                let letter = letter_index(letter)?;
                Ok(char::from(ALPHABET[shift(key, letter)]))
            })
            .collect()
    }
}

fn letter_index(letter: char) -> Result<usize> {
    if letter.is_ascii_lowercase() {
        Ok(usize::from(letter as u8 - b'a'))
    } else {
        Err(KataError::InvalidLetter { letter })
    }
}

fn validate_key(key: &str) -> Result<()> {
    let reason = if key.is_empty() {
        "Key must be at least one character."
    } else if key.to_uppercase() == key {
        "Key cannot be uppercase."
    } else if key.chars().any(|c| c.is_ascii_digit()) {
        "Key cannot contain numbers."
    } else {
        return Ok(());
    };

    Err(KataError::InvalidKey {
        reason: reason.to_string(),
    })
}
