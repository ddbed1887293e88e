use crate::domain::model::KeyOverflow;
use crate::utils::error::{KataError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_GENERATED_KEY_LENGTH: usize = 100;
pub const DEFAULT_NAME_WIDTH: usize = 31;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KataConfig {
    pub cipher: Option<CipherConfig>,
    pub tournament: Option<TournamentConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CipherConfig {
    pub generated_key_length: Option<usize>,
    pub key_overflow: Option<KeyOverflow>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub name_width: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl CipherConfig {
    pub fn generated_key_length(&self) -> usize {
        self.generated_key_length
            .unwrap_or(DEFAULT_GENERATED_KEY_LENGTH)
    }

    pub fn key_overflow(&self) -> KeyOverflow {
        self.key_overflow.unwrap_or_default()
    }
}

impl TournamentConfig {
    pub fn name_width(&self) -> usize {
        self.name_width.unwrap_or(DEFAULT_NAME_WIDTH)
    }
}

impl KataConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Loading config from {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path).map_err(KataError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| KataError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${KATA_KEY_LENGTH})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| KataError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(length) = self.cipher.as_ref().and_then(|c| c.generated_key_length) {
            crate::utils::validation::validate_positive_number(
                "cipher.generated_key_length",
                length,
                1,
            )?;
        }

        if let Some(width) = self.tournament.as_ref().and_then(|t| t.name_width) {
            crate::utils::validation::validate_range("tournament.name_width", width, 4, 128)?;
        }

        if let Some(level) = self.logging.as_ref().and_then(|l| l.level.as_deref()) {
            crate::utils::validation::validate_non_empty_string("logging.level", level)?;
        }

        Ok(())
    }

    pub fn cipher(&self) -> CipherConfig {
        self.cipher.clone().unwrap_or_default()
    }

    pub fn tournament(&self) -> TournamentConfig {
        self.tournament.clone().unwrap_or_default()
    }

    pub fn logging(&self) -> LoggingConfig {
        self.logging.clone().unwrap_or_default()
    }
}

impl Validate for KataConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
