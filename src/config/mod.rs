pub mod toml_config;

pub use toml_config::{CipherConfig, KataConfig, LogFormat, LoggingConfig, TournamentConfig};
