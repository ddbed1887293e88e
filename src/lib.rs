pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::{
    bob::respond, cipher::Cipher, luhn::is_valid, roman::to_roman, tournament::Tournament,
};
pub use config::KataConfig;
pub use domain::model::{KeyOverflow, Reply, TeamRecord};
pub use utils::error::{KataError, Result};
