pub mod bob;
pub mod cipher;
pub mod luhn;
pub mod roman;
pub mod tournament;

pub use crate::domain::model::{KeyOverflow, MatchOutcome, Reply, TeamRecord};
pub use crate::domain::ports::KeySource;
pub use crate::utils::error::Result;
