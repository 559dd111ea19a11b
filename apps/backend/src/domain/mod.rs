//! Domain layer: pure league rules with no DB or HTTP knowledge.

pub mod credentials;
pub mod match_rules;
pub mod possession;
pub mod standings;
pub mod validation;

pub use match_rules::{ensure_distinct_teams, score_text, Outcome};
pub use possession::balance_possession;
pub use standings::Record;
pub use validation::Validate;
