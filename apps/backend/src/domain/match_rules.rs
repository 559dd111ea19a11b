//! Rules about a single match: who played and how it ended.

use serde::Serialize;

use crate::errors::domain::{DomainError, ValidationKind};

pub fn ensure_distinct_teams(home_team_id: i32, away_team_id: i32) -> Result<(), DomainError> {
    if home_team_id == away_team_id {
        return Err(DomainError::validation(
            ValidationKind::SameTeams,
            format!("Home and away team must differ (both are {home_team_id})"),
        ));
    }
    Ok(())
}

/// "h - a" once a result is recorded, otherwise "TBD".
pub fn score_text(score: Option<(i32, i32)>) -> String {
    match score {
        Some((home, away)) => format!("{home} - {away}"),
        None => "TBD".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Outcome from one team's point of view.
    pub fn from_goals(scored: i32, conceded: i32) -> Self {
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::Loss,
        }
    }
}
