use serde::Deserialize;

use crate::domain::validation::{optional_non_negative, Validate};
use crate::entities::player_match_stats;
use crate::errors::domain::DomainError;

/// Body of `PUT /api/matches/{id}/player-stats/{player_id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerStatsInput {
    pub shots: Option<i32>,
    pub shots_on_target: Option<i32>,
    pub goals: Option<i32>,
    pub assists: Option<i32>,
    pub minutes_played: Option<i32>,
    pub yellow_cards: Option<i32>,
    pub red_cards: Option<i32>,
}

impl Validate for PlayerStatsInput {
    fn validate(&self) -> Result<(), DomainError> {
        optional_non_negative("shots", self.shots)?;
        optional_non_negative("shots_on_target", self.shots_on_target)?;
        optional_non_negative("goals", self.goals)?;
        optional_non_negative("assists", self.assists)?;
        optional_non_negative("minutes_played", self.minutes_played)?;
        optional_non_negative("yellow_cards", self.yellow_cards)?;
        optional_non_negative("red_cards", self.red_cards)
    }
}

impl PlayerStatsInput {
    pub fn apply_to(self, base: player_match_stats::Model) -> player_match_stats::Model {
        player_match_stats::Model {
            match_id: base.match_id,
            player_id: base.player_id,
            shots: self.shots.unwrap_or(base.shots),
            shots_on_target: self.shots_on_target.unwrap_or(base.shots_on_target),
            goals: self.goals.unwrap_or(base.goals),
            assists: self.assists.unwrap_or(base.assists),
            minutes_played: self.minutes_played.unwrap_or(base.minutes_played),
            yellow_cards: self.yellow_cards.unwrap_or(base.yellow_cards),
            red_cards: self.red_cards.unwrap_or(base.red_cards),
        }
    }
}
