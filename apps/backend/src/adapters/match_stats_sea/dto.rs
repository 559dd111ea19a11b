use serde::Deserialize;

use crate::domain::balance_possession;
use crate::domain::validation::{optional_non_negative, Validate};
use crate::entities::match_stats;
use crate::errors::domain::DomainError;

/// Body of `PUT /api/matches/{id}/stats`. Omitted fields keep their
/// stored (or default) value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchStatsInput {
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub possession_home: Option<i32>,
    pub possession_away: Option<i32>,
    pub fouls_home: Option<i32>,
    pub fouls_away: Option<i32>,
    pub corners_home: Option<i32>,
    pub corners_away: Option<i32>,
}

impl Validate for MatchStatsInput {
    fn validate(&self) -> Result<(), DomainError> {
        optional_non_negative("home_score", self.home_score)?;
        optional_non_negative("away_score", self.away_score)?;
        optional_non_negative("fouls_home", self.fouls_home)?;
        optional_non_negative("fouls_away", self.fouls_away)?;
        optional_non_negative("corners_home", self.corners_home)?;
        optional_non_negative("corners_away", self.corners_away)
    }
}

impl MatchStatsInput {
    /// Overlay this input on `base`, rebalancing possession.
    pub fn apply_to(self, base: match_stats::Model) -> Result<match_stats::Model, DomainError> {
        let (possession_home, possession_away) =
            balance_possession(self.possession_home, self.possession_away)?
                .unwrap_or((base.possession_home, base.possession_away));

        Ok(match_stats::Model {
            match_id: base.match_id,
            home_score: self.home_score.unwrap_or(base.home_score),
            away_score: self.away_score.unwrap_or(base.away_score),
            possession_home,
            possession_away,
            fouls_home: self.fouls_home.unwrap_or(base.fouls_home),
            fouls_away: self.fouls_away.unwrap_or(base.fouls_away),
            corners_home: self.corners_home.unwrap_or(base.corners_home),
            corners_away: self.corners_away.unwrap_or(base.corners_away),
        })
    }
}
