//! Typed result rows, one per report. Raw columns decode as `i32`,
//! aggregates as `i64`.

use sea_orm::FromQueryResult;
use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::score_text;

#[derive(Debug, FromQueryResult, Serialize)]
pub struct RosterRow {
    pub team_id: i32,
    pub player_id: i32,
    pub team: String,
    pub player: String,
    pub jersey_number: i32,
}

#[derive(Debug, FromQueryResult, Serialize)]
pub struct ScorerRow {
    pub player_id: i32,
    pub player: String,
    pub team: String,
    pub goals: i64,
    pub assists: i64,
}

#[derive(Debug, FromQueryResult, Serialize)]
pub struct StandingRow {
    pub team_id: i32,
    pub team: String,
    pub league: String,
    pub played: i64,
    pub wins: i64,
    pub draws: i64,
    pub losses: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    pub points: i64,
}

#[derive(Debug, FromQueryResult, Serialize)]
pub struct DisciplineRow {
    pub team_id: i32,
    pub team: String,
    pub yellow_cards: i64,
    pub red_cards: i64,
    pub total_cards: i64,
}

#[derive(Debug, FromQueryResult, Serialize)]
pub struct DefenceRow {
    pub team_id: i32,
    pub team: String,
    pub clean_sheets: i64,
    pub goals_against: i64,
}

#[derive(Debug, FromQueryResult)]
pub struct FixtureRow {
    pub match_id: i32,
    pub date: OffsetDateTime,
    pub home_team: String,
    pub away_team: String,
    pub venue: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
}

/// [`FixtureRow`] with the score rendered for display.
#[derive(Debug, Serialize)]
pub struct FixtureLine {
    pub match_id: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub home_team: String,
    pub score: String,
    pub away_team: String,
    pub venue: String,
}

impl From<FixtureRow> for FixtureLine {
    fn from(row: FixtureRow) -> Self {
        Self {
            match_id: row.match_id,
            date: row.date,
            home_team: row.home_team,
            score: score_text(row.home_score.zip(row.away_score)),
            away_team: row.away_team,
            venue: row.venue,
        }
    }
}

#[derive(Debug, FromQueryResult, Serialize)]
pub struct AssignmentRow {
    pub referee_id: i32,
    pub match_id: i32,
    pub referee: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub home_team: String,
    pub away_team: String,
}

#[derive(Debug, FromQueryResult, Serialize)]
pub struct CareerRow {
    pub player_id: i32,
    pub player: String,
    pub team: String,
    pub games_played: i64,
    pub goals: i64,
    pub assists: i64,
    pub yellow_cards: i64,
    pub red_cards: i64,
}

#[derive(Debug, FromQueryResult, Serialize)]
pub struct VenueRow {
    pub venue: String,
    pub matches_played: i64,
    pub home_wins: i64,
    pub away_wins: i64,
    pub draws: i64,
    pub avg_goals: Option<f64>,
}

#[derive(Debug, FromQueryResult, Serialize)]
pub struct HeadToHeadRow {
    pub team_a_id: i32,
    pub team_b_id: i32,
    pub team_a: String,
    pub team_b: String,
    pub matches_played: i64,
    pub team_a_wins: i64,
    pub team_b_wins: i64,
    pub draws: i64,
}
