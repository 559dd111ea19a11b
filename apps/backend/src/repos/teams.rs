//! Team-centric reads built on the match view: fixtures and derived record.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use super::crud;
use crate::adapters::matches_sea::{self, MatchScope, MatchViewRow};
use crate::adapters::teams_sea::TeamResource;
use crate::domain::{score_text, Outcome, Record};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub match_id: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub location: String,
    pub home_team_name: String,
    pub away_team_name: String,
    pub is_home: bool,
    pub opponent: String,
    /// "h - a" or "TBD"
    pub score: String,
    /// Present once a result is recorded
    pub outcome: Option<Outcome>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamRecord {
    pub team_id: i32,
    pub team_name: String,
    #[serde(flatten)]
    pub record: Record,
}

fn schedule_entry(team_id: i32, row: MatchViewRow) -> ScheduleEntry {
    let is_home = row.home_team_id == team_id;
    let score = row.score();
    let outcome = score.map(|(home, away)| {
        if is_home {
            Outcome::from_goals(home, away)
        } else {
            Outcome::from_goals(away, home)
        }
    });
    let opponent = if is_home {
        row.away_team_name.clone()
    } else {
        row.home_team_name.clone()
    };

    ScheduleEntry {
        match_id: row.id,
        date: row.date,
        location: row.location,
        home_team_name: row.home_team_name,
        away_team_name: row.away_team_name,
        is_home,
        opponent,
        score: score_text(score),
        outcome,
    }
}

/// Fold recorded results into a record; unplayed fixtures are skipped.
pub fn tally(team_id: i32, rows: &[MatchViewRow]) -> Record {
    let mut record = Record::default();
    for row in rows {
        if let Some((home, away)) = row.score() {
            if row.home_team_id == team_id {
                record.add_result(home, away);
            } else {
                record.add_result(away, home);
            }
        }
    }
    record
}

pub async fn schedule<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i32,
) -> Result<Vec<ScheduleEntry>, DomainError> {
    crud::require::<TeamResource, C>(conn, team_id).await?;
    let rows = matches_sea::list_views(conn, MatchScope::Team(team_id)).await?;
    Ok(rows
        .into_iter()
        .map(|row| schedule_entry(team_id, row))
        .collect())
}

pub async fn record<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i32,
) -> Result<TeamRecord, DomainError> {
    let team = crud::require::<TeamResource, C>(conn, team_id).await?;
    let rows = matches_sea::list_views(conn, MatchScope::Team(team_id)).await?;
    Ok(TeamRecord {
        team_id: team.id,
        team_name: team.name,
        record: tally(team_id, &rows),
    })
}
