//! Match creation: the fixture and its stats row are written together.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::adapters::match_stats_sea;
use crate::adapters::matches_sea::{MatchCreate, MatchResource};
use crate::db::txn::with_txn;
use crate::domain::validation::optional_non_negative;
use crate::entities::{match_stats, matches};
use crate::error::AppError;
use crate::repos::crud;
use crate::state::app_state::AppState;

/// Body of `POST /api/matches`: the fixture plus an optional result.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMatchRequest {
    #[serde(flatten)]
    pub fixture: MatchCreate,
    #[serde(default)]
    pub home_score: Option<i32>,
    #[serde(default)]
    pub away_score: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchWithStats {
    #[serde(flatten)]
    pub fixture: matches::Model,
    pub stats: match_stats::Model,
}

pub async fn create_match(
    state: &AppState,
    request: CreateMatchRequest,
) -> Result<MatchWithStats, AppError> {
    optional_non_negative("home_score", request.home_score)?;
    optional_non_negative("away_score", request.away_score)?;

    let created = with_txn(state, |txn| {
        Box::pin(async move {
            let fixture = crud::create::<MatchResource, _>(txn, request.fixture).await?;

            let mut stats = match_stats::Model::defaults_for(fixture.id);
            stats.home_score = request.home_score.unwrap_or(0);
            stats.away_score = request.away_score.unwrap_or(0);
            let stats = match_stats_sea::upsert(txn, stats).await?;

            Ok(MatchWithStats { fixture, stats })
        })
    })
    .await?;

    info!(match_id = created.fixture.id, "match created");
    Ok(created)
}
