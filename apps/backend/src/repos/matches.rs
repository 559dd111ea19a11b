//! Match rules that need the stored row: merged-team checks and read views.

use sea_orm::ConnectionTrait;

use super::crud;
use crate::adapters::matches_sea::{self, MatchPatch, MatchResource, MatchScope, MatchViewRow};
use crate::domain::ensure_distinct_teams;
use crate::entities::matches;
use crate::errors::domain::DomainError;

/// Patch a match, rejecting a result where both sides are the same team.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
    patch: MatchPatch,
) -> Result<matches::Model, DomainError> {
    if patch.home_team_id.is_some() || patch.away_team_id.is_some() {
        let current = crud::require::<MatchResource, C>(conn, id).await?;
        ensure_distinct_teams(
            patch.home_team_id.unwrap_or(current.home_team_id),
            patch.away_team_id.unwrap_or(current.away_team_id),
        )?;
    }
    crud::update::<MatchResource, C>(conn, id, patch).await
}

pub async fn list_views<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    scope: MatchScope,
) -> Result<Vec<MatchViewRow>, DomainError> {
    Ok(matches_sea::list_views(conn, scope).await?)
}
