use sea_orm::ConnectionTrait;

use super::crud;
use crate::adapters::match_stats_sea::{self, MatchStatsInput};
use crate::adapters::matches_sea::MatchResource;
use crate::domain::Validate;
use crate::entities::match_stats;
use crate::errors::domain::DomainError;

/// Stored stats, or the 0-0 / 50-50 defaults when none were recorded.
pub async fn get_or_default<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i32,
) -> Result<match_stats::Model, DomainError> {
    crud::require::<MatchResource, C>(conn, match_id).await?;
    let stored = match_stats_sea::find(conn, match_id).await?;
    Ok(stored.unwrap_or_else(|| match_stats::Model::defaults_for(match_id)))
}

pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i32,
    input: MatchStatsInput,
) -> Result<match_stats::Model, DomainError> {
    input.validate()?;
    let base = get_or_default(conn, match_id).await?;
    let merged = input.apply_to(base)?;
    Ok(match_stats_sea::upsert(conn, merged).await?)
}
