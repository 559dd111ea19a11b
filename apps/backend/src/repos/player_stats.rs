use sea_orm::ConnectionTrait;

use super::crud;
use crate::adapters::matches_sea::MatchResource;
use crate::adapters::player_stats_sea::{self, PlayerHistoryRow, PlayerStatsInput};
use crate::adapters::players_sea::PlayerResource;
use crate::domain::Validate;
use crate::entities::player_match_stats;
use crate::errors::domain::{DomainError, NotFoundKind};

pub async fn list_for_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i32,
) -> Result<Vec<player_match_stats::Model>, DomainError> {
    crud::require::<MatchResource, C>(conn, match_id).await?;
    Ok(player_stats_sea::list_for_match(conn, match_id).await?)
}

/// Create or overlay a player's line for a match; both must exist.
pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i32,
    player_id: i32,
    input: PlayerStatsInput,
) -> Result<player_match_stats::Model, DomainError> {
    input.validate()?;
    crud::require::<MatchResource, C>(conn, match_id).await?;
    crud::require::<PlayerResource, C>(conn, player_id).await?;

    let base = player_stats_sea::find(conn, match_id, player_id)
        .await?
        .unwrap_or_else(|| player_match_stats::Model::zeroed(match_id, player_id));

    Ok(player_stats_sea::upsert(conn, input.apply_to(base)).await?)
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i32,
    player_id: i32,
) -> Result<(), DomainError> {
    match player_stats_sea::delete(conn, match_id, player_id).await? {
        0 => Err(DomainError::not_found(
            NotFoundKind::PlayerStats,
            format!("No stats for player {player_id} in match {match_id}"),
        )),
        _ => Ok(()),
    }
}

pub async fn history<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i32,
) -> Result<Vec<PlayerHistoryRow>, DomainError> {
    crud::require::<PlayerResource, C>(conn, player_id).await?;
    Ok(player_stats_sea::history(conn, player_id).await?)
}
