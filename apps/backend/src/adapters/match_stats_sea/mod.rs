//! One stats row per match, written by upsert.

use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use crate::entities::match_stats;

pub mod dto;

pub use dto::MatchStatsInput;

pub async fn find<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i32,
) -> Result<Option<match_stats::Model>, sea_orm::DbErr> {
    match_stats::Entity::find()
        .filter(match_stats::Column::MatchId.eq(match_id))
        .one(conn)
        .await
}

pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stats: match_stats::Model,
) -> Result<match_stats::Model, sea_orm::DbErr> {
    let match_id = stats.match_id;
    let active = match_stats::ActiveModel {
        match_id: Set(stats.match_id),
        home_score: Set(stats.home_score),
        away_score: Set(stats.away_score),
        possession_home: Set(stats.possession_home),
        possession_away: Set(stats.possession_away),
        fouls_home: Set(stats.fouls_home),
        fouls_away: Set(stats.fouls_away),
        corners_home: Set(stats.corners_home),
        corners_away: Set(stats.corners_away),
    };

    match_stats::Entity::insert(active)
        .on_conflict(
            OnConflict::column(match_stats::Column::MatchId)
                .update_columns([
                    match_stats::Column::HomeScore,
                    match_stats::Column::AwayScore,
                    match_stats::Column::PossessionHome,
                    match_stats::Column::PossessionAway,
                    match_stats::Column::FoulsHome,
                    match_stats::Column::FoulsAway,
                    match_stats::Column::CornersHome,
                    match_stats::Column::CornersAway,
                ])
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    find(conn, match_id).await?.ok_or_else(|| {
        sea_orm::DbErr::RecordNotFound(format!("match_stats row for match {match_id}"))
    })
}
