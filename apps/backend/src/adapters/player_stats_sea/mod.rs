//! Per-player stat lines keyed by (match_id, player_id).

use sea_orm::sea_query::{Alias, Expr, JoinType, OnConflict, Order, Query, SelectStatement};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, QueryFilter, QueryOrder, Set,
};
use serde::Serialize;
use time::OffsetDateTime;

use crate::entities::{matches, player_match_stats, teams};

pub mod dto;

pub use dto::PlayerStatsInput;

pub async fn find<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i32,
    player_id: i32,
) -> Result<Option<player_match_stats::Model>, sea_orm::DbErr> {
    player_match_stats::Entity::find()
        .filter(player_match_stats::Column::MatchId.eq(match_id))
        .filter(player_match_stats::Column::PlayerId.eq(player_id))
        .one(conn)
        .await
}

pub async fn list_for_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i32,
) -> Result<Vec<player_match_stats::Model>, sea_orm::DbErr> {
    player_match_stats::Entity::find()
        .filter(player_match_stats::Column::MatchId.eq(match_id))
        .order_by_desc(player_match_stats::Column::Goals)
        .order_by_asc(player_match_stats::Column::PlayerId)
        .all(conn)
        .await
}

pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    line: player_match_stats::Model,
) -> Result<player_match_stats::Model, sea_orm::DbErr> {
    let (match_id, player_id) = (line.match_id, line.player_id);
    let active = player_match_stats::ActiveModel {
        match_id: Set(line.match_id),
        player_id: Set(line.player_id),
        shots: Set(line.shots),
        shots_on_target: Set(line.shots_on_target),
        goals: Set(line.goals),
        assists: Set(line.assists),
        minutes_played: Set(line.minutes_played),
        yellow_cards: Set(line.yellow_cards),
        red_cards: Set(line.red_cards),
    };

    player_match_stats::Entity::insert(active)
        .on_conflict(
            OnConflict::columns([
                player_match_stats::Column::MatchId,
                player_match_stats::Column::PlayerId,
            ])
            .update_columns([
                player_match_stats::Column::Shots,
                player_match_stats::Column::ShotsOnTarget,
                player_match_stats::Column::Goals,
                player_match_stats::Column::Assists,
                player_match_stats::Column::MinutesPlayed,
                player_match_stats::Column::YellowCards,
                player_match_stats::Column::RedCards,
            ])
            .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    find(conn, match_id, player_id).await?.ok_or_else(|| {
        sea_orm::DbErr::RecordNotFound(format!(
            "player_match_stats row for match {match_id}, player {player_id}"
        ))
    })
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i32,
    player_id: i32,
) -> Result<u64, sea_orm::DbErr> {
    let result = player_match_stats::Entity::delete_many()
        .filter(player_match_stats::Column::MatchId.eq(match_id))
        .filter(player_match_stats::Column::PlayerId.eq(player_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// A player's stat line for one match, with the fixture it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct PlayerHistoryRow {
    pub match_id: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub location: String,
    pub home_team_name: String,
    pub away_team_name: String,
    pub shots: i32,
    pub shots_on_target: i32,
    pub goals: i32,
    pub assists: i32,
    pub minutes_played: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
}

fn history_statement(player_id: i32) -> SelectStatement {
    let home = Alias::new("home_team");
    let away = Alias::new("away_team");

    Query::select()
        .columns([
            (player_match_stats::Entity, player_match_stats::Column::MatchId),
            (player_match_stats::Entity, player_match_stats::Column::Shots),
            (player_match_stats::Entity, player_match_stats::Column::ShotsOnTarget),
            (player_match_stats::Entity, player_match_stats::Column::Goals),
            (player_match_stats::Entity, player_match_stats::Column::Assists),
            (player_match_stats::Entity, player_match_stats::Column::MinutesPlayed),
            (player_match_stats::Entity, player_match_stats::Column::YellowCards),
            (player_match_stats::Entity, player_match_stats::Column::RedCards),
        ])
        .columns([
            (matches::Entity, matches::Column::Date),
            (matches::Entity, matches::Column::Location),
        ])
        .expr_as(
            Expr::col((home.clone(), teams::Column::Name)),
            Alias::new("home_team_name"),
        )
        .expr_as(
            Expr::col((away.clone(), teams::Column::Name)),
            Alias::new("away_team_name"),
        )
        .from(player_match_stats::Entity)
        .inner_join(
            matches::Entity,
            Expr::col((matches::Entity, matches::Column::Id)).equals((
                player_match_stats::Entity,
                player_match_stats::Column::MatchId,
            )),
        )
        .join_as(
            JoinType::InnerJoin,
            teams::Entity,
            home.clone(),
            Expr::col((home, teams::Column::Id))
                .equals((matches::Entity, matches::Column::HomeTeamId)),
        )
        .join_as(
            JoinType::InnerJoin,
            teams::Entity,
            away.clone(),
            Expr::col((away, teams::Column::Id))
                .equals((matches::Entity, matches::Column::AwayTeamId)),
        )
        .and_where(
            Expr::col((
                player_match_stats::Entity,
                player_match_stats::Column::PlayerId,
            ))
            .eq(player_id),
        )
        .order_by((matches::Entity, matches::Column::Date), Order::Desc)
        .order_by((matches::Entity, matches::Column::Id), Order::Desc)
        .to_owned()
}

pub async fn history<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i32,
) -> Result<Vec<PlayerHistoryRow>, sea_orm::DbErr> {
    let backend = conn.get_database_backend();
    PlayerHistoryRow::find_by_statement(backend.build(&history_statement(player_id)))
        .all(conn)
        .await
}
