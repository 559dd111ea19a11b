use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub location: String,
    #[sea_orm(column_name = "league_id")]
    pub league_id: i32,
    #[sea_orm(column_name = "home_team_id")]
    pub home_team_id: i32,
    #[sea_orm(column_name = "away_team_id")]
    pub away_team_id: i32,
    #[sea_orm(column_name = "referee_id")]
    pub referee_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::leagues::Entity",
        from = "Column::LeagueId",
        to = "super::leagues::Column::Id",
        on_delete = "Cascade"
    )]
    League,
    #[sea_orm(
        belongs_to = "super::teams::Entity",
        from = "Column::HomeTeamId",
        to = "super::teams::Column::Id",
        on_delete = "Cascade"
    )]
    HomeTeam,
    #[sea_orm(
        belongs_to = "super::teams::Entity",
        from = "Column::AwayTeamId",
        to = "super::teams::Column::Id",
        on_delete = "Cascade"
    )]
    AwayTeam,
    #[sea_orm(
        belongs_to = "super::referees::Entity",
        from = "Column::RefereeId",
        to = "super::referees::Column::Id",
        on_delete = "SetNull"
    )]
    Referee,
    #[sea_orm(has_one = "super::match_stats::Entity")]
    MatchStats,
}

impl Related<super::leagues::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::League.def()
    }
}

impl Related<super::referees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Referee.def()
    }
}

impl Related<super::match_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchStats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
