use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "match_stats")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "match_id")]
    pub match_id: i32,
    pub home_score: i32,
    pub away_score: i32,
    pub possession_home: i32,
    pub possession_away: i32,
    pub fouls_home: i32,
    pub fouls_away: i32,
    pub corners_home: i32,
    pub corners_away: i32,
}

impl Model {
    /// What readers see for a match that has no stats row yet.
    pub fn defaults_for(match_id: i32) -> Self {
        Self {
            match_id,
            home_score: 0,
            away_score: 0,
            possession_home: 50,
            possession_away: 50,
            fouls_home: 0,
            fouls_away: 0,
            corners_home: 0,
            corners_away: 0,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::matches::Entity",
        from = "Column::MatchId",
        to = "super::matches::Column::Id",
        on_delete = "Cascade"
    )]
    Match,
}

impl Related<super::matches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Match.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
