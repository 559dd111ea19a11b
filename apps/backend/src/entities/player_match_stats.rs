use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "player_match_stats")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub match_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub player_id: i32,
    pub shots: i32,
    pub shots_on_target: i32,
    pub goals: i32,
    pub assists: i32,
    pub minutes_played: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
}

impl Model {
    /// A stat line with every counter at zero.
    pub fn zeroed(match_id: i32, player_id: i32) -> Self {
        Self {
            match_id,
            player_id,
            shots: 0,
            shots_on_target: 0,
            goals: 0,
            assists: 0,
            minutes_played: 0,
            yellow_cards: 0,
            red_cards: 0,
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
    #[sea_orm(
        belongs_to = "super::players::Entity",
        from = "Column::PlayerId",
        to = "super::players::Column::Id",
        on_delete = "Cascade"
    )]
    Player,
}

impl Related<super::matches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Match.def()
    }
}

impl Related<super::players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
