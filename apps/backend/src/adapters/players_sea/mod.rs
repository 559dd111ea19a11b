use sea_orm::{NotSet, QueryOrder, Select, Set};

use super::crud_sea::Resource;
use crate::entities::players;
use crate::errors::domain::NotFoundKind;

pub mod dto;

pub use dto::{PlayerCreate, PlayerPatch};

pub struct PlayerResource;

impl Resource for PlayerResource {
    type Entity = players::Entity;
    type Model = players::Model;
    type ActiveModel = players::ActiveModel;
    type Create = PlayerCreate;
    type Patch = PlayerPatch;

    const LABEL: &'static str = "Player";

    fn not_found_kind() -> NotFoundKind {
        NotFoundKind::Player
    }

    fn id_column() -> players::Column {
        players::Column::Id
    }

    fn new_active(input: PlayerCreate) -> players::ActiveModel {
        players::ActiveModel {
            id: NotSet,
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            age: Set(input.age),
            jersey_number: Set(input.jersey_number),
            team_id: Set(input.team_id),
        }
    }

    fn apply_patch(active: &mut players::ActiveModel, patch: PlayerPatch) {
        if let Some(first_name) = patch.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = patch.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(age) = patch.age {
            active.age = Set(age);
        }
        if let Some(jersey_number) = patch.jersey_number {
            active.jersey_number = Set(jersey_number);
        }
        if let Some(team_id) = patch.team_id {
            active.team_id = Set(team_id);
        }
    }

    /// Squad-sheet order: shirt number, then surname.
    fn order(query: Select<players::Entity>) -> Select<players::Entity> {
        query
            .order_by_asc(players::Column::JerseyNumber)
            .order_by_asc(players::Column::LastName)
            .order_by_asc(players::Column::Id)
    }
}
