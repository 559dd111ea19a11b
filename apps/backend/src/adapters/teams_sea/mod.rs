use sea_orm::{NotSet, QueryOrder, Select, Set};

use super::crud_sea::Resource;
use crate::entities::teams;
use crate::errors::domain::NotFoundKind;

pub mod dto;

pub use dto::{TeamCreate, TeamPatch};

pub struct TeamResource;

impl Resource for TeamResource {
    type Entity = teams::Entity;
    type Model = teams::Model;
    type ActiveModel = teams::ActiveModel;
    type Create = TeamCreate;
    type Patch = TeamPatch;

    const LABEL: &'static str = "Team";

    fn not_found_kind() -> NotFoundKind {
        NotFoundKind::Team
    }

    fn id_column() -> teams::Column {
        teams::Column::Id
    }

    fn new_active(input: TeamCreate) -> teams::ActiveModel {
        teams::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            coach_name: Set(input.coach_name),
            league_id: Set(input.league_id),
        }
    }

    fn apply_patch(active: &mut teams::ActiveModel, patch: TeamPatch) {
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(coach_name) = patch.coach_name {
            active.coach_name = Set(coach_name);
        }
        if let Some(league_id) = patch.league_id {
            active.league_id = Set(league_id);
        }
    }

    fn order(query: Select<teams::Entity>) -> Select<teams::Entity> {
        query
            .order_by_asc(teams::Column::Name)
            .order_by_asc(teams::Column::Id)
    }
}
