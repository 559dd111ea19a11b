use sea_orm::{NotSet, QueryOrder, Select, Set};

use super::crud_sea::Resource;
use crate::entities::referees;
use crate::errors::domain::NotFoundKind;

pub mod dto;

pub use dto::{RefereeCreate, RefereePatch};

pub struct RefereeResource;

impl Resource for RefereeResource {
    type Entity = referees::Entity;
    type Model = referees::Model;
    type ActiveModel = referees::ActiveModel;
    type Create = RefereeCreate;
    type Patch = RefereePatch;

    const LABEL: &'static str = "Referee";

    fn not_found_kind() -> NotFoundKind {
        NotFoundKind::Referee
    }

    fn id_column() -> referees::Column {
        referees::Column::Id
    }

    fn new_active(input: RefereeCreate) -> referees::ActiveModel {
        referees::ActiveModel {
            id: NotSet,
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            experience: Set(input.experience),
            certification_level: Set(input.certification_level),
        }
    }

    fn apply_patch(active: &mut referees::ActiveModel, patch: RefereePatch) {
        if let Some(first_name) = patch.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = patch.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(experience) = patch.experience {
            active.experience = Set(experience);
        }
        if let Some(level) = patch.certification_level {
            active.certification_level = Set(level);
        }
    }

    fn order(query: Select<referees::Entity>) -> Select<referees::Entity> {
        query
            .order_by_asc(referees::Column::LastName)
            .order_by_asc(referees::Column::FirstName)
            .order_by_asc(referees::Column::Id)
    }
}
