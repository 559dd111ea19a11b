//! League table metadata for the generic CRUD adapter.

use sea_orm::{NotSet, QueryOrder, Select, Set};

use super::crud_sea::Resource;
use crate::entities::leagues;
use crate::errors::domain::NotFoundKind;

pub mod dto;

pub use dto::{LeagueCreate, LeaguePatch};

pub struct LeagueResource;

impl Resource for LeagueResource {
    type Entity = leagues::Entity;
    type Model = leagues::Model;
    type ActiveModel = leagues::ActiveModel;
    type Create = LeagueCreate;
    type Patch = LeaguePatch;

    const LABEL: &'static str = "League";

    fn not_found_kind() -> NotFoundKind {
        NotFoundKind::League
    }

    fn id_column() -> leagues::Column {
        leagues::Column::Id
    }

    fn new_active(input: LeagueCreate) -> leagues::ActiveModel {
        leagues::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            city: Set(input.city),
            country: Set(input.country),
        }
    }

    fn apply_patch(active: &mut leagues::ActiveModel, patch: LeaguePatch) {
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(city) = patch.city {
            active.city = Set(city);
        }
        if let Some(country) = patch.country {
            active.country = Set(country);
        }
    }

    fn order(query: Select<leagues::Entity>) -> Select<leagues::Entity> {
        query
            .order_by_asc(leagues::Column::Name)
            .order_by_asc(leagues::Column::Id)
    }
}
