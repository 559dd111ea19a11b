//! Generic SeaORM CRUD over any table described by a [`Resource`].
//!
//! Each entity module supplies a zero-sized `Resource` impl carrying its
//! metadata (id column, list ordering, how payloads become active models)
//! and gets create/list/find/update/delete from here.

use sea_orm::sea_query::IntoCondition;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait,
    FromQueryResult, IntoActiveModel, ModelTrait, QueryFilter, Select,
};

use crate::errors::domain::NotFoundKind;

pub trait Resource: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model>;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Clone
        + Send
        + Sync;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + Sync;
    type Create: Send;
    type Patch: Send;

    /// Human label used in messages ("League", "Team", ...)
    const LABEL: &'static str;

    fn not_found_kind() -> NotFoundKind;

    fn id_column() -> <Self::Entity as EntityTrait>::Column;

    fn new_active(input: Self::Create) -> Self::ActiveModel;

    /// Set only the supplied fields; untouched fields stay `Unchanged`.
    fn apply_patch(active: &mut Self::ActiveModel, patch: Self::Patch);

    /// Human-meaningful list ordering
    fn order(query: Select<Self::Entity>) -> Select<Self::Entity>;
}

// Adapter functions return DbErr; repos layer maps to DomainError.

pub async fn create<R: Resource, C: ConnectionTrait + Send + Sync>(
    conn: &C,
    input: R::Create,
) -> Result<R::Model, sea_orm::DbErr> {
    R::new_active(input).insert(conn).await
}

pub async fn list<R: Resource, C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<R::Model>, sea_orm::DbErr> {
    R::order(R::Entity::find()).all(conn).await
}

pub async fn list_where<R, C, F>(conn: &C, filter: F) -> Result<Vec<R::Model>, sea_orm::DbErr>
where
    R: Resource,
    C: ConnectionTrait + Send + Sync,
    F: IntoCondition,
{
    R::order(R::Entity::find().filter(filter)).all(conn).await
}

pub async fn find<R: Resource, C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<R::Model>, sea_orm::DbErr> {
    R::Entity::find()
        .filter(R::id_column().eq(id))
        .one(conn)
        .await
}

/// Partial update; `Ok(None)` when no row has this id.
pub async fn update<R: Resource, C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
    patch: R::Patch,
) -> Result<Option<R::Model>, sea_orm::DbErr> {
    let Some(model) = find::<R, C>(conn, id).await? else {
        return Ok(None);
    };

    let mut active: R::ActiveModel = model.clone().into_active_model();
    R::apply_patch(&mut active, patch);

    if !active.is_changed() {
        return Ok(Some(model));
    }

    active.update(conn).await.map(Some)
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete<R: Resource, C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<u64, sea_orm::DbErr> {
    let result = R::Entity::delete_many()
        .filter(R::id_column().eq(id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
