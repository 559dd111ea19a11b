use backend_test_support::unique_helpers::unique_username;
use touchline::adapters::users_sea;
use touchline::errors::domain::{ConflictKind, DomainError};
use touchline::infra::db_errors::map_db_err;

use crate::support::test_state::{build_test_state, db};

#[tokio::test]
async fn create_then_find_by_username() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let username = unique_username("coach");

    let created = users_sea::create_user(conn, &username, "$2b$04$hash")
        .await
        .unwrap();
    let found = users_sea::find_by_username(conn, &username)
        .await
        .unwrap()
        .expect("user stored");

    assert_eq!(found.id, created.id);
    assert_eq!(found.password_hash, "$2b$04$hash");
    assert!(users_sea::find_by_username(conn, "nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn usernames_are_unique() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let username = unique_username("coach");

    users_sea::create_user(conn, &username, "h1").await.unwrap();
    let err = users_sea::create_user(conn, &username, "h2")
        .await
        .expect_err("duplicate username");

    assert!(matches!(
        map_db_err(err),
        DomainError::Conflict(ConflictKind::UsernameTaken, _)
    ));
}
