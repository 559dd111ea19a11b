use std::time::{Duration, Instant};

use actix_web::http::StatusCode;
use backend_test_support::unique_helpers::unique_username;
use sea_orm::DatabaseConnection;
use touchline::config::auth::AuthConfig;
use touchline::errors::ErrorCode;
use touchline::repos::users;
use touchline::services::auth::{self, INVALID_CREDENTIALS_DETAIL};

use crate::support::test_state::{build_test_state, db};

#[actix_web::test]
async fn register_trims_username_and_stores_bcrypt_hash() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let username = unique_username("coach");
    let padded = format!("  {username} ");

    let outcome = auth::register(conn, &AuthConfig::for_tests(), Some(&padded), Some("s3cret!"))
        .await
        .unwrap();
    assert_eq!(outcome.message, "Registration successful");
    assert_eq!(outcome.username, username);

    let stored = users::find_by_username(conn, &username)
        .await
        .unwrap()
        .expect("user stored under trimmed name");
    assert_ne!(stored.password_hash, "s3cret!");
    assert!(bcrypt::verify("s3cret!", &stored.password_hash).unwrap());
}

#[actix_web::test]
async fn duplicate_register_conflicts_and_keeps_first_password() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let config = AuthConfig::for_tests();
    let username = unique_username("coach");

    auth::register(conn, &config, Some(&username), Some("first"))
        .await
        .unwrap();
    let err = auth::register(conn, &config, Some(&username), Some("second"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::UsernameTaken);
    assert_eq!(err.status(), StatusCode::CONFLICT);

    auth::login(conn, &config, Some(&username), Some("first"))
        .await
        .unwrap();
    assert!(auth::login(conn, &config, Some(&username), Some("second"))
        .await
        .is_err());
}

#[actix_web::test]
async fn missing_fields_are_rejected_before_hashing() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let config = AuthConfig::for_tests();

    for (username, password) in [(None, Some("pw")), (Some("   "), Some("pw")), (Some("coach"), Some(""))] {
        let err = auth::register(conn, &config, username, password)
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::MissingCredentials);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}

#[actix_web::test]
async fn login_does_not_reveal_which_part_was_wrong() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let username = unique_username("coach");
    let config = AuthConfig::for_tests();
    auth::register(conn, &config, Some(&username), Some("right"))
        .await
        .unwrap();

    let wrong_password = auth::login(conn, &config, Some(&username), Some("wrong"))
        .await
        .unwrap_err();
    let unknown_user = auth::login(conn, &config, Some("nobody-here"), Some("right"))
        .await
        .unwrap_err();

    for err in [&wrong_password, &unknown_user] {
        assert_eq!(err.code(), ErrorCode::InvalidCredentials);
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), format!("Unauthorized: {INVALID_CREDENTIALS_DETAIL}"));
    }

    let ok = auth::login(conn, &config, Some(&username), Some("right"))
        .await
        .unwrap();
    assert_eq!(ok.message, "Login successful");
    assert_eq!(ok.username, username);
}

async fn timed_failed_login(
    conn: &DatabaseConnection,
    config: &AuthConfig,
    username: &str,
) -> Duration {
    let started = Instant::now();
    let err = auth::login(conn, config, Some(username), Some("wrong"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidCredentials);
    started.elapsed()
}

#[actix_web::test]
async fn unknown_user_pays_for_a_bcrypt_check() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let config = AuthConfig { bcrypt_cost: 10 };
    let username = unique_username("coach");
    auth::register(conn, &config, Some(&username), Some("right"))
        .await
        .unwrap();

    let wrong_password = timed_failed_login(conn, &config, &username).await;
    let unknown_user = timed_failed_login(conn, &config, &unique_username("ghost")).await;

    assert!(wrong_password > Duration::from_millis(1));
    assert!(
        unknown_user * 4 >= wrong_password,
        "unknown user took {unknown_user:?}, wrong password took {wrong_password:?}"
    );
}
