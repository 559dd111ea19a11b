use time::macros::datetime;
use touchline::adapters::matches_sea::{MatchCreate, MatchResource};
use touchline::errors::ErrorCode;
use touchline::repos::{crud, match_stats};
use touchline::services::matches::{create_match, CreateMatchRequest};

use crate::support::factory::{seed_league, seed_team};
use crate::support::test_state::{build_test_state, db};

fn request(league_id: i32, home: i32, away: i32) -> CreateMatchRequest {
    CreateMatchRequest {
        fixture: MatchCreate {
            date: datetime!(2024-09-01 19:45 UTC),
            location: "Anfield".to_string(),
            league_id,
            home_team_id: home,
            away_team_id: away,
            referee_id: None,
        },
        home_score: None,
        away_score: None,
    }
}

#[actix_web::test]
async fn create_writes_fixture_and_stats_together() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let league = seed_league(conn, "Premier").await;
    let home = seed_team(conn, league.id, "Liverpool").await;
    let away = seed_team(conn, league.id, "Everton").await;

    let mut req = request(league.id, home.id, away.id);
    req.home_score = Some(3);
    let created = create_match(&state, req).await.unwrap();

    assert_eq!(created.fixture.location, "Anfield");
    assert_eq!(created.stats.match_id, created.fixture.id);
    assert_eq!((created.stats.home_score, created.stats.away_score), (3, 0));
    assert_eq!(
        (created.stats.possession_home, created.stats.possession_away),
        (50, 50)
    );

    let stored = match_stats::get_or_default(conn, created.fixture.id).await.unwrap();
    assert_eq!(stored, created.stats);
}

#[actix_web::test]
async fn same_team_fixture_is_rejected() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let league = seed_league(conn, "Premier").await;
    let home = seed_team(conn, league.id, "Liverpool").await;

    let err = create_match(&state, request(league.id, home.id, home.id))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::SameTeams);
    assert!(crud::list::<MatchResource, _>(conn).await.unwrap().is_empty());
}

#[actix_web::test]
async fn negative_score_is_rejected() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let league = seed_league(conn, "Premier").await;
    let home = seed_team(conn, league.id, "Liverpool").await;
    let away = seed_team(conn, league.id, "Everton").await;

    let mut req = request(league.id, home.id, away.id);
    req.away_score = Some(-1);
    let err = create_match(&state, req).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);
}

#[actix_web::test]
async fn failed_create_leaves_nothing_behind() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let league = seed_league(conn, "Premier").await;
    let home = seed_team(conn, league.id, "Liverpool").await;

    // unknown away team trips the foreign key inside the transaction
    let err = create_match(&state, request(league.id, home.id, 9_999))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::FkViolation);
    assert!(crud::list::<MatchResource, _>(conn).await.unwrap().is_empty());
}
