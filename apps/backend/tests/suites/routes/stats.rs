use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::{assert_problem, assert_problem_detail};
use serde_json::json;

use crate::common::json_body;
use crate::support::factory::{seed_league, seed_match, seed_player, seed_team};
use crate::support::test_state::db;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn match_stats_default_then_balance_possession() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let league = seed_league(conn, "Liga").await;
    let home = seed_team(conn, league.id, "Barcelona").await;
    let away = seed_team(conn, league.id, "Madrid").await;
    let fixture = seed_match(conn, league.id, home.id, away.id, None, 0).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let uri = format!("/api/matches/{}/stats", fixture.id);
    let req = test::TestRequest::get().uri(&uri).to_request();
    let body = json_body(test::call_service(&app, req).await).await;
    assert_eq!(body["possession_home"], 50);
    assert_eq!(body["home_score"], 0);

    let req = test::TestRequest::put()
        .uri(&uri)
        .set_json(json!({"possession_home": 70, "home_score": 5}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["possession_home"], 70);
    assert_eq!(body["possession_away"], 30);
    assert_eq!(body["home_score"], 5);

    let req = test::TestRequest::put()
        .uri(&uri)
        .set_json(json!({"possession_home": 80, "possession_away": 30}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "INVALID_POSSESSION", StatusCode::BAD_REQUEST).await;

    let req = test::TestRequest::put()
        .uri(&uri)
        .set_json(json!({"fouls_away": -2}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_detail(resp, "VALIDATION_ERROR", StatusCode::BAD_REQUEST, "fouls_away").await;
}

#[actix_web::test]
async fn stats_for_missing_match_is_not_found() {
    let state = build_test_state().await.expect("state");
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/api/matches/404/stats").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "MATCH_NOT_FOUND", StatusCode::NOT_FOUND).await;
}

#[actix_web::test]
async fn player_stat_lines_round_trip_through_routes() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let league = seed_league(conn, "Liga").await;
    let home = seed_team(conn, league.id, "Barcelona").await;
    let away = seed_team(conn, league.id, "Madrid").await;
    let messi = seed_player(conn, home.id, "Lionel", "Messi", 10).await;
    let fixture = seed_match(conn, league.id, home.id, away.id, None, 0).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let line_uri = format!("/api/matches/{}/player-stats/{}", fixture.id, messi.id);
    let req = test::TestRequest::put()
        .uri(&line_uri)
        .set_json(json!({"goals": 3, "minutes_played": 90}))
        .to_request();
    let body = json_body(test::call_service(&app, req).await).await;
    assert_eq!(body["goals"], 3);
    assert_eq!(body["assists"], 0);

    let req = test::TestRequest::get()
        .uri(&format!("/api/matches/{}/player-stats", fixture.id))
        .to_request();
    let body = json_body(test::call_service(&app, req).await).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["player_id"], messi.id);

    let req = test::TestRequest::get()
        .uri(&format!("/api/players/{}/stats", messi.id))
        .to_request();
    let body = json_body(test::call_service(&app, req).await).await;
    assert_eq!(body[0]["match_id"], fixture.id);
    assert_eq!(body[0]["home_team_name"], "Barcelona");

    let req = test::TestRequest::delete().uri(&line_uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete().uri(&line_uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "PLAYER_STATS_NOT_FOUND", StatusCode::NOT_FOUND).await;
}

#[actix_web::test]
async fn player_id_segment_is_validated() {
    let state = build_test_state().await.expect("state");
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::delete()
        .uri("/api/matches/1/player-stats/abc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "INVALID_ID", StatusCode::BAD_REQUEST).await;
}
