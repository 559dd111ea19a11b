use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::{assert_problem, assert_problem_detail};
use serde_json::{json, Value};

use crate::common::{json_body, keys};
use crate::support::factory::{seed_league, seed_player, seed_referee, seed_team};
use crate::support::test_state::db;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn league_lifecycle() {
    let state = build_test_state().await.expect("state");
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/leagues")
        .set_json(json!({"name": "Premier League", "city": "London", "country": "England"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = json_body(resp).await;
    let id = created["id"].as_i64().expect("generated id");
    assert_eq!(keys(&created), ["city", "country", "id", "name"]);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/leagues/{id}"))
        .set_json(json!({"city": "Manchester"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = json_body(resp).await;
    assert_eq!(updated["city"], "Manchester");
    assert_eq!(updated["name"], "Premier League");

    let req = test::TestRequest::get().uri(&format!("/api/leagues/{id}")).to_request();
    let fetched = json_body(test::call_service(&app, req).await).await;
    assert_eq!(fetched, updated);

    let req = test::TestRequest::delete().uri(&format!("/api/leagues/{id}")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get().uri(&format!("/api/leagues/{id}")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_detail(
        resp,
        "LEAGUE_NOT_FOUND",
        StatusCode::NOT_FOUND,
        &format!("League {id} not found"),
    )
    .await;
}

#[actix_web::test]
async fn empty_patch_is_a_no_op() {
    let state = build_test_state().await.expect("state");
    let league = seed_league(db(&state), "Ligue 1").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::patch()
        .uri(&format!("/api/leagues/{}", league.id))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["name"], "Ligue 1");
    assert_eq!(body["city"], league.city);
}

#[actix_web::test]
async fn blank_required_text_is_validation_error() {
    let state = build_test_state().await.expect("state");
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/referees")
        .set_json(json!({"first_name": " ", "last_name": "Oliver"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_detail(
        resp,
        "VALIDATION_ERROR",
        StatusCode::BAD_REQUEST,
        "first_name must not be blank",
    )
    .await;
}

#[actix_web::test]
async fn team_with_unknown_league_is_fk_violation() {
    let state = build_test_state().await.expect("state");
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/teams")
        .set_json(json!({"name": "Nomads", "coach_name": "Nobody", "league_id": 12345}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "FK_VIOLATION", StatusCode::BAD_REQUEST).await;
}

#[actix_web::test]
async fn duplicate_jersey_is_conflict() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let league = seed_league(conn, "Serie A").await;
    let team = seed_team(conn, league.id, "Napoli").await;
    seed_player(conn, team.id, "Diego", "Maradona", 10).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/players")
        .set_json(json!({
            "first_name": "Marek",
            "last_name": "Hamsik",
            "age": 25,
            "jersey_number": 10,
            "team_id": team.id
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "JERSEY_NUMBER_TAKEN", StatusCode::CONFLICT).await;
}

#[actix_web::test]
async fn parent_listings_filter_and_404_for_missing_parent() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let serie_a = seed_league(conn, "Serie A").await;
    let liga = seed_league(conn, "Liga").await;
    let napoli = seed_team(conn, serie_a.id, "Napoli").await;
    seed_team(conn, liga.id, "Valencia").await;
    seed_player(conn, napoli.id, "Diego", "Maradona", 10).await;
    seed_player(conn, napoli.id, "Ciro", "Ferrara", 2).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/leagues/{}/teams", serie_a.id))
        .to_request();
    let teams = json_body(test::call_service(&app, req).await).await;
    let names: Vec<&Value> = teams.as_array().unwrap().iter().map(|t| &t["name"]).collect();
    assert_eq!(names, [&json!("Napoli")]);

    let req = test::TestRequest::get()
        .uri(&format!("/api/teams/{}/players", napoli.id))
        .to_request();
    let players = json_body(test::call_service(&app, req).await).await;
    let jerseys: Vec<i64> = players
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["jersey_number"].as_i64().unwrap())
        .collect();
    assert_eq!(jerseys, [2, 10]);

    let req = test::TestRequest::get().uri("/api/leagues/999/teams").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "LEAGUE_NOT_FOUND", StatusCode::NOT_FOUND).await;

    let req = test::TestRequest::get().uri("/api/referees/999/matches").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem(resp, "REFEREE_NOT_FOUND", StatusCode::NOT_FOUND).await;
}

#[actix_web::test]
async fn referee_patch_null_clears_field() {
    let state = build_test_state().await.expect("state");
    let referee = seed_referee(db(&state), "Anthony", "Taylor").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::patch()
        .uri(&format!("/api/referees/{}", referee.id))
        .set_json(json!({"experience": null}))
        .to_request();
    let body = json_body(test::call_service(&app, req).await).await;
    assert_eq!(body["experience"], Value::Null);
    assert_eq!(body["certification_level"], "FIFA");
}

#[actix_web::test]
async fn deleting_unknown_row_is_not_found() {
    let state = build_test_state().await.expect("state");
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::delete().uri("/api/players/55").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_detail(resp, "PLAYER_NOT_FOUND", StatusCode::NOT_FOUND, "Player 55 not found")
        .await;
}
