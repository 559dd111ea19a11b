use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::{assert_problem, assert_problem_detail};
use backend_test_support::unique_helpers::unique_username;
use serde_json::json;

use crate::common::json_body;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn register_then_login() {
    let state = build_test_state().await.expect("state");
    let app = create_test_app(state).with_prod_routes().build().await;
    let username = unique_username("coach");

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({"username": username, "password": "pa55word"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body, json!({"message": "Registration successful", "username": username}));

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"username": username, "password": "pa55word"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["message"], "Login successful");
}

#[actix_web::test]
async fn duplicate_username_is_conflict() {
    let state = build_test_state().await.expect("state");
    let app = create_test_app(state).with_prod_routes().build().await;
    let username = unique_username("coach");

    for expected in [StatusCode::OK, StatusCode::CONFLICT] {
        let req = test::TestRequest::post()
            .uri("/api/register")
            .set_json(json!({"username": username, "password": "pw"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        if expected == StatusCode::OK {
            assert_eq!(resp.status(), expected);
        } else {
            assert_problem_detail(resp, "USERNAME_TAKEN", expected, "already taken").await;
        }
    }
}

#[actix_web::test]
async fn login_failures_share_one_detail() {
    let state = build_test_state().await.expect("state");
    let app = create_test_app(state).with_prod_routes().build().await;
    let username = unique_username("coach");

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({"username": username, "password": "right"}))
        .to_request();
    test::call_service(&app, req).await;

    let attempts = [
        json!({"username": username, "password": "wrong"}),
        json!({"username": "ghost", "password": "right"}),
    ];
    for body in attempts {
        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let problem = assert_problem(resp, "INVALID_CREDENTIALS", StatusCode::UNAUTHORIZED).await;
        assert_eq!(problem.detail, "Invalid username or password");
    }
}

#[actix_web::test]
async fn missing_credentials_are_bad_request() {
    let state = build_test_state().await.expect("state");
    let app = create_test_app(state).with_prod_routes().build().await;

    for (uri, body) in [
        ("/api/register", json!({"username": "coach"})),
        ("/api/login", json!({"password": "pw"})),
        ("/api/register", json!({"username": "  ", "password": "pw"})),
    ] {
        let req = test::TestRequest::post().uri(uri).set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_detail(
            resp,
            "MISSING_CREDENTIALS",
            StatusCode::BAD_REQUEST,
            "Username and password are required",
        )
        .await;
    }
}
