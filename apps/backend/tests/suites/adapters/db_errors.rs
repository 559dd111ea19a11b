use touchline::adapters::crud_sea;
use touchline::adapters::players_sea::{PlayerCreate, PlayerResource};
use touchline::adapters::teams_sea::{TeamCreate, TeamResource};
use touchline::errors::domain::{ConflictKind, DomainError, ValidationKind};
use touchline::infra::db_errors::map_db_err;

use crate::support::factory::{seed_league, seed_player, seed_team};
use crate::support::test_state::{build_test_state, db};

#[tokio::test]
async fn duplicate_jersey_in_team_maps_to_specific_conflict() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let league = seed_league(conn, "Scottish").await;
    let team = seed_team(conn, league.id, "Celtic").await;
    seed_player(conn, team.id, "Henrik", "Larsson", 7).await;

    let err = crud_sea::create::<PlayerResource, _>(
        conn,
        PlayerCreate {
            first_name: "Jimmy".to_string(),
            last_name: "Johnstone".to_string(),
            age: 22,
            jersey_number: 7,
            team_id: team.id,
        },
    )
    .await
    .expect_err("jersey 7 is taken");

    match map_db_err(err) {
        DomainError::Conflict(ConflictKind::JerseyNumberTaken, _) => {}
        other => panic!("expected jersey conflict, got {other:?}"),
    }
}

#[tokio::test]
async fn same_jersey_on_another_team_is_fine() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let league = seed_league(conn, "Scottish").await;
    let celtic = seed_team(conn, league.id, "Celtic").await;
    let rangers = seed_team(conn, league.id, "Rangers").await;

    seed_player(conn, celtic.id, "Henrik", "Larsson", 7).await;
    seed_player(conn, rangers.id, "Ally", "McCoist", 7).await;
}

#[tokio::test]
async fn unknown_parent_maps_to_foreign_key_validation() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);

    let err = crud_sea::create::<TeamResource, _>(
        conn,
        TeamCreate {
            name: "Orphans".to_string(),
            coach_name: "Nobody".to_string(),
            league_id: 999,
        },
    )
    .await
    .expect_err("league 999 does not exist");

    match map_db_err(err) {
        DomainError::Validation(ValidationKind::ForeignKey, _) => {}
        other => panic!("expected FK validation, got {other:?}"),
    }
}
