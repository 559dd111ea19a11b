use touchline::adapters::match_stats_sea::MatchStatsInput;
use touchline::adapters::player_stats_sea::PlayerStatsInput;
use touchline::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use touchline::repos::{match_stats, player_stats};

use crate::support::factory::{record_player_line, seed_league, seed_match, seed_player, seed_team};
use crate::support::test_state::{build_test_state, db};

#[tokio::test]
async fn stats_default_until_recorded_and_require_the_match() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let league = seed_league(conn, "Liga").await;
    let home = seed_team(conn, league.id, "Betis").await;
    let away = seed_team(conn, league.id, "Sevilla").await;
    let fixture = seed_match(conn, league.id, home.id, away.id, None, 0).await;

    let stats = match_stats::get_or_default(conn, fixture.id).await.unwrap();
    assert_eq!((stats.home_score, stats.away_score), (0, 0));
    assert_eq!((stats.possession_home, stats.possession_away), (50, 50));

    let err = match_stats::get_or_default(conn, fixture.id + 100).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Match, _)));
}

#[tokio::test]
async fn one_sided_possession_is_balanced() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let league = seed_league(conn, "Liga").await;
    let home = seed_team(conn, league.id, "Betis").await;
    let away = seed_team(conn, league.id, "Sevilla").await;
    let fixture = seed_match(conn, league.id, home.id, away.id, None, 0).await;

    let stats = match_stats::upsert(
        conn,
        fixture.id,
        MatchStatsInput {
            possession_home: Some(70),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!((stats.possession_home, stats.possession_away), (70, 30));

    let stats = match_stats::upsert(
        conn,
        fixture.id,
        MatchStatsInput {
            possession_away: Some(45),
            fouls_home: Some(12),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!((stats.possession_home, stats.possession_away), (55, 45));
    assert_eq!(stats.fouls_home, 12);
}

#[tokio::test]
async fn possession_must_total_one_hundred() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let league = seed_league(conn, "Liga").await;
    let home = seed_team(conn, league.id, "Betis").await;
    let away = seed_team(conn, league.id, "Sevilla").await;
    let fixture = seed_match(conn, league.id, home.id, away.id, None, 0).await;

    let err = match_stats::upsert(
        conn,
        fixture.id,
        MatchStatsInput {
            possession_home: Some(60),
            possession_away: Some(60),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, DomainError::Validation(ValidationKind::Possession, _)));

    // nothing stored
    let stats = match_stats::get_or_default(conn, fixture.id).await.unwrap();
    assert_eq!(stats.possession_home, 50);
}

#[tokio::test]
async fn player_line_updates_merge_and_delete_reports_missing() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let league = seed_league(conn, "Liga").await;
    let home = seed_team(conn, league.id, "Betis").await;
    let away = seed_team(conn, league.id, "Sevilla").await;
    let joaquin = seed_player(conn, home.id, "Joaquin", "Sanchez", 17).await;
    let fixture = seed_match(conn, league.id, home.id, away.id, None, 0).await;

    record_player_line(conn, fixture.id, joaquin.id, 1, 0).await;
    let line = player_stats::upsert(
        conn,
        fixture.id,
        joaquin.id,
        PlayerStatsInput {
            yellow_cards: Some(1),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(line.goals, 1);
    assert_eq!(line.minutes_played, 90);
    assert_eq!(line.yellow_cards, 1);

    player_stats::delete(conn, fixture.id, joaquin.id).await.unwrap();
    let err = player_stats::delete(conn, fixture.id, joaquin.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::PlayerStats, _)));
}

#[tokio::test]
async fn player_line_needs_existing_match_and_player() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let league = seed_league(conn, "Liga").await;
    let home = seed_team(conn, league.id, "Betis").await;
    let away = seed_team(conn, league.id, "Sevilla").await;
    let fixture = seed_match(conn, league.id, home.id, away.id, None, 0).await;

    let err = player_stats::upsert(conn, fixture.id, 404, PlayerStatsInput::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Player, _)));

    let err = player_stats::list_for_match(conn, 404).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Match, _)));
}
