use touchline::domain::Outcome;
use touchline::errors::domain::{DomainError, NotFoundKind};
use touchline::repos::teams;

use crate::support::factory::{record_score, seed_league, seed_match, seed_team};
use crate::support::test_state::{build_test_state, db};

#[tokio::test]
async fn schedule_reads_from_the_team_side() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let league = seed_league(conn, "Bundesliga").await;
    let bayern = seed_team(conn, league.id, "Bayern").await;
    let dortmund = seed_team(conn, league.id, "Dortmund").await;

    let first = seed_match(conn, league.id, bayern.id, dortmund.id, None, 0).await;
    let second = seed_match(conn, league.id, dortmund.id, bayern.id, None, 7).await;
    let third = seed_match(conn, league.id, bayern.id, dortmund.id, None, 14).await;
    record_score(conn, first.id, 1, 0).await;
    record_score(conn, second.id, 3, 1).await;

    let schedule = teams::schedule(conn, dortmund.id).await.unwrap();
    let ids: Vec<i32> = schedule.iter().map(|e| e.match_id).collect();
    assert_eq!(ids, [third.id, second.id, first.id]);

    assert_eq!(schedule[0].score, "TBD");
    assert_eq!(schedule[0].outcome, None);

    assert!(schedule[1].is_home);
    assert_eq!(schedule[1].opponent, "Bayern");
    assert_eq!(schedule[1].score, "3 - 1");
    assert_eq!(schedule[1].outcome, Some(Outcome::Win));

    assert!(!schedule[2].is_home);
    assert_eq!(schedule[2].outcome, Some(Outcome::Loss));
}

#[tokio::test]
async fn record_counts_only_recorded_results() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let league = seed_league(conn, "Bundesliga").await;
    let bayern = seed_team(conn, league.id, "Bayern").await;
    let dortmund = seed_team(conn, league.id, "Dortmund").await;
    let leipzig = seed_team(conn, league.id, "Leipzig").await;

    let a = seed_match(conn, league.id, bayern.id, dortmund.id, None, 0).await;
    let b = seed_match(conn, league.id, leipzig.id, bayern.id, None, 7).await;
    let c = seed_match(conn, league.id, bayern.id, leipzig.id, None, 14).await;
    seed_match(conn, league.id, dortmund.id, bayern.id, None, 21).await;
    record_score(conn, a.id, 4, 0).await;
    record_score(conn, b.id, 2, 2).await;
    record_score(conn, c.id, 0, 1).await;

    let summary = teams::record(conn, bayern.id).await.unwrap();
    assert_eq!(summary.team_name, "Bayern");
    let record = summary.record;
    assert_eq!(record.played, 3);
    assert_eq!((record.wins, record.draws, record.losses), (1, 1, 1));
    assert_eq!((record.goals_for, record.goals_against), (6, 3));
    assert_eq!(record.points, 4);
}

#[tokio::test]
async fn unknown_team_is_not_found() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);

    let err = teams::record(conn, 31).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Team, _)));
    let err = teams::schedule(conn, 31).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Team, _)));
}
