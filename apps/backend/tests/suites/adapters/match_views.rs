use touchline::adapters::matches_sea::{self, MatchScope};

use crate::support::factory::{record_score, seed_league, seed_match, seed_referee, seed_team};
use crate::support::test_state::{build_test_state, db};

#[tokio::test]
async fn views_join_names_and_optional_score() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let league = seed_league(conn, "Premier").await;
    let home = seed_team(conn, league.id, "Arsenal").await;
    let away = seed_team(conn, league.id, "Chelsea").await;
    let referee = seed_referee(conn, "Howard", "Webb").await;

    let played = seed_match(conn, league.id, home.id, away.id, Some(referee.id), 0).await;
    let pending = seed_match(conn, league.id, away.id, home.id, None, 7).await;
    record_score(conn, played.id, 2, 1).await;

    let views = matches_sea::list_views(conn, MatchScope::All).await.unwrap();
    assert_eq!(views.len(), 2);

    // newest first
    assert_eq!(views[0].id, pending.id);
    assert_eq!(views[0].home_team_name, "Chelsea");
    assert_eq!(views[0].referee_name(), None);
    assert_eq!(views[0].score(), None);

    assert_eq!(views[1].id, played.id);
    assert_eq!(views[1].league_name, "Premier");
    assert_eq!(views[1].away_team_name, "Chelsea");
    assert_eq!(views[1].referee_name().as_deref(), Some("Howard Webb"));
    assert_eq!(views[1].score(), Some((2, 1)));
}

#[tokio::test]
async fn scopes_filter_by_league_referee_and_team() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let premier = seed_league(conn, "Premier").await;
    let championship = seed_league(conn, "Championship").await;
    let arsenal = seed_team(conn, premier.id, "Arsenal").await;
    let chelsea = seed_team(conn, premier.id, "Chelsea").await;
    let leeds = seed_team(conn, championship.id, "Leeds").await;
    let hull = seed_team(conn, championship.id, "Hull").await;
    let referee = seed_referee(conn, "Mike", "Dean").await;

    let derby = seed_match(conn, premier.id, arsenal.id, chelsea.id, Some(referee.id), 0).await;
    let other = seed_match(conn, championship.id, leeds.id, hull.id, None, 1).await;

    let by_league = matches_sea::list_views(conn, MatchScope::League(championship.id))
        .await
        .unwrap();
    assert_eq!(by_league.iter().map(|m| m.id).collect::<Vec<_>>(), [other.id]);

    let by_referee = matches_sea::list_views(conn, MatchScope::Referee(referee.id))
        .await
        .unwrap();
    assert_eq!(by_referee.iter().map(|m| m.id).collect::<Vec<_>>(), [derby.id]);

    let by_team = matches_sea::list_views(conn, MatchScope::Team(chelsea.id))
        .await
        .unwrap();
    assert_eq!(by_team.iter().map(|m| m.id).collect::<Vec<_>>(), [derby.id]);
}
