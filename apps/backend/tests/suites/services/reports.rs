use serde_json::json;
use touchline::reports::{list_reports, render_report, run_report, ReportKey};
use touchline::table::{SortDir, TableQuery};

use crate::support::factory::{
    record_player_line, record_score, seed_league, seed_match, seed_player, seed_referee,
    seed_team,
};
use crate::support::test_state::{build_test_state, db};

#[test]
fn catalog_lists_every_report_without_sql() {
    let catalog = serde_json::to_value(list_reports()).unwrap();
    let keys: Vec<&str> = catalog
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys.len(), ReportKey::ALL.len());
    assert!(keys.contains(&"league_standings"));
    assert!(catalog.to_string().to_lowercase().find("select ").is_none());
}

#[tokio::test]
async fn every_report_runs_on_an_empty_database() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);

    for key in ReportKey::ALL {
        run_report(conn, key)
            .await
            .unwrap_or_else(|e| panic!("{key} failed: {e}"));
    }
}

#[tokio::test]
async fn every_report_runs_on_a_populated_database() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let league = seed_league(conn, "Eredivisie").await;
    let ajax = seed_team(conn, league.id, "Ajax").await;
    let psv = seed_team(conn, league.id, "PSV").await;
    let striker = seed_player(conn, ajax.id, "Marco", "van Basten", 9).await;
    let referee = seed_referee(conn, "Bjorn", "Kuipers").await;
    let fixture = seed_match(conn, league.id, ajax.id, psv.id, Some(referee.id), 0).await;
    record_score(conn, fixture.id, 3, 0).await;
    record_player_line(conn, fixture.id, striker.id, 3, 0).await;

    for key in ReportKey::ALL {
        let rows = run_report(conn, key)
            .await
            .unwrap_or_else(|e| panic!("{key} failed: {e}"));
        assert!(!rows.is_empty(), "{key} should have rows");
    }
}

#[tokio::test]
async fn standings_award_three_for_a_win_and_one_for_a_draw() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let league = seed_league(conn, "Serie A").await;
    let juve = seed_team(conn, league.id, "Juventus").await;
    let roma = seed_team(conn, league.id, "Roma").await;
    let lazio = seed_team(conn, league.id, "Lazio").await;

    let m1 = seed_match(conn, league.id, juve.id, roma.id, None, 0).await;
    let m2 = seed_match(conn, league.id, roma.id, lazio.id, None, 7).await;
    // unplayed fixture: no stats row, not counted
    seed_match(conn, league.id, lazio.id, juve.id, None, 14).await;
    record_score(conn, m1.id, 2, 0).await;
    record_score(conn, m2.id, 1, 1).await;

    let rows = run_report(conn, ReportKey::LeagueStandings).await.unwrap();
    let table: Vec<_> = rows
        .iter()
        .map(|r| (r["team"].clone(), r["played"].clone(), r["points"].clone()))
        .collect();

    assert_eq!(
        table,
        [
            (json!("Juventus"), json!(1), json!(3)),
            (json!("Lazio"), json!(1), json!(1)),
            (json!("Roma"), json!(2), json!(1)),
        ]
    );
}

#[tokio::test]
async fn head_to_head_groups_each_pair_once() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let league = seed_league(conn, "Scottish").await;
    let celtic = seed_team(conn, league.id, "Celtic").await;
    let rangers = seed_team(conn, league.id, "Rangers").await;

    let a = seed_match(conn, league.id, celtic.id, rangers.id, None, 0).await;
    let b = seed_match(conn, league.id, rangers.id, celtic.id, None, 7).await;
    let c = seed_match(conn, league.id, celtic.id, rangers.id, None, 14).await;
    record_score(conn, a.id, 2, 1).await;
    record_score(conn, b.id, 0, 3).await;
    record_score(conn, c.id, 1, 1).await;

    let rows = run_report(conn, ReportKey::HeadToHead).await.unwrap();
    assert_eq!(rows.len(), 1);
    let pair = &rows[0];
    assert_eq!(pair["team_a"], "Celtic");
    assert_eq!(pair["team_b"], "Rangers");
    assert_eq!(pair["matches_played"], 3);
    assert_eq!(pair["team_a_wins"], 2);
    assert_eq!(pair["team_b_wins"], 0);
    assert_eq!(pair["draws"], 1);
}

#[tokio::test]
async fn rendered_report_filters_sorts_and_keys_rows() {
    let state = build_test_state().await.expect("state");
    let conn = db(&state);
    let league = seed_league(conn, "Premier").await;
    let spurs = seed_team(conn, league.id, "Spurs").await;
    let city = seed_team(conn, league.id, "City").await;
    let kane = seed_player(conn, spurs.id, "Harry", "Kane", 10).await;
    let son = seed_player(conn, spurs.id, "Heung-min", "Son", 7).await;
    let haaland = seed_player(conn, city.id, "Erling", "Haaland", 9).await;
    let fixture = seed_match(conn, league.id, spurs.id, city.id, None, 0).await;
    record_player_line(conn, fixture.id, kane.id, 2, 1).await;
    record_player_line(conn, fixture.id, son.id, 1, 2).await;
    record_player_line(conn, fixture.id, haaland.id, 3, 0).await;

    let query = TableQuery {
        search: "spurs".to_string(),
        sort: Some(("assists", SortDir::Desc)),
    };
    let output = render_report(conn, ReportKey::TopScorers, &query).await.unwrap();

    assert_eq!(output.name, "Top Scorers");
    let players: Vec<_> = output.rows.iter().map(|r| r.values["player"].clone()).collect();
    assert_eq!(players, [json!("Heung-min Son"), json!("Harry Kane")]);
    assert_eq!(output.rows[0].row_key, format!("row-{}", son.id));
}
