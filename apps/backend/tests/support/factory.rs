//! Seed helpers built on the repos, so seeded rows pass the same validation
//! as API input.

use backend_test_support::unique_helpers::unique_str;
use sea_orm::ConnectionTrait;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};
use touchline::adapters::leagues_sea::{LeagueCreate, LeagueResource};
use touchline::adapters::match_stats_sea::MatchStatsInput;
use touchline::adapters::matches_sea::{MatchCreate, MatchResource};
use touchline::adapters::player_stats_sea::PlayerStatsInput;
use touchline::adapters::players_sea::{PlayerCreate, PlayerResource};
use touchline::adapters::referees_sea::{RefereeCreate, RefereeResource};
use touchline::adapters::teams_sea::{TeamCreate, TeamResource};
use touchline::entities::{leagues, match_stats, matches, player_match_stats, players, referees, teams};
use touchline::repos::{crud, match_stats as match_stats_repo, player_stats};

/// Kick-off of the first seeded fixture; later fixtures add whole days.
pub const SEASON_START: OffsetDateTime = datetime!(2024-08-10 15:00 UTC);

pub async fn seed_league(conn: &(impl ConnectionTrait + Send + Sync), name: &str) -> leagues::Model {
    crud::create::<LeagueResource, _>(
        conn,
        LeagueCreate {
            name: name.to_string(),
            city: "Manchester".to_string(),
            country: "England".to_string(),
        },
    )
    .await
    .expect("seed league")
}

pub async fn seed_team(
    conn: &(impl ConnectionTrait + Send + Sync),
    league_id: i32,
    name: &str,
) -> teams::Model {
    crud::create::<TeamResource, _>(
        conn,
        TeamCreate {
            name: name.to_string(),
            coach_name: unique_str("coach"),
            league_id,
        },
    )
    .await
    .expect("seed team")
}

pub async fn seed_player(
    conn: &(impl ConnectionTrait + Send + Sync),
    team_id: i32,
    first_name: &str,
    last_name: &str,
    jersey_number: i32,
) -> players::Model {
    crud::create::<PlayerResource, _>(
        conn,
        PlayerCreate {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age: 24,
            jersey_number,
            team_id,
        },
    )
    .await
    .expect("seed player")
}

pub async fn seed_referee(
    conn: &(impl ConnectionTrait + Send + Sync),
    first_name: &str,
    last_name: &str,
) -> referees::Model {
    crud::create::<RefereeResource, _>(
        conn,
        RefereeCreate {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            experience: Some("8 years".to_string()),
            certification_level: Some("FIFA".to_string()),
        },
    )
    .await
    .expect("seed referee")
}

/// Fixture `day` days after [`SEASON_START`].
pub async fn seed_match(
    conn: &(impl ConnectionTrait + Send + Sync),
    league_id: i32,
    home_team_id: i32,
    away_team_id: i32,
    referee_id: Option<i32>,
    day: i64,
) -> matches::Model {
    crud::create::<MatchResource, _>(
        conn,
        MatchCreate {
            date: SEASON_START + Duration::days(day),
            location: "Central Park".to_string(),
            league_id,
            home_team_id,
            away_team_id,
            referee_id,
        },
    )
    .await
    .expect("seed match")
}

pub async fn record_score(
    conn: &(impl ConnectionTrait + Send + Sync),
    match_id: i32,
    home_score: i32,
    away_score: i32,
) -> match_stats::Model {
    match_stats_repo::upsert(
        conn,
        match_id,
        MatchStatsInput {
            home_score: Some(home_score),
            away_score: Some(away_score),
            ..Default::default()
        },
    )
    .await
    .expect("record score")
}

pub async fn record_player_line(
    conn: &(impl ConnectionTrait + Send + Sync),
    match_id: i32,
    player_id: i32,
    goals: i32,
    assists: i32,
) -> player_match_stats::Model {
    player_stats::upsert(
        conn,
        match_id,
        player_id,
        PlayerStatsInput {
            goals: Some(goals),
            assists: Some(assists),
            minutes_played: Some(90),
            ..Default::default()
        },
    )
    .await
    .expect("record player line")
}
