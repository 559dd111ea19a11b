//! The fixed report catalog. SQL here is parameter-free and runs unchanged
//! on Postgres and SQLite; it is never sent to clients.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::table::Column;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKey {
    TeamRosters,
    TopScorers,
    LeagueStandings,
    LeastDisciplined,
    DefensiveTeams,
    TeamSchedule,
    RefereeGames,
    PlayerStats,
    VenueStats,
    HeadToHead,
}

impl ReportKey {
    pub const ALL: [ReportKey; 10] = [
        ReportKey::TeamRosters,
        ReportKey::TopScorers,
        ReportKey::LeagueStandings,
        ReportKey::LeastDisciplined,
        ReportKey::DefensiveTeams,
        ReportKey::TeamSchedule,
        ReportKey::RefereeGames,
        ReportKey::PlayerStats,
        ReportKey::VenueStats,
        ReportKey::HeadToHead,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReportKey::TeamRosters => "team_rosters",
            ReportKey::TopScorers => "top_scorers",
            ReportKey::LeagueStandings => "league_standings",
            ReportKey::LeastDisciplined => "least_disciplined",
            ReportKey::DefensiveTeams => "defensive_teams",
            ReportKey::TeamSchedule => "team_schedule",
            ReportKey::RefereeGames => "referee_games",
            ReportKey::PlayerStats => "player_stats",
            ReportKey::VenueStats => "venue_stats",
            ReportKey::HeadToHead => "head_to_head",
        }
    }

    pub fn definition(self) -> &'static ReportDef {
        match self {
            ReportKey::TeamRosters => &TEAM_ROSTERS,
            ReportKey::TopScorers => &TOP_SCORERS,
            ReportKey::LeagueStandings => &LEAGUE_STANDINGS,
            ReportKey::LeastDisciplined => &LEAST_DISCIPLINED,
            ReportKey::DefensiveTeams => &DEFENSIVE_TEAMS,
            ReportKey::TeamSchedule => &TEAM_SCHEDULE,
            ReportKey::RefereeGames => &REFEREE_GAMES,
            ReportKey::PlayerStats => &PLAYER_STATS,
            ReportKey::VenueStats => &VENUE_STATS,
            ReportKey::HeadToHead => &HEAD_TO_HEAD,
        }
    }
}

impl fmt::Display for ReportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("Unknown report '{s}'"))
    }
}

#[derive(Debug)]
pub struct ReportDef {
    pub key: ReportKey,
    pub name: &'static str,
    pub description: &'static str,
    pub columns: &'static [Column],
    pub(crate) sql: &'static str,
}

/// Catalog entry as listed to clients.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub key: ReportKey,
    pub name: &'static str,
    pub description: &'static str,
    pub columns: &'static [Column],
}

impl From<&ReportDef> for ReportSummary {
    fn from(def: &ReportDef) -> Self {
        Self {
            key: def.key,
            name: def.name,
            description: def.description,
            columns: def.columns,
        }
    }
}

pub fn list_reports() -> Vec<ReportSummary> {
    ReportKey::ALL
        .into_iter()
        .map(|key| ReportSummary::from(key.definition()))
        .collect()
}

static TEAM_ROSTERS: ReportDef = ReportDef {
    key: ReportKey::TeamRosters,
    name: "Team Rosters",
    description: "Every team with its players, by shirt number",
    columns: &[
        Column::new("team", "Team"),
        Column::new("player", "Player"),
        Column::new("jersey_number", "Jersey #"),
    ],
    sql: "SELECT t.id AS team_id, p.id AS player_id, t.name AS team, \
          p.first_name || ' ' || p.last_name AS player, p.jersey_number AS jersey_number \
          FROM teams t \
          JOIN players p ON p.team_id = t.id \
          ORDER BY t.name ASC, p.jersey_number ASC, p.id ASC",
};

static TOP_SCORERS: ReportDef = ReportDef {
    key: ReportKey::TopScorers,
    name: "Top Scorers",
    description: "Ten players with the most goals",
    columns: &[
        Column::new("player", "Player"),
        Column::new("team", "Team"),
        Column::new("goals", "Goals"),
        Column::new("assists", "Assists"),
    ],
    sql: "SELECT p.id AS player_id, p.first_name || ' ' || p.last_name AS player, t.name AS team, \
          COALESCE(SUM(pms.goals), 0) AS goals, COALESCE(SUM(pms.assists), 0) AS assists \
          FROM players p \
          JOIN teams t ON t.id = p.team_id \
          JOIN player_match_stats pms ON pms.player_id = p.id \
          GROUP BY p.id, p.first_name, p.last_name, t.name \
          HAVING COALESCE(SUM(pms.goals), 0) > 0 \
          ORDER BY goals DESC, assists DESC, player ASC \
          LIMIT 10",
};

// Each recorded match twice, once from each side: (team_id, scored, conceded).
static LEAGUE_STANDINGS: ReportDef = ReportDef {
    key: ReportKey::LeagueStandings,
    name: "League Standings",
    description: "Points table: 3 for a win, 1 for a draw",
    columns: &[
        Column::new("team", "Team"),
        Column::new("league", "League"),
        Column::new("played", "GP"),
        Column::new("wins", "W"),
        Column::new("draws", "D"),
        Column::new("losses", "L"),
        Column::new("goals_for", "GF"),
        Column::new("goals_against", "GA"),
        Column::new("points", "Pts"),
    ],
    sql: "SELECT t.id AS team_id, t.name AS team, l.name AS league, \
          COUNT(r.match_id) AS played, \
          COALESCE(SUM(CASE WHEN r.scored > r.conceded THEN 1 ELSE 0 END), 0) AS wins, \
          COALESCE(SUM(CASE WHEN r.scored = r.conceded THEN 1 ELSE 0 END), 0) AS draws, \
          COALESCE(SUM(CASE WHEN r.scored < r.conceded THEN 1 ELSE 0 END), 0) AS losses, \
          COALESCE(SUM(r.scored), 0) AS goals_for, \
          COALESCE(SUM(r.conceded), 0) AS goals_against, \
          COALESCE(SUM(CASE WHEN r.scored > r.conceded THEN 3 \
                            WHEN r.scored = r.conceded THEN 1 ELSE 0 END), 0) AS points \
          FROM teams t \
          JOIN leagues l ON l.id = t.league_id \
          LEFT JOIN ( \
            SELECT m.id AS match_id, m.home_team_id AS team_id, s.home_score AS scored, s.away_score AS conceded \
            FROM matches m JOIN match_stats s ON s.match_id = m.id \
            UNION ALL \
            SELECT m.id AS match_id, m.away_team_id AS team_id, s.away_score AS scored, s.home_score AS conceded \
            FROM matches m JOIN match_stats s ON s.match_id = m.id \
          ) r ON r.team_id = t.id \
          GROUP BY t.id, t.name, l.name \
          ORDER BY points DESC, wins DESC, team ASC",
};

static LEAST_DISCIPLINED: ReportDef = ReportDef {
    key: ReportKey::LeastDisciplined,
    name: "Least Disciplined Teams",
    description: "Five teams with the most cards",
    columns: &[
        Column::new("team", "Team"),
        Column::new("yellow_cards", "Yellow"),
        Column::new("red_cards", "Red"),
        Column::new("total_cards", "Total"),
    ],
    sql: "SELECT t.id AS team_id, t.name AS team, \
          COALESCE(SUM(pms.yellow_cards), 0) AS yellow_cards, \
          COALESCE(SUM(pms.red_cards), 0) AS red_cards, \
          COALESCE(SUM(pms.yellow_cards + pms.red_cards), 0) AS total_cards \
          FROM teams t \
          JOIN players p ON p.team_id = t.id \
          JOIN player_match_stats pms ON pms.player_id = p.id \
          GROUP BY t.id, t.name \
          ORDER BY total_cards DESC, red_cards DESC, team ASC \
          LIMIT 5",
};

static DEFENSIVE_TEAMS: ReportDef = ReportDef {
    key: ReportKey::DefensiveTeams,
    name: "Best Defensive Teams",
    description: "Five teams with the most clean sheets",
    columns: &[
        Column::new("team", "Team"),
        Column::new("clean_sheets", "Clean Sheets"),
        Column::new("goals_against", "Goals Against"),
    ],
    sql: "SELECT t.id AS team_id, t.name AS team, \
          COALESCE(SUM(CASE WHEN r.conceded = 0 THEN 1 ELSE 0 END), 0) AS clean_sheets, \
          COALESCE(SUM(r.conceded), 0) AS goals_against \
          FROM teams t \
          JOIN ( \
            SELECT m.home_team_id AS team_id, s.away_score AS conceded \
            FROM matches m JOIN match_stats s ON s.match_id = m.id \
            UNION ALL \
            SELECT m.away_team_id AS team_id, s.home_score AS conceded \
            FROM matches m JOIN match_stats s ON s.match_id = m.id \
          ) r ON r.team_id = t.id \
          GROUP BY t.id, t.name \
          ORDER BY clean_sheets DESC, goals_against ASC, team ASC \
          LIMIT 5",
};

static TEAM_SCHEDULE: ReportDef = ReportDef {
    key: ReportKey::TeamSchedule,
    name: "Match Schedule",
    description: "All fixtures with results where recorded",
    columns: &[
        Column::new("date", "Date"),
        Column::new("home_team", "Home"),
        Column::new("score", "Score"),
        Column::new("away_team", "Away"),
        Column::new("venue", "Venue"),
    ],
    sql: "SELECT m.id AS match_id, m.date AS date, th.name AS home_team, ta.name AS away_team, \
          m.location AS venue, s.home_score AS home_score, s.away_score AS away_score \
          FROM matches m \
          JOIN teams th ON th.id = m.home_team_id \
          JOIN teams ta ON ta.id = m.away_team_id \
          LEFT JOIN match_stats s ON s.match_id = m.id \
          ORDER BY m.date DESC, m.id DESC",
};

static REFEREE_GAMES: ReportDef = ReportDef {
    key: ReportKey::RefereeGames,
    name: "Referee Assignments",
    description: "Matches officiated by each referee",
    columns: &[
        Column::new("referee", "Referee"),
        Column::new("date", "Date"),
        Column::new("home_team", "Home"),
        Column::new("away_team", "Away"),
    ],
    sql: "SELECT r.id AS referee_id, m.id AS match_id, r.first_name || ' ' || r.last_name AS referee, \
          m.date AS date, th.name AS home_team, ta.name AS away_team \
          FROM referees r \
          JOIN matches m ON m.referee_id = r.id \
          JOIN teams th ON th.id = m.home_team_id \
          JOIN teams ta ON ta.id = m.away_team_id \
          ORDER BY r.last_name ASC, r.first_name ASC, m.date DESC, m.id DESC",
};

static PLAYER_STATS: ReportDef = ReportDef {
    key: ReportKey::PlayerStats,
    name: "Player Career Stats",
    description: "Totals across every recorded match",
    columns: &[
        Column::new("player", "Player"),
        Column::new("team", "Team"),
        Column::new("games_played", "GP"),
        Column::new("goals", "Goals"),
        Column::new("assists", "Assists"),
        Column::new("yellow_cards", "YC"),
        Column::new("red_cards", "RC"),
    ],
    sql: "SELECT p.id AS player_id, p.first_name || ' ' || p.last_name AS player, t.name AS team, \
          COUNT(pms.match_id) AS games_played, \
          COALESCE(SUM(pms.goals), 0) AS goals, \
          COALESCE(SUM(pms.assists), 0) AS assists, \
          COALESCE(SUM(pms.yellow_cards), 0) AS yellow_cards, \
          COALESCE(SUM(pms.red_cards), 0) AS red_cards \
          FROM players p \
          JOIN teams t ON t.id = p.team_id \
          LEFT JOIN player_match_stats pms ON pms.player_id = p.id \
          GROUP BY p.id, p.first_name, p.last_name, t.name \
          ORDER BY goals DESC, assists DESC, player ASC",
};

static VENUE_STATS: ReportDef = ReportDef {
    key: ReportKey::VenueStats,
    name: "Venue Statistics",
    description: "Results and scoring by ground",
    columns: &[
        Column::new("venue", "Venue"),
        Column::new("matches_played", "Matches"),
        Column::new("home_wins", "Home Wins"),
        Column::new("away_wins", "Away Wins"),
        Column::new("draws", "Draws"),
        Column::new("avg_goals", "Avg Goals"),
    ],
    sql: "SELECT m.location AS venue, COUNT(*) AS matches_played, \
          COALESCE(SUM(CASE WHEN s.home_score > s.away_score THEN 1 ELSE 0 END), 0) AS home_wins, \
          COALESCE(SUM(CASE WHEN s.home_score < s.away_score THEN 1 ELSE 0 END), 0) AS away_wins, \
          COALESCE(SUM(CASE WHEN s.home_score = s.away_score THEN 1 ELSE 0 END), 0) AS draws, \
          CAST(ROUND(AVG(s.home_score + s.away_score), 2) AS DOUBLE PRECISION) AS avg_goals \
          FROM matches m \
          LEFT JOIN match_stats s ON s.match_id = m.id \
          GROUP BY m.location \
          ORDER BY matches_played DESC, venue ASC",
};

// Pairs are unordered: the lower team id is always side A.
static HEAD_TO_HEAD: ReportDef = ReportDef {
    key: ReportKey::HeadToHead,
    name: "Head to Head",
    description: "Record between every pair of teams that have met",
    columns: &[
        Column::new("team_a", "Team A"),
        Column::new("team_b", "Team B"),
        Column::new("matches_played", "Matches"),
        Column::new("team_a_wins", "A Wins"),
        Column::new("team_b_wins", "B Wins"),
        Column::new("draws", "Draws"),
    ],
    sql: "SELECT pair.team_a_id AS team_a_id, pair.team_b_id AS team_b_id, \
          ta.name AS team_a, tb.name AS team_b, COUNT(*) AS matches_played, \
          COALESCE(SUM(CASE WHEN pair.a_goals > pair.b_goals THEN 1 ELSE 0 END), 0) AS team_a_wins, \
          COALESCE(SUM(CASE WHEN pair.a_goals < pair.b_goals THEN 1 ELSE 0 END), 0) AS team_b_wins, \
          COALESCE(SUM(CASE WHEN pair.a_goals = pair.b_goals THEN 1 ELSE 0 END), 0) AS draws \
          FROM ( \
            SELECT \
              CASE WHEN m.home_team_id < m.away_team_id THEN m.home_team_id ELSE m.away_team_id END AS team_a_id, \
              CASE WHEN m.home_team_id < m.away_team_id THEN m.away_team_id ELSE m.home_team_id END AS team_b_id, \
              CASE WHEN m.home_team_id < m.away_team_id THEN s.home_score ELSE s.away_score END AS a_goals, \
              CASE WHEN m.home_team_id < m.away_team_id THEN s.away_score ELSE s.home_score END AS b_goals \
            FROM matches m \
            LEFT JOIN match_stats s ON s.match_id = m.id \
          ) pair \
          JOIN teams ta ON ta.id = pair.team_a_id \
          JOIN teams tb ON tb.id = pair.team_b_id \
          GROUP BY pair.team_a_id, pair.team_b_id, ta.name, tb.name \
          ORDER BY matches_played DESC, team_a ASC, team_b ASC",
};
