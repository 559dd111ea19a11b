//! Match table metadata plus the joined read model used by list endpoints.

use sea_orm::sea_query::{Alias, Cond, Expr, JoinType, Order, Query, SelectStatement};
use sea_orm::{ConnectionTrait, FromQueryResult, NotSet, QueryOrder, Select, Set};
use time::{OffsetDateTime, UtcOffset};

use super::crud_sea::Resource;
use crate::entities::{leagues, match_stats, matches, referees, teams};
use crate::errors::domain::NotFoundKind;

pub mod dto;

pub use dto::{MatchCreate, MatchPatch};

pub struct MatchResource;

impl Resource for MatchResource {
    type Entity = matches::Entity;
    type Model = matches::Model;
    type ActiveModel = matches::ActiveModel;
    type Create = MatchCreate;
    type Patch = MatchPatch;

    const LABEL: &'static str = "Match";

    fn not_found_kind() -> NotFoundKind {
        NotFoundKind::Match
    }

    fn id_column() -> matches::Column {
        matches::Column::Id
    }

    fn new_active(input: MatchCreate) -> matches::ActiveModel {
        matches::ActiveModel {
            id: NotSet,
            date: Set(input.date.to_offset(UtcOffset::UTC)),
            location: Set(input.location),
            league_id: Set(input.league_id),
            home_team_id: Set(input.home_team_id),
            away_team_id: Set(input.away_team_id),
            referee_id: Set(input.referee_id),
        }
    }

    fn apply_patch(active: &mut matches::ActiveModel, patch: MatchPatch) {
        if let Some(date) = patch.date {
            active.date = Set(date.to_offset(UtcOffset::UTC));
        }
        if let Some(location) = patch.location {
            active.location = Set(location);
        }
        if let Some(league_id) = patch.league_id {
            active.league_id = Set(league_id);
        }
        if let Some(home_team_id) = patch.home_team_id {
            active.home_team_id = Set(home_team_id);
        }
        if let Some(away_team_id) = patch.away_team_id {
            active.away_team_id = Set(away_team_id);
        }
        if let Some(referee_id) = patch.referee_id {
            active.referee_id = Set(referee_id);
        }
    }

    /// Most recent first
    fn order(query: Select<matches::Entity>) -> Select<matches::Entity> {
        query
            .order_by_desc(matches::Column::Date)
            .order_by_desc(matches::Column::Id)
    }
}

/// Which matches a view listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchScope {
    All,
    League(i32),
    Referee(i32),
    /// Home or away
    Team(i32),
}

/// One match joined to its league, teams, referee and (optional) stats row.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct MatchViewRow {
    pub id: i32,
    pub date: OffsetDateTime,
    pub location: String,
    pub league_id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub referee_id: Option<i32>,
    pub league_name: String,
    pub home_team_name: String,
    pub away_team_name: String,
    pub referee_first_name: Option<String>,
    pub referee_last_name: Option<String>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
}

impl MatchViewRow {
    pub fn referee_name(&self) -> Option<String> {
        match (&self.referee_first_name, &self.referee_last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            _ => None,
        }
    }

    /// `None` until a stats row exists
    pub fn score(&self) -> Option<(i32, i32)> {
        self.home_score.zip(self.away_score)
    }
}

fn view_statement(scope: MatchScope) -> SelectStatement {
    let home = Alias::new("home_team");
    let away = Alias::new("away_team");

    let mut stmt = Query::select()
        .columns([
            (matches::Entity, matches::Column::Id),
            (matches::Entity, matches::Column::Date),
            (matches::Entity, matches::Column::Location),
            (matches::Entity, matches::Column::LeagueId),
            (matches::Entity, matches::Column::HomeTeamId),
            (matches::Entity, matches::Column::AwayTeamId),
            (matches::Entity, matches::Column::RefereeId),
        ])
        .expr_as(
            Expr::col((leagues::Entity, leagues::Column::Name)),
            Alias::new("league_name"),
        )
        .expr_as(
            Expr::col((home.clone(), teams::Column::Name)),
            Alias::new("home_team_name"),
        )
        .expr_as(
            Expr::col((away.clone(), teams::Column::Name)),
            Alias::new("away_team_name"),
        )
        .expr_as(
            Expr::col((referees::Entity, referees::Column::FirstName)),
            Alias::new("referee_first_name"),
        )
        .expr_as(
            Expr::col((referees::Entity, referees::Column::LastName)),
            Alias::new("referee_last_name"),
        )
        .expr_as(
            Expr::col((match_stats::Entity, match_stats::Column::HomeScore)),
            Alias::new("home_score"),
        )
        .expr_as(
            Expr::col((match_stats::Entity, match_stats::Column::AwayScore)),
            Alias::new("away_score"),
        )
        .from(matches::Entity)
        .inner_join(
            leagues::Entity,
            Expr::col((leagues::Entity, leagues::Column::Id))
                .equals((matches::Entity, matches::Column::LeagueId)),
        )
        .join_as(
            JoinType::InnerJoin,
            teams::Entity,
            home.clone(),
            Expr::col((home, teams::Column::Id))
                .equals((matches::Entity, matches::Column::HomeTeamId)),
        )
        .join_as(
            JoinType::InnerJoin,
            teams::Entity,
            away.clone(),
            Expr::col((away, teams::Column::Id))
                .equals((matches::Entity, matches::Column::AwayTeamId)),
        )
        .left_join(
            referees::Entity,
            Expr::col((referees::Entity, referees::Column::Id))
                .equals((matches::Entity, matches::Column::RefereeId)),
        )
        .left_join(
            match_stats::Entity,
            Expr::col((match_stats::Entity, match_stats::Column::MatchId))
                .equals((matches::Entity, matches::Column::Id)),
        )
        .order_by((matches::Entity, matches::Column::Date), Order::Desc)
        .order_by((matches::Entity, matches::Column::Id), Order::Desc)
        .to_owned();

    match scope {
        MatchScope::All => {}
        MatchScope::League(id) => {
            stmt.and_where(Expr::col((matches::Entity, matches::Column::LeagueId)).eq(id));
        }
        MatchScope::Referee(id) => {
            stmt.and_where(Expr::col((matches::Entity, matches::Column::RefereeId)).eq(id));
        }
        MatchScope::Team(id) => {
            stmt.cond_where(
                Cond::any()
                    .add(Expr::col((matches::Entity, matches::Column::HomeTeamId)).eq(id))
                    .add(Expr::col((matches::Entity, matches::Column::AwayTeamId)).eq(id)),
            );
        }
    }

    stmt
}

pub async fn list_views<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    scope: MatchScope,
) -> Result<Vec<MatchViewRow>, sea_orm::DbErr> {
    let backend = conn.get_database_backend();
    MatchViewRow::find_by_statement(backend.build(&view_statement(scope)))
        .all(conn)
        .await
}
