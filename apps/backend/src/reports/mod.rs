//! Backend-only reporting: a static catalog of aggregate queries whose
//! results are shaped by [`crate::table`] before leaving the server.

pub mod catalog;
pub mod rows;

use sea_orm::{ConnectionTrait, FromQueryResult, Statement};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

pub use catalog::{list_reports, ReportDef, ReportKey, ReportSummary};
use rows::{
    AssignmentRow, CareerRow, DefenceRow, DisciplineRow, FixtureLine, FixtureRow, HeadToHeadRow,
    RosterRow, ScorerRow, StandingRow, VenueRow,
};

use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::table::{self, Column, KeyedRow, Row, TableQuery};

#[derive(Debug, Serialize)]
pub struct ReportOutput {
    pub key: ReportKey,
    pub name: &'static str,
    pub description: &'static str,
    pub columns: &'static [Column],
    pub rows: Vec<KeyedRow>,
}

fn to_row<T: Serialize>(value: T) -> Result<Row, DomainError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(DomainError::infra(
            InfraErrorKind::Other("ReportRow".into()),
            format!("report row serialized to {other} instead of an object"),
        )),
        Err(e) => Err(DomainError::infra(
            InfraErrorKind::Other("ReportRow".into()),
            format!("report row could not be serialized: {e}"),
        )),
    }
}

async fn fetch<T, C>(conn: &C, sql: &str) -> Result<Vec<T>, DomainError>
where
    T: FromQueryResult,
    C: ConnectionTrait + Send + Sync,
{
    let stmt = Statement::from_string(conn.get_database_backend(), sql);
    Ok(T::find_by_statement(stmt).all(conn).await?)
}

async fn fetch_rows<T, C>(conn: &C, sql: &str) -> Result<Vec<Row>, DomainError>
where
    T: FromQueryResult + Serialize,
    C: ConnectionTrait + Send + Sync,
{
    fetch::<T, C>(conn, sql)
        .await?
        .into_iter()
        .map(to_row)
        .collect()
}

/// Execute a report's SQL and return its raw rows in catalog order.
pub async fn run_report<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    key: ReportKey,
) -> Result<Vec<Row>, DomainError> {
    let sql = key.definition().sql;
    let rows = match key {
        ReportKey::TeamRosters => fetch_rows::<RosterRow, C>(conn, sql).await?,
        ReportKey::TopScorers => fetch_rows::<ScorerRow, C>(conn, sql).await?,
        ReportKey::LeagueStandings => fetch_rows::<StandingRow, C>(conn, sql).await?,
        ReportKey::LeastDisciplined => fetch_rows::<DisciplineRow, C>(conn, sql).await?,
        ReportKey::DefensiveTeams => fetch_rows::<DefenceRow, C>(conn, sql).await?,
        ReportKey::TeamSchedule => fetch::<FixtureRow, C>(conn, sql)
            .await?
            .into_iter()
            .map(|row| to_row(FixtureLine::from(row)))
            .collect::<Result<Vec<_>, _>>()?,
        ReportKey::RefereeGames => fetch_rows::<AssignmentRow, C>(conn, sql).await?,
        ReportKey::PlayerStats => fetch_rows::<CareerRow, C>(conn, sql).await?,
        ReportKey::VenueStats => fetch_rows::<VenueRow, C>(conn, sql).await?,
        ReportKey::HeadToHead => fetch_rows::<HeadToHeadRow, C>(conn, sql).await?,
    };

    debug!(report = %key, rows = rows.len(), "report executed");
    Ok(rows)
}

/// Run a report and shape it for display.
pub async fn render_report<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    key: ReportKey,
    query: &TableQuery,
) -> Result<ReportOutput, DomainError> {
    let def = key.definition();
    let rows = run_report(conn, key).await?;

    Ok(ReportOutput {
        key,
        name: def.name,
        description: def.description,
        columns: def.columns,
        rows: table::shape(rows, def.columns, query),
    })
}
