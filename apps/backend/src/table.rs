//! Searchable, sortable tables over JSON rows.
//!
//! Rows are JSON objects; columns name which fields are displayed. Search
//! and row-key rules follow JavaScript truthiness and `String(value)`
//! rendering so keys stay stable for clients diffing by them.

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::{Map, Value};

pub type Row = Map<String, Value>;

/// Fields consulted, in order, for an explicit row identity.
pub const ID_FIELDS: [&str; 6] = [
    "id",
    "match_id",
    "player_id",
    "team_id",
    "league_id",
    "referee_id",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    pub key: &'static str,
    pub header: &'static str,
}

impl Column {
    pub const fn new(key: &'static str, header: &'static str) -> Self {
        Self { key, header }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(SortDir::Asc),
            "desc" => Some(SortDir::Desc),
            _ => None,
        }
    }
}

/// Search and sort settings already checked against a column set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableQuery {
    pub search: String,
    pub sort: Option<(&'static str, SortDir)>,
}

impl TableQuery {
    /// Validate raw query-string values; the error is a client-facing message.
    pub fn parse(
        q: Option<&str>,
        sort: Option<&str>,
        dir: Option<&str>,
        columns: &[Column],
    ) -> Result<Self, String> {
        let dir = match dir {
            None | Some("") => SortDir::Asc,
            Some(raw) => SortDir::parse(raw)
                .ok_or_else(|| format!("Sort direction must be 'asc' or 'desc', got '{raw}'"))?,
        };

        let sort = match sort {
            None | Some("") => None,
            Some(raw) => {
                let column = columns
                    .iter()
                    .find(|c| c.key == raw)
                    .ok_or_else(|| format!("Unknown sort column '{raw}'"))?;
                Some((column.key, dir))
            }
        };

        Ok(Self {
            search: q.unwrap_or_default().to_string(),
            sort,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyedRow {
    pub row_key: String,
    pub values: Row,
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn render_number(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{}", f as i64),
        Some(f) => format!("{f}"),
        None => n.to_string(),
    }
}

/// `String(value)` as a browser would print it.
pub fn render(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => render_number(n),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Case-insensitive substring match against every field of the row.
pub fn matches_search(row: &Row, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    row.values()
        .any(|value| render(value).to_lowercase().contains(&needle))
}

fn compare_present(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        _ => render(a).to_lowercase().cmp(&render(b).to_lowercase()),
    }
}

/// Stable sort on one field; nulls (or missing fields) go last either way.
pub fn sort_rows(rows: &mut [Row], key: &str, dir: SortDir) {
    rows.sort_by(|a, b| {
        let left = a.get(key).filter(|v| !v.is_null());
        let right = b.get(key).filter(|v| !v.is_null());
        match (left, right) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => match dir {
                SortDir::Asc => compare_present(x, y),
                SortDir::Desc => compare_present(y, x),
            },
        }
    });
}

/// Stable identity for a rendered row.
///
/// 1. first truthy of [`ID_FIELDS`] gives `row-{value}`
/// 2. else truthy column values joined with `-` give `row-{content}-{index}`
/// 3. else `row-{index}`
pub fn row_key(row: &Row, columns: &[Column], index: usize) -> String {
    if let Some(id) = ID_FIELDS
        .iter()
        .filter_map(|field| row.get(*field))
        .find(|value| is_truthy(value))
    {
        return format!("row-{}", render(id));
    }

    let content = columns
        .iter()
        .filter_map(|column| row.get(column.key))
        .filter(|value| is_truthy(value))
        .map(render)
        .collect::<Vec<_>>()
        .join("-");

    if content.is_empty() {
        format!("row-{index}")
    } else {
        format!("row-{content}-{index}")
    }
}

/// Filter, sort and key rows for display.
pub fn shape(rows: Vec<Row>, columns: &[Column], query: &TableQuery) -> Vec<KeyedRow> {
    let mut rows: Vec<Row> = rows
        .into_iter()
        .filter(|row| matches_search(row, &query.search))
        .collect();

    if let Some((key, dir)) = query.sort {
        sort_rows(&mut rows, key, dir);
    }

    rows.into_iter()
        .enumerate()
        .map(|(index, values)| KeyedRow {
            row_key: row_key(&values, columns, index),
            values,
        })
        .collect()
}
