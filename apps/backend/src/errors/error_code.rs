//! Error codes for the Touchline API.
//!
//! Every code that can appear in a problem body lives here. Strings are
//! SCREAMING_SNAKE_CASE and map 1:1 to the `code` field of responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Username or password missing from the request
    MissingCredentials,
    /// Unknown user or wrong password (deliberately indistinguishable)
    InvalidCredentials,

    // Request Validation
    /// Path id is not a positive integer
    InvalidId,
    /// Query string parameter could not be used
    InvalidQuery,
    /// Home and away possession do not add up to 100
    InvalidPossession,
    /// A match cannot have the same team on both sides
    SameTeams,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    LeagueNotFound,
    TeamNotFound,
    PlayerNotFound,
    RefereeNotFound,
    MatchNotFound,
    /// No stats row for the (match, player) pair
    PlayerStatsNotFound,
    UserNotFound,
    ReportNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    UsernameTaken,
    JerseyNumberTaken,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // Database Constraint Violations
    /// Unique constraint violation (SQLSTATE 23505)
    UniqueViolation,
    /// Foreign key constraint violation (SQLSTATE 23503)
    FkViolation,
    /// Check constraint violation (SQLSTATE 23514)
    CheckViolation,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "MISSING_CREDENTIALS",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",

            Self::InvalidId => "INVALID_ID",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::InvalidPossession => "INVALID_POSSESSION",
            Self::SameTeams => "SAME_TEAMS",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::LeagueNotFound => "LEAGUE_NOT_FOUND",
            Self::TeamNotFound => "TEAM_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::RefereeNotFound => "REFEREE_NOT_FOUND",
            Self::MatchNotFound => "MATCH_NOT_FOUND",
            Self::PlayerStatsNotFound => "PLAYER_STATS_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::ReportNotFound => "REPORT_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::JerseyNumberTaken => "JERSEY_NUMBER_TAKEN",
            Self::Conflict => "CONFLICT",

            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::FkViolation => "FK_VIOLATION",
            Self::CheckViolation => "CHECK_VIOLATION",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
