pub mod auth;
pub mod matches;
