//! SeaORM adapters. Functions here return `DbErr`; the repos layer maps it.

pub mod crud_sea;
pub mod leagues_sea;
pub mod match_stats_sea;
pub mod matches_sea;
pub mod player_stats_sea;
pub mod players_sea;
pub mod referees_sea;
pub mod teams_sea;
pub mod users_sea;

pub use crud_sea::Resource;
