//! Repository functions generic over `ConnectionTrait`, speaking `DomainError`.

pub mod crud;
pub mod match_stats;
pub mod matches;
pub mod player_stats;
pub mod teams;
pub mod users;
