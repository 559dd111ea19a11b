pub mod leagues;
pub mod match_stats;
pub mod matches;
pub mod player_match_stats;
pub mod players;
pub mod referees;
pub mod teams;
pub mod users;

pub use leagues::Entity as Leagues;
pub use leagues::Model as League;
pub use match_stats::Entity as MatchStatsTable;
pub use match_stats::Model as MatchStats;
pub use matches::Entity as Matches;
pub use matches::Model as Match;
pub use player_match_stats::Entity as PlayerMatchStatsTable;
pub use player_match_stats::Model as PlayerMatchStats;
pub use players::Entity as Players;
pub use players::Model as Player;
pub use referees::Entity as Referees;
pub use referees::Model as Referee;
pub use teams::Entity as Teams;
pub use teams::Model as Team;
pub use users::Entity as Users;
pub use users::Model as User;
