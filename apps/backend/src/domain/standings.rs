//! Win/draw/loss bookkeeping derived from recorded results.

use serde::Serialize;

use super::match_rules::Outcome;

pub const POINTS_PER_WIN: i64 = 3;
pub const POINTS_PER_DRAW: i64 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    pub played: i64,
    pub wins: i64,
    pub draws: i64,
    pub losses: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    pub points: i64,
}

impl Record {
    pub fn add_result(&mut self, scored: i32, conceded: i32) {
        self.played += 1;
        self.goals_for += i64::from(scored);
        self.goals_against += i64::from(conceded);
        match Outcome::from_goals(scored, conceded) {
            Outcome::Win => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Loss => self.losses += 1,
        }
        self.points = points(self.wins, self.draws);
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for - self.goals_against
    }
}

pub fn points(wins: i64, draws: i64) -> i64 {
    POINTS_PER_WIN * wins + POINTS_PER_DRAW * draws
}
