pub mod completion;
pub mod leaderboard;
pub mod roster;
pub mod types;
