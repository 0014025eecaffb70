pub mod client;
pub mod config;
pub mod identity;
pub mod leaderboard;
pub mod matches;
pub mod user;
