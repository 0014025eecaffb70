//! Rust SDK for the Dribbling matchmaking API behind the Telegram Mini App.
//!
//! ```no_run
//! use dribbling_client::{Client, ClientOptions, StaticIdentity};
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), dribbling_client::ApiError> {
//! let client = Client::new(ClientOptions {
//!     base_url: Some("https://api.example.com".to_string()),
//!     identity: Arc::new(StaticIdentity("query_id=...".to_string())),
//!     ..ClientOptions::default()
//! })?;
//!
//! let user = client.get_current_user().await;
//! let matches = client.get_matches(&serde_json::json!({ "city": "Пенджикент" })).await?;
//! # let _ = (user, matches);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod fallback;
pub mod format;
mod structs;

pub use errors::ApiError;
pub use fallback::degrade_on_failure;
pub use format::{format_date, players_text};
pub use structs::client::{
    Client, ClientOptions, RequestOptions, DEFAULT_LEADERBOARD_LIMIT, DEFAULT_LEADERBOARD_OFFSET,
    DEFAULT_USER_MATCHES_STATUS,
};
pub use structs::config::{resolve_base_url, AppConfig, DEFAULT_BASE_URL};
pub use structs::identity::{
    IdentitySource, NoIdentity, SharedIdentity, StaticIdentity, IDENTITY_HEADER,
};
pub use structs::leaderboard::{CurrentUserSummary, LeaderboardEntry, LeaderboardResult};
pub use structs::matches::{Cities, Match, MatchFilters, NewMatch};
pub use structs::user::User;
