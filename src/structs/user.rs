use serde::{Deserialize, Serialize};

/// User object returned by `/users/me` and `/users/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub telegram_id: i64,
    pub first_name: String,
    pub username: Option<String>,
    /// Telegram avatar URL, or null when the user has none.
    pub photo_url: Option<String>,
    pub rating: i32,
    pub matches_played: u32,
    pub wins: u32,
    pub losses: u32,
    /// Registration timestamp. Not part of the placeholder user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl User {
    /// Stand-in user returned by `get_current_user()` when the backend cannot be reached.
    pub fn placeholder() -> Self {
        Self {
            id: 1,
            telegram_id: 123456789,
            first_name: "Тестовый".to_string(),
            username: Some("test_user".to_string()),
            photo_url: None,
            rating: 15,
            matches_played: 15,
            wins: 8,
            losses: 7,
            created_at: None,
        }
    }
}
