use serde::{Deserialize, Serialize};

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub wins: u32,
    /// Percentage of matches won, rounded to one decimal by the backend.
    pub win_rate: f64,
    pub rating: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub losses: Option<u32>,
}

/// Short summary of the requesting user shown under the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUserSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub matches: u32,
    pub rating: i32,
}

/// Data returned by `/leaderboard`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardResult {
    pub leaderboard: Vec<LeaderboardEntry>,
    pub current_user: Option<CurrentUserSummary>,
    pub current_user_rank: u32,
    /// Total number of ranked users, when the backend reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl LeaderboardEntry {
    fn placeholder(rank: u32, name: &str, wins: u32, win_rate: f64, rating: i32) -> Self {
        Self {
            rank,
            name: name.to_string(),
            wins,
            win_rate,
            rating,
            id: None,
            username: None,
            matches: None,
            losses: None,
        }
    }
}

impl LeaderboardResult {
    /// Stand-in leaderboard returned by `get_leaderboard()` when the backend cannot be reached.
    pub fn placeholder() -> Self {
        Self {
            leaderboard: vec![
                LeaderboardEntry::placeholder(1, "Алишер", 25, 83.0, 45),
                LeaderboardEntry::placeholder(2, "Рустам", 22, 79.0, 42),
                LeaderboardEntry::placeholder(3, "Фаррух", 20, 77.0, 38),
                LeaderboardEntry::placeholder(4, "Шахром", 18, 75.0, 35),
                LeaderboardEntry::placeholder(5, "Далер", 17, 74.0, 32),
            ],
            current_user: Some(CurrentUserSummary {
                id: None,
                name: "Вы".to_string(),
                matches: 15,
                rating: 28,
            }),
            current_user_rank: 8,
            total: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn placeholder_shape() {
        let board = LeaderboardResult::placeholder();
        assert_eq!(board.leaderboard.len(), 5);
        assert_eq!(board.current_user_rank, 8);

        let ranks: Vec<u32> = board.leaderboard.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);

        let value = serde_json::to_value(&board.leaderboard[0]).unwrap();
        assert_eq!(
            value,
            json!({ "rank": 1, "name": "Алишер", "wins": 25, "win_rate": 83.0, "rating": 45 })
        );
    }

    #[test]
    fn backend_page_decodes() {
        let board: LeaderboardResult = serde_json::from_value(json!({
            "leaderboard": [{
                "rank": 11,
                "id": 3,
                "name": "Фаррух",
                "username": "farrukh",
                "rating": 38,
                "matches": 26,
                "wins": 20,
                "losses": 6,
                "win_rate": 76.9
            }],
            "total": 40,
            "current_user_rank": 12,
            "current_user": null
        }))
        .unwrap();

        assert_eq!(board.leaderboard[0].matches, Some(26));
        assert_eq!(board.total, Some(40));
        assert!(board.current_user.is_none());
    }
}
