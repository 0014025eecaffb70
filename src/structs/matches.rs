use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::form_urlencoded;

use super::config::AppConfig;

/// Match object as the backend describes it.
///
/// The client methods pass match payloads through as raw JSON; decode into this type with
/// `Client::request::<Match>` or `serde_json::from_value` when a typed view is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: i64,
    pub title: String,
    pub stadium: String,
    pub city: String,
    pub date_time: String,
    /// Team format, e.g. `"5x5"`.
    pub format: String,
    pub max_players: u32,
    pub status: String,
    pub created_by: i64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: String,
    #[serde(default)]
    pub players_count: u32,
}

/// Body for `create_match()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMatch {
    pub title: String,
    pub stadium: String,
    pub city: String,
    pub date_time: String,
    pub format: String,
    pub max_players: u32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl NewMatch {
    /// Builds a match located in the configured default city.
    pub fn new(
        config: &AppConfig,
        title: impl Into<String>,
        stadium: impl Into<String>,
        date_time: impl Into<String>,
        format: impl Into<String>,
        max_players: u32,
    ) -> Self {
        Self {
            title: title.into(),
            stadium: stadium.into(),
            city: config.default_city.clone(),
            date_time: date_time.into(),
            format: format.into(),
            max_players,
            latitude: Some(config.default_lat),
            longitude: Some(config.default_lon),
        }
    }
}

/// Filters understood by `GET /matches`. Unset fields are left out of the query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Day in `YYYY-MM-DD` form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Body for `join_match()`. `team: None` is sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct JoinRequest<'a> {
    pub team: Option<&'a str>,
}

/// Data returned by `/matches/cities/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cities {
    pub cities: Vec<String>,
}

/// Falsy values are skipped: null, false, 0, NaN and the empty string.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => query_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

/// Encodes the truthy entries of a filter object as a form-urlencoded query string.
/// Returns an empty string when nothing survives, or when `filters` is not an object.
pub(crate) fn filter_query(filters: &Value) -> String {
    let Some(map) = filters.as_object() else {
        return String::new();
    };

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in map.iter().filter(|(_, value)| is_truthy(value)) {
        serializer.append_pair(key, &query_value(value));
    }
    serializer.finish()
}
