use super::config::{resolve_base_url, AppConfig};
use super::identity::{current_token, IdentitySource, NoIdentity, IDENTITY_HEADER};
use super::leaderboard::LeaderboardResult;
use super::matches::{filter_query, is_truthy, Cities, JoinRequest};
use super::user::User;
use crate::errors::{ApiError, GENERIC_FAILURE_MESSAGE};
use crate::fallback::degrade_on_failure;
use colorful::Color;
use colorful::Colorful;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_LEADERBOARD_LIMIT: u32 = 100;
pub const DEFAULT_LEADERBOARD_OFFSET: u32 = 0;
pub const DEFAULT_USER_MATCHES_STATUS: &str = "all";

/// Dribbling Client. Used to interact with the matchmaking API.
#[derive(Clone)]
pub struct Client {
    /// Prefix of every request URL, e.g. `https://api.example.com`.
    pub base_url: String,
    /// Whether the client should print debug statements.
    pub debug: bool,
    http: reqwest::Client,
    identity: Arc<dyn IdentitySource>,
}

/// Client options. Pass this into the `new()` function of the Client.
#[derive(Clone)]
pub struct ClientOptions {
    /// Explicit backend URL. Takes priority over `config`.
    pub base_url: Option<String>,
    /// App-wide settings. Its `api_base_url` is used when `base_url` is not set.
    pub config: Option<AppConfig>,
    /// Where the Telegram init data comes from. Read again on every request.
    pub identity: Arc<dyn IdentitySource>,
    /// Whether the client should print debug statements.
    pub debug: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            config: None,
            identity: Arc::new(NoIdentity),
            debug: false,
        }
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("base_url", &self.base_url)
            .field("config", &self.config)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

/// Per-call request settings for [`Client::request`].
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Defaults to `GET`.
    pub method: Method,
    /// Merged on top of `Content-Type: application/json`. Caller values win.
    pub headers: HashMap<String, String>,
    /// Pre-serialized JSON body.
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post() -> Self {
        Self {
            method: Method::POST,
            ..Self::default()
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Serializes `body` as the JSON request body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self)
    }
}

/// Picks the message out of a failed response body: `detail`, then `message`, then a generic one.
fn error_message(body: &str) -> String {
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return GENERIC_FAILURE_MESSAGE.to_string();
    };

    ["detail", "message"]
        .iter()
        .filter_map(|key| json.get(key))
        .find(|field| is_truthy(field))
        .map(|field| match field {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
}

impl Client {
    /// Creates a new Dribbling client.
    pub fn new(options: ClientOptions) -> Result<Self, ApiError> {
        let base_url = resolve_base_url(options.base_url.as_deref(), options.config.as_ref());
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            base_url,
            debug: options.debug,
            http,
            identity: options.identity,
        })
    }

    fn print_debug(&self, line: &str) {
        if !self.debug {
            return;
        }

        #[cfg(windows)]
        println!("{}", line);

        #[cfg(not(windows))]
        println!(
            "{}",
            line.gradient_with_color(Color::Cyan, Color::SpringGreen4)
        );
    }

    fn print_debug_error(&self, line: &str) {
        if !self.debug {
            return;
        }

        #[cfg(windows)]
        println!("{}", line);

        #[cfg(not(windows))]
        println!("{}", line.color(Color::Red));
    }

    fn build_headers(&self, extra: &HashMap<String, String>) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in extra {
            let name = HeaderName::from_bytes(name.as_bytes())
                .or(Err(ApiError::Parse(format!("Invalid header name: {}", name))))?;
            let value = HeaderValue::from_str(value)
                .or(Err(ApiError::Parse(format!("Invalid value for header {}", name))))?;
            headers.insert(name, value);
        }

        if let Some(token) = current_token(self.identity.as_ref()) {
            let value = HeaderValue::from_str(&token)
                .or(Err(ApiError::Parse("Invalid Telegram init data".to_string())))?;
            headers.insert(HeaderName::from_static(IDENTITY_HEADER), value);
        }

        Ok(headers)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let headers = self.build_headers(&options.headers)?;

        let mut builder = self.http.request(options.method, url).headers(headers);
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Request {
                status,
                message: error_message(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Query an endpoint of the Dribbling API.
    ///
    /// The URL is `base_url + endpoint`. A success body is decoded into `T`; use
    /// `serde_json::Value` to take it as-is.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);

        tracing::debug!(method = %options.method, %url, "Making request");
        self.print_debug(&format!("[API] {} {}", options.method, url));

        let result = self.send(&url, options).await;

        if let Err(err) = &result {
            tracing::error!(%url, status = ?err.status(), error = %err, "API request failed");
            self.print_debug_error(&format!("[API] Request to {} failed: {}", url, err));
        }

        result
    }

    // Matches

    /// Lists matches. `filters` must serialize to an object; entries with falsy values
    /// (null, false, 0, empty string) are left out of the query.
    pub async fn get_matches<F: Serialize + ?Sized>(&self, filters: &F) -> Result<Value, ApiError> {
        let query = filter_query(&serde_json::to_value(filters)?);
        let endpoint = if query.is_empty() {
            "/matches".to_string()
        } else {
            format!("/matches?{}", query)
        };

        self.request(&endpoint, RequestOptions::get()).await
    }

    pub async fn get_match(&self, id: impl fmt::Display) -> Result<Value, ApiError> {
        self.request(&format!("/matches/{}", id), RequestOptions::get())
            .await
    }

    /// Creates a match. `match_data` is sent unchanged as the JSON body.
    pub async fn create_match<M: Serialize + ?Sized>(
        &self,
        match_data: &M,
    ) -> Result<Value, ApiError> {
        self.request("/matches", RequestOptions::post().json(match_data)?)
            .await
    }

    /// Joins a match, optionally on a given team.
    pub async fn join_match(
        &self,
        match_id: impl fmt::Display,
        team: Option<&str>,
    ) -> Result<Value, ApiError> {
        let options = RequestOptions::post().json(&JoinRequest { team })?;
        self.request(&format!("/matches/{}/join", match_id), options)
            .await
    }

    pub async fn leave_match(&self, match_id: impl fmt::Display) -> Result<Value, ApiError> {
        self.request(&format!("/matches/{}/leave", match_id), RequestOptions::post())
            .await
    }

    // Users

    /// Fetches the user behind the current Telegram init data.
    pub async fn try_get_current_user(&self) -> Result<User, ApiError> {
        self.request("/users/me", RequestOptions::get()).await
    }

    /// Same as [`Client::try_get_current_user`], but any failure yields [`User::placeholder`].
    pub async fn get_current_user(&self) -> User {
        let result = self.try_get_current_user().await;
        if result.is_err() {
            self.print_debug_error("[API] Using placeholder user data");
        }

        degrade_on_failure("user", result, User::placeholder)
    }

    pub async fn get_user(&self, id: impl fmt::Display) -> Result<Value, ApiError> {
        self.request(&format!("/users/{}", id), RequestOptions::get())
            .await
    }

    /// Matches the user took part in. `status` defaults to `"all"`.
    pub async fn get_user_matches(
        &self,
        user_id: impl fmt::Display,
        status: Option<&str>,
    ) -> Result<Value, ApiError> {
        let status = status.unwrap_or(DEFAULT_USER_MATCHES_STATUS);
        self.request(
            &format!("/users/{}/matches?status={}", user_id, status),
            RequestOptions::get(),
        )
        .await
    }

    // Leaderboard

    /// Fetches a leaderboard page. Defaults to the first 100 entries.
    pub async fn try_get_leaderboard(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<LeaderboardResult, ApiError> {
        let limit = limit.unwrap_or(DEFAULT_LEADERBOARD_LIMIT);
        let offset = offset.unwrap_or(DEFAULT_LEADERBOARD_OFFSET);

        self.request(
            &format!("/leaderboard?limit={}&offset={}", limit, offset),
            RequestOptions::get(),
        )
        .await
    }

    /// Same as [`Client::try_get_leaderboard`], but any failure yields
    /// [`LeaderboardResult::placeholder`].
    pub async fn get_leaderboard(&self, limit: Option<u32>, offset: Option<u32>) -> LeaderboardResult {
        let result = self.try_get_leaderboard(limit, offset).await;
        if result.is_err() {
            self.print_debug_error("[API] Using placeholder leaderboard data");
        }

        degrade_on_failure("leaderboard", result, LeaderboardResult::placeholder)
    }

    // Cities

    pub async fn get_cities(&self) -> Result<Value, ApiError> {
        self.request("/matches/cities/list", RequestOptions::get())
            .await
    }

    /// City names from `/matches/cities/list`.
    pub async fn get_city_names(&self) -> Result<Vec<String>, ApiError> {
        let cities: Cities = self
            .request("/matches/cities/list", RequestOptions::get())
            .await?;
        Ok(cities.cities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_detail() {
        assert_eq!(
            error_message(r#"{"detail":"not found","message":"ignored"}"#),
            "not found"
        );
        assert_eq!(error_message(r#"{"message":"Match is full"}"#), "Match is full");
        assert_eq!(
            error_message(r#"{"detail":"","message":"fallback"}"#),
            "fallback"
        );
    }

    #[test]
    fn error_message_defaults() {
        assert_eq!(error_message("<html>502</html>"), GENERIC_FAILURE_MESSAGE);
        assert_eq!(error_message("{}"), GENERIC_FAILURE_MESSAGE);
        assert_eq!(error_message(""), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn error_message_renders_structured_detail() {
        assert_eq!(
            error_message(r#"{"detail":[{"loc":["query","limit"]}]}"#),
            r#"[{"loc":["query","limit"]}]"#
        );
    }

    #[test]
    fn request_options_builders() {
        let options = RequestOptions::post()
            .header("X-Trace", "1")
            .json(&serde_json::json!({ "team": "A" }))
            .unwrap();

        assert_eq!(options.method, Method::POST);
        assert_eq!(options.headers.get("X-Trace").map(String::as_str), Some("1"));
        assert_eq!(options.body.as_deref(), Some(r#"{"team":"A"}"#));
        assert_eq!(RequestOptions::get().method, Method::GET);
    }
}
