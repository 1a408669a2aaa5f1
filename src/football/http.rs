//! HTTP access to football-data.org and the published league list.

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT},
    Client,
};
use serde_json::Value;
use tracing::debug;

use crate::{error::FootballError, Result};


/// Base path for the football-data.org v2 API.
pub const API_URL: &str = "https://api.football-data.org/v2/";

/// GitHub contents endpoint serving the maintained `leagueIds.json`.
pub const LEAGUE_IDS_URL: &str =
    "https://api.github.com/repos/manrajgrover/football-cli/contents/leagueIds.json";

/// Sent as `X-Auth-Token`; header names are case-insensitive.
pub const AUTH_HEADER: &str = "x-auth-token";

const USER_AGENT: &str = concat!("football-cli/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Build the headers sent with every API request.
pub fn auth_header_map(api_key: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let mut token = HeaderValue::from_str(api_key)?;
    token.set_sensitive(true);
    h.insert(HeaderName::from_static(AUTH_HEADER), token);
    Ok(h)
}

/// One authenticated GET per call against the football-data API.
///
/// Transport failures, timeouts and non-2xx statuses all surface as
/// [`FootballError::Request`]. There is no retry.
#[derive(Debug, Clone)]
pub struct ApiGateway {
    client: Client,
    base_url: String,
}

impl ApiGateway {
    pub fn new(api_key: &str, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(auth_header_map(api_key)?)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `competitions/2021/standings`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn fetch(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = self.url(path);
        debug!(%url, ?query, "GET");

        let response = self.client.get(&url).query(query).send().await?;
        debug!(status = %response.status(), "response");

        let v = response.error_for_status()?.json::<Value>().await?;
        Ok(v)
    }
}

/// Fetch the published league directory document.
///
/// The GitHub contents API wraps the file as base64 in a `content` field;
/// a plain directory document (no `content` field) is returned as is.
pub async fn fetch_league_ids(url: &str) -> Result<String> {
    debug!(%url, "GET league list");
    let body = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?
        .get(url)
        .header(ACCEPT, "application/json")
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    decode_contents(&body)
}

/// Unwrap a GitHub contents document into the file text it carries.
pub fn decode_contents(body: &Value) -> Result<String> {
    let Some(content) = body.get("content").and_then(Value::as_str) else {
        return Ok(serde_json::to_string(body)?);
    };

    // GitHub wraps the base64 text at 60 columns
    let compact: String = content.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = BASE64
        .decode(compact)
        .map_err(|e| FootballError::Upstream {
            message: format!("Could not decode league list: {e}"),
        })?;

    String::from_utf8(bytes).map_err(|e| FootballError::Upstream {
        message: format!("League list is not valid UTF-8: {e}"),
    })
}
