use crate::config::JiraConfig;
use crate::error::EstimatorError;
use crate::models::*;
use std::time::Duration;
use tracing::debug;

const SEARCH_PATH: &str = "/rest/api/2/search";
const SEARCH_FIELDS: &str = "timetracking";

/// Upper bound for the single search request, so a hung server cannot block forever.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// One authenticated GET. The query pairs are URL-encoded by the implementation.
pub trait Transport {
    fn get(
        &self,
        url: &str,
        query: &[(&str, &str)],
        user: &str,
        token: &str,
    ) -> Result<RawResponse, reqwest::Error>;
}

pub struct BlockingTransport {
    client: reqwest::blocking::Client,
}

impl BlockingTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: reqwest::blocking::Client::builder()
                .timeout(timeout)
                .build()?,
        })
    }
}

impl Transport for BlockingTransport {
    fn get(
        &self,
        url: &str,
        query: &[(&str, &str)],
        user: &str,
        token: &str,
    ) -> Result<RawResponse, reqwest::Error> {
        let response = self
            .client
            .get(url)
            .query(query)
            .basic_auth(user, Some(token))
            .send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(RawResponse { status, body })
    }
}

/// The epic key is interpolated as is. Keys containing quotes produce whatever JQL they spell.
pub fn epic_link_jql(epic_issue: &str) -> String {
    format!("\"Epic Link\" = {}", epic_issue)
}

pub struct JiraClient<T: Transport> {
    transport: T,
    config: JiraConfig,
}

impl<T: Transport> JiraClient<T> {
    pub fn new(config: JiraConfig, transport: T) -> Self {
        Self { transport, config }
    }

    fn _get<R: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<R, EstimatorError> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!(%url, ?query, "sending request");

        let response = self
            .transport
            .get(&url, query, &self.config.user, &self.config.token)?;
        debug!(status = response.status, "received response");

        if response.status != 200 {
            return Err(EstimatorError::Connection {
                status: response.status,
                body: response.body,
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }

    /// Every issue whose Epic Link is `epic_issue`, from a single unpaginated search.
    pub fn search_epic_issues(&self, epic_issue: &str) -> Result<Vec<JiraIssue>, EstimatorError> {
        let jql = epic_link_jql(epic_issue);
        let response: SearchResponse =
            self._get(SEARCH_PATH, &[("jql", jql.as_str()), ("fields", SEARCH_FIELDS)])?;
        debug!(issues = response.issues.len(), "parsed search response");
        Ok(response.issues)
    }
}
