use crate::error::EstimatorError;
use crate::jira_client::{JiraClient, Transport};
use crate::models::JiraIssue;
use std::fmt;
use tracing::info;

/// Eight hour workday.
pub const SECONDS_PER_WORKDAY: u128 = 8 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    pub issue_count: usize,
    /// Wider than a single estimate so the sum of any number of `u64` values fits.
    pub original_estimate_seconds: u128,
}

impl Estimate {
    pub fn from_issues(issues: &[JiraIssue]) -> Self {
        Self {
            issue_count: issues.len(),
            original_estimate_seconds: issues
                .iter()
                .map(|issue| u128::from(issue.original_estimate_seconds()))
                .sum(),
        }
    }

    pub fn days(&self) -> f64 {
        self.original_estimate_seconds as f64 / SECONDS_PER_WORKDAY as f64
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total number of issues: {}", self.issue_count)?;
        write!(f, "Total Original Estimate: {:.2} days", self.days())
    }
}

pub fn estimate_epic<T: Transport>(
    client: &JiraClient<T>,
    epic_issue: &str,
) -> Result<Estimate, EstimatorError> {
    let issues = client.search_epic_issues(epic_issue)?;
    let estimate = Estimate::from_issues(&issues);
    info!(
        epic = epic_issue,
        issues = estimate.issue_count,
        seconds = %estimate.original_estimate_seconds,
        "estimated epic"
    );
    Ok(estimate)
}
