use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct SearchResponse {
    #[serde(default)]
    pub issues: Vec<JiraIssue>,
}

#[derive(Deserialize, Debug)]
pub struct JiraIssue {
    pub fields: JiraIssueFields,
}

#[derive(Deserialize, Debug)]
pub struct JiraIssueFields {
    #[serde(default)]
    pub timetracking: Option<TimeTracking>,
}

#[derive(Deserialize, Debug)]
pub struct TimeTracking {
    #[serde(rename = "originalEstimateSeconds", default)]
    pub original_estimate_seconds: Option<u64>,
}

impl JiraIssue {
    /// Original estimate in seconds, zero when the issue has no time tracking or no estimate.
    pub fn original_estimate_seconds(&self) -> u64 {
        self.fields
            .timetracking
            .as_ref()
            .and_then(|tracking| tracking.original_estimate_seconds)
            .unwrap_or(0)
    }
}
