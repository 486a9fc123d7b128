use clap::Parser;

/// Sum the original estimates of every issue linked to a JIRA epic.
///
/// Reads `JIRA_URL`, `JIRA_USER` and `JIRA_TOKEN` from the environment.
#[derive(Debug, Parser)]
#[command(name = "jira-epic-estimator")]
pub struct Cli {
    /// Epic issue key, e.g. `PROJ-1`.
    #[arg(short = 'e', long = "epic-issue")]
    pub epic_issue: String,
}
