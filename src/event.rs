use chrono::DateTime;
use serde::Serialize;

use crate::error::EventError;
use crate::payload::WebhookContext;

/// Wraps the title on both ends so the ingestion endpoint renders it as
/// markdown and can detect this message type.
const MARKDOWN_SENTINEL: &str = "%%%";

/// Monitoring event shaped for the ingestion endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub alert_type: String,
    pub date_happened: i64,
    pub priority: String,
    pub text: String,
    pub title: String,
    pub tags: Vec<String>,
}

/// Seconds since the Unix epoch for an RFC 3339 timestamp, with any
/// fractional second floored.
pub fn unix_timestamp(timestring: &str) -> Result<i64, EventError> {
    let parsed = DateTime::parse_from_rfc3339(timestring)?;
    Ok(parsed.timestamp())
}

/// Builds the "pull request opened" event from a webhook payload.
pub fn pull_request_opened_event(context: &WebhookContext) -> Result<EventRecord, EventError> {
    let sender = context
        .sender
        .as_ref()
        .ok_or(EventError::MissingField("sender"))?;
    let repository = context
        .repository
        .as_ref()
        .ok_or(EventError::MissingField("repository"))?;
    let pull_request = context
        .pull_request
        .as_ref()
        .ok_or(EventError::MissingField("pull_request"))?;

    let repo = repository.full_name.as_str();
    let actor = sender.login.as_str();

    Ok(EventRecord {
        alert_type: "info".to_string(),
        date_happened: unix_timestamp(&pull_request.created_at)?,
        priority: "normal".to_string(),
        text: format!(
            "{} files changed by {actor} with {} additions and {} deletions.",
            pull_request.changed_files, pull_request.additions, pull_request.deletions
        ),
        title: format!(
            "{MARKDOWN_SENTINEL}[Pull Request #{}]({}) opened in {repo}: {}{MARKDOWN_SENTINEL}",
            pull_request.number, pull_request.html_url, pull_request.title
        ),
        tags: vec![
            "metric:contributor_activity".to_string(),
            "event_type:pull_request".to_string(),
            "action:opened".to_string(),
            format!("draft:{}", pull_request.draft),
            format!("repo:{repo}"),
            format!("actor:{actor}"),
        ],
    })
}
