use serde::Deserialize;

/// Inbound webhook payload as delivered by GitHub.
///
/// Top-level fields are optional because other event families omit them;
/// the transformer reports which one is absent instead of panicking.
#[derive(Debug, Deserialize)]
pub struct WebhookContext {
    pub action: Option<String>,
    pub repository: Option<Repository>,
    pub sender: Option<User>,
    pub pull_request: Option<PullRequest>,
}

#[derive(Debug, Deserialize)]
pub struct Repository {
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub draft: bool,
    pub created_at: String,
    pub changed_files: u64,
    pub additions: u64,
    pub deletions: u64,
}

impl WebhookContext {
    /// True when this payload describes a pull request being opened.
    pub fn is_opened_pull_request(&self) -> bool {
        self.pull_request.is_some() && self.action.as_deref() == Some("opened")
    }
}
