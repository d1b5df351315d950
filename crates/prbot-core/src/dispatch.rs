use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::{BotError, Result};
use crate::event::{Action, Event};
use crate::github::GithubClient;
use crate::rules::{default_rules, RuleSet};

// ---------------------------------------------------------------------------
// Comment templates and link format
// ---------------------------------------------------------------------------

/// Canned comment posted when the description passes validation.
pub const GOOD_COMMENT: &str = include_str!("../static/good_comment.txt");

/// Comment template for failed validation; `{issues}` is replaced with the
/// rendered violation list.
pub const ISSUES_TEMPLATE: &str = include_str!("../static/issues.txt");

const STORY_LINK_BASE: &str = "https://pivotaltracker.com/story/show";

/// Upper bound on any outbound call; a hung GitHub request must not pin a
/// webhook delivery forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Tracker link for a branch ref; the ticket id is everything before the
/// first `-`.
pub fn story_link(branch_ref: &str) -> String {
    let ticket = branch_ref.split('-').next().unwrap_or(branch_ref);
    format!("{STORY_LINK_BASE}/{ticket}")
}

/// Render violations as a markdown bullet list for the `{issues}` slot.
/// Each violation gets its own `- ` line; the leading newline separates the
/// list from the template's intro line.
pub fn render_issues(violations: &[String]) -> String {
    violations
        .iter()
        .map(|violation| format!("\n- {violation}"))
        .collect()
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// What the dispatcher did with a delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Liveness ping (`zen` payload); nothing to do.
    Pong,
    /// Story link prefixed onto the description of the given pull request.
    Prefixed(u64),
    /// Description validated and a feedback comment posted.
    Validated { number: u64, ok: bool },
    /// Recognized payload with an action the bot does not react to.
    Skipped,
}

/// Interprets inbound events and drives the GitHub API accordingly.
///
/// Terminal after one action per delivery; duplicate deliveries re-run the
/// action (idempotency is not guaranteed by the design).
pub struct Dispatcher {
    config: Arc<Config>,
    rules: RuleSet,
    http: reqwest::Client,
}

impl Dispatcher {
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("prbot/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            config,
            rules: default_rules(),
            http,
        })
    }

    /// Decision table over the payload. Ping → no-op; missing action →
    /// error; opened/reopened → link prefix; edited → validation; anything
    /// else → skipped.
    pub async fn dispatch(&self, event: &Event) -> Result<Outcome> {
        if event.zen.is_some() {
            tracing::info!("ping pong");
            return Ok(Outcome::Pong);
        }

        let Some(action) = event.action else {
            return Err(BotError::UnrecognizedEvent);
        };

        match action {
            Action::Opened | Action::Reopened => {
                let number = event.number.ok_or(BotError::MissingNumber)?;
                self.prefix_story_link(self.client_for(event), number)
                    .await?;
                Ok(Outcome::Prefixed(number))
            }
            Action::Edited => {
                let number = event.number.ok_or(BotError::MissingNumber)?;
                let ok = self
                    .validate_description(self.client_for(event), number)
                    .await?;
                Ok(Outcome::Validated { number, ok })
            }
            Action::Other => Ok(Outcome::Skipped),
        }
    }

    /// Client for the repository named by the payload, falling back to the
    /// configured default pair.
    fn client_for(&self, event: &Event) -> GithubClient {
        let (owner, repo) = event
            .owner_repo()
            .unwrap_or((self.config.owner.as_str(), self.config.repo.as_str()));
        GithubClient::new(self.http.clone(), &self.config, owner, repo)
    }

    async fn prefix_story_link(&self, client: GithubClient, number: u64) -> Result<()> {
        let pr = client.get_pull_request(number).await?;

        let link = story_link(&pr.head.branch);
        let body = format!(
            "story: {link}\r\n\n{original}",
            original = pr.body.as_deref().unwrap_or_default()
        );
        client
            .update_pull_request(number, &pr.title, &body, "open")
            .await?;

        tracing::info!(number, %link, "prefixed story link");
        Ok(())
    }

    async fn validate_description(&self, client: GithubClient, number: u64) -> Result<bool> {
        let pr = client.get_pull_request(number).await?;
        let issue = client.get_issue(number).await?;

        // The ignore label turns the exclusion set into the whole registry,
        // so validation trivially passes.
        let ignore_all = issue
            .labels
            .iter()
            .any(|label| label.name == self.config.ignore_label);
        let exclude = if ignore_all {
            self.rules.names()
        } else {
            Vec::new()
        };

        let result = self
            .rules
            .qualify(pr.body.as_deref().unwrap_or_default(), &exclude)?;

        let comment = if result.ok {
            GOOD_COMMENT.to_string()
        } else {
            ISSUES_TEMPLATE.replace("{issues}", &render_issues(&result.violations))
        };
        client.comment_on_pull_request(number, &comment).await?;

        tracing::info!(number, ok = result.ok, "validated description");
        Ok(result.ok)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
