use serde::Deserialize;

use crate::config::Config;
use crate::error::{BotError, Result};

// ---------------------------------------------------------------------------
// Response models — reduced to the fields the bot reads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    /// GitHub sends `null` for an empty description.
    #[serde(default)]
    pub body: Option<String>,
    pub head: Head,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Head {
    /// Branch name, e.g. `12345-fix-login`.
    #[serde(rename = "ref")]
    pub branch: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub number: u64,
    #[serde(default)]
    pub labels: Vec<Label>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub body: String,
}

// ---------------------------------------------------------------------------
// GithubClient
// ---------------------------------------------------------------------------

/// GitHub REST client scoped to one owner/repo pair.
///
/// Cheap to construct per delivery: the connection pool lives in the shared
/// `reqwest::Client` handed in by the dispatcher.
pub struct GithubClient {
    http: reqwest::Client,
    username: String,
    token: String,
    api_base: String,
    owner: String,
    repo: String,
}

impl GithubClient {
    pub fn new(http: reqwest::Client, config: &Config, owner: &str, repo: &str) -> Self {
        Self {
            http,
            username: config.username.clone(),
            token: config.token.clone(),
            api_base: config.api_base.clone(),
            owner: owner.to_string(),
            repo: repo.to_string(),
        }
    }

    /// `GET /repos/{owner}/{repo}/pulls/{id}`
    pub async fn get_pull_request(&self, id: u64) -> Result<PullRequest> {
        let resp = self
            .send(reqwest::Method::GET, &format!("pulls/{id}"), None)
            .await?;
        Ok(resp.json().await?)
    }

    /// `PATCH /repos/{owner}/{repo}/pulls/{id}` — overwrites title, body,
    /// and state.
    pub async fn update_pull_request(
        &self,
        id: u64,
        title: &str,
        body: &str,
        state: &str,
    ) -> Result<PullRequest> {
        let data = serde_json::json!({
            "title": title,
            "body": body,
            "state": state,
        });
        let resp = self
            .send(reqwest::Method::PATCH, &format!("pulls/{id}"), Some(data))
            .await?;
        Ok(resp.json().await?)
    }

    /// `POST /repos/{owner}/{repo}/issues/{id}/comments` — pull requests are
    /// issues, so comments go through the issues endpoint.
    pub async fn comment_on_pull_request(&self, id: u64, text: &str) -> Result<Comment> {
        let data = serde_json::json!({ "body": text });
        let resp = self
            .send(
                reqwest::Method::POST,
                &format!("issues/{id}/comments"),
                Some(data),
            )
            .await?;
        Ok(resp.json().await?)
    }

    /// `GET /repos/{owner}/{repo}/issues/{id}` — used solely to read labels.
    pub async fn get_issue(&self, id: u64) -> Result<Issue> {
        let resp = self
            .send(reqwest::Method::GET, &format!("issues/{id}"), None)
            .await?;
        Ok(resp.json().await?)
    }

    async fn send(
        &self,
        method: reqwest::Method,
        path: &str,
        data: Option<serde_json::Value>,
    ) -> Result<reqwest::Response> {
        let url = format!(
            "{base}/repos/{owner}/{repo}/{path}",
            base = self.api_base,
            owner = self.owner,
            repo = self.repo,
        );

        let mut request = self
            .http
            .request(method.clone(), &url)
            .basic_auth(&self.username, Some(&self.token))
            .header(reqwest::header::ACCEPT, "application/vnd.github+json");
        if let Some(data) = data {
            request = request.json(&data);
        }

        let resp = request.send().await?;
        if !resp.status().is_success() {
            return Err(BotError::RemoteStatus {
                method: method.to_string(),
                path: path.to_string(),
                status: resp.status().as_u16(),
            });
        }
        Ok(resp)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
