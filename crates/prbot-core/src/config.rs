// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Label that switches all description checks off for a pull request.
pub const DEFAULT_IGNORE_LABEL: &str = "pr_ignore";

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Process-wide configuration, read from the environment once at startup and
/// passed explicitly into the dispatcher and client constructors.
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub username for basic auth.
    pub username: String,
    /// GitHub personal access token for basic auth.
    pub token: String,
    /// Default repository owner, used when the payload carries no repo.
    pub owner: String,
    /// Default repository name, used when the payload carries no repo.
    pub repo: String,
    pub ignore_label: String,
    /// REST API base URL; override for GitHub Enterprise or tests.
    pub api_base: String,
}

impl Config {
    pub fn new(
        username: impl Into<String>,
        token: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
            owner: owner.into(),
            repo: repo.into(),
            ignore_label: DEFAULT_IGNORE_LABEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn with_ignore_label(mut self, label: impl Into<String>) -> Self {
        self.ignore_label = label.into();
        self
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }
}
