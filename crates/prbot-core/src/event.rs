use serde::Deserialize;

// ---------------------------------------------------------------------------
// Event — inbound webhook payload
// ---------------------------------------------------------------------------

/// Pull-request action the hook fired for, discriminated by the JSON
/// `"action"` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Action {
    Opened,
    Reopened,
    Edited,
    /// Any action the bot does not react to (closed, labeled, ...).
    Other,
}

impl From<String> for Action {
    fn from(s: String) -> Self {
        match s.as_str() {
            "opened" => Action::Opened,
            "reopened" => Action::Reopened,
            "edited" => Action::Edited,
            _ => Action::Other,
        }
    }
}

/// GitHub pull-request webhook payload, parsed once at the boundary.
///
/// Every field is optional: ping deliveries carry only `zen`, and GitHub
/// adds fields per event type. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Event {
    pub action: Option<Action>,
    /// Pull-request number (doubles as the issue number).
    pub number: Option<u64>,
    pub repo: Option<EventRepo>,
    /// Present on ping deliveries only.
    pub zen: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRepo {
    pub full_name: String,
}

impl Event {
    /// An empty object is treated the same as no payload at all.
    pub fn is_empty(&self) -> bool {
        self.action.is_none() && self.number.is_none() && self.repo.is_none() && self.zen.is_none()
    }

    /// `(owner, repo)` from `repo.full_name`, split on the first `/`.
    pub fn owner_repo(&self) -> Option<(&str, &str)> {
        self.repo.as_ref()?.full_name.split_once('/')
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
