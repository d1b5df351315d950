use crate::error::{BotError, Result};

// ---------------------------------------------------------------------------
// Quantifier
// ---------------------------------------------------------------------------

/// How a rule's per-line results are reduced to a single pass/fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// At least one line must satisfy the predicate.
    Any,
    /// Every line must satisfy the predicate.
    All,
}

impl Quantifier {
    fn reduce(self, mut outcomes: impl Iterator<Item = bool>) -> bool {
        match self {
            Quantifier::Any => outcomes.any(|met| met),
            Quantifier::All => outcomes.all(|met| met),
        }
    }
}

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// A named predicate over the lines of a pull-request description.
///
/// Immutable once constructed; the registry is built once at process start
/// by [`default_rules`] and never mutated.
pub struct Rule {
    pub name: &'static str,
    /// Human-readable violation text, imperative mood.
    pub description: &'static str,
    pub quantifier: Quantifier,
    predicate: fn(&str) -> bool,
}

impl Rule {
    /// Apply the predicate to every line and reduce with the quantifier.
    /// Returns `None` when satisfied, the violation text otherwise.
    pub fn validate(&self, lines: &[&str]) -> Option<&'static str> {
        let met = self
            .quantifier
            .reduce(lines.iter().map(|line| (self.predicate)(line)));
        if met {
            None
        } else {
            Some(self.description)
        }
    }
}

// ---------------------------------------------------------------------------
// RuleSet
// ---------------------------------------------------------------------------

/// Outcome of qualifying a description: `ok` iff no rule was violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub ok: bool,
    /// Violation texts in registry order.
    pub violations: Vec<String>,
}

/// The ordered, fixed collection of rules applied to a description.
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// All rule names, in registry order.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }

    /// Evaluate every rule not named in `exclude` against `description`.
    ///
    /// Naming a rule that does not exist in the registry is an error, not a
    /// silent no-op.
    pub fn qualify(&self, description: &str, exclude: &[&str]) -> Result<ValidationResult> {
        for name in exclude {
            if !self.rules.iter().any(|r| r.name == *name) {
                return Err(BotError::UnknownRule((*name).to_string()));
            }
        }

        let lines: Vec<&str> = description.split('\n').collect();
        let violations: Vec<String> = self
            .rules
            .iter()
            .filter(|rule| !exclude.contains(&rule.name))
            .filter_map(|rule| rule.validate(&lines))
            .map(String::from)
            .collect();

        Ok(ValidationResult {
            ok: violations.is_empty(),
            violations,
        })
    }
}

/// The default registry: a story link must be present, and no unchecked
/// todo boxes may remain.
pub fn default_rules() -> RuleSet {
    RuleSet {
        rules: vec![
            Rule {
                name: "story",
                description: "should have story link",
                quantifier: Quantifier::Any,
                predicate: |line| line.contains("story: "),
            },
            Rule {
                name: "todo",
                description: "all todos should be done",
                quantifier: Quantifier::All,
                predicate: |line| !line.contains("- [ ]"),
            },
        ],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
