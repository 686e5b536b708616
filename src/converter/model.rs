//! Output rule model
//!
//! One `RedirectRule` per converted `.conf` line. Field order matches the
//! JSON layout expected by the downstream rewrite tools.

use serde::{Deserialize, Serialize};

/// Constant rule type for every converted line
pub const RULE_TYPE_REDIRECT: &str = "redirect";

/// Constant action for every converted line
pub const ACTION_REDIRECT: &str = "redirect";

/// Constant match type: patterns are regular expressions
pub const MATCH_TYPE_REGEXP: &str = "regexp";

/// A single redirect rule in the JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectRule {
    /// Whether the rule is active
    pub enable: bool,
    /// Unique rule name
    pub name: String,
    /// Always "redirect"
    pub rule_type: String,
    /// Always "regexp"
    pub match_type: String,
    /// Normalized source pattern
    pub pattern: String,
    /// Reserved, always empty
    pub exclude: String,
    /// Group label
    pub group: String,
    /// Always false
    pub is_function: bool,
    /// Always "redirect"
    pub action: String,
    /// Redirect target URL
    pub to: String,
}

impl RedirectRule {
    /// Create a redirect rule with the constant fields filled in
    pub fn new(
        enable: bool,
        name: impl Into<String>,
        pattern: impl Into<String>,
        group: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            enable,
            name: name.into(),
            rule_type: RULE_TYPE_REDIRECT.to_string(),
            match_type: MATCH_TYPE_REGEXP.to_string(),
            pattern: pattern.into(),
            exclude: String::new(),
            group: group.into(),
            is_function: false,
            action: ACTION_REDIRECT.to_string(),
            to: to.into(),
        }
    }
}
