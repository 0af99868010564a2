//! Checklist report data structures.

use serde::{Deserialize, Serialize};

/// Outcome of one checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// The check passed and counts towards the score
    Pass,
    /// A requirement is not met
    Fail,
    /// A recommendation is not met
    Warn,
}

/// A named part of a check, reported alongside its parent result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubCheck {
    /// What was looked for
    pub text: String,
    /// Whether it was found
    pub status: bool,
}

/// Result of one checklist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
    /// Check name
    pub title: String,
    /// Outcome
    pub status: CheckStatus,
    /// Explanation shown to the site owner
    pub message: String,
    /// Whether failing this check is likely to lead to rejection
    pub is_critical: bool,
    /// Named parts of the check, when it has any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_checks: Option<Vec<SubCheck>>,
}

impl ResultItem {
    pub(crate) fn new(
        title: &str,
        status: CheckStatus,
        message: impl Into<String>,
        is_critical: bool,
    ) -> Self {
        Self {
            title: title.to_string(),
            status,
            message: message.into(),
            is_critical,
            sub_checks: None,
        }
    }

    /// Returns `true` when the check passed.
    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Pass
    }
}

/// Score summary of a completed checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of passing checks
    pub score: usize,
    /// Number of checks run (always 8)
    pub total: usize,
    /// Overall advice chosen by score
    pub recommendation: String,
}

/// AdSense readiness report for one homepage.
///
/// Either `results` and `summary` are filled, or the homepage could not be
/// fetched and `error` is set with no results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistReport {
    /// One entry per check, in checklist order
    pub results: Vec<ResultItem>,
    /// Present when the checklist ran
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
    /// Present when the homepage could not be fetched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChecklistReport {
    /// A report for a homepage that could not be evaluated.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            results: Vec::new(),
            summary: None,
            error: Some(error.into()),
        }
    }
}
