//! Score report data structures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::EnumIter;

/// The fixed set of scored metadata categories.
///
/// Iteration order (via `strum::IntoEnumIterator`) and map order are the
/// declaration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Page title length
    Title,
    /// Description length
    Description,
    /// Number of keywords
    Keywords,
    /// Featured image presence and URL validity
    Image,
    /// Social sharing fields
    Social,
    /// Technical fields (type, author, URL, canonical, language)
    Technical,
}

impl Category {
    /// Fixed per-category multiplier applied on top of the importance weight.
    pub fn multiplier(self) -> f64 {
        match self {
            Category::Title => 1.2,
            Category::Description => 1.1,
            Category::Keywords => 0.9,
            Category::Image => 1.0,
            Category::Social => 0.9,
            Category::Technical => 0.8,
        }
    }

    /// Returns the category name as used in serialized reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Title => "title",
            Category::Description => "description",
            Category::Keywords => "keywords",
            Category::Image => "image",
            Category::Social => "social",
            Category::Technical => "technical",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much a category counts towards the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    /// Weight 0.5
    High,
    /// Weight 0.3
    Medium,
    /// Weight 0.2
    Low,
}

impl Importance {
    /// Importance weight used in the weighted average.
    pub fn weight(self) -> f64 {
        match self {
            Importance::High => 0.5,
            Importance::Medium => 0.3,
            Importance::Low => 0.2,
        }
    }
}

/// Score and feedback for a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// 0 to 100
    pub score: u32,
    /// Human-readable explanation of the score
    pub feedback: String,
    /// Fixed per category, except in the empty report
    pub importance: Importance,
}

impl CategoryScore {
    pub(crate) fn new(score: u32, feedback: impl Into<String>, importance: Importance) -> Self {
        Self {
            score,
            feedback: feedback.into(),
            importance,
        }
    }
}

/// Category scores plus their weighted total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    /// Weighted average of the category scores, rounded, 0 to 100
    pub total_score: u32,
    /// Every category, always all six
    pub categories: BTreeMap<Category, CategoryScore>,
}

impl ScoreReport {
    /// Returns the score entry for `category`.
    pub fn category(&self, category: Category) -> Option<&CategoryScore> {
        self.categories.get(&category)
    }
}
