//! Metadata scoring.
//!
//! Scores a [`MetadataRecord`] against heuristic SEO rules. Every category is
//! computed by its own rule and the total is the weighted average
//! `round(Σ score·w / Σ w)` with `w = importance weight × category multiplier`.

mod rules;
mod types;

use std::collections::BTreeMap;

use crate::parse::MetadataRecord;

pub use types::{Category, CategoryScore, Importance, ScoreReport};

type Rule = fn(&MetadataRecord) -> CategoryScore;

const RULES: [(Category, Rule); 6] = [
    (Category::Title, rules::title),
    (Category::Description, rules::description),
    (Category::Keywords, rules::keywords),
    (Category::Image, rules::image),
    (Category::Social, rules::social),
    (Category::Technical, rules::technical),
];

/// Scores `record`, or produces the empty report when there is no record.
///
/// The empty report scores every category 0 with high importance and
/// "No metadata available" feedback, with a total of 0.
///
/// # Example
///
/// ```
/// use site_audit::{score_metadata, Category};
///
/// let report = score_metadata(None);
/// assert_eq!(report.total_score, 0);
/// assert_eq!(report.categories[&Category::Title].feedback, "No metadata available");
/// ```
pub fn score_metadata(record: Option<&MetadataRecord>) -> ScoreReport {
    let Some(record) = record else {
        return empty_report();
    };

    let categories: BTreeMap<Category, CategoryScore> = RULES
        .iter()
        .map(|(category, rule)| (*category, rule(record)))
        .collect();

    let total_score = weighted_total(&categories);
    log::debug!("Scored metadata for {}: total {}", record.url, total_score);

    ScoreReport {
        total_score,
        categories,
    }
}

fn empty_report() -> ScoreReport {
    let categories = RULES
        .iter()
        .map(|(category, _)| {
            (
                *category,
                CategoryScore::new(0, "No metadata available", Importance::High),
            )
        })
        .collect();
    ScoreReport {
        total_score: 0,
        categories,
    }
}

fn weighted_total(categories: &BTreeMap<Category, CategoryScore>) -> u32 {
    let (weighted_sum, weight_sum) =
        categories
            .iter()
            .fold((0.0_f64, 0.0_f64), |(sum, weights), (category, entry)| {
                let weight = entry.importance.weight() * category.multiplier();
                (sum + f64::from(entry.score) * weight, weights + weight)
            });

    if weight_sum == 0.0 {
        return 0;
    }
    (weighted_sum / weight_sum).round() as u32
}
