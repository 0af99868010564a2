//! Per-category scoring rules.
//!
//! Each rule is an independent pure function over a [`MetadataRecord`]. The
//! thresholds are heuristics kept stable for compatibility with existing
//! reports.

use url::Url;

use super::types::{CategoryScore, Importance};
use crate::parse::MetadataRecord;

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

pub(super) fn title(record: &MetadataRecord) -> CategoryScore {
    let importance = Importance::High;
    let Some(title) = record.title.as_deref().filter(|t| !t.trim().is_empty()) else {
        return CategoryScore::new(0, "Title is missing", importance);
    };

    let (score, feedback) = match title.chars().count() {
        0..10 => (30, "Title is too short (recommended: 30-60 characters)"),
        10..30 => (60, "Title is slightly short (recommended: 30-60 characters)"),
        30..=60 => (100, "Title length is optimal"),
        61..=70 => (80, "Title is slightly long (recommended: 30-60 characters)"),
        _ => (50, "Title is too long and may be truncated in search results"),
    };
    CategoryScore::new(score, feedback, importance)
}

pub(super) fn description(record: &MetadataRecord) -> CategoryScore {
    let importance = Importance::High;
    let Some(description) = record
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
    else {
        return CategoryScore::new(0, "Description is missing", importance);
    };

    let (score, feedback) = match description.chars().count() {
        0..70 => (30, "Description is too short (recommended: 120-160 characters)"),
        70..120 => (60, "Description is slightly short (recommended: 120-160 characters)"),
        120..=160 => (100, "Description length is optimal"),
        161..=180 => (80, "Description is slightly long (recommended: 120-160 characters)"),
        _ => (50, "Description is too long and may be truncated in search results"),
    };
    CategoryScore::new(score, feedback, importance)
}

pub(super) fn keywords(record: &MetadataRecord) -> CategoryScore {
    let importance = Importance::Medium;
    if record.keywords.is_empty() {
        return CategoryScore::new(0, "No keywords found", importance);
    }

    let valid = record
        .keywords
        .iter()
        .filter(|k| !k.trim().is_empty())
        .count();

    let (score, feedback) = match valid {
        0 => (0, "No valid keywords found"),
        1..3 => (40, "Too few keywords (recommended: 5-10 keywords)"),
        3..5 => (70, "Could use more keywords (recommended: 5-10 keywords)"),
        5..=10 => (100, "Good number of keywords"),
        11..=15 => (80, "Slightly too many keywords (recommended: 5-10 keywords)"),
        _ => (50, "Too many keywords may be considered keyword stuffing"),
    };
    CategoryScore::new(score, feedback, importance)
}

pub(super) fn image(record: &MetadataRecord) -> CategoryScore {
    let importance = Importance::Medium;
    let Some(image) = record.image.as_deref().filter(|i| !i.trim().is_empty()) else {
        return CategoryScore::new(0, "No featured image found", importance);
    };

    match Url::parse(image) {
        Ok(_) => CategoryScore::new(100, "Featured image is present", importance),
        Err(_) => CategoryScore::new(50, "Featured image URL may be invalid", importance),
    }
}

pub(super) fn social(record: &MetadataRecord) -> CategoryScore {
    let elements = [
        (record.title.as_deref(), "title"),
        (record.description.as_deref(), "description"),
        (record.image.as_deref(), "image"),
        (record.site_name.as_deref(), "site name"),
    ];
    let (score, missing) = presence_score(&elements);

    let feedback = match score {
        100 => "All social metadata elements are present".to_string(),
        75..=99 => format!(
            "Most social metadata elements are present, missing: {}",
            missing.join(", ")
        ),
        50..=74 => format!(
            "Several social metadata elements are missing: {}",
            missing.join(", ")
        ),
        _ => "Most social metadata elements are missing".to_string(),
    };
    CategoryScore::new(score, feedback, Importance::Medium)
}

pub(super) fn technical(record: &MetadataRecord) -> CategoryScore {
    let elements = [
        (record.page_type.as_deref(), "type"),
        (record.author.as_deref(), "author"),
        (Some(record.url.as_str()), "URL"),
        (record.canonical_url.as_deref(), "canonical URL"),
        (record.language.as_deref(), "language"),
    ];
    let (score, missing) = presence_score(&elements);

    let feedback = match score {
        100 => "All technical metadata elements are present".to_string(),
        60..=99 => format!(
            "Some technical metadata elements are missing: {}",
            missing.join(", ")
        ),
        _ => "Many technical metadata elements are missing".to_string(),
    };
    CategoryScore::new(score, feedback, Importance::Low)
}

/// Percentage of non-blank elements (rounded) and the names of the blank ones.
fn presence_score(elements: &[(Option<&str>, &'static str)]) -> (u32, Vec<&'static str>) {
    let missing: Vec<&'static str> = elements
        .iter()
        .filter(|(value, _)| is_blank(*value))
        .map(|(_, name)| *name)
        .collect();
    let present = elements.len() - missing.len();
    let score = (present as f64 / elements.len() as f64 * 100.0).round() as u32;
    (score, missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MetadataRecord {
        MetadataRecord::new("https://example.com/")
    }

    fn with_title(len: usize) -> MetadataRecord {
        let mut r = record();
        r.title = Some("t".repeat(len));
        r
    }

    #[test]
    fn test_title_boundaries() {
        assert_eq!(title(&record()).score, 0);
        assert_eq!(title(&with_title(9)).score, 30);
        assert_eq!(title(&with_title(10)).score, 60);
        assert_eq!(title(&with_title(29)).score, 60);
        assert_eq!(title(&with_title(30)).score, 100);
        assert_eq!(title(&with_title(60)).score, 100);
        assert_eq!(title(&with_title(61)).score, 80);
        assert_eq!(title(&with_title(70)).score, 80);
        assert_eq!(title(&with_title(71)).score, 50);
    }

    #[test]
    fn test_blank_title_is_missing() {
        let mut r = record();
        r.title = Some("   ".to_string());
        let score = title(&r);
        assert_eq!(score.score, 0);
        assert_eq!(score.feedback, "Title is missing");
    }

    #[test]
    fn test_description_boundaries() {
        let score_for = |len: usize| {
            let mut r = record();
            r.description = Some("d".repeat(len));
            description(&r).score
        };
        assert_eq!(score_for(69), 30);
        assert_eq!(score_for(70), 60);
        assert_eq!(score_for(119), 60);
        assert_eq!(score_for(120), 100);
        assert_eq!(score_for(160), 100);
        assert_eq!(score_for(161), 80);
        assert_eq!(score_for(180), 80);
        assert_eq!(score_for(181), 50);
    }

    #[test]
    fn test_keyword_counts() {
        let score_for = |n: usize| {
            let mut r = record();
            r.keywords = (0..n).map(|i| format!("k{i}")).collect();
            keywords(&r)
        };
        assert_eq!(score_for(0).feedback, "No keywords found");
        assert_eq!(score_for(2).score, 40);
        assert_eq!(score_for(3).score, 70);
        assert_eq!(score_for(5).score, 100);
        assert_eq!(score_for(10).score, 100);
        assert_eq!(score_for(11).score, 80);
        assert_eq!(score_for(16).score, 50);
    }

    #[test]
    fn test_all_blank_keywords() {
        let mut r = record();
        r.keywords = vec![" ".to_string(), String::new()];
        let score = keywords(&r);
        assert_eq!(score.score, 0);
        assert_eq!(score.feedback, "No valid keywords found");
    }

    #[test]
    fn test_image_validity() {
        let mut r = record();
        assert_eq!(image(&r).score, 0);
        r.image = Some("https://cdn.example.com/a.png".to_string());
        assert_eq!(image(&r).score, 100);
        r.image = Some("/relative.png".to_string());
        assert_eq!(image(&r).score, 50);
    }

    #[test]
    fn test_social_feedback_names_missing() {
        let mut r = record();
        r.title = Some("Title".to_string());
        r.description = Some("Description".to_string());
        r.image = Some("https://example.com/i.png".to_string());
        let score = social(&r);
        assert_eq!(score.score, 75);
        assert_eq!(
            score.feedback,
            "Most social metadata elements are present, missing: site name"
        );

        r.image = None;
        let score = social(&r);
        assert_eq!(score.score, 50);
        assert_eq!(
            score.feedback,
            "Several social metadata elements are missing: image, site name"
        );

        let score = social(&record());
        assert_eq!(score.score, 0);
        assert_eq!(score.feedback, "Most social metadata elements are missing");
    }

    #[test]
    fn test_technical_counts_url() {
        let score = technical(&record());
        assert_eq!(score.score, 20);
        assert_eq!(score.importance, Importance::Low);
        assert_eq!(score.feedback, "Many technical metadata elements are missing");

        let mut r = record();
        r.page_type = Some("website".to_string());
        r.language = Some("en".to_string());
        let score = technical(&r);
        assert_eq!(score.score, 60);
        assert_eq!(
            score.feedback,
            "Some technical metadata elements are missing: author, canonical URL"
        );
    }
}
