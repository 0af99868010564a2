//! robots.txt parsing and crawlability.

/// Collects the `Disallow` rules that apply to `User-agent: *`, in file order.
///
/// Lines are trimmed and matched case-insensitively. A `User-agent:` line
/// switches attribution on when its value is `*` and off for any other agent.
/// Rule values keep their case. Empty `Disallow:` lines contribute nothing.
/// Only the text up to a second `:` is kept, so a rule containing a colon is cut there.
pub fn parse_disallow_rules(robots_txt: &str) -> Vec<String> {
    let mut rules = Vec::new();
    let mut applies_to_all = false;

    for line in robots_txt.lines() {
        let line = line.trim();
        let lower = line.to_ascii_lowercase();

        if lower.starts_with("user-agent:") {
            applies_to_all = field_value(line).to_ascii_lowercase() == "*";
        } else if applies_to_all && lower.starts_with("disallow:") {
            let rule = field_value(line);
            if !rule.is_empty() {
                rules.push(rule.to_string());
            }
        }
    }

    rules
}

/// The text between the first and second `:`, trimmed.
fn field_value(line: &str) -> &str {
    line.split(':').nth(1).unwrap_or_default().trim()
}

/// Decides whether `url` may be crawled under `rules`.
///
/// The path is `url` with the `site_url` prefix removed (or all of `url` when
/// it does not start with `site_url`), with a leading `/` added if missing.
/// A `/` rule blocks everything; otherwise any rule the path starts with
/// blocks it.
pub fn is_crawlable(url: &str, site_url: &str, rules: &[String]) -> bool {
    let rest = url.strip_prefix(site_url).unwrap_or(url);
    let path = if rest.starts_with('/') {
        rest.to_string()
    } else {
        format!("/{rest}")
    };

    !rules
        .iter()
        .filter(|rule| !rule.is_empty())
        .any(|rule| rule == "/" || path.starts_with(rule.as_str()))
}
