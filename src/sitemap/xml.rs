//! Sitemap XML parsing.

use quick_xml::events::Event;
use quick_xml::Reader;

const URLSET: &str = "urlset";
const URL: &str = "url";
const LOC: &str = "loc";

/// Extracts the `<loc>` of every `<urlset><url>` entry, in document order.
///
/// Element names are matched by local name, so namespace prefixes are
/// ignored. Only the first `<loc>` of an entry is used; an entry without one
/// is skipped and an empty `<loc>` yields an empty string. Duplicates are
/// kept. Malformed XML stops the scan and the entries read so far are
/// returned.
pub fn extract_sitemap_urls(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    let mut path: Vec<String> = Vec::new();
    let mut urls = Vec::new();
    // First <loc> of the current <url>
    let mut entry_loc: Option<String> = None;
    // Text of the <loc> being read, when it is the entry's first
    let mut loc_text: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                path.push(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
                if at_url(&path) {
                    entry_loc = None;
                } else if at_loc(&path) && entry_loc.is_none() {
                    loc_text = Some(String::new());
                }
            }
            Ok(Event::Empty(ref e)) => {
                path.push(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
                if at_loc(&path) && entry_loc.is_none() {
                    entry_loc = Some(String::new());
                }
                path.pop();
            }
            Ok(Event::Text(ref e)) => {
                if let Some(text) = loc_text.as_mut() {
                    match e.unescape() {
                        Ok(unescaped) => text.push_str(&unescaped),
                        Err(err) => {
                            log::debug!("Keeping raw <loc> text after unescape error: {}", err);
                            text.push_str(&String::from_utf8_lossy(e));
                        }
                    }
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some(text) = loc_text.as_mut() {
                    text.push_str(&String::from_utf8_lossy(e));
                }
            }
            Ok(Event::End(_)) => {
                if at_loc(&path) {
                    if let Some(text) = loc_text.take() {
                        entry_loc = Some(text.trim().to_string());
                    }
                } else if at_url(&path) {
                    if let Some(loc) = entry_loc.take() {
                        urls.push(loc);
                    }
                }
                path.pop();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                log::warn!(
                    "Malformed sitemap XML at byte {}: {} (keeping {} URLs read so far)",
                    reader.buffer_position(),
                    e,
                    urls.len()
                );
                break;
            }
            _ => {}
        }
        buf.clear();
    }

    urls
}

fn at_url(path: &[String]) -> bool {
    matches!(path, [root, entry] if root == URLSET && entry == URL)
}

fn at_loc(path: &[String]) -> bool {
    matches!(path, [root, entry, loc] if root == URLSET && entry == URL && loc == LOC)
}
