use super::{render_json, render_listing, render_lookup, render_not_found, render_search};
use crate::document::Document;
use crate::engine::{Entry, HapSpec, SearchHit};
use crate::heading::Namespace;

fn render<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
{
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn entry(number: &str, sort_key: u32, name: &str) -> Entry {
    Entry {
        number: number.to_string(),
        sort_key,
        name: name.to_string(),
    }
}

fn hit(line: usize) -> SearchHit {
    SearchHit {
        line,
        header: String::new(),
        matched: "m".to_string(),
        context: format!("context {line}"),
    }
}

#[test]
fn test_lookup_prints_references() {
    let spec = HapSpec::new(Document::from_text(
        "##### 8.3 Lightbulb\nUses \"9.3 On\".\n##### 9.3 On\nOn or off.",
    ));
    let lookup = spec.get_service("Lightbulb").unwrap();

    let text = render(|out| render_lookup(out, Namespace::Service, "Lightbulb", &lookup));

    assert!(text.starts_with("\n### Service: Lightbulb\n"));
    assert!(text.contains("### Referenced sections"));
    assert!(text.contains("\n--- 9.3 On ---\n##### 9.3 On\nOn or off.\n"));
}

#[test]
fn test_lookup_without_references_omits_block() {
    let spec = HapSpec::new(Document::from_text("##### 9.3 On\nOn or off."));
    let lookup = spec.get_characteristic("On").unwrap();

    let text = render(|out| render_lookup(out, Namespace::Characteristic, "On", &lookup));

    assert!(!text.contains("Referenced sections"));
}

#[test]
fn test_not_found_lists_suggestions() {
    let suggestions = [entry("8.2", 2, "Air Purifier")];

    let text =
        render(|out| render_not_found(out, Namespace::Service, "Purifier", &suggestions));

    assert_eq!(
        text,
        "Service 'Purifier' not found\n\nAvailable services:\n  8.2: Air Purifier\n"
    );
}

#[test]
fn test_listing_counts_entries() {
    let entries = [entry("9.2", 2, "Brightness"), entry("9.3", 3, "On")];

    let text = render(|out| render_listing(out, Namespace::Characteristic, &entries));

    assert_eq!(
        text,
        "Found 2 characteristics:\n\n  9.2: Brightness\n  9.3: On\n"
    );
}

#[test]
fn test_search_truncates_to_max_results() {
    let hits: Vec<SearchHit> = (1..=4).map(hit).collect();

    let text = render(|out| render_search(out, "term", &hits, 2));

    assert!(text.contains("Found 4 matches:"));
    assert!(text.contains("--- Match 2 (line 2) ---"));
    assert!(!text.contains("--- Match 3"));
    assert!(text.ends_with("\n... and 2 more matches\n"));
}

#[test]
fn test_search_empty_reports_no_results() {
    let text = render(|out| render_search(out, "xyz", &[], 10));
    assert!(text.ends_with("No results found for 'xyz'\n"));
}

#[test]
fn test_json_uses_match_field() {
    let mut out = Vec::new();
    render_json(&mut out, &[hit(7)]).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(value[0]["line"], 7);
    assert_eq!(value[0]["match"], "m");
    assert!(value[0].get("matched").is_none());
}
