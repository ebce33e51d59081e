use pulldown_cmark::{html, Parser};

use crate::constants::{self, GLOBAL_DATA};
use crate::covid::AggregateCounters;

pub(crate) const SELECT_COUNTRY_PROMPT: &str = "### Select a country to view its statistics.";
pub(crate) const INVALID_COUNTRY_PROMPT: &str = "### Select a valid country";

/// Formats `n` with `,` between every group of three digits.
pub(crate) fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn counters_markdown(heading: &str, labels: [&str; 4], counters: &AggregateCounters) -> String {
    let mut md = format!("### {heading}\n");
    for (label, value) in labels.iter().zip(counters.values()) {
        md.push_str(&format!("- **{label}:** {}\n", format_thousands(value)));
    }
    md
}

pub(crate) fn global_stats_markdown() -> String {
    counters_markdown(
        "Global Statistics",
        ["Total Cases", "Total Deaths", "Total Recovered", "Total Active"],
        &GLOBAL_DATA,
    )
}

pub(crate) fn country_stats_markdown(country: Option<&str>) -> String {
    let country = match country.map(str::trim) {
        Some(c) if !c.is_empty() => c,
        _ => return SELECT_COUNTRY_PROMPT.to_string(),
    };
    match constants::country_counters(country) {
        Some(counters) => counters_markdown(
            &format!("{country} Statistics"),
            ["Cases", "Deaths", "Recovered", "Active"],
            counters,
        ),
        None => INVALID_COUNTRY_PROMPT.to_string(),
    }
}

pub(crate) fn render_markdown(markdown: &str) -> String {
    let mut out = String::new();
    html::push_html(&mut out, Parser::new(markdown));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(100000), "100,000");
    }

    #[test]
    fn global_stats_lists_all_counters() {
        let md = global_stats_markdown();
        assert!(md.starts_with("### Global Statistics\n"));
        assert!(md.contains("- **Total Cases:** 500\n"));
        assert!(md.contains("- **Total Deaths:** 100\n"));
        assert!(md.contains("- **Total Recovered:** 200\n"));
        assert!(md.contains("- **Total Active:** 200\n"));
    }

    #[test]
    fn country_stats_for_known_country() {
        let md = country_stats_markdown(Some("US"));
        assert!(md.starts_with("### US Statistics\n"));
        assert!(md.contains("- **Cases:** 900\n"));
        assert!(md.contains("- **Active:** 200\n"));
    }

    #[test]
    fn country_stats_fallbacks() {
        assert_eq!(country_stats_markdown(None), SELECT_COUNTRY_PROMPT);
        assert_eq!(country_stats_markdown(Some("  ")), SELECT_COUNTRY_PROMPT);
        assert_eq!(country_stats_markdown(Some("Narnia")), INVALID_COUNTRY_PROMPT);
    }

    #[test]
    fn markdown_renders_to_html() {
        let html = render_markdown(&country_stats_markdown(Some("India")));
        assert!(html.contains("<h3>India Statistics</h3>"));
        assert!(html.contains("<li><strong>Cases:</strong> 800</li>"));
    }
}
