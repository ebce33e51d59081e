use crate::constants::{self, COUNTRIES};
use crate::rankings::RankColumn;

pub(crate) const TITLE: &str = "COVID Insight Hub";

const TEMPLATE: &str = include_str!("index.html");

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn options<'a>(items: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    items
        .map(|(value, label)| format!("      <option value=\"{}\">{}</option>", escape(value), escape(label)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn render_index() -> String {
    let country_options = options(constants::country_options().into_iter().map(|c| (c, c)));
    let rank_columns = options(RankColumn::ALL.iter().map(|c| (c.slug(), c.label())));
    let country_names = COUNTRIES
        .iter()
        .map(|c| format!("      <option value=\"{}\">", escape(c)))
        .collect::<Vec<_>>()
        .join("\n");

    TEMPLATE
        .replace("{{title}}", TITLE)
        .replace("{{country_options}}", &country_options)
        .replace("{{rank_columns}}", &rank_columns)
        .replace("{{country_names}}", &country_names)
}
