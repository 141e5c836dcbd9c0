use crate::{
    domain::{Amount, Subscriber},
    source::{CsvSource, LoadError},
};
use askama::Template;
use serde::Deserialize;
use std::{fmt, path::Path};
use unicode_segmentation::UnicodeSegmentation;

const RULE: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Plain text with a dashed banner per price
    Text,
    /// HTML fragment with a heading per price
    Html,
}

/// Active subscribers paying the same price, already in report order.
#[derive(Debug)]
pub struct PriceGroup<'a> {
    pub price: Amount,
    pub subscribers: Vec<&'a Subscriber>,
}

impl PriceGroup<'_> {
    pub fn heading(&self) -> String {
        format!("Subscribers at {}.", self.price)
    }
}

pub struct TextReport<'a> {
    groups: Vec<PriceGroup<'a>>,
}

impl<'a> TextReport<'a> {
    pub fn new(groups: Vec<PriceGroup<'a>>) -> Self {
        Self { groups }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            let heading = group.heading();
            let rule = RULE.repeat(heading.graphemes(true).count());
            writeln!(f, "{rule}\n{heading}\n{rule}")?;

            let names: Vec<&str> = group.subscribers.iter().map(|s| s.name()).collect();
            writeln!(f, "{}", names.join("\n"))?;
        }
        Ok(())
    }
}

#[derive(Template)]
#[template(path = "report.html")]
pub struct HtmlReport<'a> {
    groups: Vec<PriceGroup<'a>>,
}

impl<'a> HtmlReport<'a> {
    pub fn new(groups: Vec<PriceGroup<'a>>) -> Self {
        Self { groups }
    }
}

/// Loads the export at `path` and renders it as plain text.
pub fn text_report(path: impl AsRef<Path>, sort_descending: bool) -> Result<String, LoadError> {
    let subscribers = CsvSource::from_path(path)?.parse()?;
    Ok(subscribers.render_text(sort_descending))
}

/// Loads the export at `path` and renders it as an HTML fragment.
pub fn html_report(path: impl AsRef<Path>, sort_descending: bool) -> Result<String, LoadError> {
    let subscribers = CsvSource::from_path(path)?.parse()?;
    Ok(subscribers.render_html(sort_descending))
}
