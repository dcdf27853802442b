//! RemoteOK job board. Listings are `tr.job` rows of a single table.

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

use crate::html::{descendants, first_descendant, has_class, non_empty_text, text_of};
use crate::types::{JobPosting, Outcome, Skip};

pub const BASE_URL: &str = "https://remoteok.com";
pub const LABEL: &str = "RemoteOK";
pub const MAX_ROWS: usize = 30;
const MAX_TAGS: usize = 5;

lazy_static! {
    static ref ROW: Selector = Selector::parse("tr.job").unwrap();
    static ref COMPANY: Selector = Selector::parse("h3").unwrap();
    static ref POSITION: Selector = Selector::parse("h2").unwrap();
    static ref TAG: Selector = Selector::parse(".tag").unwrap();
}

/// Extracts postings from the first `MAX_ROWS` rows of a RemoteOK page.
/// Featured rows still take up one of those slots.
pub fn extract(doc: &Html) -> Vec<JobPosting> {
    let jobs = doc
        .select(&ROW)
        .take(MAX_ROWS)
        .map(extract_row)
        .enumerate()
        .filter_map(|(index, outcome)| outcome.into_posting(index))
        .collect::<Vec<_>>();
    log::info!("Extracted {} jobs from {} rows", jobs.len(), LABEL);
    jobs
}

fn extract_row(row: ElementRef) -> Outcome {
    if has_class(row, "featured") {
        return Outcome::Skipped(Skip::Featured);
    }
    let company = match first_descendant(row, &COMPANY) {
        Some(el) => text_of(el),
        None => return Outcome::Skipped(Skip::MissingCompany),
    };
    let position = match first_descendant(row, &POSITION).and_then(non_empty_text) {
        Some(position) => position,
        None => return Outcome::Skipped(Skip::MissingPosition),
    };
    let skills = descendants(row, &TAG)
        .take(MAX_TAGS)
        .map(text_of)
        .collect::<Vec<_>>()
        .join(", ");
    let link = row
        .value()
        .attr("data-url")
        .map(absolute_link)
        .unwrap_or_default();
    Outcome::Posting(JobPosting {
        company,
        position,
        skills,
        link,
        source: LABEL.to_owned(),
    })
}

fn absolute_link(link: &str) -> String {
    if link.is_empty() || link.starts_with("http") {
        link.to_owned()
    } else if link.starts_with('/') {
        format!("{}{}", BASE_URL, link)
    } else {
        format!("{}/{}", BASE_URL, link)
    }
}
