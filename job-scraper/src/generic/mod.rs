//! Layout-agnostic fallback for job boards without a dedicated extractor.
//!
//! Candidate listing elements are located with a fixed list of selectors,
//! from most to least specific. The first selector whose matches yield at
//! least one posting wins; results from different selectors are never mixed.

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

use crate::html::{first_by_preference, first_descendant, non_empty_text};
use crate::types::{JobPosting, Outcome, Skip, NOT_AVAILABLE};

pub const MAX_ELEMENTS: usize = 20;

pub const PATTERNS: [&str; 6] = [
    "div.job",
    "div.job-listing",
    "article.job",
    "li.job",
    r#"div[class*="job"]"#,
    r#"div[class*="listing"]"#,
];

pub struct Pattern {
    pub css: &'static str,
    selector: Selector,
}

impl Pattern {
    fn new(css: &'static str) -> Self {
        Self {
            css,
            selector: Selector::parse(css).unwrap(),
        }
    }

    /// At most `MAX_ELEMENTS` matches, in document order.
    pub fn candidates<'a>(&self, doc: &'a Html) -> Vec<ElementRef<'a>> {
        doc.select(&self.selector).take(MAX_ELEMENTS).collect()
    }

    pub fn apply(&self, doc: &Html, url: &str) -> Vec<JobPosting> {
        self.candidates(doc)
            .into_iter()
            .map(|el| extract_element(el, url))
            .enumerate()
            .filter_map(|(index, outcome)| outcome.into_posting(index))
            .collect()
    }
}

lazy_static! {
    static ref CHAIN: Vec<Pattern> = PATTERNS.into_iter().map(Pattern::new).collect();
    static ref TITLE: [Selector; 4] = [
        Selector::parse("h2").unwrap(),
        Selector::parse("h3").unwrap(),
        Selector::parse(".title").unwrap(),
        Selector::parse(r#"[class*="title"]"#).unwrap(),
    ];
    static ref COMPANY: [Selector; 2] = [
        Selector::parse(".company").unwrap(),
        Selector::parse(r#"[class*="company"]"#).unwrap(),
    ];
    static ref LINK: Selector = Selector::parse("a[href]").unwrap();
}

pub fn extract(doc: &Html, url: &str) -> Vec<JobPosting> {
    extract_with_pattern(doc, url)
        .map(|(_, jobs)| jobs)
        .unwrap_or_default()
}

/// Runs the selector chain and reports which pattern produced the postings.
pub fn extract_with_pattern(doc: &Html, url: &str) -> Option<(&'static str, Vec<JobPosting>)> {
    for pattern in CHAIN.iter() {
        let jobs = pattern.apply(doc, url);
        if jobs.is_empty() {
            log::debug!("pattern '{}' yielded no jobs", pattern.css);
            continue;
        }
        log::info!("Extracted {} jobs with pattern '{}'", jobs.len(), pattern.css);
        return Some((pattern.css, jobs));
    }
    log::info!("No pattern matched any jobs on {}", url);
    None
}

fn extract_element(el: ElementRef, url: &str) -> Outcome {
    let position = match first_by_preference(el, TITLE.as_slice()).and_then(non_empty_text) {
        Some(position) => position,
        None => return Outcome::Skipped(Skip::MissingPosition),
    };
    let company = first_by_preference(el, COMPANY.as_slice())
        .and_then(non_empty_text)
        .unwrap_or_else(|| NOT_AVAILABLE.to_owned());
    let link = first_descendant(el, &LINK)
        .and_then(|a| a.value().attr("href"))
        .unwrap_or_default()
        .to_owned();
    Outcome::Posting(JobPosting {
        company,
        position,
        skills: NOT_AVAILABLE.to_owned(),
        link,
        source: url.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://jobs.example.com/board";

    #[test]
    fn test_substring_pattern_with_missing_company() {
        let doc = Html::parse_document(
            r#"<html><body>
                <div class="job-card"><h2>Backend Engineer</h2><span class="company-name">Acme</span><a href="/j/1">apply</a></div>
                <div class="job-card"><h2>Frontend Engineer</h2><span class="company">Globex</span></div>
                <div class="job-card"><span class="job-title">SRE</span></div>
            </body></html>"#,
        );
        let (pattern, jobs) = extract_with_pattern(&doc, URL).unwrap();
        assert_eq!(pattern, r#"div[class*="job"]"#);
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0].company, "Acme");
        assert_eq!(jobs[0].link, "/j/1");
        assert_eq!(jobs[1].company, "Globex");
        assert_eq!(jobs[1].link, "");
        assert_eq!(jobs[2].company, "N/A");
        assert_eq!(jobs[2].position, "SRE");
        assert!(jobs.iter().all(|j| j.skills == "N/A" && j.source == URL));
    }

    #[test]
    fn test_earliest_productive_pattern_wins() {
        let doc = Html::parse_document(
            r#"<html><body>
                <li class="job"><h3>From list</h3></li>
                <article class="job"><h2>From article</h2></article>
            </body></html>"#,
        );
        let (pattern, jobs) = extract_with_pattern(&doc, URL).unwrap();
        assert_eq!(pattern, "article.job");
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].position, "From article");
    }

    #[test]
    fn test_pattern_without_titles_falls_through() {
        let doc = Html::parse_document(
            r#"<html><body>
                <div class="job"><p>no title here</p></div>
                <li class="job"><h2>Real listing</h2></li>
            </body></html>"#,
        );
        let (pattern, jobs) = extract_with_pattern(&doc, URL).unwrap();
        assert_eq!(pattern, "li.job");
        assert_eq!(jobs[0].position, "Real listing");
    }

    #[test]
    fn test_element_cap_per_pattern() {
        let items = (0..50)
            .map(|i| format!(r#"<article class="job"><h2>Role {}</h2></article>"#, i))
            .collect::<String>();
        let doc = Html::parse_document(&format!("<html><body>{}</body></html>", items));
        assert_eq!(CHAIN[2].candidates(&doc).len(), MAX_ELEMENTS);
        let jobs = extract(&doc, URL);
        assert_eq!(jobs.len(), MAX_ELEMENTS);
        assert_eq!(jobs.last().unwrap().position, "Role 19");
    }

    #[test]
    fn test_heading_preferred_over_title_class() {
        let doc = Html::parse_document(
            r#"<div class="job"><span class="title">Subtitle</span><h3>Heading</h3></div>"#,
        );
        assert_eq!(extract(&doc, URL)[0].position, "Heading");
    }

    #[test]
    fn test_blank_company_reads_as_missing() {
        let doc = Html::parse_document(
            r#"<div class="job"><h2>Platform Engineer</h2><span class="company">   </span></div>"#,
        );
        assert_eq!(extract(&doc, URL)[0].company, "N/A");
    }

    #[test]
    fn test_no_candidates() {
        let doc = Html::parse_document("<html><body><p>nothing to see</p></body></html>");
        assert!(extract_with_pattern(&doc, URL).is_none());
        assert!(extract(&doc, URL).is_empty());
    }
}
