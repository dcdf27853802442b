pub mod fetch;
pub mod generic;
pub(crate) mod html;
pub mod output;
pub mod remoteok;
pub mod types;

use scraper::Html;

pub use fetch::{normalize_url, FetchConfig, Fetcher};
pub use types::{Error, JobPosting, Result};

pub const DEFAULT_URL: &str = "https://remoteok.com/remote-python-jobs";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    RemoteOk,
    Generic,
}

impl Site {
    pub fn detect(url: &str) -> Self {
        if url.contains("remoteok.com") {
            Site::RemoteOk
        } else {
            Site::Generic
        }
    }
}

/// Runs the extractor for `site` over an already fetched page.
pub fn extract(site: Site, url: &str, body: &str) -> Vec<JobPosting> {
    let doc = Html::parse_document(body);
    match site {
        Site::RemoteOk => remoteok::extract(&doc),
        Site::Generic => generic::extract(&doc, url),
    }
}

async fn scrape(fetcher: &Fetcher, site: Site, url: &str) -> Result<Vec<JobPosting>> {
    if site == Site::RemoteOk {
        fetcher.polite_pause().await;
    }
    let body = fetcher.fetch(url).await?;
    Ok(extract(site, url, &body))
}

/// Scrapes `url` and always returns at least one row: a failed or empty
/// scrape degrades to a single "No jobs found" placeholder.
pub async fn scrape_data(fetcher: &Fetcher, url: &str) -> Vec<JobPosting> {
    let site = Site::detect(url);
    log::info!("Scraping {} as {:?}", url, site);
    let mut jobs = match scrape(fetcher, site, url).await {
        Ok(jobs) => jobs,
        Err(e) => {
            log::warn!("Error: {}", e);
            Vec::new()
        }
    };
    if jobs.is_empty() {
        jobs.push(JobPosting::no_jobs_found(url));
    }
    jobs
}
