use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Failed to scrape data from: '{0}', status: {1}")]
    RequestNotOk(String, reqwest::StatusCode),
    #[error("File error: '{0}'")]
    IoError(#[from] std::io::Error),
    #[error("Csv error: '{0}'")]
    Csv(#[from] csv::Error),
    #[error("Json error: '{0}'")]
    Json(#[from] serde_json::Error),
}

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_JOBS_FOUND: &str = "No jobs found";

/// One scraped job record. Field order is the column order of the output file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JobPosting {
    pub company: String,
    pub position: String,
    pub skills: String,
    pub link: String,
    pub source: String,
}

impl JobPosting {
    /// Placeholder row emitted when a scrape of `url` produced nothing.
    pub fn no_jobs_found(url: &str) -> Self {
        Self {
            company: NOT_AVAILABLE.to_owned(),
            position: NO_JOBS_FOUND.to_owned(),
            skills: NOT_AVAILABLE.to_owned(),
            link: url.to_owned(),
            source: url.to_owned(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.position == NO_JOBS_FOUND && self.company == NOT_AVAILABLE && self.link == self.source
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    Featured,
    MissingCompany,
    MissingPosition,
}

/// Result of looking at a single listing element.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Posting(JobPosting),
    Skipped(Skip),
}

impl Outcome {
    pub(crate) fn into_posting(self, index: usize) -> Option<JobPosting> {
        match self {
            Outcome::Posting(posting) => Some(posting),
            Outcome::Skipped(reason) => {
                log::debug!("skipping element {}: {:?}", index, reason);
                None
            }
        }
    }
}
