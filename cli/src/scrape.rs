use std::path::Path;

use job_scraper::{normalize_url, output, scrape_data, FetchConfig, Fetcher, JobPosting};

const PREVIEW_ROWS: usize = 5;

pub async fn run(url: &str, output_path: &Path) -> Result<(), job_scraper::Error> {
    let url = normalize_url(url);
    println!("Scraping jobs from {}...", url);

    let fetcher = Fetcher::new(FetchConfig::default())?;
    let jobs = scrape_data(&fetcher, &url).await;
    output::save(output_path, &jobs)?;
    log::info!("Saved {} jobs to {}", jobs.len(), output_path.display());

    println!("[OK] Found {} job listings", jobs.len());
    println!("[OK] Saved to {}", output_path.display());
    if !jobs.is_empty() {
        println!("\n[DATA] Top {} jobs:", PREVIEW_ROWS);
        for line in preview(&jobs) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cells(job: &JobPosting) -> [&str; 5] {
    [&job.company, &job.position, &job.skills, &job.link, &job.source]
}

/// Header plus the first rows of `jobs`, padded into aligned columns.
fn preview(jobs: &[JobPosting]) -> Vec<String> {
    let rows = jobs.iter().take(PREVIEW_ROWS).map(cells).collect::<Vec<_>>();
    let mut widths = output::COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let format_row = |row: &[&str; 5]| {
        row.iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_owned()
    };
    std::iter::once(format_row(&output::COLUMNS))
        .chain(rows.iter().map(format_row))
        .collect()
}
