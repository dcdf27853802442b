mod scrape;

use std::path::PathBuf;

use clap::Parser;
use dotenv::dotenv;
use job_scraper::DEFAULT_URL;

/// Job Listing Tracker
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Target URL (job board, default: RemoteOK Python jobs)
    #[clap(long, env = "JOB_TRACKER_URL", default_value = DEFAULT_URL)]
    url: String,

    /// Output file path, written as JSON when it ends in .json
    #[clap(long, env = "JOB_TRACKER_OUTPUT", default_value = "output/results.csv")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), job_scraper::Error> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Cli::parse();
    scrape::run(&args.url, &args.output).await
}
