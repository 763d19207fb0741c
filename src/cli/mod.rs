use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use crate::api::fetch_collection;
use crate::core::leaderboard::{count_completed, rank};
use crate::core::roster::active_worker_index;
use crate::core::types::{RankedEntry, Shift, Worker};

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_LIMIT: usize = 3;

fn print_help() {
    println!("Print the most productive active workers as JSON.\n");
    println!("Usage: top-workers [options]\n");
    println!("Options:");
    println!("  --api-url <url>   API base URL (default: $API_BASE_URL or {DEFAULT_API_BASE_URL})");
    println!("  --limit <n>       Number of workers to report (default: {DEFAULT_LIMIT})");
    println!("  --help            Show this help");
}

fn parse_api_url(args: &[String]) -> String {
    let mut api_url =
        std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--api-url" => {
                if i + 1 < args.len() {
                    api_url = args[i + 1].clone();
                    i += 2;
                } else {
                    i += 1;
                }
            }
            _ => i += 1,
        }
    }
    api_url
}

fn parse_limit(args: &[String]) -> Result<usize> {
    let mut limit = DEFAULT_LIMIT;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--limit" => {
                if i + 1 < args.len() {
                    limit = args[i + 1]
                        .parse()
                        .with_context(|| format!("invalid --limit value '{}'", args[i + 1]))?;
                    i += 2;
                } else {
                    i += 1;
                }
            }
            _ => i += 1,
        }
    }
    Ok(limit)
}

pub async fn run_main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "help" || a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    // Log to stderr so stdout stays pure JSON
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let api_url = parse_api_url(&args);
    let limit = parse_limit(&args)?;

    let top_workers = run_pipeline(&api_url, limit).await?;
    println!("{}", serde_json::to_string_pretty(&top_workers)?);
    Ok(())
}

async fn run_pipeline(api_url: &str, limit: usize) -> Result<Vec<RankedEntry>> {
    let now = Utc::now();
    let base = api_url.trim_end_matches('/');
    let client = reqwest::Client::new();

    let workers: Vec<Worker> = fetch_collection(&client, &format!("{base}/workers")).await?;
    let shifts: Vec<Shift> = fetch_collection(&client, &format!("{base}/shifts")).await?;

    let index = active_worker_index(&workers);
    info!(
        "fetched {} workers ({} active) and {} shifts",
        workers.len(),
        index.len(),
        shifts.len()
    );

    let counts = count_completed(&shifts, &index, now);
    Ok(rank(&counts, &index, limit))
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_LIMIT, parse_api_url, parse_limit};

    fn args(rest: &[&str]) -> Vec<String> {
        std::iter::once("top-workers")
            .chain(rest.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn api_url_flag_overrides_default() {
        let parsed = parse_api_url(&args(&["--api-url", "http://127.0.0.1:9999"]));
        assert_eq!(parsed, "http://127.0.0.1:9999");
    }

    #[test]
    fn limit_defaults_to_three() {
        assert_eq!(parse_limit(&args(&[])).unwrap(), DEFAULT_LIMIT);
    }

    #[test]
    fn limit_flag_is_parsed() {
        assert_eq!(parse_limit(&args(&["--limit", "5"])).unwrap(), 5);
    }

    #[test]
    fn non_numeric_limit_is_an_error() {
        assert!(parse_limit(&args(&["--limit", "many"])).is_err());
    }
}
