mod calendar;
mod config;
mod error;
mod github;
mod svg;

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use config::Config;

/// Output path, fully overwritten on every successful run.
const OUTPUT_PATH: &str = "garden.svg";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    let spinner = create_spinner(format!("Fetching contributions for {}", config.username));
    let result = github::fetch_contributions(&config.username, &config.token).await;
    spinner.finish_and_clear();

    // Fail fast: the artifact is only ever written from complete data.
    let contributions = result.context("Failed to fetch contribution data from GitHub")?;

    println!(
        "{} contributions fetched for {}",
        contributions.total,
        config.username.bold()
    );

    let year = Local::now().year();
    let document = svg::render(&contributions.days, year);

    std::fs::write(OUTPUT_PATH, document)
        .with_context(|| format!("Failed to write {}", OUTPUT_PATH))?;

    println!("{}", format!("{} updated", OUTPUT_PATH).green());

    Ok(())
}

fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("{msg} {spinner}")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
