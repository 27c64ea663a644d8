use std::io::Write;

use chrono::Utc;
use recall_srs::{Scheduler, format_delay};

mod config;
mod logging;
mod simulate;

use config::SimConfig;

const USAGE: &str = "usage: srs-sim <again|hard|good|easy|1-4>...";

fn main() -> anyhow::Result<()> {
    // Load configuration from .env and environment variables
    dotenvy::dotenv().ok();
    let config = SimConfig::from_env()?;

    logging::init_tracing(&config.env);

    let ratings = simulate::parse_ratings(std::env::args().skip(1))?;
    if ratings.is_empty() {
        anyhow::bail!(USAGE);
    }

    let scheduler = Scheduler::new(&config.scheduler)?;
    tracing::debug!(
        learning_steps = ?config.scheduler.learning_steps_minutes,
        "Scheduler configured"
    );

    let steps = simulate::simulate(&scheduler, &ratings, Utc::now());

    let mut out = std::io::stdout().lock();
    for step in &steps {
        serde_json::to_writer(&mut out, step)?;
        writeln!(out)?;
    }

    if let Some(last) = steps.last() {
        for (rating, delay) in scheduler.preview_at(&last.card, last.reviewed_at) {
            tracing::info!(%rating, next = %format_delay(delay), "Preview");
        }
    }

    tracing::info!(reviews = steps.len(), "Simulation finished");
    Ok(())
}
