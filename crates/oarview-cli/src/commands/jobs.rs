//! Job-queue mode: one row per waiting/launching/running/held job, with the
//! job's reserved cores compressed into range notation.

use crate::config::Config;
use crate::display::Table;
use crate::{Cli, Result};
use log::{debug, warn};
use oarview_api::OarApiClient;
use oarview_core::{compress_pairs, format_duration, parse_token, truncate_text, Job};

pub async fn handle(cli: &Cli, site: &str, config: &Config) -> Result<()> {
    let client = OarApiClient::from_config(config)?;

    let jobs = client
        .list_jobs(site, cli.user.as_deref(), cli.results)
        .await?;

    let limit = cli.results.unwrap_or(usize::MAX);
    let now = chrono::Utc::now().timestamp();

    let mut table = Table::new(vec![
        "JOB ID".to_string(),
        "USER".to_string(),
        "NAME".to_string(),
        "TIME SINCE START".to_string(),
        "WALLTIME".to_string(),
        "STATE".to_string(),
        "NODES AND CORES".to_string(),
    ]);

    let mut shown = 0usize;
    for job in jobs.items.iter().take(limit) {
        debug!("Assembling row for job {}", job.uid);
        let detail = client.job_resources(site, job.uid).await?;
        let cores = compress_tokens(detail.core_tokens(), cli.textmax);

        table.add_row(vec![
            job.uid.to_string(),
            job.user.clone(),
            truncate_text(job.display_name(), cli.textmax),
            elapsed_cell(job, now),
            format_duration(job.walltime as f64),
            job.state.clone(),
            cores,
        ]);
        shown += 1;
    }

    table.print();
    println!("Total of {} jobs found (showing {}).", jobs.total, shown);

    Ok(())
}

/// Time since the job started, or a placeholder for queued jobs.
fn elapsed_cell(job: &Job, now: i64) -> String {
    if job.has_started() {
        format_duration((now - job.started_at) as f64)
    } else {
        "not started".to_string()
    }
}

/// Parse raw resource tokens and compress them, skipping (and logging) any
/// malformed token instead of failing the whole render.
fn compress_tokens(tokens: &[String], max_width: usize) -> String {
    let mut pairs = Vec::with_capacity(tokens.len());
    for token in tokens {
        match parse_token(token) {
            Ok(pair) => pairs.push(pair),
            Err(e) => warn!("Skipping resource token: {}", e),
        }
    }
    compress_pairs(pairs, max_width)
}
