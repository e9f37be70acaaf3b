use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use board::constants::POLL_INTERVAL_MS;
use board::{BoardError, BoardSync, SyncOutcome};
use clap::Args;
use serde_json::json;
use tokio::time::{self, MissedTickBehavior};

use crate::client::BoardClient;
use crate::logging;
use crate::table;

#[derive(Debug, Args, Clone)]
pub struct WatchArgs {
    /// Milliseconds between two polls of the board
    #[arg(short, long, default_value_t = POLL_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Stop after printing the board this many times
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl Default for WatchArgs {
    fn default() -> Self {
        Self {
            interval_ms: POLL_INTERVAL_MS,
            limit: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchSummary {
    pub polls: usize,
    pub renders: usize,
    pub failures: usize,
}

pub async fn run(client: &BoardClient, args: WatchArgs) -> Result<()> {
    let mut stdout = std::io::stdout();
    let summary = run_with_output(client, args, &mut stdout).await?;
    logging::info(
        "watch_stopped",
        "stopped watching the board",
        logging::metadata_from_pairs(&[
            ("polls", json!(summary.polls)),
            ("renders", json!(summary.renders)),
            ("failures", json!(summary.failures)),
        ]),
    );
    Ok(())
}

/// Poll until Ctrl-C or until `limit` renders, printing the board to `out`
/// only when it changes.
pub async fn run_with_output<W: Write>(
    client: &BoardClient,
    args: WatchArgs,
    out: &mut W,
) -> Result<WatchSummary> {
    let mut sync = BoardSync::new();
    let mut summary = WatchSummary::default();

    let mut ticker = time::interval(Duration::from_millis(args.interval_ms.max(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    logging::info(
        "watch_started",
        "polling board snapshot",
        logging::metadata_from_pairs(&[
            ("url", json!(client.config().full_status_url())),
            ("interval_ms", json!(args.interval_ms)),
        ]),
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                logging::info_simple("watch_interrupted", "received Ctrl-C");
                break;
            }
        }

        summary.polls += 1;
        match poll_once(client, &mut sync).await {
            Ok(SyncOutcome::Rendered) => {
                table::write_board(out, sync.snapshot()).context("failed to print board")?;
                out.flush().context("failed to flush board output")?;
                summary.renders += 1;
            }
            Ok(SyncOutcome::Unchanged | SyncOutcome::MenuOpen | SyncOutcome::Stale) => {}
            Err(_) => summary.failures += 1,
        }

        if args.limit.is_some_and(|limit| summary.renders >= limit) {
            break;
        }
    }

    Ok(summary)
}

/// Fetch one snapshot and reconcile it. Failures are logged here and leave
/// the cache untouched; the caller keeps polling.
pub async fn poll_once(
    client: &BoardClient,
    sync: &mut BoardSync,
) -> Result<SyncOutcome, BoardError> {
    let ticket = sync.begin_fetch();
    match client.fetch_snapshot().await {
        Ok(snapshot) => Ok(sync.apply(ticket, snapshot)),
        Err(err) => {
            sync.record_failure(ticket, &err);
            Err(err)
        }
    }
}
