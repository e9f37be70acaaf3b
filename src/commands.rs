use std::io::Write;

use anyhow::{bail, Context, Result};
use board::action::validation_feedback;
use board::{BannerKind, BoardSync, ParkRequest, StatusUpdate, TargetStatus};
use clap::Args;
use serde_json::json;

use crate::client::BoardClient;
use crate::logging;
use crate::table;
use crate::watch::poll_once;

#[derive(Debug, Args, Clone)]
pub struct StatusArgs {
    /// Slot identifier, e.g. SLOT-03
    pub slot: String,

    /// New status: available, reserved or unavailable
    pub status: TargetStatus,
}

#[derive(Debug, Args, Clone)]
pub struct ParkArgs {
    /// Available slot to park in
    #[arg(short, long)]
    pub slot: Option<String>,

    /// Vehicle plate number
    #[arg(short, long, default_value = "")]
    pub plate: String,

    /// Vehicle model
    #[arg(short, long, default_value = "")]
    pub model: String,
}

/// Send a status change, then refresh and print the board whatever the
/// outcome of the update.
pub async fn set_status<W: Write>(
    client: &BoardClient,
    args: StatusArgs,
    out: &mut W,
) -> Result<()> {
    let update = StatusUpdate::new(args.slot, args.status);

    match client.post_status(&update).await {
        Ok(()) => logging::info(
            "status_updated",
            "slot status updated",
            logging::metadata_from_pairs(&[
                ("slot", json!(update.slot_id)),
                ("status", json!(update.status.as_str())),
            ]),
        ),
        Err(err) => logging::error(
            "status_update_failed",
            &err.to_string(),
            logging::metadata_from_pairs(&[("slot", json!(update.slot_id))]),
        ),
    }

    refresh(client, out).await
}

/// Validate and send a park request. Validation failures never reach the
/// network.
pub async fn park<W: Write>(client: &BoardClient, args: ParkArgs, out: &mut W) -> Result<()> {
    let request = match ParkRequest::from_form(&args.plate, &args.model, args.slot.as_deref()) {
        Ok(request) => request,
        Err(err) => bail!(validation_feedback(&err).text),
    };

    let outcome = client.post_park(&request).await;
    let feedback = request.feedback(&outcome);
    if feedback.kind == BannerKind::Error {
        let reason = outcome.err().map(|err| err.to_string()).unwrap_or_default();
        logging::error(
            "park_failed",
            &reason,
            logging::metadata_from_pairs(&[("slot", json!(request.slot))]),
        );
        bail!(feedback.text);
    }

    writeln!(out, "{}", feedback.text).context("failed to print park result")?;
    refresh(client, out).await
}

async fn refresh<W: Write>(client: &BoardClient, out: &mut W) -> Result<()> {
    let mut sync = BoardSync::new();
    if poll_once(client, &mut sync).await.is_ok() {
        table::write_board(out, sync.snapshot()).context("failed to print board")?;
    }
    Ok(())
}
