use board::SyncOutcome;
use gloo_timers::callback::Interval;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::parking_board::BoardContext;

use super::api;

/// Fetch once now, then every `poll_interval` for the lifetime of the page.
pub fn start_polling(board: BoardContext) {
    refresh(board);

    let period = board.config.with_value(|config| config.poll_interval);
    let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
    Interval::new(millis, move || refresh(board)).forget();
}

/// Run one fetch-and-reconcile cycle. Also used for out-of-band refreshes
/// after a mutation.
pub fn refresh(board: BoardContext) {
    let Some(ticket) = board.sync.try_update_untracked(|sync| sync.begin_fetch()) else {
        return;
    };
    let config = board.config.get_value();

    spawn_local(async move {
        match api::fetch_snapshot(&config).await {
            Ok(snapshot) => {
                let outcome = board
                    .sync
                    .try_update(|sync| sync.apply(ticket, snapshot));
                if let Some(SyncOutcome::Rendered) = outcome {
                    log::debug!("board re-rendered from snapshot #{}", ticket.sequence());
                }
            }
            Err(err) => board
                .sync
                .with_untracked(|sync| sync.record_failure(ticket, &err)),
        }
    });
}
