use board::action::validation_feedback;
use board::{BannerMessage, BoardAction, ClickTarget, ParkRequest};
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::parking_board::BoardContext;

use super::{api, poll};

/// Route a grid interaction through the coordinator; status changes are
/// posted and followed by a refresh whatever the outcome.
pub fn dispatch(board: BoardContext, action: BoardAction) {
    let update = board
        .sync
        .try_update(|sync| sync.dispatch(&action))
        .flatten();

    let Some(update) = update else {
        return;
    };
    let config = board.config.get_value();

    spawn_local(async move {
        if let Err(err) = api::post_status(&config, &update).await {
            log::error!(
                "status update {} -> {} failed: {err}",
                update.slot_id,
                update.status
            );
        }
        poll::refresh(board);
    });
}

/// Apply a click that reached the window. Subscribers are only woken when
/// a menu actually closes.
pub fn window_click(board: BoardContext, target: ClickTarget) {
    let closes = target == ClickTarget::Elsewhere
        && board.sync.with_untracked(|sync| sync.menu().is_open());
    if closes {
        board.sync.update(|sync| {
            sync.window_click(target);
        });
    }
}

/// Validate and send the park form.
pub fn submit_park(board: BoardContext) {
    let plate = board.form.plate.get_untracked();
    let model = board.form.model.get_untracked();
    let selected = board.form.selected.get_untracked();

    let request = match ParkRequest::from_form(&plate, &model, selected.as_deref()) {
        Ok(request) => request,
        Err(err) => {
            show_banner(board, validation_feedback(&err));
            return;
        }
    };
    let config = board.config.get_value();

    spawn_local(async move {
        let outcome = api::post_park(&config, &request).await;
        show_banner(board, request.feedback(&outcome));

        match outcome {
            Ok(()) => {
                board.form.reset();
                poll::refresh(board);
            }
            Err(err) => log::error!("park in {} failed: {err}", request.slot),
        }
    });
}

/// Show `message` and clear it after the banner timeout unless a newer
/// message replaced it in the meantime.
pub fn show_banner(board: BoardContext, message: BannerMessage) {
    let Some(token) = board.banner.try_update(|banner| banner.show(message)) else {
        return;
    };
    let timeout = board.config.with_value(|config| config.banner_timeout);
    let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);

    spawn_local(async move {
        TimeoutFuture::new(millis).await;
        board.banner.update(|banner| {
            banner.expire(token);
        });
    });
}
