use board::action::{ACTION_SET_STATUS, ACTION_TOGGLE_MENU};
use board::{BoardAction, SlotCard, view as board_view};
use leptos::*;
use wasm_bindgen::JsCast;

use crate::live::actions;

use super::parking_board::BoardContext;

/// Grid of slot cards. The whole subtree is rebuilt whenever the cards
/// derived from the accepted snapshot differ; fields a card never shows,
/// such as the plate of a free slot, do not trigger a rebuild. Clicks are
/// resolved by one delegated handler.
#[component]
pub fn SlotGrid() -> impl IntoView {
    let board = use_context::<BoardContext>().expect("board context missing");

    let stagger = board.config.with_value(|config| config.entrance_stagger);
    let cards = create_memo(move |_| {
        board
            .sync
            .with(|sync| board_view::grid_with_stagger(sync.snapshot(), stagger))
    });
    let open_menu = create_memo(move |_| {
        board
            .sync
            .with(|sync| sync.menu().open_id().map(str::to_string))
    });

    let on_click = move |ev: ev::MouseEvent| {
        if let Some(action) = action_from_event(&ev) {
            actions::dispatch(board, action);
        }
    };

    view! {
        <section class="parking-grid" on:click=on_click>
            {move || {
                cards
                    .get()
                    .into_iter()
                    .map(|card| view! { <SlotCardView card=card open_menu=open_menu /> })
                    .collect_view()
            }}
        </section>
    }
}

#[component]
fn SlotCardView(card: SlotCard, open_menu: Memo<Option<String>>) -> impl IntoView {
    let id_for_menu = card.id.clone();
    let menu_visible = move || open_menu.get().as_deref() == Some(id_for_menu.as_str());

    let menu_buttons = card
        .actions
        .into_iter()
        .map(|status| {
            view! {
                <button
                    data-action=ACTION_SET_STATUS
                    data-slot=card.id.clone()
                    data-status=status.as_str()
                >
                    <i class=status.icon()></i>
                    " "
                    {status.label()}
                </button>
            }
        })
        .collect_view();

    let vehicle = card.vehicle.clone().map(|vehicle| {
        view! {
            <div class="car-details">
                <span class="car-plate">{vehicle.plate}</span>
                <span class="car-model">{vehicle.model}</span>
            </div>
        }
    });

    view! {
        <div class=card.css_class() style=format!("animation-delay: {}", card.animation_delay())>
            <div class="slot-header">
                <span class="slot-id">{card.id.clone()}</span>
                <div class="menu-container">
                    <i
                        class="fa-solid fa-ellipsis-vertical menu-btn"
                        data-action=ACTION_TOGGLE_MENU
                        data-slot=card.id.clone()
                    ></i>
                    <div class="context-menu" class:show=menu_visible>
                        {menu_buttons}
                    </div>
                </div>
            </div>
            <div class="icon-area">
                <i class="fa-solid fa-car"></i>
            </div>
            <div class="slot-status">
                <span class="slot-status-badge">{card.badge.clone()}</span>
            </div>
            {vehicle}
        </div>
    }
}

/// Resolve the nearest `[data-action]` element under the click into an action.
fn action_from_event(ev: &ev::MouseEvent) -> Option<BoardAction> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let element = target.closest("[data-action]").ok()??;
    let kind = element.get_attribute("data-action")?;

    BoardAction::from_dataset(
        &kind,
        element.get_attribute("data-slot").as_deref(),
        element.get_attribute("data-status").as_deref(),
    )
    .map_err(|err| log::warn!("ignoring grid click: {err}"))
    .ok()
}
