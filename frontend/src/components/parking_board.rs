use board::{Banner, BoardConfig, BoardSync, ClickTarget};
use leptos::*;
use wasm_bindgen::JsCast;

use crate::live::actions;

#[cfg(target_arch = "wasm32")]
use crate::live::poll;

use super::{
    message_banner::MessageBanner, park_form::ParkForm, slot_grid::SlotGrid, stats_bar::StatsBar,
};

/// Inputs of the park form; the selection doubles as the picker value.
#[derive(Clone, Copy)]
pub struct ParkFormState {
    pub plate: RwSignal<String>,
    pub model: RwSignal<String>,
    pub selected: RwSignal<Option<String>>,
}

impl ParkFormState {
    fn new() -> Self {
        Self {
            plate: create_rw_signal(String::new()),
            model: create_rw_signal(String::new()),
            selected: create_rw_signal(None),
        }
    }

    pub fn reset(&self) {
        self.plate.set(String::new());
        self.model.set(String::new());
        self.selected.set(None);
    }
}

/// Shared board state handed to every component via context.
#[derive(Clone, Copy)]
pub struct BoardContext {
    pub sync: RwSignal<BoardSync>,
    pub banner: RwSignal<Banner>,
    pub form: ParkFormState,
    pub config: StoredValue<BoardConfig>,
}

/// Top-level board wrapper: owns the coordinator, starts polling and closes
/// menus on clicks that reach the window.
#[component]
pub fn ParkingBoard() -> impl IntoView {
    let board = BoardContext {
        sync: create_rw_signal(BoardSync::new()),
        banner: create_rw_signal(Banner::new()),
        form: ParkFormState::new(),
        config: store_value(BoardConfig::same_origin()),
    };

    #[cfg(target_arch = "wasm32")]
    poll::start_polling(board);

    let listener = window_event_listener(ev::click, move |ev| {
        actions::window_click(board, click_target(&ev));
    });
    on_cleanup(move || listener.remove());

    provide_context(board);

    view! {
        <div class="parking-board">
            <header class="parking-board__header">
                <h1>"Parking Board"</h1>
                <StatsBar />
            </header>
            <section class="parking-board__body">
                <SlotGrid />
                <aside class="parking-board__sidebar">
                    <ParkForm />
                    <MessageBanner />
                </aside>
            </section>
        </div>
    }
}

/// Classify a window click by the nearest `[data-action]` ancestor of its
/// target. Clicks on a menu trigger are left to the grid's toggle.
fn click_target(ev: &ev::MouseEvent) -> ClickTarget {
    let kind = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest("[data-action]").ok().flatten())
        .and_then(|element| element.get_attribute("data-action"));

    ClickTarget::from_action_kind(kind.as_deref())
}
