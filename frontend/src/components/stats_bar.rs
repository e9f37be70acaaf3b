use board::view::stats;
use leptos::*;

use super::parking_board::BoardContext;

#[component]
pub fn StatsBar() -> impl IntoView {
    let board = use_context::<BoardContext>().expect("board context missing");
    let counts = create_memo(move |_| board.sync.with(|sync| stats(sync.snapshot())));

    view! {
        <div class="stats-bar">
            <div class="stats-bar__item stats-bar__item--available">
                <span class="stats-bar__label">"Available"</span>
                <span id="countAvailable">{move || counts.get().available}</span>
            </div>
            <div class="stats-bar__item stats-bar__item--occupied">
                <span class="stats-bar__label">"Occupied"</span>
                <span id="countOccupied">{move || counts.get().occupied}</span>
            </div>
        </div>
    }
}
