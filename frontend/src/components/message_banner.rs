use leptos::*;

use super::parking_board::BoardContext;

#[component]
pub fn MessageBanner() -> impl IntoView {
    let board = use_context::<BoardContext>().expect("board context missing");

    view! {
        <div id="messageBox" class=move || board.banner.with(|banner| banner.css_class())>
            {move || board.banner.with(|banner| banner.text().to_string())}
        </div>
    }
}
