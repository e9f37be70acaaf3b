use leptos::*;
use wasm_bindgen::prelude::wasm_bindgen;

mod components;
pub mod live;
mod logging;

pub use components::parking_board::{BoardContext, ParkingBoard};
pub use logging::init_logging;

/// Root component bootstrapping the parking board.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app-root">
            <ParkingBoard />
        </main>
    }
}

/// WASM entry point called automatically by `trunk`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), wasm_bindgen::JsValue> {
    init_logging();
    console_error_panic_hook::set_once();

    leptos::mount_to_body(|| view! { <App /> });
    Ok(())
}
