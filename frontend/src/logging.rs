use log::Level;

/// Route `log` records from the board engine and the UI to the browser console.
pub fn init_logging() {
    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    let _ = console_log::init_with_level(level);
}
