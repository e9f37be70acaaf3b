//! Browser-side drivers for the board engine: HTTP transport, the polling
//! loop and the user-action handlers.

pub mod actions;
pub mod api;
pub mod poll;
