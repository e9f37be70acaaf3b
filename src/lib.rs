pub mod cli;
pub mod client;
pub mod commands;
pub mod logging;
pub mod table;
pub mod watch;
