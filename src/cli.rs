use clap::{Parser, Subcommand};

use board::constants::DEFAULT_BASE_URL;
use board::BoardConfig;

use crate::commands::{ParkArgs, StatusArgs};
use crate::watch::WatchArgs;

#[derive(Debug, Parser)]
#[command(author, version, about = "Parking lot occupancy board client")]
pub struct Cli {
    /// Base URL of the board server
    #[arg(long, global = true, env = "PARK_BOARD_URL", default_value = DEFAULT_BASE_URL)]
    url: String,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn config(&self) -> BoardConfig {
        BoardConfig {
            base_url: self.url.clone(),
            ..BoardConfig::default()
        }
    }

    pub fn command(self) -> Command {
        self.command.unwrap_or_default()
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Poll the board and print it whenever it changes
    Watch(WatchArgs),
    /// Mark a slot available, reserved or unavailable
    Status(StatusArgs),
    /// Park a vehicle in an available slot
    Park(ParkArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Watch(WatchArgs::default())
    }
}
