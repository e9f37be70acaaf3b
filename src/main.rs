use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use park_board::cli::{Cli, Command};
use park_board::client::BoardClient;
use park_board::{commands, logging, watch};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init(LevelFilter::Info);

    let cli = Cli::parse();
    let client = BoardClient::new(cli.config())?;
    let mut stdout = std::io::stdout();

    match cli.command() {
        Command::Watch(args) => watch::run(&client, args).await,
        Command::Status(args) => commands::set_status(&client, args, &mut stdout).await,
        Command::Park(args) => commands::park(&client, args, &mut stdout).await,
    }
}
