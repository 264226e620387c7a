//! Atelier operator CLI

use std::process;

use clap::Parser;

mod cli;

use crate::cli::Cli;

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = cli.run().await {
        eprintln!("{error}");
        process::exit(1);
    }
}
