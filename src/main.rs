//! # Product Inventory
//!
//! Interactive entry point. Parses the command line, sets up tracing, opens the
//! inventory file and hands stdin/stdout to the [`Menu`].

use std::io;

use anyhow::Context;
use clap::Parser;
use product_inventory::cli::{Cli, Menu};
use product_inventory::inventory;
use product_inventory::lifecycle::setup_tracing;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup tracing once for the entire application
    setup_tracing();

    info!(file = %cli.file.display(), "Starting product inventory");
    let client = inventory::open(&cli.file);

    let stdin = io::stdin();
    let mut menu = Menu::new(client, stdin.lock(), io::stdout());
    menu.run().context("menu session failed")?;

    info!("Session finished");
    Ok(())
}
