//! cloudtree - Main entry point

use std::io::{self, Write};

use clap::Parser;
use log::{debug, info};

use cloudtree::ui::{create_spinner, finish_spinner};
use cloudtree::{
    collect_account, collect_organization, write_tree, Adapter, Cli, Command, Context,
    InventoryError, RunOptions, SettingsStore,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting cloudtree v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), InventoryError> {
    let store = match &cli.config {
        Some(path) => SettingsStore::with_path(path.clone()),
        None => SettingsStore::new(),
    };
    let options = RunOptions::resolve(&cli, store.load()?)?;
    debug!(
        "Provider {}: {:?}, timeout {:?}",
        cli.command.provider(),
        options.collect,
        options.timeout
    );

    let adapter = Adapter::system(options.timeout);
    let spinner = create_spinner("Collecting inventory...", cli.quiet);
    let ctx = Context::new(&adapter, &options.collect, spinner.as_ref());

    let result = match &cli.command {
        Command::Aws(_) => collect_account(ctx).await,
        Command::Gcp(_) => collect_organization(ctx).await,
    };
    finish_spinner(spinner);
    let tree = result?;
    info!("Collected {} nodes", tree.node_count());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_tree(&mut out, &tree)?;
    out.flush()?;
    Ok(())
}
