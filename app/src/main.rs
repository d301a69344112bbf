use std::io;

use clap::Parser;
use todo_app::{Config, UreqTransport};
use todo_core::{HttpTodoApi, TodoStore};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // stdout belongs to the rendered list.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();
    tracing::info!(base_url = %config.base_url, "starting todo client");

    let api = HttpTodoApi::new(&config.base_url, UreqTransport::new());
    let mut store = TodoStore::new(api);
    todo_app::run(&mut store, io::stdin().lock(), io::stdout().lock())
}
