use std::sync::Arc;
use tokio::sync::Notify;

use activities_server::{config, logger, server, store};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;
    logger::init(&cfg)?;

    // Build the Tokio runtime, sizing worker threads from config
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;

    // The catalog is fixed for the process lifetime; only rosters mutate
    let catalog = store::load_catalog(&cfg.store.seed_file)?;
    let activity_count = catalog.len();

    let listener = server::bind_listener(addr)?;
    let state = Arc::new(config::AppState::new(
        cfg,
        store::ActivityStore::new(catalog),
    ));

    logger::log_server_start(&addr, &state.config, activity_count);

    let shutdown = Arc::new(Notify::new());
    server::signal::start_signal_handler(Arc::clone(&shutdown));

    // Use LocalSet for spawn_local support in connection handling
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::run_server(listener, state, shutdown))
        .await
}
