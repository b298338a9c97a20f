use expense_tracker::{
    config::ConfigManager,
    init,
    web::{run_server, ServerError},
    Tracker,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init();

    if let Err(err) = run().await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ConfigManager::new().load_with_env()?;
    let tracker = Tracker::open(config)?;
    run_server(tracker).await
}
