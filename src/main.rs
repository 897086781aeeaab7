use std::{env, fs, io, process};

use tokio::net::TcpListener;
use tokio::signal;

use teekkarikalenteri::cli;
use teekkarikalenteri::server::{self, AppState, SeedData};

fn setup_logging() {
    if env::var("LOG").is_err() {
        env::set_var("LOG", "teekkarikalenteri=info");
    }

    pretty_env_logger::init_custom_env("LOG");
}

fn load_seed(args: &cli::Args) -> SeedData {
    let raw = match fs::read_to_string(&args.data_file) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("Failed to read '{}': {err}", args.data_file.display());
            process::exit(1);
        }
    };

    match serde_json::from_str(&raw) {
        Ok(seed) => seed,
        Err(err) => {
            eprintln!("Failed to parse '{}': {err}", args.data_file.display());
            process::exit(1);
        }
    }
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_ok() {
        log::info!("shutting down");
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = cli::parse(env::args().skip(1).collect());

    setup_logging();

    let seed = load_seed(&args);
    let state = AppState::new(seed, args.enable_cache);

    let listener = TcpListener::bind(args.address).await?;
    log::info!("listening on http://{}", args.address);

    axum::serve(listener, server::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}
