use std::process;

use docket_server::{config, error::ServerError, telemetry, AppState};
use tokio::net::TcpListener;
use tracing::{dispatcher, error, info, Dispatch, Level};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_error(&error);
        process::exit(1);
    }
}

fn report_error(error: &ServerError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "server error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "server error");
    });
}

async fn run() -> Result<(), ServerError> {
    let settings = config::load_with_cli()?;
    telemetry::init(&settings.logging)?;

    let state = AppState::from_settings(&settings);
    let listener = TcpListener::bind(settings.server.addr).await?;
    info!(
        addr = %settings.server.addr,
        seeded = settings.todos.seed,
        render_output = %settings.render.output_path.display(),
        "listening"
    );
    docket_server::run_until(listener, state, shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
