//! Roomboard TUI entry point.
//!
//! # Usage
//!
//! ```bash
//! # Against a hosted backend
//! roomboard --graphql-url https://<sub>.hasura.<region>.nhost.run/v1/graphql \
//!           --auth-url https://<sub>.auth.<region>.nhost.run/v1
//!
//! # Offline, with seeded rooms
//! roomboard --demo
//! ```

use clap::Parser;
use roomboard_app::{App, SessionStatus};
use roomboard_client::{GraphqlClient, HostedAuth};
use roomboard_tui::{Args, Backend, Config, Runtime, TerminalDriver, demo, logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::try_from(Args::parse())?;
    let _guard = logging::init(&config.log_dir, &config.log_level)?;

    tracing::info!(backend = ?config.backend, timeout = ?config.timeout, "roomboard starting");

    // No stored session: every run starts on the sign-in screen.
    let app = App::new(SessionStatus::Unauthenticated, config.refresh);

    match config.backend {
        Backend::Demo => {
            let backend = demo::backend();
            let driver = TerminalDriver::new()?;
            Runtime::new(driver, app, backend.clone(), backend).run().await?;
        },
        Backend::Remote { graphql_url, auth_url } => {
            let rooms = GraphqlClient::new(graphql_url, config.timeout)?;
            let auth = HostedAuth::new(auth_url, config.timeout)?;
            let driver = TerminalDriver::new()?;
            Runtime::new(driver, app, rooms, auth).run().await?;
        },
    }

    tracing::info!("roomboard stopped");
    Ok(())
}
