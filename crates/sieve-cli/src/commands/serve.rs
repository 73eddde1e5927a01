//! Serve command - run the HTTP cleaning endpoint.

use std::net::{IpAddr, SocketAddr};

use colored::Colorize;
use sieve::SieveConfig;

use crate::server::{app, state::AppState};

pub fn run(host: IpAddr, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(SieveConfig::default());
    let addr = SocketAddr::new(host, port);

    // Print server info
    println!();
    println!(
        "{} {}",
        "Starting sieve server at".cyan().bold(),
        format!("http://{}", addr).white().bold()
    );
    println!();
    println!("  POST /api/clean");
    println!("  GET  /api/rules");
    println!("  GET  /api/health");
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        tokio::spawn(async {
            tokio::signal::ctrl_c().await.ok();
            println!();
            println!("{}", "Shutting down...".yellow());
            std::process::exit(0);
        });

        app::run_server(state, addr).await
    })
}
