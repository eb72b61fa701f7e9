use anyhow::{Result, bail};
use clap::Parser;
use tracing::info;

use interconnect_wizard::models::PortDirection;
use interconnect_wizard::utils::catalog::PortCatalog;

/// List the ports the interconnect wizard would offer for one end of a
/// connection.
#[derive(Parser)]
#[command(name = "port-lister", version, about)]
struct Args {
    /// Which end of the connection to list ports for: source or destination
    #[arg(long, default_value = "source")]
    direction: String,

    /// Override the catalog service base URL
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_ansi(false)
        .init();

    let direction = match args.direction.as_str() {
        "source" => PortDirection::Source,
        "destination" => PortDirection::Destination,
        other => bail!("unknown direction: {} (expected source or destination)", other),
    };

    let catalog = match args.base_url {
        Some(url) => PortCatalog::with_base_url(url),
        None => PortCatalog::new(),
    };

    info!("Fetching {} ports", direction);

    let ports = catalog
        .fetch_ports(direction)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    if ports.is_empty() {
        println!("No {} ports available", direction);
    } else {
        println!("Found {} {} ports:", ports.len(), direction);
        for (i, port) in ports.iter().enumerate() {
            println!("{}. {} [{}]", i + 1, port, port.port_id);
        }
    }

    Ok(())
}
