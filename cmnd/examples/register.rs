//! Register a module to a base
//!
//! Put the base in registration mode first. Set `BASE_RFPI` to register
//! to one specific base only.

use std::time::Duration;

use anyhow::Context;
use cmnd::types::Rfpi;
use cmnd::{LinkConfig, Module, TcpTransport};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let host = std::env::var("BRIDGE_HOST").unwrap_or_else(|_| "192.168.1.50".to_string());
    let port = std::env::var("BRIDGE_PORT")
        .ok()
        .map(|port| port.parse::<u16>())
        .transpose()
        .context("BRIDGE_PORT is not a port number")?
        .unwrap_or(2000);

    let base = std::env::var("BASE_RFPI")
        .ok()
        .map(|rfpi| rfpi.parse::<Rfpi>())
        .transpose()
        .context("BASE_RFPI is not a valid RFPI")?;

    let config = LinkConfig::new().with_registration_timeout(Duration::from_secs(60));
    let mut module = Module::with_config(TcpTransport::new(host, port), config);
    module.connect().await?;

    let status = module.reset().await?;
    println!("Module up: {}", status);

    if status.is_registered() {
        println!("Already registered as device {}, deregistering...", status.device_id);
        module.deregister().await?;
    }

    let device_id = module.register(base.as_ref()).await?;
    println!("Registered as device {}", device_id);

    module.disconnect().await?;

    Ok(())
}
