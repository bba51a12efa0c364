//! Raise and clear a smoke alarm, then print whatever the module reports

use std::time::Duration;

use cmnd::ie::AlertIe;
use cmnd::service::{fun, Service};
use cmnd::types::{AlertState, UnitType};
use cmnd::{Module, TcpTransport};
use tokio::time::sleep;

const SMOKE_UNIT: u8 = 2;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let host = std::env::var("BRIDGE_HOST").unwrap_or_else(|_| "192.168.1.50".to_string());

    let mut module = Module::new(TcpTransport::new(host, 2000));
    module.connect().await?;

    let status = module.reset().await?;
    if !status.is_registered() {
        anyhow::bail!("module is not registered, run the register example first");
    }

    println!("Raising alarm...");
    module
        .send_alert(
            SMOKE_UNIT,
            &AlertIe {
                unit_type: UnitType::SmokeDetector,
                alert_state: AlertState::Alerting,
            },
        )
        .await?;

    sleep(Duration::from_secs(3)).await;

    println!("Clearing alarm...");
    module
        .send_alert(
            SMOKE_UNIT,
            &AlertIe {
                unit_type: UnitType::SmokeDetector,
                alert_state: AlertState::NotAlerting,
            },
        )
        .await?;

    let level = module.rssi().await?;
    println!("RSSI: {}", level);

    // Hand the receive path to a background task and print what arrives
    let (mut rx, task) = module.into_receiver();
    while let Some(envelope) = rx.recv().await {
        if envelope.is(Service::Fun, fun::RECV_IND) {
            println!("Data from base: {:?}", envelope.ie::<cmnd::ie::FunIe>());
        } else {
            println!("{}", envelope);
        }
    }
    task.await??;

    Ok(())
}
