//! # cmnd
//!
//! Host-side driver for DECT-ULE radio modules speaking the CMND API.
//!
//! ## Features
//!
//! - Allocation-free frame codec with an incremental byte framer
//! - Typed Information Elements and one builder per outgoing message
//! - Async request/confirm helpers over any byte transport
//! - Background receive task with a bounded envelope queue
//!
//! ## Quick Start
//!
//! ```no_run
//! use cmnd::{Module, TcpTransport};
//! use cmnd::ie::AlertIe;
//! use cmnd::types::{AlertState, UnitType};
//!
//! #[tokio::main]
//! async fn main() -> cmnd::Result<()> {
//!     // Module behind a serial-over-TCP bridge
//!     let mut module = Module::new(TcpTransport::new("192.168.1.50", 2000));
//!     module.connect().await?;
//!
//!     let status = module.reset().await?;
//!     println!("{}", status);
//!
//!     let alert = AlertIe {
//!         unit_type: UnitType::SmokeDetector,
//!         alert_state: AlertState::Alerting,
//!     };
//!     module.send_alert(2, &alert).await?;
//!
//!     module.disconnect().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod module;

// Re-exports
pub use config::LinkConfig;
pub use error::{Error, Result};
pub use module::Module;

pub use cmnd_core::{
    builders, ie, service, Dispatcher, Envelope, Framer, FramerStats, LinkState, Packet, Service,
    Session,
};
pub use cmnd_transport::{StreamTransport, TcpTransport, Transport};

/// Domain value types
pub mod types {
    pub use cmnd_types::*;
}
