//! Type definitions for the CMND API
//!
//! Plain value types shared by the codec and the module handle. None of
//! these know anything about the wire layout.

pub mod error;
pub mod module_status;
pub mod rfpi;
pub mod status;
pub mod unit;

pub use error::{Error, Result};
pub use module_status::{ModuleStatus, PowerupMode, RegistrationStatus};
pub use rfpi::Rfpi;
pub use status::{AlertState, ResponseCode, TamperStatus};
pub use unit::UnitType;
