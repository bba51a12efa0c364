//! Link state shared between the receive path and request helpers
//!
//! A session tracks:
//! - The cookie written into outgoing frames
//! - Whether the module is registered, and under which device id
//! - The last module status reported by the module

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use cmnd_types::ModuleStatus;
use tracing::{debug, info};

use crate::{
    constants::DEFAULT_COOKIE,
    envelope::Envelope,
    ie::{GeneralStatusIe, RegistrationResponseIe},
    service::{device_management, general, Service},
};

/// Registration state as last reported by the module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// Nothing heard from the module yet
    Unknown,

    /// Module is up but not registered to a base
    Unregistered,

    /// Module is registered and addressable
    Registered { device_id: u16 },
}

/// Session handle
///
/// Thread-safe and can be cloned cheaply (Arc internally).
#[derive(Debug, Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    cookie: AtomicU8,
    state: parking_lot::RwLock<LinkState>,
    status: parking_lot::RwLock<Option<ModuleStatus>>,
}

impl Session {
    /// Create a session using the default cookie
    pub fn new() -> Self {
        Self::with_cookie(DEFAULT_COOKIE)
    }

    pub fn with_cookie(cookie: u8) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                cookie: AtomicU8::new(cookie),
                state: parking_lot::RwLock::new(LinkState::Unknown),
                status: parking_lot::RwLock::new(None),
            }),
        }
    }

    /// Cookie for outgoing frames
    pub fn cookie(&self) -> u8 {
        self.inner.cookie.load(Ordering::Acquire)
    }

    pub fn set_cookie(&self, cookie: u8) {
        self.inner.cookie.store(cookie, Ordering::Release);
    }

    /// Stamp the session cookie onto an outgoing envelope
    pub fn stamp(&self, envelope: &mut Envelope) {
        envelope.cookie = self.cookie();
    }

    pub fn state(&self) -> LinkState {
        *self.inner.state.read()
    }

    pub fn is_registered(&self) -> bool {
        matches!(self.state(), LinkState::Registered { .. })
    }

    /// Device id assigned by the base, if registered
    pub fn device_id(&self) -> Option<u16> {
        match self.state() {
            LinkState::Registered { device_id } => Some(device_id),
            _ => None,
        }
    }

    /// Last status reported in a Hello indication or status response
    pub fn module_status(&self) -> Option<ModuleStatus> {
        *self.inner.status.read()
    }

    /// Update link state from a received envelope
    ///
    /// Envelopes that carry no state information are ignored.
    pub fn observe(&self, envelope: &Envelope) {
        let Ok(service) = envelope.service() else {
            return;
        };

        match (service, envelope.message_id) {
            (Service::General, general::HELLO_IND | general::GET_STATUS_RES) => {
                if let Some(ie) = envelope.ie::<GeneralStatusIe>() {
                    self.update_status(ie.status);
                }
            }
            (
                Service::DeviceManagement,
                device_management::REGISTER_DEVICE_CFM | device_management::REGISTER_DEVICE_IND,
            ) => {
                if let Some(ie) = envelope.ie::<RegistrationResponseIe>() {
                    if ie.response.is_ok() {
                        self.set_state(LinkState::Registered {
                            device_id: ie.device_address,
                        });
                    }
                }
            }
            (
                Service::DeviceManagement,
                device_management::DEREGISTER_DEVICE_CFM | device_management::DEREGISTER_DEVICE_IND,
            ) => {
                self.set_state(LinkState::Unregistered);
            }
            _ => {}
        }
    }

    /// Forget everything learned from the module, e.g. after a reset
    pub fn mark_reset(&self) {
        *self.inner.status.write() = None;
        self.set_state(LinkState::Unknown);
    }

    fn update_status(&self, status: ModuleStatus) {
        *self.inner.status.write() = Some(status);

        let state = if status.is_registered() {
            LinkState::Registered {
                device_id: status.device_id,
            }
        } else {
            LinkState::Unregistered
        };
        self.set_state(state);
    }

    fn set_state(&self, state: LinkState) {
        let mut current = self.inner.state.write();
        if *current != state {
            debug!(from = ?*current, to = ?state, "Link state changed");
            if let LinkState::Registered { device_id } = state {
                info!(device_id, "Module registered");
            }
            *current = state;
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
