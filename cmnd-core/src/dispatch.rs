//! Routing of received envelopes to handlers

use std::collections::HashMap;
use std::fmt;

use tracing::trace;

use crate::{envelope::Envelope, service::Service};

type Handler = Box<dyn FnMut(&Envelope) + Send>;

/// Calls one handler per `(service_id, message_id)` pair
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// use cmnd_core::service::{general, Service};
/// use cmnd_core::{Dispatcher, Envelope};
///
/// let seen = Arc::new(AtomicBool::new(false));
/// let flag = seen.clone();
///
/// let mut dispatcher = Dispatcher::new();
/// dispatcher.on(Service::General, general::HELLO_IND, move |_| {
///     flag.store(true, Ordering::SeqCst);
/// });
///
/// let mut env = Envelope::new();
/// env.message_id = general::HELLO_IND;
/// assert!(dispatcher.dispatch(&env));
/// assert!(seen.load(Ordering::SeqCst));
/// ```
#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<(u16, u8), Handler>,
    fallback: Option<Handler>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for one message, replacing any previous one
    pub fn on<F>(&mut self, service: Service, message_id: u8, handler: F) -> &mut Self
    where
        F: FnMut(&Envelope) + Send + 'static,
    {
        self.handlers
            .insert((service.into(), message_id), Box::new(handler));
        self
    }

    /// Register the handler for messages nobody else handles
    pub fn otherwise<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut(&Envelope) + Send + 'static,
    {
        self.fallback = Some(Box::new(handler));
        self
    }

    /// Remove the handler for one message
    pub fn remove(&mut self, service: Service, message_id: u8) -> bool {
        self.handlers
            .remove(&(service.into(), message_id))
            .is_some()
    }

    /// Route one envelope
    ///
    /// Returns `true` if a handler (or the fallback) ran.
    pub fn dispatch(&mut self, envelope: &Envelope) -> bool {
        let key = (envelope.service_id, envelope.message_id);

        if let Some(handler) = self.handlers.get_mut(&key) {
            handler(envelope);
            return true;
        }

        match self.fallback.as_mut() {
            Some(handler) => {
                handler(envelope);
                true
            }
            None => {
                trace!(%envelope, "No handler");
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("handlers", &self.handlers.len())
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}
