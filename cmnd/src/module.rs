//! High-level module interface

use std::time::Duration;

use bytes::{Buf, BytesMut};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, trace, warn};

use cmnd_core::{
    builders,
    ie::{
        AlertIe, BatteryLevelIe, BatteryMeasureInfoIe, CallSettingIe, GeneralStatusIe,
        ParameterDirectIe, ParameterIe, RegistrationResponseIe, ResponseIe, U8Ie, VersionIe,
    },
    service::{alert, device_management, general, parameters, system, tamper, voice_call, Service},
    Dispatcher, Envelope, Framer, FramerStats, Packet, Session,
};
use cmnd_transport::Transport;
use cmnd_types::{ModuleStatus, ResponseCode, Rfpi, TamperStatus};

use crate::config::LinkConfig;
use crate::error::{Error, Result};

/// DECT-ULE radio module behind a byte transport
///
/// Owns the receive path of one link: the framer, the bytes received but
/// not yet framed, and the session learned from the module.
///
/// # Examples
///
/// ```no_run
/// use cmnd::{Module, StreamTransport};
///
/// # async fn run(port: tokio::io::DuplexStream) -> cmnd::Result<()> {
/// let mut module = Module::new(StreamTransport::new(port));
///
/// let status = module.reset().await?;
/// println!("Module up: {}", status);
///
/// if !status.is_registered() {
///     let device_id = module.register(None).await?;
///     println!("Registered as device {}", device_id);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Module<T> {
    transport: T,
    framer: Framer,
    pending: BytesMut,
    session: Session,
    config: LinkConfig,
}

impl<T: Transport> Module<T> {
    /// Create a module handle with the default link configuration
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, LinkConfig::default())
    }

    pub fn with_config(transport: T, config: LinkConfig) -> Self {
        Self {
            transport,
            framer: Framer::new().with_max_payload(config.max_payload()),
            pending: BytesMut::new(),
            session: Session::with_cookie(config.cookie()),
            config,
        }
    }

    /// Shared link state
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Receive-path counters
    pub fn framer_stats(&self) -> FramerStats {
        self.framer.stats()
    }

    pub fn is_connected(&self) -> bool {
        self.transport.is_connected()
    }

    /// Open the transport if it is not open yet
    pub async fn connect(&mut self) -> Result<()> {
        if !self.transport.is_connected() {
            info!("Connecting to {}...", self.transport.remote_addr());
            self.transport.connect().await?;
        }
        Ok(())
    }

    pub async fn disconnect(&mut self) -> Result<()> {
        if !self.transport.is_connected() {
            return Ok(());
        }

        info!("Disconnecting from {}...", self.transport.remote_addr());
        self.transport.disconnect().await?;
        self.discard_buffered();
        self.session.mark_reset();
        Ok(())
    }

    /// Transmit one envelope, stamped with the session cookie
    pub async fn send(&mut self, envelope: &Envelope) -> Result<()> {
        self.ensure_connected()?;

        let mut outgoing = envelope.clone();
        self.session.stamp(&mut outgoing);

        debug!(envelope = %outgoing, "TX");
        let packet = Packet::from_envelope(&outgoing);
        self.transport.send(packet.as_bytes()).await?;

        Ok(())
    }

    /// Next valid envelope from the link, within the response timeout
    pub async fn next_envelope(&mut self) -> Result<Envelope> {
        self.next_envelope_within(self.config.response_timeout()).await
    }

    /// Next valid envelope from the link
    ///
    /// Bytes left over after a complete frame are kept for the next call.
    /// Corrupt frames are dropped by the framer and counted in
    /// [`framer_stats`](Self::framer_stats).
    pub async fn next_envelope_within(&mut self, wait: Duration) -> Result<Envelope> {
        let deadline = Instant::now() + wait;

        loop {
            if let Some(envelope) = self.take_buffered() {
                return Ok(envelope);
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(Error::ResponseTimeout(wait));
            }

            match self.transport.receive(remaining).await {
                Ok(chunk) => self.pending.extend_from_slice(&chunk),
                Err(e) if e.is_timeout() => return Err(Error::ResponseTimeout(wait)),
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Wait for a specific message, skipping everything else
    pub async fn wait_for(&mut self, service: Service, message_id: u8) -> Result<Envelope> {
        self.wait_for_within(service, message_id, self.config.response_timeout())
            .await
    }

    pub async fn wait_for_within(
        &mut self,
        service: Service,
        message_id: u8,
        wait: Duration,
    ) -> Result<Envelope> {
        let deadline = Instant::now() + wait;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            let envelope = match self.next_envelope_within(remaining).await {
                Err(Error::ResponseTimeout(_)) => return Err(Error::ResponseTimeout(wait)),
                other => other?,
            };

            if envelope.is(service, message_id) {
                return Ok(envelope);
            }
            trace!(%envelope, "Skipped while waiting");
        }
    }

    /// Wait for the Hello indication the module sends after boot
    pub async fn wait_hello(&mut self) -> Result<ModuleStatus> {
        let hello = self.wait_for(Service::General, general::HELLO_IND).await?;
        status_of(&hello)
    }

    /// Reset the module and wait for it to come back
    pub async fn reset(&mut self) -> Result<ModuleStatus> {
        let mut envelope = Envelope::new();
        builders::system::reset_req(&mut envelope);

        warn!("Resetting module...");
        self.discard_buffered();
        self.session.mark_reset();
        self.send(&envelope).await?;

        let status = self.wait_hello().await?;
        info!(%status, "Module up");
        Ok(status)
    }

    pub async fn get_status(&mut self) -> Result<ModuleStatus> {
        let mut envelope = Envelope::new();
        builders::general::get_status_req(&mut envelope);

        let response = self.request(&envelope, general::GET_STATUS_RES).await?;
        status_of(&response)
    }

    /// Firmware version string
    pub async fn get_version(&mut self) -> Result<String> {
        let mut envelope = Envelope::new();
        builders::general::get_version_req(&mut envelope);

        let response = self.request(&envelope, general::GET_VERSION_RES).await?;
        let version = expect_ie::<VersionIe>(&response)?;

        Ok(String::from_utf8_lossy(version.version.as_slice()).into_owned())
    }

    /// Register to a base
    ///
    /// With `None` the module registers to any base in registration mode.
    /// Returns the device id assigned by the base.
    pub async fn register(&mut self, base: Option<&Rfpi>) -> Result<u16> {
        let mut envelope = Envelope::new();
        builders::device_management::register_device_req(&mut envelope, base)?;

        match base {
            Some(rfpi) => info!(%rfpi, "Registering..."),
            None => info!("Registering to any base..."),
        }

        self.send(&envelope).await?;
        let confirm = self
            .wait_for_within(
                Service::DeviceManagement,
                device_management::REGISTER_DEVICE_CFM,
                self.config.registration_timeout(),
            )
            .await?;

        let ie = expect_ie::<RegistrationResponseIe>(&confirm)?;
        if !ie.response.is_ok() {
            return Err(Error::Rejected(ie.response));
        }

        info!(device_id = ie.device_address, "Registered");
        Ok(ie.device_address)
    }

    pub async fn deregister(&mut self) -> Result<()> {
        let mut envelope = Envelope::new();
        builders::device_management::deregister_device_req(&mut envelope);

        let confirm = self
            .request(&envelope, device_management::DEREGISTER_DEVICE_CFM)
            .await?;
        check_response(&confirm)?;

        info!("Deregistered");
        Ok(())
    }

    /// Report an alert state for one unit
    pub async fn send_alert(&mut self, unit_id: u8, alert: &AlertIe) -> Result<()> {
        self.ensure_registered()?;

        let mut envelope = Envelope::new();
        builders::alert::notify_status_req(&mut envelope, unit_id, alert)?;

        let response = self.request(&envelope, alert::NOTIFY_STATUS_RES).await?;
        check_response(&response)
    }

    pub async fn send_tamper(&mut self, unit_id: u8, status: TamperStatus) -> Result<()> {
        self.ensure_registered()?;

        let mut envelope = Envelope::new();
        builders::tamper::notify_status_req(&mut envelope, unit_id, status)?;

        let response = self.request(&envelope, tamper::NOTIFY_STATUS_RES).await?;
        check_response(&response)
    }

    /// Send raw data to the base over the FUN service
    ///
    /// No confirmation is expected.
    pub async fn send_raw_data(&mut self, data: &[u8]) -> Result<()> {
        let device_id = self.session.device_id().ok_or(Error::NotRegistered)?;

        let mut envelope = Envelope::new();
        builders::fun::send_raw(&mut envelope, device_id, data)?;

        self.send(&envelope).await
    }

    /// Measure the battery and return its level in percent
    pub async fn measure_battery(&mut self, window: &BatteryMeasureInfoIe) -> Result<u8> {
        let mut envelope = Envelope::new();
        builders::system::battery_measure_get_req(&mut envelope, window)?;

        let response = self
            .request(&envelope, system::BATTERY_MEASURE_GET_RES)
            .await?;
        check_response(&response)?;

        Ok(expect_ie::<BatteryLevelIe>(&response)?.level)
    }

    /// Link quality of the radio connection to the base
    pub async fn rssi(&mut self) -> Result<u8> {
        let mut envelope = Envelope::new();
        builders::system::rssi_get_req(&mut envelope);

        let response = self.request(&envelope, system::RSSI_GET_RES).await?;
        check_response(&response)?;

        Ok(expect_ie::<U8Ie>(&response)?.value)
    }

    /// Turn low-battery indications on or off
    pub async fn set_battery_indication(&mut self, enabled: bool) -> Result<()> {
        let mut envelope = Envelope::new();
        if enabled {
            builders::system::battery_ind_enable_req(&mut envelope);
        } else {
            builders::system::battery_ind_disable_req(&mut envelope);
        }
        self.send(&envelope).await
    }

    /// Place a voice call from `unit_id`
    pub async fn start_call(&mut self, unit_id: u8, settings: &CallSettingIe) -> Result<()> {
        self.ensure_registered()?;

        let mut envelope = Envelope::new();
        builders::voice_call::start_call_req(&mut envelope, unit_id, settings)?;

        let confirm = self.request(&envelope, voice_call::START_CFM).await?;
        check_response(&confirm)
    }

    /// Accept an incoming call announced by a start indication
    pub async fn answer_call(&mut self, unit_id: u8, settings: &CallSettingIe) -> Result<()> {
        let mut envelope = Envelope::new();
        builders::voice_call::start_call_res(&mut envelope, unit_id, ResponseCode::OK, settings)?;
        self.send(&envelope).await
    }

    pub async fn end_call(&mut self, unit_id: u8) -> Result<()> {
        let mut envelope = Envelope::new();
        builders::voice_call::end_call_req(&mut envelope, unit_id);

        let confirm = self.request(&envelope, voice_call::END_CFM).await?;
        check_response(&confirm)
    }

    /// Read a parameter by id
    pub async fn get_param(&mut self, param_type: u8, id: u8) -> Result<ParameterIe> {
        let mut envelope = Envelope::new();
        builders::parameters::get_req(&mut envelope, param_type, id)?;

        let response = self.request(&envelope, parameters::GET_RES).await?;
        check_response(&response)?;

        let param = expect_ie::<ParameterIe>(&response)?;
        if param.id != id || param.param_type != param_type {
            return Err(Error::InvalidResponse(format!(
                "asked for parameter {}/{}, got {}/{}",
                param_type, id, param.param_type, param.id
            )));
        }
        Ok(param)
    }

    pub async fn set_param(&mut self, param_type: u8, id: u8, data: &[u8]) -> Result<()> {
        let mut envelope = Envelope::new();
        builders::parameters::set_req(&mut envelope, param_type, id, data)?;

        let response = self.request(&envelope, parameters::SET_RES).await?;
        check_response(&response)
    }

    /// Read raw parameter memory
    pub async fn get_param_direct(
        &mut self,
        param_type: u8,
        offset: u32,
        length: u16,
    ) -> Result<ParameterDirectIe> {
        let mut envelope = Envelope::new();
        builders::parameters::get_direct_req(&mut envelope, param_type, offset, length)?;

        let response = self.request(&envelope, parameters::GET_DIRECT_RES).await?;
        check_response(&response)?;

        expect_ie::<ParameterDirectIe>(&response)
    }

    pub async fn set_param_direct(&mut self, param_type: u8, offset: u32, data: &[u8]) -> Result<()> {
        let mut envelope = Envelope::new();
        builders::parameters::set_direct_req(&mut envelope, param_type, offset, data)?;

        let response = self.request(&envelope, parameters::SET_DIRECT_RES).await?;
        check_response(&response)
    }

    /// Route every received envelope through `dispatcher` until the link
    /// closes
    pub async fn serve(&mut self, dispatcher: &mut Dispatcher) -> Result<()> {
        loop {
            match self.next_envelope().await {
                Ok(envelope) => {
                    dispatcher.dispatch(&envelope);
                }
                Err(Error::ResponseTimeout(_)) => continue,
                Err(Error::Transport(cmnd_transport::Error::PeerClosed)) => {
                    info!("Link closed");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Move the receive path onto a background task
    ///
    /// Envelopes are pushed onto a bounded queue of the configured depth.
    /// When the queue is full new envelopes are dropped with a warning so
    /// that a slow consumer never stalls framing. The task ends when the
    /// link closes or the receiver is dropped.
    pub fn into_receiver(mut self) -> (mpsc::Receiver<Envelope>, JoinHandle<Result<()>>)
    where
        T: 'static,
    {
        let (tx, rx) = mpsc::channel(self.config.queue_depth());

        let task = tokio::spawn(async move {
            loop {
                let envelope = match self.next_envelope().await {
                    Ok(envelope) => envelope,
                    Err(Error::ResponseTimeout(_)) => {
                        if tx.is_closed() {
                            return Ok(());
                        }
                        continue;
                    }
                    Err(Error::Transport(cmnd_transport::Error::PeerClosed)) => {
                        info!("Link closed, receive task stopping");
                        return Ok(());
                    }
                    Err(e) => return Err(e),
                };

                match tx.try_send(envelope) {
                    Ok(()) => {}
                    Err(mpsc::error::TrySendError::Full(envelope)) => {
                        warn!(%envelope, "Receive queue full, dropping envelope");
                    }
                    Err(mpsc::error::TrySendError::Closed(_)) => return Ok(()),
                }
            }
        });

        (rx, task)
    }

    // Helper methods

    fn ensure_connected(&self) -> Result<()> {
        if !self.transport.is_connected() {
            return Err(Error::NotConnected);
        }
        Ok(())
    }

    fn ensure_registered(&self) -> Result<()> {
        if !self.session.is_registered() {
            return Err(Error::NotRegistered);
        }
        Ok(())
    }

    /// Send a request and wait for its answer in the same service
    async fn request(&mut self, envelope: &Envelope, response_id: u8) -> Result<Envelope> {
        let service = envelope.service()?;
        self.send(envelope).await?;
        self.wait_for(service, response_id).await
    }

    /// Frame buffered bytes up to the end of the next complete frame
    fn take_buffered(&mut self) -> Option<Envelope> {
        let mut consumed = 0;
        let mut complete = false;

        for byte in self.pending.iter() {
            consumed += 1;
            if self.framer.push_byte(*byte) {
                complete = true;
                break;
            }
        }
        self.pending.advance(consumed);

        if !complete {
            return None;
        }

        let envelope = self.framer.envelope().clone();
        debug!(%envelope, "RX");
        self.session.observe(&envelope);
        Some(envelope)
    }

    fn discard_buffered(&mut self) {
        self.pending.clear();
        self.framer.reset();
    }
}

fn expect_ie<I: cmnd_core::InformationElement>(envelope: &Envelope) -> Result<I> {
    envelope.ie::<I>().ok_or_else(|| {
        Error::InvalidResponse(format!("{} lacks IE 0x{:02X}", envelope, I::TAG))
    })
}

fn check_response(envelope: &Envelope) -> Result<()> {
    let ie = expect_ie::<ResponseIe>(envelope)?;
    if ie.result.is_ok() {
        Ok(())
    } else {
        Err(Error::Rejected(ie.result))
    }
}

fn status_of(envelope: &Envelope) -> Result<ModuleStatus> {
    expect_ie::<GeneralStatusIe>(envelope).map(ModuleStatus::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use cmnd_core::InformationElement;
    use cmnd_types::{AlertState, PowerupMode, RegistrationStatus, UnitType};
    use mockall::mock;

    mock! {
        pub Link {}

        #[async_trait]
        impl Transport for Link {
            async fn connect(&mut self) -> cmnd_transport::Result<()>;
            async fn disconnect(&mut self) -> cmnd_transport::Result<()>;
            fn is_connected(&self) -> bool;
            async fn send(&mut self, data: &[u8]) -> cmnd_transport::Result<()>;
            async fn receive(&mut self, timeout: Duration) -> cmnd_transport::Result<BytesMut>;
            fn remote_addr(&self) -> String;
        }
    }

    fn frame<F>(service: Service, message_id: u8, fill: F) -> BytesMut
    where
        F: FnOnce(&mut cmnd_core::IeList<'_>) -> cmnd_core::Result<()>,
    {
        let mut env = Envelope::new();
        env.compose(service, message_id, 0, fill).unwrap();
        env.encode()
    }

    fn hello(registered: bool, device_id: u16) -> BytesMut {
        let status = ModuleStatus {
            powerup_mode: PowerupMode::Normal,
            registration_status: if registered {
                RegistrationStatus::Registered
            } else {
                RegistrationStatus::NotRegistered
            },
            eeprom_status: 0,
            device_id,
        };
        frame(Service::General, general::HELLO_IND, |list| {
            GeneralStatusIe { status }.add_to(list)
        })
    }

    fn response(service: Service, message_id: u8, code: ResponseCode) -> BytesMut {
        frame(service, message_id, |list| ResponseIe::new(code).add_to(list))
    }

    /// Link that is connected, accepts every write and replays `chunks`
    fn link_replaying(chunks: Vec<BytesMut>) -> MockLink {
        let mut chunks = VecDeque::from(chunks);
        let mut link = MockLink::new();
        link.expect_is_connected().return_const(true);
        link.expect_remote_addr().return_const("mock".to_string());
        link.expect_send().returning(|_| Ok(()));
        link.expect_receive()
            .returning(move |wait| {
                chunks
                    .pop_front()
                    .ok_or(cmnd_transport::Error::ReadTimeout(wait))
            });
        link
    }

    #[tokio::test]
    async fn test_send_stamps_cookie() {
        let mut link = MockLink::new();
        link.expect_is_connected().return_const(true);
        link.expect_send()
            .withf(|data| data.len() == 10 && data[4] == 0x42)
            .times(1)
            .returning(|_| Ok(()));

        let mut module = Module::with_config(link, LinkConfig::new().with_cookie(0x42));

        let mut env = Envelope::new();
        builders::general::hello_req(&mut env);
        module.send(&env).await.unwrap();
    }

    #[tokio::test]
    async fn test_send_requires_connection() {
        let mut link = MockLink::new();
        link.expect_is_connected().return_const(false);
        link.expect_send().never();

        let mut module = Module::new(link);
        let result = module.send(&Envelope::new()).await;

        assert!(matches!(result, Err(Error::NotConnected)));
    }

    #[tokio::test]
    async fn test_frame_split_across_chunks() {
        let bytes = hello(false, 0);
        let (head, tail) = bytes.split_at(5);

        let link = link_replaying(vec![BytesMut::from(head), BytesMut::from(tail)]);
        let mut module = Module::new(link);

        let env = module.next_envelope().await.unwrap();
        assert!(env.is(Service::General, general::HELLO_IND));
        assert!(!module.session().is_registered());
    }

    #[tokio::test]
    async fn test_two_frames_in_one_chunk() {
        let mut chunk = hello(true, 4);
        chunk.extend_from_slice(&response(Service::System, system::RSSI_GET_RES, ResponseCode::OK));

        let mut link = MockLink::new();
        link.expect_receive().times(1).return_once(move |_| Ok(chunk));
        let mut module = Module::new(link);

        let first = module.next_envelope().await.unwrap();
        let second = module.next_envelope().await.unwrap();

        assert!(first.is(Service::General, general::HELLO_IND));
        assert!(second.is(Service::System, system::RSSI_GET_RES));
        assert_eq!(module.session().device_id(), Some(4));
    }

    #[tokio::test]
    async fn test_corrupt_frame_is_skipped() {
        let mut corrupt = hello(false, 0);
        corrupt[5] ^= 0xFF;
        let good = hello(true, 2);

        let link = link_replaying(vec![corrupt, good]);
        let mut module = Module::new(link);

        let env = module.next_envelope().await.unwrap();
        assert!(env.is(Service::General, general::HELLO_IND));
        assert_eq!(module.framer_stats().checksum_errors, 1);
        assert_eq!(module.session().device_id(), Some(2));
    }

    #[tokio::test]
    async fn test_wait_for_skips_other_messages() {
        let link = link_replaying(vec![
            hello(false, 0),
            response(Service::System, system::RSSI_GET_RES, ResponseCode::OK),
        ]);
        let mut module = Module::new(link);

        let env = module
            .wait_for(Service::System, system::RSSI_GET_RES)
            .await
            .unwrap();
        assert_eq!(env.message_id, system::RSSI_GET_RES);
    }

    #[tokio::test]
    async fn test_timeout() {
        let link = link_replaying(Vec::new());
        let mut module = Module::with_config(
            link,
            LinkConfig::new().with_response_timeout(Duration::from_millis(20)),
        );

        let result = module.wait_hello().await;
        assert!(matches!(result, Err(Error::ResponseTimeout(_))));
    }

    #[tokio::test]
    async fn test_register() {
        let confirm = frame(
            Service::DeviceManagement,
            device_management::REGISTER_DEVICE_CFM,
            |list| {
                RegistrationResponseIe {
                    response: ResponseCode::OK,
                    device_address: 7,
                }
                .add_to(list)
            },
        );
        let mut module = Module::new(link_replaying(vec![confirm]));

        assert_eq!(module.register(None).await.unwrap(), 7);
        assert_eq!(module.session().device_id(), Some(7));
    }

    #[tokio::test]
    async fn test_register_rejected() {
        let confirm = frame(
            Service::DeviceManagement,
            device_management::REGISTER_DEVICE_CFM,
            |list| {
                RegistrationResponseIe {
                    response: ResponseCode::FAIL,
                    device_address: 0,
                }
                .add_to(list)
            },
        );
        let mut module = Module::new(link_replaying(vec![confirm]));

        let result = module.register(None).await;
        assert!(matches!(result, Err(Error::Rejected(ResponseCode::FAIL))));
        assert!(!module.session().is_registered());
    }

    #[tokio::test]
    async fn test_raw_data_requires_registration() {
        let mut link = MockLink::new();
        link.expect_is_connected().return_const(true);
        link.expect_send().never();

        let mut module = Module::new(link);
        let result = module.send_raw_data(b"hello").await;

        assert!(matches!(result, Err(Error::NotRegistered)));
    }

    #[tokio::test]
    async fn test_send_alert() {
        let link = link_replaying(vec![
            hello(true, 1),
            response(Service::Alert, alert::NOTIFY_STATUS_RES, ResponseCode::OK),
        ]);
        let mut module = Module::new(link);
        module.wait_hello().await.unwrap();

        let alert = AlertIe {
            unit_type: UnitType::SmokeDetector,
            alert_state: AlertState::Alerting,
        };
        module.send_alert(2, &alert).await.unwrap();
    }

    #[tokio::test]
    async fn test_rejected_response() {
        let link = link_replaying(vec![response(
            Service::Parameters,
            parameters::SET_RES,
            ResponseCode::NOT_SUPPORTED,
        )]);
        let mut module = Module::new(link);

        let result = module.set_param(0, 0x10, &[1]).await;
        assert!(matches!(
            result,
            Err(Error::Rejected(ResponseCode::NOT_SUPPORTED))
        ));
    }

    #[tokio::test]
    async fn test_missing_response_ie() {
        let link = link_replaying(vec![frame(Service::System, system::RSSI_GET_RES, |_| Ok(()))]);
        let mut module = Module::new(link);

        let result = module.rssi().await;
        assert!(matches!(result, Err(Error::InvalidResponse(_))));
    }
}
