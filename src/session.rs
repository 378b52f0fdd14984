// MIT License - Copyright (c) 2026 Peter Wright

//! Session state machine and command dispatcher.
//!
//! A [`Session`] exclusively owns its transport and walks the panel through
//! handshake, authentication and the command cycle. The link is half
//! duplex: every operation takes `&mut self`, writes one request frame and
//! polls for the reply, so a new command cannot start while a previous
//! response is pending.
//!
//! Response matching works on the raw command byte of each received frame;
//! a frame is only decoded in full once it has matched, and only where the
//! operation needs fields beyond the command byte. This mirrors the
//! original tooling and is load-bearing: the 0x10 authentication success
//! frame arrives truncated by the length heuristic (see
//! [`transport::framing`](crate::transport::framing)) and would never pass
//! a full decode.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::PanelConfig;
use crate::constants::{
    ACTION_RESPONSE_RANGE, CMD_INITIALIZE_COMMUNICATION, CMD_INITIALIZE_FAIL,
    CMD_INITIALIZE_SUCCESS, CMD_INITIATE_COMMUNICATION, CMD_PERFORM_ACTION, CMD_READ_EEPROM,
    DEFAULT_POLL_INTERVAL, DEFAULT_RESPONSE_TIMEOUT, EEPROM_RESPONSE_RANGE, SourceId,
};
use crate::error::{PanelError, Result};
use crate::monitor::EventMonitor;
use crate::protocol::{
    self, ArmMode, CommandResult, Message, OutputAction, PanelIdentity, DISARM_ACTION,
    ZONE_BYPASS_ACTION,
};
use crate::transport::{framing, Transport};

/// Where the session stands in the handshake/authentication sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Initial state; nothing exchanged yet.
    Disconnected,
    /// Handshake completed, panel identity known.
    Identified,
    /// PC password accepted; commands may be issued.
    Authenticated,
    /// Password rejected by the panel. Terminal for this connection.
    Failed,
}

/// A command/response session over one exclusively-owned transport.
pub struct Session<T: Transport> {
    transport: T,
    state: SessionState,
    identity: Option<PanelIdentity>,
    response_timeout: Duration,
    poll_interval: Duration,
}

impl<T: Transport> Session<T> {
    /// Wrap a transport with default timing.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: SessionState::Disconnected,
            identity: None,
            response_timeout: DEFAULT_RESPONSE_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Wrap a transport, taking timing from the config.
    pub fn with_config(transport: T, config: &PanelConfig) -> Self {
        Self {
            transport,
            state: SessionState::Disconnected,
            identity: None,
            response_timeout: config.response_timeout(),
            poll_interval: config.poll_interval(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Identity learned during [`identify`](Self::identify), if any.
    pub fn identity(&self) -> Option<&PanelIdentity> {
        self.identity.as_ref()
    }

    /// Give the transport back, consuming the session.
    pub fn into_transport(self) -> T {
        self.transport
    }

    pub(crate) fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub(crate) fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Perform the InitiateCommunication handshake.
    ///
    /// Valid only from `Disconnected`. Stale inbound bytes are discarded
    /// first. On success the panel identity is recorded and the session
    /// moves to `Identified`; on timeout the state is unchanged.
    pub async fn identify(&mut self) -> Result<PanelIdentity> {
        self.require_state(SessionState::Disconnected)?;

        info!("Initiating communication with panel");
        self.transport.reset_input_buffer()?;

        let frame = protocol::encode_initiate_communication(0x00);
        self.transport.write(&frame)?;

        let response = self
            .wait_for_frame(CMD_INITIATE_COMMUNICATION, |c| {
                c == CMD_INITIATE_COMMUNICATION
            })
            .await?;

        let identity = match protocol::decode(&response)? {
            Message::InitiateCommunicationResponse { identity, .. } => identity,
            other => {
                return Err(PanelError::InvalidResponse {
                    details: format!("unexpected handshake reply 0x{:02X}", other.command()),
                });
            }
        };

        info!(
            "Panel identified: {} firmware {} panel id {}",
            identity.product_id, identity.firmware, identity.panel_id
        );
        self.identity = Some(identity.clone());
        self.state = SessionState::Identified;
        Ok(identity)
    }

    /// Authenticate with the 4-hex-digit PC password.
    ///
    /// Valid only from `Identified`. A malformed password is rejected
    /// before any bytes are written. Returns `true` and moves to
    /// `Authenticated` on the 0x10 success reply; returns `false` and
    /// moves to `Failed` on the 0x70 rejection. A timeout leaves the state
    /// unchanged.
    pub async fn authenticate(&mut self, password: &str) -> Result<bool> {
        self.require_state(SessionState::Identified)?;
        let pc_password = protocol::encode_pc_password(password)?;

        let Some(identity) = self.identity.clone() else {
            return Err(PanelError::State {
                expected: SessionState::Identified,
                actual: self.state,
            });
        };

        info!("Authenticating with panel");
        let frame = protocol::encode_initialize_communication(
            &identity,
            pc_password,
            SourceId::PanelApp,
            0x00,
        );
        self.transport.write(&frame)?;

        let response = self
            .wait_for_frame(CMD_INITIALIZE_COMMUNICATION, |c| {
                c == CMD_INITIALIZE_SUCCESS || c == CMD_INITIALIZE_FAIL
            })
            .await?;

        // Only the command byte is reliable here: the 0x10 success frame
        // reaches us truncated to 16 bytes by the length heuristic.
        if response[0] == CMD_INITIALIZE_SUCCESS {
            info!("Authentication successful");
            self.state = SessionState::Authenticated;
            Ok(true)
        } else {
            warn!("Authentication rejected: wrong PC password");
            self.state = SessionState::Failed;
            Ok(false)
        }
    }

    /// Arm a partition (1-8) in the given mode.
    pub async fn arm(&mut self, partition: u8, mode: ArmMode) -> Result<CommandResult> {
        self.ensure_authenticated()?;
        check_range("partition", partition, 8)?;
        info!("Arming partition {partition} ({mode})");
        self.perform_action(mode.action_code(), partition - 1).await
    }

    /// Disarm a partition (1-8).
    pub async fn disarm(&mut self, partition: u8) -> Result<CommandResult> {
        self.ensure_authenticated()?;
        check_range("partition", partition, 8)?;
        info!("Disarming partition {partition}");
        self.perform_action(DISARM_ACTION, partition - 1).await
    }

    /// Toggle bypass on a zone (1-192).
    ///
    /// Bypass and clear-bypass share one action code; the panel flips the
    /// zone's bypass state on each application.
    pub async fn bypass_zone(&mut self, zone: u8) -> Result<CommandResult> {
        self.ensure_authenticated()?;
        check_range("zone", zone, 192)?;
        info!("Toggling bypass on zone {zone}");
        self.perform_action(ZONE_BYPASS_ACTION, zone - 1).await
    }

    /// Drive a PGM output (1-16).
    pub async fn control_output(&mut self, output: u8, action: OutputAction) -> Result<CommandResult> {
        self.ensure_authenticated()?;
        check_range("output", output, 16)?;
        info!("Output {output}: {action:?}");
        self.perform_action(action.action_code(), output - 1).await
    }

    /// Read raw EEPROM bytes at `address` (1-32 records).
    pub async fn read_memory(&mut self, address: u16, records: u8) -> Result<Vec<u8>> {
        self.ensure_authenticated()?;
        if records == 0 || records > 32 {
            return Err(PanelError::OutOfRange {
                kind: "records",
                value: records as u16,
                max: 32,
            });
        }

        info!("Reading EEPROM at 0x{address:04X} ({records} record(s))");
        let frame = protocol::encode_read_eeprom(address, records, SourceId::PanelApp, 0x00);
        self.transport.write(&frame)?;

        let response = self
            .wait_for_frame(CMD_READ_EEPROM, |c| EEPROM_RESPONSE_RANGE.contains(&c))
            .await?;

        let (address, data) = match protocol::decode(&response)? {
            Message::ReadEepromResponse { address, data, .. } => (address, data),
            other => {
                return Err(PanelError::InvalidResponse {
                    details: format!("unexpected EEPROM reply 0x{:02X}", other.command()),
                });
            }
        };
        debug!("EEPROM data at 0x{address:04X}: {} bytes", data.len());
        Ok(data.to_vec())
    }

    /// Start a live-event poll cycle, optionally bounded in time.
    ///
    /// Each call starts a fresh cycle; the returned monitor borrows the
    /// session, so no command can be issued while it is alive.
    pub fn monitor_events(&mut self, duration: Option<Duration>) -> EventMonitor<'_, T> {
        EventMonitor::new(self, duration)
    }

    async fn perform_action(&mut self, action: u8, argument: u8) -> Result<CommandResult> {
        let frame = protocol::encode_perform_action(action, argument, SourceId::PanelApp, 0x00);
        self.transport.write(&frame)?;

        let response = self
            .wait_for_frame(CMD_PERFORM_ACTION, |c| ACTION_RESPONSE_RANGE.contains(&c))
            .await?;

        // The command byte is the result code.
        let result = CommandResult::from_code(response[0]);
        if result.success {
            debug!("Action 0x{action:02X} acknowledged");
        } else {
            warn!(
                "Action 0x{action:02X} rejected: 0x{:02X} ({})",
                result.code, result.status
            );
        }
        Ok(result)
    }

    /// Poll until a frame whose command byte satisfies `accept` arrives, or
    /// the response timeout expires. Non-matching frames are logged and
    /// dropped; the wait keeps going.
    async fn wait_for_frame(
        &mut self,
        request: u8,
        accept: impl Fn(u8) -> bool,
    ) -> Result<Vec<u8>> {
        let deadline = tokio::time::Instant::now() + self.response_timeout;

        loop {
            if self.transport.bytes_available()? > 0 {
                let frame = framing::read_frame(&mut self.transport)?;
                if let Some(&command) = frame.first() {
                    if accept(command) {
                        return Ok(frame);
                    }
                    warn!(
                        "Unexpected command 0x{command:02X} while awaiting reply to 0x{request:02X}"
                    );
                }
            }

            if tokio::time::Instant::now() >= deadline {
                break;
            }
            tokio::time::sleep(self.poll_interval).await;
        }

        warn!("Timed out awaiting reply to 0x{request:02X}");
        Err(PanelError::CommandTimeout {
            command: request,
            timeout: self.response_timeout,
        })
    }

    fn ensure_authenticated(&self) -> Result<()> {
        if self.state != SessionState::Authenticated {
            return Err(PanelError::NotAuthenticated);
        }
        Ok(())
    }

    fn require_state(&self, expected: SessionState) -> Result<()> {
        if self.state != expected {
            return Err(PanelError::State {
                expected,
                actual: self.state,
            });
        }
        Ok(())
    }
}

fn check_range(kind: &'static str, value: u8, max: u16) -> Result<()> {
    if value == 0 || value as u16 > max {
        return Err(PanelError::OutOfRange {
            kind,
            value: value as u16,
            max,
        });
    }
    Ok(())
}
