// MIT License - Copyright (c) 2026 Peter Wright

//! # paradox-mgsp
//!
//! Serial client for Paradox MG/SP alarm control panels (Magellan MG5000/
//! MG5050, Spectra SP series). Speaks the reverse-engineered 37-byte frame
//! protocol directly over the panel's serial header: handshake,
//! PC-password authentication, partition/zone/output commands, EEPROM
//! reads and live-event monitoring.
//!
//! No external dependencies beyond tokio, serialport, thiserror and
//! tracing.
//!
//! ## Quick Start
//!
//! ```no_run
//! use paradox_mgsp::{ArmMode, PanelConfig, SerialTransport, Session};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = PanelConfig::builder()
//!         .port("/dev/ttyUSB0")
//!         .pc_password("1234")
//!         .build();
//!
//!     let transport = SerialTransport::open(&config)?;
//!     let mut session = Session::with_config(transport, &config);
//!
//!     let identity = session.identify().await?;
//!     println!("Connected to {} ({})", identity.product_id, identity.firmware);
//!
//!     if !session.authenticate(&config.pc_password).await? {
//!         anyhow::bail!("panel rejected the PC password");
//!     }
//!
//!     let result = session.arm(1, ArmMode::Stay).await?;
//!     println!("Arm: {}", result.status);
//!
//!     let mut monitor = session.monitor_events(None);
//!     while let Some(event) = monitor.next_event().await? {
//!         println!("{}: {}", event.partition, event.label);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod monitor;
pub mod protocol;
pub mod session;
pub mod transport;

// Re-exports for convenience
pub use config::{PanelConfig, PanelConfigBuilder};
pub use constants::{ProductId, SourceId};
pub use error::{DecodeError, PanelError, Result};
pub use monitor::EventMonitor;
pub use protocol::{
    ActionStatus, ArmMode, CommandResult, EventRecord, FirmwareVersion, Message, OutputAction,
    PanelIdentity,
};
pub use session::{Session, SessionState};
pub use transport::mock::MockTransport;
pub use transport::serial::SerialTransport;
pub use transport::Transport;
