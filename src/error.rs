// MIT License - Copyright (c) 2026 Peter Wright

use std::time::Duration;

use crate::session::SessionState;

/// Frame-level decode failure. Recoverable: the offending frame is dropped
/// and the session keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("frame too short ({len} bytes)")]
    TooShort { len: usize },

    #[error("no layout for command byte 0x{command:02X}")]
    UnknownCommand { command: u8 },

    #[error("checksum mismatch: computed 0x{computed:02X}, frame carries 0x{found:02X}")]
    ChecksumMismatch { computed: u8, found: u8 },
}

/// All errors surfaced by this crate.
///
/// Only [`PanelError::Io`] is fatal to a session: the connection has to be
/// re-established. Everything else describes a single failed operation and
/// leaves the session usable.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no response to command 0x{command:02X} within {timeout:?}")]
    CommandTimeout { command: u8, timeout: Duration },

    #[error("PC password must be exactly 4 hexadecimal digits")]
    InvalidPassword,

    #[error("session is {actual:?}, operation requires {expected:?}")]
    State {
        expected: SessionState,
        actual: SessionState,
    },

    #[error("not authenticated")]
    NotAuthenticated,

    #[error("{kind} {value} out of range 1..={max}")]
    OutOfRange {
        kind: &'static str,
        value: u16,
        max: u16,
    },

    #[error("undecodable response: {0}")]
    Decode(#[from] DecodeError),

    #[error("invalid response: {details}")]
    InvalidResponse { details: String },
}

pub type Result<T> = std::result::Result<T, PanelError>;
