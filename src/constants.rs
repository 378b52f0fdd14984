// MIT License - Copyright (c) 2026 Peter Wright

use std::ops::Range;
use std::time::Duration;

/// Every protocol frame is 36 payload/header bytes plus a trailing checksum.
pub const FRAME_LEN: usize = 37;

/// Offset of the checksum byte within a frame.
pub const CHECKSUM_OFFSET: usize = FRAME_LEN - 1;

/// First bytes at or below this value never carry an explicit frame length.
pub const MAX_IMPLICIT_LENGTH_BYTE: u8 = 4;

/// InitiateCommunication, both directions. The panel's response carries the
/// 0xFF result marker at offset 1; the request leaves it zero.
pub const CMD_INITIATE_COMMUNICATION: u8 = 0x72;

/// InitializeCommunication request (MG/SP authentication).
pub const CMD_INITIALIZE_COMMUNICATION: u8 = 0x00;

/// Authentication accepted.
pub const CMD_INITIALIZE_SUCCESS: u8 = 0x10;

/// Authentication rejected (wrong PC password).
pub const CMD_INITIALIZE_FAIL: u8 = 0x70;

/// PerformAction request.
pub const CMD_PERFORM_ACTION: u8 = 0x40;

/// ReadEEPROM request.
pub const CMD_READ_EEPROM: u8 = 0x50;

/// PerformAction response family; the command byte doubles as result code.
pub const ACTION_RESPONSE_RANGE: Range<u8> = 0x40..0x50;

/// ReadEEPROM response family.
pub const EEPROM_RESPONSE_RANGE: Range<u8> = 0x50..0x60;

/// Asynchronous live-event frames.
pub const LIVE_EVENT_RANGE: Range<u8> = 0xE0..0xF0;

/// How long one request/response cycle may take before giving up.
pub const DEFAULT_RESPONSE_TIMEOUT: Duration = Duration::from_secs(5);

/// Serial read timeout, per transfer.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Sleep between polls while waiting for bytes.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// MG/SP panels talk 9600 8N1 on the serial header.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Panel model reported in the InitiateCommunication response.
///
/// The original firmware tables assign codes 2, 4 and 5 to both the Digiplex
/// and the MG/SP families; this client speaks the MG/SP dialect, so those
/// codes resolve to the Magellan/Spectra models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductId {
    DigiplexDgp248Ne,
    DigiplexDgp272Ne,
    DigiplexDgp2112Ne,
    MagellanMg5000,
    MagellanMg5050,
    SpectraSp4000,
    SpectraSp5500,
    SpectraSp6000,
    SpectraSp7000,
    SpectraSp65,
    Unknown(u8),
}

impl ProductId {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::DigiplexDgp248Ne,
            1 => Self::DigiplexDgp272Ne,
            2 => Self::MagellanMg5000,
            3 => Self::DigiplexDgp2112Ne,
            4 => Self::MagellanMg5050,
            5 => Self::SpectraSp4000,
            21 => Self::SpectraSp5500,
            22 => Self::SpectraSp6000,
            23 => Self::SpectraSp7000,
            24 => Self::SpectraSp65,
            other => Self::Unknown(other),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::DigiplexDgp248Ne => 0,
            Self::DigiplexDgp272Ne => 1,
            Self::MagellanMg5000 => 2,
            Self::DigiplexDgp2112Ne => 3,
            Self::MagellanMg5050 => 4,
            Self::SpectraSp4000 => 5,
            Self::SpectraSp5500 => 21,
            Self::SpectraSp6000 => 22,
            Self::SpectraSp7000 => 23,
            Self::SpectraSp65 => 24,
            Self::Unknown(code) => *code,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DigiplexDgp248Ne => "DIGIPLEX_DGP2_48_NE",
            Self::DigiplexDgp272Ne => "DIGIPLEX_DGP2_72_NE",
            Self::DigiplexDgp2112Ne => "DIGIPLEX_DGP2_112_NE",
            Self::MagellanMg5000 => "MAGELLAN_MG5000",
            Self::MagellanMg5050 => "MAGELLAN_MG5050",
            Self::SpectraSp4000 => "SPECTRA_SP4000",
            Self::SpectraSp5500 => "SPECTRA_SP5500",
            Self::SpectraSp6000 => "SPECTRA_SP6000",
            Self::SpectraSp7000 => "SPECTRA_SP7000",
            Self::SpectraSp65 => "SPECTRA_SP65",
            Self::Unknown(_) => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(code) => write!(f, "UNKNOWN(0x{code:02X})"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Which class of application is talking to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SourceId {
    BootLoader = 0,
    PanelApp = 1,
    Neware = 2,
    Ip100 = 4,
    Winload = 5,
    WinloadApp = 6,
}

impl SourceId {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::BootLoader),
            1 => Some(Self::PanelApp),
            2 => Some(Self::Neware),
            4 => Some(Self::Ip100),
            5 => Some(Self::Winload),
            6 => Some(Self::WinloadApp),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_mgsp_family_wins_shared_codes() {
        assert_eq!(ProductId::from_code(2), ProductId::MagellanMg5000);
        assert_eq!(ProductId::from_code(4), ProductId::MagellanMg5050);
        assert_eq!(ProductId::from_code(5), ProductId::SpectraSp4000);
    }

    #[test]
    fn product_id_roundtrip() {
        for code in [0u8, 1, 2, 3, 4, 5, 21, 22, 23, 24, 99] {
            assert_eq!(ProductId::from_code(code).code(), code);
        }
    }

    #[test]
    fn source_id_codes() {
        assert_eq!(SourceId::PanelApp.code(), 0x01);
        assert_eq!(SourceId::WinloadApp.code(), 0x06);
        assert_eq!(SourceId::from_code(5), Some(SourceId::Winload));
        assert_eq!(SourceId::from_code(3), None);
    }
}
