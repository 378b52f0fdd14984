// MIT License - Copyright (c) 2026 Peter Wright

//! Frame codec for the MG/SP serial protocol.
//!
//! Every message is a fixed 37-byte frame: a command byte, type-specific
//! fields at fixed offsets, zeroed reserved bytes, and a trailing additive
//! checksum. The panel replies with frames whose command byte encodes both
//! the message family and, for action/EEPROM responses, the result code.
//!
//! Layouts are written out by hand, one builder per request and one match
//! arm per response family. Dispatch is exact for the handshake and
//! authentication bytes and range-based for the response families, which
//! means a PerformAction or ReadEEPROM *request* decodes as a member of its
//! response family; the wire format itself cannot tell the two apart.

use std::fmt;
use std::str::FromStr;

use crate::constants::{
    ACTION_RESPONSE_RANGE, CHECKSUM_OFFSET, CMD_INITIALIZE_COMMUNICATION, CMD_INITIALIZE_FAIL,
    CMD_INITIALIZE_SUCCESS, CMD_INITIATE_COMMUNICATION, CMD_PERFORM_ACTION, CMD_READ_EEPROM,
    EEPROM_RESPONSE_RANGE, FRAME_LEN, LIVE_EVENT_RANGE, ProductId, SourceId,
};
use crate::error::{DecodeError, PanelError};

/// Payload bytes carried by a ReadEEPROM response (offsets 5..32).
pub const EEPROM_DATA_LEN: usize = 27;

/// Sum of all bytes, mod 256.
pub fn checksum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, b| acc.wrapping_add(*b))
}

/// Pack a 4-hex-digit PC password into its 2-byte wire form.
///
/// `"abcd"` becomes `[0xAB, 0xCD]`. Anything that is not exactly four ASCII
/// hex digits is rejected before any bytes touch the wire.
pub fn encode_pc_password(password: &str) -> Result<[u8; 2], PanelError> {
    if password.len() != 4 || !password.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(PanelError::InvalidPassword);
    }
    let high = u8::from_str_radix(&password[0..2], 16).map_err(|_| PanelError::InvalidPassword)?;
    let low = u8::from_str_radix(&password[2..4], 16).map_err(|_| PanelError::InvalidPassword)?;
    Ok([high, low])
}

/// Firmware version triple reported during the handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareVersion {
    pub version: u8,
    pub revision: u8,
    pub minor: u8,
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.version, self.revision, self.minor)
    }
}

/// Identity data learned from the InitiateCommunication response.
///
/// Populated once per session and never mutated; the authentication frame
/// echoes these fields back to the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelIdentity {
    pub product_id: ProductId,
    pub firmware: FirmwareVersion,
    pub panel_id: u16,
    pub pc_password: [u8; 2],
    pub source_id: u8,
}

/// Partition arming variants and their protocol action codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmMode {
    Stay,
    Sleep,
    Away,
    StayInstant,
    Instant,
}

impl ArmMode {
    pub fn action_code(self) -> u8 {
        match self {
            Self::Stay => 0x01,
            Self::Sleep => 0x02,
            Self::Away => 0x04,
            Self::StayInstant => 0x06,
            Self::Instant => 0x07,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stay => "arm_stay",
            Self::Sleep => "arm_sleep",
            Self::Away => "arm",
            Self::StayInstant => "arm_stay_instant",
            Self::Instant => "arm_instant",
        }
    }
}

impl FromStr for ArmMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arm" | "arm_away" => Ok(Self::Away),
            "arm_stay" => Ok(Self::Stay),
            "arm_sleep" => Ok(Self::Sleep),
            "arm_stay_instant" => Ok(Self::StayInstant),
            "arm_instant" => Ok(Self::Instant),
            other => Err(format!("unknown arm mode: {other}")),
        }
    }
}

impl fmt::Display for ArmMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Disarm action code (partition table).
pub const DISARM_ACTION: u8 = 0x05;

/// Zone bypass action code. The panel toggles bypass state on repeated
/// application; there is no separate clear-bypass code.
pub const ZONE_BYPASS_ACTION: u8 = 0x10;

/// PGM (programmable output) actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputAction {
    On,
    Off,
    OnOverride,
    OffOverride,
}

impl OutputAction {
    pub fn action_code(self) -> u8 {
        match self {
            Self::On => 0x32,
            Self::Off => 0x33,
            Self::OnOverride => 0x34,
            Self::OffOverride => 0x35,
        }
    }
}

impl FromStr for OutputAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            "on_override" => Ok(Self::OnOverride),
            "off_override" => Ok(Self::OffOverride),
            other => Err(format!("unknown output action: {other}")),
        }
    }
}

/// Classification of a PerformAction response code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    Success,
    Fail,
    InvalidArgument,
    UserCodeRequired,
    Unknown,
}

impl ActionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Fail => "fail",
            Self::InvalidArgument => "invalid_argument",
            Self::UserCodeRequired => "user_code_required",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one command invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    pub success: bool,
    pub code: u8,
    pub status: ActionStatus,
}

impl CommandResult {
    pub fn from_code(code: u8) -> Self {
        let status = match code {
            0x40 => ActionStatus::Success,
            0x41 => ActionStatus::Fail,
            0x42 => ActionStatus::InvalidArgument,
            0x43 => ActionStatus::UserCodeRequired,
            _ => ActionStatus::Unknown,
        };
        Self {
            success: code == 0x40,
            code,
            status,
        }
    }
}

/// One decoded live-event frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub command: u8,
    pub event_group: u8,
    pub event_1: u8,
    pub event_2: u8,
    pub partition: u8,
    pub module_serial: [u8; 4],
    pub label_type: u8,
    pub label: String,
}

/// A decoded protocol message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    InitiateCommunicationResponse {
        identity: PanelIdentity,
        user_id: u8,
    },
    InitializeCommunication {
        product_id: ProductId,
        firmware: FirmwareVersion,
        panel_id: u16,
        pc_password: [u8; 2],
        source_id: u8,
        user_id: u8,
    },
    InitializeCommunicationResponse {
        command: u8,
        user_id: u8,
    },
    PerformActionResponse {
        command: u8,
        user_id: u8,
    },
    ReadEepromResponse {
        command: u8,
        address: u16,
        records: u8,
        data: [u8; EEPROM_DATA_LEN],
    },
    LiveEvent(EventRecord),
}

impl Message {
    /// The frame's command byte.
    pub fn command(&self) -> u8 {
        match self {
            Self::InitiateCommunicationResponse { .. } => CMD_INITIATE_COMMUNICATION,
            Self::InitializeCommunication { .. } => CMD_INITIALIZE_COMMUNICATION,
            Self::InitializeCommunicationResponse { command, .. } => *command,
            Self::PerformActionResponse { command, .. } => *command,
            Self::ReadEepromResponse { command, .. } => *command,
            Self::LiveEvent(event) => event.command,
        }
    }
}

fn finish_frame(mut frame: [u8; FRAME_LEN]) -> [u8; FRAME_LEN] {
    frame[CHECKSUM_OFFSET] = checksum(&frame[..CHECKSUM_OFFSET]);
    frame
}

/// Build the InitiateCommunication handshake request.
pub fn encode_initiate_communication(user_id: u8) -> [u8; FRAME_LEN] {
    let mut frame = [0u8; FRAME_LEN];
    frame[0] = CMD_INITIATE_COMMUNICATION;
    frame[35] = user_id;
    finish_frame(frame)
}

/// Build the InitializeCommunication authentication request from the
/// identity learned during the handshake plus the packed PC password.
pub fn encode_initialize_communication(
    identity: &PanelIdentity,
    pc_password: [u8; 2],
    source_id: SourceId,
    user_id: u8,
) -> [u8; FRAME_LEN] {
    let mut frame = [0u8; FRAME_LEN];
    frame[0] = CMD_INITIALIZE_COMMUNICATION;
    frame[1] = identity.product_id.code();
    frame[2] = identity.firmware.version;
    frame[3] = identity.firmware.revision;
    frame[4] = identity.firmware.minor;
    frame[5..7].copy_from_slice(&identity.panel_id.to_be_bytes());
    frame[7..9].copy_from_slice(&pc_password);
    frame[12] = source_id.code();
    frame[13] = user_id;
    frame[35] = user_id;
    finish_frame(frame)
}

/// Build a PerformAction request (arm/disarm/bypass/PGM).
pub fn encode_perform_action(
    action: u8,
    argument: u8,
    source_id: SourceId,
    user_id: u8,
) -> [u8; FRAME_LEN] {
    let mut frame = [0u8; FRAME_LEN];
    frame[0] = CMD_PERFORM_ACTION;
    frame[4] = action;
    frame[5] = argument;
    frame[33] = source_id.code();
    frame[34] = user_id;
    frame[35] = user_id;
    finish_frame(frame)
}

/// Build a ReadEEPROM request.
pub fn encode_read_eeprom(
    address: u16,
    records: u8,
    source_id: SourceId,
    user_id: u8,
) -> [u8; FRAME_LEN] {
    let mut frame = [0u8; FRAME_LEN];
    frame[0] = CMD_READ_EEPROM;
    frame[2..4].copy_from_slice(&address.to_be_bytes());
    frame[4] = records;
    frame[33] = source_id.code();
    frame[34] = user_id;
    frame[35] = user_id;
    finish_frame(frame)
}

fn read_u16_be(data: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([data[offset], data[offset + 1]])
}

/// Decode the 16-byte label field, stripping NUL padding.
fn decode_label(data: &[u8]) -> String {
    String::from_utf8_lossy(data).trim_matches('\0').to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    InitiateResponse,
    InitializeRequest,
    InitializeResponse,
    ActionResponse,
    EepromResponse,
    LiveEvent,
}

fn layout_for(command: u8) -> Option<Layout> {
    match command {
        CMD_INITIATE_COMMUNICATION => Some(Layout::InitiateResponse),
        CMD_INITIALIZE_COMMUNICATION => Some(Layout::InitializeRequest),
        CMD_INITIALIZE_SUCCESS | CMD_INITIALIZE_FAIL => Some(Layout::InitializeResponse),
        c if ACTION_RESPONSE_RANGE.contains(&c) => Some(Layout::ActionResponse),
        c if EEPROM_RESPONSE_RANGE.contains(&c) => Some(Layout::EepromResponse),
        c if LIVE_EVENT_RANGE.contains(&c) => Some(Layout::LiveEvent),
        _ => None,
    }
}

/// Decode one received frame into a typed message.
///
/// The trailing byte must equal the additive checksum of everything before
/// it, and the frame must carry the full 37 bytes its layout declares.
pub fn decode(data: &[u8]) -> Result<Message, DecodeError> {
    if data.len() < 2 {
        return Err(DecodeError::TooShort { len: data.len() });
    }

    let command = data[0];
    let layout = layout_for(command).ok_or(DecodeError::UnknownCommand { command })?;

    let computed = checksum(&data[..data.len() - 1]);
    let found = data[data.len() - 1];
    if computed != found {
        return Err(DecodeError::ChecksumMismatch { computed, found });
    }

    if data.len() < FRAME_LEN {
        return Err(DecodeError::TooShort { len: data.len() });
    }

    match layout {
        Layout::InitiateResponse => {
            // A 0x72 frame without the result marker is our own request
            // format; the panel never sends one.
            if data[1] != 0xFF {
                return Err(DecodeError::UnknownCommand { command });
            }
            let identity = PanelIdentity {
                product_id: ProductId::from_code(data[6]),
                firmware: FirmwareVersion {
                    version: data[7],
                    revision: data[8],
                    minor: data[9],
                },
                panel_id: read_u16_be(data, 10),
                pc_password: [data[12], data[13]],
                source_id: data[27],
            };
            Ok(Message::InitiateCommunicationResponse {
                identity,
                user_id: data[28],
            })
        }
        Layout::InitializeRequest => Ok(Message::InitializeCommunication {
            product_id: ProductId::from_code(data[1]),
            firmware: FirmwareVersion {
                version: data[2],
                revision: data[3],
                minor: data[4],
            },
            panel_id: read_u16_be(data, 5),
            pc_password: [data[7], data[8]],
            source_id: data[12],
            user_id: data[13],
        }),
        Layout::InitializeResponse => Ok(Message::InitializeCommunicationResponse {
            command,
            user_id: data[35],
        }),
        Layout::ActionResponse => Ok(Message::PerformActionResponse {
            command,
            user_id: data[35],
        }),
        Layout::EepromResponse => {
            let mut payload = [0u8; EEPROM_DATA_LEN];
            payload.copy_from_slice(&data[5..5 + EEPROM_DATA_LEN]);
            Ok(Message::ReadEepromResponse {
                command,
                address: read_u16_be(data, 2),
                records: data[4],
                data: payload,
            })
        }
        Layout::LiveEvent => {
            let mut serial = [0u8; 4];
            serial.copy_from_slice(&data[6..10]);
            Ok(Message::LiveEvent(EventRecord {
                command,
                event_group: data[2],
                event_1: data[3],
                event_2: data[4],
                partition: data[5],
                module_serial: serial,
                label_type: data[10],
                label: decode_label(&data[11..27]),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ProductId;

    fn test_identity() -> PanelIdentity {
        PanelIdentity {
            product_id: ProductId::MagellanMg5050,
            firmware: FirmwareVersion {
                version: 4,
                revision: 2,
                minor: 1,
            },
            panel_id: 1234,
            pc_password: [0x12, 0x34],
            source_id: 1,
        }
    }

    #[test]
    fn checksum_is_additive_mod_256() {
        assert_eq!(checksum(&[]), 0);
        assert_eq!(checksum(&[0x72]), 0x72);
        assert_eq!(checksum(&[0xFF, 0x02]), 0x01);
    }

    #[test]
    fn every_encoded_frame_carries_valid_checksum() {
        let frames = [
            encode_initiate_communication(0),
            encode_initialize_communication(&test_identity(), [0xAB, 0xCD], SourceId::PanelApp, 0),
            encode_perform_action(0x04, 2, SourceId::PanelApp, 0),
            encode_read_eeprom(0x0100, 4, SourceId::PanelApp, 0),
        ];
        for frame in frames {
            assert_eq!(frame.len(), FRAME_LEN);
            assert_eq!(frame[CHECKSUM_OFFSET], checksum(&frame[..CHECKSUM_OFFSET]));
        }
    }

    #[test]
    fn pc_password_packs_hex_pairs() {
        assert_eq!(encode_pc_password("0000").unwrap(), [0x00, 0x00]);
        assert_eq!(encode_pc_password("abcd").unwrap(), [0xAB, 0xCD]);
        assert_eq!(encode_pc_password("1234").unwrap(), [0x12, 0x34]);
        assert_eq!(encode_pc_password("ABCD").unwrap(), [0xAB, 0xCD]);
    }

    #[test]
    fn pc_password_rejects_bad_input() {
        assert!(matches!(
            encode_pc_password("12"),
            Err(PanelError::InvalidPassword)
        ));
        assert!(matches!(
            encode_pc_password("zzzz"),
            Err(PanelError::InvalidPassword)
        ));
        assert!(matches!(
            encode_pc_password("12345"),
            Err(PanelError::InvalidPassword)
        ));
        assert!(matches!(
            encode_pc_password(""),
            Err(PanelError::InvalidPassword)
        ));
    }

    #[test]
    fn initiate_request_layout() {
        let frame = encode_initiate_communication(0x07);
        assert_eq!(frame[0], 0x72);
        assert_eq!(frame[35], 0x07);
        // everything between is reserved and stays zero
        assert!(frame[1..35].iter().all(|b| *b == 0));
    }

    #[test]
    fn own_initiate_request_is_not_decodable() {
        // The request shares command byte 0x72 with the response but lacks
        // the 0xFF result marker; only the panel-direction frame decodes.
        let frame = encode_initiate_communication(0);
        assert_eq!(
            decode(&frame),
            Err(DecodeError::UnknownCommand { command: 0x72 })
        );
    }

    #[test]
    fn initialize_request_round_trips() {
        let identity = test_identity();
        let frame =
            encode_initialize_communication(&identity, [0xAB, 0xCD], SourceId::PanelApp, 0x00);
        let decoded = decode(&frame).unwrap();
        assert_eq!(
            decoded,
            Message::InitializeCommunication {
                product_id: ProductId::MagellanMg5050,
                firmware: identity.firmware,
                panel_id: 1234,
                pc_password: [0xAB, 0xCD],
                source_id: 1,
                user_id: 0,
            }
        );
    }

    #[test]
    fn initialize_request_layout() {
        let frame =
            encode_initialize_communication(&test_identity(), [0xAB, 0xCD], SourceId::PanelApp, 0);
        assert_eq!(frame[0], 0x00);
        assert_eq!(frame[1], 4); // MG5050
        assert_eq!(&frame[2..5], &[4, 2, 1]);
        assert_eq!(&frame[5..7], &1234u16.to_be_bytes());
        assert_eq!(&frame[7..9], &[0xAB, 0xCD]);
        assert_eq!(frame[12], 0x01);
        assert_eq!(frame[13], 0x00);
        assert!(frame[14..35].iter().all(|b| *b == 0));
    }

    #[test]
    fn perform_action_layout() {
        let frame = encode_perform_action(0x01, 2, SourceId::PanelApp, 0x00);
        assert_eq!(frame[0], 0x40);
        assert_eq!(frame[4], 0x01);
        assert_eq!(frame[5], 2);
        assert_eq!(frame[33], 0x01);
        assert_eq!(frame[34], 0x00);
        assert_eq!(frame[35], 0x00);
        assert!(frame[6..33].iter().all(|b| *b == 0));
    }

    #[test]
    fn read_eeprom_layout() {
        let frame = encode_read_eeprom(0x0310, 8, SourceId::PanelApp, 0x00);
        assert_eq!(frame[0], 0x50);
        assert_eq!(&frame[2..4], &[0x03, 0x10]);
        assert_eq!(frame[4], 8);
        assert_eq!(frame[33], 0x01);
    }

    fn raw_frame(fill: impl FnOnce(&mut [u8; FRAME_LEN])) -> [u8; FRAME_LEN] {
        let mut frame = [0u8; FRAME_LEN];
        fill(&mut frame);
        frame[CHECKSUM_OFFSET] = checksum(&frame[..CHECKSUM_OFFSET]);
        frame
    }

    #[test]
    fn initiate_response_decodes_identity() {
        let frame = raw_frame(|f| {
            f[0] = 0x72;
            f[1] = 0xFF;
            f[6] = 4;
            f[7] = 4;
            f[8] = 2;
            f[9] = 1;
            f[10..12].copy_from_slice(&1234u16.to_be_bytes());
            f[12] = 0x12;
            f[13] = 0x34;
            f[27] = 1;
            f[28] = 0;
        });
        let Message::InitiateCommunicationResponse { identity, user_id } = decode(&frame).unwrap()
        else {
            panic!("wrong message kind");
        };
        assert_eq!(identity.product_id, ProductId::MagellanMg5050);
        assert_eq!(identity.firmware.to_string(), "4.2.1");
        assert_eq!(identity.panel_id, 1234);
        assert_eq!(identity.pc_password, [0x12, 0x34]);
        assert_eq!(identity.source_id, 1);
        assert_eq!(user_id, 0);
    }

    #[test]
    fn action_response_family_covers_whole_range() {
        for command in 0x40..0x50u8 {
            let frame = raw_frame(|f| f[0] = command);
            let decoded = decode(&frame).unwrap();
            assert!(matches!(decoded, Message::PerformActionResponse { .. }));
            assert_eq!(decoded.command(), command);
        }
    }

    #[test]
    fn eeprom_response_extracts_payload() {
        let frame = raw_frame(|f| {
            f[0] = 0x52;
            f[2..4].copy_from_slice(&0x0310u16.to_be_bytes());
            f[4] = 2;
            for (i, b) in f[5..32].iter_mut().enumerate() {
                *b = i as u8;
            }
        });
        let Message::ReadEepromResponse {
            command,
            address,
            records,
            data,
        } = decode(&frame).unwrap()
        else {
            panic!("wrong message kind");
        };
        assert_eq!(command, 0x52);
        assert_eq!(address, 0x0310);
        assert_eq!(records, 2);
        assert_eq!(data[0], 0);
        assert_eq!(data[26], 26);
    }

    #[test]
    fn live_event_strips_label_padding() {
        let frame = raw_frame(|f| {
            f[0] = 0xE1;
            f[2] = 3;
            f[3] = 7;
            f[4] = 9;
            f[5] = 2;
            f[11..21].copy_from_slice(b"Front Door");
        });
        let Message::LiveEvent(event) = decode(&frame).unwrap() else {
            panic!("wrong message kind");
        };
        assert_eq!(event.command, 0xE1);
        assert_eq!(event.event_group, 3);
        assert_eq!(event.partition, 2);
        assert_eq!(event.label, "Front Door");
    }

    #[test]
    fn decode_rejects_short_input() {
        assert_eq!(decode(&[]), Err(DecodeError::TooShort { len: 0 }));
        assert_eq!(decode(&[0x40]), Err(DecodeError::TooShort { len: 1 }));
    }

    #[test]
    fn decode_rejects_unknown_command() {
        let frame = raw_frame(|f| f[0] = 0x99);
        assert_eq!(
            decode(&frame),
            Err(DecodeError::UnknownCommand { command: 0x99 })
        );
    }

    #[test]
    fn single_byte_corruption_fails_checksum() {
        let clean = raw_frame(|f| {
            f[0] = 0x41;
            f[5] = 0x17;
        });
        for offset in [0usize, 5, 20, 35] {
            let mut corrupted = clean;
            corrupted[offset] = corrupted[offset].wrapping_add(1);
            assert!(
                matches!(
                    decode(&corrupted),
                    Err(DecodeError::ChecksumMismatch { .. })
                        | Err(DecodeError::UnknownCommand { .. })
                ),
                "offset {offset} should not decode"
            );
        }
    }

    #[test]
    fn arm_mode_codes_match_action_table() {
        assert_eq!(ArmMode::Stay.action_code(), 0x01);
        assert_eq!(ArmMode::Sleep.action_code(), 0x02);
        assert_eq!(ArmMode::Away.action_code(), 0x04);
        assert_eq!(ArmMode::StayInstant.action_code(), 0x06);
        assert_eq!(ArmMode::Instant.action_code(), 0x07);
        assert_eq!(DISARM_ACTION, 0x05);
        assert_eq!(ZONE_BYPASS_ACTION, 0x10);
    }

    #[test]
    fn arm_mode_parses_aliases() {
        assert_eq!("arm".parse::<ArmMode>().unwrap(), ArmMode::Away);
        assert_eq!("arm_away".parse::<ArmMode>().unwrap(), ArmMode::Away);
        assert_eq!("arm_stay".parse::<ArmMode>().unwrap(), ArmMode::Stay);
        assert!("hold".parse::<ArmMode>().is_err());
    }

    #[test]
    fn output_action_codes() {
        assert_eq!(OutputAction::On.action_code(), 0x32);
        assert_eq!(OutputAction::Off.action_code(), 0x33);
        assert_eq!(OutputAction::OnOverride.action_code(), 0x34);
        assert_eq!(OutputAction::OffOverride.action_code(), 0x35);
        assert_eq!("off".parse::<OutputAction>().unwrap(), OutputAction::Off);
    }

    #[test]
    fn command_result_classification() {
        assert!(CommandResult::from_code(0x40).success);
        assert_eq!(CommandResult::from_code(0x40).status, ActionStatus::Success);
        assert_eq!(CommandResult::from_code(0x41).status, ActionStatus::Fail);
        assert_eq!(
            CommandResult::from_code(0x42).status,
            ActionStatus::InvalidArgument
        );
        assert_eq!(
            CommandResult::from_code(0x43).status,
            ActionStatus::UserCodeRequired
        );
        assert_eq!(CommandResult::from_code(0x4A).status, ActionStatus::Unknown);
        assert!(!CommandResult::from_code(0x4A).success);
    }
}
