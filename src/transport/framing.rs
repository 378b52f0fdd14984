// MIT License - Copyright (c) 2026 Peter Wright

//! Variable-length frame reads.
//!
//! The wire format overloads the first received byte: values above 4 are
//! taken as an explicit message length (clamped to the 37-byte protocol
//! maximum), anything else means a standard fixed-length frame. The
//! original firmware tooling applies this heuristic unconditionally even
//! though most command bytes exceed 4, so some fixed-length responses come
//! back truncated — notably the 0x10 authentication success frame, which
//! reads as 16 bytes. Callers cope by matching on the command byte and
//! rejecting anything that needs more via checksum failure.

use std::io;

use tracing::trace;

use crate::constants::{FRAME_LEN, MAX_IMPLICIT_LENGTH_BYTE};
use crate::transport::{hex_str, Transport};

/// Read one frame from the transport.
///
/// Returns an empty buffer when no byte arrives within the transport's
/// read timeout ("no message"). A short read yields a short buffer; the
/// caller decides whether that matters.
pub fn read_frame<T: Transport + ?Sized>(transport: &mut T) -> io::Result<Vec<u8>> {
    let mut frame = transport.read(1)?;
    let Some(&first) = frame.first() else {
        return Ok(Vec::new());
    };

    let length = if first > MAX_IMPLICIT_LENGTH_BYTE {
        (first as usize).min(FRAME_LEN)
    } else {
        FRAME_LEN
    };

    let rest = transport.read(length - 1)?;
    frame.extend_from_slice(&rest);
    trace!("RX ({} bytes): {}", frame.len(), hex_str(&frame));
    Ok(frame)
}
