// MIT License - Copyright (c) 2026 Peter Wright

pub mod framing;
pub mod mock;
pub mod serial;

use std::io;

/// Byte-stream contract required from the serial link.
///
/// A transport is exclusively owned by one [`Session`](crate::Session) for
/// its lifetime; implementations carry no protocol knowledge. `read` waits
/// at most the transport's own read timeout and may return fewer bytes than
/// requested (including none) when it expires.
pub trait Transport {
    /// Write the full buffer, returning the number of bytes written.
    fn write(&mut self, data: &[u8]) -> io::Result<usize>;

    /// Read up to `max_len` bytes, returning whatever arrived in time.
    fn read(&mut self, max_len: usize) -> io::Result<Vec<u8>>;

    /// Bytes already buffered and readable without waiting.
    fn bytes_available(&mut self) -> io::Result<usize>;

    /// Discard any buffered, unread inbound bytes.
    fn reset_input_buffer(&mut self) -> io::Result<()>;

    /// Discard any queued, unsent outbound bytes.
    fn reset_output_buffer(&mut self) -> io::Result<()>;
}

/// Space-separated hex rendering for TX/RX logging.
pub(crate) fn hex_str(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_str_formats_bytes() {
        assert_eq!(hex_str(&[0x72, 0x00, 0xFF]), "72 00 FF");
        assert_eq!(hex_str(&[]), "");
    }
}
