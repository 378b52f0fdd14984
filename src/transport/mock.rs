// MIT License - Copyright (c) 2026 Peter Wright

//! In-memory transport used by the tests as the simulated panel.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::transport::Transport;

/// Scripted transport: inbound bytes are queued ahead of time, outbound
/// writes are captured for inspection. Reads never wait — if nothing is
/// queued the read comes back short, exactly like a serial timeout.
///
/// Clones share state, so a test can keep one handle while the session
/// owns another and keep scripting replies mid-flow. Bytes queued with
/// [`push_bytes`](Self::push_bytes) survive an input-buffer reset (they
/// play the part of replies the device sends after the flush); use
/// [`push_stale_bytes`](Self::push_stale_bytes) for leftovers a reset
/// should discard.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    stale: VecDeque<u8>,
    inbound: VecDeque<u8>,
    outbound: Vec<u8>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue a scripted device reply.
    pub fn push_bytes(&self, data: &[u8]) {
        self.lock().inbound.extend(data.iter().copied());
    }

    /// Queue bytes that an input-buffer reset should throw away.
    pub fn push_stale_bytes(&self, data: &[u8]) {
        self.lock().stale.extend(data.iter().copied());
    }

    /// Everything the client has written so far.
    pub fn written(&self) -> Vec<u8> {
        self.lock().outbound.clone()
    }

    /// Drop captured writes.
    pub fn clear_written(&self) {
        self.lock().outbound.clear();
    }

    /// Bytes queued but not yet read.
    pub fn pending(&self) -> usize {
        let inner = self.lock();
        inner.stale.len() + inner.inbound.len()
    }
}

impl Transport for MockTransport {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.lock().outbound.extend_from_slice(data);
        Ok(data.len())
    }

    fn read(&mut self, max_len: usize) -> io::Result<Vec<u8>> {
        let mut inner = self.lock();
        let mut out = Vec::with_capacity(max_len);
        while out.len() < max_len {
            match inner.stale.pop_front().or_else(|| inner.inbound.pop_front()) {
                Some(b) => out.push(b),
                None => break,
            }
        }
        Ok(out)
    }

    fn bytes_available(&mut self) -> io::Result<usize> {
        Ok(self.pending())
    }

    fn reset_input_buffer(&mut self) -> io::Result<()> {
        self.lock().stale.clear();
        Ok(())
    }

    fn reset_output_buffer(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_drain_the_queue() {
        let mut t = MockTransport::new();
        t.push_bytes(&[1, 2, 3]);
        assert_eq!(t.bytes_available().unwrap(), 3);
        assert_eq!(t.read(2).unwrap(), vec![1, 2]);
        assert_eq!(t.read(5).unwrap(), vec![3]);
        assert!(t.read(1).unwrap().is_empty());
    }

    #[test]
    fn writes_are_captured() {
        let mut t = MockTransport::new();
        t.write(&[0x40, 0x01]).unwrap();
        assert_eq!(t.written(), vec![0x40, 0x01]);
    }

    #[test]
    fn input_reset_discards_only_stale_bytes() {
        let mut t = MockTransport::new();
        t.push_stale_bytes(&[9; 8]);
        t.push_bytes(&[0x72]);
        t.reset_input_buffer().unwrap();
        assert_eq!(t.bytes_available().unwrap(), 1);
        assert_eq!(t.read(4).unwrap(), vec![0x72]);
    }

    #[test]
    fn stale_bytes_read_before_scripted_replies() {
        let mut t = MockTransport::new();
        t.push_stale_bytes(&[1]);
        t.push_bytes(&[2]);
        assert_eq!(t.read(2).unwrap(), vec![1, 2]);
    }

    #[test]
    fn clones_share_state() {
        let handle = MockTransport::new();
        let mut owned = handle.clone();
        handle.push_bytes(&[5]);
        assert_eq!(owned.read(1).unwrap(), vec![5]);
        owned.write(&[7]).unwrap();
        assert_eq!(handle.written(), vec![7]);
    }
}
