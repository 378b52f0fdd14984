// MIT License - Copyright (c) 2026 Peter Wright

//! Live-event monitoring.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::constants::LIVE_EVENT_RANGE;
use crate::error::Result;
use crate::protocol::{self, EventRecord, Message};
use crate::session::Session;
use crate::transport::{framing, Transport};

/// A poll cycle over the session's transport, yielding live events.
///
/// Obtained from [`Session::monitor_events`]. Call
/// [`next_event`](Self::next_event) repeatedly; it resolves to `Some` for
/// each decoded event frame and to `None` once the optional duration bound
/// has elapsed. Cancellation is caller-driven: stop calling, or drop the
/// monitor. Frames outside the live-event range are discarded with a
/// diagnostic; malformed event frames are logged and skipped without
/// ending the cycle.
pub struct EventMonitor<'a, T: Transport> {
    session: &'a mut Session<T>,
    deadline: Option<tokio::time::Instant>,
}

impl<'a, T: Transport> EventMonitor<'a, T> {
    pub(crate) fn new(session: &'a mut Session<T>, duration: Option<Duration>) -> Self {
        match duration {
            Some(d) => info!("Monitoring events for {d:?}"),
            None => info!("Monitoring events until cancelled"),
        }
        let deadline = duration.map(|d| tokio::time::Instant::now() + d);
        Self { session, deadline }
    }

    /// Wait for the next live event, or `None` when the bound expires.
    pub async fn next_event(&mut self) -> Result<Option<EventRecord>> {
        let poll_interval = self.session.poll_interval();

        loop {
            if let Some(deadline) = self.deadline {
                if tokio::time::Instant::now() >= deadline {
                    info!("Event monitoring window elapsed");
                    return Ok(None);
                }
            }

            let transport = self.session.transport_mut();
            if transport.bytes_available()? > 0 {
                let frame = framing::read_frame(transport)?;
                if let Some(&command) = frame.first() {
                    if LIVE_EVENT_RANGE.contains(&command) {
                        match protocol::decode(&frame) {
                            Ok(Message::LiveEvent(event)) => {
                                info!(
                                    "Event: group={} partition={} label={:?}",
                                    event.event_group, event.partition, event.label
                                );
                                return Ok(Some(event));
                            }
                            Ok(message) => {
                                warn!(
                                    "Frame 0x{command:02X} decoded as non-event 0x{:02X}, skipping",
                                    message.command()
                                );
                            }
                            Err(e) => {
                                warn!("Skipping malformed event frame: {e}");
                            }
                        }
                    } else {
                        debug!("Non-event frame 0x{command:02X} during monitoring");
                    }
                }
            }

            tokio::time::sleep(poll_interval).await;
        }
    }
}
