// MIT License - Copyright (c) 2026 Peter Wright

//! Serial-port transport.

use std::io::{self, Read, Write};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::PanelConfig;
use crate::transport::{hex_str, Transport};

/// A [`Transport`] over a physical serial port, 8N1.
pub struct SerialTransport {
    port: Box<dyn serialport::SerialPort>,
    read_timeout: Duration,
}

impl SerialTransport {
    /// Open and configure the port named in the config.
    pub fn open(config: &PanelConfig) -> io::Result<Self> {
        info!("Connecting to {} @ {} baud", config.port, config.baud_rate);
        let port = serialport::new(&config.port, config.baud_rate)
            .data_bits(serialport::DataBits::Eight)
            .parity(serialport::Parity::None)
            .stop_bits(serialport::StopBits::One)
            .timeout(config.read_timeout())
            .open()
            .map_err(io::Error::from)?;
        info!("Serial connection established");
        Ok(Self {
            port,
            read_timeout: config.read_timeout(),
        })
    }

    /// Names of serial ports present on this machine.
    pub fn available_ports() -> io::Result<Vec<String>> {
        let ports = serialport::available_ports().map_err(io::Error::from)?;
        Ok(ports.into_iter().map(|p| p.port_name).collect())
    }
}

impl Transport for SerialTransport {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        debug!("TX ({} bytes): {}", data.len(), hex_str(data));
        let written = self.port.write(data)?;
        self.port.flush()?;
        Ok(written)
    }

    fn read(&mut self, max_len: usize) -> io::Result<Vec<u8>> {
        let mut buf = vec![0u8; max_len];
        let mut filled = 0;
        let deadline = Instant::now() + self.read_timeout;

        // The port's own timeout bounds each read call; the deadline bounds
        // the whole transfer when bytes trickle in.
        while filled < max_len {
            match self.port.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::TimedOut => break,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
            if Instant::now() >= deadline {
                break;
            }
        }

        buf.truncate(filled);
        if !buf.is_empty() {
            debug!("RX ({} bytes): {}", buf.len(), hex_str(&buf));
        }
        Ok(buf)
    }

    fn bytes_available(&mut self) -> io::Result<usize> {
        let n = self.port.bytes_to_read().map_err(io::Error::from)?;
        Ok(n as usize)
    }

    fn reset_input_buffer(&mut self) -> io::Result<()> {
        self.port
            .clear(serialport::ClearBuffer::Input)
            .map_err(io::Error::from)?;
        debug!("Input buffer cleared");
        Ok(())
    }

    fn reset_output_buffer(&mut self) -> io::Result<()> {
        self.port
            .clear(serialport::ClearBuffer::Output)
            .map_err(io::Error::from)
    }
}
