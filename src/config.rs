// MIT License - Copyright (c) 2026 Peter Wright

use std::time::Duration;

use crate::constants::{
    DEFAULT_BAUD_RATE, DEFAULT_POLL_INTERVAL, DEFAULT_READ_TIMEOUT, DEFAULT_RESPONSE_TIMEOUT,
};

/// Configuration for one panel connection.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Serial device path (e.g. `/dev/ttyUSB0`, `COM3`)
    pub port: String,
    /// Line speed (MG/SP panels use 9600)
    pub baud_rate: u32,
    /// PC password, 4 hexadecimal digits
    pub pc_password: String,
    /// Serial read timeout per transfer, milliseconds
    pub read_timeout_ms: u64,
    /// How long one request/response cycle may take, milliseconds
    pub response_timeout_ms: u64,
    /// Sleep between polls while waiting for bytes, milliseconds
    pub poll_interval_ms: u64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            port: "/dev/ttyUSB0".to_string(),
            baud_rate: DEFAULT_BAUD_RATE,
            pc_password: "0000".to_string(),
            read_timeout_ms: DEFAULT_READ_TIMEOUT.as_millis() as u64,
            response_timeout_ms: DEFAULT_RESPONSE_TIMEOUT.as_millis() as u64,
            poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
        }
    }
}

impl PanelConfig {
    /// Create a new config builder starting from defaults.
    pub fn builder() -> PanelConfigBuilder {
        PanelConfigBuilder::default()
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn response_timeout(&self) -> Duration {
        Duration::from_millis(self.response_timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Builder for [`PanelConfig`].
#[derive(Debug, Clone, Default)]
pub struct PanelConfigBuilder {
    config: PanelConfig,
}

impl PanelConfigBuilder {
    pub fn port(mut self, port: impl Into<String>) -> Self {
        self.config.port = port.into();
        self
    }

    pub fn baud_rate(mut self, baud_rate: u32) -> Self {
        self.config.baud_rate = baud_rate;
        self
    }

    pub fn pc_password(mut self, password: impl Into<String>) -> Self {
        self.config.pc_password = password.into();
        self
    }

    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    pub fn response_timeout_ms(mut self, ms: u64) -> Self {
        self.config.response_timeout_ms = ms;
        self
    }

    pub fn poll_interval_ms(mut self, ms: u64) -> Self {
        self.config.poll_interval_ms = ms;
        self
    }

    pub fn build(self) -> PanelConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_protocol_conventions() {
        let config = PanelConfig::default();
        assert_eq!(config.baud_rate, 9600);
        assert_eq!(config.response_timeout(), Duration::from_secs(5));
        assert_eq!(config.poll_interval(), Duration::from_millis(10));
    }

    #[test]
    fn builder_overrides_fields() {
        let config = PanelConfig::builder()
            .port("/dev/ttyACM1")
            .baud_rate(57600)
            .pc_password("abcd")
            .response_timeout_ms(1500)
            .build();
        assert_eq!(config.port, "/dev/ttyACM1");
        assert_eq!(config.baud_rate, 57600);
        assert_eq!(config.pc_password, "abcd");
        assert_eq!(config.response_timeout(), Duration::from_millis(1500));
    }
}
