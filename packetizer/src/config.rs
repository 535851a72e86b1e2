use std::error::Error;
use std::fmt;
use std::time::Duration;

/// Default accumulation cap, in bytes.
pub const DEFAULT_MAX_BUFFER_SIZE: usize = 65536;

/// Options for an [`IntervalPacketizer`](crate::IntervalPacketizer),
/// fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketizerConfig {
    /// Quiet period after which buffered bytes are flushed as a packet.
    pub interval: Duration,
    /// Hard cap on bytes held before a forced flush.
    pub max_buffer_size: usize,
}

impl PacketizerConfig {
    /// Creates a config with the given quiet interval and the default cap.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            max_buffer_size: DEFAULT_MAX_BUFFER_SIZE,
        }
    }

    /// Replaces the accumulation cap.
    pub fn with_max_buffer_size(mut self, max_buffer_size: usize) -> Self {
        self.max_buffer_size = max_buffer_size;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        if self.max_buffer_size == 0 {
            return Err(ConfigError::ZeroMaxBufferSize);
        }
        Ok(())
    }
}

/// Error returned when a packetizer is constructed with invalid options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The quiet interval was zero.
    ZeroInterval,
    /// The accumulation cap was zero.
    ZeroMaxBufferSize,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroInterval => write!(f, "interval must be greater than 0"),
            ConfigError::ZeroMaxBufferSize => {
                write!(f, "max_buffer_size must be greater than 0")
            }
        }
    }
}

impl Error for ConfigError {}
