//! Interval-based packetizer for serial-style byte streams.
//!
//! Buffers bytes pushed by an upstream producer and releases them as one
//! packet whenever the source goes quiet for a configured interval, or
//! whenever an accumulation cap is reached. Segmentation is driven by timing
//! and size alone; nothing here understands the protocol carried on the link.

pub mod accumulator;
pub mod config;
pub mod packetizer;

pub use accumulator::Accumulator;
pub use config::{ConfigError, DEFAULT_MAX_BUFFER_SIZE, PacketizerConfig};
pub use packetizer::IntervalPacketizer;
