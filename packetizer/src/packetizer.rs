use crate::accumulator::Accumulator;
use crate::config::{ConfigError, PacketizerConfig};
use log::{debug, warn};
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time::{Instant, sleep_until};

/// Segments a protocol-unaware byte stream into packets.
///
/// Byte chunks arrive on `reader` in arbitrary sizes at arbitrary times and
/// accumulate in an internal buffer. The buffer is emitted as one packet on
/// `writer` when either trigger fires:
///
/// - the source stays quiet for the configured interval, or
/// - the buffer reaches the configured cap (mid-chunk if need be, so one
///   large chunk may produce several packets).
///
/// Every incoming chunk resets the quiet-period clock. Packets come out in
/// the order their bytes went in. A source that never pauses and never
/// reaches the cap keeps its bytes buffered indefinitely.
///
/// # Example
/// ```
/// use packetizer::{IntervalPacketizer, PacketizerConfig};
/// use std::time::Duration;
/// use tokio::sync::mpsc;
///
/// #[tokio::main]
/// async fn main() {
///     let (byte_tx, byte_rx) = mpsc::unbounded_channel();
///     let (packet_tx, mut packet_rx) = mpsc::unbounded_channel();
///
///     let config = PacketizerConfig::new(Duration::from_millis(30));
///     let packetizer = IntervalPacketizer::new(config, byte_rx, packet_tx).unwrap();
///     tokio::spawn(packetizer.run());
///
///     byte_tx.send(vec![0x01, 0x02, 0x03]).unwrap();
///     drop(byte_tx); // closing the source flushes what is buffered
///
///     assert_eq!(packet_rx.recv().await, Some(vec![0x01, 0x02, 0x03]));
/// }
/// ```
pub struct IntervalPacketizer {
    reader: UnboundedReceiver<Vec<u8>>,
    writer: UnboundedSender<Vec<u8>>,
    buffer: Accumulator,
    interval: Duration,
    deadline: Option<Instant>,
}

impl IntervalPacketizer {
    /// Creates a packetizer reading chunks from `reader` and emitting
    /// packets on `writer`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if `config.interval` or
    /// `config.max_buffer_size` is zero.
    pub fn new(
        config: PacketizerConfig,
        reader: UnboundedReceiver<Vec<u8>>,
        writer: UnboundedSender<Vec<u8>>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            reader,
            writer,
            buffer: Accumulator::new(config.max_buffer_size),
            interval: config.interval,
            deadline: None,
        })
    }

    /// Drives the packetizer until the byte source closes its channel.
    ///
    /// Buffered bytes remaining at close are flushed as a final packet, so
    /// no tail bytes are lost on teardown. Dropping the returned future
    /// cancels the pending idle deadline; it can never fire afterwards.
    pub async fn run(mut self) {
        loop {
            match self.deadline {
                Some(deadline) => tokio::select! {
                    chunk = self.reader.recv() => match chunk {
                        Some(chunk) => self.feed(&chunk),
                        None => break,
                    },
                    _ = sleep_until(deadline) => {
                        self.deadline = None;
                        self.flush();
                    }
                },
                None => match self.reader.recv().await {
                    Some(chunk) => self.feed(&chunk),
                    None => break,
                },
            }
        }

        // Source closed, don't silently drop the tail.
        self.flush();
    }

    /// Accumulates one incoming chunk.
    ///
    /// Cancels the pending idle deadline, appends the bytes (emitting a full
    /// packet each time the cap is reached), then re-arms the deadline if
    /// anything is left buffered. An empty chunk only resets the clock.
    fn feed(&mut self, chunk: &[u8]) {
        self.deadline = None;

        for packet in self.buffer.extend(chunk) {
            self.emit(packet);
        }

        if !self.buffer.is_empty() {
            self.deadline = Some(Instant::now() + self.interval);
        }
    }

    fn flush(&mut self) {
        if let Some(packet) = self.buffer.take() {
            self.emit(packet);
        }
    }

    fn emit(&mut self, packet: Vec<u8>) {
        debug!("emitting packet of {} bytes", packet.len());

        if self.writer.send(packet).is_err() {
            warn!("packet consumer dropped, discarding packet");
        }
    }
}
