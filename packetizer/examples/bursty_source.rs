//! Simulates a bursty serial-style byte source and prints the packets the
//! packetizer cuts out of it. Run with `RUST_LOG=debug` to see the flushes.

use packetizer::{IntervalPacketizer, PacketizerConfig};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;

#[tokio::main]
async fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let (byte_tx, byte_rx) = mpsc::unbounded_channel();
    let (packet_tx, mut packet_rx) = mpsc::unbounded_channel();

    let config = PacketizerConfig::new(Duration::from_millis(30)).with_max_buffer_size(1024);
    let packetizer = IntervalPacketizer::new(config, byte_rx, packet_tx).unwrap();
    tokio::spawn(packetizer.run());

    // Producer: three message-shaped bursts, each split into chunks that
    // arrive faster than the quiet interval, with silence in between.
    tokio::spawn(async move {
        for burst in 0..3u8 {
            for chunk in 0..4u8 {
                byte_tx.send(vec![burst; 2 + chunk as usize]).unwrap();
                sleep(Duration::from_millis(10)).await;
            }
            sleep(Duration::from_millis(100)).await;
        }
    });

    while let Some(packet) = packet_rx.recv().await {
        println!("packet ({} bytes): {:?}", packet.len(), packet);
    }
}
