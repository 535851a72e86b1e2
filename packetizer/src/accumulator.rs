/// Size-capped byte accumulator.
///
/// Owns the bytes gathered between flushes. Appending past the cap yields
/// complete packets of exactly `max_len` bytes; [`take`](Accumulator::take)
/// hands out whatever is currently held. The buffer never holds more than
/// `max_len` bytes at rest.
#[derive(Debug)]
pub struct Accumulator {
    buffer: Vec<u8>,
    max_len: usize,
}

impl Accumulator {
    pub fn new(max_len: usize) -> Self {
        Self {
            buffer: Vec::new(),
            max_len,
        }
    }

    /// Appends `chunk`, flushing every time the buffer reaches the cap.
    ///
    /// Returns the cap-triggered packets in the order their bytes arrived.
    /// A chunk large enough to cross the cap more than once yields more than
    /// one packet; bytes past the last cap boundary stay buffered.
    pub fn extend(&mut self, mut chunk: &[u8]) -> Vec<Vec<u8>> {
        let mut packets = Vec::new();

        while !chunk.is_empty() {
            let room = self.max_len - self.buffer.len();
            let take = room.min(chunk.len());

            self.buffer.extend_from_slice(&chunk[..take]);
            chunk = &chunk[take..];

            if self.buffer.len() == self.max_len {
                packets.push(std::mem::take(&mut self.buffer));
            }
        }

        packets
    }

    /// Takes the buffered bytes, leaving the accumulator empty.
    ///
    /// Returns `None` when nothing is buffered, so flushing an empty buffer
    /// emits nothing rather than a zero-length packet.
    pub fn take(&mut self) -> Option<Vec<u8>> {
        if self.buffer.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.buffer))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_below_cap_without_flushing() {
        let mut acc = Accumulator::new(8);

        assert!(acc.extend(&[1, 2, 3]).is_empty());
        assert_eq!(acc.take(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn reaching_cap_exactly_yields_one_full_packet() {
        let mut acc = Accumulator::new(4);

        let packets = acc.extend(&[1, 2, 3, 4]);

        assert_eq!(packets, vec![vec![1, 2, 3, 4]]);
        assert!(acc.is_empty());
    }

    #[test]
    fn one_chunk_can_cross_the_cap_twice() {
        let mut acc = Accumulator::new(4);

        // 2.5x the cap: two full packets out, half a packet left buffered
        let packets = acc.extend(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);

        assert_eq!(packets, vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]]);
        assert_eq!(acc.take(), Some(vec![9, 10]));
    }

    #[test]
    fn cap_boundary_spanning_separate_chunks() {
        let mut acc = Accumulator::new(4);

        assert!(acc.extend(&[1, 2, 3]).is_empty());
        let packets = acc.extend(&[4, 5]);

        assert_eq!(packets, vec![vec![1, 2, 3, 4]]);
        assert_eq!(acc.take(), Some(vec![5]));
    }

    #[test]
    fn empty_chunk_is_a_noop() {
        let mut acc = Accumulator::new(4);

        assert!(acc.extend(&[]).is_empty());
        assert!(acc.is_empty());
    }

    #[test]
    fn take_on_empty_buffer_returns_none() {
        let mut acc = Accumulator::new(4);

        assert_eq!(acc.take(), None);

        acc.extend(&[7]);
        assert_eq!(acc.take(), Some(vec![7]));
        assert_eq!(acc.take(), None);
    }
}
