//! Fixed-Capacity Streaming Sink for Waveform History
//!
//! ## Overview
//!
//! Each channel's time plot scrolls a fixed window of the most recent
//! samples. `SampleBuffer` is the data model behind that window: an
//! explicit circular buffer with a write position and length, giving O(1)
//! amortized append with no reallocation and no per-tick copying of the
//! backing store.
//!
//! ## Semantics
//!
//! - `extend(chunk)` appends each sample to the tail; once the buffer is
//!   full, every append evicts the oldest sample (FIFO ring).
//! - Iteration and snapshots are always oldest-to-newest, which is the
//!   order the renderer draws.
//! - Any chunk length is accepted; a chunk longer than the capacity
//!   leaves exactly the last `N` samples.
//!
//! ## Internal Invariants
//!
//! - `write_pos < N` (next write position is always valid)
//! - `len <= N` (never claim more items than capacity)
//! - Logical index 0 is the oldest retained sample
//!
//! ## Thread Safety
//!
//! Not thread-safe; the simulation loop is single-threaded by design and
//! owns the buffers exclusively.

use heapless::Vec;

use crate::channel::{Channel, CHANNEL_COUNT};
use crate::constants::simulation::HISTORY_LEN;

/// Fixed-size circular buffer of waveform samples.
///
/// `N` is the retained window length, fixed at compile time so the
/// renderer's scroll window and the buffer capacity cannot drift apart.
#[derive(Debug, Clone)]
pub struct SampleBuffer<const N: usize> {
    /// Backing storage; slots beyond `len` are unobservable.
    data: [f32; N],
    /// Index where the next write will occur, wraps at N.
    write_pos: usize,
    /// Current number of valid samples, saturates at N.
    len: usize,
}

impl<const N: usize> SampleBuffer<N> {
    /// Creates a new empty buffer.
    pub const fn new() -> Self {
        Self {
            data: [0.0; N],
            write_pos: 0,
            len: 0,
        }
    }

    /// Append a single sample, evicting the oldest when full.
    pub fn push(&mut self, sample: f32) {
        self.data[self.write_pos] = sample;
        self.write_pos = (self.write_pos + 1) % N;

        if self.len < N {
            self.len += 1;
        }
    }

    /// Append a chunk of any length, preserving sample order.
    pub fn extend(&mut self, chunk: &[f32]) {
        for &sample in chunk {
            self.push(sample);
        }
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if the retained window is full.
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Most recently appended sample.
    pub fn last(&self) -> Option<f32> {
        if self.is_empty() {
            return None;
        }

        // Most recent is one before the write position
        let idx = if self.write_pos == 0 { N - 1 } else { self.write_pos - 1 };
        Some(self.data[idx])
    }

    /// Sample at logical index (0 = oldest, len-1 = newest).
    ///
    /// When the buffer is not yet full, logical and physical indices
    /// coincide; once full, the oldest sample sits at `write_pos` and the
    /// lookup wraps.
    pub fn get(&self, index: usize) -> Option<f32> {
        if index >= self.len {
            return None;
        }

        let actual_index = if self.len < N {
            index
        } else {
            (self.write_pos + index) % N
        };

        Some(self.data[actual_index])
    }

    /// Iterate samples oldest-to-newest.
    pub fn iter(&self) -> SampleBufferIter<'_, N> {
        SampleBufferIter {
            buffer: self,
            index: 0,
        }
    }

    /// Ordered copy of the current window for the renderer.
    pub fn snapshot(&self) -> Vec<f32, N> {
        let mut out = Vec::new();
        for sample in self.iter() {
            // Cannot overflow: iter yields at most len <= N samples
            let _ = out.push(sample);
        }
        out
    }

    /// Discard all samples.
    pub fn clear(&mut self) {
        self.write_pos = 0;
        self.len = 0;
    }
}

impl<const N: usize> Default for SampleBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over buffer contents, oldest first.
pub struct SampleBufferIter<'a, const N: usize> {
    buffer: &'a SampleBuffer<N>,
    index: usize,
}

impl<'a, const N: usize> Iterator for SampleBufferIter<'a, N> {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.buffer.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

/// One streaming sink per dashboard channel.
#[derive(Debug, Clone)]
pub struct ChannelStreams {
    streams: [SampleBuffer<HISTORY_LEN>; CHANNEL_COUNT],
}

impl ChannelStreams {
    /// Empty streams for all channels.
    pub const fn new() -> Self {
        Self {
            streams: [
                SampleBuffer::new(),
                SampleBuffer::new(),
                SampleBuffer::new(),
                SampleBuffer::new(),
                SampleBuffer::new(),
            ],
        }
    }

    /// Read access to one channel's window.
    pub fn get(&self, channel: Channel) -> &SampleBuffer<HISTORY_LEN> {
        &self.streams[channel.index()]
    }

    /// Append a chunk to one channel.
    pub fn extend(&mut self, channel: Channel, chunk: &[f32]) {
        self.streams[channel.index()].extend(chunk);
    }
}

impl Default for ChannelStreams {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer() {
        let buffer: SampleBuffer<5> = SampleBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert!(buffer.last().is_none());
    }

    #[test]
    fn push_and_retrieve() {
        let mut buffer = SampleBuffer::<5>::new();
        buffer.push(25.0);

        assert_eq!(buffer.len(), 1);
        assert!(!buffer.is_empty());
        assert_eq!(buffer.last(), Some(25.0));
    }

    #[test]
    fn circular_overwrite() {
        let mut buffer = SampleBuffer::<3>::new();

        for i in 0..5 {
            buffer.push(i as f32);
        }

        // Should only have 3 items, oldest two evicted
        assert_eq!(buffer.len(), 3);
        assert!(buffer.is_full());

        let values: std::vec::Vec<f32> = buffer.iter().collect();
        assert_eq!(values, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn chunk_append_preserves_order() {
        let mut buffer = SampleBuffer::<6>::new();
        buffer.extend(&[1.0, 2.0, 3.0]);
        buffer.extend(&[4.0, 5.0]);

        let values: std::vec::Vec<f32> = buffer.iter().collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn oversized_chunk_keeps_most_recent_window() {
        let mut buffer = SampleBuffer::<4>::new();
        let chunk: std::vec::Vec<f32> = (0..10).map(|i| i as f32).collect();
        buffer.extend(&chunk);

        let values: std::vec::Vec<f32> = buffer.iter().collect();
        assert_eq!(values, vec![6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn snapshot_matches_iteration_order() {
        let mut buffer = SampleBuffer::<3>::new();
        buffer.extend(&[1.0, 2.0, 3.0, 4.0]);

        let snap = buffer.snapshot();
        assert_eq!(snap.as_slice(), &[2.0, 3.0, 4.0]);
    }

    #[test]
    fn clear_resets_window() {
        let mut buffer = SampleBuffer::<3>::new();
        buffer.extend(&[1.0, 2.0]);
        buffer.clear();

        assert!(buffer.is_empty());
        assert!(buffer.last().is_none());
    }

    #[test]
    fn channel_streams_are_independent() {
        let mut streams = ChannelStreams::new();
        streams.extend(Channel::Strain, &[1.0, 2.0]);

        assert_eq!(streams.get(Channel::Strain).len(), 2);
        assert_eq!(streams.get(Channel::Microphone).len(), 0);
    }
}
