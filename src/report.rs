//! Output boundary for accepted detections.
//!
//! The dispatcher hands every [`DetectionEvent`] to a [`DetectionSink`]. Where
//! the record goes from there (log, display, radio) is up to the sink.

use crate::types::DetectionEvent;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use heapless::Deque;

/// Receives one call per accepted detection.
///
/// Called from the dispatcher's context, never from an interrupt. Must not
/// block for long; the edge queue fills up while it runs.
pub trait DetectionSink<I> {
    /// Handles a detection record.
    fn on_detection(&mut self, event: DetectionEvent<I>);
}

/// Discards every record. For hosts that only read the count.
impl<I> DetectionSink<I> for () {
    fn on_detection(&mut self, _event: DetectionEvent<I>) {}
}

impl<I, S: DetectionSink<I> + ?Sized> DetectionSink<I> for &mut S {
    fn on_detection(&mut self, event: DetectionEvent<I>) {
        (**self).on_detection(event);
    }
}

/// Publishes the latest record to a task waiting on the signal.
///
/// A slow reader sees only the most recent detection; `count` still tells it
/// how many happened in between.
impl<M: RawMutex, I> DetectionSink<I> for &Signal<M, DetectionEvent<I>> {
    fn on_detection(&mut self, event: DetectionEvent<I>) {
        self.signal(event);
    }
}

/// Keeps the `N` most recent detection records. `N` must be non-zero.
pub struct DetectionLog<I, const N: usize> {
    events: Deque<DetectionEvent<I>, N>,
}

impl<I, const N: usize> DetectionLog<I, N> {
    /// Creates an empty log.
    pub const fn new() -> Self {
        Self {
            events: Deque::new(),
        }
    }

    /// Returns the most recent record.
    pub fn latest(&self) -> Option<&DetectionEvent<I>> {
        self.events.back()
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &DetectionEvent<I>> {
        self.events.iter()
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if no detection was recorded yet.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<I, const N: usize> Default for DetectionLog<I, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, const N: usize> DetectionSink<I> for DetectionLog<I, N> {
    fn on_detection(&mut self, event: DetectionEvent<I>) {
        if self.events.is_full() {
            self.events.pop_front();
        }
        // Cannot fail after making room.
        let _ = self.events.push_back(event);
    }
}
