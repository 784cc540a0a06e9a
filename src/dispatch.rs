//! Dispatch loop: the single consumer of edge tokens.

use crate::counter::{DebounceCounter, SensorPin};
use crate::notifier::{EdgeChannel, EdgeReceiver};
use crate::report::DetectionSink;
use crate::time::{TimeInstant, TimeSource};
use crate::types::{EdgeToken, Evaluation};
use embassy_sync::blocking_mutex::raw::RawMutex;

/// Owns the counter and feeds it one edge token at a time.
///
/// Because the dispatcher is the only owner of the [`DebounceCounter`], the
/// count and debounce state have exactly one writer and need no locking.
/// Tokens are never processed concurrently.
///
/// # Type Parameters
/// * `'c` - Lifetime of the edge channel
/// * `'t` - Lifetime of the time source reference
/// * `M` - Raw mutex guarding the channel
/// * `I` - Time instant type
/// * `P` - Sensor pin implementation type
/// * `T` - Time source implementation type
/// * `S` - Detection sink type
/// * `CAP` - Edge channel capacity
pub struct Dispatcher<'c, 't, M, I, P, T, S, const CAP: usize>
where
    M: RawMutex,
    I: TimeInstant,
    P: SensorPin,
    T: TimeSource<I>,
    S: DetectionSink<I>,
{
    receiver: EdgeReceiver<'c, M, CAP>,
    counter: DebounceCounter<'t, I, P, T>,
    sink: S,
}

impl<'c, 't, M, I, P, T, S, const CAP: usize> Dispatcher<'c, 't, M, I, P, T, S, CAP>
where
    M: RawMutex,
    I: TimeInstant,
    P: SensorPin,
    T: TimeSource<I>,
    S: DetectionSink<I>,
{
    /// Creates a dispatcher consuming from `channel`.
    pub fn new(
        channel: &'c EdgeChannel<M, CAP>,
        counter: DebounceCounter<'t, I, P, T>,
        sink: S,
    ) -> Self {
        Self {
            receiver: channel.receiver(),
            counter,
            sink,
        }
    }

    /// Processes tokens forever. Never returns.
    pub async fn run(&mut self) {
        loop {
            self.dispatch_next().await;
        }
    }

    /// Waits for the next token and processes it.
    pub async fn dispatch_next(&mut self) -> Evaluation<I> {
        let token = self.receiver.receive().await;
        self.handle(token)
    }

    /// Processes one queued token, if any, without waiting.
    pub fn try_dispatch(&mut self) -> Option<Evaluation<I>> {
        let token = self.receiver.try_receive().ok()?;
        Some(self.handle(token))
    }

    /// Processes every queued token. Returns how many were handled.
    ///
    /// For polling hosts without an async executor.
    pub fn drain(&mut self) -> usize {
        let mut handled = 0;
        while self.try_dispatch().is_some() {
            handled += 1;
        }
        handled
    }

    #[cfg_attr(not(feature = "defmt"), allow(unused_variables))]
    fn handle(&mut self, token: EdgeToken) -> Evaluation<I> {
        #[cfg(feature = "defmt")]
        defmt::trace!("Edge on pin {}", token.pin.0);

        let evaluation = self.counter.process();
        if let Evaluation::Detected(event) = evaluation {
            self.sink.on_detection(event);
        }
        evaluation
    }

    /// Returns the number of accepted detections.
    pub fn count(&self) -> u32 {
        self.counter.count()
    }

    /// Read-only access to the counter state.
    pub fn counter(&self) -> &DebounceCounter<'t, I, P, T> {
        &self.counter
    }

    /// Read-only access to the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}
