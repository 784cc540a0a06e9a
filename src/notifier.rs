//! Edge notifier: the interrupt-side half of the hand-off.
//!
//! [`EdgeNotifier::notify`] is the only thing an edge interrupt handler should
//! call. It does a single non-blocking `try_send` into a bounded channel and
//! returns; it never reads the pin, the clock, or the counter. When the
//! channel is full the token is dropped. Undercounting under a sustained edge
//! flood is accepted; blocking inside an interrupt is not.

use crate::types::{EdgeToken, PinId};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender, TrySendError};

/// Bounded FIFO carrying edge tokens from the notifier to the dispatcher.
///
/// Use `CriticalSectionRawMutex` when the notifier runs in an interrupt.
pub type EdgeChannel<M, const CAP: usize> = Channel<M, EdgeToken, CAP>;

/// Consumer end of an [`EdgeChannel`].
pub type EdgeReceiver<'c, M, const CAP: usize> = Receiver<'c, M, EdgeToken, CAP>;

/// Error returned by [`EdgeNotifier::try_notify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NotifyError {
    /// Channel was full; the token was not queued.
    QueueFull(EdgeToken),
}

impl core::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NotifyError::QueueFull(token) => {
                write!(f, "edge queue full, token for pin {} dropped", token.pin.0)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NotifyError {}

/// Posts one [`EdgeToken`] per pin transition.
///
/// Cheap to copy; each interrupt source keeps its own notifier.
pub struct EdgeNotifier<'c, M: RawMutex, const CAP: usize> {
    sender: Sender<'c, M, EdgeToken, CAP>,
    token: EdgeToken,
}

impl<'c, M: RawMutex, const CAP: usize> EdgeNotifier<'c, M, CAP> {
    /// Creates a notifier posting tokens for `pin` into `channel`.
    pub fn new(channel: &'c EdgeChannel<M, CAP>, pin: PinId) -> Self {
        Self {
            sender: channel.sender(),
            token: EdgeToken::new(pin),
        }
    }

    /// Queues a token, silently dropping it if the channel is full.
    ///
    /// Safe to call from interrupt context.
    #[inline]
    pub fn notify(&self) {
        let _ = self.try_notify();
    }

    /// Queues a token, reporting whether it was dropped.
    ///
    /// Never blocks. Prefer [`notify`](Self::notify) inside interrupt handlers.
    #[inline]
    pub fn try_notify(&self) -> Result<(), NotifyError> {
        self.sender.try_send(self.token).map_err(|err| match err {
            TrySendError::Full(token) => NotifyError::QueueFull(token),
        })
    }

    /// Returns the pin this notifier reports for.
    pub fn pin(&self) -> PinId {
        self.token.pin
    }
}

impl<M: RawMutex, const CAP: usize> Clone for EdgeNotifier<'_, M, CAP> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: RawMutex, const CAP: usize> Copy for EdgeNotifier<'_, M, CAP> {}
