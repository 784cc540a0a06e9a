//! Core types shared by the notifier, counter and dispatcher.

use crate::time::TimeInstant;

/// Raw electrical level read from the sensor pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Pin reads logic low.
    Low,
    /// Pin reads logic high.
    High,
}

impl From<bool> for Level {
    /// `true` maps to [`Level::High`].
    fn from(is_high: bool) -> Self {
        if is_high { Level::High } else { Level::Low }
    }
}

/// Whether an object is in front of the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorState {
    /// Nothing reflects the IR beam.
    Absent,
    /// An object reflects the IR beam back to the phototransistor.
    Present,
}

impl SensorState {
    /// Returns true for [`SensorState::Present`].
    #[inline]
    pub fn is_present(self) -> bool {
        self == SensorState::Present
    }
}

/// Fixed mapping from raw level to [`SensorState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Low level means an object is present. TCRT5000 comparator boards
    /// with a pull-up behave this way.
    ActiveLow,
    /// High level means an object is present.
    ActiveHigh,
}

impl Polarity {
    /// Maps a raw level to a sensor state.
    #[inline]
    pub const fn state_for(self, level: Level) -> SensorState {
        match (self, level) {
            (Polarity::ActiveLow, Level::Low) | (Polarity::ActiveHigh, Level::High) => {
                SensorState::Present
            }
            _ => SensorState::Absent,
        }
    }
}

/// Identifies the GPIO that raised an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(pub u8);

impl From<u8> for PinId {
    fn from(id: u8) -> Self {
        PinId(id)
    }
}

/// Token posted by the edge notifier for every pin transition.
///
/// Carries nothing but the source pin; the level is sampled later by the
/// consumer, so several queued tokens may all observe the same level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeToken {
    pub pin: PinId,
}

impl EdgeToken {
    /// Creates a token for the given pin.
    #[inline]
    pub const fn new(pin: PinId) -> Self {
        Self { pin }
    }
}

/// Record emitted for every accepted detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DetectionEvent<I> {
    /// Running count after this detection.
    pub count: u32,
    /// When the detection was accepted.
    pub timestamp: I,
}

impl<I: TimeInstant> DetectionEvent<I> {
    /// Timestamp in milliseconds since the clock's epoch.
    pub fn timestamp_millis(&self) -> u64 {
        self.timestamp.as_millis()
    }
}

/// Outcome of evaluating one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Evaluation<I> {
    /// Sensor state equals the previous evaluation. Nothing changed.
    Coalesced,
    /// Absent to present, outside the debounce window. Counted.
    Detected(DetectionEvent<I>),
    /// Absent to present, inside the debounce window. Ignored as bounce.
    Bounced {
        /// Milliseconds since the last accepted detection.
        elapsed_ms: u64,
    },
    /// Present to absent. Re-arms edge detection, never counted.
    Cleared,
}

impl<I> Evaluation<I> {
    /// Returns the detection record if this evaluation was counted.
    pub fn detection(&self) -> Option<&DetectionEvent<I>> {
        match self {
            Evaluation::Detected(event) => Some(event),
            _ => None,
        }
    }

    /// Returns true if the sensor state changed during this evaluation.
    pub fn changed_state(&self) -> bool {
        !matches!(self, Evaluation::Coalesced)
    }
}

/// Counter configuration. Intended to be declared as a `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CounterConfig {
    /// A new detection is accepted only if strictly more than this many
    /// milliseconds passed since the previous accepted one.
    pub debounce_ms: u64,

    /// Raw level to sensor state mapping.
    pub polarity: Polarity,
}

impl CounterConfig {
    /// 50 ms debounce, active-low sensor.
    pub const DEFAULT: Self = Self::new(crate::DEFAULT_DEBOUNCE_MS, crate::DEFAULT_POLARITY);

    /// Creates a configuration.
    pub const fn new(debounce_ms: u64, polarity: Polarity) -> Self {
        Self {
            debounce_ms,
            polarity,
        }
    }

    /// Returns a copy with a different debounce window.
    pub const fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Returns a copy with a different polarity.
    pub const fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
