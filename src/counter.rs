//! Debounce counter: turns edge notifications into object counts.
//!
//! Provides [`DebounceCounter`], the single consumer-side owner of the count,
//! the last accepted detection time and the last observed sensor state. Also
//! defines the [`SensorPin`] trait for hardware abstraction.
//!
//! Only the absent to present edge is ever counted. The debounce baseline is
//! the last *accepted* detection, so a flurry of bounces keeps being measured
//! against the same instant until the window has passed.

use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{CounterConfig, DetectionEvent, Evaluation, Level, SensorState};

/// Trait for abstracting the sensor input pin.
///
/// Implement this for your GPIO input. Handle any hardware errors internally;
/// this method cannot fail.
pub trait SensorPin {
    /// Reads the current raw level of the pin.
    fn level(&mut self) -> Level;
}

/// Counts absent to present transitions of a reflective sensor.
///
/// Must be driven by exactly one consumer, one notification at a time. The
/// [`Dispatcher`](crate::Dispatcher) enforces that by owning the counter.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `P` - Sensor pin implementation type
/// * `T` - Time source implementation type
pub struct DebounceCounter<'t, I: TimeInstant, P: SensorPin, T: TimeSource<I>> {
    pin: P,
    time_source: &'t T,
    config: CounterConfig,
    count: u32,
    last_detection: Option<I>,
    last_state: SensorState,
}

impl<'t, I: TimeInstant, P: SensorPin, T: TimeSource<I>> DebounceCounter<'t, I, P, T> {
    /// Creates a counter at zero, sampling the pin once for the initial state.
    pub fn new(mut pin: P, time_source: &'t T, config: CounterConfig) -> Self {
        let initial_state = config.polarity.state_for(pin.level());

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Initial sensor state: {}",
            if initial_state.is_present() {
                "Object detected"
            } else {
                "No object"
            }
        );

        Self {
            pin,
            time_source,
            config,
            count: 0,
            last_detection: None,
            last_state: initial_state,
        }
    }

    /// Samples the pin and the clock, then evaluates the reading.
    ///
    /// Call once per received edge token.
    pub fn process(&mut self) -> Evaluation<I> {
        let level = self.pin.level();
        let now = self.time_source.now();
        self.evaluate(level, now)
    }

    /// Evaluates a level observed at `now`.
    ///
    /// # Returns
    /// - `Evaluation::Coalesced` - Same state as last time, nothing updated
    /// - `Evaluation::Detected(event)` - Counted; count and baseline updated
    /// - `Evaluation::Bounced { .. }` - Inside the debounce window, not counted
    /// - `Evaluation::Cleared` - Object left the beam, edge detection re-armed
    pub fn evaluate(&mut self, level: Level, now: I) -> Evaluation<I> {
        let state = self.config.polarity.state_for(level);
        if state == self.last_state {
            return Evaluation::Coalesced;
        }
        self.last_state = state;

        if !state.is_present() {
            return Evaluation::Cleared;
        }

        if let Some(last) = self.last_detection {
            let elapsed_ms = now.duration_since(last).as_millis();
            if elapsed_ms <= self.config.debounce_ms {
                #[cfg(feature = "defmt")]
                defmt::debug!("Bounce ignored: {} ms since last detection", elapsed_ms);

                return Evaluation::Bounced { elapsed_ms };
            }
        }

        self.count = self.count.saturating_add(1);
        self.last_detection = Some(now);

        #[cfg(feature = "defmt")]
        defmt::info!("Count: {}, Time: {} ms", self.count, now.as_millis());

        Evaluation::Detected(DetectionEvent {
            count: self.count,
            timestamp: now,
        })
    }

    /// Returns the number of accepted detections.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Returns when the last detection was accepted, if any.
    pub fn last_detection(&self) -> Option<I> {
        self.last_detection
    }

    /// Returns the sensor state seen by the last evaluation.
    pub fn last_state(&self) -> SensorState {
        self.last_state
    }

    /// Returns the configuration this counter was built with.
    pub fn config(&self) -> CounterConfig {
        self.config
    }
}
