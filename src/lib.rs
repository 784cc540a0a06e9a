#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`EdgeNotifier`**: Posts an `EdgeToken` into a bounded `EdgeChannel` from interrupt context
//! - **`DebounceCounter`**: Samples the pin and clock per token and counts absent to present edges
//! - **`Dispatcher`**: The single consumer that drains the channel into the counter
//! - **`DetectionSink`**: Receives a `DetectionEvent` for every accepted detection
//! - **`SensorPin`**: Trait to implement for your GPIO input
//! - **`TimeSource`**: Trait to implement for your monotonic timer
//! - **`CounterConfig`**: Debounce window and polarity, usually a `const`
//!
//! The interrupt side only ever enqueues. All state lives in the dispatcher's
//! context, so nothing is shared across execution contexts except the channel.

pub mod counter;
pub mod dispatch;
pub mod notifier;
pub mod report;
pub mod time;
pub mod types;

pub use counter::{DebounceCounter, SensorPin};
pub use dispatch::Dispatcher;
pub use notifier::{EdgeChannel, EdgeNotifier, EdgeReceiver, NotifyError};
pub use report::{DetectionLog, DetectionSink};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{
    CounterConfig, DetectionEvent, EdgeToken, Evaluation, Level, PinId, Polarity, SensorState,
};

/// Minimum spacing between accepted detections, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 50;

/// Edge tokens the channel can buffer between dispatcher wake-ups.
pub const DEFAULT_QUEUE_CAPACITY: usize = 10;

/// TCRT5000 modules pull the output low while an object is in range.
pub const DEFAULT_POLARITY: Polarity = Polarity::ActiveLow;
