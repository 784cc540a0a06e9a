//! Shared test infrastructure for object-counter integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use object_counter::{
    CounterConfig, DebounceCounter, Level, SensorPin, TimeDuration, TimeInstant, TimeSource,
};
use std::collections::VecDeque;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }
}

/// Mock instant type for testing (milliseconds since boot)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.saturating_sub(earlier.0))
    }

    fn as_millis(&self) -> u64 {
        self.0
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    pub fn set_millis(&self, millis: u64) {
        self.current_time.set(TestInstant(millis));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Pins
// ============================================================================

/// Pin whose level the test sets directly
pub struct MockPin<'a> {
    level: &'a Cell<Level>,
}

impl<'a> MockPin<'a> {
    pub fn new(level: &'a Cell<Level>) -> Self {
        Self { level }
    }
}

impl SensorPin for MockPin<'_> {
    fn level(&mut self) -> Level {
        self.level.get()
    }
}

/// Replays `(level, millis)` samples, one per read, and moves the clock along.
///
/// The first read is consumed by `DebounceCounter::new`. Once the script runs
/// out the last level is repeated.
pub struct ScriptedPin<'a> {
    samples: VecDeque<(Level, u64)>,
    last: Level,
    clock: &'a MockTimeSource,
}

impl<'a> ScriptedPin<'a> {
    pub fn new(clock: &'a MockTimeSource, samples: &[(Level, u64)]) -> Self {
        Self {
            samples: samples.iter().copied().collect(),
            last: Level::High,
            clock,
        }
    }
}

impl SensorPin for ScriptedPin<'_> {
    fn level(&mut self) -> Level {
        if let Some((level, millis)) = self.samples.pop_front() {
            self.last = level;
            self.clock.set_millis(millis);
        }
        self.last
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Counter with default config whose pin starts high (no object, active-low)
pub fn idle_counter<'a>(
    level: &'a Cell<Level>,
    timer: &'a MockTimeSource,
) -> DebounceCounter<'a, TestInstant, MockPin<'a>, MockTimeSource> {
    level.set(Level::High);
    DebounceCounter::new(MockPin::new(level), timer, CounterConfig::DEFAULT)
}

/// Feeds `(level, millis)` pairs straight into `evaluate`
pub fn replay<P: SensorPin>(
    counter: &mut DebounceCounter<'_, TestInstant, P, MockTimeSource>,
    samples: &[(Level, u64)],
) {
    for &(level, millis) in samples {
        counter.evaluate(level, TestInstant(millis));
    }
}
