//! Integration tests for DebounceCounter

mod common;
use common::*;

use core::cell::Cell;
use object_counter::{CounterConfig, DetectionEvent, Evaluation, Level, SensorState};

use Level::{High, Low};

#[test]
fn scenario_pass_release_pass_counts_twice() {
    let level = Cell::new(High);
    let timer = MockTimeSource::new();
    let mut counter = idle_counter(&level, &timer);

    let outcomes = [
        counter.evaluate(High, TestInstant(0)),
        counter.evaluate(Low, TestInstant(10)),
        counter.evaluate(High, TestInstant(20)),
        counter.evaluate(Low, TestInstant(80)),
        counter.evaluate(High, TestInstant(140)),
    ];

    assert_eq!(outcomes[0], Evaluation::Coalesced);
    assert_eq!(
        outcomes[1],
        Evaluation::Detected(DetectionEvent {
            count: 1,
            timestamp: TestInstant(10),
        })
    );
    assert_eq!(outcomes[2], Evaluation::Cleared);
    assert_eq!(
        outcomes[3],
        Evaluation::Detected(DetectionEvent {
            count: 2,
            timestamp: TestInstant(80),
        })
    );
    assert_eq!(outcomes[4], Evaluation::Cleared);
    assert_eq!(counter.count(), 2);
    assert_eq!(counter.last_detection(), Some(TestInstant(80)));
}

#[test]
fn scenario_two_arrivals_within_window_count_once() {
    let level = Cell::new(High);
    let timer = MockTimeSource::new();
    let mut counter = idle_counter(&level, &timer);

    replay(&mut counter, &[(Low, 0), (High, 15), (Low, 30)]);

    assert_eq!(counter.count(), 1);
    assert_eq!(counter.last_detection(), Some(TestInstant(0)));
}

#[test]
fn arrivals_beyond_window_both_count() {
    let level = Cell::new(High);
    let timer = MockTimeSource::new();
    let mut counter = idle_counter(&level, &timer);

    replay(&mut counter, &[(Low, 100), (High, 120), (Low, 151)]);

    assert_eq!(counter.count(), 2);
    assert_eq!(counter.last_detection(), Some(TestInstant(151)));
}

#[test]
fn release_is_never_counted() {
    let level = Cell::new(Low);
    let timer = MockTimeSource::new();
    let mut counter =
        object_counter::DebounceCounter::new(MockPin::new(&level), &timer, CounterConfig::DEFAULT);

    assert_eq!(counter.evaluate(High, TestInstant(1000)), Evaluation::Cleared);
    assert_eq!(counter.count(), 0);
    assert_eq!(counter.last_state(), SensorState::Absent);
}

#[test]
fn repeated_level_is_idempotent() {
    let level = Cell::new(High);
    let timer = MockTimeSource::new();
    let mut counter = idle_counter(&level, &timer);

    counter.evaluate(Low, TestInstant(100));
    let snapshot = (counter.count(), counter.last_detection(), counter.last_state());

    assert_eq!(counter.evaluate(Low, TestInstant(500)), Evaluation::Coalesced);
    assert_eq!(counter.evaluate(Low, TestInstant(900)), Evaluation::Coalesced);
    assert_eq!(
        (counter.count(), counter.last_detection(), counter.last_state()),
        snapshot
    );
}

#[test]
fn bounce_does_not_move_the_baseline() {
    let level = Cell::new(High);
    let timer = MockTimeSource::new();
    let mut counter = idle_counter(&level, &timer);

    counter.evaluate(Low, TestInstant(0));
    counter.evaluate(High, TestInstant(30));
    assert_eq!(
        counter.evaluate(Low, TestInstant(40)),
        Evaluation::Bounced { elapsed_ms: 40 }
    );
    counter.evaluate(High, TestInstant(50));

    // 60 ms after the accepted detection, 20 ms after the bounce.
    assert!(counter.evaluate(Low, TestInstant(60)).detection().is_some());
    assert_eq!(counter.count(), 2);
}

#[test]
fn bounce_still_updates_last_state() {
    let level = Cell::new(High);
    let timer = MockTimeSource::new();
    let mut counter = idle_counter(&level, &timer);

    counter.evaluate(Low, TestInstant(0));
    counter.evaluate(High, TestInstant(10));
    counter.evaluate(Low, TestInstant(20));

    assert_eq!(counter.last_state(), SensorState::Present);
    // Object still in the beam long after the window: no new edge, no count.
    assert_eq!(counter.evaluate(Low, TestInstant(500)), Evaluation::Coalesced);
    assert_eq!(counter.count(), 1);
}

#[test]
fn custom_debounce_window_is_honored() {
    let level = Cell::new(High);
    let timer = MockTimeSource::new();
    let config = CounterConfig::DEFAULT.with_debounce_ms(200);
    let mut counter = object_counter::DebounceCounter::new(MockPin::new(&level), &timer, config);

    replay(&mut counter, &[(Low, 0), (High, 50), (Low, 150), (High, 180), (Low, 201)]);

    assert_eq!(counter.count(), 2);
    assert_eq!(counter.config().debounce_ms, 200);
}

#[test]
fn count_matches_reference_model_for_pseudo_random_levels() {
    let level = Cell::new(High);
    let timer = MockTimeSource::new();
    let mut counter = idle_counter(&level, &timer);

    let mut seed: u32 = 0x1234_5678;
    let mut now = 0u64;
    let mut model_state = SensorState::Absent;
    let mut model_last: Option<u64> = None;
    let mut model_count = 0u32;

    for _ in 0..2000 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        now += u64::from((seed >> 16) % 40);
        let sample = if (seed >> 8) & 1 == 0 { Low } else { High };

        let before = counter.count();
        let outcome = counter.evaluate(sample, TestInstant(now));

        let state = if sample == Low {
            SensorState::Present
        } else {
            SensorState::Absent
        };
        if state != model_state {
            if state == SensorState::Present && model_last.is_none_or(|last| now - last > 50) {
                model_count += 1;
                model_last = Some(now);
            }
            model_state = state;
        }

        assert!(counter.count() - before <= 1);
        assert_eq!(outcome.detection().is_some(), counter.count() != before);
        assert_eq!(counter.count(), model_count);
    }
}
