//! Time abstraction traits for platform-agnostic timing.
//!
//! The counter only ever measures intervals, so the clock behind these traits
//! must be monotonic. Wall-clock time that can be adjusted will break debounce.

/// Trait for abstracting a monotonic time source.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to whole milliseconds.
    fn as_millis(&self) -> u64;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations should saturate to zero if `earlier` is actually later.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Milliseconds since the clock's epoch (usually boot).
    fn as_millis(&self) -> u64;
}
