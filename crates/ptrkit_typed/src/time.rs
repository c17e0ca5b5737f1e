use core::time::Duration;

#[cfg(feature = "std")]
use std::time::SystemTime;

// -----------------------------------------------------------------------------
// Duration

impl_typed!(Duration => duration, to_duration, must_duration, duration_vec, to_duration_vec, duration_map, to_duration_map);

// -----------------------------------------------------------------------------
// SystemTime

/// The zero value used for `SystemTime`, which has no `Default`.
#[cfg(feature = "std")]
pub const ZERO_TIME: SystemTime = SystemTime::UNIX_EPOCH;

#[cfg(feature = "std")]
impl_typed!(SystemTime, ZERO_TIME => time, to_time, must_time, time_vec, to_time_vec, time_map, to_time_map);

// -----------------------------------------------------------------------------
// Tests
