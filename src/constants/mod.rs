//! Constants used throughout the crate

pub mod defaults;

pub use self::defaults::{DEFAULT_ALLOW_BLEEDING, DEFAULT_SUM_PLAIN_DIGITS};

/// Exit status reported by the binary when at least one text fails its check
pub const EXIT_FAILED_CHECK: i32 = 1;
