//! Levelled assertions. The `simple` level is always active; the more
//! expensive levels are only compiled in when the `debug-checks` feature is
//! enabled, so they can be sprinkled through the hot elimination loop without
//! cost in release builds.

#[cfg(not(feature = "debug-checks"))]
pub const PARITY_ASSERT_LEVEL_DEFINITION: u8 = PARITY_ASSERT_SIMPLE;

#[cfg(feature = "debug-checks")]
pub const PARITY_ASSERT_LEVEL_DEFINITION: u8 = PARITY_ASSERT_EXTREME;

pub const PARITY_ASSERT_SIMPLE: u8 = 1;
pub const PARITY_ASSERT_MODERATE: u8 = 2;
pub const PARITY_ASSERT_EXTREME: u8 = 3;

#[macro_export]
#[doc(hidden)]
macro_rules! parity_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::PARITY_ASSERT_LEVEL_DEFINITION >= $crate::asserts::PARITY_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! parity_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::PARITY_ASSERT_LEVEL_DEFINITION >= $crate::asserts::PARITY_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! parity_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::asserts::PARITY_ASSERT_LEVEL_DEFINITION >= $crate::asserts::PARITY_ASSERT_EXTREME {
            assert!($($arg)*);
        }
    };
}
