//! Leveled assertions. Cheap contract checks run at [`ARCANE_ASSERT_SIMPLE`], checks which walk
//! whole domains or constraint sets only run at higher levels (tests and the `debug-checks`
//! feature).

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const ARCANE_ASSERT_LEVEL_DEFINITION: u8 = ARCANE_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const ARCANE_ASSERT_LEVEL_DEFINITION: u8 = ARCANE_ASSERT_EXTREME;

pub const ARCANE_ASSERT_SIMPLE: u8 = 1;
pub const ARCANE_ASSERT_MODERATE: u8 = 2;
pub const ARCANE_ASSERT_ADVANCED: u8 = 3;
pub const ARCANE_ASSERT_EXTREME: u8 = 4;

#[macro_export]
#[doc(hidden)]
macro_rules! print_arcane_assert_warning_message {
    () => {
        if $crate::asserts::ARCANE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::ARCANE_ASSERT_MODERATE {
            log::warn!("Potential performance degradation: the arcane assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.", $crate::asserts::ARCANE_ASSERT_LEVEL_DEFINITION);
        };
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! arcane_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::ARCANE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::ARCANE_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! arcane_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::ARCANE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::ARCANE_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! arcane_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::ARCANE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::ARCANE_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! arcane_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::ARCANE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::ARCANE_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! arcane_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::asserts::ARCANE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::ARCANE_ASSERT_EXTREME {
            assert!($($arg)*);
        }
    };
}
