//! Leveled assertions. Cheap checks run at [`SOLVER_ASSERT_SIMPLE`]; checks which scan whole
//! structures are only enabled at higher levels.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub(crate) const SOLVER_ASSERT_LEVEL_DEFINITION: u8 = SOLVER_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub(crate) const SOLVER_ASSERT_LEVEL_DEFINITION: u8 = SOLVER_ASSERT_MODERATE;

pub(crate) const SOLVER_ASSERT_SIMPLE: u8 = 1;
pub(crate) const SOLVER_ASSERT_MODERATE: u8 = 2;

#[macro_export]
#[doc(hidden)]
macro_rules! solver_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::SOLVER_ASSERT_LEVEL_DEFINITION >= $crate::asserts::SOLVER_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! solver_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::SOLVER_ASSERT_LEVEL_DEFINITION >= $crate::asserts::SOLVER_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}
