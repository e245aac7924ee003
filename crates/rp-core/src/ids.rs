//! Strongly typed index wrappers.
//!
//! Both indices are `Copy + Ord + Hash`.  The inner integer is `pub` so a
//! `BookIndex` can index straight into a `&[Book]`, but callers should prefer
//! `.index()` for clarity.

use std::fmt;

/// Generate a typed index wrapper around a primitive integer.
macro_rules! typed_index {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a slice index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// The index immediately after `self`.
            #[inline(always)]
            pub fn next(self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_index! {
    /// Position of a book in the ordered container sequence being scheduled.
    pub struct BookIndex(u32);
}

typed_index! {
    /// Zero-based day number within a plan.
    pub struct DayIndex(u32);
}
