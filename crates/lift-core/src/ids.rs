//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` so that
//! tests can build literals (`Floor(3)`), but callers indexing per-floor
//! `Vec`s should prefer the `.index()` helper.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) as $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", $label, self.0)
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

typed_id! {
    /// A floor of the building, in `[0, floors)`.  Floor 0 is the lobby.
    pub struct Floor(u32) as "floor";
}

typed_id! {
    /// Sequential identifier assigned to each passenger at generation time.
    pub struct PersonId(u64) as "person";
}

impl Floor {
    pub const LOBBY: Floor = Floor(0);

    /// The floor `delta` levels away, or `None` below the lobby.
    ///
    /// Upper bounds depend on the building and are checked by the caller.
    #[inline]
    pub fn offset(self, delta: i32) -> Option<Floor> {
        self.0.checked_add_signed(delta).map(Floor)
    }

    /// Number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }
}

impl PersonId {
    /// The identifier following `self` in allocation order.
    #[inline]
    pub fn next(self) -> PersonId {
        PersonId(self.0 + 1)
    }
}
