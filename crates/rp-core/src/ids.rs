//! Strongly typed identifier wrappers.
//!
//! Map data identifies nodes and ways by 64-bit integers that are unique
//! within one fetch.  Wrapping them keeps a way id from being looked up in the
//! node table by accident.  All IDs are `Copy + Ord + Hash` so they can be
//! used as map keys and sorted collection elements without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw map-data integer.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }

        impl From<$name> for $inner {
            #[inline(always)]
            fn from(id: $name) -> $inner {
                id.0
            }
        }
    };
}

typed_id! {
    /// Identifier of a street-graph node, as issued by the map data source.
    pub struct NodeId(i64);
}

typed_id! {
    /// Identifier of a way (street polyline).
    pub struct WayId(i64);
}
