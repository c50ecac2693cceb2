//! Compact typed indices for graph objects.
//!
//! Networks name nodes and pipes with strings; once a graph is built the
//! solver works on dense slots instead. `NodeId` and `LinkId` are separate
//! types so a pipe slot can never be used to index node data.

use core::fmt;
use core::num::NonZeroU32;

macro_rules! compact_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(NonZeroU32);

        impl $name {
            /// Id for the 0-based declaration slot `index` (stored as index+1).
            pub fn from_index(index: u32) -> Self {
                Self(NonZeroU32::MIN.saturating_add(index))
            }

            pub fn index(self) -> u32 {
                self.0.get() - 1
            }

            /// The 0-based slot as a `usize`, for slice access.
            pub fn slot(self) -> usize {
                self.index() as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.index())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.index())
            }
        }
    };
}

compact_id! {
    /// Slot of a node (source, junction or hydrant) in declaration order.
    NodeId
}

compact_id! {
    /// Slot of a pipe link in edge declaration order.
    LinkId
}
