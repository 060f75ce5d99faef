use core::fmt;
use core::num::NonZeroU32;

/// Compact slot index of a node inside a graph.
///
/// Node ids are strings at the API surface; internally every node gets a
/// dense slot in insertion order so traversals can use flat `Vec` state.
/// Stored as `index + 1` so `Option<NodeIdx>` stays four bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIdx(NonZeroU32);

impl NodeIdx {
    /// Create a slot index from a 0-based position.
    ///
    /// # Panics
    ///
    /// Panics if `index >= u32::MAX`, i.e. a graph with more than about
    /// 4.29 billion nodes.
    pub fn from_index(index: usize) -> Self {
        let raw = u32::try_from(index)
            .ok()
            .and_then(|i| i.checked_add(1))
            .and_then(NonZeroU32::new)
            .expect("node slot exceeds u32 range");
        Self(raw)
    }

    /// Recover the 0-based position.
    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Debug for NodeIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIdx({})", self.index())
    }
}

impl fmt::Display for NodeIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_index_round_trip() {
        for i in [0_usize, 1, 7, 4096] {
            assert_eq!(NodeIdx::from_index(i).index(), i);
        }
    }

    #[test]
    fn option_slot_is_niche_packed() {
        assert_eq!(
            core::mem::size_of::<NodeIdx>(),
            core::mem::size_of::<Option<NodeIdx>>()
        );
    }

    #[test]
    fn display_uses_hash_prefix() {
        assert_eq!(NodeIdx::from_index(3).to_string(), "#3");
    }
}
