//! Field identifiers and per-session id generation.

use std::fmt;

use rand::Rng;

/// Opaque identifier of a [`Field`](crate::Field) node.
///
/// Stable for the lifetime of the node and unique among all nodes created by
/// the same [`FieldForest`](crate::FieldForest) session. Used only to address
/// nodes inside the tree, never as a semantic property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(u64);

impl FieldId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Generates session-unique [`FieldId`]s.
///
/// An id is a random 32-bit session nonce in the high bits combined with a
/// monotonic counter in the low bits. The counter alone guarantees uniqueness
/// within a session; the nonce keeps ids from two sessions from looking
/// interchangeable. Wall-clock time is never involved.
#[derive(Debug)]
pub struct IdGen {
    nonce: u32,
    next: u32,
}

impl IdGen {
    pub fn new() -> Self {
        Self {
            nonce: rand::thread_rng().gen(),
            next: 0,
        }
    }

    /// Returns a fresh id, never previously returned by this generator.
    pub fn next_id(&mut self) -> FieldId {
        let id = (u64::from(self.nonce) << 32) | u64::from(self.next);
        self.next += 1;
        FieldId(id)
    }
}

impl Default for IdGen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_within_a_session() {
        let mut gen = IdGen::new();
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(gen.next_id()));
        }
    }

    #[test]
    fn ids_share_the_session_nonce() {
        let mut gen = IdGen::new();
        let a = gen.next_id().as_u64();
        let b = gen.next_id().as_u64();
        assert_eq!(a >> 32, b >> 32);
        assert_eq!(b & 0xffff_ffff, (a & 0xffff_ffff) + 1);
    }

    #[test]
    fn display_is_fixed_width_hex() {
        let mut gen = IdGen::new();
        let id = gen.next_id();
        let text = id.to_string();
        assert_eq!(text.len(), 16);
        assert!(text.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
