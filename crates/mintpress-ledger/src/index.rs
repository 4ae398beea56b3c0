//! # Dense Enumeration Index
//!
//! An ordered sequence of token identifiers plus a reverse position
//! map. Backs both the global "all tokens" enumeration and each owner's
//! holdings.
//!
//! ## Invariant
//!
//! The sequence is dense: every identifier appears exactly once, at the
//! position the map records for it. Removal swaps the target with the
//! last element and truncates, so removal is O(1) at the cost of not
//! preserving insertion order after a removal.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use mintpress_core::TokenId;

/// A dense, enumerable set of token identifiers with O(1) membership,
/// append, and removal.
///
/// Serialized as the bare ordered sequence; the position map is
/// rebuilt on deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<TokenId>", into = "Vec<TokenId>")]
pub struct TokenIndex {
    order: Vec<TokenId>,
    positions: HashMap<TokenId, usize>,
}

impl TokenIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of identifiers in the index.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether `id` is present.
    pub fn contains(&self, id: TokenId) -> bool {
        self.positions.contains_key(&id)
    }

    /// The identifier at position `i`, if in range.
    pub fn get(&self, i: usize) -> Option<TokenId> {
        self.order.get(i).copied()
    }

    /// Append `id` to the end of the sequence.
    ///
    /// Returns `false` (and leaves the index unchanged) if `id` is
    /// already present.
    pub fn push(&mut self, id: TokenId) -> bool {
        if self.positions.contains_key(&id) {
            return false;
        }
        self.positions.insert(id, self.order.len());
        self.order.push(id);
        true
    }

    /// Remove `id` by swapping it with the last element and truncating.
    ///
    /// Returns `false` if `id` was not present. The element that moved
    /// into the vacated position has its recorded position updated.
    pub fn remove(&mut self, id: TokenId) -> bool {
        let Some(pos) = self.positions.remove(&id) else {
            return false;
        };
        self.order.swap_remove(pos);
        if let Some(&moved) = self.order.get(pos) {
            self.positions.insert(moved, pos);
        }
        true
    }

    /// Iterate the sequence in its current order.
    pub fn iter(&self) -> impl Iterator<Item = TokenId> + '_ {
        self.order.iter().copied()
    }

    /// The sequence as a vector, in its current order.
    pub fn to_vec(&self) -> Vec<TokenId> {
        self.order.clone()
    }
}

impl From<Vec<TokenId>> for TokenIndex {
    fn from(order: Vec<TokenId>) -> Self {
        let positions = order
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, i))
            .collect();
        Self { order, positions }
    }
}

impl From<TokenIndex> for Vec<TokenId> {
    fn from(index: TokenIndex) -> Self {
        index.order
    }
}
