//! # Bounded Top-K Selector
//!
//! An indexed binary min-heap of fixed capacity K that maintains exactly the
//! current best-K tokens by frequency, driven by a live stream of frequency
//! updates. Unlike a lazy heap (push-and-skip-stale), every node is updated
//! in place and re-heapified, so the array never holds stale entries and the
//! root is always the true minimum of the top-K set.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                         TopKSelector                                 │
//!   │                                                                      │
//!   │   nodes: Vec<HeapNode>   (occupied prefix, len <= capacity K)        │
//!   │                                                                      │
//!   │   ┌───────────────────────────────────────────────────────────┐      │
//!   │   │  [0] ("OF", 3)      ← root = minimum frequency            │      │
//!   │   │  [1] ("THE", 7)     parent(i) = (i-1)/2                   │      │
//!   │   │  [2] ("CAT", 5)     children(i) = 2i+1, 2i+2              │      │
//!   │   │  [3] ("AND", 9)                                           │      │
//!   │   └───────────────────────────────────────────────────────────┘      │
//!   │                       ▲                                              │
//!   │                       │  slot indices (both directions, always live) │
//!   │                       ▼                                              │
//!   │   TokenTable records:                                                │
//!   │   ┌─────────┬───────────┬───────────┐                                │
//!   │   │  token  │ frequency │ heap_slot │                                │
//!   │   ├─────────┼───────────┼───────────┤                                │
//!   │   │  "THE"  │     7     │  Some(1)  │                                │
//!   │   │  "OF"   │     3     │  Some(0)  │                                │
//!   │   │  "CAT"  │     5     │  Some(2)  │                                │
//!   │   │  "AND"  │     9     │  Some(3)  │                                │
//!   │   │  "DOG"  │     2     │  None     │  ← seen, not in top-K          │
//!   │   └─────────┴───────────┴───────────┘                                │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Update Decision
//!
//! [`update`](TopKSelector::update) is called once per token occurrence,
//! after [`TokenTable::observe`] has incremented the count. The token's slot
//! state picks exactly one of three paths:
//!
//! ```text
//!   slot state          │ action                              │ cost
//!   ────────────────────┼─────────────────────────────────────┼──────────
//!   Occupied(slot)      │ overwrite frequency, sift-down      │ O(log K)
//!   Vacant, not full    │ append, sift-up                     │ O(log K)
//!   Vacant, full        │ freq > root? replace root,          │ O(log K)
//!                       │ sift-down : ignore                  │ O(1)
//! ```
//!
//! The occupied path sifts DOWN only: an increment can never make a node
//! smaller than an ancestor, so the upward invariant still holds. The full
//! path requires strictly greater frequency; a tie never evicts the
//! incumbent root (first-seen token wins).
//!
//! ## Pointer Discipline
//!
//! Every node move goes through `swap_nodes`, which rewrites both tokens'
//! `heap_slot` pointers in the same step as the array swap. Nothing else
//! touches the slots, so there is no window where a record points at a slot
//! holding a different token.
//!
//! ## Example Usage
//!
//! ```
//! use freqtop::ds::{TokenTable, TopKSelector};
//!
//! let mut table = TokenTable::new();
//! let mut selector = TopKSelector::new(2);
//!
//! for token in ["A", "B", "C", "C"] {
//!     let frequency = table.observe(token);
//!     selector.update(&mut table, token, frequency);
//! }
//!
//! // C's first occurrence tied the root and was ignored; its second (freq 2)
//! // strictly beat the root A and evicted it.
//! assert_eq!(selector.len(), 2);
//! assert!(table.slot("C").is_some());
//! assert!(table.slot("B").is_some());
//! assert_eq!(table.slot("A"), None);
//! selector.check_invariants(&table).unwrap();
//! ```

use crate::ds::token_table::TokenTable;
use crate::error::InvariantError;

/// One occupied position in the selector's backing array.
///
/// Owned exclusively by the selector; the [`TokenTable`] only ever stores the
/// integer slot index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapNode {
    token: String,
    frequency: u64,
}

impl HeapNode {
    /// The token held at this slot.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The frequency the node was last updated to.
    pub fn frequency(&self) -> u64 {
        self.frequency
    }
}

/// The three mutually exclusive update paths, decided by the token's current
/// slot and the selector's fill state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotState {
    /// Token already holds a heap slot.
    Occupied(usize),
    /// Token absent, room left below capacity.
    Vacant,
    /// Token absent, selector at capacity.
    Full,
}

/// Bounded min-heap over token frequencies with table-backed slot indices.
///
/// The backing array is sized once at construction and never resized. Slots
/// `len..K` are unused; the occupied prefix is always a valid min-heap on
/// frequency.
#[derive(Debug)]
pub struct TopKSelector {
    nodes: Vec<HeapNode>,
    capacity: usize,
}

impl TopKSelector {
    /// Creates a selector that retains at most `capacity` tokens.
    ///
    /// `capacity = 0` is degenerate but valid: the selector never admits
    /// anything.
    pub fn new(capacity: usize) -> Self {
        TopKSelector {
            nodes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no token has been admitted.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if the selector is at capacity.
    pub fn is_full(&self) -> bool {
        self.nodes.len() == self.capacity
    }

    /// Maximum number of retained tokens (K).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The current minimum of the top-K set, i.e. the root node.
    pub fn peek_min(&self) -> Option<&HeapNode> {
        self.nodes.first()
    }

    /// Iterates the occupied prefix in heap-array order (NOT rank order).
    pub fn iter(&self) -> impl Iterator<Item = &HeapNode> {
        self.nodes.iter()
    }

    /// Feeds one token occurrence whose count has already been incremented to
    /// `frequency` by [`TokenTable::observe`].
    ///
    /// Decides admit/update/evict/ignore and re-heapifies, keeping every
    /// moved token's `heap_slot` in sync.
    pub fn update(&mut self, table: &mut TokenTable, token: &str, frequency: u64) {
        match self.slot_state(table, token) {
            SlotState::Occupied(slot) => {
                self.nodes[slot].frequency = frequency;
                self.sift_down(table, slot);
            }
            SlotState::Vacant => {
                let slot = self.nodes.len();
                self.nodes.push(HeapNode {
                    token: token.to_owned(),
                    frequency,
                });
                table.set_slot(token, Some(slot));
                self.sift_up(table, slot);
            }
            SlotState::Full => {
                // Capacity 0 has no root to compare against; never admits.
                let Some(root) = self.nodes.first() else {
                    return;
                };
                // Strictly greater only: a tie never evicts the incumbent.
                if frequency <= root.frequency {
                    return;
                }
                let evicted = std::mem::replace(
                    &mut self.nodes[0],
                    HeapNode {
                        token: token.to_owned(),
                        frequency,
                    },
                );
                table.set_slot(&evicted.token, None);
                table.set_slot(token, Some(0));
                self.sift_down(table, 0);
            }
        }
    }

    /// Removes and returns the node at `slot`, promoting the last node into
    /// its place and re-heapifying in whichever direction it violates.
    ///
    /// General heap primitive; the top-K driver itself only needs
    /// [`update`](Self::update), whose full-capacity path replaces the root
    /// in place instead.
    pub fn remove(&mut self, table: &mut TokenTable, slot: usize) -> Option<HeapNode> {
        if slot >= self.nodes.len() {
            return None;
        }
        let last = self.nodes.len() - 1;
        if slot != last {
            self.swap_nodes(table, slot, last);
        }
        let node = self.nodes.pop()?;
        table.set_slot(&node.token, None);
        if slot < self.nodes.len() {
            self.sift_down(table, slot);
            self.sift_up(table, slot);
        }
        Some(node)
    }

    fn slot_state(&self, table: &TokenTable, token: &str) -> SlotState {
        match table.slot(token) {
            Some(slot) => SlotState::Occupied(slot),
            None if self.nodes.len() < self.capacity => SlotState::Vacant,
            None => SlotState::Full,
        }
    }

    /// Swaps two occupied slots, rewriting both slot pointers in the same
    /// step so the bidirectional invariant never lapses.
    fn swap_nodes(&mut self, table: &mut TokenTable, a: usize, b: usize) {
        table.set_slot(&self.nodes[a].token, Some(b));
        table.set_slot(&self.nodes[b].token, Some(a));
        self.nodes.swap(a, b);
    }

    /// Restores the min-heap property downward from `slot`, swapping with the
    /// smaller child while the node exceeds it.
    fn sift_down(&mut self, table: &mut TokenTable, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            if left >= self.nodes.len() {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < self.nodes.len() && self.nodes[right].frequency < self.nodes[left].frequency
            {
                child = right;
            }
            if self.nodes[slot].frequency <= self.nodes[child].frequency {
                break;
            }
            self.swap_nodes(table, slot, child);
            slot = child;
        }
    }

    /// Restores the min-heap property upward from `slot`, swapping with the
    /// parent while the node is smaller.
    fn sift_up(&mut self, table: &mut TokenTable, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.nodes[parent].frequency <= self.nodes[slot].frequency {
                break;
            }
            self.swap_nodes(table, slot, parent);
            slot = parent;
        }
    }

    /// Validates the structural and cross-structure invariants.
    ///
    /// - `len <= capacity`, occupied prefix is a valid min-heap on frequency
    /// - every node's token maps back (via `table`) to its own slot
    /// - every record with a slot points at a node holding that exact token
    ///
    /// A failure indicates internal-consistency drift and should be treated
    /// as fatal by callers.
    pub fn check_invariants(&self, table: &TokenTable) -> Result<(), InvariantError> {
        if self.nodes.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "size {} exceeds capacity {}",
                self.nodes.len(),
                self.capacity
            )));
        }
        for slot in 1..self.nodes.len() {
            let parent = (slot - 1) / 2;
            if self.nodes[parent].frequency > self.nodes[slot].frequency {
                return Err(InvariantError::new(format!(
                    "heap order broken: parent {} ({}) > child {} ({})",
                    parent, self.nodes[parent].frequency, slot, self.nodes[slot].frequency
                )));
            }
        }
        for (slot, node) in self.nodes.iter().enumerate() {
            if table.slot(&node.token) != Some(slot) {
                return Err(InvariantError::new(format!(
                    "node {:?} at slot {} has table slot {:?}",
                    node.token,
                    slot,
                    table.slot(&node.token)
                )));
            }
        }
        for (token, record) in table.iter() {
            if let Some(slot) = record.heap_slot() {
                let held = self.nodes.get(slot).map(|node| node.token.as_str());
                if held != Some(token) {
                    return Err(InvariantError::new(format!(
                        "record {token:?} points at slot {slot} holding {held:?}"
                    )));
                }
            }
        }
        Ok(())
    }
}

// ==============================================
// TOP-K SELECTOR TESTS
// ==============================================
