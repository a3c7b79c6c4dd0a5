//! The A* closed set: an append-only arena of finalized nodes.

use maze_core::{Point, Range};

use crate::heap::Node;

/// Finalized nodes in the order they were closed, plus a per-cell flag.
///
/// A node's `parent` is an index into this arena. Entries are never moved or
/// mutated after being pushed, so parent chains stay valid for the whole
/// search.
#[derive(Debug)]
pub struct ClosedSet {
    nodes: Vec<Node>,
    closed: Vec<bool>,
    rng: Range,
}

impl ClosedSet {
    /// Create an empty closed set for the cells of `rng`.
    pub fn new(rng: Range) -> Self {
        Self {
            nodes: Vec::new(),
            closed: vec![false; rng.len()],
            rng,
        }
    }

    /// Number of closed nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `pos` has been closed.
    #[inline]
    pub fn contains(&self, pos: Point) -> bool {
        self.rng.index(pos).is_some_and(|i| self.closed[i])
    }

    /// All closed nodes in closing order.
    #[cfg(test)]
    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Finalize `node` and return its arena index.
    pub fn push(&mut self, node: Node) -> usize {
        debug_assert!(!self.contains(node.pos), "{} closed twice", node.pos);
        if let Some(i) = self.rng.index(node.pos) {
            self.closed[i] = true;
        }
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Walk parent references from `tip` back to the root, returning the
    /// visited cells with `tip` first.
    pub fn trace(&self, tip: &Node) -> Vec<Point> {
        let mut cells = vec![tip.pos];
        let mut next = tip.parent;
        while let Some(idx) = next {
            let node = &self.nodes[idx];
            cells.push(node.pos);
            next = node.parent;
        }
        cells
    }
}
