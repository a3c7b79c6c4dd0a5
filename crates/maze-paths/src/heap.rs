//! The A* open set: a fixed-capacity binary min-heap over `f = g + h` with a
//! coordinate → heap-slot index kept in lockstep with every move.

use maze_core::{Point, Range};

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// One search hypothesis: a cell reached with cost `g`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub pos: Point,
    /// Accumulated cost from the start, in unit steps.
    pub g: u32,
    /// Heuristic estimate of the remaining cost.
    pub h: u32,
    /// Index of the originating node in the closed set.
    pub parent: Option<usize>,
}

impl Node {
    /// Ordering key. Always derived from `g` and `h`.
    #[inline]
    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}

// ---------------------------------------------------------------------------
// OpenSet
// ---------------------------------------------------------------------------

/// Binary min-heap of [`Node`]s keyed on `f`.
///
/// Capacity is the number of cells in the range: every cell enters the open
/// set at most once per search. Among equal `f`, sift-up stops at the first
/// parent that is not strictly greater and sift-down prefers the left child,
/// so the pop order is deterministic.
#[derive(Debug)]
pub struct OpenSet {
    heap: Vec<Node>,
    /// Heap slot of each cell, indexed by `rng.index(pos)`.
    slots: Vec<Option<usize>>,
    rng: Range,
}

impl OpenSet {
    /// Create an empty open set able to hold every cell of `rng`.
    pub fn new(rng: Range) -> Self {
        let cap = rng.len();
        Self {
            heap: Vec::with_capacity(cap),
            slots: vec![None; cap],
            rng,
        }
    }

    /// Number of nodes in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Maximum number of nodes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Whether `pos` is currently in the open set.
    #[inline]
    pub fn contains(&self, pos: Point) -> bool {
        self.slot(pos).is_some()
    }

    /// Add a node whose cell is not already open.
    ///
    /// # Panics
    ///
    /// If `node.pos` is outside the range, already open, or the heap is full.
    pub fn insert(&mut self, node: Node) {
        assert!(
            self.heap.len() < self.capacity(),
            "open set capacity {} exceeded",
            self.capacity()
        );
        assert!(!self.contains(node.pos), "{} is already open", node.pos);
        let idx = self.heap.len();
        self.heap.push(node);
        self.set_slot(node.pos, Some(idx));
        self.sift_up(idx);
    }

    /// Remove and return the minimum-`f` node, or `None` if empty.
    pub fn pop(&mut self) -> Option<Node> {
        let last = self.heap.pop()?;
        let min = if self.heap.is_empty() {
            last
        } else {
            let root = std::mem::replace(&mut self.heap[0], last);
            self.set_slot(last.pos, Some(0));
            self.sift_down(0);
            root
        };
        self.set_slot(min.pos, None);
        Some(min)
    }

    /// Lower the cost of the open node at `pos` to `g`, re-parent it, and
    /// restore heap order.
    ///
    /// Returns `false` (and changes nothing) when `pos` is not open or `g` is
    /// not strictly smaller than the node's current cost.
    pub fn decrease_key(&mut self, pos: Point, g: u32, parent: Option<usize>) -> bool {
        let Some(idx) = self.slot(pos) else {
            return false;
        };
        let node = &mut self.heap[idx];
        if g >= node.g {
            return false;
        }
        node.g = g;
        node.parent = parent;
        self.sift_up(idx);
        true
    }

    // -----------------------------------------------------------------------
    // Heap internals
    // -----------------------------------------------------------------------

    #[inline]
    fn slot(&self, pos: Point) -> Option<usize> {
        self.rng.index(pos).and_then(|i| self.slots[i])
    }

    #[inline]
    fn set_slot(&mut self, pos: Point, slot: Option<usize>) {
        if let Some(i) = self.rng.index(pos) {
            self.slots[i] = slot;
        }
    }

    /// Move the node at `idx` toward the root while its `f` is strictly
    /// smaller than its parent's.
    fn sift_up(&mut self, mut idx: usize) {
        let node = self.heap[idx];
        let f = node.f();
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.heap[parent].f() <= f {
                break;
            }
            let moved = self.heap[parent];
            self.heap[idx] = moved;
            self.set_slot(moved.pos, Some(idx));
            idx = parent;
        }
        self.heap[idx] = node;
        self.set_slot(node.pos, Some(idx));
    }

    /// Move the node at `idx` toward the leaves, always swapping with the
    /// smaller child. The right child wins only when strictly smaller.
    fn sift_down(&mut self, mut idx: usize) {
        let node = self.heap[idx];
        let f = node.f();
        let len = self.heap.len();
        loop {
            let l = 2 * idx + 1;
            if l >= len {
                break;
            }
            let r = l + 1;
            let mut smallest = idx;
            let mut smallest_f = f;
            if self.heap[l].f() < smallest_f {
                smallest = l;
                smallest_f = self.heap[l].f();
            }
            if r < len && self.heap[r].f() < smallest_f {
                smallest = r;
            }
            if smallest == idx {
                break;
            }
            let moved = self.heap[smallest];
            self.heap[idx] = moved;
            self.set_slot(moved.pos, Some(idx));
            idx = smallest;
        }
        self.heap[idx] = node;
        self.set_slot(node.pos, Some(idx));
    }

    /// Check the heap property and slot index. Test helper.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        for (i, n) in self.heap.iter().enumerate() {
            if i > 0 {
                assert!(self.heap[(i - 1) / 2].f() <= n.f(), "heap order broken at {i}");
            }
            assert_eq!(self.slot(n.pos), Some(i), "stale slot for {}", n.pos);
        }
        let indexed = self.slots.iter().filter(|s| s.is_some()).count();
        assert_eq!(indexed, self.heap.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(x: i32, y: i32, g: u32, h: u32) -> Node {
        Node {
            pos: Point::new(x, y),
            g,
            h,
            parent: None,
        }
    }

    #[test]
    fn pops_in_ascending_f() {
        let mut open = OpenSet::new(Range::with_size(4, 4));
        let fs = [7, 3, 9, 1, 4, 4, 8, 2, 6, 5];
        for (i, &f) in fs.iter().enumerate() {
            open.insert(node(i as i32 % 4, i as i32 / 4, f, 0));
            open.assert_consistent();
        }
        assert_eq!(open.len(), fs.len());

        let mut popped = Vec::new();
        while let Some(n) = open.pop() {
            assert!(!open.contains(n.pos));
            open.assert_consistent();
            popped.push(n.f());
        }
        let mut sorted = fs.to_vec();
        sorted.sort();
        assert_eq!(popped, sorted);
        assert!(open.pop().is_none());
    }

    #[test]
    fn pop_empty_is_none() {
        let mut open = OpenSet::new(Range::with_size(2, 2));
        assert!(open.is_empty());
        assert_eq!(open.pop(), None);
    }

    #[test]
    fn equal_f_pop_order_is_deterministic() {
        let run = || {
            let mut open = OpenSet::new(Range::with_size(5, 1));
            for x in 0..5 {
                open.insert(node(x, 0, 2, 1));
            }
            std::iter::from_fn(|| open.pop().map(|n| n.pos.x)).collect::<Vec<_>>()
        };
        let first = run();
        assert_eq!(first[0], 0);
        assert_eq!(first, run());
    }

    #[test]
    fn decrease_key_reorders_and_tracks_slots() {
        let mut open = OpenSet::new(Range::with_size(3, 3));
        open.insert(node(0, 0, 1, 1));
        open.insert(node(1, 0, 5, 1));
        open.insert(node(2, 0, 6, 1));
        open.insert(node(0, 1, 7, 1));
        open.insert(node(1, 1, 9, 1));

        assert!(open.decrease_key(Point::new(1, 1), 0, Some(4)));
        open.assert_consistent();
        let top = open.pop().unwrap();
        assert_eq!(top.pos, Point::new(1, 1));
        assert_eq!(top.g, 0);
        assert_eq!(top.parent, Some(4));
        open.assert_consistent();
    }

    #[test]
    fn decrease_key_rejects_non_improvements() {
        let mut open = OpenSet::new(Range::with_size(2, 1));
        open.insert(node(0, 0, 3, 0));
        assert!(!open.decrease_key(Point::new(0, 0), 3, Some(1)));
        assert!(!open.decrease_key(Point::new(0, 0), 4, Some(1)));
        assert!(!open.decrease_key(Point::new(1, 0), 0, None));
        let kept = open.pop().unwrap();
        assert_eq!((kept.g, kept.parent), (3, None));
    }

    #[test]
    #[should_panic(expected = "already open")]
    fn double_insert_panics() {
        let mut open = OpenSet::new(Range::with_size(2, 1));
        open.insert(node(0, 0, 1, 0));
        open.insert(node(0, 0, 2, 0));
    }

    #[test]
    fn fills_to_capacity() {
        let rng = Range::with_size(3, 2);
        let mut open = OpenSet::new(rng);
        for (i, p) in rng.iter().enumerate() {
            open.insert(node(p.x, p.y, (6 - i) as u32, 0));
        }
        assert_eq!(open.len(), open.capacity());
        open.assert_consistent();
        assert_eq!(open.pop().map(|n| n.pos), Some(Point::new(2, 1)));
    }
}
