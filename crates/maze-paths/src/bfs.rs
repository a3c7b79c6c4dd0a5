use maze_core::Point;

use crate::PathRange;
use crate::error::SearchError;
use crate::traits::Pather;

impl PathRange {
    /// Unweighted step count of the shortest route from `from` to `to`, or
    /// `None` when `to` cannot be reached.
    ///
    /// The search grows one ring of equal distance at a time and stops at the
    /// ring that first touches `to`, so cells farther away than the goal are
    /// never visited.
    pub fn bfs_distance<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<Option<u32>, SearchError> {
        self.admit()?;
        let fi = self.idx(from).ok_or(SearchError::OutOfRange(from))?;
        self.idx(to).ok_or(SearchError::OutOfRange(to))?;
        if from == to {
            return Ok(Some(0));
        }

        let mut seen = vec![false; self.rng.len()];
        seen[fi] = true;
        let mut ring = vec![from];
        let mut next = Vec::new();
        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut depth = 0u32;

        let found = 'rings: loop {
            if ring.is_empty() {
                break None;
            }
            depth += 1;
            for &p in &ring {
                nbuf.clear();
                pather.neighbors(p, &mut nbuf);
                for &np in &nbuf {
                    if np == to {
                        break 'rings Some(depth);
                    }
                    let Some(ni) = self.idx(np) else {
                        continue;
                    };
                    if !seen[ni] {
                        seen[ni] = true;
                        next.push(np);
                    }
                }
            }
            std::mem::swap(&mut ring, &mut next);
            next.clear();
        };

        self.nbuf = nbuf;
        Ok(found)
    }
}
