use log::{debug, trace};
use maze_core::{Maze, Point};

use crate::PathRange;
use crate::closed::ClosedSet;
use crate::error::SearchError;
use crate::heap::{Node, OpenSet};
use crate::outcome::{Path, SearchOutcome, SearchStats};
use crate::traits::AstarPather;

impl PathRange {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// On success the path holds both endpoints, goal first. Running out of
    /// open nodes is reported as [`SearchOutcome::NoPath`], not as an error.
    ///
    /// The range is checked against the admission limit before any search
    /// storage is allocated; the open and closed sets are then sized to the
    /// range and dropped on return.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<SearchOutcome, SearchError> {
        self.astar_search(pather, from, to).map(|(outcome, _)| outcome)
    }

    /// The search itself. Also hands back the closed set so the arena the
    /// path was traced through can be inspected.
    pub(crate) fn astar_search<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<(SearchOutcome, ClosedSet), SearchError> {
        self.admit()?;
        self.idx(from).ok_or(SearchError::OutOfRange(from))?;
        self.idx(to).ok_or(SearchError::OutOfRange(to))?;

        let mut open = OpenSet::new(self.rng);
        let mut closed = ClosedSet::new(self.rng);
        let mut stats = SearchStats::default();

        open.insert(Node {
            pos: from,
            g: 0,
            h: pather.estimate(from, to),
            parent: None,
        });
        stats.inserted = 1;
        stats.peak_open = 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let goal = loop {
            let Some(current) = open.pop() else {
                break None;
            };

            if current.pos == to {
                break Some(current);
            }

            let ci = closed.push(current);
            stats.expanded += 1;
            trace!("expand {} g={} h={}", current.pos, current.g, current.h);

            nbuf.clear();
            pather.neighbors(current.pos, &mut nbuf);

            for &np in nbuf.iter() {
                if self.idx(np).is_none() || closed.contains(np) {
                    continue;
                }
                let g = current.g + pather.cost(current.pos, np);

                if open.contains(np) {
                    if open.decrease_key(np, g, Some(ci)) {
                        stats.relaxed += 1;
                    }
                } else {
                    open.insert(Node {
                        pos: np,
                        g,
                        h: pather.estimate(np, to),
                        parent: Some(ci),
                    });
                    stats.inserted += 1;
                    stats.peak_open = stats.peak_open.max(open.len());
                }
            }
        };

        self.nbuf = nbuf;

        let outcome = match goal {
            Some(node) => SearchOutcome::Found {
                path: Path::from_goal_first(closed.trace(&node)),
                stats,
            },
            None => SearchOutcome::NoPath { stats },
        };
        debug!(
            "A* {} -> {}: {} (expanded {}, inserted {}, relaxed {}, peak open {})",
            from,
            to,
            match outcome.path() {
                Some(p) => format!("{} steps", p.steps()),
                None => "no path".to_string(),
            },
            stats.expanded,
            stats.inserted,
            stats.relaxed,
            stats.peak_open,
        );
        Ok((outcome, closed))
    }

    /// Solve a loaded maze from its Start to its End.
    pub fn solve(&mut self, maze: &Maze) -> Result<SearchOutcome, SearchError> {
        self.astar_path(&maze.grid, maze.start, maze.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Pather, WeightedPather};
    use maze_core::{CellKind, Grid, Range};
    use maze_gen::MazeGen;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn solve(text: &str) -> (Maze, SearchOutcome) {
        let m = Maze::parse(text).unwrap();
        let mut pr = PathRange::new(m.grid.bounds());
        let out = pr.solve(&m).unwrap();
        (m, out)
    }

    /// Chain from start to goal: 4-connected, no walls, no repeats.
    fn assert_valid_route(m: &Maze, path: &Path) {
        let cells = path.goal_first();
        assert_eq!(path.goal(), m.end);
        assert_eq!(path.start(), m.start);
        for w in cells.windows(2) {
            assert!(w[0].is_adjacent(w[1]), "{} -> {} is not a step", w[1], w[0]);
        }
        for &p in cells {
            assert!(m.grid.is_passable(p), "{p} is a wall");
        }
        let distinct: HashSet<_> = cells.iter().collect();
        assert_eq!(distinct.len(), cells.len());
    }

    fn bfs_distance(m: &Maze) -> Option<u32> {
        let mut pr = PathRange::new(m.grid.bounds());
        pr.bfs_distance(&m.grid, m.start, m.end).unwrap()
    }

    #[test]
    fn scenario_takes_five_steps() {
        let (m, out) = solve("S..#\n.#..\n..#E\n");
        let path = out.path().expect("path");
        assert_eq!(path.steps(), 5);
        assert_eq!(path.len(), 6);
        assert_valid_route(&m, path);
        assert_eq!(
            path.start_first(),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(3, 1),
                Point::new(3, 2),
            ]
        );
    }

    #[test]
    fn disconnected_reports_no_path() {
        let (_, out) = solve("S#.\n##.\n..E\n");
        assert!(!out.is_found());
        assert!(out.path().is_none());
        assert_eq!(out.stats().expanded, 1);
    }

    #[test]
    fn single_cell_start_is_goal() {
        let m = Maze::new(Grid::filled(1, 1, CellKind::Open), Point::ZERO, Point::ZERO);
        let mut pr = PathRange::new(m.grid.bounds());
        let out = pr.solve(&m).unwrap();
        let path = out.path().unwrap();
        assert_eq!(path.goal_first(), &[Point::ZERO]);
        assert_eq!(path.steps(), 0);
        assert_eq!(out.stats().expanded, 0);
    }

    #[test]
    fn adjacent_endpoints() {
        let (m, out) = solve("SE\n");
        let path = out.path().unwrap();
        assert_eq!(path.goal_first(), &[m.end, m.start]);
    }

    #[test]
    fn prefers_shortest_of_two_corridors() {
        let text = "\
#########
#S......#
#.#####.#
#.#####.#
#.......#
#######E#
";
        let (m, out) = solve(text);
        let path = out.path().unwrap();
        assert_eq!(Some(path.steps() as u32), bfs_distance(&m));
        assert_eq!(path.steps(), 10);
        assert_valid_route(&m, path);
    }

    #[test]
    fn same_input_same_path() {
        let text = "S....\n.....\n.....\n....E\n";
        let (_, a) = solve(text);
        let (_, b) = solve(text);
        assert_eq!(a, b);
        assert_eq!(a.path().unwrap().steps(), 7);
    }

    #[test]
    fn each_cell_closed_at_most_once() {
        let text = "S......\n.#.#.#.\n.......\n.#.#.#.\n......E\n";
        let m = Maze::parse(text).unwrap();
        let mut pr = PathRange::new(m.grid.bounds());
        let out = pr.solve(&m).unwrap();
        let open_cells = m.grid.iter().filter(|(_, k)| k.is_passable()).count();
        let stats = out.stats();
        assert!(stats.expanded < open_cells);
        assert!(stats.inserted <= open_cells);
        assert!(stats.peak_open <= stats.inserted);
    }

    #[test]
    fn closed_set_never_repeats_a_cell() {
        // The top corridor is a dead end that still gets expanded.
        let m = Maze::parse("S...\n.##.\n...#\n##.E\n").unwrap();
        let mut pr = PathRange::new(m.grid.bounds());
        let (out, closed) = pr.astar_search(&m.grid, m.start, m.end).unwrap();

        let cells: Vec<_> = closed.nodes().iter().map(|n| n.pos).collect();
        let distinct: HashSet<_> = cells.iter().collect();
        assert_eq!(distinct.len(), cells.len());
        assert_eq!(closed.len(), out.stats().expanded);
        assert!(!closed.contains(m.end));
        for n in closed.nodes() {
            assert!(m.grid.is_passable(n.pos));
            if let Some(pi) = n.parent {
                assert!(closed.nodes()[pi].pos.is_adjacent(n.pos));
            }
        }
        assert_eq!(out.path().map(Path::steps), Some(6));
    }

    #[test]
    fn relaxation_lowers_cost_of_open_node() {
        // A misleading heuristic makes the engine open (2, 0) through the long
        // detour first; the direct route must then relax it.
        struct Lopsided(Grid);
        impl Pather for Lopsided {
            fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
                self.0.neighbors(p, buf);
            }
        }
        impl WeightedPather for Lopsided {
            fn cost(&self, _: Point, _: Point) -> u32 {
                1
            }
        }
        impl AstarPather for Lopsided {
            fn estimate(&self, from: Point, _: Point) -> u32 {
                if from == Point::new(1, 0) { 3 } else { 0 }
            }
        }
        let m = Maze::parse("S.E\n...\n").unwrap();
        let mut pr = PathRange::new(m.grid.bounds());
        let out = pr.astar_path(&Lopsided(m.grid.clone()), m.start, m.end).unwrap();
        assert_eq!(out.path().unwrap().steps(), 2);
        assert_eq!(out.stats().relaxed, 1);
    }

    #[test]
    fn rejects_oversized_range_before_search() {
        let m = Maze::parse("S...E\n").unwrap();
        let mut pr = PathRange::new(m.grid.bounds()).with_max_dim(4);
        assert_eq!(
            pr.solve(&m),
            Err(SearchError::TooLarge {
                width: 5,
                height: 1,
                max: 4
            })
        );
    }

    #[test]
    fn rejects_endpoints_outside_range() {
        let m = Maze::parse("S.E\n").unwrap();
        let mut pr = PathRange::new(Range::with_size(3, 1));
        let far = Point::new(5, 0);
        assert_eq!(
            pr.astar_path(&m.grid, m.start, far),
            Err(SearchError::OutOfRange(far))
        );
    }

    #[test]
    fn matches_bfs_on_generated_mazes() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(7));
        for size in [5, 9, 15, 21, 31] {
            let maze = mg.backtracker(size, size + 4);
            let mut pr = PathRange::new(maze.grid.bounds());
            let out = pr.solve(&maze).unwrap();
            let path = out.path().expect("generated mazes are connected");
            assert_eq!(Some(path.steps() as u32), bfs_distance(&maze), "size {size}");
            assert_valid_route(&maze, path);
        }
    }

    #[test]
    fn matches_bfs_on_open_fields_with_rubble() {
        // Loopy grids with many equal-cost routes exercise relaxation.
        let mut mg = MazeGen::new(StdRng::seed_from_u64(11));
        for _ in 0..20 {
            let maze = mg.rubble(12, 9, 0.3);
            let mut pr = PathRange::new(maze.grid.bounds());
            let out = pr.solve(&maze).unwrap();
            let bfs = bfs_distance(&maze);
            match out.path() {
                Some(path) => {
                    assert_eq!(Some(path.steps() as u32), bfs);
                    assert_valid_route(&maze, path);
                }
                None => assert_eq!(bfs, None),
            }
        }
    }
}
