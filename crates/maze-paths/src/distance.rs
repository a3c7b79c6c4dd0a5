use maze_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible and consistent for 4-directional unit-cost movement.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 2);
        assert_eq!(manhattan(a, b), 5);
        assert_eq!(manhattan(b, a), 5);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn adjacent_cells_differ_by_at_most_one() {
        // Consistency: h(n) <= 1 + h(n') for every neighbor n'.
        let goal = Point::new(7, -2);
        let p = Point::new(2, 4);
        for n in p.neighbors_4() {
            let (hp, hn) = (manhattan(p, goal), manhattan(n, goal));
            assert!(hp <= hn + 1 && hn <= hp + 1);
        }
    }
}
