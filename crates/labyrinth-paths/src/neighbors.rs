use labyrinth_core::Point;

/// Cached neighbor computation helper.
///
/// Enumerates the 4-connected neighbours of a grid point in search order
/// (up, down, left, right), filtered by a predicate.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbours of `p`, keeping only those for which
    /// `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyrinth_core::Dims;

    #[test]
    fn corner_has_two_neighbors() {
        let dims = Dims::new(3, 3);
        let mut nb = Neighbors::new();
        let got = nb.cardinal(Point::new(0, 0), |p| dims.contains(p));
        assert_eq!(got, &[Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn center_lists_up_down_left_right() {
        let dims = Dims::new(3, 3);
        let mut nb = Neighbors::new();
        let got = nb.cardinal(Point::new(1, 1), |p| dims.contains(p)).to_vec();
        assert_eq!(
            got,
            vec![
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(1, 0),
                Point::new(1, 2)
            ]
        );
    }
}
