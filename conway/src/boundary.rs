// boundary.rs - Boundary policies and Moore-neighborhood enumeration

/// Relative positions of the 8 neighbors, row-major.
pub const OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// How coordinates that fall off the grid are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundaryPolicy {
    /// Each axis wraps independently, so the grid is a torus.
    #[default]
    Toroidal,
    /// Off-grid neighbors are dropped from the neighborhood.
    Clipped,
}

impl BoundaryPolicy {
    /// Maps one axis coordinate into `[0, dim)`, or `None` if it is clipped away.
    ///
    /// For the one-step offsets of a neighborhood, wrapping gives `dim - 1`
    /// below the grid and `0` above it.
    #[inline]
    pub fn resolve_axis(self, coord: isize, dim: usize) -> Option<usize> {
        match self {
            BoundaryPolicy::Toroidal => Some(coord.rem_euclid(dim as isize) as usize),
            BoundaryPolicy::Clipped if coord < 0 || coord >= dim as isize => None,
            BoundaryPolicy::Clipped => Some(coord as usize),
        }
    }

    #[inline]
    pub fn resolve(self, row: isize, col: isize, (rows, cols): (usize, usize)) -> Option<(usize, usize)> {
        Some((self.resolve_axis(row, rows)?, self.resolve_axis(col, cols)?))
    }

    /// Coordinates of the neighbors of `(row, col)` that survive this policy.
    pub fn neighbors(
        self,
        row: usize,
        col: usize,
        dims: (usize, usize),
    ) -> impl Iterator<Item = (usize, usize)> {
        OFFSETS.iter().filter_map(move |&(dr, dc)| {
            self.resolve(row as isize + dr, col as isize + dc, dims)
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            BoundaryPolicy::Toroidal => "toroidal",
            BoundaryPolicy::Clipped => "clipped",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toroidal_wraps_each_axis() {
        let p = BoundaryPolicy::Toroidal;
        assert_eq!(p.resolve_axis(-1, 5), Some(4));
        assert_eq!(p.resolve_axis(5, 5), Some(0));
        assert_eq!(p.resolve_axis(3, 5), Some(3));
        assert_eq!(p.resolve(-1, 6, (4, 6)), Some((3, 0)));
        assert_eq!(p.resolve_axis(-7, 3), Some(2));
    }

    #[test]
    fn clipped_drops_off_grid() {
        let p = BoundaryPolicy::Clipped;
        assert_eq!(p.resolve_axis(-1, 5), None);
        assert_eq!(p.resolve_axis(5, 5), None);
        assert_eq!(p.resolve(0, 4, (3, 5)), Some((0, 4)));
    }

    #[test]
    fn neighbor_counts_per_policy() {
        // Corner of a 3x3 grid
        assert_eq!(BoundaryPolicy::Toroidal.neighbors(0, 0, (3, 3)).count(), 8);
        assert_eq!(BoundaryPolicy::Clipped.neighbors(0, 0, (3, 3)).count(), 3);
        // Edge and interior
        assert_eq!(BoundaryPolicy::Clipped.neighbors(0, 1, (3, 3)).count(), 5);
        assert_eq!(BoundaryPolicy::Clipped.neighbors(1, 1, (3, 3)).count(), 8);
    }

    #[test]
    fn single_cell_torus_sees_itself() {
        let all: Vec<_> = BoundaryPolicy::Toroidal.neighbors(0, 0, (1, 1)).collect();
        assert_eq!(all, vec![(0, 0); 8]);
        assert_eq!(BoundaryPolicy::Clipped.neighbors(0, 0, (1, 1)).count(), 0);
    }
}
