/// Single coordinate axis used for the board side and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(y, x)`, row first.
pub type Coord2 = (Coord, Coord);

/// `ndarray` index of a board position.
pub(crate) fn nd_index((y, x): Coord2) -> [usize; 2] {
    [y.into(), x.into()]
}

/// `ndarray` shape of a `size x size` board.
pub(crate) fn square_dim(size: Coord) -> [usize; 2] {
    [size.into(), size.into()]
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Row-major offsets `(dy, dx)` of the eight surrounding cells.
const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterates the up-to-8 neighbors of a cell on a `size x size` board.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    size: Coord,
    index: usize,
}

impl NeighborIter {
    pub fn new(center: Coord2, size: Coord) -> Self {
        Self {
            center,
            size,
            index: 0,
        }
    }

    fn step(&self, (dy, dx): (i8, i8)) -> Option<Coord2> {
        let y = self.center.0.checked_add_signed(dy)?;
        let x = self.center.1.checked_add_signed(dx)?;
        (y < self.size && x < self.size).then_some((y, x))
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = DISPLACEMENTS.get(self.index) {
            self.index += 1;
            if let Some(coords) = self.step(delta) {
                return Some(coords);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), 3).collect();

        let expected: [Coord2; 3] = [(0, 1), (1, 0), (1, 1)];
        assert_eq!(neighbors, expected);
    }

    #[test]
    fn center_has_all_eight_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((1, 1), 3).collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(1, 1)));
    }

    #[test]
    fn edge_neighbors_are_clipped_to_bounds() {
        let neighbors: Vec<_> = NeighborIter::new((2, 1), 3).collect();

        let expected: [Coord2; 5] = [(1, 0), (1, 1), (1, 2), (2, 0), (2, 2)];
        assert_eq!(neighbors, expected);
    }

    #[test]
    fn far_corner_of_the_largest_board() {
        let neighbors: Vec<_> =
            NeighborIter::new((Coord::MAX - 1, Coord::MAX - 1), Coord::MAX).collect();

        let expected: [Coord2; 3] = [(253, 253), (253, 254), (254, 253)];
        assert_eq!(neighbors, expected);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), 1).count(), 0);
    }
}
