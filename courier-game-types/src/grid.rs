use itertools::Itertools;
use thiserror::Error;
use tinyvec::ArrayVec;

use crate::types::{Move, Vertex};

/// Rejected grid configurations. Construction is the only place a grid can
/// fail; afterwards it is immutable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid bounds must be non-negative, got x_max={x_max} y_max={y_max}")]
    InvalidBounds { x_max: i32, y_max: i32 },
    #[error("blocked edge {a} - {b} references a vertex outside the grid")]
    BlockedEdgeOutOfBounds { a: Vertex, b: Vertex },
}

/// Static adjacency over the grid vertices. Each vertex maps to its in-bounds
/// cardinal neighbors, minus any pair removed by a blocked edge. There are no
/// mutating operations; every [`crate::world::World`] aliases one grid behind
/// an `Arc`.
#[derive(Debug)]
pub struct Grid {
    x_max: i32,
    y_max: i32,
    adjacency: Vec<ArrayVec<[Vertex; 4]>>,
}

impl Grid {
    /// Builds the adjacency structure for `[0, x_max] x [0, y_max]` with both
    /// directions of every blocked edge removed.
    ///
    /// A blocked edge naming an out-of-grid vertex is a configuration error
    /// and is rejected here rather than ignored. A blocked edge between two
    /// in-bounds vertices that are not adjacent has no effect.
    pub fn build(
        x_max: i32,
        y_max: i32,
        blocked_edges: &[(Vertex, Vertex)],
    ) -> Result<Self, GridError> {
        if x_max < 0 || y_max < 0 {
            return Err(GridError::InvalidBounds { x_max, y_max });
        }

        let width = (x_max + 1) as usize;
        let height = (y_max + 1) as usize;
        let mut grid = Self {
            x_max,
            y_max,
            adjacency: vec![ArrayVec::new(); width * height],
        };

        for (x, y) in (0..=x_max).cartesian_product(0..=y_max) {
            let vertex = Vertex::new(x, y);
            let index = grid.index(vertex);
            for step in [Move::Up, Move::Down, Move::Left, Move::Right] {
                let neighbor = step.apply(vertex);
                if grid.contains(neighbor) {
                    grid.adjacency[index].push(neighbor);
                }
            }
        }

        for &(a, b) in blocked_edges {
            if !grid.contains(a) || !grid.contains(b) {
                return Err(GridError::BlockedEdgeOutOfBounds { a, b });
            }
            grid.remove_neighbor(a, b);
            grid.remove_neighbor(b, a);
        }

        Ok(grid)
    }

    pub fn x_max(&self) -> i32 {
        self.x_max
    }

    pub fn y_max(&self) -> i32 {
        self.y_max
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        (0..=self.x_max).contains(&vertex.x) && (0..=self.y_max).contains(&vertex.y)
    }

    /// The traversable neighbors of `vertex`. O(1).
    ///
    /// `vertex` must be inside the grid; agents only ever occupy in-grid
    /// vertices because every applied move comes out of this list.
    pub fn neighbors(&self, vertex: Vertex) -> &[Vertex] {
        debug_assert!(self.contains(vertex));
        &self.adjacency[self.index(vertex)]
    }

    fn index(&self, vertex: Vertex) -> usize {
        vertex.y as usize * (self.x_max + 1) as usize + vertex.x as usize
    }

    fn remove_neighbor(&mut self, from: Vertex, to: Vertex) {
        let index = self.index(from);
        if let Some(position) = self.adjacency[index].iter().position(|v| *v == to) {
            self.adjacency[index].remove(position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_and_center_degrees() {
        let grid = Grid::build(2, 2, &[]).unwrap();
        assert_eq!(grid.neighbors(Vertex::new(0, 0)).len(), 2);
        assert_eq!(grid.neighbors(Vertex::new(1, 0)).len(), 3);
        assert_eq!(grid.neighbors(Vertex::new(1, 1)).len(), 4);
    }

    #[test]
    fn blocked_edge_removed_in_both_directions() {
        let blocked = [(Vertex::new(0, 0), Vertex::new(1, 0))];
        let grid = Grid::build(1, 1, &blocked).unwrap();

        assert!(!grid.neighbors(Vertex::new(0, 0)).contains(&Vertex::new(1, 0)));
        assert!(!grid.neighbors(Vertex::new(1, 0)).contains(&Vertex::new(0, 0)));
        // the rest of the grid is untouched
        assert!(grid.neighbors(Vertex::new(0, 0)).contains(&Vertex::new(0, 1)));
        assert!(grid.neighbors(Vertex::new(1, 0)).contains(&Vertex::new(1, 1)));
    }

    #[test]
    fn blocked_edge_outside_grid_is_rejected() {
        let blocked = [(Vertex::new(0, 0), Vertex::new(5, 0))];
        assert_eq!(
            Grid::build(1, 1, &blocked).unwrap_err(),
            GridError::BlockedEdgeOutOfBounds {
                a: Vertex::new(0, 0),
                b: Vertex::new(5, 0),
            }
        );
    }

    #[test]
    fn negative_bounds_are_rejected() {
        assert_eq!(
            Grid::build(-1, 3, &[]).unwrap_err(),
            GridError::InvalidBounds { x_max: -1, y_max: 3 }
        );
    }

    #[test]
    fn non_adjacent_blocked_edge_is_a_no_op() {
        let blocked = [(Vertex::new(0, 0), Vertex::new(2, 2))];
        let grid = Grid::build(2, 2, &blocked).unwrap();
        assert_eq!(grid.neighbors(Vertex::new(0, 0)).len(), 2);
        assert_eq!(grid.neighbors(Vertex::new(2, 2)).len(), 2);
    }
}
