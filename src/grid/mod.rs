pub mod cell;
pub use cell::{Cell, CellWall};

use smallvec::SmallVec;

use crate::{array::Array2D, dims::Dims, error::GenerationError};

/// The maze board: a rectangle of [`Cell`]s owned by exactly one
/// generation run.
///
/// Invariant: wall symmetry. For adjacent cells `a` and `b`, `a`'s wall
/// facing `b` is present exactly when `b`'s wall facing `a` is. All wall
/// mutation goes through [`remove_wall`](Grid::remove_wall) /
/// [`build_wall`](Grid::build_wall), which update both sides before
/// returning, so the invariant holds between any two observable steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<Cell>,
}

impl Grid {
    /// Creates a grid with every wall up and every cell unvisited.
    pub fn new(size: Dims) -> Result<Self, GenerationError> {
        if !size.all_positive() {
            return Err(GenerationError::InvalidDimensions(size));
        }

        Ok(Self {
            cells: Array2D::new(Cell::closed(), size.0 as usize, size.1 as usize),
        })
    }

    /// Creates a grid with an open interior and only the outer boundary
    /// walled, the starting state for wall-adding algorithms.
    pub fn new_open(size: Dims) -> Result<Self, GenerationError> {
        let mut grid = Self::new(size)?;
        for pos in Dims::iter_fill(Dims::ZERO, size) {
            let cell = &mut grid.cells[pos];
            cell.set_wall(CellWall::Top, pos.1 == 0);
            cell.set_wall(CellWall::Right, pos.0 == size.0 - 1);
            cell.set_wall(CellWall::Bottom, pos.1 == size.1 - 1);
            cell.set_wall(CellWall::Left, pos.0 == 0);
        }

        Ok(grid)
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.cells.dim_to_idx(pos).is_some()
    }

    pub fn cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    /// The cell on the other side of `wall`, if it exists.
    pub fn neighbor(&self, pos: Dims, wall: CellWall) -> Option<Dims> {
        if !self.is_in_bounds(pos) {
            return None;
        }
        let next = pos + wall.to_coord();
        self.is_in_bounds(next).then_some(next)
    }

    /// All in-bounds 4-neighbors, in [`CellWall::get_in_order`] order.
    pub fn neighbors(&self, pos: Dims) -> SmallVec<[Dims; 4]> {
        CellWall::get_in_order()
            .into_iter()
            .filter_map(|wall| self.neighbor(pos, wall))
            .collect()
    }

    /// Which wall of `a` faces `b`, for 4-adjacent cells.
    pub fn which_wall_between(a: Dims, b: Dims) -> Option<CellWall> {
        match (b.0 - a.0, b.1 - a.1) {
            (1, 0) => Some(CellWall::Right),
            (-1, 0) => Some(CellWall::Left),
            (0, 1) => Some(CellWall::Bottom),
            (0, -1) => Some(CellWall::Top),
            _ => None,
        }
    }

    /// Clears the wall pair between `pos` and its neighbor. Boundary
    /// walls (no neighbor) are left untouched.
    pub fn remove_wall(&mut self, pos: Dims, wall: CellWall) {
        let Some(next) = self.neighbor(pos, wall) else {
            return;
        };

        self.cells[pos].set_wall(wall, false);
        self.cells[next].set_wall(wall.opposite(), false);
    }

    /// Clears the wall pair between two cells; rejected (returns `false`)
    /// unless they are 4-adjacent and in bounds.
    pub fn remove_wall_between(&mut self, a: Dims, b: Dims) -> bool {
        match Self::which_wall_between(a, b) {
            Some(wall) if self.is_in_bounds(a) && self.is_in_bounds(b) => {
                self.remove_wall(a, wall);
                true
            }
            _ => false,
        }
    }

    /// Erects the wall pair between `pos` and its neighbor; the symmetric
    /// counterpart of [`remove_wall`](Grid::remove_wall).
    pub fn build_wall(&mut self, pos: Dims, wall: CellWall) {
        let Some(next) = self.neighbor(pos, wall) else {
            return;
        };

        self.cells[pos].set_wall(wall, true);
        self.cells[next].set_wall(wall.opposite(), true);
    }

    pub fn visit(&mut self, pos: Dims) {
        if let Some(cell) = self.cells.get_mut(pos) {
            cell.set_visited(true);
        }
    }

    pub fn is_visited(&self, pos: Dims) -> bool {
        self.cells.get(pos).is_some_and(Cell::is_visited)
    }

    pub fn highlight(&mut self, pos: Dims, on: bool) {
        if let Some(cell) = self.cells.get_mut(pos) {
            cell.set_highlighted(on);
        }
    }

    pub fn clear_highlights(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.set_highlighted(false);
        }
    }

    /// Back to the all-walled, unvisited state.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::closed());
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        self.cells.iter_pos()
    }

    /// Number of open passages (absent interior wall pairs). A perfect
    /// maze has exactly `cell_count() - 1` of them.
    pub fn passage_count(&self) -> usize {
        let mut count = 0;
        for pos in self.iter_pos() {
            for wall in [CellWall::Right, CellWall::Bottom] {
                if self.neighbor(pos, wall).is_some() && !self.cells[pos].has_wall(wall) {
                    count += 1;
                }
            }
        }

        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symmetric(grid: &Grid) -> bool {
        grid.iter_pos().all(|pos| {
            CellWall::get_in_order().into_iter().all(|wall| {
                grid.neighbor(pos, wall).is_none_or(|next| {
                    grid.cell(pos).unwrap().has_wall(wall)
                        == grid.cell(next).unwrap().has_wall(wall.opposite())
                })
            })
        })
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        for size in [Dims(0, 4), Dims(4, 0), Dims(-1, 3), Dims(0, 0)] {
            assert_eq!(
                Grid::new(size),
                Err(GenerationError::InvalidDimensions(size))
            );
        }
    }

    #[test]
    fn remove_wall_clears_both_sides() {
        let mut grid = Grid::new(Dims(3, 3)).unwrap();
        grid.remove_wall(Dims(1, 1), CellWall::Right);
        assert!(!grid.cell(Dims(1, 1)).unwrap().has_wall(CellWall::Right));
        assert!(!grid.cell(Dims(2, 1)).unwrap().has_wall(CellWall::Left));
        assert!(symmetric(&grid));
    }

    #[test]
    fn boundary_walls_are_kept() {
        let mut grid = Grid::new(Dims(2, 2)).unwrap();
        grid.remove_wall(Dims(0, 0), CellWall::Top);
        grid.remove_wall(Dims(0, 0), CellWall::Left);
        assert!(grid.cell(Dims(0, 0)).unwrap().has_wall(CellWall::Top));
        assert!(grid.cell(Dims(0, 0)).unwrap().has_wall(CellWall::Left));
    }

    #[test]
    fn remove_wall_between_requires_adjacency() {
        let mut grid = Grid::new(Dims(3, 3)).unwrap();
        assert!(!grid.remove_wall_between(Dims(0, 0), Dims(2, 0)));
        assert!(!grid.remove_wall_between(Dims(0, 0), Dims(1, 1)));
        assert!(grid.remove_wall_between(Dims(0, 0), Dims(1, 0)));
        assert!(symmetric(&grid));
    }

    #[test]
    fn new_open_walls_only_the_boundary() {
        let grid = Grid::new_open(Dims(3, 2)).unwrap();
        assert!(symmetric(&grid));
        assert_eq!(grid.passage_count(), 7);
        let corner = grid.cell(Dims(0, 0)).unwrap();
        assert!(corner.has_wall(CellWall::Top));
        assert!(corner.has_wall(CellWall::Left));
        assert!(!corner.has_wall(CellWall::Right));
        assert!(!corner.has_wall(CellWall::Bottom));
    }

    #[test]
    fn build_wall_round_trips() {
        let mut grid = Grid::new_open(Dims(3, 3)).unwrap();
        grid.build_wall(Dims(1, 1), CellWall::Bottom);
        assert!(grid.cell(Dims(1, 1)).unwrap().has_wall(CellWall::Bottom));
        assert!(grid.cell(Dims(1, 2)).unwrap().has_wall(CellWall::Top));
        assert!(symmetric(&grid));
    }

    #[test]
    fn clear_highlights_touches_every_cell() {
        let mut grid = Grid::new(Dims(3, 3)).unwrap();
        grid.highlight(Dims(0, 0), true);
        grid.highlight(Dims(2, 1), true);
        grid.clear_highlights();
        assert!(grid
            .iter_pos()
            .all(|pos| !grid.cell(pos).unwrap().is_highlighted()));
    }

    #[test]
    fn reset_restores_the_closed_state() {
        let mut grid = Grid::new(Dims(2, 2)).unwrap();
        grid.remove_wall(Dims(0, 0), CellWall::Right);
        grid.visit(Dims(0, 0));
        grid.highlight(Dims(1, 1), true);
        grid.reset();
        assert_eq!(grid, Grid::new(Dims(2, 2)).unwrap());
    }

    #[test]
    fn neighbor_is_bounds_checked() {
        let grid = Grid::new(Dims(2, 2)).unwrap();
        assert_eq!(grid.neighbor(Dims(0, 0), CellWall::Top), None);
        assert_eq!(grid.neighbor(Dims(0, 0), CellWall::Right), Some(Dims(1, 0)));
        assert_eq!(grid.neighbor(Dims(5, 5), CellWall::Left), None);
        assert_eq!(grid.neighbors(Dims(0, 0)).len(), 2);
    }
}
