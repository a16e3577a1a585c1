use crate::dims::Dims;

use self::CellWall::*;

/// One of the four walls around a cell. `Top` faces decreasing `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellWall {
    Top,
    Right,
    Bottom,
    Left,
}

impl CellWall {
    pub fn to_coord(self) -> Dims {
        match self {
            Top => Dims(0, -1),
            Right => Dims(1, 0),
            Bottom => Dims(0, 1),
            Left => Dims(-1, 0),
        }
    }

    pub fn opposite(self) -> CellWall {
        match self {
            Top => Bottom,
            Right => Left,
            Bottom => Top,
            Left => Right,
        }
    }

    pub fn get_in_order() -> [CellWall; 4] {
        [Top, Right, Bottom, Left]
    }
}

/// A single grid cell: four wall-present flags, a `visited` marker and a
/// transient `highlighted` marker driven purely for step observers.
///
/// Walls are mutated only through [`Grid`](super::Grid), which keeps the
/// matching flag of the adjacent cell in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    top: bool,
    right: bool,
    bottom: bool,
    left: bool,
    visited: bool,
    highlighted: bool,
}

impl Cell {
    /// A fresh cell with all four walls up.
    pub fn closed() -> Cell {
        Cell {
            top: true,
            right: true,
            bottom: true,
            left: true,
            visited: false,
            highlighted: false,
        }
    }

    pub fn has_wall(&self, wall: CellWall) -> bool {
        match wall {
            Top => self.top,
            Right => self.right,
            Bottom => self.bottom,
            Left => self.left,
        }
    }

    pub(crate) fn set_wall(&mut self, wall: CellWall, present: bool) {
        match wall {
            Top => self.top = present,
            Right => self.right = present,
            Bottom => self.bottom = present,
            Left => self.left = present,
        }
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub(crate) fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    pub fn wall_count(&self) -> usize {
        CellWall::get_in_order()
            .into_iter()
            .filter(|&w| self.has_wall(w))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for wall in CellWall::get_in_order() {
            assert_eq!(wall.opposite().opposite(), wall);
            assert_eq!(wall.to_coord() + wall.opposite().to_coord(), Dims::ZERO);
        }
    }

    #[test]
    fn closed_cell_has_all_walls() {
        let cell = Cell::closed();
        assert_eq!(cell.wall_count(), 4);
        assert!(!cell.is_visited());
        assert!(!cell.is_highlighted());
    }
}
