use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Cell coordinates or grid size, `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);
    pub const ONE: Dims = Dims(1, 1);

    /// Iterates the rectangle `[from, to)` in row-major order (`y` outer,
    /// `x` inner), the scan order the row-oriented algorithms rely on.
    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.1..to.1).flat_map(move |y| (from.0..to.0).map(move |x| Dims(x, y)))
    }

    pub fn all_positive(self) -> bool {
        self.0 > 0 && self.1 > 0
    }

    pub fn product(self) -> i32 {
        self.0 * self.1
    }

    pub fn linear_index(self, size: Dims) -> usize {
        assert!(self.0 >= 0 && self.1 >= 0);
        (self.1 * size.0 + self.0) as usize
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}

impl AddAssign for Dims {
    fn add_assign(&mut self, other: Dims) {
        self.0 += other.0;
        self.1 += other.1;
    }
}

impl SubAssign for Dims {
    fn sub_assign(&mut self, other: Dims) {
        self.0 -= other.0;
        self.1 -= other.1;
    }
}

impl Mul<i32> for Dims {
    type Output = Dims;

    fn mul(self, other: i32) -> Dims {
        Dims(self.0 * other, self.1 * other)
    }
}

impl From<(i32, i32)> for Dims {
    fn from(tuple: (i32, i32)) -> Self {
        Dims(tuple.0, tuple.1)
    }
}

impl From<Dims> for (i32, i32) {
    fn from(val: Dims) -> Self {
        (val.0, val.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_fill_is_row_major() {
        let cells: Vec<_> = Dims::iter_fill(Dims::ZERO, Dims(3, 2)).collect();
        assert_eq!(
            cells,
            vec![
                Dims(0, 0),
                Dims(1, 0),
                Dims(2, 0),
                Dims(0, 1),
                Dims(1, 1),
                Dims(2, 1),
            ]
        );
    }

    #[test]
    fn linear_index_matches_scan_order() {
        let size = Dims(4, 3);
        for (i, pos) in Dims::iter_fill(Dims::ZERO, size).enumerate() {
            assert_eq!(pos.linear_index(size), i);
        }
    }
}
