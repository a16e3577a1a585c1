//! Driving a generator with a scripted random source. An all-zero source
//! makes every uniform choice pick its first candidate, which for Binary
//! Tree means "carve east when possible, otherwise north".

use rand::RngCore;

use mazegen::{
    generators::{BinaryTree, MazeGenerator, Params},
    CellWall, Dims, ProgressHandle, StepScheduler,
};

struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[test]
fn binary_tree_east_biased_3x3() {
    let mut scheduler = StepScheduler::headless(ProgressHandle::new());
    let grid = BinaryTree
        .generate(Dims(3, 3), &mut ZeroRng, &mut scheduler, &Params::default())
        .unwrap();

    let wall = |x, y, w| grid.cell(Dims(x, y)).unwrap().has_wall(w);

    // rows become eastward corridors wherever east exists
    for y in 0..3 {
        for x in 0..2 {
            assert!(!wall(x, y, CellWall::Right), "({x},{y}) kept its east wall");
        }
    }

    // the top row never carves north; the boundary stays intact
    for x in 0..3 {
        assert!(wall(x, 0, CellWall::Top));
    }

    // the rightmost column has no east option, so every cell below the
    // corner is forced north
    assert!(!wall(2, 1, CellWall::Top));
    assert!(!wall(2, 2, CellWall::Top));

    // bottom-right corner keeps its boundary walls
    assert!(wall(2, 2, CellWall::Bottom));
    assert!(wall(2, 2, CellWall::Right));

    assert_eq!(grid.passage_count(), 8);
}
