//! Distribution checks for the unbiased random-walk algorithms. The 3x3
//! grid graph has exactly 192 spanning trees; over many seeded trials both
//! Wilson's and Aldous-Broder should hit all of them at roughly equal
//! frequency. Bounds are wide (several standard deviations) so the seeded
//! runs stay far from the failure line.

use hashbrown::HashMap;

use mazegen::{CellWall, Dims, MazeFactory};

const TRIALS: u64 = 10_000;
const SPANNING_TREES: usize = 192;

/// Encodes the maze as a bitmask of its open Right/Bottom walls.
fn tree_key(id: &str, seed: u64) -> u32 {
    let grid = MazeFactory::new()
        .create(id, Dims(3, 3), 16)
        .unwrap()
        .with_seed(seed)
        .generate()
        .unwrap();

    let mut key = 0u32;
    let mut bit = 0;
    for pos in grid.iter_pos() {
        for wall in [CellWall::Right, CellWall::Bottom] {
            if grid.neighbor(pos, wall).is_none() {
                continue;
            }
            if !grid.cell(pos).unwrap().has_wall(wall) {
                key |= 1 << bit;
            }
            bit += 1;
        }
    }

    key
}

fn assert_roughly_uniform(id: &str) {
    let mut counts: HashMap<u32, usize> = HashMap::new();
    for seed in 0..TRIALS {
        *counts.entry(tree_key(id, seed)).or_insert(0) += 1;
    }

    assert_eq!(
        counts.len(),
        SPANNING_TREES,
        "{id} did not reach every spanning tree"
    );

    // mean is TRIALS / 192 ~ 52; the bounds sit 5+ sigma out
    let (min, max) = counts
        .values()
        .fold((usize::MAX, 0), |(min, max), &c| (min.min(c), max.max(c)));
    assert!(min >= 15, "{id}: rarest tree appeared only {min} times");
    assert!(max <= 110, "{id}: most common tree appeared {max} times");
}

#[test]
fn wilsons_samples_spanning_trees_uniformly() {
    assert_roughly_uniform("wilson");
}

#[test]
fn aldous_broder_samples_spanning_trees_uniformly() {
    assert_roughly_uniform("aldous-broder");
}
