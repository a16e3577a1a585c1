use rand::{seq::SliceRandom, RngCore};

use super::{MazeGenerator, Params};
use crate::{
    dims::Dims,
    error::GenerationError,
    grid::{CellWall, Grid},
    scheduler::StepScheduler,
    union_find::DisjointSet,
};

/// Randomized Kruskal's: shuffle every interior wall once, then pop and
/// carve whenever the two sides are still in different components.
#[derive(Debug)]
pub struct RndKruskals;

impl MazeGenerator for RndKruskals {
    fn generate(
        &self,
        size: Dims,
        rng: &mut dyn RngCore,
        scheduler: &mut StepScheduler<'_>,
        _params: &Params,
    ) -> Result<Grid, GenerationError> {
        let mut grid = Grid::new(size)?;

        let mut walls: Vec<(Dims, CellWall)> = Vec::new();
        for pos in Dims::iter_fill(Dims::ZERO, size) {
            if pos.0 + 1 < size.0 {
                walls.push((pos, CellWall::Right));
            }
            if pos.1 + 1 < size.1 {
                walls.push((pos, CellWall::Bottom));
            }
        }

        let starter_wall_count = walls.len();
        scheduler.handle().lock().from = starter_wall_count;

        let mut sets = DisjointSet::new(grid.cell_count());
        let mut carved = 0;

        walls.shuffle(rng);
        while let Some((from, wall)) = walls.pop() {
            let to = from + wall.to_coord();

            if sets.union(from.linear_index(size), to.linear_index(size)) {
                grid.remove_wall(from, wall);
                grid.visit(from);
                grid.visit(to);
                carved += 1;

                grid.highlight(from, true);
                grid.highlight(to, true);
                scheduler.handle().lock().done = starter_wall_count - walls.len();
                scheduler.step(&grid)?;
                grid.highlight(from, false);
                grid.highlight(to, false);

                if carved + 1 == grid.cell_count() {
                    // all cells unified, the rest of the list is cycles
                    break;
                }
            }
        }

        scheduler.handle().lock().finish();

        Ok(grid)
    }
}
