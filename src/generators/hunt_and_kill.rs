use rand::{seq::SliceRandom, RngCore};
use smallvec::SmallVec;

use super::{MazeGenerator, Params};
use crate::{
    dims::Dims, error::GenerationError, grid::Grid, scheduler::StepScheduler,
};

/// Hunt-and-kill: random-walk until boxed in, then scan the grid in
/// row-major order for the first unvisited cell touching the visited
/// region and walk on from there.
#[derive(Debug)]
pub struct HuntAndKill;

impl HuntAndKill {
    /// The row-major hunt. Carves the found cell into the visited region
    /// and returns it, or `None` once the maze is complete.
    fn hunt(
        grid: &mut Grid,
        rng: &mut dyn RngCore,
        scheduler: &mut StepScheduler<'_>,
    ) -> Result<Option<Dims>, GenerationError> {
        for pos in Dims::iter_fill(Dims::ZERO, grid.size()) {
            grid.highlight(pos, true);
            scheduler.step(grid)?;
            grid.highlight(pos, false);

            if grid.is_visited(pos) {
                continue;
            }

            let visited_neighbors = grid
                .neighbors(pos)
                .into_iter()
                .filter(|&cell| grid.is_visited(cell))
                .collect::<SmallVec<[_; 4]>>();

            if let Some(&neighbor) = visited_neighbors.choose(rng) {
                grid.remove_wall_between(pos, neighbor);
                grid.visit(pos);
                return Ok(Some(pos));
            }
        }

        Ok(None)
    }
}

impl MazeGenerator for HuntAndKill {
    fn generate(
        &self,
        size: Dims,
        rng: &mut dyn RngCore,
        scheduler: &mut StepScheduler<'_>,
        _params: &Params,
    ) -> Result<Grid, GenerationError> {
        let mut grid = Grid::new(size)?;
        scheduler.handle().lock().from = self.guess_step_count(size);

        grid.visit(Dims::ZERO);
        let mut visited = 1;
        scheduler.handle().lock().done = visited;

        let mut current = Some(Dims::ZERO);
        grid.highlight(Dims::ZERO, true);
        scheduler.step(&grid)?;

        while let Some(pos) = current {
            let unvisited_neighbors = grid
                .neighbors(pos)
                .into_iter()
                .filter(|&cell| !grid.is_visited(cell))
                .collect::<SmallVec<[_; 4]>>();

            if let Some(&next) = unvisited_neighbors.choose(rng) {
                grid.remove_wall_between(pos, next);
                grid.visit(next);
                visited += 1;
                grid.highlight(pos, false);
                grid.highlight(next, true);
                scheduler.handle().lock().done = visited;
                scheduler.step(&grid)?;
                current = Some(next);
            } else {
                grid.highlight(pos, false);
                scheduler.step(&grid)?;

                current = Self::hunt(&mut grid, rng, scheduler)?;
                if let Some(found) = current {
                    visited += 1;
                    grid.highlight(found, true);
                    scheduler.handle().lock().done = visited;
                    scheduler.step(&grid)?;
                    grid.highlight(found, false);
                }
            }
        }

        scheduler.handle().lock().finish();

        Ok(grid)
    }
}
