use rand::{seq::SliceRandom, Rng, RngCore};

use super::{MazeGenerator, Params};
use crate::{
    dims::Dims, error::GenerationError, grid::Grid, scheduler::StepScheduler,
};

/// Aldous-Broder: a plain random walk over the whole grid, carving only
/// when stepping into a cell for the first time. Unbiased but slow; the
/// walk keeps wandering through visited territory until everything has
/// been touched.
#[derive(Debug)]
pub struct AldousBroder;

impl MazeGenerator for AldousBroder {
    fn generate(
        &self,
        size: Dims,
        rng: &mut dyn RngCore,
        scheduler: &mut StepScheduler<'_>,
        _params: &Params,
    ) -> Result<Grid, GenerationError> {
        let mut grid = Grid::new(size)?;
        let cell_count = grid.cell_count();
        scheduler.handle().lock().from = cell_count;

        let mut current = Dims(rng.gen_range(0..size.0), rng.gen_range(0..size.1));
        grid.visit(current);
        let mut visited = 1;
        scheduler.handle().lock().done = visited;

        grid.highlight(current, true);
        scheduler.step(&grid)?;

        while visited < cell_count {
            let next = *grid.neighbors(current).choose(rng).unwrap();

            if !grid.is_visited(next) {
                grid.remove_wall_between(current, next);
                grid.visit(next);
                visited += 1;
                scheduler.handle().lock().done = visited;
            }

            grid.highlight(current, false);
            grid.highlight(next, true);
            current = next;
            scheduler.step(&grid)?;
        }

        grid.highlight(current, false);
        scheduler.handle().lock().finish();

        Ok(grid)
    }
}
