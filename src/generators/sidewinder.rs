use rand::{Rng, RngCore};

use super::{MazeGenerator, Params};
use crate::{
    dims::Dims,
    error::GenerationError,
    grid::{CellWall, Grid},
    scheduler::StepScheduler,
};

/// Sidewinder: the top row is one open corridor; every other row gathers
/// eastward runs of cells and carves one random passage north out of each
/// closed run.
#[derive(Debug)]
pub struct Sidewinder;

impl MazeGenerator for Sidewinder {
    fn generate(
        &self,
        size: Dims,
        rng: &mut dyn RngCore,
        scheduler: &mut StepScheduler<'_>,
        _params: &Params,
    ) -> Result<Grid, GenerationError> {
        let mut grid = Grid::new(size)?;
        scheduler.handle().lock().from = self.guess_step_count(size);

        // top row: fully open run
        for x in 0..size.0 - 1 {
            let pos = Dims(x, 0);
            grid.highlight(pos, true);
            grid.remove_wall(pos, CellWall::Right);
            grid.visit(pos);
            scheduler.handle().lock().done += 1;
            scheduler.step(&grid)?;
            grid.highlight(pos, false);
        }
        grid.visit(Dims(size.0 - 1, 0));
        scheduler.handle().lock().done += 1;

        for y in 1..size.1 {
            let mut run_start = 0;

            for x in 0..size.0 {
                let pos = Dims(x, y);
                grid.visit(pos);
                grid.highlight(pos, true);
                scheduler.handle().lock().done += 1;
                scheduler.step(&grid)?;

                let at_east_boundary = x == size.0 - 1;
                if at_east_boundary || rng.gen_bool(0.5) {
                    // close the run: one random cell of it connects north
                    let carve_x = rng.gen_range(run_start..=x);
                    grid.remove_wall(Dims(carve_x, y), CellWall::Top);
                    scheduler.step(&grid)?;
                    run_start = x + 1;
                } else {
                    grid.remove_wall(pos, CellWall::Right);
                    scheduler.step(&grid)?;
                }

                grid.highlight(pos, false);
            }
        }

        scheduler.handle().lock().finish();

        Ok(grid)
    }
}
