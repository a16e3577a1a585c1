use rand::{Rng, RngCore};

use super::{MazeGenerator, Params};
use crate::{
    dims::Dims,
    error::GenerationError,
    grid::{CellWall, Grid},
    scheduler::StepScheduler,
};

/// Recursive division: the only wall-adding strategy. Starts from an open
/// interior and recursively splits chambers with a wall across the longer
/// axis, leaving one passage per wall. A chamber narrower than two cells
/// in either axis is a corridor, which is already a tree, so recursion
/// stops there and the spanning-tree post-condition holds everywhere.
#[derive(Debug)]
pub struct RecursiveDivision;

/// A rectangular sub-region under division. Lives only on the recursion
/// stack.
#[derive(Debug, Clone, Copy)]
struct Chamber {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl RecursiveDivision {
    fn divide(
        grid: &mut Grid,
        rng: &mut dyn RngCore,
        scheduler: &mut StepScheduler<'_>,
        chamber: Chamber,
    ) -> Result<(), GenerationError> {
        if chamber.width < 2 || chamber.height < 2 {
            return Ok(());
        }

        // split across the longer axis; ties fall to a vertical wall
        if chamber.height > chamber.width {
            // horizontal wall between rows `wall_y` and `wall_y + 1`
            let wall_y = chamber.y + rng.gen_range(0..chamber.height - 1);
            let passage_x = chamber.x + rng.gen_range(0..chamber.width);

            for x in chamber.x..chamber.x + chamber.width {
                if x == passage_x {
                    continue;
                }
                grid.build_wall(Dims(x, wall_y), CellWall::Bottom);
                grid.highlight(Dims(x, wall_y), true);
                scheduler.handle().lock().done += 1;
                scheduler.step(grid)?;
                grid.highlight(Dims(x, wall_y), false);
            }

            let upper_height = wall_y - chamber.y + 1;
            Self::divide(
                grid,
                rng,
                scheduler,
                Chamber {
                    height: upper_height,
                    ..chamber
                },
            )?;
            Self::divide(
                grid,
                rng,
                scheduler,
                Chamber {
                    y: wall_y + 1,
                    height: chamber.height - upper_height,
                    ..chamber
                },
            )
        } else {
            // vertical wall between columns `wall_x` and `wall_x + 1`
            let wall_x = chamber.x + rng.gen_range(0..chamber.width - 1);
            let passage_y = chamber.y + rng.gen_range(0..chamber.height);

            for y in chamber.y..chamber.y + chamber.height {
                if y == passage_y {
                    continue;
                }
                grid.build_wall(Dims(wall_x, y), CellWall::Right);
                grid.highlight(Dims(wall_x, y), true);
                scheduler.handle().lock().done += 1;
                scheduler.step(grid)?;
                grid.highlight(Dims(wall_x, y), false);
            }

            let left_width = wall_x - chamber.x + 1;
            Self::divide(
                grid,
                rng,
                scheduler,
                Chamber {
                    width: left_width,
                    ..chamber
                },
            )?;
            Self::divide(
                grid,
                rng,
                scheduler,
                Chamber {
                    x: wall_x + 1,
                    width: chamber.width - left_width,
                    ..chamber
                },
            )
        }
    }
}

impl MazeGenerator for RecursiveDivision {
    fn generate(
        &self,
        size: Dims,
        rng: &mut dyn RngCore,
        scheduler: &mut StepScheduler<'_>,
        _params: &Params,
    ) -> Result<Grid, GenerationError> {
        let mut grid = Grid::new_open(size)?;
        for pos in Dims::iter_fill(Dims::ZERO, size) {
            grid.visit(pos);
        }
        scheduler.handle().lock().from = self.guess_step_count(size);
        scheduler.step(&grid)?;

        Self::divide(
            &mut grid,
            rng,
            scheduler,
            Chamber {
                x: 0,
                y: 0,
                width: size.0,
                height: size.1,
            },
        )?;

        scheduler.handle().lock().finish();

        Ok(grid)
    }

    /// Wall segments erected overall: every interior wall slot minus the
    /// passages a spanning layout keeps open.
    fn guess_step_count(&self, size: Dims) -> usize {
        let Dims(w, h) = size;
        let interior = (w - 1) * h + (h - 1) * w;
        (interior - (w * h - 1)).max(0) as usize
    }
}
