use rand::{seq::SliceRandom, RngCore};
use smallvec::SmallVec;

use super::{MazeGenerator, Params};
use crate::{
    dims::Dims,
    error::GenerationError,
    grid::{CellWall, Grid},
    scheduler::StepScheduler,
};

/// Binary tree: every cell carves either east or north, picked uniformly
/// when both directions exist. The top row and rightmost column come out
/// as straight corridors; the top-right corner carves nothing.
#[derive(Debug)]
pub struct BinaryTree;

impl MazeGenerator for BinaryTree {
    fn generate(
        &self,
        size: Dims,
        rng: &mut dyn RngCore,
        scheduler: &mut StepScheduler<'_>,
        _params: &Params,
    ) -> Result<Grid, GenerationError> {
        let mut grid = Grid::new(size)?;
        scheduler.handle().lock().from = self.guess_step_count(size);

        for pos in Dims::iter_fill(Dims::ZERO, size) {
            let mut candidates: SmallVec<[CellWall; 2]> = SmallVec::new();
            if pos.0 + 1 < size.0 {
                candidates.push(CellWall::Right);
            }
            if pos.1 > 0 {
                candidates.push(CellWall::Top);
            }

            grid.highlight(pos, true);
            if let Some(&wall) = candidates.choose(rng) {
                grid.remove_wall(pos, wall);
            }
            grid.visit(pos);

            scheduler.handle().lock().done += 1;
            scheduler.step(&grid)?;
            grid.highlight(pos, false);
        }

        scheduler.handle().lock().finish();

        Ok(grid)
    }
}
