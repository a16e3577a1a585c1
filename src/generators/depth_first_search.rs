use rand::{seq::SliceRandom, RngCore};
use smallvec::SmallVec;

use super::{MazeGenerator, Params};
use crate::{
    dims::Dims, error::GenerationError, grid::Grid, scheduler::StepScheduler,
};

/// Recursive backtracker: depth-first carving with an explicit stack.
#[derive(Debug)]
pub struct DepthFirstSearch;

impl MazeGenerator for DepthFirstSearch {
    fn generate(
        &self,
        size: Dims,
        rng: &mut dyn RngCore,
        scheduler: &mut StepScheduler<'_>,
        _params: &Params,
    ) -> Result<Grid, GenerationError> {
        let mut grid = Grid::new(size)?;
        scheduler.handle().lock().from = self.guess_step_count(size);

        let mut stack = Vec::with_capacity(grid.cell_count());
        let mut visited = 1;

        grid.visit(Dims::ZERO);
        stack.push(Dims::ZERO);
        while let Some(current) = stack.pop() {
            let unvisited_neighbors = grid
                .neighbors(current)
                .into_iter()
                .filter(|&cell| !grid.is_visited(cell))
                .collect::<SmallVec<[_; 4]>>();

            grid.highlight(current, true);
            if let Some(&chosen) = unvisited_neighbors.choose(rng) {
                stack.push(current);
                grid.remove_wall_between(current, chosen);
                grid.visit(chosen);
                visited += 1;
                stack.push(chosen);
            }

            scheduler.handle().lock().done = visited;
            scheduler.step(&grid)?;
            grid.highlight(current, false);
        }

        scheduler.handle().lock().finish();

        Ok(grid)
    }
}
