use rand::{seq::SliceRandom, Rng, RngCore};
use smallvec::SmallVec;

use super::{MazeGenerator, Params};
use crate::{
    dims::Dims, error::GenerationError, grid::Grid, scheduler::StepScheduler,
};

/// Prim's algorithm: grow the visited region by pulling uniformly random
/// cells off a frontier of unvisited neighbors.
#[derive(Debug)]
pub struct Prims;

impl Prims {
    /// Adds the unvisited neighbors of `pos` that the frontier doesn't
    /// hold yet.
    fn extend_frontier(grid: &Grid, pos: Dims, frontier: &mut Vec<Dims>) {
        for cell in grid.neighbors(pos) {
            if !grid.is_visited(cell) && !frontier.contains(&cell) {
                frontier.push(cell);
            }
        }
    }
}

impl MazeGenerator for Prims {
    fn generate(
        &self,
        size: Dims,
        rng: &mut dyn RngCore,
        scheduler: &mut StepScheduler<'_>,
        _params: &Params,
    ) -> Result<Grid, GenerationError> {
        let mut grid = Grid::new(size)?;
        scheduler.handle().lock().from = self.guess_step_count(size);

        let start = Dims(rng.gen_range(0..size.0), rng.gen_range(0..size.1));
        grid.visit(start);
        let mut visited = 1;
        scheduler.handle().lock().done = visited;

        let mut frontier = Vec::new();
        Self::extend_frontier(&grid, start, &mut frontier);

        grid.highlight(start, true);
        scheduler.step(&grid)?;
        grid.highlight(start, false);

        while !frontier.is_empty() {
            let current = frontier.swap_remove(rng.gen_range(0..frontier.len()));

            let visited_neighbors = grid
                .neighbors(current)
                .into_iter()
                .filter(|&cell| grid.is_visited(cell))
                .collect::<SmallVec<[_; 4]>>();
            // frontier cells border the visited region by construction
            let &neighbor = visited_neighbors.choose(rng).unwrap();

            grid.remove_wall_between(current, neighbor);
            grid.visit(current);
            visited += 1;
            Self::extend_frontier(&grid, current, &mut frontier);

            grid.highlight(current, true);
            scheduler.handle().lock().done = visited;
            scheduler.step(&grid)?;
            grid.highlight(current, false);
        }

        scheduler.handle().lock().finish();

        Ok(grid)
    }
}
