use rand::{seq::SliceRandom, RngCore};

use super::{MazeGenerator, Params};
use crate::{
    dims::Dims, error::GenerationError, grid::Grid, scheduler::StepScheduler,
};

/// Wilson's algorithm: loop-erased random walks from unvisited cells into
/// the visited region. Samples uniformly over all spanning trees of the
/// grid graph.
#[derive(Debug)]
pub struct Wilsons;

impl MazeGenerator for Wilsons {
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

        // the first cell seeds the visited region
        grid.visit(Dims::ZERO);
        let mut visited = 1;
        scheduler.handle().lock().done = visited;
        scheduler.step(&grid)?;

        while visited < cell_count {
            let unvisited = grid
                .iter_pos()
                .filter(|&pos| !grid.is_visited(pos))
                .collect::<Vec<_>>();
            let &start = unvisited.choose(rng).unwrap();

            // walk until the visited region is hit, erasing loops as they
            // form; the path highlight tracks the surviving prefix
            let mut path = vec![start];
            grid.highlight(start, true);
            scheduler.step(&grid)?;

            let mut current = start;
            while !grid.is_visited(current) {
                let next = *grid.neighbors(current).choose(rng).unwrap();

                if let Some(at) = path.iter().position(|&cell| cell == next) {
                    for &cell in &path[at + 1..] {
                        grid.highlight(cell, false);
                    }
                    path.truncate(at + 1);
                } else {
                    path.push(next);
                    grid.highlight(next, true);
                }

                current = next;
                scheduler.step(&grid)?;
            }

            // carve the whole surviving path into the maze
            for i in 0..path.len() - 1 {
                grid.remove_wall_between(path[i], path[i + 1]);
                grid.visit(path[i]);
                grid.highlight(path[i], false);
                visited += 1;
                scheduler.handle().lock().done = visited;
                scheduler.step(&grid)?;
            }
            grid.highlight(*path.last().unwrap(), false);
        }

        scheduler.handle().lock().finish();

        Ok(grid)
    }
}
