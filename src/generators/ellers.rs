use hashbrown::HashSet;
use rand::{Rng, RngCore};

use super::{MazeGenerator, Params};
use crate::{
    dims::Dims,
    error::GenerationError,
    grid::{CellWall, Grid},
    scheduler::StepScheduler,
};

/// Eller's algorithm: one row at a time, tracking cell equivalence sets
/// for the active row only, so the working state never exceeds two rows
/// no matter how tall the maze is.
///
/// The merge probabilities are tunable through [`Params`]:
/// `horizontal_merge_chance` (default 0.5) and `vertical_merge_chance`
/// (default 0.3).
#[derive(Debug)]
pub struct Ellers;

/// Rewrites every occurrence of set `from` in the row to `to`.
fn relabel(row: &mut [Option<u64>], from: u64, to: u64) {
    for slot in row.iter_mut() {
        if *slot == Some(from) {
            *slot = Some(to);
        }
    }
}

impl MazeGenerator for Ellers {
    fn generate(
        &self,
        size: Dims,
        rng: &mut dyn RngCore,
        scheduler: &mut StepScheduler<'_>,
        params: &Params,
    ) -> Result<Grid, GenerationError> {
        let mut grid = Grid::new(size)?;
        scheduler.handle().lock().from = self.guess_step_count(size);

        // gen_bool panics outside [0, 1]
        let horizontal_chance = params
            .parsed_or_warn("horizontal_merge_chance", 0.5f64)
            .clamp(0.0, 1.0);
        let vertical_chance = params
            .parsed_or_warn("vertical_merge_chance", 0.3f64)
            .clamp(0.0, 1.0);

        let width = size.0 as usize;
        let mut next_id: u64 = 0;
        // set id per column of the active row; None until assigned
        let mut row: Vec<Option<u64>> = vec![None; width];

        for y in 0..size.1 {
            let last_row = y == size.1 - 1;

            // cells not linked from above start their own singleton set
            for x in 0..size.0 {
                if row[x as usize].is_none() {
                    row[x as usize] = Some(next_id);
                    next_id += 1;
                }
                grid.visit(Dims(x, y));
                grid.highlight(Dims(x, y), true);
                scheduler.handle().lock().done += 1;
                scheduler.step(&grid)?;
                grid.highlight(Dims(x, y), false);
            }

            // join adjacent cells of different sets; probabilistic in the
            // body of the maze, forced on the last row to finish
            // connecting everything
            for x in 0..size.0 - 1 {
                let (left, right) = (row[x as usize].unwrap(), row[x as usize + 1].unwrap());
                if left != right && (last_row || rng.gen_bool(horizontal_chance)) {
                    grid.remove_wall(Dims(x, y), CellWall::Right);
                    relabel(&mut row, right, left);
                    scheduler.step(&grid)?;
                }
            }

            if last_row {
                break;
            }

            // carry sets downward; every set must reach the next row at
            // least once or it would end up sealed off
            let mut next_row: Vec<Option<u64>> = vec![None; width];
            let mut linked: HashSet<u64> = HashSet::new();

            for x in 0..size.0 {
                if rng.gen_bool(vertical_chance) {
                    let id = row[x as usize].unwrap();
                    grid.remove_wall(Dims(x, y), CellWall::Bottom);
                    next_row[x as usize] = Some(id);
                    linked.insert(id);
                    scheduler.step(&grid)?;
                }
            }

            for x in 0..size.0 {
                let id = row[x as usize].unwrap();
                if !linked.contains(&id) {
                    grid.remove_wall(Dims(x, y), CellWall::Bottom);
                    next_row[x as usize] = Some(id);
                    linked.insert(id);
                    scheduler.step(&grid)?;
                }
            }

            row = next_row;
        }

        scheduler.handle().lock().finish();

        Ok(grid)
    }
}
