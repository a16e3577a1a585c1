mod aldous_broder;
mod binary_tree;
mod depth_first_search;
mod ellers;
mod hunt_and_kill;
mod prims;
mod recursive_division;
mod rnd_kruskals;
mod sidewinder;
mod wilsons;

pub use aldous_broder::AldousBroder;
pub use binary_tree::BinaryTree;
pub use depth_first_search::DepthFirstSearch;
pub use ellers::Ellers;
pub use hunt_and_kill::HuntAndKill;
pub use prims::Prims;
pub use recursive_division::RecursiveDivision;
pub use rnd_kruskals::RndKruskals;
pub use sidewinder::Sidewinder;
pub use wilsons::Wilsons;

use std::{fmt, str::FromStr};

use hashbrown::HashMap;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::{dims::Dims, error::GenerationError, grid::Grid, scheduler::StepScheduler};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// One maze algorithm. `generate` builds its own grid for `size`, mutates
/// it one step at a time through the scheduler, and on success returns a
/// perfect maze: the absent-wall graph is a spanning tree of the grid.
///
/// Randomness flows only through the injected `rng`, so a fixed seed
/// replays the exact same maze.
pub trait MazeGenerator: fmt::Debug + Sync + Send {
    fn generate(
        &self,
        size: Dims,
        rng: &mut dyn RngCore,
        scheduler: &mut StepScheduler<'_>,
        params: &Params,
    ) -> Result<Grid, GenerationError>;

    /// Rough total for progress reporting; most algorithms do one unit of
    /// work per cell.
    fn guess_step_count(&self, size: Dims) -> usize {
        size.product().max(0) as usize
    }
}

/// String-keyed tuning knobs handed to every generator. Most ignore them;
/// Eller's reads its merge probabilities from here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params {
    map: HashMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.map.insert(key.into(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(|s| s.as_str())
    }

    pub fn parsed<T: FromStr>(&self, key: &str) -> Option<Result<T, T::Err>> {
        self.get(key).map(|s| s.parse())
    }

    pub fn parsed_or_warn<T: FromStr>(&self, key: &str, default: T) -> T {
        match self.parsed(key) {
            None => default,
            Some(Ok(v)) => v,
            Some(Err(_)) => {
                log::warn!("Invalid value for parameter '{}', using default value", key);
                default
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_fall_back_on_garbage() {
        let mut params = Params::new();
        params.insert("chance", "not-a-number");
        params.insert("count", 3);

        assert_eq!(params.parsed_or_warn("chance", 0.5f64), 0.5);
        assert_eq!(params.parsed_or_warn("count", 0u32), 3);
        assert_eq!(params.parsed_or_warn("missing", 7i32), 7);
    }
}
