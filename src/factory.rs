use std::{sync::Arc, time::Duration};

use rand::{seq::SliceRandom, thread_rng, Rng, RngCore, SeedableRng};

use crate::{
    dims::Dims,
    error::GenerationError,
    generators::{
        AldousBroder, BinaryTree, DepthFirstSearch, Ellers, HuntAndKill, MazeGenerator, Params,
        Prims, Random, RecursiveDivision, RndKruskals, Sidewinder, Wilsons,
    },
    grid::Grid,
    progress::ProgressHandle,
    registry::Registry,
    scheduler::StepScheduler,
};

/// Metadata describing one registered algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub display_name: &'static str,
    pub complexity: &'static str,
    pub description: &'static str,
}

struct AlgorithmEntry {
    info: AlgorithmInfo,
    generator: Arc<dyn MazeGenerator>,
}

/// Binds algorithm ids to generators and their metadata, and turns a
/// `(id, size)` request into a runnable [`GenerationJob`].
pub struct MazeFactory {
    registry: Registry<AlgorithmEntry>,
}

impl MazeFactory {
    /// A factory with all built-in algorithms registered.
    pub fn new() -> Self {
        let mut factory = Self {
            registry: Registry::new(),
        };

        factory.register(
            "recursive-backtracker",
            AlgorithmInfo {
                display_name: "Recursive Backtracker",
                complexity: "O(n)",
                description: "Depth-first carving with backtracking. Walks to random \
                    unvisited neighbors and backs up when boxed in, producing long \
                    winding corridors.",
            },
            DepthFirstSearch,
        );
        factory.register(
            "prims",
            AlgorithmInfo {
                display_name: "Prim's Algorithm",
                complexity: "O(n log n)",
                description: "Grows the maze outward from one cell, repeatedly \
                    connecting a random frontier cell to the visited region, like a \
                    randomized minimum spanning tree.",
            },
            Prims,
        );
        factory.register(
            "hunt-and-kill",
            AlgorithmInfo {
                display_name: "Hunt and Kill",
                complexity: "O(n\u{b2})",
                description: "Random-walks until stuck, then scans row by row for an \
                    unvisited cell next to the carved region and walks on from there. \
                    Mixes twisty sections with straight scans.",
            },
            HuntAndKill,
        );
        factory.register(
            "wilson",
            AlgorithmInfo {
                display_name: "Wilson's Algorithm",
                complexity: "O(n\u{b2})",
                description: "Loop-erased random walks from unvisited cells into the \
                    maze. Samples uniformly over all possible mazes of the grid, with \
                    no directional bias.",
            },
            Wilsons,
        );
        factory.register(
            "eller",
            AlgorithmInfo {
                display_name: "Eller's Algorithm",
                complexity: "O(n)",
                description: "Builds the maze one row at a time with per-row cell \
                    sets, merging sideways and downward. Only two rows of state exist \
                    at once, so height is effectively unbounded.",
            },
            Ellers,
        );
        factory.register(
            "sidewinder",
            AlgorithmInfo {
                display_name: "Sidewinder",
                complexity: "O(n)",
                description: "Sweeps each row gathering eastward runs and carving one \
                    northern passage per run. The top row comes out as a single open \
                    corridor.",
            },
            Sidewinder,
        );
        factory.register(
            "binary-tree",
            AlgorithmInfo {
                display_name: "Binary Tree",
                complexity: "O(n)",
                description: "Every cell carves either north or east at random. \
                    Trivially simple, with a strong diagonal bias and straight \
                    corridors along the top and right edges.",
            },
            BinaryTree,
        );
        factory.register(
            "kruskal",
            AlgorithmInfo {
                display_name: "Kruskal's Algorithm",
                complexity: "O(n log n)",
                description: "Shuffles every interior wall and knocks it down \
                    whenever the two sides are still in different components, tracked \
                    by a disjoint set. Organic, unbiased texture.",
            },
            RndKruskals,
        );
        factory.register(
            "aldous-broder",
            AlgorithmInfo {
                display_name: "Aldous-Broder Algorithm",
                complexity: "O(n\u{b3})",
                description: "A pure random walk that carves on first entry to each \
                    cell. Uniform over all mazes of the grid but can wander for a \
                    long time on larger grids.",
            },
            AldousBroder,
        );
        factory.register(
            "recursive-division",
            AlgorithmInfo {
                display_name: "Recursive Division",
                complexity: "O(n log n)",
                description: "Starts from an open field and recursively walls it into \
                    chambers, leaving one passage per wall. Produces long straight \
                    walls and a geometric look.",
            },
            RecursiveDivision,
        );

        factory
    }

    fn register(
        &mut self,
        id: &str,
        info: AlgorithmInfo,
        generator: impl MazeGenerator + 'static,
    ) {
        self.registry.register(
            id.to_string(),
            AlgorithmEntry {
                info,
                generator: Arc::new(generator),
            },
        );
    }

    /// Builds a job for the given algorithm. `cell_size` is a rendering
    /// hint carried through for consumers; the engine itself ignores it.
    pub fn create(
        &self,
        id: &str,
        size: Dims,
        cell_size: u32,
    ) -> Result<GenerationJob, GenerationError> {
        let entry = self
            .registry
            .get(id)
            .ok_or_else(|| GenerationError::UnknownAlgorithm(id.to_string()))?;

        log::debug!("created `{id}` generation job for {size:?}");

        Ok(GenerationJob {
            id: id.to_string(),
            generator: entry.generator.clone(),
            size,
            cell_size,
            seed: None,
            delay: Duration::ZERO,
            params: Params::new(),
            handle: ProgressHandle::new(),
        })
    }

    pub fn describe(&self, id: &str) -> Option<&AlgorithmInfo> {
        self.registry.get(id).map(|entry| &entry.info)
    }

    /// All registered ids, sorted for stable presentation.
    pub fn algorithm_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.registry.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// A uniformly random registered id.
    pub fn random_id(&self, rng: &mut dyn RngCore) -> &str {
        *self
            .algorithm_ids()
            .choose(rng)
            .expect("registry is never empty")
    }
}

impl Default for MazeFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// One generation run: an algorithm bound to dimensions plus run options.
/// The job is consumed by `generate*`; a cancelled run stays cancelled,
/// retrying means building a fresh job.
pub struct GenerationJob {
    id: String,
    generator: Arc<dyn MazeGenerator>,
    size: Dims,
    cell_size: u32,
    seed: Option<u64>,
    delay: Duration,
    params: Params,
    handle: ProgressHandle,
}

impl GenerationJob {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pause inserted after every step; zero (the default) runs headless.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    pub fn with_param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.insert(key, value);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn size(&self) -> Dims {
        self.size
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Clone this before starting the run to poll progress or request
    /// cancellation from another thread.
    pub fn handle(&self) -> &ProgressHandle {
        &self.handle
    }

    /// Runs to completion (or cancellation) without an observer.
    pub fn generate(self) -> Result<Grid, GenerationError> {
        let mut scheduler = StepScheduler::new(self.handle.clone(), self.delay);
        self.run(&mut scheduler)
    }

    /// Runs with a step observer, which receives the grid snapshot after
    /// every single mutation. The observer is called synchronously on the
    /// generating thread.
    pub fn generate_observed(self, observer: impl FnMut(&Grid)) -> Result<Grid, GenerationError> {
        let mut scheduler = StepScheduler::with_observer(self.handle.clone(), self.delay, observer);
        self.run(&mut scheduler)
    }

    fn run(&self, scheduler: &mut StepScheduler<'_>) -> Result<Grid, GenerationError> {
        let seed = self.seed.unwrap_or_else(|| thread_rng().gen());
        let mut rng = Random::seed_from_u64(seed);

        log::debug!("generating `{}` maze, seed {seed}", self.id);

        self.generator
            .generate(self.size, &mut rng, scheduler, &self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_algorithms_are_registered() {
        let factory = MazeFactory::new();
        let ids = factory.algorithm_ids();
        assert_eq!(ids.len(), 10);
        assert!(ids.contains(&"wilson"));
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let factory = MazeFactory::new();
        assert_eq!(
            factory
                .create("does-not-exist", Dims(3, 3), 16)
                .err()
                .unwrap(),
            GenerationError::UnknownAlgorithm("does-not-exist".to_string())
        );
        assert!(factory.describe("does-not-exist").is_none());
    }

    #[test]
    fn describe_returns_the_metadata() {
        let factory = MazeFactory::new();
        let info = factory.describe("wilson").unwrap();
        assert_eq!(info.display_name, "Wilson's Algorithm");
        assert_eq!(info.complexity, "O(n\u{b2})");
    }

    #[test]
    fn random_id_is_a_member() {
        let factory = MazeFactory::new();
        let mut rng = Random::seed_from_u64(7);
        for _ in 0..20 {
            let id = factory.random_id(&mut rng);
            assert!(factory.describe(id).is_some());
        }
    }
}
