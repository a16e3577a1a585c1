//! Perfect-maze generation engine.
//!
//! Ten algorithms carve (or erect) walls over a shared rectangular
//! [`Grid`], all driven through a cooperative [`StepScheduler`]: one
//! atomic mutation per step, an observer callback with a read-only grid
//! snapshot after each, and cancellation that lands only at step
//! boundaries. On success every algorithm leaves a perfect maze, a
//! spanning tree of the grid graph with exactly one path between any two
//! cells.
//!
//! ```
//! use mazegen::{Dims, MazeFactory};
//!
//! let factory = MazeFactory::new();
//! let maze = factory
//!     .create("recursive-backtracker", Dims(8, 6), 16)?
//!     .with_seed(42)
//!     .generate()?;
//! assert_eq!(maze.passage_count(), 8 * 6 - 1);
//! # Ok::<(), mazegen::GenerationError>(())
//! ```
//!
//! Rendering, colors and UI live outside this crate; consumers observe
//! snapshots via [`GenerationJob::generate_observed`] and draw them
//! however they like.

pub mod array;
pub mod dims;
pub mod error;
pub mod factory;
pub mod generators;
pub mod grid;
pub mod progress;
pub mod registry;
pub mod scheduler;
pub mod union_find;

pub use dims::Dims;
pub use error::GenerationError;
pub use factory::{AlgorithmInfo, GenerationJob, MazeFactory};
pub use generators::{MazeGenerator, Params, Random};
pub use grid::{Cell, CellWall, Grid};
pub use progress::{Flag, Progress, ProgressHandle};
pub use scheduler::StepScheduler;
