use std::{thread, time::Duration};

use crate::{error::GenerationError, grid::Grid, progress::ProgressHandle};

/// The cooperative execution contract. Generators perform one atomic grid
/// mutation (or highlight change) at a time and then call [`step`], which
///
/// 1. hands the current grid snapshot to the observer (synchronously; the
///    shared borrow keeps it read-only),
/// 2. suspends for the configured delay (skipped when zero, the headless
///    mode tests run in),
/// 3. polls the stop flag and bails out with
///    [`GenerationError::Cancelled`] if cancellation was requested.
///
/// This is the only intended suspension point, so cancellation always
/// lands between mutations and the grid stays wall-symmetric.
///
/// [`step`]: StepScheduler::step
pub struct StepScheduler<'o> {
    handle: ProgressHandle,
    observer: Option<Box<dyn FnMut(&Grid) + 'o>>,
    delay: Duration,
}

impl<'o> StepScheduler<'o> {
    pub fn new(handle: ProgressHandle, delay: Duration) -> Self {
        Self {
            handle,
            observer: None,
            delay,
        }
    }

    pub fn with_observer(
        handle: ProgressHandle,
        delay: Duration,
        observer: impl FnMut(&Grid) + 'o,
    ) -> Self {
        Self {
            handle,
            observer: Some(Box::new(observer)),
            delay,
        }
    }

    /// No observer, no delay. Cancellation still works through the handle.
    pub fn headless(handle: ProgressHandle) -> Self {
        Self::new(handle, Duration::ZERO)
    }

    pub fn handle(&self) -> &ProgressHandle {
        &self.handle
    }

    /// One step boundary; see the type docs for the exact sequence.
    pub fn step(&mut self, grid: &Grid) -> Result<(), GenerationError> {
        if let Some(observer) = self.observer.as_mut() {
            observer(grid);
        }

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        if self.handle.is_stopped() {
            return Err(GenerationError::Cancelled);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dims::Dims;

    #[test]
    fn observer_sees_every_step() {
        let grid = Grid::new(Dims(2, 2)).unwrap();
        let mut seen = 0;
        let mut scheduler =
            StepScheduler::with_observer(ProgressHandle::new(), Duration::ZERO, |_| seen += 1);
        for _ in 0..5 {
            scheduler.step(&grid).unwrap();
        }
        drop(scheduler);
        assert_eq!(seen, 5);
    }

    #[test]
    fn stop_surfaces_at_the_next_boundary() {
        let grid = Grid::new(Dims(2, 2)).unwrap();
        let handle = ProgressHandle::new();
        let mut scheduler = StepScheduler::headless(handle.clone());
        scheduler.step(&grid).unwrap();
        handle.stop();
        assert_eq!(scheduler.step(&grid), Err(GenerationError::Cancelled));
    }
}
