use std::sync::{Arc, Mutex, MutexGuard, RwLock};

/// Cooperative stop flag. Cloneable and thread-safe, so any holder can
/// request cancellation while the generation thread polls it at step
/// boundaries.
#[derive(Clone, Debug)]
pub struct Flag(Arc<RwLock<bool>>);

impl Flag {
    pub fn new() -> Self {
        Flag(Arc::new(RwLock::new(false)))
    }

    pub fn stop(&self) {
        *self.0.write().unwrap() = true;
    }

    pub fn is_stopped(&self) -> bool {
        *self.0.read().unwrap()
    }
}

impl Default for Flag {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared view of a single generation run: work counters plus the stop
/// flag. Cancellation through the handle is terminal for the run it was
/// created for.
#[derive(Clone)]
pub struct ProgressHandle {
    progress: Arc<Mutex<Progress>>,
    flag: Flag,
}

impl ProgressHandle {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            progress: Arc::new(Mutex::new(Progress::new_empty())),
            flag: Flag::new(),
        }
    }

    pub fn lock(&self) -> MutexGuard<Progress> {
        self.progress.lock().unwrap()
    }

    pub fn progress(&self) -> Progress {
        *self.lock()
    }

    pub fn stop(&self) {
        self.flag.stop();
    }

    pub fn is_stopped(&self) -> bool {
        self.flag.is_stopped()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Progress {
    pub done: usize,
    pub from: usize,
    pub is_done: bool,
}

impl Progress {
    pub fn new(done: usize, from: usize) -> Self {
        Self {
            done,
            from,
            is_done: false,
        }
    }

    pub fn new_empty() -> Self {
        Self::new(0, 0)
    }

    pub fn percent(&self) -> f32 {
        self.done as f32 / self.from as f32
    }

    pub fn finish(&mut self) {
        self.done = self.from;
        self.is_done = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_is_visible_through_clones() {
        let handle = ProgressHandle::new();
        let other = handle.clone();
        assert!(!other.is_stopped());
        handle.stop();
        assert!(other.is_stopped());
    }

    #[test]
    fn finish_completes_the_counter() {
        let mut progress = Progress::new(3, 10);
        progress.finish();
        assert_eq!(progress.done, 10);
        assert!(progress.is_done);
        assert_eq!(progress.percent(), 1.0);
    }
}
