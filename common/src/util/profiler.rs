use std::time::Instant;

/// Logs how long a stage took when it goes out of scope.
pub struct ScopedTimer {
    stage: &'static str,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(stage: &'static str) -> Self {
        log::debug!("{} started", stage);
        Self {
            stage,
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        log::info!("{} took {:?}", self.stage, self.start.elapsed());
    }
}
