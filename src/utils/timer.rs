use std::time::{Duration, Instant};

/// Scoped timer around a call site.
///
/// Emits an `info` event with the label and elapsed milliseconds when dropped.
///
/// ```
/// use review_knn::utils::timer::ScopedTimer;
///
/// let elapsed = {
///     let timer = ScopedTimer::new("build index");
///     // ... work ...
///     timer.elapsed()
/// };
/// assert!(elapsed.as_secs() < 60);
/// ```
#[derive(Debug)]
pub struct ScopedTimer {
    label: &'static str,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        tracing::info!(
            label = self.label,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "time taken by {}",
            self.label
        );
    }
}
