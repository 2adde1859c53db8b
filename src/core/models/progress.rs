use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct ProgressState {
    processed: usize,
    total: usize,
    started_at: Instant,
}

impl ProgressState {
    pub fn start(total: usize) -> Self {
        Self {
            processed: 0,
            total,
            started_at: Instant::now(),
        }
    }

    pub fn advance(&mut self) {
        if self.processed < self.total {
            self.processed += 1;
        }
    }

    pub fn processed(&self) -> usize {
        self.processed
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn snapshot(&self) -> ProgressUpdate {
        let elapsed = self.started_at.elapsed();
        ProgressUpdate {
            processed: self.processed,
            total: self.total,
            percent: self.percent(),
            elapsed,
            estimated_remaining: self.estimate_remaining(elapsed),
        }
    }

    fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.processed as f64 / self.total as f64) * 100.0
    }

    fn estimate_remaining(&self, elapsed: Duration) -> Option<Duration> {
        if self.processed == 0 {
            return None;
        }
        let average_per_file = elapsed.as_secs_f64() / self.processed as f64;
        let remaining_files = (self.total - self.processed) as f64;
        Some(Duration::from_secs_f64(average_per_file * remaining_files))
    }
}

#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    pub processed: usize,
    pub total: usize,
    pub percent: f64,
    pub elapsed: Duration,
    pub estimated_remaining: Option<Duration>,
}

impl ProgressUpdate {
    pub fn describe(&self) -> String {
        format!(
            "Progress: {}/{} ({:.2}%) | Time Left: {}",
            self.processed,
            self.total,
            self.percent,
            self.estimated_remaining
                .map(format_duration)
                .unwrap_or_else(|| "--".to_string())
        )
    }
}

pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}m {}s", minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_state_starts_at_zero() {
        let state = ProgressState::start(5);

        assert_eq!(state.processed(), 0);
        assert_eq!(state.total(), 5);
        assert_eq!(state.snapshot().percent, 0.0);
    }

    #[test]
    fn test_advance_increments_processed_count() {
        let mut state = ProgressState::start(3);

        state.advance();
        state.advance();

        assert_eq!(state.processed(), 2);
        let update = state.snapshot();
        assert!((update.percent - 66.66).abs() < 0.01);
    }

    #[test]
    fn test_advance_never_exceeds_total() {
        let mut state = ProgressState::start(2);

        state.advance();
        state.advance();
        state.advance();

        assert_eq!(state.processed(), 2);
        assert_eq!(state.snapshot().percent, 100.0);
    }

    #[test]
    fn test_estimated_remaining_is_none_before_first_file() {
        let state = ProgressState::start(4);

        assert!(state.snapshot().estimated_remaining.is_none());
    }

    #[test]
    fn test_estimated_remaining_is_present_after_progress() {
        let mut state = ProgressState::start(4);
        state.advance();

        assert!(state.snapshot().estimated_remaining.is_some());
    }

    #[test]
    fn test_percent_is_zero_for_empty_total() {
        let state = ProgressState::start(0);

        assert_eq!(state.snapshot().percent, 0.0);
    }

    #[test]
    fn test_format_duration_renders_minutes_and_seconds() {
        assert_eq!(format_duration(Duration::from_secs(0)), "0m 0s");
        assert_eq!(format_duration(Duration::from_secs(59)), "0m 59s");
        assert_eq!(format_duration(Duration::from_secs(192)), "3m 12s");
    }

    #[test]
    fn test_describe_includes_counts_and_percent() {
        let mut state = ProgressState::start(5);
        state.advance();
        state.advance();

        let description = state.snapshot().describe();

        assert!(description.starts_with("Progress: 2/5 (40.00%)"));
    }
}
