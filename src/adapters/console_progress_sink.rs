use std::sync::Mutex;

use indicatif::{ProgressBar, ProgressStyle};

use crate::core::interfaces::adapters::ProgressSink;
use crate::core::models::{JobStatus, ProgressUpdate};

pub struct ConsoleProgressSink {
    bar: Mutex<Option<ProgressBar>>,
}

impl ConsoleProgressSink {
    pub fn build() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn with_bar(&self, apply: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock() {
            if let Some(bar) = guard.as_ref() {
                apply(bar);
            }
        }
    }
}

impl ProgressSink for ConsoleProgressSink {
    fn on_job_started(&self, total_files: usize) {
        let bar = ProgressBar::new(total_files as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} Extracting [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
        {
            bar.set_style(style.progress_chars("##-"));
        }
        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(bar);
        }
    }

    fn on_file_started(&self, file_name: &str) {
        let message = format!("Processing: {}", file_name);
        self.with_bar(move |bar| bar.set_message(message));
    }

    fn on_progress(&self, update: &ProgressUpdate) {
        log::debug!("[PROGRESS] {}", update.describe());
        let position = update.processed as u64;
        self.with_bar(move |bar| bar.set_position(position));
    }

    fn on_job_finished(&self, status: JobStatus) {
        self.with_bar(move |bar| match status {
            JobStatus::Completed => bar.finish_with_message("Extraction finished"),
            JobStatus::Cancelled => bar.abandon_with_message("Extraction cancelled"),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_sink_ignores_events_before_job_start() {
        let sink = ConsoleProgressSink::build();

        // No bar exists yet; these must not panic.
        sink.on_file_started("a.png");
        sink.on_progress(&ProgressUpdate {
            processed: 1,
            total: 2,
            percent: 50.0,
            elapsed: Duration::from_secs(1),
            estimated_remaining: None,
        });
        sink.on_job_finished(JobStatus::Completed);
    }

    #[test]
    fn test_sink_tracks_position_across_a_job() {
        let sink = ConsoleProgressSink::build();

        sink.on_job_started(2);
        sink.on_file_started("a.png");
        sink.on_progress(&ProgressUpdate {
            processed: 1,
            total: 2,
            percent: 50.0,
            elapsed: Duration::from_secs(1),
            estimated_remaining: Some(Duration::from_secs(1)),
        });

        {
            let guard = sink.bar.lock().unwrap();
            let bar = guard.as_ref().unwrap();
            assert_eq!(bar.position(), 1);
        }

        sink.on_job_finished(JobStatus::Completed);

        let guard = sink.bar.lock().unwrap();
        assert!(guard.as_ref().unwrap().is_finished());
    }
}
