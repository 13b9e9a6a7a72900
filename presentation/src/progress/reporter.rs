//! Progress reporting for question fetching

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Mutex, PoisonError};
use trivia_application::FetchProgressNotifier;
use trivia_domain::FetchDescriptor;

/// Reports fetch progress with a progress bar on stderr
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn fetch_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn fetch_status(descriptor: &FetchDescriptor, received: Option<usize>) -> String {
        match received {
            Some(count) => format!("{} {} ({} received)", "v".green(), descriptor, count),
            None => format!("{} {} (failed)", "x".red(), descriptor),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchProgressNotifier for ProgressReporter {
    fn on_assembly_start(&self, total_fetches: usize) {
        let pb = ProgressBar::new(total_fetches as u64);
        pb.set_style(Self::fetch_style());
        pb.set_prefix("Fetching questions");
        pb.set_message("Starting...");

        *self.bar.lock().unwrap_or_else(PoisonError::into_inner) = Some(pb);
    }

    fn on_fetch_complete(&self, descriptor: &FetchDescriptor, received: Option<usize>) {
        if let Some(pb) = self
            .bar
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            pb.set_message(Self::fetch_status(descriptor, received));
            pb.inc(1);
        }
    }

    fn on_assembly_complete(&self, question_count: usize) {
        if let Some(pb) = self.bar.lock().unwrap_or_else(PoisonError::into_inner).take() {
            pb.finish_with_message(format!("{} questions ready", question_count.to_string().green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl FetchProgressNotifier for SimpleProgress {
    fn on_assembly_start(&self, total_fetches: usize) {
        eprintln!(
            "{} {} ({} requests)",
            "->".cyan(),
            "Fetching questions".bold(),
            total_fetches
        );
    }

    fn on_fetch_complete(&self, descriptor: &FetchDescriptor, received: Option<usize>) {
        eprintln!("  {}", ProgressReporter::fetch_status(descriptor, received));
    }

    fn on_assembly_complete(&self, question_count: usize) {
        eprintln!("  {} questions ready", question_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> FetchDescriptor {
        FetchDescriptor::new(None, None, 10).unwrap()
    }

    #[test]
    fn test_fetch_status_text() {
        let ok = ProgressReporter::fetch_status(&descriptor(), Some(10));
        assert!(ok.contains("(10 received)"));
        let failed = ProgressReporter::fetch_status(&descriptor(), None);
        assert!(failed.contains("(failed)"));
    }

    #[test]
    fn test_reporter_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_assembly_start(2);
        reporter.on_fetch_complete(&descriptor(), Some(10));
        reporter.on_fetch_complete(&descriptor(), None);
        assert_eq!(
            reporter
                .bar
                .lock()
                .unwrap()
                .as_ref()
                .map(|pb| pb.position()),
            Some(2)
        );
        reporter.on_assembly_complete(10);
        assert!(reporter.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_complete_without_start_is_noop() {
        let reporter = ProgressReporter::default();
        reporter.on_fetch_complete(&descriptor(), Some(1));
        reporter.on_assembly_complete(0);
    }
}
