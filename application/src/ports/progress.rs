//! Progress notification port
//!
//! Defines the interface for reporting progress while a question set is
//! being fetched.

use trivia_domain::FetchDescriptor;

/// Callback for progress updates during question set assembly
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain text, nothing).
pub trait FetchProgressNotifier: Send + Sync {
    /// Called once before any fetch is issued
    fn on_assembly_start(&self, total_fetches: usize);

    /// Called when one fetch finishes. `received` is `None` when the
    /// fetch failed or timed out.
    fn on_fetch_complete(&self, descriptor: &FetchDescriptor, received: Option<usize>);

    /// Called after the combined set has been shuffled
    fn on_assembly_complete(&self, question_count: usize);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl FetchProgressNotifier for NoProgress {
    fn on_assembly_start(&self, _total_fetches: usize) {}
    fn on_fetch_complete(&self, _descriptor: &FetchDescriptor, _received: Option<usize>) {}
    fn on_assembly_complete(&self, _question_count: usize) {}
}
