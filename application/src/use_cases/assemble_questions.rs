//! Assemble Questions use case.
//!
//! Turns a list of [`FetchDescriptor`]s into one shuffled question set:
//!
//! 1. Fetch every descriptor from the [`QuestionBank`] (sequentially or
//!    concurrently, see [`FetchMode`])
//! 2. Drop failed, timed-out, or empty fetches with a warning
//! 3. Sanitize each record into a [`Question`]
//! 4. Shuffle the combined set so order reveals nothing about the source
//!
//! A short or even empty result is a valid outcome, not an error.

use crate::config::{FetchMode, FetchParams};
use crate::ports::progress::{FetchProgressNotifier, NoProgress};
use crate::ports::question_bank::{QuestionBank, QuestionBankError};
use futures::future::join_all;
use rand::seq::SliceRandom;
use std::sync::Arc;
use tracing::{debug, info, warn};
use trivia_domain::{FetchDescriptor, Question, RawQuestion, TextSanitizer};

/// Use case for assembling a question set from the question bank.
#[derive(Clone)]
pub struct AssembleQuestionsUseCase {
    bank: Arc<dyn QuestionBank>,
    sanitizer: Arc<dyn TextSanitizer>,
    params: FetchParams,
}

impl AssembleQuestionsUseCase {
    pub fn new(bank: Arc<dyn QuestionBank>, sanitizer: Arc<dyn TextSanitizer>) -> Self {
        Self {
            bank,
            sanitizer,
            params: FetchParams::default(),
        }
    }

    /// Create with explicit fetch parameters.
    pub fn with_params(mut self, params: FetchParams) -> Self {
        self.params = params;
        self
    }

    /// Assemble without progress reporting.
    pub async fn execute(&self, descriptors: &[FetchDescriptor]) -> Vec<Question> {
        self.execute_with_progress(descriptors, &NoProgress).await
    }

    /// Assemble with progress callbacks.
    pub async fn execute_with_progress(
        &self,
        descriptors: &[FetchDescriptor],
        progress: &dyn FetchProgressNotifier,
    ) -> Vec<Question> {
        info!(
            "Assembling question set from {} fetch(es), {:?} mode",
            descriptors.len(),
            self.params.mode
        );
        progress.on_assembly_start(descriptors.len());

        let batches = match self.params.mode {
            FetchMode::Sequential => {
                let mut batches = Vec::with_capacity(descriptors.len());
                for descriptor in descriptors {
                    batches.push(self.fetch_one(descriptor, progress).await);
                }
                batches
            }
            FetchMode::Concurrent => {
                join_all(
                    descriptors
                        .iter()
                        .map(|descriptor| self.fetch_one(descriptor, progress)),
                )
                .await
            }
        };

        let mut questions = self.normalize(batches);
        questions.shuffle(&mut rand::rng());

        let requested: usize = descriptors.iter().map(|d| d.amount()).sum();
        if questions.len() < requested {
            warn!(
                "Assembled {} of {} requested questions",
                questions.len(),
                requested
            );
        } else {
            info!("Assembled {} questions", questions.len());
        }
        progress.on_assembly_complete(questions.len());

        questions
    }

    /// Fetch a single descriptor. Every failure collapses to an empty batch.
    async fn fetch_one(
        &self,
        descriptor: &FetchDescriptor,
        progress: &dyn FetchProgressNotifier,
    ) -> Vec<RawQuestion> {
        debug!("Fetching {}", descriptor);

        let result = match self.params.timeout {
            Some(limit) => tokio::time::timeout(limit, self.bank.fetch(descriptor))
                .await
                .unwrap_or(Err(QuestionBankError::Timeout)),
            None => self.bank.fetch(descriptor).await,
        };

        match result {
            Ok(records) => {
                if records.len() < descriptor.amount() {
                    debug!(
                        "Fetch for {} returned only {} record(s)",
                        descriptor,
                        records.len()
                    );
                }
                progress.on_fetch_complete(descriptor, Some(records.len()));
                records
            }
            Err(e) => {
                warn!("Fetch for {} failed: {}", descriptor, e);
                progress.on_fetch_complete(descriptor, None);
                Vec::new()
            }
        }
    }

    fn normalize(&self, batches: Vec<Vec<RawQuestion>>) -> Vec<Question> {
        batches
            .into_iter()
            .flatten()
            .filter_map(
                |raw| match Question::from_raw(raw, self.sanitizer.as_ref()) {
                    Ok(question) => Some(question),
                    Err(e) => {
                        warn!("Skipping unusable record: {}", e);
                        None
                    }
                },
            )
            .collect()
    }
}
