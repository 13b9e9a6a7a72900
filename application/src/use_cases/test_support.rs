//! Shared mocks for use case tests.

use crate::ports::question_bank::{QuestionBank, QuestionBankError};
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;
use trivia_domain::{FetchDescriptor, RawQuestion};

pub fn raw(text: &str) -> RawQuestion {
    RawQuestion {
        question: text.to_string(),
        correct_answer: format!("{text} right"),
        incorrect_answers: vec![
            format!("{text} wrong 1"),
            format!("{text} wrong 2"),
            format!("{text} wrong 3"),
        ],
        difficulty: "medium".to_string(),
        category: "General Knowledge".to_string(),
    }
}

/// Serves `amount` records per descriptor, named `Q<category>-<n>`.
///
/// Sub-category `0` stands for an unfiltered fetch.
pub struct StubBank {
    failing: Vec<u32>,
    short_by: usize,
    delay: Option<Duration>,
    pub calls: Mutex<Vec<FetchDescriptor>>,
}

impl StubBank {
    pub fn new() -> Self {
        Self {
            failing: Vec::new(),
            short_by: 0,
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_for(mut self, sub_category: u32) -> Self {
        self.failing.push(sub_category);
        self
    }

    /// Return this many fewer records than requested
    pub fn short_by(mut self, n: usize) -> Self {
        self.short_by = n;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl QuestionBank for StubBank {
    async fn fetch(
        &self,
        descriptor: &FetchDescriptor,
    ) -> Result<Vec<RawQuestion>, QuestionBankError> {
        self.calls.lock().unwrap().push(*descriptor);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let category = descriptor.sub_category().map(|id| id.value()).unwrap_or(0);
        if self.failing.contains(&category) {
            return Err(QuestionBankError::ConnectionError(format!(
                "category {category} unreachable"
            )));
        }

        let amount = descriptor.amount().saturating_sub(self.short_by);
        Ok((0..amount)
            .map(|n| raw(&format!("Q{category}-{n}")))
            .collect())
    }
}
