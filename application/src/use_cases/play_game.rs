//! Play Game use case: the game session state machine.
//!
//! # Flow
//!
//! ```text
//! Setup ──▶ Presenting ──▶ Scoring ──┬──▶ Presenting (queue non-empty)
//!   ▲                                └──▶ Summary ──▶ Replay ──┬──▶ Setup
//!   └──────────────────────────────────────────────────────────┘
//!                                                    Replay ──▶ Terminated
//! ```
//!
//! - **Setup** reads [`GameSettings`], plans and assembles the question set,
//!   and loads it into a FIFO queue. Stats are reset.
//! - **Presenting** pops the front question and shuffles its options.
//! - **Scoring** judges the selection and reports the verdict.
//! - **Summary** reports the playthrough's [`SessionStats`].
//! - **Replay** asks whether to go again.
//!
//! An empty question set is not an error: Presenting goes straight to
//! Summary and the player sees 0/0.

use crate::ports::game_console::{ConsoleError, GameConsole, QuestionPrompt, Verdict};
use crate::ports::progress::{FetchProgressNotifier, NoProgress};
use crate::use_cases::assemble_questions::AssembleQuestionsUseCase;
use std::collections::VecDeque;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use trivia_domain::{AnswerOptions, Question, SessionStats, plan_fetches};

/// Errors that end a game session abnormally.
#[derive(Error, Debug)]
pub enum PlayGameError {
    #[error("Console error: {0}")]
    Console(#[from] ConsoleError),
}

/// Where a [`GameSession`] is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    Setup,
    Presenting,
    Scoring {
        options: AnswerOptions,
        selection: usize,
    },
    Summary,
    Replay,
    Terminated,
}

impl GameState {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::Setup => "setup",
            GameState::Presenting => "presenting",
            GameState::Scoring { .. } => "scoring",
            GameState::Summary => "summary",
            GameState::Replay => "replay",
            GameState::Terminated => "terminated",
        }
    }
}

/// One player's run of the game, possibly over several playthroughs.
pub struct GameSession<C: GameConsole> {
    assembler: AssembleQuestionsUseCase,
    console: C,
    progress: Arc<dyn FetchProgressNotifier>,
    state: GameState,
    queue: VecDeque<Question>,
    total: usize,
    asked: usize,
    stats: SessionStats,
    completed: Vec<SessionStats>,
}

impl<C: GameConsole> GameSession<C> {
    pub fn new(assembler: AssembleQuestionsUseCase, console: C) -> Self {
        Self {
            assembler,
            console,
            progress: Arc::new(NoProgress),
            state: GameState::Setup,
            queue: VecDeque::new(),
            total: 0,
            asked: 0,
            stats: SessionStats::new(),
            completed: Vec::new(),
        }
    }

    /// Create with a fetch progress notifier.
    pub fn with_progress(mut self, progress: Arc<dyn FetchProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.state, GameState::Terminated)
    }

    /// Score of the playthrough in progress
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Questions still waiting in the current playthrough
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Final stats of every playthrough that reached its summary
    pub fn completed(&self) -> &[SessionStats] {
        &self.completed
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Drive the session until it terminates.
    ///
    /// A closed input stream ends the session normally; any other console
    /// failure is returned.
    pub async fn run(&mut self) -> Result<&[SessionStats], PlayGameError> {
        while !self.is_terminated() {
            match self.step().await {
                Ok(()) => {}
                Err(PlayGameError::Console(e)) if e.is_closed() => {
                    info!("Console input closed, ending session");
                    self.state = GameState::Terminated;
                }
                Err(e) => return Err(e),
            }
        }

        self.console.farewell();
        Ok(&self.completed)
    }

    /// Perform exactly one state transition.
    ///
    /// On error the session is left in [`GameState::Terminated`].
    pub async fn step(&mut self) -> Result<(), PlayGameError> {
        let current = std::mem::replace(&mut self.state, GameState::Terminated);
        debug!("Game state: {}", current.as_str());

        self.state = match current {
            GameState::Setup => self.setup().await?,
            GameState::Presenting => self.present()?,
            GameState::Scoring { options, selection } => self.score(&options, selection),
            GameState::Summary => {
                self.console.show_summary(&self.stats);
                self.completed.push(self.stats);
                info!(
                    "Playthrough finished: {} correct, {} incorrect",
                    self.stats.correct, self.stats.incorrect
                );
                GameState::Replay
            }
            GameState::Replay => {
                if self.console.ask_replay()? {
                    GameState::Setup
                } else {
                    GameState::Terminated
                }
            }
            GameState::Terminated => GameState::Terminated,
        };

        Ok(())
    }

    async fn setup(&mut self) -> Result<GameState, PlayGameError> {
        self.stats.reset();
        self.queue.clear();
        self.asked = 0;

        let settings = self.console.read_settings()?;
        info!(
            "New game: {} {} question(s), {} difficulty",
            settings.question_count(),
            settings.category(),
            settings.difficulty()
        );
        self.console.announce_game(&settings);

        let descriptors = plan_fetches(&settings);
        let questions = self
            .assembler
            .execute_with_progress(&descriptors, self.progress.as_ref())
            .await;

        self.total = questions.len();
        self.console
            .questions_ready(settings.question_count(), questions.len());
        self.queue = questions.into();

        Ok(GameState::Presenting)
    }

    fn present(&mut self) -> Result<GameState, PlayGameError> {
        let Some(question) = self.queue.pop_front() else {
            return Ok(GameState::Summary);
        };
        self.asked += 1;

        let options = AnswerOptions::shuffled(&question, &mut rand::rng());
        let selection = self.console.ask_question(&QuestionPrompt {
            number: self.asked,
            total: self.total,
            question: &question,
            options: options.options(),
        })?;

        Ok(GameState::Scoring { options, selection })
    }

    fn score(&mut self, options: &AnswerOptions, selection: usize) -> GameState {
        let outcome = options.judge(selection);
        self.stats.record(outcome);
        debug!(
            "Question {}/{}: selection {} -> {:?}",
            self.asked, self.total, selection, outcome
        );

        self.console.show_verdict(&Verdict {
            outcome,
            correct_answer: options.correct_answer().to_string(),
        });

        if self.queue.is_empty() {
            GameState::Summary
        } else {
            GameState::Presenting
        }
    }
}
