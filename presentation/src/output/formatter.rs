//! Text formatting for game output

use colored::Colorize;
use trivia_application::{QuestionPrompt, Verdict};
use trivia_domain::SessionStats;
use trivia_domain::core::string::capitalize;

/// Builds the strings the terminal console prints
pub struct GameFormatter;

impl GameFormatter {
    pub fn welcome() -> String {
        "Welcome to Trivia!".cyan().bold().to_string()
    }

    pub fn farewell() -> String {
        "See you next time!".cyan().bold().to_string()
    }

    /// A question followed by numbered entries, one per line
    pub fn menu<'a>(question: &str, entries: impl IntoIterator<Item = (u32, &'a str)>) -> String {
        let mut output = question.to_string();
        for (number, label) in entries {
            output.push_str(&format!("\n {} - {}", number, label));
        }
        output
    }

    /// Header, question text, and numbered options
    pub fn question(prompt: &QuestionPrompt<'_>) -> String {
        let mut output = format!(
            "{}\n{} {}; {} {}\n{}",
            format!("Question {}/{}", prompt.number, prompt.total).dimmed(),
            "Category:".cyan(),
            prompt.question.category(),
            "Difficulty:".cyan(),
            capitalize(prompt.question.difficulty()),
            prompt.question.text().bold()
        );
        for (i, option) in prompt.options.iter().enumerate() {
            output.push_str(&format!("\n{}. {}", i + 1, option));
        }
        output
    }

    pub fn verdict(verdict: &Verdict) -> String {
        if verdict.outcome.is_correct() {
            "Correct!".green().bold().to_string()
        } else {
            format!(
                "{} The correct answer was {}.",
                "Incorrect!".red().bold(),
                verdict.correct_answer
            )
        }
    }

    pub fn summary(stats: &SessionStats) -> String {
        format!(
            "You answered {} questions correctly and {} incorrectly.",
            stats.correct, stats.incorrect
        )
        .bold()
        .to_string()
    }

    /// Shown when fewer questions arrived than were asked for
    pub fn shortfall(requested: usize, available: usize) -> Option<String> {
        if available >= requested {
            return None;
        }
        let message = if available == 0 {
            "No questions could be fetched.".to_string()
        } else {
            format!(
                "Only {} of {} questions could be fetched.",
                available, requested
            )
        };
        Some(message.yellow().to_string())
    }
}
