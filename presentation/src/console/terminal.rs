//! Line-oriented terminal console.
//!
//! Every question the player answers is a numbered menu read with a `> `
//! prompt. Bad input is answered with a hint and asked again:
//!
//! ```text
//! How many questions would you like? (5-50)
//! > ten
//! Please only enter a number.
//!
//! How many questions would you like? (5-50)
//! > 70
//! Please enter a number from 5 to 50.
//! > 10
//! ```

use super::prompt::{InputIssue, parse_choice};
use crate::output::formatter::GameFormatter;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use trivia_application::{ConsoleError, GameConsole, QuestionPrompt, Verdict};
use trivia_domain::{
    CategoryGroup, DifficultyChoice, DomainError, GameSettings, MAX_QUESTIONS, MIN_QUESTIONS,
    SessionStats,
};

const PROMPT: &str = "> ";

/// What is shown again after input that is not a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reshow {
    /// Menus repeat their question and entries
    Question,
    /// Trivia questions only repeat the hint and the prompt
    HintOnly,
}

/// [`GameConsole`] over any line reader and writer.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    greeted: bool,
}

impl TerminalConsole<BufReader<Stdin>, Stdout> {
    /// Console on the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            greeted: false,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a line. Display-only output has nowhere to report failure.
    fn say(&mut self, text: &str) {
        let _ = writeln!(self.output, "{}", text);
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        write!(self.output, "{}", PROMPT).map_err(io_error)?;
        self.output.flush().map_err(io_error)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(io_error)?;
        if read == 0 {
            return Err(ConsoleError::Closed);
        }
        Ok(line)
    }

    /// Show `question` and read a number in `lower..=upper`.
    ///
    /// An out-of-range number only asks again; a non-number also shows the
    /// question again when `reshow` says so.
    fn ask_number(
        &mut self,
        question: &str,
        lower: u32,
        upper: u32,
        reshow: Reshow,
    ) -> Result<u32, ConsoleError> {
        self.say(&format!("\n{}", question));
        loop {
            let line = self.read_line()?;
            match parse_choice(&line, lower, upper) {
                Ok(choice) => return Ok(choice),
                Err(issue @ InputIssue::NotANumber) => {
                    self.say(&issue.to_string());
                    if reshow == Reshow::Question {
                        self.say(&format!("\n{}", question));
                    }
                }
                Err(issue @ InputIssue::OutOfRange { .. }) => self.say(&issue.to_string()),
            }
        }
    }

    fn settings_from(
        count: u32,
        category: u32,
        difficulty: u32,
    ) -> Result<GameSettings, DomainError> {
        GameSettings::new(
            count as usize,
            CategoryGroup::from_menu_number(category)?,
            DifficultyChoice::from_menu_number(difficulty)?,
        )
    }

    fn category_menu() -> String {
        GameFormatter::menu(
            "Which category would you like? Enter the number corresponding to your chosen category.",
            CategoryGroup::ALL
                .iter()
                .map(|group| (group.menu_number(), group.menu_label())),
        )
    }

    fn difficulty_menu() -> String {
        GameFormatter::menu(
            "What level of difficulty would you like? Enter the number corresponding to your chosen difficulty.",
            DifficultyChoice::ALL
                .iter()
                .map(|choice| (choice.menu_number(), choice.menu_label())),
        )
    }

    fn replay_menu() -> String {
        GameFormatter::menu(
            "Would you like to play again? Enter the number corresponding to your choice.",
            [(1, "Yes"), (2, "No")],
        )
    }
}

fn io_error(error: io::Error) -> ConsoleError {
    ConsoleError::Io(error.to_string())
}

impl<R, W> GameConsole for TerminalConsole<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn read_settings(&mut self) -> Result<GameSettings, ConsoleError> {
        if !self.greeted {
            self.say(&GameFormatter::welcome());
            self.greeted = true;
        }

        loop {
            let count = self.ask_number(
                &format!(
                    "How many questions would you like? ({}-{})",
                    MIN_QUESTIONS, MAX_QUESTIONS
                ),
                MIN_QUESTIONS as u32,
                MAX_QUESTIONS as u32,
                Reshow::Question,
            )?;
            let category = self.ask_number(
                &Self::category_menu(),
                1,
                CategoryGroup::ALL.len() as u32,
                Reshow::Question,
            )?;
            let difficulty = self.ask_number(
                &Self::difficulty_menu(),
                1,
                DifficultyChoice::ALL.len() as u32,
                Reshow::Question,
            )?;

            match Self::settings_from(count, category, difficulty) {
                Ok(settings) => return Ok(settings),
                Err(rejected) => self.say(&rejected.to_string()),
            }
        }
    }

    fn announce_game(&mut self, settings: &GameSettings) {
        self.say(&format!(
            "You will be asked {} {} difficulty {} questions.",
            settings.question_count(),
            settings.difficulty().label(),
            settings.category().label()
        ));
        self.say("Beginning game...");
    }

    fn questions_ready(&mut self, requested: usize, available: usize) {
        if let Some(message) = GameFormatter::shortfall(requested, available) {
            self.say(&message);
        }
    }

    fn ask_question(&mut self, prompt: &QuestionPrompt<'_>) -> Result<usize, ConsoleError> {
        let upper = prompt.options.len() as u32;
        let choice = self.ask_number(&GameFormatter::question(prompt), 1, upper, Reshow::HintOnly)?;
        Ok(choice as usize)
    }

    fn show_verdict(&mut self, verdict: &Verdict) {
        self.say(&GameFormatter::verdict(verdict));
    }

    fn show_summary(&mut self, stats: &SessionStats) {
        self.say("");
        self.say(&GameFormatter::summary(stats));
    }

    fn ask_replay(&mut self) -> Result<bool, ConsoleError> {
        Ok(self.ask_number(&Self::replay_menu(), 1, 2, Reshow::Question)? == 1)
    }

    fn farewell(&mut self) {
        self.say(&GameFormatter::farewell());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use trivia_domain::{AnswerOutcome, Question};

    fn console(input: &str) -> TerminalConsole<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(console: TerminalConsole<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_read_settings() {
        let mut c = console("10\n3\n2\n");

        let settings = c.read_settings().unwrap();

        assert_eq!(settings.question_count(), 10);
        assert_eq!(settings.category(), CategoryGroup::Science);
        assert_eq!(settings.difficulty(), DifficultyChoice::Medium);

        let out = printed(c);
        assert!(out.contains("Welcome to Trivia!"));
        assert!(out.contains("How many questions would you like? (5-50)"));
        assert!(out.contains(" 4 - History and The World"));
        assert!(out.contains(" 4 - Mixed Difficulty"));
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut c = console("ten\n70\n4\n12\n5\n4\n");

        let settings = c.read_settings().unwrap();

        assert_eq!(settings.question_count(), 12);
        assert_eq!(settings.category(), CategoryGroup::Random);
        assert_eq!(settings.difficulty(), DifficultyChoice::Mixed);

        let out = printed(c);
        assert!(out.contains("Please only enter a number."));
        assert_eq!(out.matches("Please enter a number from 5 to 50.").count(), 2);
        // Asked once, plus once more after the non-number
        assert_eq!(out.matches("How many questions would you like?").count(), 2);
    }

    #[test]
    fn test_welcome_only_once() {
        let mut c = console("5\n1\n1\n5\n1\n1\n");
        c.read_settings().unwrap();
        c.read_settings().unwrap();
        assert_eq!(printed(c).matches("Welcome to Trivia!").count(), 1);
    }

    #[test]
    fn test_eof_is_closed() {
        let mut c = console("10\n");
        assert!(matches!(c.read_settings(), Err(ConsoleError::Closed)));
    }

    #[test]
    fn test_announce_game() {
        let mut c = console("");
        let settings =
            GameSettings::new(7, CategoryGroup::HistoryAndWorld, DifficultyChoice::Hard).unwrap();

        c.announce_game(&settings);

        let out = printed(c);
        assert!(out.contains("You will be asked 7 hard difficulty history and the world questions."));
        assert!(out.contains("Beginning game..."));
    }

    #[test]
    fn test_ask_question_bounds_by_option_count() {
        let question = Question::new(
            "Largest planet?",
            "Jupiter",
            vec!["Mars".to_string(), "Venus".to_string(), "Earth".to_string()],
            "easy",
            "Science & Nature",
        )
        .unwrap();
        let options: Vec<String> = ["Mars", "Jupiter", "Venus", "Earth"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let prompt = QuestionPrompt {
            number: 1,
            total: 5,
            question: &question,
            options: &options,
        };
        let mut c = console("5\n0\n2\n");

        assert_eq!(c.ask_question(&prompt).unwrap(), 2);

        let out = printed(c);
        assert_eq!(out.matches("Please enter a number from 1 to 4.").count(), 2);
        assert!(out.contains("Largest planet?"));
        assert!(out.contains("4. Earth"));
    }

    #[test]
    fn test_non_number_on_trivia_question_only_repeats_hint() {
        let question = Question::new(
            "Largest planet?",
            "Jupiter",
            vec!["Mars".to_string(), "Venus".to_string(), "Earth".to_string()],
            "easy",
            "Science & Nature",
        )
        .unwrap();
        let options: Vec<String> = ["Mars", "Jupiter", "Venus", "Earth"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let prompt = QuestionPrompt {
            number: 1,
            total: 5,
            question: &question,
            options: &options,
        };
        let mut c = console("jupiter
2
");

        assert_eq!(c.ask_question(&prompt).unwrap(), 2);

        let out = printed(c);
        assert!(out.contains("Please only enter a number."));
        assert_eq!(out.matches("Largest planet?").count(), 1);
        assert_eq!(out.matches("4. Earth").count(), 1);
        assert_eq!(out.matches(PROMPT).count(), 2);
    }

    #[test]
    fn test_non_number_on_menu_repeats_menu() {
        let mut c = console("yes
2
");

        assert!(!c.ask_replay().unwrap());

        let out = printed(c);
        assert!(out.contains("Please only enter a number."));
        assert_eq!(out.matches("Would you like to play again?").count(), 2);
        assert_eq!(out.matches(" 2 - No").count(), 2);
    }

    #[test]
    fn test_verdict_and_summary() {
        let mut c = console("");
        c.show_verdict(&Verdict {
            outcome: AnswerOutcome::Incorrect,
            correct_answer: "Jupiter".to_string(),
        });
        c.show_summary(&SessionStats {
            correct: 3,
            incorrect: 2,
        });

        let out = printed(c);
        assert!(out.contains("The correct answer was Jupiter."));
        assert!(out.contains("You answered 3 questions correctly and 2 incorrectly."));
    }

    #[test]
    fn test_ask_replay() {
        let mut yes = console("1\n");
        assert!(yes.ask_replay().unwrap());

        let mut no = console("2\n");
        assert!(!no.ask_replay().unwrap());

        let mut c = console("");
        c.farewell();
        assert!(printed(c).contains("See you next time!"));
    }
}
