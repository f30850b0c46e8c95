use std::fmt::Write;

use clap::ValueEnum;
use quiz_spec::{AnswerSet, RenderPayload, RenderStatus, render_json_ui};

/// How quiz screens are printed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RenderMode {
    Text,
    Json,
}

/// Prints quiz screens for the interactive shell. JSON mode emits one
/// render payload per screen; text mode prints a prompt with numbered options.
pub struct QuizPresenter {
    mode: RenderMode,
    hints: bool,
    title_printed: bool,
    show_answers_json: bool,
}

impl QuizPresenter {
    pub fn new(mode: RenderMode, hints: bool, show_answers_json: bool) -> Self {
        Self {
            mode,
            hints,
            title_printed: false,
            show_answers_json,
        }
    }

    pub fn show_screen(&mut self, payload: &RenderPayload) -> serde_json::Result<()> {
        match self.mode {
            RenderMode::Json => {
                println!("{}", serde_json::to_string_pretty(&render_json_ui(payload))?);
            }
            RenderMode::Text => {
                self.show_title(payload);
                self.show_question(payload);
            }
        }
        Ok(())
    }

    fn show_title(&mut self, payload: &RenderPayload) {
        if !self.title_printed {
            println!("Quiz: {}", payload.quiz_title);
            if self.hints {
                println!("Enter an option number, 'back' for the previous question or 'exit' to quit.");
            }
            self.title_printed = true;
        }
        if self.hints {
            println!(
                "[{}] question {} of {}",
                payload.status.as_str(),
                payload.progress.position,
                payload.progress.total
            );
        }
    }

    fn show_question(&self, payload: &RenderPayload) {
        let Some(question) = &payload.question else {
            return;
        };
        println!(
            "{}/{} {}",
            payload.progress.position, payload.progress.total, question.prompt
        );
        for option in &question.options {
            let marker = if option.selected { "*" } else { " " };
            println!(" {} {}) {}", marker, option.index, option.display);
        }
    }

    pub fn show_input_error(&self, message: &str) {
        eprintln!("Invalid input: {}", message);
    }

    /// Text-mode result banner; the JSON screen already carries the outcome.
    pub fn show_outcome(&self, payload: &RenderPayload) {
        if self.mode == RenderMode::Json {
            return;
        }
        let label = match payload.status {
            RenderStatus::Rejected => "Not eligible ❌",
            RenderStatus::Complete => "Done ✅",
            RenderStatus::NeedInput => return,
        };
        println!("{}", label);
        if let Some(message) = &payload.outcome_message {
            println!("{}", message);
        }
    }

    pub fn show_answers(&self, answer_set: &AnswerSet) {
        match answer_set.to_cbor() {
            Ok(bytes) => {
                println!("Answers (CBOR hex): {}", encode_hex(&bytes));
            }
            Err(err) => {
                eprintln!("Failed to serialize answers to CBOR: {}", err);
            }
        }
        if self.show_answers_json {
            match answer_set.to_json_pretty() {
                Ok(pretty) => println!("{}", pretty),
                Err(err) => {
                    eprintln!("Failed to serialize answers to JSON: {}", err);
                }
            }
        }
    }
}

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(usize),
    Back,
    /// Submit the remembered selection.
    Next,
    Exit,
}

impl Command {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Command::Next);
        }
        match trimmed.to_lowercase().as_str() {
            "b" | "back" => Ok(Command::Back),
            "n" | "next" => Ok(Command::Next),
            "exit" | "quit" => Ok(Command::Exit),
            other => other
                .parse::<usize>()
                .map(Command::Select)
                .map_err(|_| format!("'{}' is not an option number", other)),
        }
    }
}

pub fn encode_hex(bytes: &[u8]) -> String {
    let mut encoded = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        write!(&mut encoded, "{:02x}", byte).expect("writing to string cannot fail");
    }
    encoded
}
