use crate::Error;
use std::collections::VecDeque;

/// Source of answers to yes/no style questions.
pub trait Prompt {
    fn ask(&mut self, question: &str) -> Result<String, Error>;

    /// true for `yes`, false for `no`, InvalidChoice for anything else
    fn confirm(&mut self, question: &str, yes: &str, no: &str) -> Result<bool, Error> {
        decide(&self.ask(question)?, yes, no)
    }
}

/// case-insensitive match of a trimmed answer against two choices
pub fn decide(answer: &str, yes: &str, no: &str) -> Result<bool, Error> {
    let answer = answer.trim().to_uppercase();
    if answer == yes.to_uppercase() {
        Ok(true)
    } else if answer == no.to_uppercase() {
        Ok(false)
    } else {
        Err(Error::InvalidChoice(answer))
    }
}

/// Canned answers, handed out in order.
#[derive(Debug, Clone, Default)]
pub struct Scripted(VecDeque<String>);

impl Scripted {
    pub fn remaining(&self) -> usize {
        self.0.len()
    }
}

impl<S: ToString> FromIterator<S> for Scripted {
    fn from_iter<I: IntoIterator<Item = S>>(answers: I) -> Self {
        Self(answers.into_iter().map(|s| s.to_string()).collect())
    }
}

impl Prompt for Scripted {
    fn ask(&mut self, question: &str) -> Result<String, Error> {
        log::debug!("scripted prompt: {}", question);
        Ok(self.0.pop_front().unwrap_or_default())
    }
}

/// Interactive terminal prompt.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Terminal;

#[cfg(feature = "cli")]
impl Prompt for Terminal {
    fn ask(&mut self, question: &str) -> Result<String, Error> {
        dialoguer::Input::<String>::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))
    }
}
