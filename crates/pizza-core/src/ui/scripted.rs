//! Scripted UI provider for driving the app in tests

use super::{MenuItem, NumberValidator, TextValidator, UiProvider, View};
use std::collections::VecDeque;
use std::io;

/// A queued answer to the next prompt
#[derive(Debug, Clone)]
pub(crate) enum Answer {
    /// Pick the entry with this label
    Pick(&'static str),
    /// Pick every entry with one of these labels
    PickMany(Vec<&'static str>),
    Text(&'static str),
    Number(f64),
    /// A number returned without running the validator
    UncheckedNumber(f64),
    Confirm(bool),
}

#[derive(Debug, Default)]
pub(crate) struct ScriptedUi {
    answers: VecDeque<Answer>,
    /// Messages passed to `show_error`
    pub errors: Vec<String>,
    /// Messages passed to `show_info` and `show_success`
    pub infos: Vec<String>,
    /// Validator messages for answers that were rejected and re-asked
    pub rejected: Vec<String>,
    /// Labels offered by the most recent `select_one`
    pub last_choices: Vec<MenuItem>,
    pub renders: usize,
}

impl ScriptedUi {
    pub(crate) fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, expected: &str) -> io::Result<Answer> {
        self.answers.pop_front().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("script exhausted while waiting for {}", expected),
            )
        })
    }

    fn unexpected(expected: &str, got: &Answer) -> io::Error {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("expected {} answer, script has {:?}", expected, got),
        )
    }

    fn index_of(choices: &[MenuItem], label: &str) -> io::Result<usize> {
        choices
            .iter()
            .position(|c| c.label == label)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("'{}' is not among the offered choices", label),
                )
            })
    }
}

impl UiProvider for ScriptedUi {
    fn select_one(&mut self, _title: &str, choices: &[MenuItem]) -> io::Result<usize> {
        self.last_choices = choices.to_vec();
        match self.next("select")? {
            Answer::Pick(label) => Self::index_of(choices, label),
            other => Err(Self::unexpected("select", &other)),
        }
    }

    fn select_many(&mut self, _title: &str, choices: &[MenuItem]) -> io::Result<Vec<usize>> {
        match self.next("multiselect")? {
            Answer::PickMany(labels) => labels
                .into_iter()
                .map(|label| Self::index_of(choices, label))
                .collect(),
            other => Err(Self::unexpected("multiselect", &other)),
        }
    }

    fn prompt_text(&mut self, _title: &str, validate: TextValidator<'_>) -> io::Result<String> {
        loop {
            match self.next("text")? {
                Answer::Text(text) => match validate(text) {
                    Ok(()) => return Ok(text.to_string()),
                    Err(msg) => self.rejected.push(msg),
                },
                other => return Err(Self::unexpected("text", &other)),
            }
        }
    }

    fn prompt_number(&mut self, _title: &str, validate: NumberValidator<'_>) -> io::Result<f64> {
        loop {
            match self.next("number")? {
                Answer::Number(n) => match validate(n) {
                    Ok(()) => return Ok(n),
                    Err(msg) => self.rejected.push(msg),
                },
                Answer::UncheckedNumber(n) => return Ok(n),
                other => return Err(Self::unexpected("number", &other)),
            }
        }
    }

    fn confirm(&mut self, _message: &str) -> io::Result<bool> {
        match self.next("confirm")? {
            Answer::Confirm(yes) => Ok(yes),
            other => Err(Self::unexpected("confirm", &other)),
        }
    }

    fn show_error(&mut self, message: &str) -> io::Result<()> {
        self.errors.push(message.to_string());
        Ok(())
    }

    fn show_info(&mut self, message: &str) -> io::Result<()> {
        self.infos.push(message.to_string());
        Ok(())
    }

    fn render(&mut self, _view: View<'_>) -> io::Result<()> {
        self.renders += 1;
        Ok(())
    }
}
