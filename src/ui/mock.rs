//! Scripted input and recording output for testing

use std::cell::RefCell;
use std::collections::VecDeque;

use super::input::{InputError, Key, Result, UserInput};
use super::output::OutputWriter;

/// One scripted user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Line(String),
    Key(Key),
    Confirm(Option<bool>),
}

/// Input source that replays predetermined steps
///
/// Reading past the end of the script yields [`InputError::Closed`], so a
/// test whose script is too short fails instead of hanging.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    steps: RefCell<VecDeque<Step>>,
}

impl ScriptedInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a typed line
    #[must_use]
    pub fn line(self, text: &str) -> Self {
        self.steps.borrow_mut().push_back(Step::Line(text.to_string()));
        self
    }

    /// Queue several typed lines
    #[must_use]
    pub fn lines(self, texts: &[&str]) -> Self {
        texts.iter().fold(self, |input, text| input.line(text))
    }

    /// Queue a key press
    #[must_use]
    pub fn key(self, key: Key) -> Self {
        self.steps.borrow_mut().push_back(Step::Key(key));
        self
    }

    /// Queue the escape key
    #[must_use]
    pub fn escape(self) -> Self {
        self.key(Key::Escape)
    }

    /// Queue an "any other key" press
    #[must_use]
    pub fn any_key(self) -> Self {
        self.key(Key::Enter)
    }

    /// Queue an answer to a confirmation prompt
    #[must_use]
    pub fn confirm(self, answer: Option<bool>) -> Self {
        self.steps.borrow_mut().push_back(Step::Confirm(answer));
        self
    }

    /// Number of steps not consumed yet
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.steps.borrow().len()
    }

    fn next(&self) -> Result<Step> {
        self.steps.borrow_mut().pop_front().ok_or(InputError::Closed)
    }
}

impl UserInput for ScriptedInput {
    fn read_line(&self, _prompt: &str) -> Result<String> {
        match self.next()? {
            Step::Line(text) => Ok(text),
            other => panic!("script expected a line, found {other:?}"),
        }
    }

    fn read_key(&self) -> Result<Key> {
        match self.next()? {
            Step::Key(key) => Ok(key),
            other => panic!("script expected a key press, found {other:?}"),
        }
    }

    fn prompt_confirm(&self, _prompt: &str, _default: bool) -> Result<Option<bool>> {
        match self.next()? {
            Step::Confirm(answer) => Ok(answer),
            other => panic!("script expected a confirmation, found {other:?}"),
        }
    }
}

/// Message level for captured output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Normal,
    Error,
    Success,
    Warning,
    Info,
}

/// Output writer that keeps every message for later assertions
#[derive(Debug, Default)]
pub struct RecordingWriter {
    messages: RefCell<Vec<(MessageLevel, String)>>,
}

impl RecordingWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages.borrow().clone()
    }

    /// Everything written, one message per line
    #[must_use]
    pub fn transcript(&self) -> String {
        self.messages
            .borrow()
            .iter()
            .map(|(_, msg)| msg.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.borrow().iter().any(|(_, msg)| msg.contains(needle))
    }

    #[must_use]
    pub fn count(&self, level: MessageLevel) -> usize {
        self.messages.borrow().iter().filter(|(l, _)| *l == level).count()
    }

    fn push(&self, level: MessageLevel, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}

impl OutputWriter for RecordingWriter {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }

    fn clear(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_replays_in_order() {
        let input = ScriptedInput::new().line("1").escape().confirm(Some(true));

        assert_eq!(input.read_line(">>>").unwrap(), "1");
        assert_eq!(input.read_key().unwrap(), Key::Escape);
        assert_eq!(input.prompt_confirm("ok?", false).unwrap(), Some(true));
        assert!(matches!(input.read_line(">>>"), Err(InputError::Closed)));
    }

    #[test]
    fn test_recording_writer_levels() {
        let writer = RecordingWriter::new();
        writer.success("done");
        writer.error("failed");
        writer.clear();

        assert_eq!(writer.count(MessageLevel::Success), 1);
        assert_eq!(writer.count(MessageLevel::Error), 1);
        assert!(writer.contains("fail"));
        assert_eq!(writer.transcript(), "done\nfailed");
    }
}
