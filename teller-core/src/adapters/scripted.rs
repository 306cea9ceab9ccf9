//! Scripted input adapter
//!
//! Feeds a fixed sequence of lines to the interactive boundary and records
//! every notice it is asked to surface. Used by the test suites in place of
//! a console.

use std::collections::VecDeque;

use crate::domain::result::{Error, Result};
use crate::ports::input::InputPort;

#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    pub notices: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            notices: Vec::new(),
        }
    }

    /// Lines left unconsumed by the operation under test.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputPort for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Result<String> {
        self.lines.pop_front().ok_or(Error::InputExhausted)
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
