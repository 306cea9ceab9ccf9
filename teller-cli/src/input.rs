//! Console input adapter

use dialoguer::{Input, Password};

use teller_core::domain::result::{Error, Result};
use teller_core::InputPort;

use crate::output;

/// Interactive boundary backed by the terminal.
///
/// PIN entry goes through a no-echo prompt; a closed input stream maps to
/// `InputExhausted` so the in-flight operation aborts with nothing applied.
pub struct ConsoleInput;

impl InputPort for ConsoleInput {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|_| Error::InputExhausted)
    }

    fn read_secret(&mut self, prompt: &str) -> Result<String> {
        Password::new()
            .with_prompt(prompt)
            .interact()
            .map_err(|_| Error::InputExhausted)
    }

    fn notify(&mut self, message: &str) {
        output::info(message);
    }
}
