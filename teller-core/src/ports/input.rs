//! Interactive input boundary
//!
//! The core never touches stdin directly. Operations that need values
//! mid-flight (PIN challenges, confirmations) take an [`InputPort`], and the
//! prompt helpers below run the request/validate step on top of it. End of
//! input is its own terminal state ([`Error::InputExhausted`]), distinct
//! from a validation failure, and always aborts the current prompt
//! sequence.

use crate::domain::result::{Error, Result};

/// One interactive input source.
///
/// Implementations: the CLI's console adapter and the scripted adapter used
/// by tests ([`crate::adapters::scripted::ScriptedInput`]).
pub trait InputPort {
    /// Read one line of input. `Err(InputExhausted)` when the stream ends.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Read one line without echo, for PIN entry.
    fn read_secret(&mut self, prompt: &str) -> Result<String> {
        self.read_line(prompt)
    }

    /// Surface an informational message to the user.
    fn notify(&mut self, message: &str);
}

/// Request an unsigned integer within `[min, max]`.
///
/// Malformed or out-of-range input rejects the request with no partial
/// effect; the caller decides whether to re-prompt.
pub fn prompt_u32_in_range(
    input: &mut dyn InputPort,
    prompt: &str,
    min: u32,
    max: u32,
) -> Result<u32> {
    let line = input.read_line(prompt)?;
    let value: u32 = line
        .trim()
        .parse()
        .map_err(|_| Error::validation(format!("expected a number between {min} and {max}")))?;
    if value < min || value > max {
        return Err(Error::out_of_range(format!(
            "{value} is outside {min}..={max}"
        )));
    }
    Ok(value)
}

/// Request a floating-point amount.
pub fn prompt_amount(input: &mut dyn InputPort, prompt: &str) -> Result<f64> {
    let line = input.read_line(prompt)?;
    let value: f64 = line
        .trim()
        .parse()
        .map_err(|_| Error::validation("invalid amount"))?;
    if !value.is_finite() {
        return Err(Error::validation("invalid amount"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::scripted::ScriptedInput;

    #[test]
    fn test_prompt_u32_in_range() {
        let mut input = ScriptedInput::new(["42"]);
        assert_eq!(prompt_u32_in_range(&mut input, "n", 1, 100).unwrap(), 42);
    }

    #[test]
    fn test_prompt_u32_rejects_out_of_range() {
        let mut input = ScriptedInput::new(["101"]);
        assert!(matches!(
            prompt_u32_in_range(&mut input, "n", 1, 100),
            Err(Error::OutOfRange(_))
        ));
    }

    #[test]
    fn test_prompt_u32_rejects_malformed() {
        let mut input = ScriptedInput::new(["4x"]);
        assert!(matches!(
            prompt_u32_in_range(&mut input, "n", 1, 100),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_prompt_exhausted_is_not_validation() {
        let mut input = ScriptedInput::new(Vec::<String>::new());
        assert!(matches!(
            prompt_u32_in_range(&mut input, "n", 1, 100),
            Err(Error::InputExhausted)
        ));
    }

    #[test]
    fn test_prompt_amount() {
        let mut input = ScriptedInput::new(["-30.5", "abc", "inf"]);
        assert_eq!(prompt_amount(&mut input, "amount").unwrap(), -30.5);
        assert!(matches!(
            prompt_amount(&mut input, "amount"),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            prompt_amount(&mut input, "amount"),
            Err(Error::Validation(_))
        ));
    }
}
