//! Pure model of the calculator shell around the evaluator: the editable
//! display, the memory accumulator, the history line, and the share text.
//! The platform layer drives this state and renders it; nothing in here
//! performs I/O. Everything lives in explicit fields, and the angle mode
//! is handed into every evaluation instead of being read from anywhere
//! else.

use crate::render::format_value;
use crate::{eval_str, AngleMode, CalcResult};

/// Display text shown after a failed evaluation.
pub const ERROR_DISPLAY: &str = "Error";

/// Memory accumulator behind the M buttons. It operates on whatever
/// numeric value the display currently shows.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Memory(f64);

impl Memory {
    pub fn clear(&mut self) {
        self.0 = 0.0;
    }
    pub fn recall(self) -> f64 {
        self.0
    }
    pub fn add(&mut self, value: f64) {
        self.0 += value;
    }
    pub fn subtract(&mut self, value: f64) {
        self.0 -= value;
    }
}

/// What gets handed to the platform share sheet; serializable when the
/// `serde` feature is enabled.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: Option<String>,
}

/// State of one calculator session.
#[derive(Clone, Debug)]
pub struct Session {
    display: String,
    history: String,
    expression: String,
    last_result: f64,
    memory: Memory,
    pub angle_mode: AngleMode,
}

impl Default for Session {
    fn default() -> Session {
        Session {
            display: "0".to_string(),
            history: String::new(),
            expression: String::new(),
            last_result: 0.0,
            memory: Memory::default(),
            angle_mode: AngleMode::default(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// The `<expression> = <result>` line above the display.
    pub fn history(&self) -> &str {
        &self.history
    }

    pub fn last_result(&self) -> f64 {
        self.last_result
    }

    pub fn memory(&self) -> Memory {
        self.memory
    }

    /// Appends keypad input; a fresh `0` or an error display is replaced.
    pub fn press(&mut self, input: &str) {
        if self.display == "0" || self.display == ERROR_DISPLAY {
            self.display = input.to_string();
        } else {
            self.display.push_str(input);
        }
    }

    pub fn clear_all(&mut self) {
        self.display = "0".to_string();
        self.history.clear();
        self.expression.clear();
    }

    pub fn clear_entry(&mut self) {
        self.display = "0".to_string();
    }

    /// Removes the last typed character; an emptied or error display falls
    /// back to `0`.
    pub fn delete_last(&mut self) {
        if self.display == ERROR_DISPLAY || self.display.chars().count() <= 1 {
            self.display = "0".to_string();
        } else {
            self.display.pop();
        }
    }

    /// Toggles a leading minus on the displayed value.
    pub fn negate(&mut self) {
        if self.display == "0" || self.display == ERROR_DISPLAY {
            return;
        }
        if let Some(stripped) = self.display.strip_prefix('-') {
            self.display = stripped.to_string();
        } else {
            self.display.insert(0, '-');
        }
    }

    /// Evaluates the current display with the session's angle mode. On
    /// success the display shows the result and the history line is
    /// updated; on failure the display shows
    /// [`ERROR_DISPLAY`](ERROR_DISPLAY) and the typed error is handed back
    /// for the error banner.
    pub fn calculate(&mut self) -> CalcResult<f64> {
        let entered = self.display.clone();
        match eval_str(&entered, self.angle_mode) {
            Ok(value) => {
                let shown = format_value(value);
                self.history = format!("{} = {}", entered, shown);
                self.expression = entered;
                self.last_result = value;
                self.display = shown;
                Ok(value)
            }
            Err(e) => {
                self.display = ERROR_DISPLAY.to_string();
                Err(e)
            }
        }
    }

    pub fn memory_clear(&mut self) {
        self.memory.clear();
    }

    /// Puts the memory value onto the display.
    pub fn memory_recall(&mut self) {
        self.display = format_value(self.memory.recall());
    }

    /// Adds the displayed value to memory; a non-numeric display is a
    /// no-op.
    pub fn memory_add(&mut self) {
        if let Ok(value) = self.display.parse::<f64>() {
            self.memory.add(value);
        }
    }

    pub fn memory_subtract(&mut self) {
        if let Ok(value) = self.display.parse::<f64>() {
            self.memory.subtract(value);
        }
    }

    /// Text for the platform share sheet; `None` while there is no result
    /// worth sharing.
    pub fn share_text(&self) -> Option<String> {
        if self.display == ERROR_DISPLAY || self.display == "0" || self.expression.is_empty() {
            return None;
        }
        Some(format!("I calculated: {} = {}", self.expression, self.display))
    }

    /// Fallback text copied to the clipboard when no share sheet exists.
    pub fn clipboard_text(&self) -> Option<String> {
        self.share_text()
            .map(|_| format!("Calculation: {} = {}", self.expression, self.display))
    }

    pub fn share_payload(&self) -> Option<SharePayload> {
        Some(SharePayload {
            title: "My Calculation Result".to_string(),
            text: self.share_text()?,
            url: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_editing() {
        let mut session = Session::new();
        assert_eq!(session.display(), "0");
        session.press("2");
        session.press("+");
        session.press("3");
        assert_eq!(session.display(), "2+3");
        session.delete_last();
        assert_eq!(session.display(), "2+");
        session.clear_entry();
        assert_eq!(session.display(), "0");
        session.press("5");
        session.negate();
        assert_eq!(session.display(), "-5");
        session.negate();
        assert_eq!(session.display(), "5");
        session.delete_last();
        assert_eq!(session.display(), "0");
    }

    #[test]
    fn test_calculate_updates_history() {
        let mut session = Session::new();
        session.press("2+3*4");
        assert_eq!(session.calculate().unwrap(), 14.0);
        assert_eq!(session.display(), "14");
        assert_eq!(session.history(), "2+3*4 = 14");
        assert_eq!(session.last_result(), 14.0);

        // a failed evaluation flips the display into the error state
        session.clear_entry();
        session.press("1/0");
        assert_eq!(session.calculate().unwrap_err().kind(), ErrorKind::Math);
        assert_eq!(session.display(), ERROR_DISPLAY);
        // the next keypress replaces the error text
        session.press("7");
        assert_eq!(session.display(), "7");
    }

    #[test]
    fn test_memory() {
        let mut session = Session::new();
        session.press("5");
        session.calculate().unwrap();
        session.memory_add();
        session.memory_add();
        assert_eq!(session.memory().recall(), 10.0);
        session.memory_subtract();
        assert_eq!(session.memory().recall(), 5.0);
        session.clear_entry();
        session.memory_recall();
        assert_eq!(session.display(), "5");
        session.memory_clear();
        assert_eq!(session.memory().recall(), 0.0);

        // an error display never reaches the accumulator
        session.press("1/0");
        let _ = session.calculate();
        session.memory_add();
        assert_eq!(session.memory().recall(), 0.0);
    }

    #[test]
    fn test_share() {
        let mut session = Session::new();
        assert_eq!(session.share_text(), None);
        session.press("6*7");
        session.calculate().unwrap();
        assert_eq!(
            session.share_text().unwrap(),
            "I calculated: 6*7 = 42"
        );
        assert_eq!(
            session.clipboard_text().unwrap(),
            "Calculation: 6*7 = 42"
        );
        let payload = session.share_payload().unwrap();
        assert_eq!(payload.title, "My Calculation Result");
        assert_eq!(payload.url, None);
    }
}
