//! Display projection and the render contract.

use crate::core::Calculator;

/// What the two display lines should show after a mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayFrame {
    /// The primary line: the current operand, verbatim.
    pub primary: String,
    /// The pending line: `"{previous} {symbol}"` while an operation is
    /// pending, otherwise empty.
    pub secondary: String,
}

impl DisplayFrame {
    /// Projects the calculator state into its two display lines.
    #[must_use]
    pub fn project(calc: &Calculator) -> Self {
        let secondary = match calc.operation() {
            Some(op) => format!("{} {}", calc.previous_operand(), op.symbol()),
            None => String::new(),
        };
        Self {
            primary: calc.current_operand().to_string(),
            secondary,
        }
    }
}

/// Where rendered frames go.
///
/// There is no observer binding: whoever mutates the calculator must call
/// `render` afterwards, exactly once per mutation. The router and session
/// uphold this contract for every input path; implementors only have to
/// show the frame.
pub trait DisplaySink {
    /// Shows one frame.
    fn render(&mut self, frame: DisplayFrame);
}

/// A sink that records every frame it is given.
///
/// Lets tests assert both what the display showed last and how many times
/// it was asked to render.
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    frames: Vec<DisplayFrame>,
}

impl RecordingDisplay {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently rendered frame.
    #[must_use]
    pub fn last(&self) -> Option<&DisplayFrame> {
        self.frames.last()
    }

    /// How many frames have been rendered so far.
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.frames.len()
    }

    /// All frames in render order.
    #[must_use]
    pub fn frames(&self) -> &[DisplayFrame] {
        &self.frames
    }
}

impl DisplaySink for RecordingDisplay {
    fn render(&mut self, frame: DisplayFrame) {
        self.frames.push(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    // ===== Projection tests =====

    #[test]
    fn test_project_cleared_state() {
        let calc = Calculator::new();
        let frame = DisplayFrame::project(&calc);
        assert_eq!(frame.primary, "");
        assert_eq!(frame.secondary, "");
    }

    #[test]
    fn test_project_current_verbatim() {
        let mut calc = Calculator::new();
        calc.append_digit('1').unwrap();
        calc.append_digit('.').unwrap();
        let frame = DisplayFrame::project(&calc);
        assert_eq!(frame.primary, "1.");
        assert_eq!(frame.secondary, "");
    }

    #[test]
    fn test_project_pending_line() {
        let mut calc = Calculator::new();
        calc.append_digit('8').unwrap();
        calc.select_operation(Operator::Divide).unwrap();
        let frame = DisplayFrame::project(&calc);
        assert_eq!(frame.primary, "");
        assert_eq!(frame.secondary, "8 ÷");
    }

    #[test]
    fn test_project_pending_line_clears_after_calculate() {
        let mut calc = Calculator::new();
        calc.append_digit('8').unwrap();
        calc.select_operation(Operator::Add).unwrap();
        calc.append_digit('1').unwrap();
        calc.calculate().unwrap();
        let frame = DisplayFrame::project(&calc);
        assert_eq!(frame.primary, "9");
        assert_eq!(frame.secondary, "");
    }

    // ===== RecordingDisplay tests =====

    #[test]
    fn test_recording_display_starts_empty() {
        let display = RecordingDisplay::new();
        assert_eq!(display.render_count(), 0);
        assert!(display.last().is_none());
    }

    #[test]
    fn test_recording_display_keeps_order() {
        let mut display = RecordingDisplay::new();
        display.render(DisplayFrame {
            primary: "1".into(),
            secondary: String::new(),
        });
        display.render(DisplayFrame {
            primary: "12".into(),
            secondary: String::new(),
        });
        assert_eq!(display.render_count(), 2);
        assert_eq!(display.frames()[0].primary, "1");
        assert_eq!(display.last().unwrap().primary, "12");
    }
}
