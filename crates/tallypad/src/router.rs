//! Stateless input routing: one state-machine call, then one render.

use crate::core::Calculator;
use crate::display::{DisplayFrame, DisplaySink};
use crate::keypad::{Keypad, PadAction};

/// Dispatches decoded input to the calculator and re-renders.
///
/// The router holds no state of its own. Every recognized input turns into
/// exactly one state-machine call followed by one render; rejections are
/// absorbed here, and the display still re-renders so it always reflects
/// the (possibly unchanged) state. Unrecognized keys produce neither.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputRouter;

impl InputRouter {
    /// Creates a router.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Applies one pad action to the calculator and renders the result.
    pub fn dispatch(
        &self,
        action: PadAction,
        calc: &mut Calculator,
        display: &mut impl DisplaySink,
    ) {
        let outcome = match action {
            PadAction::Digit(d) => calc.append_digit(char::from(b'0' + d)),
            PadAction::Decimal => calc.append_digit('.'),
            PadAction::Operator(op) => calc.select_operation(op),
            PadAction::Equals => calc.calculate(),
            PadAction::Delete => {
                calc.delete_digit();
                Ok(())
            }
            PadAction::AllClear => {
                calc.all_clear();
                Ok(())
            }
        };
        if let Err(rejection) = outcome {
            tracing::debug!(?action, %rejection, "input absorbed");
        }
        display.render(DisplayFrame::project(calc));
    }

    /// Routes a keyboard key-up event by name.
    ///
    /// Returns whether the key was recognized; unrecognized keys cause no
    /// state change and no render.
    pub fn key_up(&self, key: &str, calc: &mut Calculator, display: &mut impl DisplaySink) -> bool {
        match Keypad::key_to_action(key) {
            Some(action) => {
                self.dispatch(action, calc, display);
                true
            }
            None => {
                tracing::trace!(key, "key ignored");
                false
            }
        }
    }

    /// Routes a button click by element id; unknown ids are ignored.
    pub fn click(
        &self,
        keypad: &Keypad,
        element_id: &str,
        calc: &mut Calculator,
        display: &mut impl DisplaySink,
    ) -> bool {
        match keypad.handle_click(element_id) {
            Some(action) => {
                self.dispatch(action, calc, display);
                true
            }
            None => false,
        }
    }
}
