//! Top-level wiring: one calculator, one display, one history panel.

use crate::core::Calculator;
use crate::display::{DisplayFrame, DisplaySink};
use crate::history::{HistoryEntry, HistoryPanel};
use crate::keypad::{Keypad, PadAction};
use crate::router::InputRouter;
use crate::store::SlotStore;

/// An explicitly constructed calculator session.
///
/// Owns the calculator, the display sink, the history panel, and the slot
/// store, and runs every input through the mutate-then-render contract.
/// Sessions are plain values — hosts construct them with whatever
/// collaborators they want and can run several independently.
#[derive(Debug)]
pub struct CalculatorSession<D, S> {
    calc: Calculator,
    display: D,
    history: HistoryPanel,
    store: S,
    keypad: Keypad,
    router: InputRouter,
}

impl<D: DisplaySink, S: SlotStore> CalculatorSession<D, S> {
    /// Creates a session around the given collaborators and renders the
    /// initial (empty) frame.
    pub fn new(mut display: D, store: S) -> Self {
        let calc = Calculator::new();
        display.render(DisplayFrame::project(&calc));
        Self {
            calc,
            display,
            history: HistoryPanel::new(),
            store,
            keypad: Keypad::new(),
            router: InputRouter::new(),
        }
    }

    /// Applies one pad action.
    pub fn press(&mut self, action: PadAction) {
        self.router.dispatch(action, &mut self.calc, &mut self.display);
    }

    /// Routes a keyboard key-up event. Returns whether it was recognized.
    pub fn key_up(&mut self, key: &str) -> bool {
        self.router.key_up(key, &mut self.calc, &mut self.display)
    }

    /// Routes a keypad button click by element id.
    pub fn click(&mut self, element_id: &str) -> bool {
        let action = self.keypad.handle_click(element_id);
        match action {
            Some(action) => {
                self.press(action);
                true
            }
            None => false,
        }
    }

    /// Saves the current value into the history panel and the store's
    /// single slot. Nothing is saved while the operand is empty. Returns
    /// whether an entry was added.
    pub fn save_result(&mut self) -> bool {
        let value = self.calc.current_operand().to_string();
        self.history.save(&value, &mut self.store)
    }

    /// Recalls the most recent saved result into the calculator and
    /// re-renders. No-op (and no render) while the history is empty.
    pub fn recall_last(&mut self) {
        if self.history.is_empty() {
            return;
        }
        self.history.recall_last(&mut self.calc);
        self.display.render(DisplayFrame::project(&self.calc));
    }

    /// Deletes one history entry.
    pub fn delete_entry(&mut self, index: usize) -> Option<HistoryEntry> {
        self.history.delete(index)
    }

    /// The calculator state.
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    /// The display sink.
    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    /// The history panel.
    #[must_use]
    pub fn history(&self) -> &HistoryPanel {
        &self.history
    }

    /// The slot store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The keypad button table.
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::RecordingDisplay;
    use crate::store::{MemoryStore, LAST_RESULT_KEY};

    fn session() -> CalculatorSession<RecordingDisplay, MemoryStore> {
        CalculatorSession::new(RecordingDisplay::new(), MemoryStore::new())
    }

    // ===== Construction =====

    #[test]
    fn test_new_renders_initial_frame() {
        let session = session();
        assert_eq!(session.display().render_count(), 1);
        assert_eq!(session.display().last().unwrap(), &DisplayFrame::default());
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = session();
        let mut b = session();
        a.key_up("5");
        b.key_up("7");
        assert_eq!(a.calculator().current_operand(), "5");
        assert_eq!(b.calculator().current_operand(), "7");
    }

    // ===== Input paths =====

    #[test]
    fn test_keyboard_calculation() {
        let mut session = session();
        for key in ["5", "+", "3", "Enter"] {
            assert!(session.key_up(key));
        }
        assert_eq!(session.calculator().current_operand(), "8");
        assert_eq!(session.display().last().unwrap().primary, "8");
    }

    #[test]
    fn test_click_calculation() {
        let mut session = session();
        for id in ["btn-7", "btn-times", "btn-6", "btn-equals"] {
            assert!(session.click(id));
        }
        assert_eq!(session.calculator().current_operand(), "42");
    }

    #[test]
    fn test_click_unknown_id_no_render() {
        let mut session = session();
        let before = session.display().render_count();
        assert!(!session.click("btn-sqrt"));
        assert_eq!(session.display().render_count(), before);
    }

    #[test]
    fn test_press_renders_each_mutation() {
        let mut session = session();
        session.press(PadAction::Digit(1));
        session.press(PadAction::Digit(2));
        // initial frame + one per press
        assert_eq!(session.display().render_count(), 3);
    }

    // ===== History wiring =====

    #[test]
    fn test_save_result_mirrors_to_store() {
        let mut session = session();
        for key in ["5", "+", "3", "Enter"] {
            session.key_up(key);
        }
        assert!(session.save_result());
        assert_eq!(session.history().len(), 1);
        assert_eq!(
            session.store().read(LAST_RESULT_KEY),
            Some("8".to_string())
        );
    }

    #[test]
    fn test_save_result_empty_operand_saves_nothing() {
        let mut session = session();
        assert!(!session.save_result());
        assert!(session.history().is_empty());
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_recall_last_renders() {
        let mut session = session();
        session.key_up("9");
        session.save_result();
        session.key_up("Escape");
        let before = session.display().render_count();
        session.recall_last();
        assert_eq!(session.calculator().current_operand(), "9");
        assert_eq!(session.display().render_count(), before + 1);
    }

    #[test]
    fn test_recall_on_empty_history_no_render() {
        let mut session = session();
        let before = session.display().render_count();
        session.recall_last();
        assert_eq!(session.display().render_count(), before);
    }

    #[test]
    fn test_delete_entry() {
        let mut session = session();
        session.key_up("4");
        session.save_result();
        let removed = session.delete_entry(0).unwrap();
        assert_eq!(removed.display_text, "4");
        assert!(session.history().placeholder_visible());
    }
}
